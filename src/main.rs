mod calc;
mod cmd;
mod data;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lectio", about = "Bible reading plan calendar")]
struct Cli {
    /// Path to the data directory containing progress and plan files (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize data files, including sample reading plans
    Init,
    /// Print completion and streak statistics for the current plan
    Stats,
    /// Print the scheduled reading for a date (default: today)
    Reading {
        /// Date in YYYY-MM-DD form
        date: Option<String>,
        /// Plan type: nt90, ot365, or ethiopian (default: current plan)
        #[arg(short, long)]
        plan: Option<String>,
    },
    /// List the reading plans and their metadata
    Plans,
    /// Clear all progress, notes, and streaks
    Reset {
        /// Confirm the reset
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Resolve data_dir to an absolute path so file I/O works regardless of
    // future directory changes within the process.
    let data_dir = if cli.data_dir.is_absolute() {
        cli.data_dir.clone()
    } else {
        std::env::current_dir()?.join(&cli.data_dir)
    };

    // Auto-init when the data directory is missing or empty and the user did
    // not explicitly invoke the `init` subcommand.
    let is_init_command = matches!(cli.command, Some(Commands::Init));
    if !is_init_command && dir_needs_init(&data_dir) {
        eprintln!(
            "Data directory '{}' is missing or empty — running init...",
            data_dir.display()
        );
        cmd::init::run(&data_dir)?;
    }

    match cli.command {
        None => cmd::root::run(&data_dir),
        Some(Commands::Init) => cmd::init::run(&data_dir),
        Some(Commands::Stats) => cmd::stats::run(&data_dir),
        Some(Commands::Reading { date, plan }) => {
            cmd::reading::run(&data_dir, date.as_deref(), plan.as_deref())
        }
        Some(Commands::Plans) => cmd::plans::run(&data_dir),
        Some(Commands::Reset { force }) => cmd::reset::run(&data_dir, force),
    }
}

/// Returns true when `dir` does not exist or exists but contains no files.
fn dir_needs_init(dir: &std::path::Path) -> bool {
    if !dir.exists() {
        return true;
    }
    dir.read_dir()
        .map(|mut entries| entries.next().is_none())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_dir_needs_init_nonexistent() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("does_not_exist");
        assert!(dir_needs_init(&missing));
    }

    #[test]
    fn test_dir_needs_init_empty_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(dir_needs_init(tmp.path()));
    }

    #[test]
    fn test_dir_needs_init_nonempty_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file.txt"), "data").unwrap();
        assert!(!dir_needs_init(tmp.path()));
    }
}
