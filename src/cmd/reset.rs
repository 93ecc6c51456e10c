use crate::data::progress::ProgressStore;
use anyhow::{bail, Result};
use std::path::Path;

/// Clears all persisted progress. Destructive, so it refuses to run without
/// the explicit `--force` flag.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    if !force {
        bail!("This clears all progress, notes, and streaks. Re-run with --force to confirm.");
    }
    let mut store = ProgressStore::open(dir);
    store.reset();
    println!("All progress cleared.");
    Ok(())
}
