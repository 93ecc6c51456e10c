use crate::data::catalog::PlanCatalog;
use crate::data::progress::ProgressStore;
use crate::ui::calendar_view::{run_app, App};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use chrono::Local;
use std::path::Path;

pub fn run(dir: &Path) -> Result<()> {
    let catalog = PlanCatalog::load(dir);
    let mut store = ProgressStore::open(dir);

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;

    let today = Local::now().date_naive();
    let mut app = App::new(&catalog, &mut store, today, dir.to_path_buf());

    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    // The store writes through on every mutation, so there is nothing to
    // flush here; just surface the UI result.
    result
}
