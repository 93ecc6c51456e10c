use crate::data::plan::{plan_info, reading_stats, suggested_time, PlanType};
use crate::data::progress::{ProgressStore, Statistics};
use anyhow::Result;
use std::path::Path;

pub fn run(dir: &Path) -> Result<()> {
    let store = ProgressStore::open(dir);
    let plan = store.current_plan();
    write_stats(&store.statistics(), plan, &mut std::io::stdout())
}

pub(crate) fn write_stats<W: std::io::Write>(
    stats: &Statistics,
    plan: PlanType,
    out: &mut W,
) -> Result<()> {
    let info = plan_info(plan);
    let progress = reading_stats(plan, stats.total_completed);

    writeln!(out, "Reading Progress — {}", info.name)?;
    writeln!(out, "---")?;
    writeln!(out, "{:<22} {}", "Total Completed:", stats.total_completed)?;
    writeln!(
        out,
        "{:<22} {} day(s)",
        "Current Streak:", stats.current_streak
    )?;
    writeln!(
        out,
        "{:<22} {} day(s)",
        "Longest Streak:", stats.longest_streak
    )?;
    writeln!(out, "---")?;
    writeln!(
        out,
        "{:<22} ({} / {})  = {}%",
        "Plan Progress:", progress.completed, progress.total_days, progress.percent
    )?;
    writeln!(out, "{:<22} {}", "Remaining:", progress.remaining)?;
    writeln!(out, "{:<22} {}", "Suggested Time:", suggested_time(plan))?;
    writeln!(out, "---")?;
    Ok(())
}
