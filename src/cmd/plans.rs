use crate::data::catalog::PlanCatalog;
use crate::data::plan::{plan_info, suggested_time, PlanType};
use anyhow::Result;
use std::path::Path;

pub fn run(dir: &Path) -> Result<()> {
    let catalog = PlanCatalog::load(dir);
    write_plans(&catalog, &mut std::io::stdout())
}

pub(crate) fn write_plans<W: std::io::Write>(catalog: &PlanCatalog, out: &mut W) -> Result<()> {
    writeln!(out, "Reading Plans")?;
    writeln!(out, "---")?;
    for plan in PlanType::ALL {
        let info = plan_info(plan);
        let loaded = catalog.len(plan);
        writeln!(out, "{} — {}", plan, info.name)?;
        writeln!(out, "  {}", info.description)?;
        writeln!(
            out,
            "  {} days, {} chapters (avg {:.2}/day, {})",
            info.total_days, info.total_chapters, info.avg_chapters_per_day, suggested_time(plan)
        )?;
        if loaded > 0 {
            writeln!(out, "  {} reading(s) loaded", loaded)?;
        } else {
            writeln!(out, "  no plan file loaded — using fallback readings")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
