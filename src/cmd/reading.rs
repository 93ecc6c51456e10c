use crate::calc::resolver::{get_reading, ReadingDisplay};
use crate::data::catalog::PlanCatalog;
use crate::data::plan::PlanType;
use crate::data::progress::ProgressStore;
use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;

pub fn run(dir: &Path, date: Option<&str>, plan: Option<&str>) -> Result<()> {
    let date = match date {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => bail!("Invalid date '{}' — use YYYY-MM-DD.", raw),
        },
        None => Local::now().date_naive(),
    };

    let catalog = PlanCatalog::load(dir);
    let mut store = ProgressStore::open(dir);

    let plan = match plan {
        Some(raw) => match PlanType::parse(raw) {
            Some(p) => p,
            None => bail!("Unknown plan type '{}' — use nt90, ot365, or ethiopian.", raw),
        },
        None => store.current_plan(),
    };

    let reading = get_reading(&catalog, &mut store, date, plan);
    let completed = store.is_complete(date);
    let note = store.notes_for(date).to_string();
    write_reading(&reading, date, plan, completed, &note, &mut std::io::stdout())
}

pub(crate) fn write_reading<W: std::io::Write>(
    reading: &ReadingDisplay,
    date: NaiveDate,
    plan: PlanType,
    completed: bool,
    note: &str,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{} — {}", date.format("%Y-%m-%d"), plan)?;
    writeln!(out, "---")?;
    writeln!(out, "{:<12} {}", "Reading:", reading.title)?;
    writeln!(out, "{:<12} {}", "Passages:", reading.passages.join(", "))?;
    writeln!(out, "{:<12} {}", "Theme:", reading.theme)?;
    writeln!(out, "{:<12} {}", "Chapters:", reading.chapters)?;
    if let Some(month) = &reading.month {
        writeln!(out, "{:<12} {}", "Month:", month)?;
    }
    if let Some(focus) = &reading.focus {
        writeln!(out, "{:<12} {}", "Focus:", focus)?;
    }
    if let Some(feast) = &reading.feast {
        writeln!(out, "{:<12} {}", "Feast:", feast)?;
    }
    writeln!(out, "{:<12} {}", "Completed:", if completed { "yes" } else { "no" })?;
    if !note.is_empty() {
        writeln!(out, "{:<12} {}", "Notes:", note)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_reading() -> ReadingDisplay {
        ReadingDisplay {
            day: 2,
            title: "Day 2: Sermon on the Mount".to_string(),
            passages: vec!["Matthew 5-7".to_string()],
            theme: "Sermon on the Mount".to_string(),
            chapters: 3,
            month: None,
            focus: None,
            feast: None,
        }
    }

    #[test]
    fn test_write_reading_basic_fields() {
        let mut buf = Vec::new();
        write_reading(
            &sample_reading(),
            d(2024, 6, 10),
            PlanType::Nt90,
            true,
            "",
            &mut buf,
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("2024-06-10 — nt90"));
        assert!(out.contains("Day 2: Sermon on the Mount"));
        assert!(out.contains("Matthew 5-7"));
        assert!(out.contains("Completed:   yes"));
        assert!(!out.contains("Month:"));
        assert!(!out.contains("Notes:"));
    }

    #[test]
    fn test_write_reading_optional_fields_and_note() {
        let mut reading = sample_reading();
        reading.month = Some("January".to_string());
        reading.focus = Some("Beginnings".to_string());
        reading.feast = Some("Enkutatash".to_string());
        let mut buf = Vec::new();
        write_reading(
            &reading,
            d(2024, 1, 1),
            PlanType::Ot365,
            false,
            "slow start",
            &mut buf,
        )
        .unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Month:       January"));
        assert!(out.contains("Focus:       Beginnings"));
        assert!(out.contains("Feast:       Enkutatash"));
        assert!(out.contains("Completed:   no"));
        assert!(out.contains("Notes:       slow start"));
    }

    #[test]
    fn test_run_rejects_bad_date() {
        let tmp = TempDir::new().unwrap();
        let result = run(tmp.path(), Some("June 10"), None);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("June 10"));
    }

    #[test]
    fn test_run_rejects_bad_plan() {
        let tmp = TempDir::new().unwrap();
        let result = run(tmp.path(), Some("2024-06-10"), Some("kjv"));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("kjv"));
    }

    #[test]
    fn test_run_with_empty_catalog_still_succeeds() {
        // No plan files at all: the fallback record keeps the command total.
        let tmp = TempDir::new().unwrap();
        let result = run(tmp.path(), Some("2024-06-10"), Some("nt90"));
        assert!(result.is_ok());
    }
}
