use crate::data::catalog::{
    EthiopianMonth, EthiopianReading, EthiopianSource, MonthlyPlan, Nt90Source, Ot365Source,
    PlanDay, PLANS_DIR,
};
use crate::data::{
    CompletionData, NotesData, Persistable, Preferences, StartDateData, StreakRecord,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn run(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create dir {}", dir.display()))?;
    run_in_dir(dir)?;
    println!("Data files initialized in {}", dir.display());
    Ok(())
}

/// Writes all default data files into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    Preferences::default().save_to(dir)?;
    CompletionData::default().save_to(dir)?;
    NotesData::default().save_to(dir)?;
    StreakRecord::default().save_to(dir)?;
    StartDateData::default().save_to(dir)?;
    write_plans(dir)?;
    Ok(())
}

fn write_plans(dir: &Path) -> Result<()> {
    let plans = dir.join(PLANS_DIR);
    fs::create_dir_all(&plans)
        .with_context(|| format!("failed to create dir {}", plans.display()))?;
    write_json(&plans.join("nt90.json"), &default_nt90())?;
    write_json(&plans.join("ot365.json"), &default_ot365())?;
    write_json(&plans.join("ethiopian.json"), &default_ethiopian())?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

fn day(n: u32, reading: &str, theme: &str, chapters: u32) -> PlanDay {
    PlanDay {
        day: n,
        reading: reading.to_string(),
        theme: theme.to_string(),
        chapters: Some(chapters),
    }
}

/// Starter schedule covering the first two weeks of the 90-day New
/// Testament plan; a full plan file can be dropped into plans/nt90.json.
fn default_nt90() -> Nt90Source {
    Nt90Source {
        schedule: vec![
            day(1, "Matthew 1-4", "Birth & Early Ministry", 4),
            day(2, "Matthew 5-7", "Sermon on the Mount", 3),
            day(3, "Matthew 8-10", "Miracles & Mission", 3),
            day(4, "Matthew 11-13", "Parables of the Kingdom", 3),
            day(5, "Matthew 14-16", "Feeding the Multitudes", 3),
            day(6, "Matthew 17-19", "The Transfiguration", 3),
            day(7, "Matthew 20-22", "Entry into Jerusalem", 3),
            day(8, "Matthew 23-25", "The Olivet Discourse", 3),
            day(9, "Matthew 26-28", "Death & Resurrection", 3),
            day(10, "Mark 1-3", "The Servant King", 3),
            day(11, "Mark 4-6", "Storms & Sending", 3),
            day(12, "Mark 7-9", "Who Do You Say I Am", 3),
            day(13, "Mark 10-12", "The Road to Jerusalem", 3),
            day(14, "Mark 13-16", "The Passion of the Servant", 4),
        ],
    }
}

fn default_ot365() -> Ot365Source {
    Ot365Source {
        monthly_plans: vec![
            MonthlyPlan {
                month: "January".to_string(),
                focus: Some("Beginnings".to_string()),
                days: vec![
                    day(1, "Genesis 1-3", "God Creates the World", 3),
                    day(2, "Genesis 4-7", "The Flood", 4),
                    day(3, "Genesis 8-11", "A New Start", 4),
                    day(4, "Genesis 12-15", "The Call of Abram", 4),
                    day(5, "Genesis 16-18", "Covenant Promises", 3),
                    day(6, "Genesis 19-22", "Testing of Abraham", 4),
                    day(7, "Genesis 23-26", "Isaac and Rebekah", 4),
                ],
            },
            MonthlyPlan {
                month: "February".to_string(),
                focus: Some("Out of Egypt".to_string()),
                days: vec![
                    day(32, "Exodus 1-3", "Deliverance Begins", 3),
                    day(33, "Exodus 4-6", "Signs and Wonders", 3),
                    day(34, "Exodus 7-9", "The Plagues", 3),
                    day(35, "Exodus 10-12", "Passover", 3),
                ],
            },
        ],
    }
}

fn default_ethiopian() -> EthiopianSource {
    EthiopianSource {
        months: vec![
            EthiopianMonth {
                name: "Meskerem".to_string(),
                feast: Some("Enkutatash".to_string()),
                readings: vec![
                    EthiopianReading {
                        day: 1,
                        reading: "Genesis 1-2".to_string(),
                        theme: "Creation".to_string(),
                        chapters: Some(2),
                        feast: None,
                    },
                    EthiopianReading {
                        day: 2,
                        reading: "Genesis 3-4".to_string(),
                        theme: "The Fall".to_string(),
                        chapters: Some(2),
                        feast: None,
                    },
                    EthiopianReading {
                        day: 17,
                        reading: "John 3-4".to_string(),
                        theme: "The Finding of the True Cross".to_string(),
                        chapters: Some(2),
                        feast: Some("Meskel".to_string()),
                    },
                ],
            },
            EthiopianMonth {
                name: "Tikimt".to_string(),
                feast: None,
                readings: vec![
                    EthiopianReading {
                        day: 1,
                        reading: "Exodus 1-3".to_string(),
                        theme: "Bondage in Egypt".to_string(),
                        chapters: Some(3),
                        feast: None,
                    },
                    EthiopianReading {
                        day: 2,
                        reading: "Exodus 4-6".to_string(),
                        theme: "Moses Sent".to_string(),
                        chapters: Some(3),
                        feast: None,
                    },
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::PlanCatalog;
    use crate::data::plan::PlanType;
    use crate::data::progress::ProgressStore;
    use tempfile::TempDir;

    #[test]
    fn test_run_in_dir_creates_all_files() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        for name in [
            "config.yaml",
            "completed.json",
            "notes.json",
            "streak.json",
            "start_dates.json",
        ] {
            assert!(tmp.path().join(name).exists(), "{name} missing");
        }
        for name in ["nt90.json", "ot365.json", "ethiopian.json"] {
            assert!(
                tmp.path().join(PLANS_DIR).join(name).exists(),
                "plans/{name} missing"
            );
        }
    }

    #[test]
    fn test_initialized_plans_load_into_catalog() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let catalog = PlanCatalog::load(tmp.path());
        assert_eq!(catalog.len(PlanType::Nt90), 14);
        assert_eq!(catalog.len(PlanType::Ot365), 11);
        assert_eq!(catalog.len(PlanType::Ethiopian), 5);
    }

    #[test]
    fn test_initialized_store_is_empty() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let store = ProgressStore::open(tmp.path());
        let stats = store.statistics();
        assert_eq!(stats.total_completed, 0);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(store.current_plan(), PlanType::Nt90);
    }

    #[test]
    fn test_ot365_sample_is_sorted_after_flatten() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        let catalog = PlanCatalog::load(tmp.path());
        let days: Vec<u32> = catalog
            .entries(PlanType::Ot365)
            .iter()
            .map(|e| e.day)
            .collect();
        let mut sorted = days.clone();
        sorted.sort();
        assert_eq!(days, sorted);
    }
}
