use crate::calc::day_number::day_number;
use crate::data::catalog::PlanCatalog;
use crate::data::plan::PlanType;
use crate::data::progress::ProgressStore;
use chrono::NaiveDate;

/// The record the rendering layer displays for one date. Always present:
/// every failure path resolves to a placeholder instead of an absence.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingDisplay {
    pub day: u32,
    pub title: String,
    pub passages: Vec<String>,
    pub theme: String,
    pub chapters: u32,
    pub month: Option<String>,
    pub focus: Option<String>,
    pub feast: Option<String>,
}

#[derive(Clone, Copy)]
enum Testament {
    Old,
    New,
}

/// Resolves the scheduled reading for a date under a plan. Never fails:
/// an empty catalog or an unmatched day number yields the testament's
/// placeholder record, with the day number still computed from the cycle.
pub fn get_reading(
    catalog: &PlanCatalog,
    store: &mut ProgressStore,
    date: NaiveDate,
    plan: PlanType,
) -> ReadingDisplay {
    let day = day_number(store, date, plan);
    match plan {
        PlanType::Nt90 => resolve_flat(catalog, plan, day, Testament::New),
        PlanType::Ot365 => resolve_flat(catalog, plan, day, Testament::Old),
        PlanType::Ethiopian => resolve_ethiopian(catalog, day),
    }
}

fn resolve_flat(
    catalog: &PlanCatalog,
    plan: PlanType,
    day: u32,
    testament: Testament,
) -> ReadingDisplay {
    match catalog.lookup(plan, day) {
        Some(entry) => ReadingDisplay {
            day: entry.day,
            title: format!("Day {}: {}", entry.day, entry.theme),
            passages: entry.passages.clone(),
            theme: entry.theme.clone(),
            chapters: entry.chapters,
            month: entry.month.clone(),
            focus: entry.focus.clone(),
            feast: None,
        },
        None => fallback_reading(day, testament),
    }
}

fn resolve_ethiopian(catalog: &PlanCatalog, day: u32) -> ReadingDisplay {
    match catalog.lookup(PlanType::Ethiopian, day) {
        Some(entry) => {
            let month = entry.month.clone().unwrap_or_default();
            let title = match entry.feast.as_deref() {
                Some(feast) => format!("{} {} - {}", month, entry.day, feast),
                None => format!("{} {}", month, entry.day),
            };
            ReadingDisplay {
                day: entry.day,
                title,
                passages: entry.passages.clone(),
                theme: entry.theme.clone(),
                chapters: entry.chapters,
                month: entry.month.clone(),
                focus: None,
                feast: entry.feast.clone(),
            }
        }
        None => fallback_reading(day, Testament::Old),
    }
}

/// Fixed placeholder shown when no schedule entry is available, so the UI
/// never shows a hole.
fn fallback_reading(day: u32, testament: Testament) -> ReadingDisplay {
    match testament {
        Testament::Old => ReadingDisplay {
            day,
            title: format!("OT365 Day {day}"),
            passages: vec!["Genesis 1-3".to_string()],
            theme: "God Creates the World".to_string(),
            chapters: 3,
            month: None,
            focus: None,
            feast: None,
        },
        Testament::New => ReadingDisplay {
            day,
            title: format!("NT90 Day {day}"),
            passages: vec!["Matthew 1-4".to_string()],
            theme: "Birth & Early Ministry".to_string(),
            chapters: 4,
            month: None,
            focus: None,
            feast: None,
        },
    }
}
