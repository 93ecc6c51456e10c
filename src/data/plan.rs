use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The three reading-schedule variants. Serialized as the lowercase strings
/// used in persisted preferences and start-date keys.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Nt90,
    Ot365,
    Ethiopian,
}

impl PlanType {
    pub const ALL: [PlanType; 3] = [PlanType::Nt90, PlanType::Ot365, PlanType::Ethiopian];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Nt90 => "nt90",
            PlanType::Ot365 => "ot365",
            PlanType::Ethiopian => "ethiopian",
        }
    }

    pub fn parse(s: &str) -> Option<PlanType> {
        match s {
            "nt90" => Some(PlanType::Nt90),
            "ot365" => Some(PlanType::Ot365),
            "ethiopian" => Some(PlanType::Ethiopian),
            _ => None,
        }
    }

    /// The plan shown after this one when cycling through plans in the UI.
    pub fn next(&self) -> PlanType {
        match self {
            PlanType::Nt90 => PlanType::Ot365,
            PlanType::Ot365 => PlanType::Ethiopian,
            PlanType::Ethiopian => PlanType::Nt90,
        }
    }
}

impl Default for PlanType {
    fn default() -> Self {
        PlanType::Nt90
    }
}

impl std::fmt::Display for PlanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which calendar labeling the month header uses.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarType {
    Gregorian,
    Ethiopian,
}

impl CalendarType {
    pub fn toggled(&self) -> CalendarType {
        match self {
            CalendarType::Gregorian => CalendarType::Ethiopian,
            CalendarType::Ethiopian => CalendarType::Gregorian,
        }
    }
}

impl Default for CalendarType {
    fn default() -> Self {
        CalendarType::Gregorian
    }
}

/// One normalized schedule entry. All three source shapes collapse into this
/// at the catalog boundary; nothing downstream branches on raw source shape.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingPlanEntry {
    pub day: u32,
    pub passages: Vec<String>,
    pub theme: String,
    pub chapters: u32,
    pub month: Option<String>,
    pub focus: Option<String>,
    pub feast: Option<String>,
}

/// Static per-plan metadata. `total_days` is the cycle length used by the
/// day-number calculation for that plan.
#[derive(Clone, Copy, Debug)]
pub struct PlanInfo {
    pub name: &'static str,
    pub total_days: u32,
    pub description: &'static str,
    pub total_chapters: u32,
    pub avg_chapters_per_day: f64,
}

pub fn plan_info(plan: PlanType) -> PlanInfo {
    match plan {
        PlanType::Nt90 => PlanInfo {
            name: "90-Day New Testament",
            total_days: 90,
            description: "Read through the New Testament in 90 days",
            total_chapters: 260,
            avg_chapters_per_day: 2.89,
        },
        PlanType::Ot365 => PlanInfo {
            name: "OT365 Challenge",
            total_days: 365,
            description: "Read entire Old Testament in one year",
            total_chapters: 929,
            avg_chapters_per_day: 2.54,
        },
        PlanType::Ethiopian => PlanInfo {
            name: "Ethiopian Calendar Plan",
            total_days: 365,
            description: "Bible reading following Ethiopian calendar",
            total_chapters: 929,
            avg_chapters_per_day: 2.54,
        },
    }
}

/// Progress through a plan given the completed-readings count.
#[derive(Clone, Copy, Debug)]
pub struct ReadingStats {
    pub total_days: u32,
    pub completed: usize,
    pub percent: i64,
    pub remaining: i64,
    pub avg_chapters_per_day: f64,
}

pub fn reading_stats(plan: PlanType, completed: usize) -> ReadingStats {
    let info = plan_info(plan);
    let percent = (100.0 * completed as f64 / info.total_days as f64).round() as i64;
    ReadingStats {
        total_days: info.total_days,
        completed,
        percent,
        remaining: info.total_days as i64 - completed as i64,
        avg_chapters_per_day: info.avg_chapters_per_day,
    }
}

/// Estimated daily reading time, e.g. "15-25 minutes".
pub fn suggested_time(plan: PlanType) -> String {
    let minutes = (plan_info(plan).avg_chapters_per_day * 5.0).ceil() as u32;
    format!("{}-{} minutes", minutes, minutes + 10)
}

/// Canonical per-date key: zero-padded `YYYY-MM-DD` from the date's own
/// calendar fields. The sole identity for persisted per-date state.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
