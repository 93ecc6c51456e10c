use crate::data::plan::{PlanType, ReadingPlanEntry};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_CHAPTERS: u32 = 3;

/// Subdirectory of the data directory holding the plan source documents.
pub const PLANS_DIR: &str = "plans";

// ── Source document shapes ────────────────────────────────────────────────────
//
// Three structurally different JSON documents, one per plan type. They are
// parsed as-is and normalized into `ReadingPlanEntry` immediately; nothing
// outside this module sees these shapes.

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Nt90Source {
    #[serde(default)]
    pub schedule: Vec<PlanDay>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PlanDay {
    pub day: u32,
    pub reading: String,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<u32>,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Ot365Source {
    #[serde(rename = "monthlyPlans", default)]
    pub monthly_plans: Vec<MonthlyPlan>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MonthlyPlan {
    pub month: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    #[serde(default)]
    pub days: Vec<PlanDay>,
}

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct EthiopianSource {
    #[serde(default)]
    pub months: Vec<EthiopianMonth>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EthiopianMonth {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feast: Option<String>,
    #[serde(default)]
    pub readings: Vec<EthiopianReading>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EthiopianReading {
    pub day: u32,
    pub reading: String,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feast: Option<String>,
}

// ── Catalog ───────────────────────────────────────────────────────────────────

/// Normalized lookup over the three loaded plans. A plan whose source file is
/// missing or malformed stays empty; emptiness is a valid, permanent state
/// resolved by the fallback record, not an error.
#[derive(Default, Debug)]
pub struct PlanCatalog {
    nt90: Vec<ReadingPlanEntry>,
    ot365: Vec<ReadingPlanEntry>,
    ethiopian: Vec<ReadingPlanEntry>,
}

impl PlanCatalog {
    /// Best-effort load of all three plan sources from `<dir>/plans/`.
    /// Each plan loads independently; one failure never affects the others.
    pub fn load(dir: &Path) -> Self {
        let plans = dir.join(PLANS_DIR);
        let mut catalog = PlanCatalog::default();
        for plan in PlanType::ALL {
            catalog.load_plan(&plans, plan);
        }
        catalog
    }

    fn load_plan(&mut self, plans_dir: &Path, plan: PlanType) {
        let path = plans_dir.join(format!("{}.json", plan.as_str()));
        let contents = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!("could not load {plan} plan from {}: {e}", path.display());
                return;
            }
        };
        let entries = match plan {
            PlanType::Nt90 => serde_json::from_str::<Nt90Source>(&contents)
                .map(normalize_nt90),
            PlanType::Ot365 => serde_json::from_str::<Ot365Source>(&contents)
                .map(normalize_ot365),
            PlanType::Ethiopian => serde_json::from_str::<EthiopianSource>(&contents)
                .map(normalize_ethiopian),
        };
        match entries {
            Ok(entries) => {
                info!("loaded {plan} plan with {} readings", entries.len());
                *self.entries_mut(plan) = entries;
            }
            Err(e) => warn!("could not parse {plan} plan from {}: {e}", path.display()),
        }
    }

    pub fn entries(&self, plan: PlanType) -> &[ReadingPlanEntry] {
        match plan {
            PlanType::Nt90 => &self.nt90,
            PlanType::Ot365 => &self.ot365,
            PlanType::Ethiopian => &self.ethiopian,
        }
    }

    fn entries_mut(&mut self, plan: PlanType) -> &mut Vec<ReadingPlanEntry> {
        match plan {
            PlanType::Nt90 => &mut self.nt90,
            PlanType::Ot365 => &mut self.ot365,
            PlanType::Ethiopian => &mut self.ethiopian,
        }
    }

    pub fn is_empty(&self, plan: PlanType) -> bool {
        self.entries(plan).is_empty()
    }

    pub fn len(&self, plan: PlanType) -> usize {
        self.entries(plan).len()
    }

    /// Resolves a day number to its schedule entry. For the Ethiopian plan
    /// the day is reduced modulo 30 (remainder 0 reads as day 30) and the
    /// first month-group containing that adjusted day wins; this is a stated
    /// approximation, not a calendrical conversion.
    pub fn lookup(&self, plan: PlanType, day: u32) -> Option<&ReadingPlanEntry> {
        let day = match plan {
            PlanType::Ethiopian => match day % 30 {
                0 => 30,
                d => d,
            },
            _ => day,
        };
        self.entries(plan).iter().find(|e| e.day == day)
    }

    #[cfg(test)]
    pub(crate) fn from_sources(
        nt90: Nt90Source,
        ot365: Ot365Source,
        ethiopian: EthiopianSource,
    ) -> Self {
        PlanCatalog {
            nt90: normalize_nt90(nt90),
            ot365: normalize_ot365(ot365),
            ethiopian: normalize_ethiopian(ethiopian),
        }
    }
}

// ── Normalization ─────────────────────────────────────────────────────────────

fn normalize_nt90(source: Nt90Source) -> Vec<ReadingPlanEntry> {
    source
        .schedule
        .into_iter()
        .map(|d| ReadingPlanEntry {
            day: d.day,
            passages: vec![d.reading],
            theme: d.theme,
            chapters: d.chapters.unwrap_or(DEFAULT_CHAPTERS),
            month: None,
            focus: None,
            feast: None,
        })
        .collect()
}

/// Flattens the month-grouped OT365 document into one day-keyed sequence,
/// attaching the owning month's label and focus to each entry, then
/// stable-sorts ascending by day. Duplicate day values across months are
/// preserved; the earlier month's entry stays first and wins lookup.
fn normalize_ot365(source: Ot365Source) -> Vec<ReadingPlanEntry> {
    let mut flat: Vec<ReadingPlanEntry> = Vec::new();
    for month_plan in source.monthly_plans {
        for d in month_plan.days {
            flat.push(ReadingPlanEntry {
                day: d.day,
                passages: vec![d.reading],
                theme: d.theme,
                chapters: d.chapters.unwrap_or(DEFAULT_CHAPTERS),
                month: Some(month_plan.month.clone()),
                focus: month_plan.focus.clone(),
                feast: None,
            });
        }
    }
    flat.sort_by_key(|e| e.day);
    flat
}

/// Flattens the Ethiopian month-groups in document order, without sorting:
/// lookup depends on the first month containing a given in-month day number.
fn normalize_ethiopian(source: EthiopianSource) -> Vec<ReadingPlanEntry> {
    let mut flat: Vec<ReadingPlanEntry> = Vec::new();
    for month in source.months {
        for r in month.readings {
            flat.push(ReadingPlanEntry {
                day: r.day,
                passages: vec![r.reading],
                theme: r.theme,
                chapters: r.chapters.unwrap_or(DEFAULT_CHAPTERS),
                month: Some(month.name.clone()),
                focus: None,
                feast: r.feast.or_else(|| month.feast.clone()),
            });
        }
    }
    flat
}
