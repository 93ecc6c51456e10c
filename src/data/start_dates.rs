use crate::data::persistence::Persistable;
use crate::data::plan::{date_key, PlanType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-plan start dates, persisted as a bare JSON object with one key per
/// plan type and ISO `YYYY-MM-DD` values. A plan with no entry has not been
/// queried yet; the day indexer initialises it lazily.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(transparent)]
pub struct StartDateData {
    pub start_dates: BTreeMap<PlanType, String>,
}

impl Persistable for StartDateData {
    fn filename() -> &'static str {
        "start_dates.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl StartDateData {
    /// Returns the stored start date for a plan. A missing or unparseable
    /// value reads as absent.
    pub fn get(&self, plan: PlanType) -> Option<NaiveDate> {
        let raw = self.start_dates.get(&plan)?;
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }

    pub fn set(&mut self, plan: PlanType, date: NaiveDate) {
        self.start_dates.insert(plan, date_key(date));
    }
}
