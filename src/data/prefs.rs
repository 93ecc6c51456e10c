use crate::data::persistence::Persistable;
use crate::data::plan::{CalendarType, PlanType};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// User preferences that survive across sessions: the active reading plan
/// and the calendar labeling for the month header.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub current_plan: PlanType,
    #[serde(default)]
    pub calendar_type: CalendarType,
}

/// Wrapper that reads the `settings` key from config.yaml, so the file can
/// grow other top-level keys without either reader clobbering the other.
#[derive(Serialize, Deserialize, Default, Debug)]
struct PreferencesWrapper {
    #[serde(default)]
    settings: Preferences,
}

impl Persistable for PreferencesWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl Preferences {
    pub fn load_from(dir: &Path) -> Self {
        PreferencesWrapper::load_from(dir).settings
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let wrapper = PreferencesWrapper {
            settings: self.clone(),
        };
        wrapper.save_to(dir)
    }
}
