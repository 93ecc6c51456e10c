use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Study notes keyed by canonical date string, persisted as a bare JSON
/// object. A date with no text has no key.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(transparent)]
pub struct NotesData {
    pub notes: BTreeMap<String, String>,
}

impl Persistable for NotesData {
    fn filename() -> &'static str {
        "notes.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl NotesData {
    /// Stores trimmed text under the date key; empty or whitespace-only text
    /// deletes the key instead.
    pub fn set(&mut self, key: &str, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.notes.remove(key);
        } else {
            self.notes.insert(key.to_string(), trimmed.to_string());
        }
    }

    pub fn get(&self, key: &str) -> &str {
        self.notes.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn has(&self, key: &str) -> bool {
        self.notes.contains_key(key)
    }
}
