use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

/// The set of completed reading dates, persisted as a bare JSON array of
/// canonical `YYYY-MM-DD` strings, kept sorted and duplicate-free.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(transparent)]
pub struct CompletionData {
    pub completed: Vec<String>,
}

impl Persistable for CompletionData {
    fn filename() -> &'static str {
        "completed.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl CompletionData {
    pub fn has(&self, key: &str) -> bool {
        self.completed.iter().any(|d| d == key)
    }

    /// Adds a date key if absent. Returns true when the key was newly added.
    pub fn add(&mut self, key: String) -> bool {
        if self.has(&key) {
            return false;
        }
        self.completed.push(key);
        self.completed.sort();
        true
    }

    /// Removes a date key if present. Returns true when something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.completed.len();
        self.completed.retain(|d| d != key);
        self.completed.len() != before
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}
