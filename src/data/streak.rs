use crate::data::persistence::Persistable;
use crate::data::plan::date_key;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Consecutive-day completion streak. Field names on disk are camelCase,
/// matching the persisted record shape.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub last_date: Option<String>,
}

impl Persistable for StreakRecord {
    fn filename() -> &'static str {
        "streak.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl StreakRecord {
    /// Applies a completion mark to the streak. Only a mark for today's date
    /// counts; marking a past date leaves the streak untouched. Returns true
    /// when the record changed.
    ///
    /// Continuing from yesterday (or starting fresh) increments the streak;
    /// any other gap resets it to 1; re-marking today leaves the count as-is.
    /// `longest_streak` never decreases.
    pub fn record(&mut self, marked_key: &str, today: NaiveDate) -> bool {
        let today_key = date_key(today);
        if marked_key != today_key {
            return false;
        }
        let yesterday_key = today
            .checked_sub_signed(Duration::days(1))
            .map(date_key);

        match self.last_date.as_deref() {
            None => self.current_streak += 1,
            Some(last) if Some(last) == yesterday_key.as_deref() => self.current_streak += 1,
            Some(last) if last != today_key => self.current_streak = 1,
            _ => {}
        }
        self.last_date = Some(today_key);
        self.longest_streak = self.longest_streak.max(self.current_streak);
        true
    }
}
