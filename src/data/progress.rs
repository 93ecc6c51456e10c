use crate::data::completion::CompletionData;
use crate::data::notes::NotesData;
use crate::data::persistence::Persistable;
use crate::data::plan::{date_key, CalendarType, PlanType};
use crate::data::prefs::Preferences;
use crate::data::start_dates::StartDateData;
use crate::data::streak::StreakRecord;
use chrono::{Local, NaiveDate};
use log::warn;
use std::path::{Path, PathBuf};

/// Completion/streak totals for the statistics panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    pub total_completed: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
}

/// The single writer over all persisted progress state: completion marks,
/// study notes, streaks, per-plan start dates, and preferences.
///
/// Every mutating operation writes through to disk immediately. A failed
/// write is logged and swallowed; the in-memory state stays authoritative
/// for the rest of the session.
pub struct ProgressStore {
    data_dir: PathBuf,
    completion: CompletionData,
    notes: NotesData,
    streak: StreakRecord,
    start_dates: StartDateData,
    prefs: Preferences,
}

impl ProgressStore {
    /// Opens the store over a data directory. Every concern loads
    /// best-effort; missing or corrupted files read as empty state.
    pub fn open(dir: &Path) -> Self {
        ProgressStore {
            data_dir: dir.to_path_buf(),
            completion: CompletionData::load_from(dir),
            notes: NotesData::load_from(dir),
            streak: StreakRecord::load_from(dir),
            start_dates: StartDateData::load_from(dir),
            prefs: Preferences::load_from(dir),
        }
    }

    fn persist<T: Persistable>(&self, value: &T) {
        if let Err(e) = value.save_to(&self.data_dir) {
            warn!("failed to persist {}: {e:#}", T::filename());
        }
    }

    fn persist_prefs(&self) {
        if let Err(e) = self.prefs.save_to(&self.data_dir) {
            warn!("failed to persist config.yaml: {e:#}");
        }
    }

    // ── Completion ────────────────────────────────────────────────────────────

    pub fn mark_complete(&mut self, date: NaiveDate) {
        self.mark_complete_on(date, Local::now().date_naive());
    }

    /// Marking an already-complete date is a no-op; the streak only updates
    /// on a fresh mark, and only when the marked date is `today`.
    pub fn mark_complete_on(&mut self, date: NaiveDate, today: NaiveDate) {
        let key = date_key(date);
        if !self.completion.add(key.clone()) {
            return;
        }
        self.persist(&self.completion);
        self.update_streak(&key, today);
    }

    /// Applies a completion mark to the streak record. Only a mark whose date
    /// equals `today` counts; anything else leaves the streak untouched.
    pub fn update_streak(&mut self, date_str: &str, today: NaiveDate) {
        if self.streak.record(date_str, today) {
            self.persist(&self.streak);
        }
    }

    /// Removes a completion mark. Streak history is not retroactively
    /// adjusted.
    pub fn unmark_complete(&mut self, date: NaiveDate) {
        if self.completion.remove(&date_key(date)) {
            self.persist(&self.completion);
        }
    }

    pub fn is_complete(&self, date: NaiveDate) -> bool {
        self.completion.has(&date_key(date))
    }

    pub fn completion(&self) -> &CompletionData {
        &self.completion
    }

    // ── Notes ─────────────────────────────────────────────────────────────────

    pub fn save_notes(&mut self, date: NaiveDate, text: &str) {
        self.notes.set(&date_key(date), text);
        self.persist(&self.notes);
    }

    pub fn notes_for(&self, date: NaiveDate) -> &str {
        self.notes.get(&date_key(date))
    }

    pub fn has_notes(&self, date: NaiveDate) -> bool {
        self.notes.has(&date_key(date))
    }

    // ── Start dates ───────────────────────────────────────────────────────────

    pub fn start_date(&self, plan: PlanType) -> Option<NaiveDate> {
        self.start_dates.get(plan)
    }

    pub fn set_start_date(&mut self, plan: PlanType, date: NaiveDate) {
        self.start_dates.set(plan, date);
        self.persist(&self.start_dates);
    }

    // ── Preferences ───────────────────────────────────────────────────────────

    pub fn current_plan(&self) -> PlanType {
        self.prefs.current_plan
    }

    pub fn set_current_plan(&mut self, plan: PlanType) {
        self.prefs.current_plan = plan;
        self.persist_prefs();
    }

    /// Makes `plan` current and restarts its cycle from `today`, the way the
    /// plan selector behaves: switching plans begins that plan at day 1.
    pub fn switch_plan(&mut self, plan: PlanType, today: NaiveDate) {
        self.set_current_plan(plan);
        self.set_start_date(plan, today);
    }

    pub fn calendar_type(&self) -> CalendarType {
        self.prefs.calendar_type
    }

    pub fn set_calendar_type(&mut self, calendar: CalendarType) {
        self.prefs.calendar_type = calendar;
        self.persist_prefs();
    }

    // ── Statistics / reset ────────────────────────────────────────────────────

    pub fn statistics(&self) -> Statistics {
        Statistics {
            total_completed: self.completion.len(),
            current_streak: self.streak.current_streak,
            longest_streak: self.streak.longest_streak,
        }
    }

    /// Clears all persisted progress: completions, notes, streaks, start
    /// dates, and preferences.
    pub fn reset(&mut self) {
        self.completion = CompletionData::default();
        self.notes = NotesData::default();
        self.streak = StreakRecord::default();
        self.start_dates = StartDateData::default();
        self.prefs = Preferences::default();
        self.persist(&self.completion);
        self.persist(&self.notes);
        self.persist(&self.streak);
        self.persist(&self.start_dates);
        self.persist_prefs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_mark_then_is_complete() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        assert!(store.is_complete(d(2024, 6, 10)));
        assert!(!store.is_complete(d(2024, 6, 11)));
    }

    #[test]
    fn test_mark_twice_leaves_state_unchanged() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        assert_eq!(store.statistics().total_completed, 1);
        assert_eq!(store.statistics().current_streak, 1);
    }

    #[test]
    fn test_unmark_restores_incomplete() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        store.unmark_complete(d(2024, 6, 10));
        assert!(!store.is_complete(d(2024, 6, 10)));
    }

    #[test]
    fn test_unmark_does_not_rewind_streak() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        store.unmark_complete(d(2024, 6, 10));
        assert_eq!(store.statistics().current_streak, 1);
    }

    #[test]
    fn test_streak_increments_after_yesterday() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 9), d(2024, 6, 9));
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        let stats = store.statistics();
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.longest_streak, 2);
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 1), d(2024, 6, 1));
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        let stats = store.statistics();
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.longest_streak, 1);
    }

    #[test]
    fn test_marking_past_date_keeps_streak() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        store.mark_complete_on(d(2024, 5, 1), d(2024, 6, 10));
        let stats = store.statistics();
        assert_eq!(stats.total_completed, 2);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn test_state_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        {
            let mut store = ProgressStore::open(tmp.path());
            store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
            store.save_notes(d(2024, 6, 10), "Psalms today");
            store.set_current_plan(PlanType::Ot365);
            store.set_calendar_type(CalendarType::Ethiopian);
            store.set_start_date(PlanType::Ot365, d(2024, 1, 1));
        }
        let store = ProgressStore::open(tmp.path());
        assert!(store.is_complete(d(2024, 6, 10)));
        assert_eq!(store.notes_for(d(2024, 6, 10)), "Psalms today");
        assert_eq!(store.current_plan(), PlanType::Ot365);
        assert_eq!(store.calendar_type(), CalendarType::Ethiopian);
        assert_eq!(store.start_date(PlanType::Ot365), Some(d(2024, 1, 1)));
        assert_eq!(store.statistics().current_streak, 1);
    }

    #[test]
    fn test_corrupted_completion_file_reads_as_empty() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("completed.json"), "{oops").unwrap();
        let store = ProgressStore::open(tmp.path());
        assert_eq!(store.statistics().total_completed, 0);
    }

    #[test]
    fn test_save_notes_empty_text_deletes() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.save_notes(d(2024, 6, 10), "first thoughts");
        store.save_notes(d(2024, 6, 10), "  ");
        assert_eq!(store.notes_for(d(2024, 6, 10)), "");
        assert!(!store.has_notes(d(2024, 6, 10)));
    }

    #[test]
    fn test_switch_plan_resets_start_date_to_today() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.set_start_date(PlanType::Ot365, d(2024, 1, 1));
        store.switch_plan(PlanType::Ot365, d(2024, 6, 10));
        assert_eq!(store.current_plan(), PlanType::Ot365);
        assert_eq!(store.start_date(PlanType::Ot365), Some(d(2024, 6, 10)));
    }

    #[test]
    fn test_reset_clears_everything() {
        let tmp = TempDir::new().unwrap();
        let mut store = ProgressStore::open(tmp.path());
        store.mark_complete_on(d(2024, 6, 10), d(2024, 6, 10));
        store.save_notes(d(2024, 6, 10), "note");
        store.set_start_date(PlanType::Nt90, d(2024, 1, 1));
        store.reset();
        assert_eq!(store.statistics().total_completed, 0);
        assert_eq!(store.statistics().current_streak, 0);
        assert_eq!(store.notes_for(d(2024, 6, 10)), "");
        assert_eq!(store.start_date(PlanType::Nt90), None);

        let reopened = ProgressStore::open(tmp.path());
        assert_eq!(reopened.statistics().total_completed, 0);
    }
}
