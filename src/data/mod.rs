pub mod catalog;
pub mod completion;
pub mod notes;
pub mod persistence;
pub mod plan;
pub mod prefs;
pub mod progress;
pub mod start_dates;
pub mod streak;

pub use catalog::PlanCatalog;
pub use completion::CompletionData;
pub use notes::NotesData;
pub use persistence::Persistable;
pub use plan::{
    date_key, plan_info, reading_stats, suggested_time, CalendarType, PlanType, ReadingPlanEntry,
};
pub use prefs::Preferences;
pub use progress::{ProgressStore, Statistics};
pub use start_dates::StartDateData;
pub use streak::StreakRecord;
