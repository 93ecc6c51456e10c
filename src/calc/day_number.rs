use crate::data::plan::{plan_info, PlanType};
use crate::data::progress::ProgressStore;
use chrono::NaiveDate;

/// Maps a calendar date to a 1-based day number within the plan's cycle.
///
/// The first query for a plan sets that plan's start date to the query date
/// (persisted) and returns 1; every later call is pure given the stored
/// start date. The distance is taken as an absolute value, so dates before
/// the start date alias dates an equal distance after it.
pub fn day_number(store: &mut ProgressStore, date: NaiveDate, plan: PlanType) -> u32 {
    let total_days = plan_info(plan).total_days;
    let start = match store.start_date(plan) {
        Some(start) => start,
        None => {
            store.set_start_date(plan, date);
            return 1;
        }
    };
    let diff_days = (date - start).num_days().unsigned_abs();
    (diff_days % total_days as u64) as u32 + 1
}
