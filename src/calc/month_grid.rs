use crate::data::completion::CompletionData;
use crate::data::plan::{date_key, CalendarType};
use chrono::{Datelike, NaiveDate};

/// The month grid is a fixed 6x7 block regardless of month length.
pub const GRID_CELLS: usize = 42;

/// One cell of the displayed month grid. Cells belonging to the previous or
/// next month carry no date and are not selectable.
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub other_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_completed: bool,
}

impl DayCell {
    fn other_month(day: u32) -> Self {
        DayCell {
            day,
            date: None,
            other_month: true,
            is_today: false,
            is_selected: false,
            is_completed: false,
        }
    }
}

/// Builds the 42 cell descriptors for one displayed month: leading cells
/// from the previous month, the month's own days with their status flags,
/// then trailing cells from the next month.
pub fn build_month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    selected: NaiveDate,
    completed: &CompletionData,
) -> Vec<DayCell> {
    let mut cells = Vec::with_capacity(GRID_CELLS);

    let first = match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(d) => d,
        None => return cells,
    };
    let first_weekday = first.weekday().num_days_from_sunday() as usize;
    let total_days = days_in_month(year, month);
    let prev = add_months(first, -1);
    let days_in_prev = days_in_month(prev.year(), prev.month());

    for i in 0..first_weekday {
        let day = days_in_prev - first_weekday as u32 + 1 + i as u32;
        cells.push(DayCell::other_month(day));
    }

    for day in 1..=total_days {
        // Day numbers 1..=days_in_month are always valid for this month.
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        cells.push(DayCell {
            day,
            date: Some(date),
            other_month: false,
            is_today: date == today,
            is_selected: date == selected,
            is_completed: completed.has(&date_key(date)),
        });
    }

    let remaining = GRID_CELLS - first_weekday - total_days as usize;
    for day in 1..=remaining as u32 {
        cells.push(DayCell::other_month(day));
    }

    cells
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
        .num_days() as u32
}

pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let year = date.year();
    let month = date.month() as i32;
    let new_total = month - 1 + months;
    let new_month = ((new_total % 12 + 12) % 12 + 1) as u32;
    let year_delta = new_total.div_euclid(12);
    let new_year = year + year_delta;
    let max_day = days_in_month(new_year, new_month);
    let new_day = date.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, new_day).unwrap_or(date)
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

const ETHIOPIAN_MONTHS: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miazia", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

/// The month header label for the grid. The Ethiopian form is a simplified
/// placeholder (Gregorian month index into the Ethiopian month names, year
/// minus seven), not a calendrical conversion.
pub fn month_header(calendar: CalendarType, year: i32, month: u32) -> String {
    match calendar {
        CalendarType::Gregorian => format!("{} {}", month_name(month), year),
        CalendarType::Ethiopian => {
            let name = ETHIOPIAN_MONTHS[(month as usize - 1) % 13];
            format!("{} {}", name, year - 7)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn grid(year: i32, month: u32) -> Vec<DayCell> {
        build_month_grid(year, month, d(2024, 2, 14), d(2024, 2, 14), &CompletionData::default())
    }

    #[test]
    fn test_grid_always_emits_42_cells() {
        for (year, month) in [
            (2024, 2), // leap February
            (2023, 2), // short February
            (2024, 1), // 31 days starting Monday
            (2024, 9), // 30 days starting Sunday
            (2026, 8), // 31 days starting Saturday
            (2024, 12),
        ] {
            assert_eq!(grid(year, month).len(), GRID_CELLS, "{year}-{month}");
        }
    }

    #[test]
    fn test_february_2024_layout() {
        // 2024-02-01 is a Thursday: four leading cells, 29 days, nine trailing.
        let cells = grid(2024, 2);
        let leading: Vec<&DayCell> = cells.iter().take_while(|c| c.other_month).collect();
        assert_eq!(leading.len(), 4);
        let current = cells.iter().filter(|c| !c.other_month).count();
        assert_eq!(current, 29);
        let trailing = cells.iter().skip(4 + 29).count();
        assert_eq!(trailing, 9);
        assert!(cells.iter().skip(4 + 29).all(|c| c.other_month));
    }

    #[test]
    fn test_leading_cells_carry_previous_month_day_numbers() {
        // January 2024 has 31 days, so February's lead-in is 28..=31.
        let cells = grid(2024, 2);
        let days: Vec<u32> = cells.iter().take(4).map(|c| c.day).collect();
        assert_eq!(days, vec![28, 29, 30, 31]);
    }

    #[test]
    fn test_trailing_cells_count_from_one() {
        let cells = grid(2024, 2);
        let days: Vec<u32> = cells.iter().skip(33).map(|c| c.day).collect();
        assert_eq!(days, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_other_month_cells_have_no_date() {
        let cells = grid(2024, 2);
        assert!(cells
            .iter()
            .all(|c| c.other_month == c.date.is_none()));
    }

    #[test]
    fn test_month_starting_sunday_has_no_leading_cells() {
        // 2024-09-01 is a Sunday.
        let cells = grid(2024, 9);
        assert!(!cells[0].other_month);
        assert_eq!(cells[0].day, 1);
    }

    #[test]
    fn test_today_and_selected_flags() {
        let completed = CompletionData::default();
        let cells = build_month_grid(2024, 2, d(2024, 2, 14), d(2024, 2, 20), &completed);
        let today_cell = cells.iter().find(|c| c.is_today).unwrap();
        assert_eq!(today_cell.date, Some(d(2024, 2, 14)));
        let selected_cell = cells.iter().find(|c| c.is_selected).unwrap();
        assert_eq!(selected_cell.date, Some(d(2024, 2, 20)));
    }

    #[test]
    fn test_completed_flag_comes_from_completion_set() {
        let mut completed = CompletionData::default();
        completed.add("2024-02-10".to_string());
        let cells = build_month_grid(2024, 2, d(2024, 2, 14), d(2024, 2, 14), &completed);
        let done: Vec<&DayCell> = cells.iter().filter(|c| c.is_completed).collect();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].date, Some(d(2024, 2, 10)));
    }

    #[test]
    fn test_flags_never_set_on_other_month_cells() {
        let mut completed = CompletionData::default();
        completed.add("2024-01-31".to_string());
        let cells = build_month_grid(2024, 2, d(2024, 1, 31), d(2024, 1, 31), &completed);
        assert!(cells
            .iter()
            .filter(|c| c.other_month)
            .all(|c| !c.is_today && !c.is_selected && !c.is_completed));
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
    }

    #[test]
    fn test_days_in_month_december() {
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_add_months_forward_and_back() {
        assert_eq!(add_months(d(2025, 1, 15), 1), d(2025, 2, 15));
        assert_eq!(add_months(d(2025, 1, 10), -1), d(2024, 12, 10));
    }

    #[test]
    fn test_add_months_clamps_month_end() {
        assert_eq!(add_months(d(2025, 1, 31), 1), d(2025, 2, 28));
    }

    #[test]
    fn test_month_header_gregorian() {
        assert_eq!(
            month_header(CalendarType::Gregorian, 2024, 2),
            "February 2024"
        );
    }

    #[test]
    fn test_month_header_ethiopian_placeholder() {
        assert_eq!(
            month_header(CalendarType::Ethiopian, 2024, 1),
            "Meskerem 2017"
        );
        assert_eq!(month_header(CalendarType::Ethiopian, 2024, 12), "Nehase 2017");
    }
}
