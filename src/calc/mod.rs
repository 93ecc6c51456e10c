pub mod day_number;
pub mod month_grid;
pub mod resolver;

pub use day_number::day_number;
pub use month_grid::{build_month_grid, DayCell, GRID_CELLS};
pub use resolver::{get_reading, ReadingDisplay};
