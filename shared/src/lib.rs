//! Domain logic for the StudyMate calendar date selector.
//!
//! Everything here is pure and synchronous so it can be unit tested natively;
//! the `frontend` crate only wires these types to Yew components.

pub mod constraints;
pub mod date;
pub mod error;
pub mod grid;
pub mod selection;

pub use constraints::{is_disabled, is_selectable, DateBounds, DayCellState, DayView};
pub use date::{days_in_month, is_leap_year, month_name, CalendarDate, YearMonth, MAX_YEAR, MIN_YEAR};
pub use error::DateError;
pub use grid::{build_month_grid, DayCell, MonthGrid, DAYS_PER_WEEK, GRID_CELLS};
pub use selection::{resolve_today_target, selection_for_cell, SelectionAction, SelectionState, TodayPolicy};
