//! Six-week day grid for one visible month.

use serde::Serialize;

use crate::date::{days_in_month, CalendarDate, YearMonth};
use crate::error::DateError;

/// Cells in a grid: 6 weeks of 7 days, whatever the month
pub const GRID_CELLS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

/// One day in the popover grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for padding days borrowed from the previous/next month
    pub in_current_month: bool,
}

/// The 42 cells shown for a month, starting on the Sunday on or before the 1st
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(month: YearMonth) -> Self {
        let mut cells = Vec::with_capacity(GRID_CELLS);

        let (year, month_number) = (month.year(), month.month());
        let first_day_of_week = month.first_weekday();

        // Padding days from the previous month
        let (prev_year, prev_month) = if month_number == 1 {
            (year - 1, 12)
        } else {
            (year, month_number - 1)
        };
        let days_in_prev_month = days_in_month(prev_year, prev_month);
        for day in (days_in_prev_month - first_day_of_week + 1)..=days_in_prev_month {
            cells.push(DayCell {
                date: CalendarDate::from_parts(prev_year, prev_month, day),
                in_current_month: false,
            });
        }

        for day in 1..=month.days_in_month() {
            cells.push(DayCell {
                date: CalendarDate::from_parts(year, month_number, day),
                in_current_month: true,
            });
        }

        // Padding days from the next month to complete 6 weeks
        let (next_year, next_month) = if month_number == 12 {
            (year + 1, 1)
        } else {
            (year, month_number + 1)
        };
        let remaining = GRID_CELLS - cells.len();
        for day in 1..=remaining as u32 {
            cells.push(DayCell {
                date: CalendarDate::from_parts(next_year, next_month, day),
                in_current_month: false,
            });
        }

        log::trace!(
            "🗓️ Built grid for {}: {} leading, {} in month, {} trailing",
            month,
            first_day_of_week,
            month.days_in_month(),
            remaining
        );

        Self { month, cells }
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Rows of seven days, Sunday first
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    /// Padding cells taken from the previous month
    pub fn leading_days(&self) -> usize {
        self.cells.iter().take_while(|cell| !cell.in_current_month).count()
    }

    /// Padding cells taken from the next month
    pub fn trailing_days(&self) -> usize {
        self.cells.iter().rev().take_while(|cell| !cell.in_current_month).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayCell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a DayCell;
    type IntoIter = std::slice::Iter<'a, DayCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Build the grid for a `(year, month)` pair
pub fn build_month_grid(year: i32, month: u32) -> Result<MonthGrid, DateError> {
    Ok(MonthGrid::build(YearMonth::new(year, month)?))
}
