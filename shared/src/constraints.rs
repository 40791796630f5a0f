//! Which days can be picked, and how each day should look.

use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::grid::DayCell;

/// Optional inclusive limits on selectable dates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl DateBounds {
    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// True when the date falls strictly before `min` or strictly after `max`
    pub fn is_disabled(&self, date: CalendarDate) -> bool {
        self.min.is_some_and(|min| date < min) || self.max.is_some_and(|max| date > max)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        !self.is_disabled(date)
    }

    /// Nearest allowed date. When `min > max` nothing is allowed and `min` wins.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        match (self.min, self.max) {
            (Some(min), _) if date < min => min,
            (_, Some(max)) if date > max => max,
            _ => date,
        }
    }
}

/// Constraint check used by the grid and the "Today" shortcut
pub fn is_disabled(date: CalendarDate, bounds: &DateBounds) -> bool {
    bounds.is_disabled(date)
}

/// A cell can be picked only if it belongs to the visible month and is in range
pub fn is_selectable(cell: &DayCell, bounds: &DateBounds) -> bool {
    cell.in_current_month && !bounds.is_disabled(cell.date)
}

/// Visual state of a grid cell, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayCellState {
    Selected,
    Today,
    Disabled,
    OtherMonth,
    Normal,
}

impl DayCellState {
    pub fn resolve(
        cell: &DayCell,
        bounds: &DateBounds,
        today: CalendarDate,
        selected: Option<CalendarDate>,
    ) -> Self {
        if selected == Some(cell.date) {
            Self::Selected
        } else if cell.date == today {
            Self::Today
        } else if bounds.is_disabled(cell.date) {
            Self::Disabled
        } else if !cell.in_current_month {
            Self::OtherMonth
        } else {
            Self::Normal
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Today => "today",
            Self::Disabled => "disabled",
            Self::OtherMonth => "other-month",
            Self::Normal => "current-month",
        }
    }
}

/// Everything the popover needs to draw one day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayView {
    pub cell: DayCell,
    pub state: DayCellState,
    pub selectable: bool,
}

impl DayView {
    pub fn new(
        cell: DayCell,
        bounds: &DateBounds,
        today: CalendarDate,
        selected: Option<CalendarDate>,
    ) -> Self {
        Self {
            cell,
            state: DayCellState::resolve(&cell, bounds, today, selected),
            selectable: is_selectable(&cell, bounds),
        }
    }

    /// Class list for the day button. Non-selectable selected/today cells keep
    /// their primary state and get a muted modifier.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["calendar-day", self.state.css_class()];
        if !self.selectable && matches!(self.state, DayCellState::Selected | DayCellState::Today) {
            classes.push("muted");
        }
        classes
    }
}
