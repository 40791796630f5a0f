//! Selection state machine behind the date selector.
//!
//! The externally supplied value is the source of truth: the state keeps a
//! copy of the last valid external value and only replaces it when a new
//! valid value arrives or the user picks a day. Every transition is a plain
//! synchronous method, so UI layers can feed events in arrival order.

use serde::{Deserialize, Serialize};

use crate::constraints::{is_selectable, DateBounds, DayView};
use crate::date::{CalendarDate, YearMonth};
use crate::grid::{DayCell, MonthGrid};

/// What the "Today" shortcut does when today is outside the allowed range
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodayPolicy {
    /// Do nothing, the popover stays open
    #[default]
    Ignore,
    /// Pick the nearest allowed bound instead
    ClampToBound,
}

/// Inputs that change the selection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// External value changed
    Hydrate(Option<String>),
    /// A day was picked
    Select(CalendarDate),
    /// Show a date's month and pick it (used by "Today")
    JumpTo(CalendarDate),
    /// Move the visible month
    NavigateMonth(i32),
    /// Trigger activated
    Toggle { disabled: bool },
    /// Caller changed the `disabled` flag; disabling closes the popover
    SetDisabled(bool),
    /// Outside interaction or explicit dismissal
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<CalendarDate>,
    visible_month: YearMonth,
    is_open: bool,
}

impl SelectionState {
    /// Closed, nothing selected, showing the month of `today`
    pub fn new(today: CalendarDate) -> Self {
        Self {
            selected: None,
            visible_month: today.year_month(),
            is_open: false,
        }
    }

    /// Start from an optional external value
    pub fn with_value(today: CalendarDate, value: Option<&str>) -> Self {
        let mut state = Self::new(today);
        state.hydrate(value);
        state
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub fn visible_month(&self) -> YearMonth {
        self.visible_month
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Mirror a new external value. Returns false (and keeps the current
    /// state) when the value is absent, empty or unparseable.
    pub fn hydrate(&mut self, external: Option<&str>) -> bool {
        let Some(raw) = external.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return false;
        };

        match raw.parse::<CalendarDate>() {
            Ok(date) => {
                self.selected = Some(date);
                self.visible_month = date.year_month();
                true
            }
            Err(e) => {
                log::debug!("📅 Ignoring external value: {}", e);
                false
            }
        }
    }

    /// Pick a date, close the popover and return the canonical value to emit
    pub fn select(&mut self, date: CalendarDate) -> String {
        self.selected = Some(date);
        self.is_open = false;
        date.to_canonical_string()
    }

    pub fn navigate_month(&mut self, delta: i32) {
        self.visible_month = self.visible_month.offset(delta);
        log::debug!("📅 Navigated to {}", self.visible_month);
    }

    /// Returns true when the popover ends up open
    pub fn open(&mut self, disabled: bool) -> bool {
        if !disabled {
            self.is_open = true;
        }
        self.is_open
    }

    /// Returns true when the popover was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }

    pub fn toggle(&mut self, disabled: bool) -> bool {
        if self.is_open {
            self.close();
            false
        } else {
            self.open(disabled)
        }
    }

    /// Show and pick `date`, closing the popover
    pub fn jump_to(&mut self, date: CalendarDate) -> String {
        self.visible_month = date.year_month();
        self.select(date)
    }

    /// Apply an action, returning the canonical value to emit if any
    pub fn apply(&mut self, action: SelectionAction) -> Option<String> {
        match action {
            SelectionAction::Hydrate(value) => {
                self.hydrate(value.as_deref());
                None
            }
            SelectionAction::Select(date) => Some(self.select(date)),
            SelectionAction::JumpTo(date) => Some(self.jump_to(date)),
            SelectionAction::NavigateMonth(delta) => {
                self.navigate_month(delta);
                None
            }
            SelectionAction::Toggle { disabled } => {
                self.toggle(disabled);
                None
            }
            SelectionAction::SetDisabled(disabled) => {
                if disabled {
                    self.close();
                }
                None
            }
            SelectionAction::Close => {
                self.close();
                None
            }
        }
    }

    /// Grid for the visible month
    pub fn grid(&self) -> MonthGrid {
        MonthGrid::build(self.visible_month)
    }

    /// Grid cells with their resolved visual state
    pub fn day_views(&self, today: CalendarDate, bounds: &DateBounds) -> Vec<DayView> {
        self.grid()
            .iter()
            .map(|cell| DayView::new(*cell, bounds, today, self.selected))
            .collect()
    }
}

/// The date a click on `cell` would pick, if any
pub fn selection_for_cell(cell: &DayCell, bounds: &DateBounds) -> Option<CalendarDate> {
    is_selectable(cell, bounds).then_some(cell.date)
}

/// The date the "Today" shortcut should pick under `policy`
pub fn resolve_today_target(
    today: CalendarDate,
    bounds: &DateBounds,
    policy: TodayPolicy,
) -> Option<CalendarDate> {
    if !bounds.is_disabled(today) {
        return Some(today);
    }
    match policy {
        TodayPolicy::Ignore => None,
        TodayPolicy::ClampToBound => {
            let target = bounds.clamp(today);
            (!bounds.is_disabled(target)).then_some(target)
        }
    }
}
