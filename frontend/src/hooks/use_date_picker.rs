use std::rc::Rc;

use shared::{
    resolve_today_target, selection_for_cell, CalendarDate, DateBounds, DayCell, DayView,
    SelectionAction, SelectionState, TodayPolicy, YearMonth,
};
use yew::prelude::*;

use crate::services::date_utils::today;
use crate::services::logging::Logger;

/// Configuration for a date picker instance
#[derive(Clone, Debug, PartialEq)]
pub struct DatePickerConfig {
    /// What "Today" does when today is outside min/max
    pub today_policy: TodayPolicy,
    pub enable_logging: bool,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            today_policy: TodayPolicy::Ignore,
            enable_logging: false, // Disable by default for production
        }
    }
}

/// Reducer wrapper so every action is applied to the latest state, in the
/// order events arrive
#[derive(Clone, PartialEq)]
struct PickerState(SelectionState);

impl Reducible for PickerState {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        if next == self.0 {
            self
        } else {
            Rc::new(PickerState(next))
        }
    }
}

/// Snapshot of the picker for rendering
#[derive(Clone, PartialEq)]
pub struct DatePickerState {
    pub selected: Option<CalendarDate>,
    pub visible_month: YearMonth,
    pub is_open: bool,
    pub days: Vec<DayView>,
    /// False when "Today" would be refused by the today policy
    pub today_available: bool,
}

#[derive(Clone)]
pub struct UseDatePickerActions {
    pub toggle: Callback<MouseEvent>,
    pub close: Callback<()>,
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub select_day: Callback<DayCell>,
    pub jump_to_today: Callback<MouseEvent>,
    pub on_keydown: Callback<KeyboardEvent>,
}

pub struct UseDatePickerResult {
    pub state: DatePickerState,
    pub actions: UseDatePickerActions,
}

/// State and callbacks behind `DatePicker`.
///
/// `value` is the source of truth: whenever it changes to a parseable date the
/// selection and visible month follow it; anything else is ignored and the
/// current selection is kept. Picking a day emits the canonical `YYYY-MM-DD`
/// string through `on_change`.
#[hook]
pub fn use_date_picker(
    value: Option<String>,
    bounds: DateBounds,
    disabled: bool,
    on_change: Callback<String>,
    config: DatePickerConfig,
) -> UseDatePickerResult {
    let today = today();

    let picker = {
        let value = value.clone();
        use_reducer_eq(move || PickerState(SelectionState::with_value(today, value.as_deref())))
    };

    let log = {
        let enabled = config.enable_logging;
        move |message: String| {
            if enabled {
                Logger::debug_with_component("date-picker", &message);
            }
        }
    };

    // Re-sync whenever the external value changes
    {
        let dispatcher = picker.dispatcher();
        use_effect_with(value, move |value| {
            dispatcher.dispatch(SelectionAction::Hydrate(value.clone()));
            || ()
        });
    }

    // Disabling closes the popover; re-enabling leaves it closed
    {
        let dispatcher = picker.dispatcher();
        use_effect_with(disabled, move |disabled| {
            dispatcher.dispatch(SelectionAction::SetDisabled(*disabled));
            || ()
        });
    }

    let toggle = {
        let dispatcher = picker.dispatcher();
        let log = log.clone();
        Callback::from(move |_: MouseEvent| {
            if disabled {
                log("📅 Trigger ignored: picker is disabled".to_string());
                return;
            }
            log("📅 Calendar toggle".to_string());
            dispatcher.dispatch(SelectionAction::Toggle { disabled });
        })
    };

    let close = {
        let dispatcher = picker.dispatcher();
        Callback::from(move |_: ()| {
            dispatcher.dispatch(SelectionAction::Close);
        })
    };

    let prev_month = {
        let dispatcher = picker.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(SelectionAction::NavigateMonth(-1));
        })
    };

    let next_month = {
        let dispatcher = picker.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(SelectionAction::NavigateMonth(1));
        })
    };

    let select_day = {
        let dispatcher = picker.dispatcher();
        let on_change = on_change.clone();
        let log = log.clone();
        Callback::from(move |cell: DayCell| match selection_for_cell(&cell, &bounds) {
            Some(date) => {
                log(format!("📅 Selected {}", date));
                dispatcher.dispatch(SelectionAction::Select(date));
                on_change.emit(date.to_canonical_string());
            }
            None => log(format!("📅 Ignored click on {}", cell.date)),
        })
    };

    let jump_to_today = {
        let dispatcher = picker.dispatcher();
        let policy = config.today_policy;
        let log = log.clone();
        Callback::from(move |_: MouseEvent| {
            let today = crate::services::date_utils::today();
            match resolve_today_target(today, &bounds, policy) {
                Some(date) => {
                    dispatcher.dispatch(SelectionAction::JumpTo(date));
                    on_change.emit(date.to_canonical_string());
                }
                None => log(format!("📅 Today ({}) is outside the allowed range", today)),
            }
        })
    };

    let on_keydown = {
        let dispatcher = picker.dispatcher();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(SelectionAction::Close);
            }
        })
    };

    let state = DatePickerState {
        selected: picker.0.selected(),
        visible_month: picker.0.visible_month(),
        is_open: picker.0.is_open() && !disabled,
        days: picker.0.day_views(today, &bounds),
        today_available: resolve_today_target(today, &bounds, config.today_policy).is_some(),
    };

    let actions = UseDatePickerActions {
        toggle,
        close,
        prev_month,
        next_month,
        select_day,
        jump_to_today,
        on_keydown,
    };

    UseDatePickerResult { state, actions }
}
