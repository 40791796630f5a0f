use shared::{CalendarDate, DateBounds, DayCellState};
use yew::prelude::*;

use crate::hooks::use_date_picker::{use_date_picker, DatePickerConfig};
use crate::hooks::use_outside_click::use_outside_click;
use crate::services::date_utils::*;

#[derive(Properties, PartialEq)]
pub struct DatePickerProps {
    /// Selected date in YYYY-MM-DD format; re-synced whenever it changes
    #[prop_or_default]
    pub value: Option<String>,
    /// Called with the canonical YYYY-MM-DD string when a day is picked
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub min_date: Option<CalendarDate>,
    #[prop_or_default]
    pub max_date: Option<CalendarDate>,
    /// Whether the date picker is disabled
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub placeholder: Option<String>,
    /// Optional label for the date picker
    #[prop_or_default]
    pub label: Option<String>,
    #[prop_or_default]
    pub error: Option<String>,
    /// Form field name; renders a hidden input carrying the canonical value
    #[prop_or_default]
    pub name: Option<String>,
    #[prop_or_default]
    pub config: DatePickerConfig,
}

#[function_component(DatePicker)]
pub fn date_picker(props: &DatePickerProps) -> Html {
    let calendar_ref = use_node_ref();
    let bounds = DateBounds::new(props.min_date, props.max_date);

    let picker = use_date_picker(
        props.value.clone(),
        bounds,
        props.disabled,
        props.on_change.clone(),
        props.config.clone(),
    );
    let state = &picker.state;
    let actions = &picker.actions;

    // Clicking or focusing outside closes the calendar
    use_outside_click(calendar_ref.clone(), state.is_open, actions.close.clone());

    let display_text = match state.selected {
        Some(date) if is_today(date) => format!("Today, {}", format_date_for_display(date)),
        Some(date) => format_date_for_display(date),
        None => props
            .placeholder
            .clone()
            .unwrap_or_else(|| "Select a date".to_string()),
    };

    let on_close_click = {
        let close = actions.close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    html! {
        <div
            class={classes!("date-picker", props.error.is_some().then_some("has-error"))}
            ref={calendar_ref}
            onkeydown={actions.on_keydown.clone()}
        >
            {if let Some(label) = &props.label {
                html! { <label class="date-picker-label">{label}</label> }
            } else { html! {} }}

            {if let Some(name) = &props.name {
                html! {
                    <input
                        type="hidden"
                        name={name.clone()}
                        value={state.selected.map(|date| date.to_canonical_string()).unwrap_or_default()}
                    />
                }
            } else { html! {} }}

            <div class="date-picker-input">
                <button
                    type="button"
                    class={classes!("date-display-button", state.selected.is_none().then_some("placeholder"))}
                    onclick={actions.toggle.clone()}
                    disabled={props.disabled}
                    aria-haspopup="dialog"
                    aria-expanded={state.is_open.to_string()}
                >
                    <span class="date-text">{display_text}</span>
                    <span class="calendar-icon">{"📅"}</span>
                </button>

                {if state.is_open {
                    html! {
                        <div class="calendar-dropdown" role="dialog">
                            <div class="calendar-header">
                                <button type="button" class="nav-button" aria-label="Previous month" onclick={actions.prev_month.clone()}>{"‹"}</button>
                                <span class="month-year">{format_month_caption(state.visible_month)}</span>
                                <button type="button" class="nav-button" aria-label="Next month" onclick={actions.next_month.clone()}>{"›"}</button>
                            </div>

                            <div class="calendar-grid">
                                <div class="weekday-header">
                                    {for WEEKDAY_LABELS.iter().map(|label| html! { <span>{*label}</span> })}
                                </div>

                                <div class="calendar-days" role="grid">
                                    {for state.days.iter().map(|view| {
                                        let cell = view.cell;
                                        let select_day = actions.select_day.clone();

                                        html! {
                                            <button
                                                type="button"
                                                class={classes!(view.classes())}
                                                disabled={!view.selectable}
                                                aria-disabled={(!view.selectable).to_string()}
                                                aria-selected={(view.state == DayCellState::Selected).to_string()}
                                                aria-label={cell.date.format_long()}
                                                onclick={Callback::from(move |_: MouseEvent| select_day.emit(cell))}
                                            >
                                                {cell.date.day()}
                                            </button>
                                        }
                                    })}
                                </div>
                            </div>

                            <div class="calendar-footer">
                                <button
                                    type="button"
                                    class="today-button"
                                    disabled={!state.today_available}
                                    onclick={actions.jump_to_today.clone()}
                                >
                                    {"Today"}
                                </button>
                                <button type="button" class="close-button" onclick={on_close_click}>
                                    {"Close"}
                                </button>
                            </div>
                        </div>
                    }
                } else { html! {} }}
            </div>

            {if let Some(error) = &props.error {
                html! { <p class="date-picker-error" role="alert">{error}</p> }
            } else { html! {} }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    async fn settle() {
        yew::platform::time::sleep(Duration::from_millis(10)).await;
    }

    /// A mount point for the picker plus an element outside of it
    struct Host {
        root: Element,
        outside: Element,
    }

    impl Host {
        fn new() -> Self {
            let document = web_sys::window().unwrap().document().unwrap();
            let body = document.body().unwrap();
            let root = document.create_element("div").unwrap();
            let outside = document.create_element("span").unwrap();
            body.append_child(&root).unwrap();
            body.append_child(&outside).unwrap();
            Self { root, outside }
        }

        fn find(&self, selector: &str) -> Option<Element> {
            self.root.query_selector(selector).unwrap()
        }

        fn click(&self, selector: &str) {
            let element = self.find(selector).unwrap();
            element.dyn_into::<HtmlElement>().unwrap().click();
        }

        fn is_open(&self) -> bool {
            self.find(".calendar-dropdown").is_some()
        }

        fn caption(&self) -> Option<String> {
            self.find(".month-year").and_then(|caption| caption.text_content())
        }

        fn mousedown_outside(&self) {
            let mut init = EventInit::new();
            init.bubbles(true);
            let event = Event::new_with_event_init_dict("mousedown", &init).unwrap();
            self.outside.dispatch_event(&event).unwrap();
        }
    }

    impl Drop for Host {
        fn drop(&mut self) {
            self.root.remove();
            self.outside.remove();
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, Callback<String>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let emitted = emitted.clone();
            Callback::from(move |value: String| emitted.borrow_mut().push(value))
        };
        (emitted, callback)
    }

    fn props(value: &str, on_change: Callback<String>) -> DatePickerProps {
        DatePickerProps {
            value: Some(value.to_string()),
            on_change,
            min_date: None,
            max_date: None,
            disabled: false,
            placeholder: None,
            label: None,
            error: None,
            name: None,
            config: DatePickerConfig::default(),
        }
    }

    #[wasm_bindgen_test]
    async fn test_picking_days_respects_bounds() {
        let host = Host::new();
        let (emitted, on_change) = recorder();
        let _app = yew::Renderer::<DatePicker>::with_root_and_props(
            host.root.clone(),
            DatePickerProps {
                min_date: Some(date(2026, 3, 10)),
                ..props("2026-03-15", on_change)
            },
        )
        .render();
        settle().await;
        assert!(!host.is_open());

        host.click(".date-display-button");
        settle().await;
        assert!(host.is_open());
        assert_eq!(host.caption().as_deref(), Some("March 2026"));

        let before_min = r#"button[aria-label="March 5, 2026"]"#;
        assert!(host.find(before_min).unwrap().has_attribute("disabled"));
        host.click(before_min);
        settle().await;
        assert!(emitted.borrow().is_empty());
        assert!(host.is_open());

        host.click(r#"button[aria-label="March 12, 2026"]"#);
        settle().await;
        assert_eq!(*emitted.borrow(), vec!["2026-03-12".to_string()]);
        assert!(!host.is_open());
    }

    #[wasm_bindgen_test]
    async fn test_outside_mousedown_closes_until_unmount() {
        let host = Host::new();
        let (emitted, on_change) = recorder();
        let app = yew::Renderer::<DatePicker>::with_root_and_props(
            host.root.clone(),
            props("2026-03-15", on_change),
        )
        .render();
        settle().await;

        host.click(".date-display-button");
        settle().await;
        assert!(host.is_open());

        host.mousedown_outside();
        settle().await;
        assert!(!host.is_open());

        host.click(".date-display-button");
        settle().await;
        assert!(host.is_open());

        app.destroy();
        settle().await;
        assert!(host.find(".date-picker").is_none());
        // The unmounted picker no longer reacts to the document
        host.mousedown_outside();
        settle().await;
        assert!(emitted.borrow().is_empty());
    }

    #[wasm_bindgen_test]
    async fn test_value_changes_resync_and_garbage_is_ignored() {
        let host = Host::new();
        let (_, on_change) = recorder();
        let mut app = yew::Renderer::<DatePicker>::with_root_and_props(
            host.root.clone(),
            props("2026-03-15", on_change.clone()),
        )
        .render();
        settle().await;
        host.click(".date-display-button");
        settle().await;

        app.update(props("2027-07-04", on_change.clone()));
        settle().await;
        assert_eq!(host.caption().as_deref(), Some("July 2027"));
        assert_eq!(
            host.find(r#"button[aria-label="July 4, 2027"]"#)
                .unwrap()
                .get_attribute("aria-selected")
                .as_deref(),
            Some("true")
        );

        app.update(props("not-a-date", on_change));
        settle().await;
        assert_eq!(host.caption().as_deref(), Some("July 2027"));
    }

    #[wasm_bindgen_test]
    async fn test_disabling_while_open_keeps_it_closed_after_reenable() {
        let host = Host::new();
        let (_, on_change) = recorder();
        let mut app = yew::Renderer::<DatePicker>::with_root_and_props(
            host.root.clone(),
            props("2026-03-15", on_change.clone()),
        )
        .render();
        settle().await;
        host.click(".date-display-button");
        settle().await;
        assert!(host.is_open());

        app.update(DatePickerProps {
            disabled: true,
            ..props("2026-03-15", on_change.clone())
        });
        settle().await;
        assert!(!host.is_open());
        assert!(host.find(".date-display-button").unwrap().has_attribute("disabled"));
        host.click(".date-display-button");
        settle().await;
        assert!(!host.is_open());

        app.update(props("2026-03-15", on_change));
        settle().await;
        assert!(!host.is_open());

        host.click(".date-display-button");
        settle().await;
        assert!(host.is_open());
    }

    #[wasm_bindgen_test]
    async fn test_today_button_disabled_when_today_is_out_of_range() {
        let host = Host::new();
        let (emitted, on_change) = recorder();
        let _app = yew::Renderer::<DatePicker>::with_root_and_props(
            host.root.clone(),
            DatePickerProps {
                max_date: Some(date(2000, 1, 1)),
                ..props("1999-12-15", on_change)
            },
        )
        .render();
        settle().await;
        host.click(".date-display-button");
        settle().await;

        assert!(host.find(".today-button").unwrap().has_attribute("disabled"));
        host.click(".today-button");
        settle().await;
        assert!(emitted.borrow().is_empty());
        assert!(host.is_open());
    }
}
