use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::components::DatePicker;
use crate::hooks::use_date_picker::DatePickerConfig;
use crate::services::date_utils::{format_date_for_display, one_year_after, today};
use crate::services::logging::Logger;

/// Assignment submission form with a bounded due-date picker
#[function_component(SubmitAssignmentForm)]
pub fn submit_assignment_form() -> Html {
    let title = use_state(String::new);
    let due_date = use_state(|| Option::<String>::None);
    let form_error = use_state(|| Option::<String>::None);
    let submitted = use_state(|| Option::<String>::None);

    let earliest = today();
    let latest = one_year_after(earliest);

    let on_title_change = {
        let title = title.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let on_due_date_change = {
        let due_date = due_date.clone();
        let form_error = form_error.clone();
        Callback::from(move |value: String| {
            Logger::info_with_component("assignment-form", &format!("Due date set to {}", value));
            due_date.set(Some(value));
            form_error.set(None);
        })
    };

    let on_submit = {
        let title = title.clone();
        let due_date = due_date.clone();
        let form_error = form_error.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(due) = (*due_date).clone() else {
                Logger::warn_with_component("assignment-form", "Submit blocked: no due date");
                form_error.set(Some("Pick a due date".to_string()));
                return;
            };

            let name = if title.trim().is_empty() { "Untitled assignment" } else { title.trim() };
            let shown = due
                .parse()
                .map(format_date_for_display)
                .unwrap_or_else(|_| due.clone());
            submitted.set(Some(format!("\"{}\" submitted, due {} ({})", name, shown, due)));
        })
    };

    html! {
        <section class="submit-assignment-section">
            <h2>{"📝 Submit Assignment"}</h2>

            {if let Some(message) = (*submitted).as_ref() {
                html! { <div class="form-message success">{message}</div> }
            } else { html! {} }}

            <form class="submit-assignment-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="assignment-title">{"Assignment title"}</label>
                    <input
                        type="text"
                        id="assignment-title"
                        name="title"
                        placeholder="Essay on the French Revolution..."
                        value={(*title).clone()}
                        onchange={on_title_change}
                    />
                </div>

                <div class="form-group">
                    <DatePicker
                        label={"Due date".to_string()}
                        name={"due_date".to_string()}
                        placeholder={"Choose a due date".to_string()}
                        value={(*due_date).clone()}
                        on_change={on_due_date_change}
                        min_date={Some(earliest)}
                        max_date={Some(latest)}
                        error={(*form_error).clone()}
                        config={DatePickerConfig { enable_logging: true, ..DatePickerConfig::default() }}
                    />
                </div>

                <button type="submit" class="btn btn-primary">{"Submit"}</button>
            </form>
        </section>
    }
}
