use js_sys::{Date, Object, Reflect};
use shared::{CalendarDate, YearMonth};
use wasm_bindgen::JsValue;

/// Column headers for the day grid, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Get the current local date from the browser clock
pub fn today() -> CalendarDate {
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    CalendarDate::saturating(year, month, day)
}

/// Check if a date is today
pub fn is_today(date: CalendarDate) -> bool {
    date == today()
}

/// Same day one year from `date` (February 29 falls back to the 28th)
pub fn one_year_after(date: CalendarDate) -> CalendarDate {
    let month = date.year_month().offset(12);
    CalendarDate::saturating(month.year(), month.month(), date.day())
}

/// Format a date for display using the browser locale (e.g. "March 15, 2026"
/// in en-US). Never used for the emitted value.
pub fn format_date_for_display(date: CalendarDate) -> String {
    // The JS Date constructor maps years 0..=99 onto 1900..=1999
    if date.year() < 100 {
        return date.format_long();
    }

    let js_date = Date::new_with_year_month_day(
        date.year() as u32,
        date.month() as i32 - 1,
        date.day() as i32,
    );

    match display_options() {
        Ok(options) => String::from(js_date.to_locale_date_string("default", &options)),
        Err(_) => date.format_long(),
    }
}

/// Caption above the grid, e.g. "March 2026"
pub fn format_month_caption(month: YearMonth) -> String {
    month.to_string()
}

fn display_options() -> Result<JsValue, JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"year".into(), &"numeric".into())?;
    Reflect::set(&options, &"month".into(), &"long".into())?;
    Reflect::set(&options, &"day".into(), &"numeric".into())?;
    Ok(options.into())
}
