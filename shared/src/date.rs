//! Calendar date values used by the date selector.
//!
//! `CalendarDate` is a plain `(year, month, day)` triple that is always a real
//! day, and `YearMonth` is the month shown in the popover. Both order
//! chronologically. The canonical text form is `YYYY-MM-DD`, which is what the
//! selector hands back to the surrounding form no matter how the date is
//! displayed.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DateError;

/// Smallest year accepted by constructors and navigation
pub const MIN_YEAR: i32 = 1;
/// Largest year accepted by constructors and navigation
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Check if a year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get days in a month (accounting for leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
        .unwrap_or("Invalid Month")
}

/// A real calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date, rejecting anything that is not a real day
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let year_month = YearMonth::new(year, month)?;
        if day == 0 || day > year_month.days_in_month() {
            return Err(DateError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Build a date by clamping each part into range, e.g. for clock readings
    /// or "same day next year" arithmetic that may land on February 29
    pub fn saturating(year: i32, month: u32, day: u32) -> Self {
        let year = year.clamp(MIN_YEAR, MAX_YEAR);
        let month = month.clamp(1, 12);
        let day = day.clamp(1, days_in_month(year, month));
        Self { year, month, day }
    }

    /// Parts are already known to form a real day (grid spill-over may leave
    /// the supported year range, which is fine for display-only cells)
    pub(crate) const fn from_parts(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The month this date belongs to
    pub fn year_month(&self) -> YearMonth {
        YearMonth { year: self.year, month: self.month }
    }

    /// The following day, rolling over month and year ends
    pub fn next_day(&self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self::from_parts(self.year, self.month, self.day + 1)
        } else if self.month < 12 {
            Self::from_parts(self.year, self.month + 1, 1)
        } else {
            Self::from_parts(self.year + 1, 1, 1)
        }
    }

    /// Weekday index, 0 = Sunday
    pub fn weekday(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }

    /// `YYYY-MM-DD`, zero padded
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Long English form, e.g. "March 15, 2026"
    pub fn format_long(&self) -> String {
        format!("{} {}, {}", month_name(self.month), self.day, self.year)
    }

    /// Convert from a chrono date, checking the supported year range
    pub fn from_naive(date: NaiveDate) -> Result<Self, DateError> {
        Self::new(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parse `YYYY-MM-DD`. A trailing RFC 3339 time part is ignored so that
    /// stored timestamps can be fed straight in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DateError::Malformed(s.to_string());

        let trimmed = s.trim();
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        let parts: [&str; 3] = date_part
            .split('-')
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| malformed())?;
        let [year, month, day] = parts;

        let well_formed = year.len() == 4
            && month.len() == 2
            && day.len() == 2
            && parts.iter().all(|part| part.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(malformed());
        }

        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let month = month.parse::<u32>().map_err(|_| malformed())?;
        let day = day.parse::<u32>().map_err(|_| malformed())?;

        Self::new(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// A month of a specific year, used as the visible page of the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(year));
        }
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Get the first day of the week for this month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday()
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::from_parts(self.year, self.month, 1)
    }

    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::from_parts(self.year, self.month, self.days_in_month())
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year == self.year && date.month == self.month
    }

    /// Move by `delta` months. Targets outside the supported year range
    /// leave the month unchanged.
    pub fn offset(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
        let month = index.rem_euclid(12) + 1;

        match i32::try_from(index.div_euclid(12)) {
            Ok(year) if (MIN_YEAR..=MAX_YEAR).contains(&year) => Self {
                year,
                month: month as u32,
            },
            _ => {
                log::debug!("📅 Ignoring navigation from {} by {} months: out of range", self, delta);
                self
            }
        }
    }

    pub fn previous(self) -> Self {
        self.offset(-1)
    }

    pub fn next(self) -> Self {
        self.offset(1)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}
