use thiserror::Error;

use crate::date::{MAX_YEAR, MIN_YEAR};

/// Errors raised while constructing or parsing calendar dates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Input does not follow the `YYYY-MM-DD` shape
    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    Malformed(String),
    /// Month outside 1..=12
    #[error("month {0} is not between 1 and 12")]
    InvalidMonth(u32),
    /// Well-formed but not a real day (e.g. February 30)
    #[error("{year:04}-{month:02}-{day:02} is not a real calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Year cannot be written as four digits
    #[error("year {0} is outside the supported range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    YearOutOfRange(i32),
}
