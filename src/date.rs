// 📅 Date Codec
// Calendar dates in a fixed YYYY-MM-DD textual form.

use crate::error::{Result, ZooError};
use serde::Serialize;
use std::fmt;

/// A plain year/month/day triple.
///
/// No calendar validation happens here: birth-date estimation may combine a
/// year with an arrival month/day that never existed in that year, and the
/// value is still rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        CalendarDate { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse `<int>-<int>-<int>`. Components may have any digit width.
pub fn parse_iso_date(value: &str) -> Result<CalendarDate> {
    let invalid = || ZooError::format(format!("Invalid ISO date: {}", value));

    let mut parts = value.splitn(3, '-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(invalid()),
    };

    Ok(CalendarDate {
        year: year.parse().map_err(|_| invalid())?,
        month: month.parse().map_err(|_| invalid())?,
        day: day.parse().map_err(|_| invalid())?,
    })
}

/// Render with year padded to 4 digits, month and day to 2.
pub fn format_iso_date(date: &CalendarDate) -> String {
    date.to_string()
}
