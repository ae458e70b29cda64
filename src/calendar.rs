//! Date arithmetic for the Monday-to-Friday reporting week.

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

use crate::error::{Result, WsrError};
use crate::model::WeekStart;

pub fn is_week_start(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Mon
}

/// The five weekdays of the week anchored at `week`, Monday first.
pub fn week_days(week: WeekStart) -> [NaiveDate; 5] {
    let start = week.date();
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Week starts from `start` through the week containing `today`, in 7-day
/// strides. Empty when `start` is already past `today`.
pub fn week_starts_until(start: WeekStart, today: NaiveDate) -> Vec<WeekStart> {
    let mut weeks = Vec::new();
    let mut current = start;
    while current.date() <= today {
        weeks.push(current);
        current = current.succ();
    }
    weeks
}

pub fn week_starts_until_now(start: WeekStart) -> Vec<WeekStart> {
    week_starts_until(start, Local::now().date_naive())
}

/// Parse a week-start argument. `MM/DD/YYYY` is the historical input format;
/// `YYYY-MM-DD` is accepted as well.
pub fn parse_start_date(input: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%m/%d/%Y") {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date);
    }
    Err(WsrError::InvalidDate(input.to_string()))
}
