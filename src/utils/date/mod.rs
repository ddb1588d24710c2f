// Date utility functions
// Midnight normalization and month arithmetic shared by the timeline engine

use chrono::{DateTime, Datelike, Duration, Local, Months, NaiveDate};

/// Clear the time-of-day, keeping only the local calendar date.
pub fn normalize_to_midnight(date: DateTime<Local>) -> NaiveDate {
    date.date_naive()
}

/// Whole days from `from` to `to`. Negative when `to` is earlier.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Like `add_days`, but stops at `NaiveDate::MIN` / `NaiveDate::MAX` instead of overflowing.
pub fn saturating_add_days(date: NaiveDate, days: i64) -> NaiveDate {
    match date.checked_add_signed(Duration::days(days)) {
        Some(shifted) => shifted,
        None if days < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let first = month_start(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next_first) => next_first - Duration::days(1),
        // Only reachable for the very last month chrono can represent.
        None => NaiveDate::MAX,
    }
}

/// Step `date` by `delta` months, clamping the day to the target month's length.
pub fn shift_months(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

/// Days since the most recent Sunday (Sunday = 0).
pub fn weekday_from_sunday(date: NaiveDate) -> i64 {
    i64::from(date.weekday().num_days_from_sunday())
}
