// Calendar day module
// One cell of the month grid

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    /// False for the padding days borrowed from the adjacent months.
    pub is_in_displayed_month: bool,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, reference: NaiveDate, today: NaiveDate) -> Self {
        Self {
            date,
            is_today: date == today,
            is_in_displayed_month: date.year() == reference.year()
                && date.month() == reference.month(),
        }
    }

    pub fn day_number(&self) -> u32 {
        self.date.day()
    }
}
