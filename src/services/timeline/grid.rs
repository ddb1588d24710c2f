use chrono::NaiveDate;

use crate::models::calendar_day::CalendarDay;
use crate::utils::date::{
    days_between, month_end, month_start, saturating_add_days, weekday_from_sunday,
};

/// The visible month padded out to whole Sunday-to-Saturday weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub reference_date: NaiveDate,
    pub grid_start: NaiveDate,
    pub grid_end: NaiveDate,
    pub days: Vec<CalendarDay>,
}

impl MonthGrid {
    pub fn total_days(&self) -> usize {
        self.days.len()
    }

    pub fn week_count(&self) -> usize {
        self.days.len() / 7
    }

    /// Day index of `date` within the grid, if visible.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        if date < self.grid_start || date > self.grid_end {
            return None;
        }
        usize::try_from(days_between(self.grid_start, date)).ok()
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// First and last visible dates for the month containing `reference`.
///
/// At the edges of chrono's calendar the padding is cut short at
/// `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn grid_range(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = month_start(reference);
    let last = month_end(reference);
    let grid_start = saturating_add_days(first, -weekday_from_sunday(first));
    let grid_end = saturating_add_days(last, 6 - weekday_from_sunday(last));
    (grid_start, grid_end)
}

/// Build the week grid for the month containing `reference`.
pub fn build_month_grid(reference: NaiveDate, today: NaiveDate) -> MonthGrid {
    let (grid_start, grid_end) = grid_range(reference);
    let mut days = Vec::new();
    let mut date = grid_start;
    // `iter_days` never yields NaiveDate::MAX, so step with succ_opt instead.
    loop {
        days.push(CalendarDay::new(date, reference, today));
        match date.succ_opt() {
            Some(next) if next <= grid_end => date = next,
            _ => break,
        }
    }

    MonthGrid {
        reference_date: reference,
        grid_start,
        grid_end,
        days,
    }
}
