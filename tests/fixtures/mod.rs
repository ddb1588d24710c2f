// Test fixtures - reusable test data
// Provides consistent dates and bookings across all test files

#![allow(dead_code)]

use booking_timeline::models::booking::{BookingStatus, TimelineBooking};
use chrono::{Local, NaiveDate, TimeZone};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Mid-January 2024; its grid runs Sun Dec 31, 2023 to Sat Feb 3, 2024
    pub fn jan_15_2024() -> NaiveDate {
        ymd(2024, 1, 15)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Booking builders
pub mod bookings {
    use super::*;

    /// Booking from 09:00 on `start` to 17:00 on `end`.
    pub fn booking(id: &str, start: NaiveDate, end: NaiveDate) -> TimelineBooking {
        TimelineBooking::new(
            id,
            format!("Booking {}", id),
            Local
                .from_local_datetime(&start.and_hms_opt(9, 0, 0).unwrap())
                .earliest()
                .unwrap(),
            Local
                .from_local_datetime(&end.and_hms_opt(17, 0, 0).unwrap())
                .earliest()
                .unwrap(),
        )
    }

    pub fn completed(id: &str, start: NaiveDate, end: NaiveDate) -> TimelineBooking {
        booking(id, start, end).with_status(BookingStatus::Completed)
    }
}
