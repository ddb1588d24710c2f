// Booking module
// Read-only view of a booking as the timeline engine sees it

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::normalize_to_midnight;

/// Lifecycle state of a booking. Only used for presentation, never for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::InProgress => "In progress",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    /// Completed bookings get a checkmark on their final segment.
    pub fn shows_checkmark(&self) -> bool {
        matches!(self, BookingStatus::Completed)
    }
}

/// A date-ranged booking supplied by the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineBooking {
    pub id: String,
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: BookingStatus,
}

impl TimelineBooking {
    /// Create a pending booking
    ///
    /// # Examples
    /// ```
    /// use booking_timeline::models::booking::TimelineBooking;
    /// use chrono::{Local, TimeZone};
    ///
    /// let start = Local.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
    /// let end = Local.with_ymd_and_hms(2024, 1, 3, 17, 0, 0).unwrap();
    /// let booking = TimelineBooking::new("b-1", "Dog sitting", start, end);
    /// assert!(booking.is_well_formed());
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start_date: DateTime<Local>,
        end_date: DateTime<Local>,
    ) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
            title: title.into(),
            status: BookingStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn normalized_start(&self) -> NaiveDate {
        normalize_to_midnight(self.start_date)
    }

    pub fn normalized_end(&self) -> NaiveDate {
        normalize_to_midnight(self.end_date)
    }

    /// Whether the booking's normalized span includes `date`.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.normalized_start() <= date && date <= self.normalized_end()
    }

    /// A booking ending before it starts has no active days.
    pub fn is_well_formed(&self) -> bool {
        self.normalized_start() <= self.normalized_end()
    }
}
