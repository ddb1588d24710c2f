// Booking import
// Reads a JSON array of bookings for the timeline

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::booking::TimelineBooking;

pub fn load_bookings(path: &Path) -> Result<Vec<TimelineBooking>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read bookings from {}", path.display()))?;
    parse_bookings(&data)
        .with_context(|| format!("failed to parse bookings from {}", path.display()))
}

/// Parse bookings from JSON. Bookings ending before they start are kept but
/// will not be drawn.
pub fn parse_bookings(json: &str) -> Result<Vec<TimelineBooking>> {
    let bookings: Vec<TimelineBooking> = serde_json::from_str(json)?;
    for booking in bookings.iter().filter(|b| !b.is_well_formed()) {
        log::warn!(
            "Booking '{}' ends ({}) before it starts ({}); it will not be shown",
            booking.id,
            booking.end_date,
            booking.start_date
        );
    }
    log::debug!("Parsed {} bookings", bookings.len());
    Ok(bookings)
}
