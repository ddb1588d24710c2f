use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;

use crate::models::booking::TimelineBooking;
use crate::models::layout::LaneAssignment;
use crate::utils::date::{add_days, days_between};

/// A booking reduced to what the allocator needs.
struct Span<'a> {
    id: &'a str,
    start: NaiveDate,
    end: NaiveDate,
}

/// Assign every booking a vertical lane for each grid day it is active on.
///
/// Greedy first-fit sweep over the days of `[grid_start, grid_end]`. Active
/// bookings are visited in `(normalized start, id)` order; a booking keeps the
/// lane it took on its first active day for as long as it stays active, and
/// newcomers take the lowest lane nobody holds that day. Lanes are only
/// remembered within a single call.
pub fn allocate_lanes(
    grid_start: NaiveDate,
    grid_end: NaiveDate,
    bookings: &[TimelineBooking],
) -> LaneAssignment {
    let mut assignment = LaneAssignment::new();
    let total_days = days_between(grid_start, grid_end) + 1;
    if total_days <= 0 || bookings.is_empty() {
        return assignment;
    }

    let spans: Vec<Span> = layout_order(grid_start, grid_end, bookings)
        .into_iter()
        .map(|booking| Span {
            id: booking.id.as_str(),
            start: booking.normalized_start(),
            end: booking.normalized_end(),
        })
        .collect();
    let mut held: HashMap<&str, usize> = HashMap::new();

    for day_index in 0..total_days {
        let day = add_days(grid_start, day_index);
        let day_index = day_index as usize;
        let active: Vec<&Span> = spans
            .iter()
            .filter(|span| span.start <= day && day <= span.end)
            .collect();
        if active.is_empty() {
            continue;
        }

        // Bookings already holding a lane claim it before any newcomer scans.
        let mut used: BTreeSet<usize> = active
            .iter()
            .filter_map(|span| held.get(span.id).copied())
            .collect();

        for span in active {
            let lane = match held.get(span.id) {
                Some(lane) => *lane,
                None => {
                    let lane = (0..).find(|lane| !used.contains(lane)).unwrap_or(0);
                    used.insert(lane);
                    held.insert(span.id, lane);
                    lane
                }
            };
            assignment.insert(span.id, day_index, lane);
        }
    }

    log::debug!(
        "Allocated lanes for {} bookings over {} days: {} lanes, {} entries",
        held.len(),
        total_days,
        assignment.lane_count(),
        assignment.len()
    );
    assignment
}

/// Bookings overlapping the grid in allocation order: `(start, id)`, with
/// duplicate ids dropped after their first occurrence.
pub fn layout_order<'a>(
    grid_start: NaiveDate,
    grid_end: NaiveDate,
    bookings: &'a [TimelineBooking],
) -> Vec<&'a TimelineBooking> {
    let mut visible: Vec<&TimelineBooking> = bookings
        .iter()
        .filter(|booking| {
            let (start, end) = (booking.normalized_start(), booking.normalized_end());
            start <= end && start <= grid_end && end >= grid_start
        })
        .collect();

    visible.sort_by(|a, b| {
        a.normalized_start()
            .cmp(&b.normalized_start())
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.normalized_end().cmp(&b.normalized_end()))
    });

    let mut seen = HashSet::new();
    visible.retain(|booking| {
        let first = seen.insert(booking.id.as_str());
        if !first {
            log::warn!("Ignoring duplicate booking id '{}' in timeline layout", booking.id);
        }
        first
    });
    visible
}
