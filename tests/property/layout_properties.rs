// Property-based tests for the month timeline layout
// Grid shape, lane invariants and segment coverage over random booking sets

#[path = "../fixtures/mod.rs"]
mod fixtures;

use std::collections::BTreeSet;

use booking_timeline::models::booking::TimelineBooking;
use booking_timeline::models::layout::CellSize;
use booking_timeline::models::settings::TimelineSettings;
use booking_timeline::services::timeline::{
    allocate_lanes, build_month_grid, grid_range, segments_by_booking,
};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use fixtures::bookings::booking;
use proptest::prelude::*;

fn reference_date() -> impl Strategy<Value = NaiveDate> {
    (1990..2060i32, 1..=12u32, 1..=28u32)
        .prop_map(|(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

/// Up to 12 bookings around January 2024, some reaching past the grid edges.
fn booking_set() -> impl Strategy<Value = Vec<TimelineBooking>> {
    prop::collection::vec((-10i64..45, 0i64..12), 0..12).prop_map(|spans| {
        let base = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (offset, length))| {
                let start = base + Duration::days(offset);
                booking(&format!("b{:02}", i), start, start + Duration::days(length))
            })
            .collect()
    })
}

fn january() -> (NaiveDate, NaiveDate) {
    grid_range(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
}

proptest! {
    /// Property: the grid is whole weeks, Sunday to Saturday, covering the month
    #[test]
    fn prop_grid_covers_month_in_whole_weeks(reference in reference_date()) {
        let grid = build_month_grid(reference, reference);
        let first = grid.days.first().unwrap().date;
        let last = grid.days.last().unwrap().date;

        prop_assert_eq!(grid.days.len() % 7, 0);
        prop_assert_eq!(first.weekday(), Weekday::Sun);
        prop_assert_eq!(last.weekday(), Weekday::Sat);
        prop_assert!(first <= reference.with_day(1).unwrap());
        let in_month = grid.days.iter().filter(|d| d.is_in_displayed_month).count();
        let next_month = (reference.with_day(1).unwrap() + Duration::days(32)).with_day(1).unwrap();
        prop_assert_eq!(in_month as i64, (next_month - reference.with_day(1).unwrap()).num_days());
    }

    /// Property: no two bookings share a lane on the same day
    #[test]
    fn prop_lanes_never_collide(bookings in booking_set()) {
        let (start, end) = january();
        let lanes = allocate_lanes(start, end, &bookings);

        for day in 0..35 {
            let on_day = lanes.lanes_on_day(day);
            let distinct: BTreeSet<usize> = on_day.iter().map(|(_, lane)| *lane).collect();
            prop_assert_eq!(distinct.len(), on_day.len());
        }
    }

    /// Property: a booking keeps one lane across its whole visible span
    #[test]
    fn prop_lanes_are_stable(bookings in booking_set()) {
        let (start, end) = january();
        let lanes = allocate_lanes(start, end, &bookings);

        for id in lanes.booking_ids() {
            let days: Vec<(usize, usize)> = lanes.days_for(id).collect();
            for pair in days.windows(2) {
                prop_assert_eq!(pair[1].0, pair[0].0 + 1);
                prop_assert_eq!(pair[1].1, pair[0].1);
            }
        }
    }

    /// Property: every visible day of every booking has a lane, and nothing else does
    #[test]
    fn prop_lanes_cover_exactly_active_days(bookings in booking_set()) {
        let (start, end) = january();
        let lanes = allocate_lanes(start, end, &bookings);

        for b in &bookings {
            for day in 0..35usize {
                let date = start + Duration::days(day as i64);
                prop_assert_eq!(b.is_active_on(date), lanes.lane(&b.id, day).is_some());
            }
        }
    }

    /// Property: input order does not change the assignment
    #[test]
    fn prop_allocation_is_order_independent(bookings in booking_set()) {
        let (start, end) = january();
        let forward = allocate_lanes(start, end, &bookings);
        let mut reversed = bookings.clone();
        reversed.reverse();
        prop_assert_eq!(forward, allocate_lanes(start, end, &reversed));
    }

    /// Property: segments tile the clipped span exactly, one start and one end each
    #[test]
    fn prop_segments_cover_clipped_span(
        bookings in booking_set(),
        width in 20.0f32..200.0,
        height in 40.0f32..200.0,
    ) {
        let (start, end) = january();
        let lanes = allocate_lanes(start, end, &bookings);
        let cell = CellSize::new(width, height);
        let segments = segments_by_booking(&bookings, start, end, &lanes, cell, &TimelineSettings::default());

        for (id, segs) in &segments {
            prop_assert_eq!(segs.iter().filter(|s| s.is_row_start).count(), 1);
            prop_assert_eq!(segs.iter().filter(|s| s.is_row_end).count(), 1);

            let mut covered = Vec::new();
            for seg in segs {
                for col in seg.first_col..=seg.last_col {
                    covered.push(seg.week_row * 7 + col);
                }
                prop_assert!((seg.left_px - seg.first_col as f32 * width).abs() < 1e-3);
                prop_assert!((seg.width_px - seg.column_span() as f32 * width).abs() < 1e-3);
            }
            let expected: Vec<usize> = lanes.days_for(id).map(|(day, _)| day).collect();
            prop_assert_eq!(covered, expected);
        }
    }

    /// Property: the lane looked up at each row start equals the booking's held lane
    #[test]
    fn prop_row_lane_matches_held_lane(bookings in booking_set()) {
        let (start, end) = january();
        let lanes = allocate_lanes(start, end, &bookings);
        let segments = segments_by_booking(
            &bookings, start, end, &lanes, CellSize::default(), &TimelineSettings::default(),
        );

        for (id, segs) in &segments {
            let held: BTreeSet<usize> = lanes.days_for(id).map(|(_, lane)| lane).collect();
            prop_assert_eq!(held.len(), 1);
            for seg in segs {
                prop_assert!(held.contains(&seg.lane));
            }
        }
    }
}

#[test]
fn test_lane_is_reused_after_release() {
    let (start, end) = january();
    let bookings = vec![
        booking("A", start, start + Duration::days(2)),
        booking("B", start + Duration::days(3), start + Duration::days(5)),
    ];
    let lanes = allocate_lanes(start, end, &bookings);
    assert_eq!(lanes.lane("B", 3), Some(0));
}
