use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::booking::TimelineBooking;
use crate::models::layout::{CellSize, LaneAssignment, RenderSegment};
use crate::models::settings::TimelineSettings;
use crate::services::timeline::lanes::layout_order;
use crate::utils::date::days_between;

/// Split one booking into per-week-row rectangles.
///
/// The booking's normalized span is clipped to `[grid_start, grid_end]`; a
/// booking entirely outside the grid (or ending before it starts) yields no
/// segments. Each row's lane is looked up at that row's first visible day.
/// Unmeasured cell dimensions fall back to the configured defaults.
pub fn build_segments(
    booking: &TimelineBooking,
    grid_start: NaiveDate,
    grid_end: NaiveDate,
    lanes: &LaneAssignment,
    cell: CellSize,
    settings: &TimelineSettings,
) -> Vec<RenderSegment> {
    let start = booking.normalized_start();
    let end = booking.normalized_end();
    let display_start = start.max(grid_start);
    let display_end = end.min(grid_end);
    if display_end < display_start {
        return Vec::new();
    }

    let cell = cell.sanitized(settings);
    let start_index = days_between(grid_start, display_start) as usize;
    let end_index = days_between(grid_start, display_end) as usize;
    let (start_week, start_col) = (start_index / 7, start_index % 7);
    let (end_week, end_col) = (end_index / 7, end_index % 7);

    (start_week..=end_week)
        .map(|week| {
            let is_first = week == start_week;
            let is_last = week == end_week;
            let first_col = if is_first { start_col } else { 0 };
            let last_col = if is_last { end_col } else { 6 };

            let row_start_day = week * 7 + first_col;
            let lane = match lanes.lane(&booking.id, row_start_day) {
                Some(lane) => lane,
                None => {
                    log::warn!(
                        "No lane for booking '{}' on day {}, drawing in lane 0",
                        booking.id,
                        row_start_day
                    );
                    0
                }
            };

            RenderSegment {
                segment_id: RenderSegment::segment_id_for(&booking.id, week),
                booking_id: booking.id.clone(),
                week_row: week,
                lane,
                first_col,
                last_col,
                top_px: week as f32 * cell.height_px + settings.lane_offset_px(lane),
                left_px: first_col as f32 * cell.width_px,
                width_px: (last_col - first_col + 1) as f32 * cell.width_px,
                is_row_start: is_first,
                is_row_end: is_last,
                is_clipped_start: is_first && start < grid_start,
                is_clipped_end: is_last && end > grid_end,
            }
        })
        .collect()
}

/// Segments for every booking that is visible in the grid, keyed by booking id.
pub fn segments_by_booking(
    bookings: &[TimelineBooking],
    grid_start: NaiveDate,
    grid_end: NaiveDate,
    lanes: &LaneAssignment,
    cell: CellSize,
    settings: &TimelineSettings,
) -> BTreeMap<String, Vec<RenderSegment>> {
    let mut segments = BTreeMap::new();
    for booking in layout_order(grid_start, grid_end, bookings) {
        let built = build_segments(booking, grid_start, grid_end, lanes, cell, settings);
        if !built.is_empty() {
            segments.insert(booking.id.clone(), built);
        }
    }
    segments
}
