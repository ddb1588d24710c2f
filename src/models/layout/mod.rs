// Layout module
// Lane assignments and drawable bar segments produced by the timeline engine

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::settings::TimelineSettings;

/// Per-booking, per-day lane index for one grid.
///
/// Keyed `booking id -> day index -> lane`; both levels are ordered so that
/// iteration is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneAssignment {
    lanes: BTreeMap<String, BTreeMap<usize, usize>>,
}

impl LaneAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, booking_id: &str, day_index: usize, lane: usize) {
        self.lanes
            .entry(booking_id.to_string())
            .or_default()
            .insert(day_index, lane);
    }

    pub fn lane(&self, booking_id: &str, day_index: usize) -> Option<usize> {
        self.lanes
            .get(booking_id)
            .and_then(|days| days.get(&day_index))
            .copied()
    }

    /// All `(day index, lane)` entries for one booking, in day order.
    pub fn days_for(&self, booking_id: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.lanes
            .get(booking_id)
            .into_iter()
            .flat_map(|days| days.iter().map(|(day, lane)| (*day, *lane)))
    }

    /// `(booking id, lane)` for every booking active on `day_index`, by booking id.
    pub fn lanes_on_day(&self, day_index: usize) -> Vec<(&str, usize)> {
        self.lanes
            .iter()
            .filter_map(|(id, days)| days.get(&day_index).map(|lane| (id.as_str(), *lane)))
            .collect()
    }

    /// Lanes needed to draw `day_index` (highest lane used + 1).
    pub fn lane_count_on_day(&self, day_index: usize) -> usize {
        self.lanes_on_day(day_index)
            .into_iter()
            .map(|(_, lane)| lane + 1)
            .max()
            .unwrap_or(0)
    }

    /// Lanes needed to draw the busiest day of the grid.
    pub fn lane_count(&self) -> usize {
        self.lanes
            .values()
            .flat_map(|days| days.values())
            .map(|lane| lane + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn booking_ids(&self) -> impl Iterator<Item = &str> {
        self.lanes.keys().map(String::as_str)
    }

    /// Number of `(booking, day)` entries.
    pub fn len(&self) -> usize {
        self.lanes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// Measured size of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width_px: f32,
    pub height_px: f32,
}

impl CellSize {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self { width_px, height_px }
    }

    /// Configured fallback used before the first measurement.
    pub fn fallback(settings: &TimelineSettings) -> Self {
        Self::new(settings.default_cell_width_px, settings.default_cell_height_px)
    }

    /// Replace unmeasured (zero, negative or non-finite) dimensions with the defaults.
    pub fn sanitized(&self, settings: &TimelineSettings) -> Self {
        let pick = |measured: f32, fallback: f32| {
            if measured.is_finite() && measured > 0.0 {
                measured
            } else {
                fallback
            }
        };
        Self {
            width_px: pick(self.width_px, settings.default_cell_width_px),
            height_px: pick(self.height_px, settings.default_cell_height_px),
        }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::fallback(&TimelineSettings::default())
    }
}

/// One drawable rectangle: the part of a booking that falls in a single week row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSegment {
    /// `"{booking id}-{week row}"`, stable across render passes
    pub segment_id: String,
    pub booking_id: String,
    pub week_row: usize,
    pub lane: usize,
    /// First and last occupied columns, Sunday = 0
    pub first_col: usize,
    pub last_col: usize,
    pub top_px: f32,
    pub left_px: f32,
    pub width_px: f32,
    /// First segment of the booking's visible span (rounded left corner, title)
    pub is_row_start: bool,
    /// Last segment of the booking's visible span (rounded right corner, checkmark)
    pub is_row_end: bool,
    /// The booking started before the visible grid
    pub is_clipped_start: bool,
    /// The booking ends after the visible grid
    pub is_clipped_end: bool,
}

impl RenderSegment {
    pub fn segment_id_for(booking_id: &str, week_row: usize) -> String {
        format!("{}-{}", booking_id, week_row)
    }

    pub fn column_span(&self) -> usize {
        self.last_col - self.first_col + 1
    }
}
