use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::grid::build_month_grid;
use super::lanes::allocate_lanes;
use super::segments::segments_by_booking;
use crate::models::booking::TimelineBooking;
use crate::models::calendar_day::CalendarDay;
use crate::models::layout::{CellSize, LaneAssignment, RenderSegment};
use crate::models::settings::TimelineSettings;
use crate::utils::date::shift_months;

/// Everything a renderer needs for one month, produced by a single layout pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub reference_date: NaiveDate,
    pub grid_start: NaiveDate,
    pub grid_end: NaiveDate,
    pub days: Vec<CalendarDay>,
    pub cell_size: CellSize,
    pub lanes: LaneAssignment,
    pub segments: BTreeMap<String, Vec<RenderSegment>>,
}

impl TimelineLayout {
    pub fn week_count(&self) -> usize {
        self.days.len() / 7
    }

    /// Cell height needed to show every lane of the busiest day without clipping.
    pub fn required_cell_height(&self, settings: &TimelineSettings) -> f32 {
        match self.lanes.lane_count() {
            0 => settings.bar_top_offset_px,
            lanes => settings.lane_offset_px(lanes - 1) + settings.bar_height_px,
        }
    }

    /// Segments drawn in one week row, ordered by lane then column.
    pub fn segments_in_row(&self, week_row: usize) -> Vec<&RenderSegment> {
        let mut row: Vec<&RenderSegment> = self
            .segments
            .values()
            .flatten()
            .filter(|segment| segment.week_row == week_row)
            .collect();
        row.sort_by_key(|segment| (segment.lane, segment.first_col));
        row
    }
}

/// The month timeline's only mutable state: which month is shown and how big
/// a grid cell was last measured to be.
#[derive(Debug, Clone)]
pub struct TimelineView {
    reference_date: NaiveDate,
    cell_size: Option<CellSize>,
    settings: TimelineSettings,
}

impl TimelineView {
    pub fn new(reference_date: NaiveDate, settings: TimelineSettings) -> Self {
        Self {
            reference_date,
            cell_size: None,
            settings,
        }
    }

    pub fn for_today(settings: TimelineSettings) -> Self {
        Self::new(Local::now().date_naive(), settings)
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn settings(&self) -> &TimelineSettings {
        &self.settings
    }

    /// Last measured cell size, or the configured fallback before any measurement.
    pub fn cell_size(&self) -> CellSize {
        self.cell_size
            .unwrap_or_else(|| CellSize::fallback(&self.settings))
            .sanitized(&self.settings)
    }

    pub fn next_month(&mut self) {
        self.reference_date = shift_months(self.reference_date, 1);
    }

    pub fn previous_month(&mut self) {
        self.reference_date = shift_months(self.reference_date, -1);
    }

    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.reference_date = today;
    }

    /// Record a cell measurement. Returns true when it differs from the last one.
    pub fn measure(&mut self, width_px: f32, height_px: f32) -> bool {
        let measured = CellSize::new(width_px, height_px);
        if self.cell_size == Some(measured) {
            return false;
        }
        log::trace!("Timeline cell measured at {}x{}", width_px, height_px);
        self.cell_size = Some(measured);
        true
    }

    /// Run a full grid, lane and segment pass for the current month.
    pub fn layout(&self, bookings: &[TimelineBooking], today: NaiveDate) -> TimelineLayout {
        let grid = build_month_grid(self.reference_date, today);
        let lanes = allocate_lanes(grid.grid_start, grid.grid_end, bookings);
        let cell_size = self.cell_size();
        let segments = segments_by_booking(
            bookings,
            grid.grid_start,
            grid.grid_end,
            &lanes,
            cell_size,
            &self.settings,
        );

        log::debug!(
            "Laid out {} of {} bookings for {} ({} weeks, {} lanes)",
            segments.len(),
            bookings.len(),
            self.reference_date.format("%Y-%m"),
            grid.week_count(),
            lanes.lane_count()
        );

        TimelineLayout {
            reference_date: self.reference_date,
            grid_start: grid.grid_start,
            grid_end: grid.grid_end,
            days: grid.days,
            cell_size,
            lanes,
            segments,
        }
    }
}
