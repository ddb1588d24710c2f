// Settings module
// Layout constants for the month timeline, passed explicitly into the segment builder

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("default cell {axis} must be a positive number, got {value}")]
    InvalidCellSize { axis: &'static str, value: f32 },
    #[error("bar height must be a positive number, got {0}")]
    InvalidBarHeight(f32),
    #[error("{field} must be zero or positive, got {value}")]
    NegativeSpacing { field: &'static str, value: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Cell width used until the grid has been measured
    pub default_cell_width_px: f32,
    /// Cell height used until the grid has been measured
    pub default_cell_height_px: f32,
    /// Space above the first bar, reserved for the day number
    pub bar_top_offset_px: f32,
    pub bar_height_px: f32,
    pub bar_gap_px: f32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            default_cell_width_px: 100.0,
            default_cell_height_px: 104.0,
            bar_top_offset_px: 28.0,
            bar_height_px: 20.0,
            bar_gap_px: 4.0,
        }
    }
}

impl TimelineSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        for (axis, value) in [
            ("width", self.default_cell_width_px),
            ("height", self.default_cell_height_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidCellSize { axis, value });
            }
        }

        if !self.bar_height_px.is_finite() || self.bar_height_px <= 0.0 {
            return Err(SettingsError::InvalidBarHeight(self.bar_height_px));
        }

        for (field, value) in [
            ("bar top offset", self.bar_top_offset_px),
            ("bar gap", self.bar_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::NegativeSpacing { field, value });
            }
        }

        Ok(())
    }

    /// Vertical distance between the tops of two adjacent lanes.
    pub fn lane_pitch_px(&self) -> f32 {
        self.bar_height_px + self.bar_gap_px
    }

    /// Offset of a lane's bar from the top of its cell.
    pub fn lane_offset_px(&self, lane: usize) -> f32 {
        self.bar_top_offset_px + lane as f32 * self.lane_pitch_px()
    }

    /// How many whole bars fit inside a cell of the given height.
    pub fn max_visible_lanes(&self, cell_height_px: f32) -> usize {
        let available = cell_height_px - self.bar_top_offset_px;
        if available < self.bar_height_px {
            return 0;
        }
        // The last bar needs no trailing gap.
        ((available + self.bar_gap_px) / self.lane_pitch_px()).floor() as usize
    }
}
