// Month timeline layout
// Grid building, lane allocation and bar segmentation for date-ranged bookings

pub mod grid;
pub mod lanes;
pub mod segments;
mod view;

pub use grid::{build_month_grid, grid_range, MonthGrid};
pub use lanes::allocate_lanes;
pub use segments::{build_segments, segments_by_booking};
pub use view::{TimelineLayout, TimelineView};
