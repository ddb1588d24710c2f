// Booking Timeline Library
// Month-grid layout engine for date-ranged bookings

pub mod models;
pub mod services;
pub mod utils;
