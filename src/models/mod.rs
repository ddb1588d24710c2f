// Module exports for models

pub mod booking;
pub mod calendar_day;
pub mod layout;
pub mod settings;
