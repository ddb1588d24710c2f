// Service module exports

pub mod booking_import;
pub mod settings;
pub mod timeline;
