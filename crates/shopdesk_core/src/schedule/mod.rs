//! Weekly schedules and staff availability.

pub mod availability;
pub mod parser;
