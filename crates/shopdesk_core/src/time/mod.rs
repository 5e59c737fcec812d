//! Time sources and reporting-range math.

pub mod clock;
pub mod range;
