//! Core domain logic for the shop console.
//! This crate is the single source of truth for business invariants:
//! the entity store and its audit trail, reporting ranges, and staff
//! availability.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod store;
pub mod time;
pub mod view;

pub use config::{ConfigError, OrgSettings};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::aggregate::{CollectionsReplace, ShopData};
pub use model::history::{Actor, HistoryAction, HistoryEntry, Section};
pub use model::validation::ValidationError;
pub use repo::snapshot_repo::{
    load_or_default, MemorySnapshotRepository, RepoError, RepoResult, SnapshotRepository,
    SqliteSnapshotRepository, STORAGE_KEY,
};
pub use schedule::availability::{Availability, AvailabilityGrid, AvailabilityResolver};
pub use schedule::parser::{parse_schedule, Interval};
pub use store::{CommandOutcome, EntityKey, MutationOutcome, ShopStore, StoreCommand};
pub use time::clock::{Clock, FixedClock, SystemClock};
pub use time::range::{compute_range, in_range, FiscalYearStart, RangeKind, TimeRange};
pub use view::ShopView;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
