//! Audit history model.
//!
//! # Responsibility
//! - Define the immutable audit record written once per store mutation.
//! - Carry the acting user explicitly instead of an ambient constant.
//!
//! # Invariants
//! - Entries are never edited or removed after creation.
//! - The history sequence is ordered most-recent-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Default console operator name.
pub const DEFAULT_ACTOR: &str = "admin";

/// Kind of mutation an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryAction {
    Added,
    Updated,
    Deleted,
}

impl HistoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "Added",
            Self::Updated => "Updated",
            Self::Deleted => "Deleted",
        }
    }
}

/// Entity category an entry belongs to.
///
/// Override changes are recorded under `Staff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Appointments,
    Sales,
    Staff,
    Customers,
    Inventory,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Appointments => "appointments",
            Self::Sales => "sales",
            Self::Staff => "staff",
            Self::Customers => "customers",
            Self::Inventory => "inventory",
        }
    }

    /// Parses a case-insensitive section name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "appointments" => Some(Self::Appointments),
            "sales" => Some(Self::Sales),
            "staff" => Some(Self::Staff),
            "customers" => Some(Self::Customers),
            "inventory" => Some(Self::Inventory),
            _ => None,
        }
    }
}

/// Identity of whoever issued a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Actor(String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTOR)
    }
}

impl Display for Actor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Stamped by the store clock at mutation time.
    pub timestamp: DateTime<Utc>,
    pub action: HistoryAction,
    pub section: Section,
    /// Human-readable summary of the affected record.
    pub details: String,
    pub user: String,
}
