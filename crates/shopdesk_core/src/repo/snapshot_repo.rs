//! Snapshot repository contract with SQLite and in-memory implementations.
//!
//! # Responsibility
//! - Save and load the serialized `ShopData` aggregate by storage key.
//! - Provide the silent-fallback load used at store start-up.
//!
//! # Invariants
//! - `save` replaces any earlier snapshot under the same key.
//! - `load` returns `Ok(None)` for an absent key and an error for a payload
//!   that cannot be decoded.
//!
//! # See also
//! - `db::migrations` for the `snapshots` table.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::aggregate::ShopData;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the console aggregate is stored.
pub const STORAGE_KEY: &str = "barbershopData";

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from snapshot persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Aggregate could not be encoded or decoded as JSON.
    Serialization(serde_json::Error),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Backend refused the operation or holds unusable data.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "snapshot serialization failed: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "snapshot repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid snapshot data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Keyed snapshot storage for the whole aggregate.
pub trait SnapshotRepository {
    fn save(&self, key: &str, data: &ShopData) -> RepoResult<()>;
    fn load(&self, key: &str) -> RepoResult<Option<ShopData>>;
}

impl<R: SnapshotRepository + ?Sized> SnapshotRepository for &R {
    fn save(&self, key: &str, data: &ShopData) -> RepoResult<()> {
        (**self).save(key, data)
    }

    fn load(&self, key: &str) -> RepoResult<Option<ShopData>> {
        (**self).load(key)
    }
}

/// Loads the snapshot under `key`, falling back to `default`.
///
/// An absent snapshot and any load error both yield `default`; errors are
/// logged and otherwise dropped.
pub fn load_or_default<R: SnapshotRepository + ?Sized>(
    repo: &R,
    key: &str,
    default: impl FnOnce() -> ShopData,
) -> ShopData {
    match repo.load(key) {
        Ok(Some(data)) => {
            info!(
                "event=snapshot_load module=repo status=ok records={} history={}",
                data.record_count(),
                data.history.len()
            );
            data
        }
        Ok(None) => {
            info!("event=snapshot_load module=repo status=fallback reason=absent");
            default()
        }
        Err(err) => {
            warn!("event=snapshot_load module=repo status=fallback reason=error error={err}");
            default()
        }
    }
}

/// SQLite-backed snapshot repository.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Wraps a connection opened through `db::open_db*`.
    ///
    /// Fails when the connection is not fully migrated.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version = current_version(conn)?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }

    /// Epoch milliseconds of the last save under `key`.
    pub fn saved_at(&self, key: &str) -> RepoResult<Option<i64>> {
        let saved_at = self
            .conn
            .query_row(
                "SELECT saved_at FROM snapshots WHERE key = ?1;",
                params![key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(saved_at)
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn save(&self, key: &str, data: &ShopData) -> RepoResult<()> {
        let payload = serde_json::to_string(data)?;
        self.conn.execute(
            "INSERT INTO snapshots (key, payload, saved_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                saved_at = excluded.saved_at;",
            params![key, payload],
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> RepoResult<Option<ShopData>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM snapshots WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        payload
            .map(|text| serde_json::from_str(&text).map_err(RepoError::from))
            .transpose()
    }
}

/// Process-local snapshot repository holding JSON text per key.
#[derive(Debug, Default)]
pub struct MemorySnapshotRepository {
    payloads: RefCell<HashMap<String, String>>,
    saves: Cell<usize>,
    reject_saves: Cell<bool>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-seeded with raw payload text under `key`.
    pub fn with_payload(key: impl Into<String>, payload: impl Into<String>) -> Self {
        let repo = Self::default();
        repo.payloads.borrow_mut().insert(key.into(), payload.into());
        repo
    }

    /// Raw JSON text currently stored under `key`.
    pub fn payload(&self, key: &str) -> Option<String> {
        self.payloads.borrow().get(key).cloned()
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Makes every later `save` fail with `InvalidData` while `reject` holds.
    pub fn set_reject_saves(&self, reject: bool) {
        self.reject_saves.set(reject);
    }
}

impl SnapshotRepository for MemorySnapshotRepository {
    fn save(&self, key: &str, data: &ShopData) -> RepoResult<()> {
        if self.reject_saves.get() {
            return Err(RepoError::InvalidData(format!(
                "saves are rejected for key `{key}`"
            )));
        }
        let payload = serde_json::to_string(data)?;
        self.payloads.borrow_mut().insert(key.to_string(), payload);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn load(&self, key: &str) -> RepoResult<Option<ShopData>> {
        self.payloads
            .borrow()
            .get(key)
            .map(|text| serde_json::from_str(text).map_err(RepoError::from))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::{load_or_default, MemorySnapshotRepository, SnapshotRepository, STORAGE_KEY};
    use crate::model::aggregate::ShopData;

    #[test]
    fn corrupt_payload_falls_back_to_default() {
        let repo = MemorySnapshotRepository::with_payload(STORAGE_KEY, "{not json");
        assert!(repo.load(STORAGE_KEY).is_err());

        let loaded = load_or_default(&repo, STORAGE_KEY, ShopData::default);
        assert_eq!(loaded, ShopData::default());
    }

    #[test]
    fn rejected_save_keeps_previous_payload() {
        let repo = MemorySnapshotRepository::new();
        repo.save(STORAGE_KEY, &ShopData::default()).unwrap();
        let before = repo.payload(STORAGE_KEY);

        repo.set_reject_saves(true);
        assert!(repo.save(STORAGE_KEY, &ShopData::default()).is_err());
        assert_eq!(repo.payload(STORAGE_KEY), before);
        assert_eq!(repo.save_count(), 1);
    }
}
