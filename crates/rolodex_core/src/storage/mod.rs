//! Whole-document storage abstraction and backends.
//!
//! # Responsibility
//! - Define the injected get/set contract the contact store persists through.
//! - Keep SQLite bootstrap and schema details behind the boundary.
//!
//! # Invariants
//! - A backend stores one opaque serialized document per logical key.
//! - Backends never interpret document contents.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
mod migrations;
mod sqlite;

pub use memory::MemoryStorage;
pub use migrations::latest_version;
pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Transport-level persistence failure.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Whole-document key/value storage contract.
///
/// One logical key maps to one serialized document; reads and writes always
/// move the full document. This is deliberately the narrowest contract the
/// contact store needs, so tests can swap in [`MemoryStorage`].
pub trait Storage {
    /// Reads the document stored under `key`, if any.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replaces the document stored under `key`.
    fn write(&mut self, key: &str, document: &str) -> StorageResult<()>;
}
