//! SQLite-backed document storage.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for the document store.
//! - Trigger schema migrations before the backend is usable.
//!
//! # Invariants
//! - Returned backends have migrations fully applied.
//! - One row per logical key; writes replace the whole document.

use super::migrations::apply_migrations;
use super::{Storage, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::{Duration, Instant};

/// Document storage backed by an embedded SQLite database.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens a database file and applies all pending migrations.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, "file", started_at)
    }

    /// Opens an in-memory database and applies all pending migrations.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=memory");

        let conn = match Connection::open_in_memory() {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, "memory", started_at)
    }

    fn bootstrap(mut conn: Connection, mode: &str, started_at: Instant) -> StorageResult<Self> {
        let result = conn
            .busy_timeout(Duration::from_secs(5))
            .map_err(super::StorageError::from)
            .and_then(|()| apply_migrations(&mut conn));

        match result {
            Ok(()) => {
                info!(
                    "event=storage_open module=storage status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={mode} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

impl Storage for SqliteStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT document FROM documents WHERE key = ?1;")?;
        let mut rows = stmt.query([key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn write(&mut self, key: &str, document: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO documents (key, document, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                document = excluded.document,
                updated_at = excluded.updated_at;",
            params![key, document],
        )?;
        Ok(())
    }
}
