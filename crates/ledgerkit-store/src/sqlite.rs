//! SQLite implementation of the WorldState trait.
//!
//! A thin durable adapter: one key/value table, upsert writes. The storage
//! engine itself is SQLite's; this module only maps the [`WorldState`]
//! contract onto it.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::BackendError;
use crate::traits::WorldState;

/// Schema version written to `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 1;

/// SQLite-backed world state.
///
/// Thread-safe via internal Mutex. Operations are synchronous; callers
/// treat each backend call as atomic.
pub struct SqliteWorldState {
    conn: Mutex<Connection>,
}

impl SqliteWorldState {
    /// Open a SQLite database at the given path.
    ///
    /// Creates the file and bootstraps the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BackendError> {
        let conn = Connection::open(path)?;
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory SQLite database.
    ///
    /// Useful for testing.
    pub fn open_memory() -> Result<Self, BackendError> {
        let conn = Connection::open_in_memory()?;
        migrate(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> Result<T, BackendError>
    where
        F: FnOnce(&Connection) -> Result<T, BackendError>,
    {
        let conn = self.conn.lock().map_err(|e| {
            BackendError::Database(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
                Some(format!("mutex poisoned: {}", e)),
            ))
        })?;
        f(&conn)
    }
}

fn migrate(conn: &Connection) -> Result<(), BackendError> {
    let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if version < SCHEMA_VERSION {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS world_state (
                key   TEXT PRIMARY KEY,
                value BLOB NOT NULL
            );
            PRAGMA user_version = 1;",
        )?;
    }

    Ok(())
}

impl WorldState for SqliteWorldState {
    fn put(&self, key: &str, value: &[u8]) -> Result<(), BackendError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO world_state (key, value) VALUES (?1, ?2)",
                params![key, value],
            )?;
            Ok(())
        })
    }

    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, BackendError> {
        self.with_conn(|conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM world_state WHERE key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
    }
}
