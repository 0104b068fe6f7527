//! SQLite-backed key-value store.
//!
//! A single `kv_store` table holds every record. Values are the gateway's
//! JSON text; this layer never inspects them.

use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use tracing::{debug, info};

use super::KvStore;
use crate::errors::Result;

/// Key-value store persisted in a local `SQLite` database file.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and ensures the
    /// `kv_store` table exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening key-value store at: {}", path.as_ref().display());
        let conn = Connection::open(path)?;
        Self::init(&conn)?;
        info!("Key-value store opened");
        Ok(Self { conn })
    }

    /// Opens a fresh in-memory store. Each call returns an independent,
    /// empty database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(&conn)?;
        Ok(Self { conn })
    }

    fn init(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(())
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT value FROM kv_store WHERE key = ?1")?;
        let value: Option<String> = stmt.query_row(params![key], |row| row.get(0)).optional()?;
        debug!("Loaded key '{}': present = {}", key, value.is_some());
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Use INSERT OR REPLACE (UPSERT)
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        debug!("Stored key '{}' ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let removed = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        debug!("Removed key '{}': existed = {}", key, removed > 0);
        Ok(())
    }
}
