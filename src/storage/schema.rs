//! SQLite-backed key-value store and its schema

use dirs::cache_dir;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::KeyValueStore;
use crate::{error::RankingsError, Result};

/// Env var overriding the state database location.
pub const DB_PATH_ENV_VAR: &str = "POWER_RANKINGS_DB";

/// Board state kept in a single `kv` table
pub struct StateDatabase {
    conn: Connection,
}

impl StateDatabase {
    /// Open the default database under the user cache directory.
    pub fn new() -> Result<Self> {
        let path = Self::database_path()?;
        Self::open(&path)
    }

    /// Open (creating if needed) a database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "Opening state database");
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// `$POWER_RANKINGS_DB`, else `<cache>/power-rankings/state.db`.
    pub fn database_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        let cache_dir = cache_dir().ok_or_else(|| {
            RankingsError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine cache directory",
            ))
        })?;
        Ok(cache_dir.join("power-rankings").join("state.db"))
    }

    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL DEFAULT (strftime('%s','now'))
            )",
            [],
        )?;
        Ok(())
    }
}

impl KeyValueStore for StateDatabase {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                 updated_at = strftime('%s','now')",
            params![key, value],
        )?;
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in entries {
            tx.execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                     updated_at = strftime('%s','now')",
                params![key, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
