//! Persistence port for board state.
//!
//! State is a handful of string-serialized JSON documents under fixed keys,
//! read once when a session opens and rewritten after every mutation:
//! - `schema`: SQLite-backed store used by the CLI
//! - `memory`: in-process store for tests and dry runs

pub mod memory;
pub mod schema;


use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::Result;

pub use memory::MemoryStore;
pub use schema::StateDatabase;

/// Ranking list array.
pub const RANKINGS_KEY: &str = "fantasyRankings";
/// Tier id → teams mapping.
pub const TIERED_TEAMS_KEY: &str = "tieredTeams";
/// Ordered tier metadata array.
pub const TIER_NAMES_KEY: &str = "tierNames";

/// String key-value storage injected into a session.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Write several entries together. Stores that can do so atomically should.
    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> Result<()> {
        (**self).set_many(entries)
    }
}

/// Read and decode one document. Undecodable values are logged and treated
/// as absent so a corrupt entry never blocks startup.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "Ignoring unreadable saved state");
            Ok(None)
        }
    }
}

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
