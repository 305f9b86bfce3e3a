//! Persistence layer
//!
//! A string-keyed blob store (SQLite on disk, or in memory for tests) with
//! the session store on top of it.

mod blob;
mod kv;
mod migrations;
mod parse;
mod session;

use rusqlite::Connection;
use std::path::Path;
use tracing::instrument;

use crate::error::Result;

pub use blob::{BlobStore, MemoryBlobStore};
pub use kv::KeyValueStore;
pub use session::{SessionStore, SharedSession, RIDE_HISTORY_LIMIT};

/// Main database handle
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create database at the given path
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Open in-memory database (for testing)
    #[instrument]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    fn init(&self) -> Result<()> {
        migrations::run_migrations(&self.conn)
    }

    /// Current schema version
    pub fn schema_version(&self) -> Result<u32> {
        migrations::applied_version(&self.conn)
    }

    /// Raw key-value access
    pub fn kv(&self) -> KeyValueStore<'_> {
        KeyValueStore::new(&self.conn)
    }
}

impl BlobStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.kv().get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.kv().put(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.kv().delete(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountType, UserProfile};

    #[test]
    fn kv_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.schema_version().unwrap() >= 1);

        db.set("b", "2").unwrap();
        db.set("a", "1").unwrap();
        db.set("a", "one").unwrap();
        assert_eq!(db.get("a").unwrap().as_deref(), Some("one"));
        assert_eq!(db.kv().keys().unwrap(), vec!["a", "b"]);

        db.remove("a").unwrap();
        assert_eq!(db.get("a").unwrap(), None);
    }

    #[test]
    fn session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rideshare.db");
        let profile = UserProfile::new("omar@example.org".into(), AccountType::Admin);

        {
            let session = SessionStore::new(Database::open(&path).unwrap());
            session.set_current_user(&profile).unwrap();
        }

        let session = SessionStore::new(Database::open(&path).unwrap());
        assert_eq!(session.current_user().unwrap(), Some(profile));
    }
}
