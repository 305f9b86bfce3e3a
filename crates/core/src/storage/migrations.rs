//! Schema versioning for the local database
//!
//! Every migration is applied once, in order, and recorded in
//! `schema_migrations`.

use rusqlite::{params, Connection};
use tracing::{debug, info, instrument};

use crate::error::Result;

/// A versioned schema change
pub struct Migration {
    /// Sequential, starting from 1
    pub version: u32,
    pub description: &'static str,
    pub sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "Key-value blob table for session state",
    sql: r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
}];

fn ensure_migrations_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

/// Highest applied version, 0 for a fresh database
pub fn applied_version(conn: &Connection) -> Result<u32> {
    let version: Option<u32> =
        conn.query_row("SELECT MAX(version) FROM schema_migrations", [], |row| {
            row.get(0)
        })?;
    Ok(version.unwrap_or(0))
}

/// Bring the schema up to the latest version
#[instrument(skip(conn))]
pub fn run_migrations(conn: &Connection) -> Result<()> {
    ensure_migrations_table(conn)?;

    let from = applied_version(conn)?;
    let pending = MIGRATIONS.iter().filter(|m| m.version > from);

    for migration in pending {
        info!(
            version = migration.version,
            description = migration.description,
            "Applying migration"
        );
        conn.execute_batch(migration.sql)?;
        conn.execute(
            "INSERT INTO schema_migrations (version, description, applied_at) VALUES (?1, ?2, ?3)",
            params![
                migration.version,
                migration.description,
                chrono::Utc::now().to_rfc3339()
            ],
        )?;
    }

    let to = applied_version(conn)?;
    if to > from {
        info!(from, to, "Database schema updated");
    } else {
        debug!(version = to, "Database schema up to date");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latest() -> u32 {
        MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
    }

    #[test]
    fn fresh_database_reaches_latest_version() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        assert_eq!(applied_version(&conn).unwrap(), latest());
    }

    #[test]
    fn running_twice_is_harmless() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let rows: u32 = conn
            .query_row("SELECT COUNT(*) FROM schema_migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, latest());
    }

    #[test]
    fn versions_are_sequential() {
        for (i, migration) in MIGRATIONS.iter().enumerate() {
            assert_eq!(migration.version as usize, i + 1, "{}", migration.description);
        }
    }
}
