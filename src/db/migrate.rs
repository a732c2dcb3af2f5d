//! Versioned schema migrations.
//!
//! The schema version lives in `PRAGMA user_version`. Opening the store
//! always brings it up to the latest version: below 1 creates the entry
//! collection (plus the kv and log tables), below 2 adds the user
//! collection. Existing data is never touched by a migration.

use crate::db::log::wlog;
use crate::ui::messages::info;
use rusqlite::{Connection, Result};

fn schema_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)
}

/// v1: kv store, entry collection, internal log.
fn migrate_to_v1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS entries (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            employee_name TEXT NOT NULL,
            date          TEXT NOT NULL,
            hours         TEXT NOT NULL,
            task          TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// v2: per-user hours records, keyed by username.
fn migrate_to_v2(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            username TEXT PRIMARY KEY,
            hours    TEXT NOT NULL DEFAULT '{}'
        );
        "#,
    )
}

/// Run every migration the database has not seen yet.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let mut version = schema_version(conn)?;

    if version < 1 {
        info("Applying migration v1 (kv, entries, log)...");
        migrate_to_v1(conn)?;
        set_schema_version(conn, 1)?;
        version = 1;
        let _ = wlog(conn, "migration_applied", "v1", "Created kv, entries and log tables");
    }

    if version < 2 {
        info("Applying migration v2 (users)...");
        migrate_to_v2(conn)?;
        set_schema_version(conn, 2)?;
        let _ = wlog(conn, "migration_applied", "v2", "Created users table");
    }

    Ok(())
}
