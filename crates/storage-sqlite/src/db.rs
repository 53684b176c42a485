//! Database connection setup.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::errors::StorageError;
use nestegg_core::Result;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS investments (
    id         TEXT PRIMARY KEY,
    name       TEXT NOT NULL,
    created_at INTEGER NOT NULL,
    data       TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_investments_created_at
    ON investments (created_at DESC);
";

/// Opens (creating if needed) the investments database at `path`.
pub fn open(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)
        .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;
    // WAL keeps readers unblocked while a mutation is in flight.
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")
        .map_err(StorageError::from)?;
    init_schema(&conn)?;
    debug!("Opened investments database at {}", path.display());
    Ok(conn)
}

/// Opens a private in-memory database, for tests.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;
    init_schema(&conn)?;
    Ok(conn)
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    Ok(())
}
