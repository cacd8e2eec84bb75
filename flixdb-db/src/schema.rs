//! SQLite schema creation.

use rusqlite::{Connection, ErrorCode, OpenFlags};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Name of the single table holding one row per title.
pub const TABLE_NAME: &str = "titles";

/// Create the titles table if it doesn't exist.
///
/// This is idempotent — safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a title database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open a title database only if the file already exists.
///
/// Returns `Ok(None)` for a missing file instead of creating one. The titles
/// table is created if the file exists but has never been loaded.
pub fn open_existing(path: &std::path::Path) -> Result<Option<Connection>, SchemaError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = match Connection::open_with_flags(path, flags) {
        Ok(conn) => conn,
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::CannotOpen => {
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    create_schema(&conn)?;
    Ok(Some(conn))
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

// `cast` is an SQL keyword, so it is always quoted.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS titles (
    show_id TEXT,
    type TEXT,
    title TEXT PRIMARY KEY,
    director TEXT,
    "cast" TEXT,
    country TEXT,
    date_added TEXT,
    release_year TEXT,
    rating TEXT,
    duration TEXT,
    listed_in TEXT,
    description TEXT
);
"#;
