//! Write operations for title rows.

use flixdb_catalog::TitleRecord;
use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Insert a title, or replace every column of the existing row with the same title.
pub fn upsert_title(conn: &Connection, record: &TitleRecord) -> Result<(), OperationError> {
    conn.execute(
        r#"INSERT INTO titles (show_id, type, title, director, "cast", country,
             date_added, release_year, rating, duration, listed_in, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
         ON CONFLICT(title) DO UPDATE SET
             show_id = excluded.show_id,
             type = excluded.type,
             director = excluded.director,
             "cast" = excluded."cast",
             country = excluded.country,
             date_added = excluded.date_added,
             release_year = excluded.release_year,
             rating = excluded.rating,
             duration = excluded.duration,
             listed_in = excluded.listed_in,
             description = excluded.description"#,
        params![
            record.show_id,
            record.kind,
            record.title,
            record.director,
            record.cast,
            record.country,
            record.date_added,
            record.release_year,
            record.rating,
            record.duration,
            record.listed_in,
            record.description,
        ],
    )?;
    Ok(())
}

/// Check whether a row with exactly this title exists.
pub fn title_exists(conn: &Connection, title: &str) -> Result<bool, OperationError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM titles WHERE title = ?1)",
        params![title],
        |row| row.get(0),
    )?;
    Ok(exists)
}
