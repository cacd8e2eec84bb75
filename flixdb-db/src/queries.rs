//! Read queries for the title database.

use flixdb_catalog::TitleRecord;
use rusqlite::{Connection, Row, params};

use crate::operations::OperationError;

const SELECT_COLUMNS: &str = r#"SELECT show_id, type, title, director, "cast", country,
        date_added, release_year, rating, duration, listed_in, description
 FROM titles"#;

// ── Title Lookups ───────────────────────────────────────────────────────────

/// Every stored title, in insertion order.
pub fn all_titles(conn: &Connection) -> Result<Vec<TitleRecord>, OperationError> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY rowid"))?;
    let rows = stmt.query_map([], row_to_title)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a title by exact name.
pub fn find_title(conn: &Connection, title: &str) -> Result<Option<TitleRecord>, OperationError> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE title = ?1"))?;
    let result = stmt.query_row(params![title], row_to_title);
    match result {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Content rating of a title by exact name.
pub fn find_rating(conn: &Connection, title: &str) -> Result<Option<String>, OperationError> {
    let result = conn.query_row(
        "SELECT rating FROM titles WHERE title = ?1",
        params![title],
        |row| row.get::<_, Option<String>>(0),
    );
    match result {
        Ok(rating) => Ok(Some(rating.unwrap_or_default())),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Row counts for the title table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub titles: i64,
    pub movies: i64,
    pub shows: i64,
}

/// Get overall catalog statistics.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let titles: i64 = conn.query_row("SELECT COUNT(*) FROM titles", [], |r| r.get(0))?;
    let movies: i64 = conn.query_row(
        "SELECT COUNT(*) FROM titles WHERE type = 'Movie'",
        [],
        |r| r.get(0),
    )?;
    let shows: i64 = conn.query_row(
        "SELECT COUNT(*) FROM titles WHERE type = 'TV Show'",
        [],
        |r| r.get(0),
    )?;

    Ok(CatalogStats {
        titles,
        movies,
        shows,
    })
}

// ── Row Mapping ─────────────────────────────────────────────────────────────

fn row_to_title(row: &Row) -> rusqlite::Result<TitleRecord> {
    // Columns are nullable; absent values read back as empty strings.
    let text = |i: usize| -> rusqlite::Result<String> {
        Ok(row.get::<_, Option<String>>(i)?.unwrap_or_default())
    };
    Ok(TitleRecord {
        show_id: text(0)?,
        kind: text(1)?,
        title: text(2)?,
        director: text(3)?,
        cast: text(4)?,
        country: text(5)?,
        date_added: text(6)?,
        release_year: text(7)?,
        rating: text(8)?,
        duration: text(9)?,
        listed_in: text(10)?,
        description: text(11)?,
    })
}
