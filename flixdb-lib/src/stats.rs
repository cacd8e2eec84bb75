use std::path::Path;

use flixdb_db::CatalogStats;

use crate::error::FlixError;

/// Title counts for the store at `db_path`. A missing store counts as empty.
pub fn catalog_stats(db_path: &Path) -> Result<CatalogStats, FlixError> {
    match flixdb_db::open_existing(db_path)? {
        Some(conn) => Ok(flixdb_db::catalog_stats(&conn)?),
        None => Ok(CatalogStats::default()),
    }
}
