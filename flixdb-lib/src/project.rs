//! Load a CSV file into the store and project the store into a [`Catalog`].

use std::path::Path;

use flixdb_catalog::{Catalog, canonical_schema};
use flixdb_import::ImportProgress;

use crate::error::FlixError;

/// Load `csv_path` into the store at `db_path`, then read the whole store back.
///
/// The catalog schema is the header row of `csv_path`. Rows already in the
/// store from earlier loads are included.
pub fn load_and_project(db_path: &Path, csv_path: &Path) -> Result<Catalog, FlixError> {
    load_into(db_path, csv_path, None)
}

/// [`load_and_project`] with a progress reporter for the import phase.
pub fn load_and_project_with(
    db_path: &Path,
    csv_path: &Path,
    progress: &dyn ImportProgress,
) -> Result<Catalog, FlixError> {
    load_into(db_path, csv_path, Some(progress))
}

fn load_into(
    db_path: &Path,
    csv_path: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<Catalog, FlixError> {
    let conn = flixdb_db::open_database(db_path)?;
    let import = flixdb_import::import_csv_file(&conn, csv_path, progress)?;
    let records = flixdb_db::all_titles(&conn)?;
    log::debug!(
        "Projected {} titles from {}",
        records.len(),
        db_path.display()
    );
    Ok(Catalog::from_records(import.header, records)?)
}

/// Project the store as it stands, using the canonical column names.
///
/// A missing store projects to an empty catalog without creating the file.
pub fn project_store(db_path: &Path) -> Result<Catalog, FlixError> {
    let records = match flixdb_db::open_existing(db_path)? {
        Some(conn) => flixdb_db::all_titles(&conn)?,
        None => Vec::new(),
    };
    Ok(Catalog::from_records(canonical_schema(), records)?)
}
