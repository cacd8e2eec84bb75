//! Import CSV title files into the catalog database.
//!
//! The first record of the file is the header and must name exactly twelve
//! columns. Every following record must have the same width. Parsing happens
//! up front, so a malformed file never reaches the database.

use std::io::Read;
use std::path::Path;

use flixdb_catalog::{COLUMN_COUNT, CatalogError, TitleRecord};
use flixdb_db::operations::{self, OperationError};
use flixdb_db::schema::{self, SchemaError};
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Header has {found} columns, expected {expected}")]
    HeaderWidth { expected: usize, found: usize },
    #[error("Invalid record: {0}")]
    Record(#[from] CatalogError),
    #[error("Database error: {0}")]
    Db(#[from] OperationError),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Header and data records read from a CSV source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCsv {
    /// Column names exactly as they appear in the header row.
    pub header: Vec<String>,
    pub records: Vec<TitleRecord>,
}

/// Statistics from a single import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub total: u64,
    pub inserted: u64,
    pub replaced: u64,
}

/// What an upsert did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Observer for a running title import. Every method defaults to a no-op.
pub trait ImportProgress {
    /// The source parsed cleanly and `records` titles are about to be written.
    fn on_start(&self, _source: &Path, _records: usize) {}

    /// A title was written. `position` counts from 1.
    fn on_title(&self, _position: usize, _total: usize, _title: &str, _outcome: UpsertOutcome) {}

    /// The import transaction committed.
    fn on_finish(&self, _stats: &ImportStats) {}
}

/// Result of importing one CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvImport {
    pub header: Vec<String>,
    pub stats: ImportStats,
}

/// Parse CSV title data from any reader.
pub fn parse_titles_csv<R: Read>(reader: R) -> Result<ParsedCsv, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if header.len() != COLUMN_COUNT {
        return Err(ImportError::HeaderWidth {
            expected: COLUMN_COUNT,
            found: header.len(),
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        // Width mismatches surface here as csv::ErrorKind::UnequalLengths.
        let record = result?;
        records.push(TitleRecord::from_fields(record.iter())?);
    }

    Ok(ParsedCsv { header, records })
}

/// Parse a CSV title file from a path.
pub fn parse_titles_file(path: &Path) -> Result<ParsedCsv, ImportError> {
    let file = std::fs::File::open(path)?;
    parse_titles_csv(file)
}

/// Upsert every record into the database in one transaction.
///
/// The titles table is created first if it does not exist. Records sharing a
/// title replace each other in file order, so the last one wins.
pub fn import_titles(
    conn: &Connection,
    records: &[TitleRecord],
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportStats, ImportError> {
    schema::create_schema(conn)?;

    let mut stats = ImportStats {
        total: records.len() as u64,
        ..Default::default()
    };

    let tx = conn.unchecked_transaction()?;

    for (i, record) in records.iter().enumerate() {
        let outcome = if operations::title_exists(&tx, &record.title)? {
            stats.replaced += 1;
            UpsertOutcome::Replaced
        } else {
            stats.inserted += 1;
            UpsertOutcome::Inserted
        };
        operations::upsert_title(&tx, record)?;
        log::trace!("{:?} '{}'", outcome, record.title);

        if let Some(p) = progress {
            p.on_title(i + 1, records.len(), &record.title, outcome);
        }
    }

    tx.commit()?;
    log::debug!(
        "Committed {} titles ({} new, {} replaced)",
        stats.total,
        stats.inserted,
        stats.replaced,
    );

    Ok(stats)
}

/// Parse a CSV file and import all of its records.
pub fn import_csv_file(
    conn: &Connection,
    path: &Path,
    progress: Option<&dyn ImportProgress>,
) -> Result<CsvImport, ImportError> {
    let parsed = parse_titles_file(path)?;
    log::debug!(
        "Parsed {} records from {}",
        parsed.records.len(),
        path.display()
    );

    if let Some(p) = progress {
        p.on_start(path, parsed.records.len());
    }
    let stats = import_titles(conn, &parsed.records, progress)?;
    if let Some(p) = progress {
        p.on_finish(&stats);
    }

    Ok(CsvImport {
        header: parsed.header,
        stats,
    })
}
