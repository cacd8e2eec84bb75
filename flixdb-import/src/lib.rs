//! Import delimited title files into the catalog database.
//!
//! This crate owns the load path: parsing CSV records into
//! [`flixdb_catalog::TitleRecord`]s and upserting them into the store in a
//! single transaction.

pub mod csv_import;

pub use csv_import::{
    CsvImport, ImportError, ImportProgress, ImportStats, ParsedCsv, UpsertOutcome,
    import_csv_file, import_titles, parse_titles_csv, parse_titles_file,
};
