use flixdb_catalog::CatalogError;
use flixdb_db::{OperationError, SchemaError};
use flixdb_import::ImportError;
use thiserror::Error;

/// Errors returned by the public store operations.
#[derive(Debug, Error)]
pub enum FlixError {
    /// Viewer age must be strictly positive
    #[error("Age must be a positive number, got {0}")]
    InvalidAge(i64),

    /// Start year after end year
    #[error("Start year {start} is after end year {end}")]
    InvalidYearRange { start: i32, end: i32 },

    /// No stored row has this exact title
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    /// Stored rating is outside the known rating table
    #[error("Unrecognized rating '{rating}' for title '{title}'")]
    UnknownRating { title: String, rating: String },

    /// Nothing was released in the requested range
    #[error("No titles released between {start} and {end}")]
    NoTitlesInRange { start: i32, end: i32 },

    /// Loading the source file failed
    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    /// Building the in-memory catalog failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Database query failed
    #[error("Database error: {0}")]
    Db(#[from] OperationError),

    /// Opening the database failed
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl FlixError {
    /// Whether this error was caused by caller input rather than the store.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidAge(_) | Self::InvalidYearRange { .. })
    }

    /// Whether this error is a failed lookup against stored data.
    pub fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::TitleNotFound(_) | Self::UnknownRating { .. } | Self::NoTitlesInRange { .. }
        )
    }
}
