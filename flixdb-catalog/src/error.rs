use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("Row for '{title}' has {found} values but the schema has {expected} columns")]
    RowWidth {
        title: String,
        expected: usize,
        found: usize,
    },
    #[error("Invalid constraint '{0}': expected key=value")]
    InvalidConstraint(String),
    #[error("Release year '{value}' of '{title}' is not a number")]
    InvalidReleaseYear { title: String, value: String },
}
