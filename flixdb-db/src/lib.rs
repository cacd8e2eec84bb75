//! SQLite persistence layer for the title catalog.
//!
//! Provides schema creation, the title upsert, and read queries backed by
//! SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{OperationError, title_exists, upsert_title};
pub use queries::{CatalogStats, all_titles, catalog_stats, find_rating, find_title};
pub use schema::{
    SchemaError, TABLE_NAME, create_schema, open_database, open_existing, open_memory,
};
