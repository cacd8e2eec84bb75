//! Public operations over the title store.
//!
//! Every operation takes the path of the SQLite store, opens its own
//! connection, and closes it before returning.

pub mod advice;
pub mod error;
pub mod genres;
pub mod project;
pub mod settings;
pub mod stats;

pub use advice::rating_advice;
pub use error::FlixError;
pub use genres::common_genres;
pub use project::{load_and_project, load_and_project_with, project_store};
pub use settings::{Settings, SettingsError};
pub use stats::catalog_stats;

pub use flixdb_catalog::{
    Catalog, CatalogError, CatalogRow, Constraint, ContentRating, Suitability, TitleRecord,
    filter_titles, parse_constraint_arg,
};
pub use flixdb_db::CatalogStats;
pub use flixdb_import::{ImportProgress, ImportStats, UpsertOutcome};
