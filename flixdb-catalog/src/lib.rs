//! Title catalog data model, attribute filtering, content ratings, and genre
//! tallies.
//!
//! This crate has no database dependency. `flixdb-db` persists
//! [`TitleRecord`]s and `flixdb-lib` projects them back into a [`Catalog`].

pub mod error;
pub mod filter;
pub mod genre;
pub mod rating;
pub mod types;

pub use error::CatalogError;
pub use filter::{Constraint, filter_titles, parse_constraint_arg};
pub use genre::{GENRE_SEPARATOR, GenreTally, tally_genres};
pub use rating::{ContentRating, Suitability};
pub use types::*;
