//! Age suitability advice for a stored title.

use std::path::Path;

use flixdb_catalog::{ContentRating, Suitability};

use crate::error::FlixError;

/// Classify whether `title` suits a viewer of `age`.
///
/// The age is validated before the store is opened. The rating is read from
/// the store by exact title match; a store file that does not exist holds no
/// titles and is not created.
pub fn rating_advice(db_path: &Path, title: &str, age: i64) -> Result<Suitability, FlixError> {
    if age <= 0 {
        return Err(FlixError::InvalidAge(age));
    }

    let rating = match flixdb_db::open_existing(db_path)? {
        Some(conn) => flixdb_db::find_rating(&conn, title)?,
        None => None,
    };
    let rating = rating.ok_or_else(|| FlixError::TitleNotFound(title.to_string()))?;

    let parsed = ContentRating::parse(&rating).ok_or_else(|| FlixError::UnknownRating {
        title: title.to_string(),
        rating: rating.clone(),
    })?;

    let suitability = parsed.suitability(age);
    log::debug!(
        "'{}' is rated {} (minimum age {}): {:?} for age {}",
        title,
        parsed,
        parsed.minimum_age(),
        suitability,
        age,
    );
    Ok(suitability)
}
