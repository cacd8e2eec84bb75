//! Most common genres over a release-year range.

use std::path::Path;

use flixdb_catalog::tally_genres;

use crate::error::FlixError;

/// Genres occurring most often among titles released in `start_year..=end_year`.
///
/// Ties are not broken: every genre sharing the highest count is returned,
/// in order of first encounter. A stored release year that is not an integer
/// fails the query with [`FlixError::Catalog`].
pub fn common_genres(
    start_year: i32,
    end_year: i32,
    db_path: &Path,
) -> Result<Vec<String>, FlixError> {
    if start_year > end_year {
        return Err(FlixError::InvalidYearRange {
            start: start_year,
            end: end_year,
        });
    }

    let records = match flixdb_db::open_existing(db_path)? {
        Some(conn) => flixdb_db::all_titles(&conn)?,
        None => Vec::new(),
    };

    let tally = tally_genres(&records, start_year, end_year)?;
    if tally.is_empty() {
        return Err(FlixError::NoTitlesInRange {
            start: start_year,
            end: end_year,
        });
    }

    log::debug!(
        "Tallied {} genres across {} stored titles",
        tally.len(),
        records.len()
    );
    Ok(tally.most_common())
}
