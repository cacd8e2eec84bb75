use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Print the most common genres released between `start` and `end`.
pub(crate) fn run_genres(db_path: &Path, start: i32, end: i32) -> Result<(), CliError> {
    let genres = flixdb_lib::common_genres(start, end, db_path)?;

    log::info!(
        "{}",
        format!("Most common genres, {start}-{end}").if_supports_color(Stdout, |t| t.bold()),
    );
    for genre in &genres {
        log::info!("  {}", genre);
    }

    Ok(())
}
