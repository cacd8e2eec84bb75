use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_stats(db_path: &Path) -> Result<(), CliError> {
    if !db_path.exists() {
        log::warn!("No store found at {}", db_path.display());
        log::info!("Run 'flixdb load <file.csv>' to create one.");
        return Ok(());
    }

    let stats = flixdb_lib::catalog_stats(db_path)?;

    log::info!(
        "{}",
        "Store Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Store:    {}", db_path.display());
    crate::logging::log_blank();
    log::info!("  Titles:   {:>8}", stats.titles);
    log::info!("  Movies:   {:>8}", stats.movies);
    log::info!("  TV shows: {:>8}", stats.shows);

    Ok(())
}
