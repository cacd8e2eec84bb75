use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::spinner::ImportSpinner;

/// Load a CSV file into the store and summarize (or dump) the catalog.
pub(crate) fn run_load(db_path: &Path, csv: &Path, json: bool, quiet: bool) -> Result<(), CliError> {
    let spinner = ImportSpinner::new(quiet || json);
    let catalog = flixdb_lib::load_and_project_with(db_path, csv, &spinner)?;
    let stats = spinner.stats();
    drop(spinner);

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    log::info!(
        "{}",
        "Catalog loaded".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Store:   {}", db_path.display());
    log::info!("  Source:  {}", csv.display());
    if let Some(stats) = stats {
        log::info!(
            "  Written: {:>8} ({} new, {} replaced)",
            stats.total,
            stats.inserted,
            stats.replaced,
        );
    }
    log::info!("  Titles:  {:>8}", catalog.len());
    log::info!("  Columns: {}", catalog.schema().join(", "));

    Ok(())
}
