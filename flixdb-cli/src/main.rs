//! flixdb CLI
//!
//! Command-line interface for loading a title catalog into SQLite and
//! querying it.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use clap::Parser;

use cli_types::{Cli, Commands, SettingsAction};
use commands::filter::run_filter;
use commands::genres::run_genres;
use commands::load::run_load;
use commands::rating::run_rating;
use commands::settings::{
    run_settings_clear_db, run_settings_path, run_settings_set_db, run_settings_show,
};
use commands::stats::run_stats;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to open log file: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let db_path = flixdb_lib::settings::resolve_store_path(cli.db);
    log::debug!("Using store {}", db_path.display());

    match cli.command {
        Commands::Load { csv, json } => run_load(&db_path, &csv, json, cli.quiet),
        Commands::Filter {
            csv,
            constraints,
            json,
        } => run_filter(&db_path, csv, &constraints, json, cli.quiet),
        Commands::Rating { title, age } => run_rating(&db_path, &title, age),
        Commands::Genres { start, end } => run_genres(&db_path, start, end),
        Commands::Stats => run_stats(&db_path),
        Commands::Settings { action } => match action {
            SettingsAction::Show => run_settings_show(),
            SettingsAction::Path => {
                run_settings_path();
                Ok(())
            }
            SettingsAction::SetDb { path } => run_settings_set_db(&path),
            SettingsAction::ClearDb => run_settings_clear_db(),
        },
    }
}
