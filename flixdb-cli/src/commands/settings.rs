use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use flixdb_lib::settings::{self, Settings};

use crate::CliError;

pub(crate) fn run_settings_show() -> Result<(), CliError> {
    let path = settings::settings_path();
    log::info!(
        "  Settings file: {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::logging::log_blank();
    let contents = Settings::load_from(&path)?.to_toml()?;
    if contents.trim().is_empty() {
        log::info!(
            "{}",
            "(no settings saved)".if_supports_color(Stdout, |t| t.dimmed())
        );
    } else {
        log::info!("{}", contents.trim_end());
    }
    log::info!(
        "  Effective store: {}",
        settings::resolve_store_path(None).display()
    );
    Ok(())
}

pub(crate) fn run_settings_path() {
    println!("{}", settings::settings_path().display());
}

pub(crate) fn run_settings_set_db(path: &Path) -> Result<(), CliError> {
    let absolute = std::path::absolute(path)?;
    settings::set_store_path(Some(absolute.as_path()))?;
    log::info!("Default store set to {}", absolute.display());
    Ok(())
}

pub(crate) fn run_settings_clear_db() -> Result<(), CliError> {
    settings::set_store_path(None)?;
    log::info!("Default store cleared");
    Ok(())
}
