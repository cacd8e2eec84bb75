use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use flixdb_lib::Suitability;

use crate::CliError;

/// Print whether a title suits a viewer of the given age.
pub(crate) fn run_rating(db_path: &Path, title: &str, age: i64) -> Result<(), CliError> {
    let suitability = flixdb_lib::rating_advice(db_path, title, age)?;

    let message = suitability.to_string();
    match suitability {
        Suitability::Suitable => {
            log::info!("{}", message.if_supports_color(Stdout, |t| t.green()))
        }
        Suitability::ParentalGuidance => {
            log::info!("{}", message.if_supports_color(Stdout, |t| t.yellow()))
        }
        Suitability::NotSuitable => {
            log::info!("{}", message.if_supports_color(Stdout, |t| t.red()))
        }
    }

    Ok(())
}
