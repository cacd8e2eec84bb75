use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use flixdb_lib::{Constraint, filter_titles, parse_constraint_arg};

use crate::CliError;
use crate::spinner::ImportSpinner;

use super::truncate_str;

/// Project the store (optionally loading a CSV first) and list matching titles.
pub(crate) fn run_filter(
    db_path: &Path,
    csv: Option<PathBuf>,
    args: &[String],
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    let constraints = args
        .iter()
        .map(|a| parse_constraint_arg(a).map_err(|e| CliError::argument(e.to_string())))
        .collect::<Result<Vec<(String, Constraint)>, _>>()?;

    let catalog = match csv {
        Some(csv) => {
            let spinner = ImportSpinner::new(quiet || json);
            flixdb_lib::load_and_project_with(db_path, &csv, &spinner)?
        }
        None => flixdb_lib::project_store(db_path)?,
    };

    for (attr, _) in &constraints {
        if catalog.column_index(attr).is_none() {
            log::warn!("Unknown attribute '{}' is ignored", attr);
        }
    }

    let matches = filter_titles(&catalog, &constraints);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    let type_col = catalog.column_index("type");
    let year_col = catalog.column_index("release_year");
    let rating_col = catalog.column_index("rating");

    for title in &matches {
        let Some(values) = catalog.get(title) else {
            continue;
        };
        let cell = move |col: Option<usize>| col.map(|i| values[i].as_str()).unwrap_or("");
        log::info!(
            "  {:<40} {:<8} {:>4}  {}",
            truncate_str(title, 40).if_supports_color(Stdout, |t| t.bold()),
            truncate_str(cell(type_col), 8),
            cell(year_col),
            cell(rating_col).if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    log::info!(
        "{} of {} titles matched",
        matches.len(),
        catalog.len()
    );

    Ok(())
}
