//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flixdb")]
#[command(about = "Load a title catalog into SQLite and query it", long_about = None)]
pub(crate) struct Cli {
    /// Path to the SQLite store (defaults to the saved setting, then ./flixdb.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Load a CSV title file into the store and summarize the catalog
    Load {
        /// CSV file with a twelve-column header row
        csv: PathBuf,

        /// Print the projected catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// List titles matching every attribute constraint
    Filter {
        /// Load this CSV file first and filter under its header
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Attribute constraint, e.g. country=Germany or rating=PG|PG-13 (repeatable)
        #[arg(short = 'w', long = "where", value_name = "KEY=VALUE")]
        constraints: Vec<String>,

        /// Print matching titles as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Check whether a title suits a viewer's age
    Rating {
        /// Exact title
        title: String,

        /// Viewer age in years
        #[arg(allow_negative_numbers = true)]
        age: i64,
    },

    /// Show the most common genres among titles released in a year range
    Genres {
        /// First release year (inclusive)
        #[arg(allow_negative_numbers = true)]
        start: i32,

        /// Last release year (inclusive)
        #[arg(allow_negative_numbers = true)]
        end: i32,
    },

    /// Show store statistics
    Stats,

    /// Manage the settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum SettingsAction {
    /// Show the settings file contents
    Show,

    /// Print the settings file path
    Path,

    /// Save a default store path
    SetDb {
        /// Path to the SQLite store
        path: PathBuf,
    },

    /// Remove the saved store path
    ClearDb,
}
