use flixdb_lib::{FlixError, SettingsError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Store operation failed
    #[error("{0}")]
    Store(#[from] FlixError),

    /// Settings file could not be read or written
    #[error("{0}")]
    Settings(#[from] SettingsError),

    /// Bad command-line input
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// Output serialization failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn argument(msg: impl Into<String>) -> Self {
        Self::Argument(msg.into())
    }
}
