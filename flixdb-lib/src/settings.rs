//! Settings file: `~/.config/flixdb/settings.toml`.
//!
//! ```toml
//! [store]
//! path = "/data/titles.db"
//! ```
//!
//! Keys outside `store.path` are carried through [`Settings::other`] and
//! [`StoreSettings::other`], so rewriting the file never drops them.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Store file used when neither the CLI nor the settings file names one.
pub const DEFAULT_STORE_FILE: &str = "flixdb.db";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Contents of `settings.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, skip_serializing_if = "StoreSettings::is_empty")]
    pub store: StoreSettings,

    /// Top-level keys this version does not read.
    #[serde(flatten)]
    pub other: toml::Table,
}

/// The `[store]` table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Default SQLite store location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(flatten)]
    pub other: toml::Table,
}

impl StoreSettings {
    fn is_empty(&self) -> bool {
        self.path.is_none() && self.other.is_empty()
    }
}

impl Settings {
    /// Read a settings file. A file that does not exist yields the defaults.
    pub fn load_from(file: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(file) {
            Ok(contents) => Ok(toml::from_str(&contents)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write the settings through a temp file and rename, creating the
    /// parent directory if needed.
    pub fn save_to(&self, file: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = file.with_extension("toml.tmp");
        std::fs::write(&tmp, self.to_toml()?)?;
        std::fs::rename(&tmp, file)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The saved store path. An empty string counts as unset.
    pub fn store_path(&self) -> Option<&Path> {
        self.store
            .path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("flixdb").join("settings.toml")
}

/// Resolve the store path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `store.path` in `settings.toml`
/// 3. `flixdb.db` in the current working directory
pub fn resolve_store_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_store_path_in(&settings_path(), cli_override)
}

/// [`resolve_store_path`] against an explicit settings file.
///
/// An unreadable settings file is logged and skipped.
pub fn resolve_store_path_in(file: &Path, cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    match Settings::load_from(file) {
        Ok(settings) => {
            if let Some(p) = settings.store_path() {
                return p.to_path_buf();
            }
        }
        Err(e) => log::warn!("Ignoring {}: {}", file.display(), e),
    }
    PathBuf::from(DEFAULT_STORE_FILE)
}

/// Save (or clear, with `None`) the default store path.
pub fn set_store_path(path: Option<&Path>) -> Result<(), SettingsError> {
    set_store_path_in(&settings_path(), path)
}

/// [`set_store_path`] against an explicit settings file.
///
/// A settings file that fails to parse is left untouched.
pub fn set_store_path_in(file: &Path, path: Option<&Path>) -> Result<(), SettingsError> {
    let mut settings = Settings::load_from(file)?;
    settings.store.path = path.map(Path::to_path_buf);
    settings.save_to(file)
}
