//! Persistent settings and data directory resolution.
//!
//! The settings file is `~/.config/filmmate/settings.toml` (or the platform
//! equivalent). It currently holds one key:
//!
//! ```toml
//! [storage]
//! data_dir = "/home/ana/films"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::StorageError;

/// Name of the films file inside the data directory.
pub const FILMS_FILE: &str = "films.txt";

/// Name of the users file inside the data directory.
pub const USERS_FILE: &str = "users.txt";

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("filmmate").join("settings.toml")
}

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct StorageSettings {
    pub data_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path`. A missing file gives the defaults.
    pub fn load_from(path: &Path) -> Result<Self, StorageError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(StorageError::io(path, e)),
        };
        toml::from_str(&contents)
            .map_err(|e| StorageError::settings(format!("{}: {e}", path.display())))
    }

    /// Configured data directory, ignoring an empty value.
    pub fn data_dir(&self) -> Option<&Path> {
        self.storage
            .data_dir
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Where the data files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub dir: PathBuf,
}

impl DataPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn films(&self) -> PathBuf {
        self.dir.join(FILMS_FILE)
    }

    pub fn users(&self) -> PathBuf {
        self.dir.join(USERS_FILE)
    }
}

/// Resolve the data directory using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `storage.data_dir` in the settings file
/// 3. Current working directory
pub fn resolve_data_dir(cli_override: Option<PathBuf>) -> DataPaths {
    resolve_data_dir_with(cli_override, &settings_path())
}

/// [`resolve_data_dir`] against an explicit settings file.
pub fn resolve_data_dir_with(cli_override: Option<PathBuf>, settings: &Path) -> DataPaths {
    if let Some(p) = cli_override {
        return DataPaths::new(p);
    }
    match Settings::load_from(settings) {
        Ok(s) => {
            if let Some(p) = s.data_dir() {
                return DataPaths::new(p);
            }
        }
        Err(e) => log::warn!("Ignoring settings: {e}"),
    }
    DataPaths::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Save (or clear) the data directory in the settings file.
pub fn save_data_dir(dir: Option<&Path>) -> Result<(), StorageError> {
    save_data_dir_to(&settings_path(), dir)
}

/// Save (or clear) `storage.data_dir` in the settings file at `settings`.
///
/// Uses `toml::Value` for a surgical update so unrelated keys survive.
pub fn save_data_dir_to(settings: &Path, dir: Option<&Path>) -> Result<(), StorageError> {
    let mut doc: toml::Value = match std::fs::read_to_string(settings) {
        Ok(contents) => contents
            .parse()
            .map_err(|e| StorageError::settings(format!("{}: {e}", settings.display())))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            toml::Value::Table(Default::default())
        }
        Err(e) => return Err(StorageError::io(settings, e)),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| StorageError::settings("settings root is not a table"))?;
    let storage = table
        .entry("storage")
        .or_insert_with(|| toml::Value::Table(Default::default()))
        .as_table_mut()
        .ok_or_else(|| StorageError::settings("[storage] is not a table"))?;

    match dir {
        Some(p) => {
            storage.insert(
                "data_dir".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            storage.remove("data_dir");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
    }
    let serialized =
        toml::to_string_pretty(&doc).map_err(|e| StorageError::settings(e.to_string()))?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized).map_err(|e| StorageError::io(&tmp, e))?;
    std::fs::rename(&tmp, settings).map_err(|e| StorageError::io(settings, e))?;

    log::debug!("Wrote {}", settings.display());
    Ok(())
}

/// The settings file as pretty-printed TOML, for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
