//! Application Configuration Module
//! Optional JSON config file for the input data paths.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up next to the working directory.
pub const CONFIG_FILE: &str = "fareview.json";

/// Paths of the two raw data sources. Every field has a default, so a partial
/// (or absent) config file is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Training set, carries the Price column.
    pub train_path: PathBuf,
    /// Test set, no Price column.
    pub test_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            train_path: PathBuf::from("data/Data_Train.csv"),
            test_path: PathBuf::from("data/Test_set.csv"),
        }
    }
}

impl AppConfig {
    /// Read `fareview.json` from the working directory, falling back to the
    /// built-in defaults when the file is absent or malformed.
    pub fn load() -> Self {
        Self::from_file(Path::new(CONFIG_FILE))
    }

    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("ignoring malformed {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
