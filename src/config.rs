//! Runtime settings resolved from the environment.

use log::info;
use std::path::PathBuf;

use crate::dataset::Dataset;
use crate::error::Result;

pub const DATASET_ENV: &str = "ABCHART_DATASET";
pub const EXPORT_DIR_ENV: &str = "ABCHART_EXPORT_DIR";
pub const CONFIG_DIR_ENV: &str = "ABCHART_CONFIG_DIR";

const APP_DIR: &str = "abchart";
const PREFERENCES_FILE: &str = "preferences.json";

/// On-screen chart size before the window is laid out.
pub const DEFAULT_CHART_SIZE: (u32, u32) = (900, 450);

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Dataset file; the bundled dataset is used when unset
    pub dataset_path: Option<PathBuf>,
    /// Where PNG exports are written
    pub export_dir: PathBuf,
    /// Holds the preference file
    pub config_dir: PathBuf,
    pub chart_size: (u32, u32),
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key).map(PathBuf::from))
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let export_dir = lookup(EXPORT_DIR_ENV)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        let config_dir = lookup(CONFIG_DIR_ENV)
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(".").join(APP_DIR));

        Self {
            dataset_path: lookup(DATASET_ENV),
            export_dir,
            config_dir,
            chart_size: DEFAULT_CHART_SIZE,
        }
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.config_dir.join(PREFERENCES_FILE)
    }

    pub fn load_dataset(&self) -> Result<Dataset> {
        match &self.dataset_path {
            Some(path) => {
                info!("Loading dataset from {}", path.display());
                Dataset::from_path(path)
            }
            None => {
                info!("Loading bundled dataset");
                Dataset::bundled()
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
