//! User configuration
//!
//! Optional preferences read from `config.toml` (see [`crate::paths`]).
//! A missing or unreadable file yields defaults; command-line flags win over
//! anything set here.
//!
//! ```toml
//! tasks_file = "/home/me/tasks.json"
//! date_order = "ascending"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::services::DateOrder;
use crate::paths;

/// Persistent user preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Task file to use instead of `./tasks.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks_file: Option<PathBuf>,

    /// Due-date direction within a priority tier
    #[serde(default)]
    pub date_order: DateOrder,
}

/// Effective settings after merging flags, config and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Task file to load and save
    pub tasks_file: PathBuf,
    /// Due-date direction within a priority tier
    pub date_order: DateOrder,
}

impl AppConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if it is missing or invalid
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path).map_err(anyhow::Error::from).and_then(|content| {
            toml::from_str(&content).map_err(anyhow::Error::from)
        }) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring invalid config {}: {err}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Merge with command-line overrides
    #[must_use]
    pub fn resolve(&self, tasks_file: Option<PathBuf>, date_order: Option<DateOrder>) -> Settings {
        Settings {
            tasks_file: tasks_file
                .or_else(|| self.tasks_file.clone())
                .unwrap_or_else(paths::default_tasks_file),
            date_order: date_order.unwrap_or(self.date_order),
        }
    }
}
