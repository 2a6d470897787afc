//! Centralized path definitions for priotask
//!
//! ## Storage Layout
//!
//! ```text
//! ./tasks.json                       # Default task file (working directory)
//!
//! <config_dir>/priotask/
//! └── config.toml                    # User preferences
//! ```
//!
//! `<config_dir>` is the platform config directory (`~/.config` on Linux).
//! Set `PRIOTASK_CONFIG` to point at a different config file.

use std::env;
use std::path::PathBuf;

/// Default task filename, relative to the working directory
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "PRIOTASK_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = "priotask";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the default task file path.
#[must_use]
pub fn default_tasks_file() -> PathBuf {
    PathBuf::from(DEFAULT_TASKS_FILE)
}

/// Get the global config directory.
///
/// Returns `<config_dir>/priotask/`, falling back to `~/.priotask/` when the
/// platform has no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(format!(".{GLOBAL_DIR}")),
        |dir| dir.join(GLOBAL_DIR),
    )
}

/// Get the global config file path.
///
/// Honors `PRIOTASK_CONFIG` when set and non-empty.
#[must_use]
pub fn global_config() -> PathBuf {
    match env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
