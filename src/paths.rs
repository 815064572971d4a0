//! Centralized path definitions for arnlint
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.arnlint/
//! └── config.toml               # Default catalog path, output format
//! ```

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = ".arnlint";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global arnlint directory.
///
/// Returns `~/.arnlint/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.arnlint/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
