//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.arnlint/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::output::OutputMode;
use crate::paths;

/// Global arnlint configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default IAM definition catalog to resolve against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: "human" or "json"
    #[serde(default)]
    pub format: OutputMode,
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load the global config, or defaults if it does not exist
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`
    ///
    /// A missing file gives the defaults. An unreadable or invalid file is
    /// logged and also gives the defaults.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|content| Self::parse(&content))
        {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                config
            },
            Err(e) => {
                log::warn!("Ignoring config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Parse config from TOML text
    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to `path`, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }

    /// Pick the catalog path: an explicit path wins over the configured one
    pub fn catalog_path(&self, explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.catalog.clone())
            .with_context(|| {
                format!(
                    "no catalog given; pass --catalog or set `catalog` in {}",
                    Self::config_path().display()
                )
            })
    }
}
