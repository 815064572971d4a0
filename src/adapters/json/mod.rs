//! JSON catalog loading
//!
//! Reads an IAM definition file (a JSON array of services, each with its
//! resource types and their ARN templates) into a [`Catalog`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::Catalog;
use crate::core::ports::CatalogSource;

/// Errors that can occur while loading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// The catalog file is not a valid IAM definition document
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Parse a catalog from IAM definition JSON text
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of service records.
pub fn parse_catalog(content: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(content)
}

/// Load a catalog from an IAM definition JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Loaded catalog {} ({} services, {} resource types)",
        path.display(),
        catalog.services().len(),
        catalog.resource_count()
    );

    Ok(catalog)
}

/// Catalog source backed by an IAM definition JSON file
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    /// Create a source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the catalog file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> anyhow::Result<Catalog> {
        Ok(load_catalog(&self.path)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
