//! Catalog source port
//!
//! Defines the interface for obtaining the resource catalog.

use super::super::models::Catalog;

/// Source of the service resource catalog
///
/// Implementations handle reading the catalog from wherever it lives
/// (an IAM definition file, an embedded copy, a test fixture).
/// The catalog is loaded once and shared read-only afterwards.
pub trait CatalogSource: Send + Sync {
    /// Load the full catalog
    fn load(&self) -> anyhow::Result<Catalog>;

    /// Short human-readable description of where the catalog comes from
    fn describe(&self) -> String {
        "catalog".to_string()
    }
}

/// An already-built catalog is its own source
impl CatalogSource for Catalog {
    fn load(&self) -> anyhow::Result<Catalog> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory catalog ({} services)", self.services().len())
    }
}
