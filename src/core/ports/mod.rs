//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core matching logic
//! and external systems (the filesystem holding the catalog).
//!
//! Implementations live in the `adapters` module.

mod catalog_source;

pub use catalog_source::CatalogSource;
