//! arnlint - Match IAM policy resource ARNs against service ARN shapes
//!
//! This library decides whether two ARN globs can match a common ARN and
//! finds the resource types of a service catalog that an ARN can refer to.
//!
//! - [`core`] - The ARN matcher and resource type resolver (no I/O)
//! - [`adapters`] - Catalog loading from IAM definition JSON files
//! - [`config`] - User configuration
//! - [`output`] - Human and JSON rendering

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
