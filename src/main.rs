//! arnlint - Match IAM policy resource ARNs against service ARN shapes
//!
//! Compares ARN globs from policy statements with the ARN templates of an
//! IAM definition catalog and reports the resource types they can refer to.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
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

mod cli;

/// Main entry point for the arnlint CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
