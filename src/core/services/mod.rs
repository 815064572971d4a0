//! Business logic services
//!
//! Pure matching logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`matcher`] - Decide whether two ARN globs intersect
//! - [`resolver`] - Find the catalog resource types an ARN can refer to

pub mod matcher;
pub mod resolver;

pub use matcher::{identifiers_intersect, matches};
pub use resolver::{Resolver, normalize_template};
