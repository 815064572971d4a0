//! Domain models for arnlint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ArnPattern`] - An ARN split into its fixed prefix and resource identifier
//! - [`Catalog`] - Services and the ARN templates of their resource types
//! - [`ResourceMatch`] - A catalog resource type that intersects a queried ARN

mod arn;
mod catalog;

pub use arn::{ArnError, ArnPattern, Operand, PREFIX_SEGMENTS};
pub use catalog::{Catalog, ResourceMatch, ResourceType, ServiceRecord};
