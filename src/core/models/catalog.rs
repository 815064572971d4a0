//! Resource catalog model
//!
//! The catalog lists, per AWS service, the resource types the service exposes
//! and the ARN template each one follows. It is built once and then only read.

use serde::{Deserialize, Serialize};

/// A resource type exposed by a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceType {
    /// Resource type name (e.g., "bucket", "object", "log-group")
    #[serde(rename = "resource")]
    pub name: String,

    /// ARN template with `${Placeholder}` tokens for variable segments
    pub arn: String,

    /// Condition keys that apply to this resource type
    #[serde(default)]
    pub condition_keys: Vec<String>,
}

impl ResourceType {
    /// Create a resource type with no condition keys
    #[must_use]
    pub fn new(name: impl Into<String>, arn: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arn: arn.into(),
            condition_keys: Vec::new(),
        }
    }
}

/// A service and its resource types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Human-readable service name (e.g., "Amazon S3")
    #[serde(rename = "service_name")]
    pub name: String,

    /// Service namespace used in actions and ARNs (e.g., "s3")
    #[serde(default)]
    pub prefix: String,

    /// Resource types in catalog order
    #[serde(default)]
    pub resources: Vec<ResourceType>,
}

impl ServiceRecord {
    /// Create a service record
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        resources: Vec<ResourceType>,
    ) -> Self {
        Self {
            name: name.into(),
            prefix: prefix.into(),
            resources,
        }
    }
}

/// Ordered, read-only collection of service records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
}

impl Catalog {
    /// Build a catalog from service records, keeping their order
    #[must_use]
    pub const fn new(services: Vec<ServiceRecord>) -> Self {
        Self { services }
    }

    /// Service records in catalog order
    #[must_use]
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    /// Look up a service by its namespace prefix
    #[must_use]
    pub fn service(&self, prefix: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.prefix == prefix)
    }

    /// Total number of resource types across all services
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.services.iter().map(|s| s.resources.len()).sum()
    }

    /// Whether the catalog has no services
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl From<Vec<ServiceRecord>> for Catalog {
    fn from(services: Vec<ServiceRecord>) -> Self {
        Self::new(services)
    }
}

/// A resource type whose ARN template intersects a queried ARN
///
/// Borrows from the catalog the resolver was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceMatch<'a> {
    /// The service the resource type belongs to
    pub service: &'a ServiceRecord,
    /// The matching resource type
    pub resource: &'a ResourceType,
}

impl ResourceMatch<'_> {
    /// Service name of the match
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service.name
    }

    /// Resource type name of the match
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource.name
    }
}

impl std::fmt::Display for ResourceMatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.service.name, self.resource.name)
    }
}
