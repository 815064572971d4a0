//! Resource type resolver - finds the catalog resource types an ARN can refer to
//!
//! The resolver is built once around a shared, read-only [`Catalog`]. Each
//! resource type's ARN template has its `${Placeholder}` tokens replaced with
//! `*` up front, so every query only runs the matcher.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use arnlint::core::models::{Catalog, ResourceType, ServiceRecord};
//! use arnlint::core::services::Resolver;
//!
//! let catalog = Catalog::new(vec![ServiceRecord::new(
//!     "Amazon SQS",
//!     "sqs",
//!     vec![ResourceType::new("queue", "arn:${Partition}:sqs:${Region}:${Account}:${QueueName}")],
//! )]);
//! let resolver = Resolver::new(Arc::new(catalog));
//!
//! let found = resolver.resolve("arn:aws:sqs:us-east-1:123456789012:jobs").unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].resource_name(), "queue");
//! ```

use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::matcher::matches;
use crate::core::models::{ArnError, Catalog, ResourceMatch};

/// `${Placeholder}` tokens in catalog ARN templates
static TEMPLATE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{.*?\}").expect("template placeholder regex is valid"));

/// Replace every `${Placeholder}` token in an ARN template with `*`
///
/// ```
/// use arnlint::core::services::normalize_template;
///
/// assert_eq!(
///     normalize_template("arn:${Partition}:s3:::${BucketName}/${ObjectName}"),
///     "arn:*:s3:::*/*"
/// );
/// ```
#[must_use]
pub fn normalize_template(template: &str) -> String {
    TEMPLATE_PLACEHOLDER.replace_all(template, "*").into_owned()
}

/// Position of a resource type in the catalog plus its normalized template
#[derive(Debug, Clone)]
struct Entry {
    service: usize,
    resource: usize,
    template: String,
}

/// Resolves ARNs to the catalog resource types whose templates they intersect
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    entries: Vec<Entry>,
}

impl Resolver {
    /// Create a resolver over a shared catalog
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let entries = catalog
            .services()
            .iter()
            .enumerate()
            .flat_map(|(service, record)| {
                record.resources.iter().enumerate().map(move |(resource, r)| Entry {
                    service,
                    resource,
                    template: normalize_template(&r.arn),
                })
            })
            .collect();

        Self { catalog, entries }
    }

    /// The catalog this resolver searches
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Lazily yield every resource type whose template intersects `arn`
    ///
    /// Matches come out in catalog order: services in order, then resource
    /// types within each service. A malformed pattern yields an error item.
    pub fn iter<'a>(
        &'a self,
        arn: &'a str,
    ) -> impl Iterator<Item = Result<ResourceMatch<'a>, ArnError>> + 'a {
        self.entries.iter().filter_map(move |entry| {
            let service = &self.catalog.services()[entry.service];
            let resource = &service.resources[entry.resource];
            match matches(&resource.name, arn, &entry.template) {
                Ok(true) => Some(Ok(ResourceMatch { service, resource })),
                Ok(false) => None,
                Err(e) => Some(Err(e)),
            }
        })
    }

    /// Collect every resource type whose template intersects `arn`
    ///
    /// # Errors
    ///
    /// Returns the first [`ArnError`] raised by the matcher.
    pub fn resolve<'a>(&'a self, arn: &'a str) -> Result<Vec<ResourceMatch<'a>>, ArnError> {
        self.iter(arn).collect()
    }

    /// Hand every resource type whose template intersects `arn` to `observer`
    ///
    /// Matches are reported as they are found. Returns how many were
    /// reported.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first [`ArnError`] raised by the matcher;
    /// matches found before it have already been reported.
    pub fn report<'a, F>(&'a self, arn: &'a str, mut observer: F) -> Result<usize, ArnError>
    where
        F: FnMut(ResourceMatch<'a>),
    {
        let mut count = 0;
        for found in self.iter(arn) {
            observer(found?);
            count += 1;
        }
        Ok(count)
    }
}
