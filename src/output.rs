//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::core::models::ResourceMatch;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of comparing two ARN patterns
#[derive(Debug, Serialize)]
pub struct MatchReport {
    /// Resource type hint the comparison used
    pub resource_type: String,
    /// The first ARN pattern
    pub first: String,
    /// The second ARN pattern
    pub second: String,
    /// Whether the patterns intersect
    pub matches: bool,
}

/// Resource types matching one ARN
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    /// The ARN that was resolved
    pub arn: String,
    /// Matching resource types in catalog order
    pub matches: Vec<MatchInfo>,
}

/// A matching resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchInfo {
    /// Service name (e.g., "Amazon S3")
    pub service: String,
    /// Service namespace (e.g., "s3")
    pub prefix: String,
    /// Resource type name
    pub resource: String,
    /// The resource type's ARN template as written in the catalog
    pub arn_template: String,
}

impl From<ResourceMatch<'_>> for MatchInfo {
    fn from(m: ResourceMatch<'_>) -> Self {
        Self {
            service: m.service.name.clone(),
            prefix: m.service.prefix.clone(),
            resource: m.resource.name.clone(),
            arn_template: m.resource.arn.clone(),
        }
    }
}

impl MatchReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.matches {
            println!("{}", "match".green());
        } else {
            println!("{}", "no match".red());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ResolveReport {
    /// Build a report from the resolver's matches for `arn`
    #[must_use]
    pub fn new<'a>(
        arn: impl Into<String>,
        matches: impl IntoIterator<Item = ResourceMatch<'a>>,
    ) -> Self {
        Self {
            arn: arn.into(),
            matches: matches.into_iter().map(MatchInfo::from).collect(),
        }
    }
}

/// Render resolve reports as a JSON array
///
/// Human mode streams matches as the resolver finds them instead.
pub fn render_resolve_json(reports: &[ResolveReport]) {
    println!("{}", serde_json::to_string_pretty(reports).unwrap_or_default());
}
