//! Resolve ARNs to catalog resource types

use std::path::Path;
use std::sync::Arc;

use arnlint::adapters::json::JsonCatalogSource;
use arnlint::config::Config;
use arnlint::core::ports::CatalogSource;
use arnlint::core::services::Resolver;
use arnlint::output::{OutputMode, ResolveReport, render_resolve_json};

/// Print the resource types each ARN can refer to
pub fn resolve(
    arns: &[String],
    catalog: Option<&Path>,
    config: &Config,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let source = JsonCatalogSource::new(config.catalog_path(catalog)?);
    log::debug!("Resolving {} ARN(s) against {}", arns.len(), source.describe());

    let resolver = Resolver::new(Arc::new(source.load()?));

    match mode {
        OutputMode::Human => {
            for arn in arns {
                let count = resolver.report(arn, |m| println!("{m}"))?;
                if count == 0 {
                    log::info!("No resource type matches {arn}");
                }
            }
        },
        OutputMode::Json => {
            let reports = arns
                .iter()
                .map(|arn| Ok(ResolveReport::new(arn.as_str(), resolver.resolve(arn)?)))
                .collect::<anyhow::Result<Vec<_>>>()?;
            render_resolve_json(&reports);
        },
    }

    Ok(())
}
