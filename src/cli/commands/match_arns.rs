//! Compare two ARN patterns

use arnlint::core::services::matches;
use arnlint::output::{MatchReport, OutputMode};

/// Report whether `first` and `second` can match a common ARN
pub fn match_arns(
    resource_type: &str,
    first: &str,
    second: &str,
    mode: OutputMode,
) -> anyhow::Result<()> {
    log::debug!("Matching {first} against {second} (resource type {resource_type:?})");

    let result = MatchReport {
        resource_type: resource_type.to_string(),
        first: first.to_string(),
        second: second.to_string(),
        matches: matches(resource_type, first, second)?,
    };

    result.render(mode);
    Ok(())
}
