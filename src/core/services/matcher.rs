//! ARN matcher service - decides whether two ARN globs can match a common ARN
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Deciding whether two glob languages intersect requires building a product
//! automaton in general. Instead, the identifier comparison handles the glob
//! shapes that occur in IAM ARNs directly: bare literal, bare wildcard,
//! prefix wildcard (`*abc`), suffix wildcard (`abc*`) and both-ends wildcard
//! (`*abc*`). Combinations with wildcards in the interior of both sides are
//! reported as non-matches.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::{ArnError, ArnPattern, Operand};

/// `[key]`-style placeholders found in some catalog identifiers
static BRACKET_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.+?\]").expect("bracket placeholder regex is valid"));

/// Check whether two ARN patterns could both match some concrete ARN
///
/// Rules are evaluated in order and the first one that applies decides:
///
/// 1. Either pattern is exactly `*`: match.
/// 2. `resource_type` contains `bucket` and `second` contains `/`: no match.
///    Bucket ARNs never contain a path separator.
/// 3. The five prefix segments must be pairwise compatible (`*`, empty, or
///    equal).
/// 4. The resource identifiers are compared with [`identifiers_intersect`].
///
/// # Arguments
///
/// * `resource_type` - Resource type name, only used to detect bucket types
/// * `first` - The first ARN pattern
/// * `second` - The second ARN pattern
///
/// # Errors
///
/// Returns [`ArnError::Malformed`] if a pattern reaching rule 3 has fewer
/// than six colon-delimited segments.
///
/// # Examples
///
/// ```
/// use arnlint::core::services::matches;
///
/// assert!(matches("object", "arn:*:s3:::*/*", "arn:aws:s3:::*personalize*").unwrap());
/// assert!(!matches("bucket", "arn:*:s3:::*", "arn:aws:s3:::mybucket/key").unwrap());
/// ```
pub fn matches(resource_type: &str, first: &str, second: &str) -> Result<bool, ArnError> {
    if first == "*" || second == "*" {
        return Ok(true);
    }

    if resource_type.contains("bucket") && second.contains('/') {
        return Ok(false);
    }

    let first = ArnPattern::parse(first, Operand::First)?;
    let second = ArnPattern::parse(second, Operand::Second)?;

    if !first.prefix_compatible(&second) {
        return Ok(false);
    }

    Ok(identifiers_intersect(first.identifier(), second.identifier()))
}

/// Check whether two resource identifier globs could match a common string
///
/// `[key]` placeholders in `first` are treated as `*`; `second` is compared
/// as written.
///
/// # Examples
///
/// ```
/// use arnlint::core::services::identifiers_intersect;
///
/// assert!(identifiers_intersect("*/*", "mybucket*"));
/// assert!(!identifiers_intersect("*/*", "mybucket"));
/// assert!(!identifiers_intersect("*mybucket", "*myotherthing"));
/// ```
#[must_use]
pub fn identifiers_intersect(first: &str, second: &str) -> bool {
    // "mybucket", "mybucket" / "*", "*"
    if first == second {
        return true;
    }

    let expanded: Cow<'_, str> = BRACKET_PLACEHOLDER.replace_all(first, "*");
    let first: &str = &expanded;

    // Two different literals can never meet
    if !first.contains('*') && !second.contains('*') {
        return false;
    }

    if first == "*" || second == "*" {
        return true;
    }

    // One side is empty and the other is neither empty nor "*"
    if first.is_empty() || second.is_empty() {
        return false;
    }

    // "*/*", "*personalize*": pick a string with the suffix-wildcard side's
    // literal up front and the prefix-wildcard side's literal at the end
    if (first.starts_with('*') && second.ends_with('*'))
        || (first.ends_with('*') && second.starts_with('*'))
    {
        return true;
    }

    if contains_inner(first, second) || contains_inner(second, first) {
        return true;
    }

    prefix_covers(first, second) || prefix_covers(second, first)
}

/// `*abc*` matches anything containing `abc`
fn contains_inner(pattern: &str, other: &str) -> bool {
    pattern
        .strip_prefix('*')
        .and_then(|rest| rest.strip_suffix('*'))
        .is_some_and(|inner| other.contains(inner))
}

/// `abc*` matches anything starting with `abc`
fn prefix_covers(pattern: &str, other: &str) -> bool {
    pattern.strip_suffix('*').is_some_and(|prefix| other.starts_with(prefix))
}
