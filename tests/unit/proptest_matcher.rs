//! Property-based tests for the matcher module
//!
//! Uses proptest to verify properties that should hold for all inputs.

use arnlint::core::services::matches;
use proptest::prelude::*;

/// A well-formed ARN glob: six or more segments of letters, digits, '/', '-'
/// and '*'
fn arn_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9/*-]{0,8}", 6..9).prop_map(|parts| parts.join(":"))
}

/// Like `arn_pattern`, but segments may also carry `[...]` placeholders
fn bracketed_arn_pattern() -> impl Strategy<Value = String> {
    prop::collection::vec(r"[a-z0-9/*\[\]-]{0,8}", 6..9).prop_map(|parts| parts.join(":"))
}

/// Resource type names that never trigger the bucket exclusion
fn non_bucket_type() -> impl Strategy<Value = String> {
    "[a-z-]{0,12}".prop_filter("not a bucket type", |t| !t.contains("bucket"))
}

proptest! {
    /// "*" as the first pattern matches anything
    #[test]
    fn wildcard_first_matches_any(hint in "[a-z:-]{0,12}", other in arn_pattern()) {
        prop_assert!(matches(&hint, "*", &other).unwrap());
    }

    /// "*" as the second pattern matches anything
    #[test]
    fn wildcard_second_matches_any(hint in "[a-z:-]{0,12}", other in arn_pattern()) {
        prop_assert!(matches(&hint, &other, "*").unwrap());
    }

    /// A pattern always matches itself when the bucket exclusion cannot fire
    #[test]
    fn pattern_matches_self(hint in non_bucket_type(), arn in arn_pattern()) {
        prop_assert!(matches(&hint, &arn, &arn).unwrap());
    }

    /// Self-matches survive bracket placeholders in the first pattern
    #[test]
    fn bracketed_pattern_matches_self(hint in non_bucket_type(), arn in bracketed_arn_pattern()) {
        prop_assert!(matches(&hint, &arn, &arn).unwrap());
    }

    /// Bucket types reject every second pattern containing '/'
    #[test]
    fn bucket_rejects_paths(
        first in arn_pattern(),
        bucket in "[a-z0-9-]{1,10}",
        key in "[a-z0-9/*-]{0,10}"
    ) {
        let second = format!("arn:aws:s3:::{bucket}/{key}");
        prop_assert!(!matches("bucket", &first, &second).unwrap());
    }

    /// Wildcard or empty prefix segments never prevent a match on equal identifiers
    #[test]
    fn prefix_wildcards_are_compatible(
        hint in non_bucket_type(),
        service in "[a-z0-9]{1,8}",
        region in "[a-z0-9-]{1,10}",
        account in "[0-9]{12}",
        id in "[a-z0-9/-]{1,12}",
        blank in prop::bool::ANY
    ) {
        let wild = if blank { "" } else { "*" };
        let first = format!("arn:aws:{service}:{region}:{account}:{id}");
        let second = format!("arn:{wild}:{service}:{wild}:{wild}:{id}");
        prop_assert!(matches(&hint, &first, &second).unwrap());
        prop_assert!(matches(&hint, &second, &first).unwrap());
    }

    /// Fewer than six segments is always an error when no short-circuit applies
    #[test]
    fn short_patterns_are_rejected(parts in prop::collection::vec("[a-z0-9]{1,6}", 1..6)) {
        let short = parts.join(":");
        let good = "arn:aws:s3:::x";
        prop_assert!(matches("object", &short, good).is_err());
        prop_assert!(matches("object", good, &short).is_err());
    }
}

#[cfg(test)]
mod deterministic_tests {
    use super::*;

    #[test]
    fn bucket_exclusion_is_one_sided() {
        let path = "arn:aws:s3:::mybucket/key";
        let bucket = "arn:aws:s3:::*";
        assert!(!matches("bucket", bucket, path).unwrap());
        assert!(matches("bucket", path, bucket).unwrap());
    }
}
