//! Tests for the ARN matcher
//!
//! The matcher is deliberately asymmetric: the bucket exclusion only looks at
//! the second pattern and `[key]` placeholders are only expanded in the
//! first. Where that matters both call orders are checked.

use arnlint::core::models::{ArnError, Operand};
use arnlint::core::services::{identifiers_intersect, matches};

fn s3(id: &str) -> String {
    format!("arn:aws:s3:::{id}")
}

// =============================================================================
// Identifier Scenarios
// =============================================================================

#[test]
fn prefix_wildcard_meets_contains_pattern() {
    assert!(identifiers_intersect("*/*", "*personalize*"));
    assert!(matches("object", &s3("*/*"), &s3("*personalize*")).unwrap());
}

#[test]
fn bare_wildcard_meets_literal() {
    assert!(identifiers_intersect("*", "mybucket"));
    assert!(identifiers_intersect("mybucket", "*"));
}

#[test]
fn path_pattern_misses_bucket_name() {
    assert!(!identifiers_intersect("*/*", "mybucket"));
    assert!(!matches("object", &s3("*/*"), &s3("mybucket")).unwrap());
}

#[test]
fn path_pattern_meets_bucket_prefix() {
    assert!(identifiers_intersect("*/*", "mybucket*"));
    assert!(matches("object", &s3("*/*"), &s3("mybucket*")).unwrap());
}

#[test]
fn two_prefix_wildcards_with_different_literals_miss() {
    assert!(!identifiers_intersect("*mybucket", "*myotherthing"));
    assert!(!matches("object", &s3("*mybucket"), &s3("*myotherthing")).unwrap());
}

#[test]
fn interior_wildcards_are_not_reconciled() {
    // Both match "abx", but wildcards inside both identifiers are not handled
    assert!(!identifiers_intersect("ab*x", "a*x"));
}

// =============================================================================
// Whole-Pattern Rules
// =============================================================================

#[test]
fn whole_wildcard_short_circuits_before_validation() {
    assert!(matches("bucket", "*", "mybucket").unwrap());
    assert!(matches("bucket", "mybucket", "*").unwrap());
    assert!(matches("", "*", "not-an-arn").unwrap());
}

#[test]
fn bucket_exclusion_fires_on_second_pattern_path() {
    assert!(!matches("bucket", "arn:*:s3:::*", "arn:aws:s3:::mybucket/key").unwrap());
}

#[test]
fn bucket_exclusion_ignores_first_pattern_path() {
    assert!(matches("bucket", "arn:aws:s3:::mybucket/key", "arn:*:s3:::*").unwrap());
}

#[test]
fn prefix_segments_must_agree() {
    assert!(
        !matches("queue", "arn:aws:sqs:us-east-1:111:q", "arn:aws:sqs:us-east-1:222:q").unwrap()
    );
    assert!(!matches("queue", "arn:aws-cn:sqs:::q", "arn:aws:sqs:::q").unwrap());
    assert!(matches("queue", "arn:*:sqs:*:*:q", "arn:aws:sqs:us-east-1:222:q").unwrap());
}

#[test]
fn identifier_colons_are_dropped() {
    assert!(
        matches(
            "log-stream",
            "arn:aws:logs:us-east-1:1:log-group:app:log-stream:web",
            "arn:aws:logs:us-east-1:1:log-groupapplog-streamweb",
        )
        .unwrap()
    );
}

#[test]
fn catalog_bracket_placeholder_acts_as_wildcard() {
    let catalog = "arn:aws:ssm:us-east-1:1:parameter/[key]";
    let policy = "arn:aws:ssm:us-east-1:1:parameter/prod/db";
    assert!(matches("parameter", catalog, policy).unwrap());
    assert!(!matches("parameter", policy, catalog).unwrap());
}

// =============================================================================
// Malformed Input
// =============================================================================

#[test]
fn five_segments_fail_in_first_position() {
    let err = matches("object", "arn:aws:s3::mybucket", "arn:aws:s3:::mybucket").unwrap_err();
    assert!(matches!(err, ArnError::Malformed { operand: Operand::First, .. }));
}

#[test]
fn five_segments_fail_in_second_position() {
    let err = matches("object", "arn:aws:s3:::mybucket", "arn:aws:s3::mybucket").unwrap_err();
    assert!(matches!(err, ArnError::Malformed { operand: Operand::Second, .. }));
}

#[test]
fn malformed_error_names_the_pattern() {
    let err = matches("object", "arn:aws:s3::mybucket", "arn:aws:s3:::mybucket").unwrap_err();
    assert!(err.to_string().contains("arn:aws:s3::mybucket"));
}
