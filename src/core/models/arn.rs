//! ARN pattern splitting
//!
//! An ARN is a colon-delimited string with a fixed-position prefix and a
//! free-form resource identifier:
//!
//! ```text
//! arn:<partition>:<service>:<region>:<account>:<resource...>
//! ```
//!
//! Any segment may be empty or contain `*`. Everything from the sixth segment
//! onward is the resource identifier; for comparison purposes those segments
//! are concatenated without the separating colons.
//!
//! # Examples
//!
//! ```
//! use arnlint::core::models::{ArnPattern, Operand};
//!
//! let raw = "arn:aws:logs:us-east-1:123456789012:log-group:/app*";
//! let arn = ArnPattern::parse(raw, Operand::First).unwrap();
//! assert_eq!(arn.service(), "logs");
//! assert_eq!(arn.identifier(), "log-group/app*");
//! ```

use std::fmt;

use thiserror::Error;

/// Number of colon-delimited segments before the resource identifier
pub const PREFIX_SEGMENTS: usize = 5;

/// Which side of a comparison a pattern was supplied on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The first pattern (the policy-side ARN when called from the resolver)
    First,
    /// The second pattern (the catalog template when called from the resolver)
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

/// Errors raised while splitting an ARN pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArnError {
    /// The pattern has fewer than six colon-delimited segments
    #[error("unexpected format for {operand} ARN pattern: {arn}")]
    Malformed {
        /// Which argument was malformed
        operand: Operand,
        /// The offending pattern text
        arn: String,
    },
}

/// An ARN pattern split into its fixed prefix and its resource identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArnPattern<'a> {
    prefix: [&'a str; PREFIX_SEGMENTS],
    identifier: String,
}

impl<'a> ArnPattern<'a> {
    /// Split `raw` into prefix segments and resource identifier
    ///
    /// `operand` is only used to label the error.
    pub fn parse(raw: &'a str, operand: Operand) -> Result<Self, ArnError> {
        let parts: Vec<&str> = raw.split(':').collect();
        if parts.len() <= PREFIX_SEGMENTS {
            return Err(ArnError::Malformed {
                operand,
                arn: raw.to_string(),
            });
        }

        let mut prefix = [""; PREFIX_SEGMENTS];
        prefix.copy_from_slice(&parts[..PREFIX_SEGMENTS]);

        Ok(Self {
            prefix,
            identifier: parts[PREFIX_SEGMENTS..].concat(),
        })
    }

    /// The five leading segments (`arn`, partition, service, region, account)
    #[must_use]
    pub const fn prefix(&self) -> &[&'a str; PREFIX_SEGMENTS] {
        &self.prefix
    }

    /// The service segment
    #[must_use]
    pub const fn service(&self) -> &'a str {
        self.prefix[2]
    }

    /// The resource identifier with its inner colons removed
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Whether every prefix segment is compatible with `other`'s
    ///
    /// Two segments are compatible when either is `*`, either is empty, or
    /// they are equal.
    #[must_use]
    pub fn prefix_compatible(&self, other: &Self) -> bool {
        self.prefix
            .iter()
            .zip(other.prefix.iter())
            .all(|(a, b)| segment_compatible(a, b))
    }
}

fn segment_compatible(a: &str, b: &str) -> bool {
    a == "*" || a.is_empty() || b == "*" || b.is_empty() || a == b
}
