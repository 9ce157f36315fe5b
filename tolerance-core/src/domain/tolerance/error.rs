// tolerance-core/src/domain/tolerance/error.rs

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Raised while building a policy from limits outside their valid domain.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Dirty record percentage limit must lie within [0.0, 1.0], got {0}")]
    #[diagnostic(
        code(tolerance::domain::config::percentage),
        help("Set 'error-limit.percentage' to a ratio such as 0.05 (5%).")
    )]
    PercentageOutOfRange(f64),

    #[error("Dirty record limit must be a non-negative integer, got {0}")]
    #[diagnostic(
        code(tolerance::domain::config::record),
        help("Set 'error-limit.record' to 0 to reject any dirty record.")
    )]
    NegativeRecordLimit(i64),
}

/// Which limit a violation was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitKind {
    RecordCountExceeded,
    PercentageExceeded,
}

impl LimitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecordCountExceeded => "record_count_exceeded",
            Self::PercentageExceeded => "percentage_exceeded",
        }
    }
}

impl fmt::Display for LimitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The job's dirty data went past its configured tolerance.
///
/// The payload is the source of truth; the `Display` text is only one rendering of it.
/// Serialized as `{"kind": ..., "limit": ..., "actual": ...}` with the payload's own types.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LimitExceededError {
    #[error("Dirty record count check failed: limit is [{limit}] records, but [{actual}] were captured")]
    #[diagnostic(
        code(tolerance::domain::dirty_data_limit_exceeded),
        help("Inspect the rejected records, or raise 'error-limit.record' if this volume is acceptable.")
    )]
    RecordCountExceeded { limit: u64, actual: u64 },

    #[error("Dirty record percentage check failed: limit is [{limit:.6}], but [{actual:.6}] was captured")]
    #[diagnostic(
        code(tolerance::domain::dirty_data_limit_exceeded),
        help("Inspect the rejected records, or raise 'error-limit.percentage' if this ratio is acceptable.")
    )]
    PercentageExceeded { limit: f64, actual: f64 },
}

impl LimitExceededError {
    pub fn kind(&self) -> LimitKind {
        match self {
            Self::RecordCountExceeded { .. } => LimitKind::RecordCountExceeded,
            Self::PercentageExceeded { .. } => LimitKind::PercentageExceeded,
        }
    }
}
