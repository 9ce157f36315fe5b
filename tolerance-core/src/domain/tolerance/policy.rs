// tolerance-core/src/domain/tolerance/policy.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ports::JobStatistics;
use crate::domain::tolerance::error::{ConfigurationError, LimitExceededError};

/// The single limit a policy enforces once precedence has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ErrorLimit {
    /// Nothing configured: every check passes.
    #[default]
    Unbounded,
    /// Inclusive ceiling on the number of dirty records.
    Records(u64),
    /// Inclusive ceiling on dirty records / records read, in `[0.0, 1.0]`.
    Percentage(f64),
}

impl fmt::Display for ErrorLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Records(limit) => write!(f, "at most {} dirty records", limit),
            Self::Percentage(limit) => write!(f, "at most {:.4}% dirty records", limit * 100.0),
        }
    }
}

/// Decides whether a job's dirty records stay within tolerance.
///
/// Built once per job. A record limit outranks a percentage limit, so at most
/// one of [`check_record_limit`](Self::check_record_limit) and
/// [`check_percentage_limit`](Self::check_percentage_limit) does any work.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ErrorTolerancePolicy {
    limit: ErrorLimit,
}

impl ErrorTolerancePolicy {
    /// Validates both limits, then keeps the one that wins.
    ///
    /// The percentage is range-checked even when a record limit will shadow it.
    pub fn new(
        record_limit: Option<i64>,
        percentage_limit: Option<f64>,
    ) -> Result<Self, ConfigurationError> {
        if let Some(percentage) = percentage_limit {
            validate_percentage(percentage)?;
        }

        let limit = match (record_limit, percentage_limit) {
            (Some(records), _) => {
                let records = u64::try_from(records)
                    .map_err(|_| ConfigurationError::NegativeRecordLimit(records))?;
                ErrorLimit::Records(records)
            }
            (None, Some(percentage)) => ErrorLimit::Percentage(percentage),
            (None, None) => ErrorLimit::Unbounded,
        };

        Ok(Self { limit })
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_record_limit(limit: u64) -> Self {
        Self {
            limit: ErrorLimit::Records(limit),
        }
    }

    pub fn with_percentage_limit(limit: f64) -> Result<Self, ConfigurationError> {
        validate_percentage(limit)?;
        Ok(Self {
            limit: ErrorLimit::Percentage(limit),
        })
    }

    pub fn limit(&self) -> ErrorLimit {
        self.limit
    }

    pub fn record_limit(&self) -> Option<u64> {
        match self.limit {
            ErrorLimit::Records(limit) => Some(limit),
            _ => None,
        }
    }

    pub fn percentage_limit(&self) -> Option<f64> {
        match self.limit {
            ErrorLimit::Percentage(limit) => Some(limit),
            _ => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit == ErrorLimit::Unbounded
    }

    /// Fails once the dirty record count goes strictly past the record limit.
    pub fn check_record_limit<S>(&self, snapshot: &S) -> Result<(), LimitExceededError>
    where
        S: JobStatistics + ?Sized,
    {
        let Some(limit) = self.record_limit() else {
            return Ok(());
        };

        let actual = snapshot.total_error_records();
        if actual > limit {
            return Err(LimitExceededError::RecordCountExceeded { limit, actual });
        }
        Ok(())
    }

    /// Fails once dirty / read goes strictly past the percentage limit.
    ///
    /// Always passes while nothing has been read.
    pub fn check_percentage_limit<S>(&self, snapshot: &S) -> Result<(), LimitExceededError>
    where
        S: JobStatistics + ?Sized,
    {
        let Some(limit) = self.percentage_limit() else {
            return Ok(());
        };

        // A correctly rounded quotient lands on the same f64 as the configured decimal
        // whenever the exact ratio equals it; `limit * total` can round below an integer.
        let Some(actual) = snapshot.error_ratio() else {
            return Ok(());
        };
        if actual > limit {
            return Err(LimitExceededError::PercentageExceeded { limit, actual });
        }
        Ok(())
    }
}

fn validate_percentage(percentage: f64) -> Result<(), ConfigurationError> {
    if (0.0..=1.0).contains(&percentage) {
        Ok(())
    } else {
        Err(ConfigurationError::PercentageOutOfRange(percentage))
    }
}
