// tolerance-core/src/application/enforcement.rs

use tracing::{debug, error, instrument};

use crate::domain::ports::JobStatistics;
use crate::domain::tolerance::{ErrorLimit, ErrorTolerancePolicy, LimitExceededError};
use crate::error::ToleranceError;

/// Runs both limit checks against one snapshot, record count first.
///
/// Only the limit that survived precedence does any work; the other check is a no-op.
/// This is the one place a verdict is reached and logged.
#[instrument(
    skip_all,
    fields(
        read = snapshot.total_read_records(),
        errors = snapshot.total_error_records()
    )
)]
pub fn evaluate_limits<S>(
    policy: &ErrorTolerancePolicy,
    snapshot: &S,
) -> Result<(), LimitExceededError>
where
    S: JobStatistics + ?Sized,
{
    match policy.limit() {
        ErrorLimit::Unbounded => {
            debug!("No error limit configured, skipping dirty record checks");
            return Ok(());
        }
        ErrorLimit::Records(limit) => debug!(limit, "Error-limit set, error count check"),
        ErrorLimit::Percentage(limit) => debug!(limit, "Error-limit set, error percent check"),
    }

    let outcome = policy
        .check_record_limit(snapshot)
        .and_then(|()| policy.check_percentage_limit(snapshot));

    if let Err(violation) = &outcome {
        error!(kind = %violation.kind(), "❌ {}", violation);
    }

    outcome
}

/// [`evaluate_limits`] for callers that propagate the crate error.
pub fn enforce_tolerance<S>(
    policy: &ErrorTolerancePolicy,
    snapshot: &S,
) -> Result<(), ToleranceError>
where
    S: JobStatistics + ?Sized,
{
    evaluate_limits(policy, snapshot).map_err(ToleranceError::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::tolerance::StatisticsSnapshot;

    #[test]
    fn test_within_record_limit() {
        let policy = ErrorTolerancePolicy::with_record_limit(5);
        let snapshot = StatisticsSnapshot::new(100, 3, 2);
        assert!(enforce_tolerance(&policy, &snapshot).is_ok());
    }

    #[test]
    fn test_write_failures_count_towards_record_limit() {
        let policy = ErrorTolerancePolicy::with_record_limit(5);
        let snapshot = StatisticsSnapshot::new(100, 3, 3);

        let err = enforce_tolerance(&policy, &snapshot).unwrap_err();
        assert_eq!(
            err.as_limit_exceeded(),
            Some(&LimitExceededError::RecordCountExceeded {
                limit: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn test_percentage_violation_surfaces() {
        let policy = ErrorTolerancePolicy::with_percentage_limit(0.05).unwrap();
        // 10 read (8 ok + 2 failed), 2 dirty => 20%
        let snapshot = StatisticsSnapshot::new(8, 2, 0);

        let err = enforce_tolerance(&policy, &snapshot).unwrap_err();
        assert!(matches!(
            err.as_limit_exceeded(),
            Some(LimitExceededError::PercentageExceeded { actual, .. }) if (*actual - 0.2).abs() < 1e-12
        ));
    }

    #[test]
    fn test_evaluate_limits_returns_payload() {
        let policy = ErrorTolerancePolicy::with_record_limit(0);
        let snapshot = StatisticsSnapshot::new(10, 0, 1);
        assert_eq!(
            evaluate_limits(&policy, &snapshot),
            Err(LimitExceededError::RecordCountExceeded {
                limit: 0,
                actual: 1
            })
        );
    }

    #[test]
    fn test_unbounded_policy_never_fails() {
        let policy = ErrorTolerancePolicy::unbounded();
        let snapshot = StatisticsSnapshot::new(0, u64::MAX, u64::MAX);
        assert!(enforce_tolerance(&policy, &snapshot).is_ok());
    }
}
