// tolerance-core/src/application/report.rs
//
// Diagnostic record of one tolerance evaluation, for job-failure output and CI logs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::enforcement::evaluate_limits;
use crate::domain::ports::JobStatistics;
use crate::domain::tolerance::{ErrorLimit, ErrorTolerancePolicy, LimitExceededError, LimitKind};

// ── Report Structures ────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToleranceReport {
    pub checked_at: DateTime<Utc>,
    pub limit: ErrorLimit,
    pub total_read_records: u64,
    pub total_error_records: u64,
    /// `None` until at least one record has been read.
    pub error_ratio: Option<f64>,
    pub violation: Option<Violation>,
}

/// Flattens to `{"kind", "limit", "actual", "message"}`; record counts stay integers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Violation {
    #[serde(flatten)]
    pub payload: LimitExceededError,
    pub message: String,
}

impl Violation {
    pub fn kind(&self) -> LimitKind {
        self.payload.kind()
    }
}

impl From<LimitExceededError> for Violation {
    fn from(payload: LimitExceededError) -> Self {
        Self {
            message: payload.to_string(),
            payload,
        }
    }
}

impl ToleranceReport {
    pub fn evaluate<S>(policy: &ErrorTolerancePolicy, snapshot: &S) -> Self
    where
        S: JobStatistics + ?Sized,
    {
        let violation = evaluate_limits(policy, snapshot).err().map(Violation::from);

        Self {
            checked_at: Utc::now(),
            limit: policy.limit(),
            total_read_records: snapshot.total_read_records(),
            total_error_records: snapshot.total_error_records(),
            error_ratio: snapshot.error_ratio(),
            violation,
        }
    }

    pub fn passed(&self) -> bool {
        self.violation.is_none()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::tolerance::StatisticsSnapshot;

    #[test]
    fn test_passing_report() {
        let policy = ErrorTolerancePolicy::with_percentage_limit(0.1).unwrap();
        let report = ToleranceReport::evaluate(&policy, &StatisticsSnapshot::new(90, 10, 0));

        assert!(report.passed());
        assert_eq!(report.limit, ErrorLimit::Percentage(0.1));
        assert_eq!(report.total_read_records, 100);
        assert_eq!(report.total_error_records, 10);
        assert_eq!(report.error_ratio, Some(0.1));
    }

    #[test]
    fn test_failing_report_keeps_payload() {
        let policy = ErrorTolerancePolicy::with_record_limit(10);
        let report = ToleranceReport::evaluate(&policy, &StatisticsSnapshot::new(500, 4, 7));

        let violation = report.violation.clone().unwrap();
        assert!(!report.passed());
        assert_eq!(violation.kind(), LimitKind::RecordCountExceeded);
        assert_eq!(
            violation.payload,
            LimitExceededError::RecordCountExceeded {
                limit: 10,
                actual: 11
            }
        );
        assert!(violation.message.contains("[11]"));
    }

    #[test]
    fn test_empty_snapshot_has_no_ratio() {
        let report = ToleranceReport::evaluate(
            &ErrorTolerancePolicy::unbounded(),
            &StatisticsSnapshot::default(),
        );
        assert_eq!(report.error_ratio, None);
        assert!(report.passed());
    }

    #[test]
    fn test_json_shape() -> anyhow::Result<()> {
        let policy = ErrorTolerancePolicy::with_record_limit(0);
        let report = ToleranceReport::evaluate(&policy, &StatisticsSnapshot::new(1, 1, 0));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
        assert_eq!(json["limit"]["type"], "records");
        assert_eq!(json["limit"]["value"], 0);
        assert_eq!(json["violation"]["kind"], "record_count_exceeded");
        assert!(json["violation"]["limit"].is_u64());
        assert!(json["violation"]["actual"].is_u64());
        assert_eq!(json["total_error_records"], 1);
        Ok(())
    }

    #[test]
    fn test_huge_record_counts_stay_exact() -> anyhow::Result<()> {
        let limit = 1u64 << 53;
        let policy = ErrorTolerancePolicy::with_record_limit(limit);
        let report = ToleranceReport::evaluate(&policy, &StatisticsSnapshot::new(0, limit + 1, 0));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
        assert_eq!(json["violation"]["limit"].as_u64(), Some(limit));
        assert_eq!(json["violation"]["actual"].as_u64(), Some(limit + 1));

        let back: ToleranceReport = serde_json::from_value(json)?;
        assert_eq!(back.violation, report.violation);
        Ok(())
    }

    #[test]
    fn test_percentage_violation_serializes_ratio() -> anyhow::Result<()> {
        let policy = ErrorTolerancePolicy::with_percentage_limit(0.1)?;
        let report = ToleranceReport::evaluate(&policy, &StatisticsSnapshot::new(89, 11, 0));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
        assert_eq!(json["violation"]["kind"], "percentage_exceeded");
        assert_eq!(json["violation"]["limit"].as_f64(), Some(0.1));
        assert_eq!(json["violation"]["actual"].as_f64(), Some(0.11));
        Ok(())
    }
}
