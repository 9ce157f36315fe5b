// tolerance-core/src/domain/tolerance/snapshot.rs

use serde::{Deserialize, Serialize};

use crate::domain::ports::JobStatistics;

/// Aggregated counters reported by the job runner for one polling tick.
///
/// A record that failed on the read side counts both as read and as dirty;
/// a record rejected by the writer was already counted as a successful read.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticsSnapshot {
    #[serde(default)]
    pub read_succeed_records: u64,
    #[serde(default)]
    pub read_failed_records: u64,
    #[serde(default)]
    pub write_failed_records: u64,
}

impl StatisticsSnapshot {
    pub fn new(read_succeed_records: u64, read_failed_records: u64, write_failed_records: u64) -> Self {
        Self {
            read_succeed_records,
            read_failed_records,
            write_failed_records,
        }
    }
}

impl JobStatistics for StatisticsSnapshot {
    fn total_read_records(&self) -> u64 {
        self.read_succeed_records
            .saturating_add(self.read_failed_records)
    }

    fn total_error_records(&self) -> u64 {
        self.read_failed_records
            .saturating_add(self.write_failed_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_follow_read_and_write_counters() {
        let snapshot = StatisticsSnapshot::new(90, 10, 5);
        assert_eq!(snapshot.total_read_records(), 100);
        assert_eq!(snapshot.total_error_records(), 15);
        assert_eq!(snapshot.error_ratio(), Some(0.15));
    }

    #[test]
    fn test_empty_snapshot_has_no_ratio() {
        let snapshot = StatisticsSnapshot::default();
        assert_eq!(snapshot.total_read_records(), 0);
        assert_eq!(snapshot.error_ratio(), None);
    }

    #[test]
    fn test_totals_saturate() {
        let snapshot = StatisticsSnapshot::new(u64::MAX, 1, u64::MAX);
        assert_eq!(snapshot.total_read_records(), u64::MAX);
        assert_eq!(snapshot.total_error_records(), u64::MAX);
    }

    #[test]
    fn test_missing_counters_default_to_zero() -> anyhow::Result<()> {
        let snapshot: StatisticsSnapshot = serde_json::from_str(r#"{"read_succeed_records": 42}"#)?;
        assert_eq!(snapshot, StatisticsSnapshot::new(42, 0, 0));
        Ok(())
    }
}
