// tolerance-core/src/domain/ports/statistics.rs

// Read side of the job runner's metrics collector. The collector owns aggregation
// across workers; the domain only ever reads the two job-wide totals.

/// Job-wide record counters at one point in time.
///
/// Both totals are expected to grow monotonically over a job and to be read
/// consistently with each other by whoever produces the value.
pub trait JobStatistics {
    fn total_read_records(&self) -> u64;

    fn total_error_records(&self) -> u64;

    /// Dirty records as a fraction of everything read, `None` before the first read.
    fn error_ratio(&self) -> Option<f64> {
        let total = self.total_read_records();
        if total == 0 {
            return None;
        }
        Some(self.total_error_records() as f64 / total as f64)
    }
}

impl<T: JobStatistics + ?Sized> JobStatistics for &T {
    fn total_read_records(&self) -> u64 {
        (**self).total_read_records()
    }

    fn total_error_records(&self) -> u64 {
        (**self).total_error_records()
    }
}
