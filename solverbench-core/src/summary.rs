//! Dataset Summary Types

use crate::case::CaseFailure;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for one dataset.
///
/// Built once from the full list of outcomes; never updated incrementally.
/// `correct_count <= total_count`, and `total_count` counts outcomes only,
/// so excluded cases never show up here except in `failures`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Dataset source path as given to the aggregator
    pub dataset_name: String,
    /// Outcomes whose label matched
    pub correct_count: usize,
    /// Number of outcomes (completed cases)
    pub total_count: usize,
    /// Mean solver-reported time (µs)
    pub time_mean: f64,
    /// Sample standard deviation of solver-reported time (µs)
    pub time_stddev: f64,
    /// Median solver-reported time (µs)
    pub time_median: f64,
    /// Mean effort metric
    pub effort_mean: f64,
    /// Sample standard deviation of the effort metric
    pub effort_stddev: f64,
    /// Median effort metric
    pub effort_median: f64,
    /// Cases completed per second of solver-reported time
    pub throughput: f64,
    /// Sum of solver-reported time (µs)
    pub time_total_micros: u64,
    /// Sum of the effort metric
    pub effort_total: u64,
    /// Harness-measured wall clock across all completed cases (µs)
    pub wall_clock_total_micros: u64,
    /// Valid dataset lines that were attempted
    pub attempted_count: usize,
    /// Why excluded cases were excluded
    pub failures: FailureTally,
}

impl DatasetSummary {
    /// Fraction of outcomes with the expected label
    pub fn accuracy(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.correct_count as f64 / self.total_count as f64
        }
    }
}

/// Count of excluded cases by failure kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureTally {
    /// Cases killed at the per-case deadline
    pub timeouts: usize,
    /// Cases whose output was not valid UTF-8 or not a valid response
    pub malformed: usize,
    /// Cases whose process could not be started
    pub launch_failures: usize,
    /// Cases lost to pipe or wait errors
    pub io_failures: usize,
}

impl FailureTally {
    /// Record one excluded case
    pub fn record(&mut self, failure: &CaseFailure) {
        match failure {
            CaseFailure::Timeout(_) => self.timeouts += 1,
            CaseFailure::Decode(_) | CaseFailure::MalformedResponse(_) => self.malformed += 1,
            CaseFailure::Launch(_) => self.launch_failures += 1,
            CaseFailure::Io(_) => self.io_failures += 1,
        }
    }

    /// Total number of excluded cases
    pub fn total(&self) -> usize {
        self.timeouts + self.malformed + self.launch_failures + self.io_failures
    }

    /// Merge another tally into this one
    pub fn merge(&mut self, other: &FailureTally) {
        self.timeouts += other.timeouts;
        self.malformed += other.malformed;
        self.launch_failures += other.launch_failures;
        self.io_failures += other.io_failures;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ResponseError;
    use std::time::Duration;

    #[test]
    fn test_tally_records_each_kind() {
        let mut tally = FailureTally::default();
        tally.record(&CaseFailure::Timeout(Duration::from_millis(10)));
        tally.record(&CaseFailure::MalformedResponse(
            ResponseError::TooFewTokens { found: 0 },
        ));
        tally.record(&CaseFailure::Launch(std::io::Error::from(
            std::io::ErrorKind::NotFound,
        )));
        tally.record(&CaseFailure::Io(std::io::Error::from(
            std::io::ErrorKind::BrokenPipe,
        )));

        assert_eq!(tally.timeouts, 1);
        assert_eq!(tally.malformed, 1);
        assert_eq!(tally.launch_failures, 1);
        assert_eq!(tally.io_failures, 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn test_tally_merge() {
        let mut a = FailureTally {
            timeouts: 1,
            ..Default::default()
        };
        let b = FailureTally {
            timeouts: 2,
            malformed: 3,
            ..Default::default()
        };
        a.merge(&b);
        assert_eq!(a.timeouts, 3);
        assert_eq!(a.malformed, 3);
        assert_eq!(a.total(), 6);
    }
}
