//! Report Building
//!
//! Assembles the final [`Report`] from the dataset summaries and run totals.
//!
//! ```text
//! [DatasetSummary] ──► DatasetReport (row + raw metrics), input order kept
//! RunTotals        ──► ReportSummary
//! BenchmarkConfig  ──► ReportMeta (system, git, run configuration)
//! ```

use super::execution::RunTotals;
use super::metadata::build_report_meta;
use crate::config::BenchmarkConfig;
use solverbench_core::DatasetSummary;
use solverbench_report::{DatasetReport, Report, ReportSummary};

/// Build a complete Report from dataset summaries
///
/// # Arguments
/// * `summaries` - Summaries in dataset order
/// * `totals` - Counters across every processed dataset
/// * `config` - Run configuration, captured in the metadata
/// * `total_duration_ms` - Total execution time in milliseconds
pub fn build_report(
    summaries: &[DatasetSummary],
    totals: RunTotals,
    config: &BenchmarkConfig,
    total_duration_ms: f64,
) -> Report {
    let datasets = summaries.iter().map(DatasetReport::from).collect();

    let summary = ReportSummary {
        datasets_found: totals.datasets_found,
        datasets_reported: totals.datasets_reported,
        cases_attempted: totals.cases_attempted,
        cases_completed: totals.cases_completed,
        cases_correct: totals.cases_correct,
        failures: totals.failures,
        total_duration_ms,
    };

    Report {
        meta: build_report_meta(config),
        datasets,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use solverbench_core::FailureTally;
    use std::path::PathBuf;

    fn summary(name: &str, correct: usize, total: usize) -> DatasetSummary {
        DatasetSummary {
            dataset_name: name.to_string(),
            correct_count: correct,
            total_count: total,
            time_mean: 500.0,
            time_stddev: 0.0,
            time_median: 500.0,
            effort_mean: 10.0,
            effort_stddev: 0.0,
            effort_median: 10.0,
            throughput: 2000.0,
            time_total_micros: 500 * total as u64,
            effort_total: 10 * total as u64,
            wall_clock_total_micros: 0,
            attempted_count: total,
            failures: FailureTally::default(),
        }
    }

    #[test]
    fn test_build_report_keeps_dataset_order() {
        let config = BenchmarkConfig::new(
            PathBuf::from("data"),
            PathBuf::from("out.csv"),
            vec!["./solver".to_string(), "--fast".to_string()],
        );
        let totals = RunTotals {
            datasets_found: 3,
            datasets_reported: 2,
            cases_attempted: 5,
            cases_completed: 4,
            cases_correct: 3,
            failures: FailureTally {
                timeouts: 1,
                ..Default::default()
            },
        };

        let report = build_report(
            &[summary("data/b.txt", 1, 1), summary("data/a.txt", 2, 3)],
            totals,
            &config,
            42.0,
        );

        let names: Vec<_> = report.rows().into_iter().map(|r| r.dataset).collect();
        assert_eq!(names, vec!["b.txt".to_string(), "a.txt".to_string()]);
        assert_eq!(report.datasets[1].row.correct, "2/3");
        assert_eq!(report.summary.datasets_found, 3);
        assert_eq!(report.summary.failures.timeouts, 1);
        assert_eq!(report.summary.total_duration_ms, 42.0);
        assert_eq!(
            report.meta.config.target_command,
            vec!["./solver".to_string(), "--fast".to_string()]
        );
        assert_eq!(report.meta.config.per_case_timeout_secs, 10.0);
    }
}
