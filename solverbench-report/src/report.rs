//! Report Data Structures

use crate::format::{format_effort_mean_std, format_time_mean_std, round2};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solverbench_core::{DatasetSummary, FailureTally};
use std::path::Path;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// One entry per reported dataset, in file-name order
    pub datasets: Vec<DatasetReport>,
    /// Run-level totals
    pub summary: ReportSummary,
}

impl Report {
    /// Rows in report order, as written to the CSV artifact
    pub fn rows(&self) -> Vec<DatasetRow> {
        self.datasets.iter().map(|d| d.row.clone()).collect()
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// solverbench version
    pub version: String,
    /// When the report was generated
    pub timestamp: DateTime<Utc>,
    /// Commit of the working directory, if it is a git checkout
    pub git_commit: Option<String>,
    /// Host description
    pub system: SystemInfo,
    /// Resolved run configuration
    pub config: ReportConfig,
}

/// Run configuration captured in report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Directory the datasets were read from
    pub dataset_directory: String,
    /// Target program and its arguments
    pub target_command: Vec<String>,
    /// Per-case timeout in seconds
    pub per_case_timeout_secs: f64,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name
    pub cpu: String,
    /// Available parallelism
    pub cpu_cores: u32,
    /// Total memory in GB
    pub memory_gb: f64,
}

/// Fixed-field record for one dataset; the CSV row shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// Base name of the dataset file
    pub dataset: String,
    /// `correct/total`
    pub correct: String,
    /// Solver time as `mean ± stddev`, unit-scaled
    pub time_mean_std: String,
    /// Effort metric as `mean ± stddev`
    pub explore_nodes_mean_std: String,
    /// Throughput rounded to two decimals
    pub pos_per_sec: f64,
}

/// Dataset entry in the JSON report: the formatted row plus raw metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetReport {
    #[serde(flatten)]
    /// Formatted fields, flattened into the entry
    pub row: DatasetRow,
    /// Unformatted metrics
    pub metrics: DatasetMetrics,
}

impl From<&DatasetSummary> for DatasetReport {
    fn from(summary: &DatasetSummary) -> Self {
        Self {
            row: assemble_row(summary),
            metrics: DatasetMetrics::from(summary),
        }
    }
}

/// Unformatted dataset metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetrics {
    /// Dataset path as processed
    pub source: String,
    /// Valid cases that were run
    pub attempted: usize,
    /// Cases with an outcome
    pub completed: usize,
    /// Outcomes with the expected label
    pub correct: usize,
    /// `correct / completed`
    pub accuracy: f64,
    /// Mean solver time (µs)
    pub time_mean_us: f64,
    /// Sample stddev of solver time (µs)
    pub time_std_dev_us: f64,
    /// Median solver time (µs)
    pub time_median_us: f64,
    /// Total solver time (µs), saturating
    pub time_total_us: u64,
    /// Mean effort
    pub effort_mean: f64,
    /// Sample stddev of effort
    pub effort_std_dev: f64,
    /// Median effort
    pub effort_median: f64,
    /// Total effort, saturating
    pub effort_total: u64,
    /// Completed cases per second of solver time
    pub throughput: f64,
    /// Harness-measured wall clock (µs)
    pub wall_clock_total_us: u64,
    /// Excluded cases by kind
    pub failures: FailureTally,
}

impl From<&DatasetSummary> for DatasetMetrics {
    fn from(summary: &DatasetSummary) -> Self {
        Self {
            source: summary.dataset_name.clone(),
            attempted: summary.attempted_count,
            completed: summary.total_count,
            correct: summary.correct_count,
            accuracy: summary.accuracy(),
            time_mean_us: summary.time_mean,
            time_std_dev_us: summary.time_stddev,
            time_median_us: summary.time_median,
            time_total_us: summary.time_total_micros,
            effort_mean: summary.effort_mean,
            effort_std_dev: summary.effort_stddev,
            effort_median: summary.effort_median,
            effort_total: summary.effort_total,
            throughput: summary.throughput,
            wall_clock_total_us: summary.wall_clock_total_micros,
            failures: summary.failures,
        }
    }
}

/// Run-level totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Dataset files processed
    pub datasets_found: usize,
    /// Datasets with at least one outcome
    pub datasets_reported: usize,
    /// Valid cases run
    pub cases_attempted: usize,
    /// Cases with an outcome
    pub cases_completed: usize,
    /// Outcomes with the expected label
    pub cases_correct: usize,
    /// Excluded cases by kind
    pub failures: FailureTally,
    /// Wall time of the whole run (ms)
    pub total_duration_ms: f64,
}

/// Base name of a dataset source, falling back to the name as given
pub fn dataset_display_name(dataset_name: &str) -> String {
    Path::new(dataset_name)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dataset_name.to_string())
}

/// Format a dataset summary into its fixed-field record.
///
/// Pure: reads the summary, allocates the row, nothing else.
pub fn assemble_row(summary: &DatasetSummary) -> DatasetRow {
    DatasetRow {
        dataset: dataset_display_name(&summary.dataset_name),
        correct: format!("{}/{}", summary.correct_count, summary.total_count),
        time_mean_std: format_time_mean_std(summary.time_mean, summary.time_stddev),
        explore_nodes_mean_std: format_effort_mean_std(summary.effort_mean, summary.effort_stddev),
        pos_per_sec: round2(summary.throughput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary() -> DatasetSummary {
        DatasetSummary {
            dataset_name: "/data/sets/endgame_easy.txt".to_string(),
            correct_count: 2,
            total_count: 2,
            time_mean: 1250.0,
            time_stddev: 1125000.0f64.sqrt(),
            time_median: 1250.0,
            effort_mean: 75.0,
            effort_stddev: 1250.0f64.sqrt(),
            effort_median: 75.0,
            throughput: 800.0,
            time_total_micros: 2500,
            effort_total: 150,
            wall_clock_total_micros: 9_000,
            attempted_count: 3,
            failures: FailureTally {
                timeouts: 1,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_assemble_row() {
        let row = assemble_row(&summary());

        assert_eq!(
            row,
            DatasetRow {
                dataset: "endgame_easy.txt".to_string(),
                correct: "2/2".to_string(),
                time_mean_std: "1.25ms ± 1.06ms".to_string(),
                explore_nodes_mean_std: "75.00 ± 35.36".to_string(),
                pos_per_sec: 800.0,
            }
        );
    }

    #[test]
    fn test_assemble_row_does_not_touch_summary() {
        let original = summary();
        let copy = original.clone();
        let _ = assemble_row(&original);
        assert_eq!(original, copy);
    }

    #[test]
    fn test_throughput_rounded() {
        let mut s = summary();
        s.throughput = 333.33333;
        assert_eq!(assemble_row(&s).pos_per_sec, 333.33);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(dataset_display_name("a/b/c.txt"), "c.txt");
        assert_eq!(dataset_display_name("plain"), "plain");
    }

    #[test]
    fn test_dataset_report_flattens_row() {
        let report = DatasetReport::from(&summary());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["dataset"], "endgame_easy.txt");
        assert_eq!(json["correct"], "2/2");
        assert_eq!(json["metrics"]["attempted"], 3);
        assert_eq!(json["metrics"]["failures"]["timeouts"], 1);
    }
}
