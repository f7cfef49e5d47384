//! Statistics Computation
//!
//! Derives a `DatasetSummary` from the outcomes of one dataset. Time and
//! effort are summarized independently; throughput is completed cases per
//! second of solver-reported time.

use solverbench_core::{CaseOutcome, DatasetSummary, FailureTally};
use solverbench_stats::{compute_summary, rate_per_second};

/// Summarize the outcomes of one dataset.
///
/// Returns `None` when there are no outcomes, so an all-failed dataset never
/// appears with undefined statistics.
///
/// # Arguments
/// * `dataset_name` - Source the outcomes came from
/// * `outcomes` - Completed cases, in execution order
/// * `attempted` - Number of valid cases that were run
/// * `failures` - Why the remaining cases were excluded
pub fn summarize_outcomes(
    dataset_name: &str,
    outcomes: &[CaseOutcome],
    attempted: usize,
    failures: FailureTally,
) -> Option<DatasetSummary> {
    if outcomes.is_empty() {
        return None;
    }

    let times: Vec<f64> = outcomes
        .iter()
        .map(|o| o.elapsed_microseconds as f64)
        .collect();
    let efforts: Vec<f64> = outcomes.iter().map(|o| o.effort_metric as f64).collect();

    let time_stats = compute_summary(&times);
    let effort_stats = compute_summary(&efforts);

    // Solver-reported values can be as large as u64::MAX; totals saturate.
    let time_total_micros = saturating_total(outcomes.iter().map(|o| o.elapsed_microseconds));
    let effort_total = saturating_total(outcomes.iter().map(|o| o.effort_metric));
    let wall_clock_total_micros = saturating_total(outcomes.iter().map(|o| o.wall_clock_micros));

    Some(DatasetSummary {
        dataset_name: dataset_name.to_string(),
        correct_count: outcomes.iter().filter(|o| o.is_correct).count(),
        total_count: outcomes.len(),
        time_mean: time_stats.mean,
        time_stddev: time_stats.std_dev,
        time_median: time_stats.median,
        effort_mean: effort_stats.mean,
        effort_stddev: effort_stats.std_dev,
        effort_median: effort_stats.median,
        throughput: rate_per_second(outcomes.len(), time_stats.sum),
        time_total_micros,
        effort_total,
        wall_clock_total_micros,
        attempted_count: attempted,
        failures,
    })
}

fn saturating_total(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0u64, u64::saturating_add)
}
