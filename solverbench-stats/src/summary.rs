//! Summary Statistics
//!
//! Mean and standard deviation are taken over ALL samples. The standard
//! deviation uses the n - 1 denominator and is defined as 0 for fewer than two
//! samples.

use crate::MICROS_PER_SEC;
use serde::{Deserialize, Serialize};

/// Summary statistics over one series of samples
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Median
    pub median: f64,
    /// Sample standard deviation (n - 1), 0 below two samples
    pub std_dev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Sum of all samples
    pub sum: f64,
    /// Number of samples
    pub sample_count: usize,
}

/// Compute summary statistics for a series of samples
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let n = samples.len();
    let sum: f64 = samples.iter().sum();
    let mean = sum / n as f64;

    let std_dev = if n < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    };

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    SummaryStatistics {
        mean,
        median: compute_median(samples),
        std_dev,
        min,
        max,
        sum,
        sample_count: n,
    }
}

/// Median with the two middle samples averaged for even counts
pub fn compute_median(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Events per second given a total duration in microseconds.
///
/// Returns 0 when the total duration is 0.
pub fn rate_per_second(count: usize, total_micros: f64) -> f64 {
    let total_secs = total_micros / MICROS_PER_SEC;
    if total_secs > 0.0 {
        count as f64 / total_secs
    } else {
        0.0
    }
}
