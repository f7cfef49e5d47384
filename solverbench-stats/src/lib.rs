#![warn(missing_docs)]
//! SolverBench Statistical Engine
//!
//! Small, allocation-light summaries over per-case samples:
//! - Arithmetic mean and Bessel-corrected sample standard deviation
//! - Median, min and max
//! - Throughput (events per second) from a microsecond total
//!
//! Unlike a micro-benchmark harness there is no outlier rejection here: every
//! completed case counts, because each one is a distinct position.

mod summary;

pub use summary::{SummaryStatistics, compute_median, compute_summary, rate_per_second};

/// Microseconds per second
pub const MICROS_PER_SEC: f64 = 1_000_000.0;
