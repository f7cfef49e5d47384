//! Dataset Execution
//!
//! Replays every dataset through a [`CaseRunner`], strictly one case at a
//! time: no two target processes are ever alive together, and cases run in
//! file order.
//!
//! ## Data Flow
//!
//! ```text
//! dataset file
//!      │  read_to_string (unreadable → warn, skip)
//!      ▼
//! parse_dataset ──► [TestCase] (invalid lines dropped)
//!      │
//!      ▼
//! ┌──────────────┐
//! │  CaseRunner  │  one process per case; failures tallied, not fatal
//! └──────┬───────┘
//!        ▼
//! [CaseOutcome] ──► summarize_outcomes ──► Option<DatasetSummary>
//! ```

use super::statistics::summarize_outcomes;
use crate::supervisor::CaseRunner;
use indicatif::{ProgressBar, ProgressStyle};
use solverbench_core::{DatasetSummary, FailureTally, parse_dataset};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Counters across every processed dataset, including ones that produced no
/// summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    /// Dataset files handed to the executor
    pub datasets_found: usize,
    /// Datasets that produced a summary
    pub datasets_reported: usize,
    /// Valid cases that were run
    pub cases_attempted: usize,
    /// Cases that produced an outcome
    pub cases_completed: usize,
    /// Outcomes with the expected label
    pub cases_correct: usize,
    /// Excluded cases by kind
    pub failures: FailureTally,
}

/// Runs datasets sequentially and aggregates their outcomes
pub struct DatasetExecutor {
    runner: CaseRunner,
    totals: RunTotals,
    show_progress: bool,
}

impl DatasetExecutor {
    /// Create an executor; the progress bar is hidden unless `show_progress`
    pub fn new(runner: CaseRunner, show_progress: bool) -> Self {
        Self {
            runner,
            totals: RunTotals::default(),
            show_progress,
        }
    }

    /// Totals accumulated so far
    pub fn totals(&self) -> RunTotals {
        self.totals
    }

    /// Execute all datasets in order, returning the summaries that exist
    pub async fn execute(&mut self, datasets: &[PathBuf]) -> Vec<DatasetSummary> {
        let pb = if self.show_progress {
            let pb = ProgressBar::new(datasets.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut summaries = Vec::with_capacity(datasets.len());
        for path in datasets {
            pb.set_message(display_name(path));
            pb.suspend(|| info!(dataset = %path.display(), "benchmarking"));
            if let Some(summary) = self.process(path).await {
                pb.suspend(|| {
                    info!(
                        dataset = %summary.dataset_name,
                        correct = summary.correct_count,
                        total = summary.total_count,
                        "dataset complete"
                    )
                });
                summaries.push(summary);
            }
            pb.inc(1);
        }

        pb.finish_with_message("Complete");
        summaries
    }

    /// Run every valid case of one dataset and summarize it.
    ///
    /// Returns `None` when the file cannot be read or no case produced an
    /// outcome.
    pub async fn process(&mut self, path: &Path) -> Option<DatasetSummary> {
        self.totals.datasets_found += 1;
        let dataset_name = path.display().to_string();

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(dataset = %dataset_name, error = %e, "skipping unreadable dataset");
                return None;
            }
        };

        let cases = parse_dataset(&content);
        let mut outcomes = Vec::with_capacity(cases.len());
        let mut failures = FailureTally::default();

        for (index, case) in cases.iter().enumerate() {
            match self.runner.run(case).await {
                Ok(outcome) => outcomes.push(outcome),
                Err(failure) => {
                    debug!(
                        dataset = %dataset_name,
                        case = index,
                        kind = failure.kind(),
                        error = %failure,
                        "case excluded"
                    );
                    failures.record(&failure);
                }
            }
        }

        self.totals.cases_attempted += cases.len();
        self.totals.cases_completed += outcomes.len();
        self.totals.cases_correct += outcomes.iter().filter(|o| o.is_correct).count();
        self.totals.failures.merge(&failures);

        let summary = summarize_outcomes(&dataset_name, &outcomes, cases.len(), failures);
        match &summary {
            Some(_) => self.totals.datasets_reported += 1,
            None => debug!(dataset = %dataset_name, "no outcomes, dataset omitted"),
        }
        summary
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
