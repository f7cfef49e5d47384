//! Output Formatting
//!
//! Terminal-friendly rendering of a report: one aligned row per dataset in
//! report order, followed by run totals and any excluded cases.

use solverbench_report::{Report, format_rate};

const HEADERS: [&str; 5] = ["Dataset", "Correct", "Time", "Effort", "Pos/sec"];

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("SolverBench Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    let rows: Vec<[String; 5]> = report
        .rows()
        .into_iter()
        .map(|r| {
            [
                r.dataset,
                r.correct,
                r.time_mean_std,
                r.explore_nodes_mean_std,
                format_rate(r.pos_per_sec),
            ]
        })
        .collect();

    if rows.is_empty() {
        output.push_str("  No datasets produced results.\n");
    } else {
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        push_row(&mut output, &HEADERS.map(String::from), &widths);
        let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        output.push_str(&format!("  {}\n", "-".repeat(rule_len)));
        for row in &rows {
            push_row(&mut output, row, &widths);
        }
    }

    let summary = &report.summary;
    output.push('\n');
    output.push_str("Summary\n");
    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "  Datasets: {} reported, {} found\n",
        summary.datasets_reported, summary.datasets_found
    ));
    output.push_str(&format!(
        "  Cases: {} correct, {} completed, {} attempted\n",
        summary.cases_correct, summary.cases_completed, summary.cases_attempted
    ));

    let failures = &summary.failures;
    if failures.total() > 0 {
        output.push_str(&format!(
            "  Excluded: {} timed out, {} malformed, {} failed to launch, {} i/o errors\n",
            failures.timeouts, failures.malformed, failures.launch_failures, failures.io_failures
        ));
    }

    output.push_str(&format!(
        "  Total time: {:.2} ms\n",
        summary.total_duration_ms
    ));

    output
}

/// Left-align text columns, right-align the numeric rate
fn push_row(output: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    output.push_str("  ");
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let pad = width.saturating_sub(cell.chars().count());
        if i == cells.len() - 1 {
            output.push_str(&" ".repeat(pad));
            output.push_str(cell);
        } else {
            output.push_str(cell);
            output.push_str(&" ".repeat(pad + 2));
        }
    }
    output.push('\n');
}
