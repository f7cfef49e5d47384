//! Dataset Source Parsing
//!
//! A dataset is plain text with one test case per line:
//!
//! ```text
//! <input> <expected_label> [ignored extra tokens]
//! ```
//!
//! Blank lines and lines with fewer than two tokens are skipped. Order is kept.

use crate::MIN_DATASET_TOKENS;
use crate::case::TestCase;

/// Parse a single dataset line, returning `None` for blank or short lines
pub fn parse_line(line: &str) -> Option<TestCase> {
    let mut tokens = line.split_whitespace();
    let input = tokens.next()?;
    let expected_label = tokens.next()?;
    Some(TestCase::new(input, expected_label))
}

/// Parse a whole dataset source into test cases, preserving line order
pub fn parse_dataset(contents: &str) -> Vec<TestCase> {
    contents
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let case = parse_line(line);
            if case.is_none() {
                tracing::trace!(
                    line = index + 1,
                    "skipping dataset line with fewer than {} tokens",
                    MIN_DATASET_TOKENS
                );
            }
            case
        })
        .collect()
}
