//! Dataset Planner
//!
//! Builds the execution plan by listing the dataset directory.
//!
//! - Regular files only (sub-directories are ignored)
//! - Optional regex filter on the file name
//! - Sorted by file name for deterministic, reproducible ordering

use crate::error::HarnessError;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Execution plan for one run
#[derive(Debug, Default)]
pub struct ExecutionPlan {
    /// Ordered dataset files to process
    pub datasets: Vec<PathBuf>,
    /// Files left out by the filter
    pub filtered_out: usize,
}

/// List the dataset directory and build the plan
pub fn discover_datasets(dir: &Path, filter: Option<&Regex>) -> Result<ExecutionPlan, HarnessError> {
    let to_error = |source| HarnessError::DatasetDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(to_error)? {
        let path = entry.map_err(to_error)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(build_plan(files, filter))
}

/// Filter and order candidate dataset files
pub fn build_plan(files: impl IntoIterator<Item = PathBuf>, filter: Option<&Regex>) -> ExecutionPlan {
    let mut filtered_out = 0;
    let mut datasets: Vec<PathBuf> = files
        .into_iter()
        .filter(|path| {
            let keep = match filter {
                Some(re) => re.is_match(&file_name(path)),
                None => true,
            };
            if !keep {
                filtered_out += 1;
            }
            keep
        })
        .collect();

    datasets.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    ExecutionPlan {
        datasets,
        filtered_out,
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(plan: &ExecutionPlan) -> Vec<String> {
        plan.datasets.iter().map(|p| file_name(p)).collect()
    }

    #[test]
    fn test_sorted_by_name() {
        let plan = build_plan(
            ["d/b.txt", "d/a.txt", "d/C.txt", "d/a10.txt", "d/a2.txt"].map(PathBuf::from),
            None,
        );
        // Byte-wise lexicographic: uppercase first, no natural sort
        assert_eq!(names(&plan), ["C.txt", "a.txt", "a10.txt", "a2.txt", "b.txt"]);
        assert_eq!(plan.filtered_out, 0);
    }

    #[test]
    fn test_filter_on_file_name() {
        let re = Regex::new("^endgame").unwrap();
        let plan = build_plan(
            ["endgame/x.txt", "d/endgame_1.txt", "d/opening.txt"].map(PathBuf::from),
            Some(&re),
        );
        assert_eq!(names(&plan), ["endgame_1.txt"]);
        assert_eq!(plan.filtered_out, 2);
    }

    #[test]
    fn test_discover_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.txt"), "x 1\n").unwrap();
        std::fs::write(dir.path().join("a.txt"), "x 1\n").unwrap();
        std::fs::create_dir(dir.path().join("aa_subdir")).unwrap();

        let plan = discover_datasets(dir.path(), None).unwrap();
        assert_eq!(names(&plan), ["a.txt", "b.txt"]);
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = discover_datasets(&missing, None).unwrap_err();
        assert!(matches!(err, HarnessError::DatasetDirectory { .. }));
    }
}
