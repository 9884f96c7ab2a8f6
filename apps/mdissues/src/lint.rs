//! Lint runner: discover Markdown files, lint each one, gather outcomes.
//!
//! Files are linted on the rayon pool and may finish in any order; outcomes
//! are returned in discovery order. A failing file is recorded on its
//! outcome and the remaining files still run.

use crate::error::{Error, Result};
use crate::linter::MarkdownLinter;
use crate::models::{FileOutcome, LintResult};
use glob::{glob, Pattern};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub const DEFAULT_PATTERN: &str = "*.md";

/// Expand `patterns` relative to `root` into a sorted, de-duplicated file list.
///
/// Only paths are matched; contents are not read. Directories are skipped.
pub fn discover(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut targets: Vec<PathBuf> = Vec::new();
    let escaped_root = PathBuf::from(Pattern::escape(&root.to_string_lossy()));
    for pat in patterns {
        let abs_glob = escaped_root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| Error::Pattern {
            pattern: pat.clone(),
            details: e.to_string(),
        })?;
        for entry in entries {
            match entry {
                Ok(p) if p.is_file() => targets.push(p),
                Ok(_) => {}
                Err(e) => log::debug!("skipping unreadable glob entry: {}", e),
            }
        }
    }
    targets.sort();
    targets.dedup();
    Ok(targets)
}

/// Name a file the way reports show it: relative to `root` when possible.
pub fn display_name(root: &Path, path: &Path) -> String {
    pathdiff::diff_paths(path, root)
        .unwrap_or_else(|| path.to_path_buf())
        .to_string_lossy()
        .to_string()
}

/// Lint one file, capturing a lint failure instead of propagating it.
pub fn lint_file(linter: &dyn MarkdownLinter, root: &Path, path: &Path) -> FileOutcome {
    let file = display_name(root, path);
    match linter.lint(path, &file) {
        Ok(issues) => {
            log::debug!("{}: {} issue(s)", file, issues.len());
            FileOutcome {
                file,
                issues,
                error: None,
            }
        }
        Err(e) => {
            log::warn!("{}: lint failed: {}", file, e);
            FileOutcome {
                file,
                issues: Vec::new(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Discover files under `root` and lint them in parallel.
///
/// Only a bad glob pattern fails the whole run.
pub fn run_lint(root: &Path, patterns: &[String], linter: &dyn MarkdownLinter) -> Result<LintResult> {
    let targets = discover(root, patterns)?;
    log::debug!("discovered {} file(s) under {}", targets.len(), root.display());
    let outcomes: Vec<FileOutcome> = targets
        .par_iter()
        .map(|path| lint_file(linter, root, path))
        .collect();
    Ok(LintResult::from_outcomes(outcomes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::BuiltinLinter;
    use crate::models::Issue;
    use std::fs;
    use tempfile::tempdir;

    fn default_patterns() -> Vec<String> {
        vec![DEFAULT_PATTERN.to_string()]
    }

    struct FailOn(&'static str);

    impl MarkdownLinter for FailOn {
        fn lint(&self, path: &Path, display: &str) -> Result<Vec<Issue>> {
            if display == self.0 {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad bytes"),
                });
            }
            Ok(vec![Issue {
                file: display.to_string(),
                line: 1,
                rule: "MD041/first-line-h1".into(),
                description: "First line in a file should be a top-level heading".into(),
                detail: None,
            }])
        }
    }

    #[test]
    fn test_discover_is_non_recursive_and_sorted() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("b.md"), "# B\n").unwrap();
        fs::write(root.join("a.md"), "# A\n").unwrap();
        fs::write(root.join("notes.txt"), "x").unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/c.md"), "# C\n").unwrap();
        fs::create_dir_all(root.join("dir.md")).unwrap();

        let found = discover(root, &default_patterns()).unwrap();
        let names: Vec<String> = found.iter().map(|p| display_name(root, p)).collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_discover_dedups_overlapping_patterns() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "# A\n").unwrap();
        let pats = vec!["*.md".to_string(), "a.*".to_string()];
        assert_eq!(discover(dir.path(), &pats).unwrap().len(), 1);
    }

    #[test]
    fn test_bad_pattern_is_an_error() {
        let dir = tempdir().unwrap();
        let err = discover(dir.path(), &["[".to_string()]).unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }

    #[test]
    fn test_run_lint_counts_and_order() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("clean.md"), "# Clean\n").unwrap();
        fs::write(root.join("dirty.md"), "# Dirty\n\ntext\t\n").unwrap();
        let res = run_lint(root, &default_patterns(), &BuiltinLinter::default()).unwrap();
        assert_eq!(res.summary.files, 2);
        assert_eq!(res.summary.clean, 1);
        assert_eq!(res.summary.with_issues, 1);
        assert_eq!(res.outcomes[0].file, "clean.md");
        assert_eq!(res.outcomes[1].file, "dirty.md");
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        for n in ["a.md", "b.md", "c.md"] {
            fs::write(root.join(n), "text\n").unwrap();
        }
        let res = run_lint(root, &default_patterns(), &FailOn("b.md")).unwrap();
        assert_eq!(res.summary.failed, 1);
        assert_eq!(res.summary.with_issues, 2);
        assert!(res.outcomes[1].error.as_deref().unwrap().contains("bad bytes"));
    }

    #[test]
    fn test_no_files_is_empty_result() {
        let dir = tempdir().unwrap();
        let res = run_lint(dir.path(), &default_patterns(), &BuiltinLinter::default()).unwrap();
        assert!(res.outcomes.is_empty());
        assert_eq!(res.summary.files, 0);
    }
}
