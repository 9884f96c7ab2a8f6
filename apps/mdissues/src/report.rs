//! Report file writer.
//!
//! Runs after every file has been linted and performs at most one write, so
//! concurrent lint steps never touch the report file.

use crate::error::{Error, Result};
use crate::models::LintResult;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORT: &str = "markdownissues.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportMode {
    /// Report holds the text of the last file with issues, in path order.
    #[default]
    LastWins,
    /// Report holds every file's text, in path order.
    Combined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStatus {
    /// Nothing to report; any existing report was left alone.
    Skipped,
    Written { path: PathBuf, files: usize },
}

/// Compose report text from outcomes; `None` when no file has issues.
pub fn compose_report(result: &LintResult, mode: ReportMode) -> Option<(String, usize)> {
    let texts: Vec<String> = result
        .outcomes
        .iter()
        .map(|o| o.text())
        .filter(|t| !t.is_empty())
        .collect();
    match mode {
        ReportMode::LastWins => texts.last().map(|t| (t.clone(), 1)),
        ReportMode::Combined if texts.is_empty() => None,
        ReportMode::Combined => Some((texts.join("\n"), texts.len())),
    }
}

/// Write the report under `root`, overwriting prior contents.
pub fn write_report(
    root: &Path,
    report_name: &str,
    result: &LintResult,
    mode: ReportMode,
) -> Result<ReportStatus> {
    let Some((text, files)) = compose_report(result, mode) else {
        log::info!("no issues found; {} not written", report_name);
        return Ok(ReportStatus::Skipped);
    };
    let path = root.join(report_name);
    fs::write(&path, text).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} ({} file(s) with issues)", path.display(), files);
    Ok(ReportStatus::Written { path, files })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileOutcome, Issue};
    use tempfile::tempdir;

    fn outcome(file: &str, lines: &[usize]) -> FileOutcome {
        FileOutcome {
            file: file.into(),
            issues: lines
                .iter()
                .map(|l| Issue {
                    file: file.into(),
                    line: *l,
                    rule: "MD010/no-hard-tabs".into(),
                    description: "Hard tabs".into(),
                    detail: Some("Column: 1".into()),
                })
                .collect(),
            error: None,
        }
    }

    #[test]
    fn test_clean_run_leaves_existing_report_alone() {
        let dir = tempdir().unwrap();
        let p = dir.path().join(DEFAULT_REPORT);
        fs::write(&p, "old").unwrap();
        let res = LintResult::from_outcomes(vec![outcome("a.md", &[])]);
        let status = write_report(dir.path(), DEFAULT_REPORT, &res, ReportMode::LastWins).unwrap();
        assert_eq!(status, ReportStatus::Skipped);
        assert_eq!(fs::read_to_string(&p).unwrap(), "old");
    }

    #[test]
    fn test_single_violation_written_verbatim() {
        let dir = tempdir().unwrap();
        let res = LintResult::from_outcomes(vec![outcome("a.md", &[4])]);
        write_report(dir.path(), DEFAULT_REPORT, &res, ReportMode::LastWins).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join(DEFAULT_REPORT)).unwrap(),
            "a.md: 4: MD010/no-hard-tabs Hard tabs [Column: 1]"
        );
    }

    #[test]
    fn test_last_wins_overwrites_with_one_file() {
        let dir = tempdir().unwrap();
        let p = dir.path().join(DEFAULT_REPORT);
        fs::write(&p, "a much longer stale report that must disappear entirely").unwrap();
        let res = LintResult::from_outcomes(vec![
            outcome("a.md", &[1]),
            outcome("b.md", &[]),
            outcome("c.md", &[2]),
        ]);
        let status = write_report(dir.path(), DEFAULT_REPORT, &res, ReportMode::LastWins).unwrap();
        assert_eq!(status, ReportStatus::Written { path: p.clone(), files: 1 });
        let text = fs::read_to_string(&p).unwrap();
        assert_eq!(text, "c.md: 2: MD010/no-hard-tabs Hard tabs [Column: 1]");
    }

    #[test]
    fn test_combined_keeps_every_file() {
        let res = LintResult::from_outcomes(vec![outcome("a.md", &[1]), outcome("c.md", &[2])]);
        let (text, files) = compose_report(&res, ReportMode::Combined).unwrap();
        assert_eq!(files, 2);
        assert!(text.starts_with("a.md: 1:"));
        assert!(text.contains("\nc.md: 2:"));
    }

    #[test]
    fn test_write_failure_surfaces() {
        let dir = tempdir().unwrap();
        let res = LintResult::from_outcomes(vec![outcome("a.md", &[1])]);
        let err = write_report(&dir.path().join("missing-dir"), DEFAULT_REPORT, &res, ReportMode::LastWins)
            .unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
