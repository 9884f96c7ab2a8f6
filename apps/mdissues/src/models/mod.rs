//! Shared data models for lint output and search topology fixtures.

pub mod topology;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// A single lint issue located by file and line.
pub struct Issue {
    pub file: String,
    pub line: usize,
    pub rule: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Issue {
    /// Render as `file: line: rule description [detail]`. Unlocated issues
    /// (line 0, from external tools) render as their description alone.
    pub fn render(&self) -> String {
        if self.line == 0 {
            return self.description.clone();
        }
        let mut out = format!(
            "{}: {}: {} {}",
            self.file, self.line, self.rule, self.description
        );
        if let Some(d) = &self.detail {
            out.push_str(&format!(" [{}]", d));
        }
        out
    }
}

#[derive(Serialize, Debug, Clone)]
/// Result of linting one file. `error` is set when the lint call itself failed.
pub struct FileOutcome {
    pub file: String,
    pub issues: Vec<Issue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileOutcome {
    /// Textual lint result; empty means no issues.
    pub fn text(&self) -> String {
        render_result(&self.issues)
    }

    pub fn is_clean(&self) -> bool {
        self.error.is_none() && self.issues.is_empty()
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
/// Aggregated summary used by printers and exit handling.
pub struct Summary {
    pub files: usize,
    pub clean: usize,
    pub with_issues: usize,
    pub issues: usize,
    pub failed: usize,
}

#[derive(Serialize, Debug, Clone)]
/// Lint results container, outcomes in discovery order.
pub struct LintResult {
    pub outcomes: Vec<FileOutcome>,
    pub summary: Summary,
}

impl LintResult {
    pub fn from_outcomes(outcomes: Vec<FileOutcome>) -> Self {
        let mut summary = Summary {
            files: outcomes.len(),
            ..Summary::default()
        };
        for o in &outcomes {
            if o.error.is_some() {
                summary.failed += 1;
            }
            if !o.issues.is_empty() {
                summary.with_issues += 1;
                summary.issues += o.issues.len();
            }
            if o.is_clean() {
                summary.clean += 1;
            }
        }
        LintResult { outcomes, summary }
    }
}

/// Join rendered issues with newlines, ordered by line then rule.
pub fn render_result(issues: &[Issue]) -> String {
    let mut sorted: Vec<&Issue> = issues.iter().collect();
    sorted.sort_by(|a, b| a.line.cmp(&b.line).then(a.rule.cmp(&b.rule)));
    sorted
        .iter()
        .map(|i| i.render())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(line: usize, rule: &str, detail: Option<&str>) -> Issue {
        Issue {
            file: "README.md".into(),
            line,
            rule: rule.into(),
            description: "Something".into(),
            detail: detail.map(String::from),
        }
    }

    #[test]
    fn test_render_with_and_without_detail() {
        assert_eq!(
            issue(3, "MD009/no-trailing-spaces", Some("Expected: 0; Actual: 1")).render(),
            "README.md: 3: MD009/no-trailing-spaces Something [Expected: 0; Actual: 1]"
        );
        assert_eq!(
            issue(1, "MD041/first-line-h1", None).render(),
            "README.md: 1: MD041/first-line-h1 Something"
        );
    }

    #[test]
    fn test_render_result_orders_by_line_then_rule() {
        let text = render_result(&[
            issue(5, "MD013/line-length", None),
            issue(2, "MD010/no-hard-tabs", None),
            issue(2, "MD009/no-trailing-spaces", None),
        ]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains(": 2: MD009"));
        assert!(lines[1].contains(": 2: MD010"));
        assert!(lines[2].contains(": 5: MD013"));
        assert_eq!(render_result(&[]), "");
    }

    #[test]
    fn test_summary_counts() {
        let res = LintResult::from_outcomes(vec![
            FileOutcome {
                file: "a.md".into(),
                issues: vec![],
                error: None,
            },
            FileOutcome {
                file: "b.md".into(),
                issues: vec![issue(1, "MD041/first-line-h1", None), issue(2, "MD012/no-multiple-blanks", None)],
                error: None,
            },
            FileOutcome {
                file: "c.md".into(),
                issues: vec![],
                error: Some("failed to read c.md".into()),
            },
        ]);
        assert_eq!(
            res.summary,
            Summary {
                files: 3,
                clean: 1,
                with_issues: 1,
                issues: 2,
                failed: 1,
            }
        );
    }
}
