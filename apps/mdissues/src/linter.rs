//! Lint backends.
//!
//! `BuiltinLinter` applies the rules in [`crate::rules`]. `CommandLinter`
//! shells out to an installed tool (for example the `markdownlint` CLI) and
//! treats whatever it prints as the lint result.

use crate::error::{Error, Result};
use crate::models::Issue;
use crate::rules::{run_rules, RuleConfig};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Lints a single Markdown file.
///
/// `display` is the name issues are attributed to; `path` is what gets read.
pub trait MarkdownLinter: Sync {
    fn lint(&self, path: &Path, display: &str) -> Result<Vec<Issue>>;
}

#[derive(Debug, Default, Clone)]
pub struct BuiltinLinter {
    pub rules: RuleConfig,
}

impl BuiltinLinter {
    pub fn new(rules: RuleConfig) -> Self {
        BuiltinLinter { rules }
    }
}

impl MarkdownLinter for BuiltinLinter {
    fn lint(&self, path: &Path, display: &str) -> Result<Vec<Issue>> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(run_rules(&content, display, &self.rules))
    }
}

#[derive(Debug, Clone)]
/// Runs `program args... <path>` and reports each output line as an
/// unlocated issue, so the report carries the tool's text verbatim.
pub struct CommandLinter {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLinter {
    /// Build from an argv-style list; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(CommandLinter {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl MarkdownLinter for CommandLinter {
    fn lint(&self, path: &Path, display: &str) -> Result<Vec<Issue>> {
        let out = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                path: path.to_path_buf(),
                source,
            })?;
        // markdownlint-cli exits 1 when it finds issues and 2+ when it cannot lint.
        if !matches!(out.status.code(), Some(0) | Some(1)) {
            return Err(Error::Lint {
                program: self.program.clone(),
                path: path.to_path_buf(),
                status: out.status.to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            });
        }
        let stdout = String::from_utf8_lossy(&out.stdout);
        let stderr = String::from_utf8_lossy(&out.stderr);
        Ok(stdout
            .lines()
            .chain(stderr.lines())
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(|l| Issue {
                file: display.to_string(),
                line: 0,
                rule: "external".into(),
                description: l.to_string(),
                detail: None,
            })
            .collect())
    }
}
