//! Configuration discovery and effective settings resolution.
//!
//! mdissues reads `mdissues.toml|yaml|yml` from the scanned directory or its
//! closest ancestor holding one (stopping at a `.git` directory) and merges
//! it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `patterns`: `["*.md"]`
//! - `output`: `human`
//! - `report.file`: `markdownissues.txt`
//! - `report.combine`: false
//! - `lint.line_length`: 80
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::lint::DEFAULT_PATTERN;
use crate::report::{ReportMode, DEFAULT_REPORT};
use crate::rules::{RuleConfig, DEFAULT_LINE_LENGTH};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_NAMES: [&str; 3] = ["mdissues.toml", "mdissues.yaml", "mdissues.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Report section under `[report]`.
pub struct ReportCfg {
    pub file: Option<String>,
    pub combine: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Lint backend section under `[lint]`.
pub struct LintCfg {
    /// External linter argv; the file path is appended per call.
    pub command: Option<Vec<String>>,
    pub line_length: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `mdissues.toml|yaml`.
pub struct MdIssuesConfig {
    pub patterns: Option<Vec<String>>,
    pub output: Option<String>,
    pub report: Option<ReportCfg>,
    pub lint: Option<LintCfg>,
    /// `[rules] MD013 = false` disables a built-in rule.
    #[serde(default)]
    pub rules: Option<HashMap<String, bool>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the lint command.
pub struct Effective {
    /// Directory whose files are scanned and where the report lands.
    pub root: PathBuf,
    /// Config file that was applied, if any.
    pub config_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub output: String,
    pub report: String,
    pub mode: ReportMode,
    pub command: Option<Vec<String>>,
    pub rules: RuleConfig,
}

/// Walk upward from `start` to the closest directory holding a config file.
///
/// Stops at a `.git` directory; returns `None` when no config is found.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_NAMES {
            let p = cur.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Parse a config file, choosing TOML or YAML by extension.
pub fn load_config(path: &Path) -> Result<MdIssuesConfig> {
    let s = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    let is_toml = path.extension().map(|e| e == "toml").unwrap_or(false);
    let parsed = if is_toml {
        toml::from_str::<MdIssuesConfig>(&s).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str::<MdIssuesConfig>(&s).map_err(|e| e.to_string())
    };
    parsed.map_err(|details| Error::Config {
        path: path.to_path_buf(),
        details,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_patterns: &[String],
    cli_report: Option<&str>,
    cli_output: Option<&str>,
    cli_combine: Option<bool>,
    cli_command: Option<&str>,
    cli_command_args: &[String],
) -> Result<Effective> {
    let start = PathBuf::from(cli_root.unwrap_or("."));
    let root = fs::canonicalize(&start).unwrap_or(start);
    let config_path = find_config(&root);
    let cfg = match config_path.as_deref() {
        Some(p) => {
            log::debug!("loaded config from {}", p.display());
            load_config(p)?
        }
        None => MdIssuesConfig::default(),
    };

    let patterns = if !cli_patterns.is_empty() {
        cli_patterns.to_vec()
    } else {
        cfg.patterns
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()])
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let report = cli_report
        .map(|s| s.to_string())
        .or_else(|| cfg.report.as_ref().and_then(|r| r.file.clone()))
        .unwrap_or_else(|| DEFAULT_REPORT.to_string());

    let combine = cli_combine
        .or_else(|| cfg.report.as_ref().and_then(|r| r.combine))
        .unwrap_or(false);
    let mode = if combine {
        ReportMode::Combined
    } else {
        ReportMode::LastWins
    };

    // `--command` is whitespace-split; `--command-arg` values are appended verbatim.
    let command = cli_command
        .map(|c| {
            let mut argv: Vec<String> = c.split_whitespace().map(String::from).collect();
            argv.extend(cli_command_args.iter().cloned());
            argv
        })
        .or_else(|| cfg.lint.as_ref().and_then(|l| l.command.clone()))
        .filter(|argv| !argv.is_empty());

    let line_length = cfg
        .lint
        .as_ref()
        .and_then(|l| l.line_length)
        .unwrap_or(DEFAULT_LINE_LENGTH);
    let disabled = cfg
        .rules
        .unwrap_or_default()
        .into_iter()
        .filter(|(_, on)| !on)
        .map(|(id, _)| id)
        .collect();

    Ok(Effective {
        root,
        config_path,
        patterns,
        output,
        report,
        mode,
        command,
        rules: RuleConfig {
            line_length,
            disabled,
        },
    })
}
