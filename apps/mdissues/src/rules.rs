//! Built-in Markdown rules.
//!
//! A line-oriented subset of markdownlint's default rule set. Heading and
//! blank-line rules ignore fenced code; whitespace and length rules apply to
//! every line. Rule names and descriptions follow markdownlint so reports
//! read the same as the upstream tool's.

use crate::models::Issue;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// `(id, alias, description)` for every built-in rule.
pub const RULES: &[(&str, &str, &str)] = &[
    ("MD001", "heading-increment", "Heading levels should only increment by one level at a time"),
    ("MD009", "no-trailing-spaces", "Trailing spaces"),
    ("MD010", "no-hard-tabs", "Hard tabs"),
    ("MD012", "no-multiple-blanks", "Multiple consecutive blank lines"),
    ("MD013", "line-length", "Line length"),
    ("MD018", "no-missing-space-atx", "No space after hash on atx style heading"),
    ("MD019", "no-multiple-space-atx", "Multiple spaces after hash on atx style heading"),
    ("MD022", "blanks-around-headings", "Headings should be surrounded by blank lines"),
    ("MD023", "heading-start-left", "Headings must start at the beginning of the line"),
    ("MD025", "single-h1", "Multiple top-level headings in the same document"),
    ("MD031", "blanks-around-fences", "Fenced code blocks should be surrounded by blank lines"),
    ("MD040", "fenced-code-language", "Fenced code blocks should have a language specified"),
    ("MD041", "first-line-h1", "First line in a file should be a top-level heading"),
    ("MD047", "single-trailing-newline", "Files should end with a single newline character"),
];

pub const DEFAULT_LINE_LENGTH: usize = 80;

#[derive(Debug, Clone)]
/// Tunables for the built-in rules.
pub struct RuleConfig {
    pub line_length: usize,
    /// Disabled rules, matched by id (`MD013`) or alias (`line-length`).
    pub disabled: HashSet<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            line_length: DEFAULT_LINE_LENGTH,
            disabled: HashSet::new(),
        }
    }
}

impl RuleConfig {
    fn enabled(&self, id: &str) -> bool {
        let alias = RULES
            .iter()
            .find(|(rid, _, _)| *rid == id)
            .map(|(_, a, _)| *a)
            .unwrap_or("");
        !self
            .disabled
            .iter()
            .any(|d| d.eq_ignore_ascii_case(id) || d.eq_ignore_ascii_case(alias))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Text,
    /// Fence marker line; `true` when it opens a block.
    Fence(bool),
    Code,
}

#[derive(Debug, Clone, Copy)]
struct Atx {
    indent: usize,
    level: usize,
    spaces: usize,
}

fn atx_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([ \t]{0,3})(#{1,6})(?:([ \t]+)|$)").expect("valid regex"))
}

fn missing_space_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[ \t]{0,3}#{1,6}[^#\s!]").expect("valid regex"))
}

/// Parse an ATX heading. Returns `None` for non-headings, including `#text`.
fn parse_atx(line: &str) -> Option<Atx> {
    let caps = atx_re().captures(line)?;
    Some(Atx {
        indent: caps.get(1).map_or(0, |m| m.len()),
        level: caps.get(2).map_or(0, |m| m.len()),
        spaces: caps.get(3).map_or(0, |m| m.len()),
    })
}

/// `#Heading`: hashes directly followed by text.
fn is_missing_space_atx(line: &str) -> bool {
    missing_space_re().is_match(line)
}

fn fence_marker(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim_start();
    if line.len() - trimmed.len() > 3 {
        return None;
    }
    for marker in ["```", "~~~"] {
        if trimmed.starts_with(marker) {
            let ch = marker.as_bytes()[0] as char;
            let run = trimmed.chars().take_while(|c| *c == ch).count();
            return Some((&trimmed[..run], trimmed[run..].trim()));
        }
    }
    None
}

fn classify(lines: &[&str]) -> Vec<LineKind> {
    let mut kinds = Vec::with_capacity(lines.len());
    let mut open: Option<String> = None;
    for line in lines {
        let kind = match (open.as_deref(), fence_marker(line)) {
            (None, Some(_)) => LineKind::Fence(true),
            (Some(o), Some((m, info))) if info.is_empty() && m.starts_with(o) => {
                LineKind::Fence(false)
            }
            (Some(_), _) => LineKind::Code,
            (None, None) if line.trim().is_empty() => LineKind::Blank,
            (None, None) => LineKind::Text,
        };
        match kind {
            LineKind::Fence(true) => open = fence_marker(line).map(|(m, _)| m.to_string()),
            LineKind::Fence(false) => open = None,
            _ => {}
        }
        kinds.push(kind);
    }
    kinds
}

struct Collector<'a> {
    file: &'a str,
    cfg: &'a RuleConfig,
    issues: Vec<Issue>,
}

impl Collector<'_> {
    fn push(&mut self, id: &str, line: usize, detail: Option<String>) {
        if !self.cfg.enabled(id) {
            return;
        }
        let (_, alias, description) = RULES
            .iter()
            .find(|(rid, _, _)| *rid == id)
            .copied()
            .unwrap_or((id, "", ""));
        self.issues.push(Issue {
            file: self.file.to_string(),
            line,
            rule: format!("{}/{}", id, alias),
            description: description.to_string(),
            detail,
        });
    }
}

/// Run every enabled rule over `content`, attributing issues to `file`.
pub fn run_rules(content: &str, file: &str, cfg: &RuleConfig) -> Vec<Issue> {
    let mut out = Collector {
        file,
        cfg,
        issues: Vec::new(),
    };
    if content.is_empty() {
        return out.issues;
    }
    let lines: Vec<&str> = content.lines().collect();
    let kinds = classify(&lines);
    let is_blank = |i: usize| kinds.get(i) == Some(&LineKind::Blank);

    let mut prev_level = 0usize;
    let mut h1_seen = false;
    let mut blank_run = 0usize;
    let mut first_content: Option<usize> = None;

    for (i, line) in lines.iter().enumerate() {
        let lineno = i + 1;
        let kind = kinds[i];

        // Whitespace and length apply to every line.
        let trailing = line.len() - line.trim_end_matches(' ').len();
        if trailing > 0 && !(trailing == 2 && !line.trim().is_empty()) {
            out.push(
                "MD009",
                lineno,
                Some(format!("Expected: 0 or 2; Actual: {}", trailing)),
            );
        }
        if let Some(col) = line.chars().position(|c| c == '\t') {
            out.push("MD010", lineno, Some(format!("Column: {}", col + 1)));
        }
        let width = line.chars().count();
        if width > cfg.line_length && line.chars().skip(cfg.line_length).any(char::is_whitespace)
        {
            out.push(
                "MD013",
                lineno,
                Some(format!("Expected: {}; Actual: {}", cfg.line_length, width)),
            );
        }

        if kind == LineKind::Blank {
            blank_run += 1;
            if blank_run > 1 {
                out.push(
                    "MD012",
                    lineno,
                    Some(format!("Expected: 1; Actual: {}", blank_run)),
                );
            }
            continue;
        }
        blank_run = 0;
        if first_content.is_none() {
            first_content = Some(i);
        }

        match kind {
            LineKind::Fence(opening) => {
                if opening {
                    if i > 0 && !is_blank(i - 1) {
                        out.push("MD031", lineno, None);
                    }
                    if fence_marker(line).map(|(_, info)| info.is_empty()).unwrap_or(false) {
                        out.push("MD040", lineno, None);
                    }
                } else if i + 1 < lines.len() && !is_blank(i + 1) {
                    out.push("MD031", lineno, None);
                }
            }
            LineKind::Text => {
                if let Some(h) = parse_atx(line) {
                    if prev_level > 0 && h.level > prev_level + 1 {
                        out.push(
                            "MD001",
                            lineno,
                            Some(format!("Expected: h{}; Actual: h{}", prev_level + 1, h.level)),
                        );
                    }
                    prev_level = h.level;
                    if h.spaces > 1 {
                        out.push("MD019", lineno, None);
                    }
                    if h.indent > 0 {
                        out.push("MD023", lineno, None);
                    }
                    if h.level == 1 {
                        if h1_seen {
                            out.push("MD025", lineno, None);
                        }
                        h1_seen = true;
                    }
                    if i > 0 && !is_blank(i - 1) {
                        out.push("MD022", lineno, Some("Expected: 1; Actual: 0; Above".into()));
                    }
                    if i + 1 < lines.len() && !is_blank(i + 1) {
                        out.push("MD022", lineno, Some("Expected: 1; Actual: 0; Below".into()));
                    }
                } else if is_missing_space_atx(line) {
                    out.push("MD018", lineno, None);
                }
            }
            _ => {}
        }
    }

    if let Some(i) = first_content {
        let is_h1 = kinds[i] == LineKind::Text
            && parse_atx(lines[i]).map(|h| h.level == 1).unwrap_or(false);
        if !is_h1 {
            out.push("MD041", i + 1, None);
        }
    }

    if !content.ends_with('\n') {
        out.push("MD047", lines.len(), None);
    }

    out.issues
}
