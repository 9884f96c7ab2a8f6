//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mdissues",
    version,
    about = "Lint Markdown files and write issues to markdownissues.txt",
    long_about = "mdissues lints every *.md file in the working directory and writes any issues to markdownissues.txt.\n\nRunning without a subcommand is the same as `mdissues lint`.\nConfiguration precedence: CLI > mdissues.toml > defaults.",
    after_help = "Examples:\n  mdissues\n  mdissues lint --pattern 'docs/*.md' --combine\n  mdissues lint --command 'markdownlint --config .markdownlint.json'\n  mdissues lint --command markdownlint --command-arg --config --command-arg 'my rules.json'\n  mdissues lint --output json"
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[arg(short, long, global = true, action = clap::ArgAction::SetTrue, help = "Verbose diagnostics on stderr")]
    pub verbose: bool,
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current mdissues version.")]
    Version,
    /// Lint Markdown files and write the issue report
    #[command(
        about = "Lint Markdown files",
        long_about = "Lint files matched by the configured patterns and write any issues to the report file. The report is left untouched when every file is clean.",
        after_help = "Examples:\n  mdissues lint\n  mdissues lint --repo-root docs --report issues.txt"
    )]
    Lint(LintArgs),
}

#[derive(Args, Default, Clone)]
pub struct LintArgs {
    #[arg(long, help = "Directory to scan (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long = "pattern", help = "Glob pattern relative to the scanned dir; repeatable (default: *.md)")]
    pub patterns: Vec<String>,
    #[arg(long, help = "Report file name (default: markdownissues.txt)")]
    pub report: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Write every file's issues instead of the last file's only")]
    pub combine: bool,
    #[arg(
        long,
        help = "External linter command, split on whitespace; the file path is appended"
    )]
    pub command: Option<String>,
    #[arg(
        long = "command-arg",
        allow_hyphen_values = true,
        help = "Extra argument for --command, passed as-is (may contain spaces); repeatable"
    )]
    pub command_args: Vec<String>,
}
