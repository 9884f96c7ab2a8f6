//! mdissues CLI binary entry point.
//! Resolves config, lints, writes the report, and prints results.

use clap::Parser;
use mdissues::cli::{Cli, Commands, LintArgs};
use mdissues::linter::{BuiltinLinter, CommandLinter, MarkdownLinter};
use mdissues::{config, lint, output, report, utils};

fn main() {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    match cli.cmd {
        Some(Commands::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Lint(args)) => std::process::exit(run(args)),
        None => std::process::exit(run(LintArgs::default())),
    }
}

/// Run the lint task, returning the process exit code.
fn run(args: LintArgs) -> i32 {
    let eff = match config::resolve_effective(
        args.repo_root.as_deref(),
        &args.patterns,
        args.report.as_deref(),
        args.output.as_deref(),
        if args.combine { Some(true) } else { None },
        args.command.as_deref(),
        &args.command_args,
    ) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return 2;
        }
    };
    if eff.config_path.is_none() && eff.output != "json" {
        log::info!("no mdissues config found; using defaults");
    }

    let builtin;
    let external;
    let linter: &dyn MarkdownLinter = match eff.command.as_deref().and_then(CommandLinter::from_argv) {
        Some(c) => {
            if eff.output != "json" {
                eprintln!(
                    "{} Using external linter: {}",
                    utils::info_prefix(),
                    c.program
                );
            }
            external = c;
            &external
        }
        None => {
            builtin = BuiltinLinter::new(eff.rules.clone());
            &builtin
        }
    };

    let result = match lint::run_lint(&eff.root, &eff.patterns, linter) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return 2;
        }
    };
    if result.outcomes.is_empty() && eff.output != "json" {
        eprintln!(
            "{} No files matched [{}]",
            utils::note_prefix(),
            eff.patterns.join(", ")
        );
    }

    let status = match report::write_report(&eff.root, &eff.report, &result, eff.mode) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            return 2;
        }
    };
    output::print_lint(&result, &status, &eff.output);

    if result.summary.failed > 0 {
        1
    } else {
        0
    }
}
