//! Output rendering for the lint command.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-file outcomes, a summary, and where the report went.

use crate::models::LintResult;
use crate::report::ReportStatus;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, status: &ReportStatus, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_lint_json(res, status)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            let icon = if color {
                "▲".yellow().to_string()
            } else {
                "▲".to_string()
            };
            for o in &res.outcomes {
                if let Some(err) = &o.error {
                    let tag = if color {
                        "✖ failed".red().bold().to_string()
                    } else {
                        "✖ failed".to_string()
                    };
                    println!("{} {} — {}", tag, o.file, err);
                    continue;
                }
                for is in &o.issues {
                    let file = if color {
                        is.file.clone().bold().to_string()
                    } else {
                        is.file.clone()
                    };
                    if is.line == 0 {
                        println!("{} {}", icon, is.description);
                    } else {
                        let detail = is
                            .detail
                            .as_ref()
                            .map(|d| format!(" [{}]", d))
                            .unwrap_or_default();
                        println!(
                            "{} {}:{} ❲{}❳ — {}{}",
                            icon,
                            file,
                            is.line,
                            is.rule,
                            is.description,
                            detail
                        );
                    }
                }
            }
            let written = match status {
                ReportStatus::Skipped => "report=none".to_string(),
                ReportStatus::Written { path, .. } => format!("report={}", path.display()),
            };
            let summary = format!(
                "— Summary — files={} clean={} with_issues={} issues={} failed={} {}",
                res.summary.files,
                res.summary.clean,
                res.summary.with_issues,
                res.summary.issues,
                res.summary.failed,
                written
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult, status: &ReportStatus) -> JsonVal {
    let report = match status {
        ReportStatus::Skipped => JsonVal::Null,
        ReportStatus::Written { path, files } => json!({
            "path": path.to_string_lossy(),
            "files": files,
        }),
    };
    json!({
        "results": res.outcomes,
        "summary": res.summary,
        "report": report,
    })
}
