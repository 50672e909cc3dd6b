use std::fmt::Write;

use crate::TOOL_NAME;
use crate::report::model::Report;
use crate::rules::catalog::CATALOG;

/// One line per diagnostic, then a summary line.
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let path = &report.document.path;

    for d in &report.diagnostics {
        let _ = writeln!(
            out,
            "{}:{} {} [{}] {}",
            path, d.line, d.code, d.severity, d.message
        );
    }

    let summary = &report.summary;
    let _ = writeln!(
        out,
        "{} {}: {} problem(s) ({} error, {} warning, {} info)",
        TOOL_NAME,
        report.tool.version,
        summary.total,
        summary.errors,
        summary.warnings,
        summary.infos
    );
    out
}

/// Table of every known code.
pub fn render_catalog() -> String {
    let mut out = String::new();
    for rule in CATALOG {
        let _ = writeln!(out, "{} {:<8} {}", rule.code, rule.severity(), rule.title);
    }
    out
}
