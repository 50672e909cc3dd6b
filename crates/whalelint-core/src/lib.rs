pub mod checks;
pub mod config;
pub mod diagnostics;
pub mod dockerfile;
pub mod error;
pub mod report;
pub mod rules;
pub mod util;

use std::path::Path;

use tracing::debug;

use crate::config::LintConfig;
use crate::dockerfile::{DocumentContext, LocalFs, parse_document, read_document};
use crate::error::Result;
use crate::report::model::{DocumentInfo, Report, ToolInfo};
use crate::rules::classify::classify;
use crate::rules::{LintContext, Registry, evaluate_document};

pub const TOOL_NAME: &str = "whalelint";

/// JSON schema version of whalelint reports.
/// This must be bumped only when the report layout changes semantically.
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Version of the diagnostic code catalog. Bumped when codes are added.
pub const RULE_CATALOG_VERSION: &str = "0.1.0";

/// Lints a build definition read from disk with the built-in rules.
pub fn lint_file(
    path: &Path,
    config: &LintConfig,
    is_remote: bool,
    tool: ToolInfo,
) -> Result<Report> {
    let source = read_document(path)?;
    let document = source.context(is_remote);
    lint_source(&source.text, &document, config, tool)
}

/// Lints document text with the built-in rules and the local filesystem.
pub fn lint_source(
    source: &str,
    document: &DocumentContext,
    config: &LintConfig,
    tool: ToolInfo,
) -> Result<Report> {
    let registry = Registry::builtin()?;
    let ctx = LintContext::new(document, config, &registry, &LocalFs);
    Ok(lint_with(source, &ctx, tool))
}

/// Lints document text against an explicit context (custom registry or
/// path probe).
pub fn lint_with(source: &str, ctx: &LintContext<'_>, tool: ToolInfo) -> Report {
    let instructions = parse_document(source);
    debug!(
        path = %ctx.document.path.display(),
        instructions = instructions.len(),
        "document parsed"
    );

    let collector = evaluate_document(&instructions, ctx);
    let summary = classify(collector.as_slice(), ctx.config.failure_threshold);

    let document = DocumentInfo {
        path: ctx.document.path.display().to_string(),
        remote: ctx.document.is_remote,
        instruction_count: instructions.len(),
    };

    Report::new(tool, document, collector.as_slice(), summary)
}
