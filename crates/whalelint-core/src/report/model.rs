use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{RULE_CATALOG_VERSION, SCHEMA_VERSION};
use crate::diagnostics::{Code, Diagnostic, Severity};
use crate::rules::catalog;

/// Top-level whalelint report.
///
/// This struct is the stable JSON contract. It must remain deterministic
/// for identical input documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub schema_version: String,
    pub catalog_version: String,
    pub tool: ToolInfo,
    pub document: DocumentInfo,
    pub diagnostics: Vec<DiagnosticInfo>,
    pub summary: SummaryInfo,
}

impl Report {
    /// Construct a report from the diagnostics of one run.
    ///
    /// Diagnostics keep their recording order.
    pub fn new(
        tool: ToolInfo,
        document: DocumentInfo,
        diagnostics: &[Diagnostic],
        summary: SummaryInfo,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            catalog_version: RULE_CATALOG_VERSION.to_string(),
            tool,
            document,
            diagnostics: diagnostics.iter().map(DiagnosticInfo::from).collect(),
            summary,
        }
    }
}

/// Tool metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
    pub commit: Option<String>,
}

/// The document this report is about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub path: String,
    pub remote: bool,
    pub instruction_count: usize,
}

/// Diagnostic entry included in report output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosticInfo {
    pub code: Code,
    pub severity: Severity,
    pub line: usize,
    pub title: String,
    pub message: String,
    pub keys: BTreeMap<String, String>,
}

impl From<&Diagnostic> for DiagnosticInfo {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            code: diagnostic.code,
            severity: diagnostic.severity(),
            line: diagnostic.line,
            title: catalog::title(diagnostic.code).to_string(),
            message: catalog::render_message(diagnostic),
            keys: diagnostic.keys.clone(),
        }
    }
}

/// Outcome of the run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryInfo {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub highest_severity: Option<Severity>,
    /// Any structural (error band) finding was recorded.
    pub blocking: bool,
    pub threshold: Severity,
    pub exit_code: i32,
}
