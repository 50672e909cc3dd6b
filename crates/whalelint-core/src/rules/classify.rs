//! Classification of a finished lint run.
//!
//! Derives per-severity counts and the process exit status from the
//! recorded diagnostics:
//!
//!   - any diagnostic at or above the threshold → exit 1
//!   - otherwise                                → exit 0
//!
//! `blocking` reports structural (error band) findings independently of
//! the configured threshold.

use crate::diagnostics::{Diagnostic, Severity};
use crate::report::model::SummaryInfo;

pub fn classify(diagnostics: &[Diagnostic], threshold: Severity) -> SummaryInfo {
    let count = |severity: Severity| {
        diagnostics
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    };

    let highest_severity = diagnostics.iter().map(Diagnostic::severity).max();
    let failing = highest_severity.is_some_and(|highest| highest >= threshold);

    SummaryInfo {
        total: diagnostics.len(),
        errors: count(Severity::Error),
        warnings: count(Severity::Warning),
        infos: count(Severity::Info),
        highest_severity,
        blocking: diagnostics.iter().any(|d| d.severity() == Severity::Error),
        threshold,
        exit_code: i32::from(failing),
    }
}
