//! Append-only store of findings for one lint run.
//!
//! The collector never sorts. Instructions are dispatched in document
//! order, so recording order is also line order in practice.

use crate::diagnostics::model::{Code, Diagnostic, Severity};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collector {
    diagnostics: Vec<Diagnostic>,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding built from its parts.
    pub fn record<I, K, V>(&mut self, code: Code, line: usize, keys: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut diagnostic = Diagnostic::new(code, line);
        diagnostic
            .keys
            .extend(keys.into_iter().map(|(k, v)| (k.into(), v.into())));
        self.diagnostics.push(diagnostic);
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Iterates recorded findings in recording order.
    ///
    /// The iterator is lazy and can be restarted by calling `all` again.
    pub fn all(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// True if any finding sits in the structural (error) band.
    pub fn has_blocking(&self) -> bool {
        self.has_at_least(Severity::Error)
    }

    pub fn has_at_least(&self, threshold: Severity) -> bool {
        self.diagnostics.iter().any(|d| d.severity() >= threshold)
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Extend<Diagnostic> for Collector {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.diagnostics.extend(iter);
    }
}
