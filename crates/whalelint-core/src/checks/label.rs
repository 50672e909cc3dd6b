//! `LABEL` checks: key/value shape and namespacing.

use std::sync::LazyLock;

use regex::Regex;

use crate::checks::Validator;
use crate::config::OptionalCheck;
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;
use crate::util::tokens::{merge_quoted, sanitize, unquote};

/// Namespaces reserved for the container runtime vendor.
pub const RESERVED_NAMESPACES: &[&str] = &["com.docker", "io.docker", "org.dockerproject"];

static KEY_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9.-]+$").expect("label key pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub key: String,
    pub value: String,
}

pub struct Label<'a> {
    instruction: &'a Instruction,
    entries: Vec<LabelEntry>,
    malformed: Vec<String>,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(Label::new(instruction))
}

impl<'a> Label<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        let (entries, malformed) = parse_labels(instruction.payload());
        Self {
            instruction,
            entries,
            malformed,
        }
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    fn finding(&self, code: Code, label: &str) -> Diagnostic {
        Diagnostic::new(code, self.instruction.line()).with_key("label", label)
    }

    pub fn check_well_formed(&self) -> Vec<Diagnostic> {
        self.malformed
            .iter()
            .map(|token| self.finding(Code::LABEL_MALFORMED, token))
            .collect()
    }

    /// Keys need at least two dots, e.g. `org.example.owner`.
    pub fn check_namespaced(&self) -> Vec<Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.key.matches('.').count() < 2)
            .map(|entry| self.finding(Code::LABEL_NOT_NAMESPACED, &entry.key))
            .collect()
    }

    pub fn check_reserved_namespaces(&self) -> Vec<Diagnostic> {
        self.entries
            .iter()
            .flat_map(|entry| {
                RESERVED_NAMESPACES
                    .iter()
                    .filter(move |namespace| entry.key.starts_with(*namespace))
            })
            .map(|namespace| self.finding(Code::LABEL_RESERVED_NAMESPACE, namespace))
            .collect()
    }

    pub fn check_charset(&self) -> Vec<Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| !KEY_CHARSET.is_match(&entry.key))
            .map(|entry| self.finding(Code::LABEL_CHARSET, &entry.key))
            .collect()
    }
}

impl Validator for Label<'_> {
    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let mut found = self.check_well_formed();
        found.extend(self.check_namespaced());
        found.extend(self.check_reserved_namespaces());
        if ctx.config.is_enabled(OptionalCheck::LabelCharset) {
            found.extend(self.check_charset());
        }
        found
    }
}

/// Splits a LABEL payload into entries and the tokens that are not
/// `key=value` pairs.
///
/// The legacy form `LABEL key value...` (no `=` anywhere) is one entry.
pub fn parse_labels(payload: &[String]) -> (Vec<LabelEntry>, Vec<String>) {
    let tokens = merge_quoted(&sanitize(payload));

    if tokens.len() >= 2 && tokens.iter().all(|token| !token.contains('=')) {
        let entry = LabelEntry {
            key: unquote(&tokens[0]).to_string(),
            value: unquote(&tokens[1..].join(" ")).to_string(),
        };
        return (vec![entry], Vec::new());
    }

    let mut entries = Vec::new();
    let mut malformed = Vec::new();

    for token in tokens {
        let entry = token
            .split_once('=')
            .filter(|(key, _)| !unquote(key).is_empty())
            .map(|(key, value)| LabelEntry {
                key: unquote(key).to_string(),
                value: unquote(value).to_string(),
            });
        match entry {
            Some(entry) => entries.push(entry),
            None => malformed.push(token),
        }
    }

    (entries, malformed)
}
