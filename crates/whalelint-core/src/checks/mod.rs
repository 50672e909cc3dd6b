//! Per-instruction validators.
//!
//! A validator binds one instruction (construction does no work) and
//! `evaluate` runs its checks in a fixed order. Checks are independent:
//! a failing check never suppresses the ones after it.

pub mod add;
pub mod apt;
pub mod copy;
pub mod expose;
pub mod from;
pub mod label;
pub mod maintainer;
pub mod run;
pub mod user;
pub mod workdir;

pub use run::ShellCommand;

use crate::diagnostics::Diagnostic;
use crate::dockerfile::Instruction;
use crate::error::Result;
use crate::rules::eval::LintContext;
use crate::rules::registry::Registry;

pub trait Validator {
    /// Runs every check and returns the findings in check order.
    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic>;
}

/// Binds an instruction to its validator.
pub type ValidatorFactory = for<'a> fn(&'a Instruction) -> Box<dyn Validator + 'a>;

/// Checker for one shell command found in a RUN instruction.
pub type ShellCheck = fn(&ShellCommand<'_>) -> Vec<Diagnostic>;

const BUILTIN_VALIDATORS: &[(&str, ValidatorFactory)] = &[
    ("ADD", add::build),
    ("COPY", copy::build),
    ("EXPOSE", expose::build),
    ("FROM", from::build),
    ("LABEL", label::build),
    ("MAINTAINER", maintainer::build),
    ("RUN", run::build),
    ("USER", user::build),
    ("WORKDIR", workdir::build),
];

const BUILTIN_SHELL_CHECKS: &[(&str, ShellCheck)] = &[
    ("apt", apt::check_apt),
    ("apt-get", apt::check_apt),
];

pub fn register_builtin(registry: &mut Registry) -> Result<()> {
    for (keyword, factory) in BUILTIN_VALIDATORS {
        registry.register(keyword, *factory)?;
    }
    for (command, check) in BUILTIN_SHELL_CHECKS {
        registry.register_shell(command, *check)?;
    }
    Ok(())
}

/// Source and destination operands of a COPY/ADD payload.
///
/// Tokens starting with `--` are flags and belong to neither. With more
/// than one operand, the last one is the destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operands<'a> {
    pub sources: Vec<&'a str>,
    pub destination: Option<&'a str>,
}

impl<'a> Operands<'a> {
    pub fn split(payload: &'a [String]) -> Self {
        let mut operands: Vec<&'a str> = payload
            .iter()
            .map(String::as_str)
            .filter(|token| !token.starts_with("--"))
            .collect();

        let destination = if operands.len() > 1 { operands.pop() } else { None };

        Self {
            sources: operands,
            destination,
        }
    }
}
