//! `RUN` checks.
//!
//! A compound command is split on standalone `&&` tokens into logical
//! commands. Each one is checked against the pointless-command list and
//! handed to the shell-command checker registered for its name.

use tracing::trace;

use crate::checks::Validator;
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

const AND: &str = "&&";

/// One logical command of a RUN instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand<'a> {
    /// Instruction the command came from; always `RUN` today.
    pub token: &'static str,
    pub command: &'a str,
    pub args: Vec<&'a str>,
    pub line: usize,
}

/// Splits a RUN payload into its logical commands, in order.
///
/// Empty tokens are dropped first; empty segments (`a && && b`, a trailing
/// `&&`) yield no command.
pub fn split_commands(payload: &[String], line: usize) -> Vec<ShellCommand<'_>> {
    let words: Vec<&str> = payload
        .iter()
        .map(String::as_str)
        .filter(|word| !word.is_empty())
        .collect();

    words
        .split(|word| *word == AND)
        .filter_map(|segment| {
            let (&command, args) = segment.split_first()?;
            Some(ShellCommand {
                token: "RUN",
                command,
                args: args.to_vec(),
                line,
            })
        })
        .collect()
}

pub struct Run<'a> {
    commands: Vec<ShellCommand<'a>>,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(Run::new(instruction))
}

impl<'a> Run<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        Self {
            commands: split_commands(instruction.payload(), instruction.line()),
        }
    }

    pub fn commands(&self) -> &[ShellCommand<'a>] {
        &self.commands
    }

    pub fn check_pointless(
        &self,
        command: &ShellCommand<'_>,
        ctx: &LintContext<'_>,
    ) -> Option<Diagnostic> {
        if !ctx.config.is_pointless(command.command) {
            return None;
        }
        Some(
            Diagnostic::new(Code::POINTLESS_COMMAND, command.line)
                .with_key("command", command.command),
        )
    }
}

impl Validator for Run<'_> {
    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let mut found = Vec::new();

        for command in &self.commands {
            found.extend(self.check_pointless(command, ctx));

            match ctx.registry.shell_check(command.command) {
                Some(check) => found.extend(check(command)),
                None => trace!(command = command.command, line = command.line, "no shell checker"),
            }
        }

        found
    }
}
