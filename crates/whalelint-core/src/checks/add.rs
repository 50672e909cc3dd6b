//! `ADD` checks. ADD is always discouraged; remote sources doubly so.

use crate::checks::{Operands, Validator};
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

pub struct AddFiles<'a> {
    instruction: &'a Instruction,
    operands: Operands<'a>,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(AddFiles::new(instruction))
}

impl<'a> AddFiles<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        Self {
            instruction,
            operands: Operands::split(instruction.payload()),
        }
    }

    pub fn check_discouraged(&self) -> Diagnostic {
        Diagnostic::new(Code::ADD_INSTEAD_OF_COPY, self.instruction.line())
    }

    /// At most one finding, naming the first remote source.
    pub fn check_remote_source(&self) -> Option<Diagnostic> {
        let url = self
            .operands
            .sources
            .iter()
            .find(|source| source.contains("http://") || source.contains("https://"))?;

        Some(Diagnostic::new(Code::ADD_REMOTE_URL, self.instruction.line()).with_key("url", *url))
    }
}

impl Validator for AddFiles<'_> {
    fn evaluate(&self, _ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let mut found = vec![self.check_discouraged()];
        found.extend(self.check_remote_source());
        found
    }
}
