use crate::checks::Validator;
use crate::config::OptionalCheck;
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

/// `WORKDIR` checks. The relative-path check only runs when enabled.
pub struct Workdir<'a> {
    instruction: &'a Instruction,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(Workdir::new(instruction))
}

impl<'a> Workdir<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        Self { instruction }
    }

    /// Paths built from variables are not judged.
    pub fn check_relative(&self) -> Option<Diagnostic> {
        let path = self.instruction.payload().first()?;
        if path.starts_with('/') || path.starts_with('$') {
            return None;
        }
        Some(
            Diagnostic::new(Code::WORKDIR_RELATIVE, self.instruction.line())
                .with_key("path", path),
        )
    }
}

impl Validator for Workdir<'_> {
    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if !ctx.config.is_enabled(OptionalCheck::WorkdirRelative) {
            return Vec::new();
        }
        self.check_relative().into_iter().collect()
    }
}
