use crate::checks::Validator;
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

/// `MAINTAINER` is deprecated in favour of a label; every use is flagged.
pub struct Maintainer<'a> {
    instruction: &'a Instruction,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(Maintainer { instruction })
}

impl Validator for Maintainer<'_> {
    fn evaluate(&self, _ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        vec![
            Diagnostic::new(Code::DEPRECATED_INSTRUCTION, self.instruction.line())
                .with_key("instruction", "MAINTAINER"),
        ]
    }
}
