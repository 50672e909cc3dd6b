use crate::checks::Validator;
use crate::config::OptionalCheck;
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

/// `USER` checks. The root check only runs when enabled.
pub struct User<'a> {
    instruction: &'a Instruction,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(User::new(instruction))
}

impl<'a> User<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        Self { instruction }
    }

    /// Flags `root`, with or without a group (`root:root`).
    pub fn check_root(&self) -> Option<Diagnostic> {
        let user = self.instruction.payload().first()?;
        let name = user.split_once(':').map_or(user.as_str(), |(name, _)| name);
        (name == "root").then(|| Diagnostic::new(Code::USER_ROOT, self.instruction.line()))
    }
}

impl Validator for User<'_> {
    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if !ctx.config.is_enabled(OptionalCheck::UserRoot) {
            return Vec::new();
        }
        self.check_root().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::dockerfile::{DocumentContext, LocalFs};
    use crate::rules::registry::Registry;

    fn check(payload: &[&str]) -> Option<Code> {
        let instruction = Instruction::new("USER", payload.iter().copied(), 1);
        User::new(&instruction).check_root().map(|d| d.code)
    }

    #[test]
    fn root_is_flagged() {
        assert_eq!(check(&["root"]), Some(Code::USER_ROOT));
        assert_eq!(check(&["root:root"]), Some(Code::USER_ROOT));
    }

    #[test]
    fn other_users_pass() {
        assert_eq!(check(&["app"]), None);
        assert_eq!(check(&["rootless"]), None);
        assert_eq!(check(&[]), None);
    }

    #[test]
    fn evaluate_needs_opt_in() {
        let document = DocumentContext::new("Dockerfile");
        let registry = Registry::new();
        let instruction = Instruction::new("USER", ["root"], 1);

        let config = LintConfig::default();
        let ctx = LintContext::new(&document, &config, &registry, &LocalFs);
        assert!(User::new(&instruction).evaluate(&ctx).is_empty());

        let config = LintConfig::default().enable(OptionalCheck::UserRoot);
        let ctx = LintContext::new(&document, &config, &registry, &LocalFs);
        assert_eq!(User::new(&instruction).evaluate(&ctx).len(), 1);
    }
}
