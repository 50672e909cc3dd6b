//! Dispatch of instructions to their validators.
//!
//! Instructions are processed one at a time in document order. Each
//! validator returns its findings; nothing here short-circuits, so one bad
//! instruction never stops the rest of the document from being checked.

use tracing::{debug, trace};

use crate::config::LintConfig;
use crate::diagnostics::Collector;
use crate::dockerfile::{DocumentContext, Instruction, PathProbe};
use crate::rules::registry::Registry;

/// Everything a validator may read during a run.
pub struct LintContext<'a> {
    pub document: &'a DocumentContext,
    pub config: &'a LintConfig,
    pub registry: &'a Registry,
    pub probe: &'a dyn PathProbe,
}

impl<'a> LintContext<'a> {
    pub fn new(
        document: &'a DocumentContext,
        config: &'a LintConfig,
        registry: &'a Registry,
        probe: &'a dyn PathProbe,
    ) -> Self {
        Self {
            document,
            config,
            registry,
            probe,
        }
    }
}

/// Runs the validator registered for `instruction`, if any.
///
/// Unknown keywords are skipped without a finding.
pub fn dispatch(instruction: &Instruction, ctx: &LintContext<'_>, collector: &mut Collector) {
    let Some(factory) = ctx.registry.validator(instruction.keyword()) else {
        trace!(
            keyword = instruction.keyword(),
            line = instruction.line(),
            "no validator registered"
        );
        return;
    };

    let findings = factory(instruction).evaluate(ctx);
    debug!(
        keyword = instruction.keyword(),
        line = instruction.line(),
        findings = findings.len(),
        "instruction checked"
    );
    collector.extend(findings);
}

/// Dispatches every instruction in order into a fresh collector.
pub fn evaluate_document(instructions: &[Instruction], ctx: &LintContext<'_>) -> Collector {
    let mut collector = Collector::new();
    for instruction in instructions {
        dispatch(instruction, ctx, &mut collector);
    }
    collector
}
