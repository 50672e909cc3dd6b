//! `FROM` checks: argument shape and image pinning.

use crate::checks::Validator;
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

pub struct SourceImage<'a> {
    instruction: &'a Instruction,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(SourceImage::new(instruction))
}

impl<'a> SourceImage<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        Self { instruction }
    }

    pub fn image(&self) -> Option<&'a str> {
        self.instruction.payload().first().map(String::as_str)
    }

    /// `image` or `image AS name`; anything else is malformed.
    ///
    /// A wrong count returns early, so the `AS` check only runs on three
    /// arguments.
    pub fn check_arity(&self) -> Option<Diagnostic> {
        let payload = self.instruction.payload();
        let line = self.instruction.line();

        if payload.len() != 1 && payload.len() != 3 {
            return Some(
                Diagnostic::new(Code::FROM_ARITY, line)
                    .with_key("count", payload.len().to_string())
                    .with_key("arguments", payload.join(" ")),
            );
        }

        if payload.len() == 3 && !payload[1].eq_ignore_ascii_case("AS") {
            return Some(
                Diagnostic::new(Code::MISSING_SPECIFIER, line)
                    .with_key("command", "FROM")
                    .with_key("specifier", "AS"),
            );
        }

        None
    }

    pub fn check_has_tag(&self) -> Option<Diagnostic> {
        let image = self.image()?;
        if is_scratch(image) || is_pinned(image) {
            return None;
        }
        Some(Diagnostic::new(Code::IMAGE_NO_TAG, self.instruction.line()).with_key("image", image))
    }

    pub fn check_latest_tag(&self) -> Option<Diagnostic> {
        let image = self.image()?;
        if tag_of(image) != Some("latest") {
            return None;
        }
        Some(
            Diagnostic::new(Code::IMAGE_LATEST_TAG, self.instruction.line())
                .with_key("image", image),
        )
    }
}

impl Validator for SourceImage<'_> {
    fn evaluate(&self, _ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        [
            self.check_arity(),
            self.check_has_tag(),
            self.check_latest_tag(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Tag of an image reference, ignoring any registry port.
fn tag_of(image: &str) -> Option<&str> {
    let name = image.split_once('@').map_or(image, |(name, _)| name);
    let last_segment = name.rsplit_once('/').map_or(name, |(_, last)| last);
    last_segment.split_once(':').map(|(_, tag)| tag)
}

fn is_pinned(image: &str) -> bool {
    image.contains('@') || tag_of(image).is_some()
}

fn is_scratch(image: &str) -> bool {
    image.eq_ignore_ascii_case("scratch")
}
