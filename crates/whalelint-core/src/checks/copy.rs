//! `COPY` checks: local sources must exist.

use crate::checks::{Operands, Validator};
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

/// Marker of a copy from a previous build stage.
const FROM_STAGE_FLAG: &str = "--from=";

pub struct CopyFiles<'a> {
    instruction: &'a Instruction,
    operands: Operands<'a>,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(CopyFiles::new(instruction))
}

impl<'a> CopyFiles<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        Self {
            instruction,
            operands: Operands::split(instruction.payload()),
        }
    }

    pub fn sources(&self) -> &[&'a str] {
        &self.operands.sources
    }

    pub fn destination(&self) -> Option<&'a str> {
        self.operands.destination
    }

    pub fn uses_previous_stage(&self) -> bool {
        self.instruction
            .payload()
            .iter()
            .any(|token| token.starts_with(FROM_STAGE_FLAG))
    }

    /// One finding per source that does not resolve to an existing path.
    ///
    /// Wildcard sources are left to the builder.
    pub fn check_sources_exist(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let directory = ctx.document.directory();

        self.sources()
            .iter()
            .filter(|source| !is_pattern(source))
            .filter(|source| !ctx.probe.exists(&ctx.document.resolve(source)))
            .map(|source| {
                Diagnostic::new(Code::COPY_MISSING_SOURCE, self.instruction.line())
                    .with_key("file", *source)
                    .with_key("directory", directory.display().to_string())
            })
            .collect()
    }
}

impl Validator for CopyFiles<'_> {
    fn evaluate(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        if self.uses_previous_stage() || ctx.document.is_remote {
            return Vec::new();
        }
        self.check_sources_exist(ctx)
    }
}

fn is_pattern(source: &str) -> bool {
    source.contains(['*', '?', '['])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::dockerfile::{DocumentContext, PathProbe};
    use crate::rules::registry::Registry;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    /// Probe that knows a fixed set of paths and remembers every lookup.
    struct FakeFs {
        present: Vec<PathBuf>,
        asked: RefCell<Vec<PathBuf>>,
    }

    impl FakeFs {
        fn with(present: &[&str]) -> Self {
            Self {
                present: present.iter().map(PathBuf::from).collect(),
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl PathProbe for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.asked.borrow_mut().push(path.to_path_buf());
            self.present.iter().any(|p| p == path)
        }
    }

    fn evaluate(payload: &[&str], fs: &FakeFs, remote: bool) -> Vec<Diagnostic> {
        let document = DocumentContext::new("/ctx/Dockerfile").remote(remote);
        let config = LintConfig::default();
        let registry = Registry::new();
        let ctx = LintContext::new(&document, &config, &registry, fs);
        let instruction = Instruction::new("COPY", payload.iter().copied(), 6);
        CopyFiles::new(&instruction).evaluate(&ctx)
    }

    #[test]
    fn existing_sources_are_clean() {
        let fs = FakeFs::with(&["/ctx/app.py", "/ctx/lib"]);
        assert!(evaluate(&["app.py", "lib", "/srv/"], &fs, false).is_empty());
    }

    #[test]
    fn one_finding_per_missing_source() {
        let fs = FakeFs::with(&["/ctx/app.py"]);
        let found = evaluate(&["app.py", "a.txt", "b.txt", "/srv/"], &fs, false);

        let files: Vec<&str> = found.iter().map(|d| d.keys["file"].as_str()).collect();
        assert_eq!(files, vec!["a.txt", "b.txt"]);
        assert!(found.iter().all(|d| d.code == Code::COPY_MISSING_SOURCE && d.line == 6));
        assert_eq!(found[0].keys["directory"], "/ctx");
    }

    #[test]
    fn destination_is_never_probed() {
        let fs = FakeFs::with(&[]);
        evaluate(&["app.py", "/srv/"], &fs, false);
        assert_eq!(*fs.asked.borrow(), vec![PathBuf::from("/ctx/app.py")]);
    }

    #[test]
    fn absolute_source_is_probed_as_is() {
        let fs = FakeFs::with(&["/etc/hosts"]);
        assert!(evaluate(&["/etc/hosts", "/srv/"], &fs, false).is_empty());
    }

    #[test]
    fn previous_stage_copy_skips_existence_checks() {
        let fs = FakeFs::with(&[]);
        let found = evaluate(&["--from=build", "/out/bin", "/usr/bin/"], &fs, false);
        assert!(found.is_empty());
        assert!(fs.asked.borrow().is_empty());
    }

    #[test]
    fn remote_document_skips_existence_checks() {
        let fs = FakeFs::with(&[]);
        assert!(evaluate(&["missing", "/srv/"], &fs, true).is_empty());
        assert!(fs.asked.borrow().is_empty());
    }

    #[test]
    fn wildcard_sources_are_not_probed() {
        let fs = FakeFs::with(&[]);
        assert!(evaluate(&["*.txt", "/srv/"], &fs, false).is_empty());
    }

    #[test]
    fn flags_are_not_sources() {
        let fs = FakeFs::with(&["/ctx/app.py"]);
        assert!(evaluate(&["--chown=app:app", "app.py", "/srv/"], &fs, false).is_empty());
    }
}
