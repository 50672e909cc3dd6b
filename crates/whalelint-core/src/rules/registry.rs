//! Keyword → validator lookup.
//!
//! The registry is a plain value built once per process (or per test) and
//! passed by reference into dispatch. Nothing is registered globally.

use std::collections::HashMap;
use std::fmt;

use crate::checks::{self, ShellCheck, ValidatorFactory};
use crate::error::{LintError, Result};

#[derive(Default)]
pub struct Registry {
    validators: HashMap<String, ValidatorFactory>,
    shell_checks: HashMap<String, ShellCheck>,
}

impl Registry {
    /// An empty registry. Every instruction is ignored until something is
    /// registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in validator and shell-command checker.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        checks::register_builtin(&mut registry)?;
        Ok(registry)
    }

    /// Associates `keyword` (case-insensitive) with a validator factory.
    pub fn register(&mut self, keyword: &str, factory: ValidatorFactory) -> Result<()> {
        let keyword = keyword.to_ascii_uppercase();
        if self.validators.contains_key(&keyword) {
            return Err(LintError::DuplicateKeyword(keyword));
        }
        self.validators.insert(keyword, factory);
        Ok(())
    }

    /// Associates a shell command name with a RUN sub-command checker.
    ///
    /// Command names are matched exactly, as the shell would.
    pub fn register_shell(&mut self, command: &str, check: ShellCheck) -> Result<()> {
        if self.shell_checks.contains_key(command) {
            return Err(LintError::DuplicateShellCommand(command.to_string()));
        }
        self.shell_checks.insert(command.to_string(), check);
        Ok(())
    }

    pub fn validator(&self, keyword: &str) -> Option<ValidatorFactory> {
        self.validators.get(&keyword.to_ascii_uppercase()).copied()
    }

    pub fn shell_check(&self, command: &str) -> Option<ShellCheck> {
        self.shell_checks.get(command).copied()
    }

    /// Registered keywords, sorted.
    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    /// Registered shell commands, sorted.
    pub fn shell_commands(&self) -> Vec<&str> {
        let mut commands: Vec<&str> = self.shell_checks.keys().map(String::as_str).collect();
        commands.sort_unstable();
        commands
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keywords", &self.keywords())
            .field("shell_commands", &self.shell_commands())
            .finish()
    }
}
