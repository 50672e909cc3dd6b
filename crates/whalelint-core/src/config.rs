//! Lint configuration.
//!
//! Read from an optional TOML file. Unknown fields are rejected so typos
//! in check names surface instead of being silently ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::diagnostics::Severity;
use crate::error::{LintError, Result};

/// Commands that do nothing useful inside an image build.
pub const DEFAULT_POINTLESS_COMMANDS: &[&str] = &[
    "cd", "free", "kill", "mount", "nano", "ps", "service", "shutdown", "ssh", "top", "vim",
];

/// Checks that only run when enabled explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum OptionalCheck {
    /// Flag `USER root`.
    UserRoot,
    /// Flag a `WORKDIR` that is not absolute.
    WorkdirRelative,
    /// Restrict label keys to `[a-z0-9-.]`.
    LabelCharset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub pointless_commands: Vec<String>,
    /// Lowest severity that makes the run exit non-zero.
    pub failure_threshold: Severity,
    pub enabled_checks: Vec<OptionalCheck>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            pointless_commands: DEFAULT_POINTLESS_COMMANDS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            failure_threshold: Severity::Error,
            enabled_checks: Vec::new(),
        }
    }
}

impl LintConfig {
    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| LintError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_pointless(&self, command: &str) -> bool {
        self.pointless_commands.iter().any(|c| c == command)
    }

    pub fn is_enabled(&self, check: OptionalCheck) -> bool {
        self.enabled_checks.contains(&check)
    }

    pub fn enable(mut self, check: OptionalCheck) -> Self {
        if !self.enabled_checks.contains(&check) {
            self.enabled_checks.push(check);
        }
        self
    }

    pub fn add_pointless(mut self, command: &str) -> Self {
        if !self.is_pointless(command) {
            self.pointless_commands.push(command.to_string());
        }
        self
    }

    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.failure_threshold = threshold;
        self
    }
}
