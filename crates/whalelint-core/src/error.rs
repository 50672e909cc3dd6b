//! Error types for whalelint.
//!
//! Lint findings are never errors. These variants cover reading inputs and
//! building the rule registry.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A validator is already registered for this keyword.
    #[error("instruction `{0}` is already registered")]
    DuplicateKeyword(String),

    /// A checker is already registered for this shell command.
    #[error("shell command `{0}` is already registered")]
    DuplicateShellCommand(String),
}

pub type Result<T> = std::result::Result<T, LintError>;
