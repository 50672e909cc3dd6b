use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use whalelint_core::config::OptionalCheck;
use whalelint_core::diagnostics::Severity;

#[derive(Debug, Parser)]
#[command(
    name = "whalelint",
    version,
    about = "Static best-practice linting for Dockerfiles"
)]
pub struct Args {
    /// Path to the Dockerfile
    #[arg(required_unless_present = "list_codes")]
    pub dockerfile: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lowest severity that makes the run fail
    #[arg(long)]
    pub threshold: Option<ThresholdArg>,

    /// Extra command flagged when used inside RUN (repeatable, adds to the configured list)
    #[arg(long = "pointless", value_name = "COMMAND")]
    pub pointless: Vec<String>,

    /// Turn on an optional check (repeatable)
    #[arg(long = "enable", value_name = "CHECK")]
    pub enable: Vec<CheckArg>,

    /// The document was fetched from elsewhere; skip build-context checks
    #[arg(long)]
    pub remote: bool,

    /// Optional git commit hash for tool metadata
    #[arg(long)]
    pub commit: Option<String>,

    /// Print every diagnostic code and exit
    #[arg(long)]
    pub list_codes: bool,

    /// Log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThresholdArg {
    Info,
    Warning,
    Error,
}

impl From<ThresholdArg> for Severity {
    fn from(arg: ThresholdArg) -> Self {
        match arg {
            ThresholdArg::Info => Severity::Info,
            ThresholdArg::Warning => Severity::Warning,
            ThresholdArg::Error => Severity::Error,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CheckArg {
    UserRoot,
    WorkdirRelative,
    LabelCharset,
}

impl From<CheckArg> for OptionalCheck {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::UserRoot => OptionalCheck::UserRoot,
            CheckArg::WorkdirRelative => OptionalCheck::WorkdirRelative,
            CheckArg::LabelCharset => OptionalCheck::LabelCharset,
        }
    }
}
