use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, debug};

use whalelint_core::config::LintConfig;
use whalelint_core::lint_file;
use whalelint_core::report::{model::ToolInfo, render};

mod args;

use args::{Args, OutputFormat};

/// Exit code for usage, I/O and configuration failures.
const EXIT_FAILURE: i32 = 2;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            EXIT_FAILURE
        }
    };

    std::process::exit(code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<i32> {
    if args.list_codes {
        print!("{}", render::render_catalog());
        return Ok(0);
    }

    let Some(dockerfile) = args.dockerfile.as_deref() else {
        anyhow::bail!("no Dockerfile given");
    };

    let config = load_config(args)?;
    debug!(?config, "effective configuration");

    let tool = ToolInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        commit: args.commit.clone(),
    };

    let report = lint_file(dockerfile, &config, args.remote, tool)
        .with_context(|| format!("failed to lint {}", dockerfile.display()))?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => render::render_text(&report),
    };

    match &args.out {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(report.summary.exit_code)
}

/// Config file first, then command-line overrides.
fn load_config(args: &Args) -> Result<LintConfig> {
    let mut config = match &args.config {
        Some(path) => LintConfig::load(path)?,
        None => LintConfig::default(),
    };

    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold.into());
    }
    for command in &args.pointless {
        config = config.add_pointless(command);
    }
    for check in &args.enable {
        config = config.enable((*check).into());
    }

    Ok(config)
}
