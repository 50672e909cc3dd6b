//! Checker for `apt-get` / `apt` commands inside RUN.

use crate::checks::ShellCommand;
use crate::diagnostics::{Code, Diagnostic};

const ASSUME_YES_FLAGS: [&str; 4] = ["-y", "--yes", "--assume-yes", "-qq"];
const NO_RECOMMENDS_FLAG: &str = "--no-install-recommends";
/// Options whose value is the next argument.
const VALUE_OPTIONS: [&str; 6] = [
    "-o",
    "-c",
    "-t",
    "--option",
    "--config-file",
    "--target-release",
];

pub fn check_apt(command: &ShellCommand<'_>) -> Vec<Diagnostic> {
    let Some(subcommand) = subcommand(&command.args) else {
        return Vec::new();
    };

    match subcommand {
        "upgrade" | "dist-upgrade" => vec![
            Diagnostic::new(Code::APT_UPGRADE, command.line)
                .with_key("command", command.command)
                .with_key("subcommand", subcommand),
        ],
        "install" => {
            let mut found = Vec::new();
            if !assumes_yes(&command.args) {
                found.push(
                    Diagnostic::new(Code::APT_INTERACTIVE_INSTALL, command.line)
                        .with_key("command", command.command),
                );
            }
            if !command.args.contains(&NO_RECOMMENDS_FLAG) {
                found.push(
                    Diagnostic::new(Code::APT_INSTALL_RECOMMENDS, command.line)
                        .with_key("command", command.command),
                );
            }
            found
        }
        _ => Vec::new(),
    }
}

/// First argument that is neither an option nor an option's value.
fn subcommand<'a>(args: &[&'a str]) -> Option<&'a str> {
    let mut args = args.iter().copied();
    while let Some(arg) = args.next() {
        if VALUE_OPTIONS.contains(&arg) {
            args.next();
        } else if !arg.starts_with('-') {
            return Some(arg);
        }
    }
    None
}

/// `-y` in any spelling, including short flag clusters such as `-qy`.
fn assumes_yes(args: &[&str]) -> bool {
    args.iter().any(|arg| {
        ASSUME_YES_FLAGS.contains(arg)
            || (arg.starts_with('-') && !arg.starts_with("--") && arg.contains('y'))
    })
}
