//! Rule catalog: what each diagnostic code means.
//!
//! Codes are a versioned contract. Entries may be added; an existing code
//! must never be repurposed.

use std::collections::BTreeMap;

use crate::diagnostics::{Code, Diagnostic, Severity};

/// Text substituted for a placeholder whose key was not recorded.
pub const MISSING_KEY: &str = "<unknown>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub code: Code,
    pub title: &'static str,
    /// Message with `{name}` placeholders filled from diagnostic keys.
    pub template: &'static str,
}

impl RuleInfo {
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

const fn rule(code: Code, title: &'static str, template: &'static str) -> RuleInfo {
    RuleInfo {
        code,
        title,
        template,
    }
}

/// Every known code, in ascending order.
pub const CATALOG: &[RuleInfo] = &[
    rule(
        Code::FROM_ARITY,
        "FROM has wrong number of arguments",
        "FROM expects `image[:tag]` or `image[:tag] AS name`, got {count} argument(s): {arguments}",
    ),
    rule(
        Code::LABEL_CHARSET,
        "label key has invalid characters",
        "label key `{label}` must only use lowercase letters, digits, `-` and `.`",
    ),
    rule(
        Code::COPY_MISSING_SOURCE,
        "COPY source does not exist",
        "`{file}` does not exist in {directory}",
    ),
    rule(
        Code::MISSING_SPECIFIER,
        "missing specifier",
        "{command} expects `{specifier}` before the stage name",
    ),
    rule(
        Code::EXPOSE_INVALID_PORT,
        "EXPOSE port is not a number",
        "`{port}` is not a valid port number",
    ),
    rule(
        Code::LABEL_MALFORMED,
        "LABEL entry is not a key=value pair",
        "`{label}` is not a key=value pair",
    ),
    rule(
        Code::IMAGE_NO_TAG,
        "image has no tag",
        "image `{image}` has no tag; pin a version",
    ),
    rule(
        Code::IMAGE_LATEST_TAG,
        "image uses the latest tag",
        "image `{image}` uses the `latest` tag; pin a version",
    ),
    rule(
        Code::APT_UPGRADE,
        "apt upgrade inside an image build",
        "`{command} {subcommand}` upgrades packages of the base image; update the base image instead",
    ),
    rule(
        Code::POINTLESS_COMMAND,
        "pointless command in RUN",
        "`{command}` has no lasting effect inside an image build",
    ),
    rule(
        Code::WORKDIR_RELATIVE,
        "WORKDIR is relative",
        "WORKDIR `{path}` should be an absolute path",
    ),
    rule(
        Code::EXPOSE_PORT_RANGE,
        "EXPOSE port out of range",
        "port {port} is outside 1-65535",
    ),
    rule(
        Code::ADD_INSTEAD_OF_COPY,
        "ADD used instead of COPY",
        "prefer COPY over ADD unless archive extraction is needed",
    ),
    rule(
        Code::USER_ROOT,
        "USER switches to root",
        "running as `root` grants the container full privileges",
    ),
    rule(
        Code::APT_INTERACTIVE_INSTALL,
        "apt install without non-interactive flag",
        "`{command} install` should pass `-y` to avoid prompting",
    ),
    rule(
        Code::EXPOSE_PROTOCOL,
        "EXPOSE protocol is neither tcp nor udp",
        "protocol `{protocol}` of port `{port}` must be tcp or udp",
    ),
    rule(
        Code::DEPRECATED_INSTRUCTION,
        "deprecated instruction",
        "{instruction} is deprecated",
    ),
    rule(
        Code::LABEL_RESERVED_NAMESPACE,
        "label uses a reserved namespace",
        "namespace `{label}` is reserved for the container runtime",
    ),
    rule(
        Code::APT_INSTALL_RECOMMENDS,
        "apt install pulls recommended packages",
        "`{command} install` should pass `--no-install-recommends`",
    ),
    rule(
        Code::ADD_REMOTE_URL,
        "ADD fetches a remote URL",
        "ADD downloads `{url}`; fetch it in a RUN step instead",
    ),
    rule(
        Code::LABEL_NOT_NAMESPACED,
        "label key is not namespaced",
        "label key `{label}` should use a reverse-DNS namespace",
    ),
];

pub fn lookup(code: Code) -> Option<&'static RuleInfo> {
    CATALOG.iter().find(|r| r.code == code)
}

/// Human-readable title for a code.
pub fn title(code: Code) -> &'static str {
    lookup(code).map_or("unknown diagnostic", |r| r.title)
}

/// Renders the message of a diagnostic from its catalog template.
///
/// Never fails: missing keys render as [`MISSING_KEY`], unknown codes get a
/// generic message.
pub fn render_message(diagnostic: &Diagnostic) -> String {
    match lookup(diagnostic.code) {
        Some(rule) => fill_template(rule.template, &diagnostic.keys),
        None => format!("diagnostic {}", diagnostic.code),
    }
}

fn fill_template(template: &str, keys: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                out.push_str(keys.get(name).map_or(MISSING_KEY, String::as_str));
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
