//! `EXPOSE` checks: port numbers and protocols.

use crate::checks::Validator;
use crate::diagnostics::{Code, Diagnostic};
use crate::dockerfile::Instruction;
use crate::rules::eval::LintContext;

const VALID_PROTOCOLS: [&str; 2] = ["tcp", "udp"];

pub struct Expose<'a> {
    instruction: &'a Instruction,
}

pub fn build(instruction: &Instruction) -> Box<dyn Validator + '_> {
    Box::new(Expose::new(instruction))
}

impl<'a> Expose<'a> {
    pub fn new(instruction: &'a Instruction) -> Self {
        Self { instruction }
    }

    /// Port tokens to check, with ranges replaced by their endpoints.
    pub fn ports(&self) -> Vec<String> {
        expand_ports(self.instruction.payload())
    }

    pub fn check_range(&self, port: &str) -> Option<Diagnostic> {
        let (number, _) = split_protocol(port);
        let line = self.instruction.line();

        if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
            return Some(Diagnostic::new(Code::EXPOSE_INVALID_PORT, line).with_key("port", number));
        }

        match number.parse::<u32>() {
            Ok(value) if (1..=65535).contains(&value) => None,
            // all digits: anything unparsable is too large
            _ => Some(Diagnostic::new(Code::EXPOSE_PORT_RANGE, line).with_key("port", number)),
        }
    }

    pub fn check_protocol(&self, port: &str) -> Option<Diagnostic> {
        let (number, protocol) = split_protocol(port);
        let protocol = protocol?;
        if VALID_PROTOCOLS.contains(&protocol) {
            return None;
        }
        Some(
            Diagnostic::new(Code::EXPOSE_PROTOCOL, self.instruction.line())
                .with_key("port", number)
                .with_key("protocol", protocol),
        )
    }
}

impl Validator for Expose<'_> {
    fn evaluate(&self, _ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        self.ports()
            .iter()
            .flat_map(|port| [self.check_range(port), self.check_protocol(port)])
            .flatten()
            .collect()
    }
}

/// Replaces each `low-high[/proto]` token by its two endpoints, both
/// carrying the protocol. Other tokens pass through unchanged; tokens with
/// variable references are dropped.
pub fn expand_ports(tokens: &[String]) -> Vec<String> {
    let mut ports = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.contains('$') {
            continue;
        }

        let (number, protocol) = split_protocol(token);
        match number.split_once('-') {
            Some((low, high)) => {
                for endpoint in [low, high] {
                    ports.push(match protocol {
                        Some(protocol) => format!("{endpoint}/{protocol}"),
                        None => endpoint.to_string(),
                    });
                }
            }
            None => ports.push(token.clone()),
        }
    }

    ports
}

fn split_protocol(port: &str) -> (&str, Option<&str>) {
    match port.split_once('/') {
        Some((number, protocol)) => (number, Some(protocol)),
        None => (port, None),
    }
}
