use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable numeric identifier of a lint finding.
///
/// The leading digit selects the severity band. Codes are additive only:
/// once published, a code keeps its meaning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Code(pub u16);

impl Code {
    pub const FROM_ARITY: Code = Code(1002);
    pub const LABEL_CHARSET: Code = Code(1003);
    pub const COPY_MISSING_SOURCE: Code = Code(1004);
    pub const MISSING_SPECIFIER: Code = Code(1005);
    pub const EXPOSE_INVALID_PORT: Code = Code(1006);
    pub const LABEL_MALFORMED: Code = Code(1007);

    pub const IMAGE_NO_TAG: Code = Code(2000);
    pub const IMAGE_LATEST_TAG: Code = Code(2001);
    pub const APT_UPGRADE: Code = Code(2002);
    pub const POINTLESS_COMMAND: Code = Code(2003);
    pub const WORKDIR_RELATIVE: Code = Code(2004);
    pub const EXPOSE_PORT_RANGE: Code = Code(2005);
    pub const ADD_INSTEAD_OF_COPY: Code = Code(2006);
    pub const USER_ROOT: Code = Code(2007);
    pub const APT_INTERACTIVE_INSTALL: Code = Code(2008);
    pub const EXPOSE_PROTOCOL: Code = Code(2009);
    pub const DEPRECATED_INSTRUCTION: Code = Code(2013);
    pub const LABEL_RESERVED_NAMESPACE: Code = Code(2014);

    pub const APT_INSTALL_RECOMMENDS: Code = Code(3000);
    pub const ADD_REMOTE_URL: Code = Code(3004);
    pub const LABEL_NOT_NAMESPACED: Code = Code(3005);

    /// Severity band derived from the leading digit.
    pub fn severity(self) -> Severity {
        match self.0 / 1000 {
            1 => Severity::Error,
            2 => Severity::Warning,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity bands, ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.pad(name)
    }
}

/// One recorded rule violation.
///
/// `keys` fills the placeholders of the message template registered for
/// `code` in the rule catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: Code,
    pub line: usize,
    pub keys: BTreeMap<String, String>,
}

impl Diagnostic {
    pub fn new(code: Code, line: usize) -> Self {
        Self {
            code,
            line,
            keys: BTreeMap::new(),
        }
    }

    pub fn with_key(mut self, name: &str, value: impl Into<String>) -> Self {
        self.keys.insert(name.to_string(), value.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_follows_leading_digit() {
        assert_eq!(Code::FROM_ARITY.severity(), Severity::Error);
        assert_eq!(Code::IMAGE_LATEST_TAG.severity(), Severity::Warning);
        assert_eq!(Code::ADD_REMOTE_URL.severity(), Severity::Info);
        assert_eq!(Code(9001).severity(), Severity::Info);
    }

    #[test]
    fn severity_orders_info_below_error() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn code_serializes_as_bare_number() {
        let json = serde_json::to_string(&Code::COPY_MISSING_SOURCE).unwrap();
        assert_eq!(json, "1004");
    }

    #[test]
    fn with_key_overwrites_existing_value() {
        let d = Diagnostic::new(Code::EXPOSE_PORT_RANGE, 3)
            .with_key("port", "0")
            .with_key("port", "70000");
        assert_eq!(d.keys.get("port").map(String::as_str), Some("70000"));
        assert_eq!(d.keys.len(), 1);
    }
}
