use serde::Serialize;

/// One parsed instruction of a build definition.
///
/// Immutable after creation. Validators that need a filtered view of the
/// payload work on their own copy; the original order is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instruction {
    keyword: String,
    payload: Vec<String>,
    line: usize,
}

impl Instruction {
    /// Builds an instruction; the keyword is normalised to upper case.
    pub fn new<I, S>(keyword: &str, payload: I, line: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keyword: keyword.to_ascii_uppercase(),
            payload: payload.into_iter().map(Into::into).collect(),
            line,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn payload(&self) -> &[String] {
        &self.payload
    }

    /// 1-based source line where the instruction starts.
    pub fn line(&self) -> usize {
        self.line
    }
}
