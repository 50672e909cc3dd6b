//! Splits a build definition into instructions.
//!
//! This is a best-effort tokenizer: it understands comments, line
//! continuations, exec-form JSON arrays and shell quoting. It does not
//! substitute variables or parse heredocs.

use tracing::warn;

use crate::dockerfile::instruction::Instruction;

/// Parses every instruction in `source`, in document order.
pub fn parse_document(source: &str) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    // (start line, accumulated text) of an instruction spanning several lines
    let mut pending: Option<(usize, String)> = None;

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (body, continues) = match trimmed.strip_suffix('\\') {
            Some(body) => (body.trim_end(), true),
            None => (trimmed, false),
        };

        match pending.as_mut() {
            Some((_, text)) => {
                text.push(' ');
                text.push_str(body);
            }
            None => pending = Some((line, body.to_string())),
        }

        if !continues {
            if let Some((start, text)) = pending.take() {
                instructions.extend(split_instruction(&text, start));
            }
        }
    }

    // A continuation on the last line still closes the instruction.
    if let Some((start, text)) = pending.take() {
        instructions.extend(split_instruction(&text, start));
    }

    instructions
}

fn split_instruction(text: &str, line: usize) -> Option<Instruction> {
    let text = text.trim();
    let (keyword, rest) = match text.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (text, ""),
    };

    if keyword.is_empty() {
        return None;
    }

    Some(Instruction::new(keyword, split_arguments(rest, line), line))
}

/// Splits the argument text of one instruction into payload tokens.
///
/// Exec form (`["a", "b"]`) yields the array items. Shell form is split
/// into shell words; unbalanced quoting falls back to whitespace.
pub fn split_arguments(text: &str, line: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    if text.starts_with('[') {
        if let Ok(words) = serde_json::from_str::<Vec<String>>(text) {
            return words;
        }
    }

    match shell_words::split(text) {
        Ok(words) => words,
        Err(err) => {
            warn!(line, error = %err, "cannot split arguments as shell words");
            text.split_whitespace().map(str::to_owned).collect()
        }
    }
}
