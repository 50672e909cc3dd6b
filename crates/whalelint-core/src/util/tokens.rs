//! Payload normalisation helpers.
//!
//! Tokenizers that split on whitespace can cut a quoted value in two
//! (`a="b` `c"`). These helpers put such pieces back together.

/// Trims every token and drops the empty ones.
pub fn sanitize(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Joins consecutive tokens while a double-quoted value is left open.
///
/// A value opens only when it starts with `"` and does not close in the
/// same token; the next token ending in `"` closes it. A literal quote
/// elsewhere in a value never opens one.
pub fn merge_quoted(tokens: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(tokens.len());
    let mut open = false;

    for token in tokens {
        if open {
            if let Some(last) = merged.last_mut() {
                last.push(' ');
                last.push_str(token);
            }
            open = !token.ends_with('"');
        } else {
            merged.push(token.clone());
            open = opens_quote(token);
        }
    }

    merged
}

fn opens_quote(token: &str) -> bool {
    let value = token.split_once('=').map_or(token, |(_, value)| value);
    value.starts_with('"') && (value.len() == 1 || !value.ends_with('"'))
}

/// Strips one level of matching surrounding quotes.
pub fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
