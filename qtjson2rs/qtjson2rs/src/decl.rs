//! `Json(...)` declaration lines → Rust struct field lines.

use crate::case::to_snake_case;
use crate::error::TranslateError;
use crate::types::translate_type;

/// Translate one `Json(type, name, ...)` declaration into a Rust field line.
///
/// The interior of the outermost parens is split on `", "`; the first token
/// is the type spelling, the second the field name.  Any further tokens
/// (default values, flags) are accepted and ignored.
pub fn translate_declaration(line: &str) -> Result<String, TranslateError> {
    let open = line
        .find('(')
        .ok_or_else(|| malformed(line, "missing '('"))?;
    let close = line
        .rfind(')')
        .ok_or_else(|| malformed(line, "missing ')'"))?;

    let interior = if close > open { &line[open + 1..close] } else { "" };
    let mut tokens = interior.split(", ");

    // `split` always yields at least one token, so only the name can be
    // missing.
    let ty = tokens.next().unwrap_or_default();
    let name = tokens
        .next()
        .ok_or_else(|| malformed(line, "expected at least two comma-separated tokens"))?;

    Ok(format!("{}: {},", to_snake_case(name), translate_type(ty)?))
}

fn malformed(line: &str, detail: &str) -> TranslateError {
    TranslateError::MalformedDeclaration {
        line: line.to_string(),
        detail: detail.to_string(),
    }
}
