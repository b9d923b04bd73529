//! Line classification and the per-line stream driver.

use std::io::{BufRead, Write};

use crate::decl::translate_declaration;
use crate::error::StreamError;
use crate::error::TranslateError;

/// The four shapes an input line can take after trimming.
///
/// `Unrecognized` is an explicit classification, not a fallthrough: such
/// lines produce no output by contract, and tests assert on the variant
/// directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `//` comment; holds the text after the marker, verbatim.
    Comment(&'a str),
    /// Empty after trimming.
    Blank,
    /// Starts with `Json`; holds the trimmed line.
    Declaration(&'a str),
    /// Anything else (access specifiers, braces, includes, ...).
    Unrecognized,
}

/// Classify one raw input line.
pub fn classify(raw: &str) -> LineKind<'_> {
    let line = raw.trim();
    if let Some(text) = line.strip_prefix("//") {
        return LineKind::Comment(text);
    }
    if line.is_empty() {
        return LineKind::Blank;
    }
    if line.starts_with("Json") {
        return LineKind::Declaration(line);
    }
    LineKind::Unrecognized
}

/// Translate one raw line into at most one output line.
///
/// Comments gain one extra marker character (`// x` → `/// x`), blank lines
/// stay blank, declarations are translated, and unrecognized lines yield
/// `None`.
pub fn translate_line(raw: &str) -> Result<Option<String>, TranslateError> {
    match classify(raw) {
        LineKind::Comment(text) => Ok(Some(format!("///{text}"))),
        LineKind::Blank => Ok(Some(String::new())),
        LineKind::Declaration(line) => translate_declaration(line).map(Some),
        LineKind::Unrecognized => Ok(None),
    }
}

/// Translate every line of `input` into `output`, in order.
///
/// Writes zero or one newline-terminated output lines per input line and
/// stops at the first line that fails to translate.  No state is carried
/// between lines.
pub fn translate_stream(
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), StreamError> {
    for line in input.lines() {
        let line = line?;
        if let Some(out) = translate_line(&line)? {
            writeln!(output, "{out}")?;
        }
    }
    Ok(())
}
