//! C++/Qt type spellings → Rust type spellings.
//!
//! Resolution is purely lexical: an alias table for the handful of exact
//! spellings, two structural rules covering the stdint (`uint32_t`) and Qt
//! (`quint32`) fixed-width integer families, and a capitalization-based
//! passthrough for user-defined types.  No symbol table is consulted.

use crate::error::TranslateError;

/// Translate one C++/Qt type spelling into its Rust equivalent.
///
/// Handles a single level of single-argument generics (`vector<quint32>`),
/// a leading `const `, and namespace qualifiers, which are stripped and do
/// not appear in the output.  Spellings that match nothing and do not start
/// with an uppercase letter fail with [`TranslateError::UnknownType`].
pub fn translate_type(spelling: &str) -> Result<String, TranslateError> {
    let (base, generic) = match spelling.find('<') {
        Some(idx) => {
            let inner = spelling.get(idx + 1..spelling.len() - 1).unwrap_or("");
            (&spelling[..idx], Some(translate_type(inner)?))
        }
        None => (spelling, None),
    };

    let base = base.strip_prefix("const ").unwrap_or(base);

    // Only the segment after the last `::` takes part in matching; the
    // qualifier is discarded even for passthrough types.
    let key = match base.rfind("::") {
        Some(idx) => &base[idx + 2..],
        None => base,
    };

    let rust = resolve_key(key)?;

    Ok(match generic {
        Some(arg) => format!("{rust}<{arg}>"),
        None => rust,
    })
}

fn resolve_key(key: &str) -> Result<String, TranslateError> {
    let rust = match key {
        "vector" | "deque" => "Vec",
        "Optional" => "Option",
        "QString" => "String",
        "bool" => "bool",
        "int" => "i32",
        "unsigned" => "u32",
        other => {
            if let Some(fixed) = stdint_alias(other).or_else(|| qt_alias(other)) {
                return Ok(fixed);
            }
            // Last resort: an unrecognized capitalized name is assumed to be
            // a user-defined enum or struct and passes through unchanged.
            if other.starts_with(|c: char| c.is_ascii_uppercase()) {
                return Ok(other.to_string());
            }
            return Err(TranslateError::UnknownType {
                spelling: other.to_string(),
            });
        }
    };
    Ok(rust.to_string())
}

/// `int32_t` / `uint8_t` style: `int` within the first four characters and a
/// trailing `_t`.  The digits between the `int` stem and the suffix carry
/// the width.
fn stdint_alias(key: &str) -> Option<String> {
    let head = key.get(..4).unwrap_or(key);
    if !key.ends_with("_t") || !head.contains("int") {
        return None;
    }
    let (sign, rest) = match key.strip_prefix('u') {
        Some(rest) => ('u', rest),
        None => ('i', key),
    };
    let width = rest.get(3..rest.len() - 2)?;
    Some(format!("{sign}{width}"))
}

/// `qint64` / `quint16` style: a `q` prefix, an optional `u`, then the `int`
/// stem followed by the width digits.
fn qt_alias(key: &str) -> Option<String> {
    let rest = key.strip_prefix('q')?;
    let (sign, rest) = match rest.strip_prefix('u') {
        Some(rest) => ('u', rest),
        None => ('i', rest),
    };
    let width = rest.get(3..)?;
    Some(format!("{sign}{width}"))
}
