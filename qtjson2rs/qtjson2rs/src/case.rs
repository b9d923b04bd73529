//! camelCase identifiers → snake_case.

/// Convert a camelCase identifier to snake_case.
///
/// Every uppercase ASCII letter is replaced by an underscore followed by its
/// lowercase form, the first character included, so `MyField` yields
/// `_my_field`.  Qt property names are camelCase in practice, which never
/// triggers the leading underscore; the behavior is kept as-is rather than
/// special-cased.
pub fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for ch in ident.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
