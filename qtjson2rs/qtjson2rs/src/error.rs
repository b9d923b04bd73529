//! Error types for the translation layer.

/// Error produced while translating a single declaration line.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// A type spelling whose match key is neither a known alias, a
    /// fixed-width integer pattern, nor a capitalized user type.
    #[error("unknown type '{spelling}'")]
    UnknownType { spelling: String },

    /// A `Json` line without a parseable `(...)` body holding at least two
    /// comma-separated tokens.
    #[error("malformed declaration '{line}': {detail}")]
    MalformedDeclaration { line: String, detail: String },
}

/// Errors produced by [`translate_stream`](crate::translate_stream).
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// A line failed to translate; the run stops at this line.
    #[error(transparent)]
    Translate(#[from] TranslateError),

    /// I/O error while reading input or writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
