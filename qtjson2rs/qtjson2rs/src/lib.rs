//! Translator from Qt `Json(...)` field macros to Rust struct fields.
//!
//! Reads macro-style field declarations as they appear in Qt C++ headers and
//! emits the equivalent Rust field declaration, one line at a time.  Each
//! line is handled independently; no state survives between lines.
//!
//! # Pipeline
//!
//! ```text
//! input line (UTF-8)
//!   └─ classify            – comment / blank / declaration / unrecognized
//!       └─ translate_declaration – split the Json(...) body into tokens
//!           ├─ translate_type    – C++/Qt type spelling → Rust spelling
//!           └─ to_snake_case     – camelCase field name → snake_case
//! ```
//!
//! [`translate_stream`] drives the pipeline over a `BufRead`/`Write` pair;
//! [`translate_line`] handles a single line.

mod case;
mod decl;
mod error;
mod line;
mod types;

pub use case::to_snake_case;
pub use decl::translate_declaration;
pub use error::{StreamError, TranslateError};
pub use line::{LineKind, classify, translate_line, translate_stream};
pub use types::translate_type;
