//! # Inline Kinds
//!
//! Inline types that own their delimiters.
//!
//! - **`Bold`**: `MARKER = b"**"`, used to open and close
//! - **`Quoted`**: `MARK = b'"'`, used to open and close
//!
//! The parser and [`Span::source`](super::Span::source) use these constants;
//! neither hardcodes `**` or `"`.

pub mod bold;
pub mod quoted;

pub use bold::Bold;
pub use quoted::Quoted;
