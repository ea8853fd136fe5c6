//! # Inline Scanning
//!
//! Cursor-based scanning of a single prose line into styled spans.
//!
//! ## Architecture
//!
//! Inline scanning is separate from block classification and only runs on
//! lines that became paragraphs. It never crosses a line boundary.
//!
//! At each cursor position the scanner tries bold first, then quoted. A
//! construct only matches if its closing delimiter exists further along the
//! line; the closer is the nearest one, so matches are as short as possible
//! and never overlap. Anything that does not match is plain text, including
//! unbalanced delimiters.
//!
//! ## Modules
//!
//! - **`types`**: [`Span`] enum (Plain, Bold, Quoted)
//! - **`kinds`**: inline types with owned delimiters (`Bold`, `Quoted`)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: [`scan_spans`] entry point with `try_parse_*` helpers

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::scan_spans;
pub use types::{Span, paragraph_source};
