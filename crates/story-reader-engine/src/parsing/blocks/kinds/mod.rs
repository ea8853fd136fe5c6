//! # Block Kinds
//!
//! Block-specific types that own their line markers.
//!
//! - **`Divider`**: `MARKER = "---"`, the whole trimmed line
//! - **`Header`**: `PREFIX = "##"`, the start of the trimmed line
//!
//! The classifier asks these types; it never hardcodes `---` or `##`.

pub mod divider;
pub mod header;

pub use divider::Divider;
pub use header::Header;
