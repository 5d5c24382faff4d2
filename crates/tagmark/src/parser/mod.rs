//! Parser for tag markup.
//!
//! This module contains the attribute parser, the two tag scanners, and the
//! assembly step that merges their candidates with the surrounding text.

mod assemble;
mod attributes;
mod scanner;

pub use assemble::{parse, try_parse};
pub use attributes::parse_attributes;
pub use scanner::{Candidate, Scanner, TagForm, scan_paired, scan_self_closing};

/// Whitespace stripped from text runs and inner content: Unicode whitespace
/// except NEL (U+0085), plus the BOM.
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim a text run or inner content.
pub(crate) fn trim_segment(segment: &str) -> &str {
    segment.trim_matches(is_trimmable)
}
