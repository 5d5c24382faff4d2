//! Tag scanners.
//!
//! Each tag form is found by its own full pass over the input. A pass is a
//! plain iterator over an immutable `&str`, so it can be restarted at will and
//! keeps no state between parses.

use crate::node::{Node, SourceSpan};
use crate::registry;

use super::attributes::parse_attributes;
use super::trim_segment;

/// A tag occurrence found by one of the scans, not yet checked for overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    /// Byte range of the whole occurrence, brackets included.
    pub span: SourceSpan,
    /// The tag node built from it.
    pub node: Node,
}

/// Which tag form a [`Scanner`] looks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagForm {
    /// `[name attrs/]`
    SelfClosing,
    /// `[name attrs]inner[/name]`
    Paired,
}

/// The `[name attrs]` (or `[name attrs/]`) part of a tag.
struct Header<'a> {
    /// Canonical tag name.
    name: &'static str,
    /// Everything between the name and the first `]`.
    attrs: &'a str,
    /// Offset just past the `]`.
    end: usize,
}

impl<'a> Header<'a> {
    /// Read a header starting at the `[` at `start`.
    fn at(input: &'a str, start: usize) -> Option<Self> {
        let name_start = start + 1;
        let name = registry::match_prefix(&input[name_start..])?;
        let attrs_start = name_start + name.len();
        let close = attrs_start + input[attrs_start..].find(']')?;

        Some(Self {
            name,
            attrs: &input[attrs_start..close],
            end: close + 1,
        })
    }
}

/// Finds the first `[/name]` at or after `from`, comparing the name ASCII
/// case-insensitively. Returns the offset of its `[`.
fn find_closing(input: &str, from: usize, name: &str) -> Option<usize> {
    input[from..]
        .match_indices("[/")
        .map(|(offset, _)| from + offset)
        .find(|&at| {
            let rest = &input[at + 2..];
            rest.get(..name.len())
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
                && rest[name.len()..].starts_with(']')
        })
}

/// Iterator over the non-overlapping occurrences of one tag form.
///
/// Occurrences are yielded left to right. After a match the scan resumes at
/// the end of it, so a single form never yields overlapping candidates.
///
/// # Examples
///
/// ```
/// use tagmark::parser::{Scanner, TagForm};
///
/// let found: Vec<_> = Scanner::new("[switch/] and [input/]", TagForm::SelfClosing).collect();
/// assert_eq!(found.len(), 2);
/// assert_eq!(found[1].node.type_name(), "input");
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    form: TagForm,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, form: TagForm) -> Self {
        Self {
            input,
            form,
            pos: 0,
        }
    }

    /// Try to match the configured form at the `[` at `start`.
    fn match_at(&self, start: usize) -> Option<Candidate> {
        let header = Header::at(self.input, start)?;

        match self.form {
            TagForm::SelfClosing => {
                let attrs = header.attrs.strip_suffix('/')?;
                let span = SourceSpan::new(start, header.end);
                let node = Node::tag(header.name, parse_attributes(attrs), "", span);
                Some(Candidate { span, node })
            }
            TagForm::Paired => {
                let close = find_closing(self.input, header.end, header.name)?;
                let inner = &self.input[header.end..close];
                // "[/" + name + "]"
                let end = close + header.name.len() + 3;
                let span = SourceSpan::new(start, end);
                let node = Node::tag(
                    header.name,
                    parse_attributes(header.attrs),
                    trim_segment(inner),
                    span,
                );
                Some(Candidate { span, node })
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.input.len() {
            let Some(offset) = self.input[self.pos..].find('[') else {
                self.pos = self.input.len();
                return None;
            };
            let start = self.pos + offset;

            match self.match_at(start) {
                Some(candidate) => {
                    self.pos = candidate.span.end;
                    return Some(candidate);
                }
                None => self.pos = start + 1,
            }
        }
        None
    }
}

/// Find every `[name attrs/]` occurrence.
pub fn scan_self_closing(input: &str) -> Vec<Candidate> {
    Scanner::new(input, TagForm::SelfClosing).collect()
}

/// Find every `[name attrs]inner[/name]` occurrence, closing each at the
/// first matching closing tag.
pub fn scan_paired(input: &str) -> Vec<Candidate> {
    Scanner::new(input, TagForm::Paired).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(candidates: &[Candidate]) -> Vec<&'static str> {
        candidates.iter().map(|c| c.node.type_name()).collect()
    }

    #[test]
    fn self_closing_basic() {
        let found = scan_self_closing("[switch/]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].span, SourceSpan::new(0, 9));
        assert_eq!(found[0].node.content(), "");
        assert!(found[0].node.props().is_empty());
    }

    #[test]
    fn self_closing_with_attributes() {
        let found = scan_self_closing(r#"[input placeholder="name" type="password"/]"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node.prop("placeholder"), Some("name"));
        assert_eq!(found[0].node.prop("type"), Some("password"));
    }

    #[test]
    fn self_closing_name_is_case_insensitive() {
        let found = scan_self_closing("[SWITCH/][Progress percentage=\"5\"/]");
        assert_eq!(types(&found), vec!["switch", "progress"]);
    }

    #[test]
    fn self_closing_requires_slash_before_bracket() {
        assert!(scan_self_closing("[switch]").is_empty());
        assert!(scan_self_closing("[switch / ]").is_empty());
        assert!(scan_self_closing("[switch").is_empty());
    }

    #[test]
    fn self_closing_ignores_unknown_names() {
        assert!(scan_self_closing("[div/][/]").is_empty());
    }

    #[test]
    fn self_closing_offsets_with_multibyte_text() {
        let input = "开关[switch/]";
        let found = scan_self_closing(input);
        assert_eq!(found[0].span, SourceSpan::new(6, input.len()));
        assert_eq!(found[0].span.slice(input), Some("[switch/]"));
    }

    #[test]
    fn paired_basic() {
        let found = scan_paired(r#"[button type="primary"]  Go  [/button]"#);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node.content(), "Go");
        assert_eq!(found[0].node.prop("type"), Some("primary"));
    }

    #[test]
    fn paired_closing_name_must_match() {
        assert!(scan_paired("[button]x[/tag]").is_empty());
        let found = scan_paired("[button]x[/tag][/button]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node.content(), "x[/tag]");
    }

    #[test]
    fn paired_closing_name_ignores_case() {
        let found = scan_paired("[Button]x[/BUTTON]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node.type_name(), "button");
    }

    #[test]
    fn paired_is_lazy() {
        let found = scan_paired("[button]1[/button][button]2[/button]");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].node.content(), "1");
        assert_eq!(found[1].node.content(), "2");
        assert_eq!(found[0].span.end, found[1].span.start);
    }

    #[test]
    fn paired_spans_lines() {
        let found = scan_paired("[alert]\nline one\nline two\n[/alert]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node.content(), "line one\nline two");
    }

    #[test]
    fn paired_empty_inner() {
        let found = scan_paired("[badge][/badge]");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node.content(), "");
    }

    #[test]
    fn paired_nested_closes_at_first() {
        let input = "[button]outer[button]inner[/button]tail[/button]";
        let found = scan_paired(input);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].node.content(), "outer[button]inner");
        assert_eq!(&input[found[0].span.end..], "tail[/button]");
    }

    #[test]
    fn paired_retries_after_unclosed_tag() {
        let found = scan_paired("[tag]open [link]ok[/link]");
        assert_eq!(types(&found), vec!["link"]);
    }

    #[test]
    fn paired_attribute_region_stops_at_first_bracket() {
        // The header ends at the first `]`, even inside a quoted value.
        let found = scan_paired(r#"[link href="a]b"]x[/link]"#);
        assert_eq!(found.len(), 1);
        assert!(found[0].node.props().is_empty());
        assert_eq!(found[0].node.content(), r#"b"]x"#);
    }

    #[test]
    fn scanner_is_restartable() {
        let input = "[switch/][switch/]";
        assert_eq!(scan_self_closing(input), scan_self_closing(input));
    }
}
