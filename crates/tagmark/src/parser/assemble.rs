//! Merges scan candidates and the text between them into the final node list.

use crate::error::MarkupError;
use crate::limits::Limits;
use crate::node::{Node, SourceSpan};

use super::scanner::{Candidate, scan_paired, scan_self_closing};
use super::trim_segment;

/// Parse markup into nodes.
///
/// This never fails: anything that is not a recognized tag comes back as
/// text. Empty or whitespace-only input yields no nodes.
///
/// # Examples
///
/// ```
/// let nodes = tagmark::parse(r#"Welcome [button type="primary"]Start[/button] now"#);
/// let types: Vec<_> = nodes.iter().map(|n| n.type_name()).collect();
/// assert_eq!(types, ["text", "button", "text"]);
/// assert_eq!(nodes[0].content(), "Welcome");
/// ```
pub fn parse(input: &str) -> Vec<Node> {
    let candidates = collect_candidates(input);
    assemble(input, candidates)
}

/// Parse markup into nodes, enforcing `limits`.
///
/// With [`Limits::none`] this returns exactly what [`parse`] returns.
pub fn try_parse(input: &str, limits: &Limits) -> Result<Vec<Node>, MarkupError> {
    if let Some(max) = limits.max_input_len {
        if input.len() > max {
            return Err(MarkupError::InputTooLarge {
                len: input.len(),
                max,
            });
        }
    }

    let candidates = collect_candidates(input);

    if let Some(max) = limits.max_matches {
        if candidates.len() > max {
            return Err(MarkupError::TooManyMatches {
                found: candidates.len(),
                max,
            });
        }
    }

    Ok(assemble(input, candidates))
}

/// Run both scans and order their candidates by start offset.
///
/// The sort is stable and self-closing candidates go in first, so they win a
/// tie with a paired candidate at the same offset.
fn collect_candidates(input: &str) -> Vec<Candidate> {
    let mut candidates = scan_self_closing(input);
    candidates.extend(scan_paired(input));
    candidates.sort_by_key(|c| c.span.start);
    candidates
}

/// Walk sorted candidates, dropping overlaps and filling gaps with text.
fn assemble(input: &str, candidates: Vec<Candidate>) -> Vec<Node> {
    let candidate_count = candidates.len();
    let mut nodes = Vec::new();
    // Span of the last emitted tag; candidates are sorted by start, so
    // overlapping it means starting before its end.
    let mut claimed = SourceSpan::default();

    for Candidate { span, node } in candidates {
        if span.overlaps(&claimed) {
            log::trace!(
                "dropping overlapping {} at {}..{} (claimed {}..{})",
                node.type_name(),
                span.start,
                span.end,
                claimed.start,
                claimed.end
            );
            continue;
        }

        push_text(&mut nodes, input, SourceSpan::new(claimed.end, span.start));
        nodes.push(node);
        claimed = span;
    }

    push_text(&mut nodes, input, SourceSpan::new(claimed.end, input.len()));

    log::debug!(
        "parsed {} bytes: {} candidates, {} nodes",
        input.len(),
        candidate_count,
        nodes.len()
    );

    nodes
}

/// Push a text node for `span` unless it is blank.
fn push_text(nodes: &mut Vec<Node>, input: &str, span: SourceSpan) {
    if span.is_empty() {
        return;
    }
    let Some(text) = span.slice(input).map(trim_segment) else {
        return;
    };
    if !text.is_empty() {
        nodes.push(Node::text(text, span));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(nodes: &[Node]) -> Vec<&'static str> {
        nodes.iter().map(|n| n.type_name()).collect()
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
        assert!(parse(" \n\t ").is_empty());
    }

    #[test]
    fn plain_text_fallback() {
        let nodes = parse("  just words  ");
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].is_text());
        assert_eq!(nodes[0].content(), "just words");
        assert_eq!(nodes[0].span(), SourceSpan::new(0, 14));
    }

    #[test]
    fn text_around_tag() {
        let nodes = parse("before [switch/] after");
        assert_eq!(types(&nodes), vec!["text", "switch", "text"]);
        assert_eq!(nodes[0].content(), "before");
        assert_eq!(nodes[0].span(), SourceSpan::new(0, 7));
        assert_eq!(nodes[2].content(), "after");
        assert_eq!(nodes[2].span(), SourceSpan::new(16, 22));
    }

    #[test]
    fn whitespace_gaps_are_dropped() {
        let nodes = parse("[switch/]\n  \n[switch/]");
        assert_eq!(types(&nodes), vec!["switch", "switch"]);
    }

    #[test]
    fn self_closing_wins_tie_at_same_offset() {
        let nodes = parse("[button/]x[/button]");
        assert_eq!(types(&nodes), vec!["button", "text"]);
        assert_eq!(nodes[0].content(), "");
        assert_eq!(nodes[1].content(), "x[/button]");
    }

    #[test]
    fn inner_self_closing_is_dropped() {
        let nodes = parse("[dialog]confirm [switch/][/dialog]");
        assert_eq!(types(&nodes), vec!["dialog"]);
        assert_eq!(nodes[0].content(), "confirm [switch/]");
    }

    #[test]
    fn later_overlapping_paired_is_dropped() {
        let nodes = parse("[input [tag/]x[/tag]");
        assert_eq!(types(&nodes), vec!["input", "text"]);
        assert_eq!(nodes[0].span(), SourceSpan::new(0, 13));
        assert_eq!(nodes[1].content(), "x[/tag]");
    }

    #[test]
    fn adjacent_tags_are_both_kept() {
        let nodes = parse("[switch/][tag/][dialog]x[/dialog]");
        assert_eq!(types(&nodes), vec!["switch", "tag", "dialog"]);
        assert_eq!(nodes[0].span(), SourceSpan::new(0, 9));
        assert_eq!(nodes[1].span(), SourceSpan::new(9, 15));
        assert_eq!(nodes[2].span(), SourceSpan::new(15, 33));
    }

    #[test]
    fn try_parse_without_limits_matches_parse() {
        let input = "a [button]b[/button] c [switch/]";
        assert_eq!(try_parse(input, &Limits::none()).unwrap(), parse(input));
    }

    #[test]
    fn try_parse_input_too_large() {
        let err = try_parse("0123456789", &Limits::none().max_input_len(9)).unwrap_err();
        assert_eq!(err, MarkupError::InputTooLarge { len: 10, max: 9 });
        assert!(try_parse("0123456789", &Limits::none().max_input_len(10)).is_ok());
    }

    #[test]
    fn try_parse_too_many_matches_counts_before_overlap() {
        // One dialog plus the switch inside it: two candidates, one node.
        let input = "[dialog][switch/][/dialog]";
        let err = try_parse(input, &Limits::none().max_matches(1)).unwrap_err();
        assert_eq!(err, MarkupError::TooManyMatches { found: 2, max: 1 });

        let nodes = try_parse(input, &Limits::none().max_matches(2)).unwrap();
        assert_eq!(nodes.len(), 1);
    }
}
