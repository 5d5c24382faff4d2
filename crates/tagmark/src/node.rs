//! Node type produced by the parser.

use std::collections::BTreeMap;
use std::fmt;

/// A byte range in the parsed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceSpan {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns true if this span covers a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this span overlaps with another span.
    pub fn overlaps(&self, other: &SourceSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The slice of `source` this span covers.
    ///
    /// Returns `None` if the span is out of bounds or not on char boundaries.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

/// What a [`Node`] represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A literal run of text.
    Text,
    /// A recognized tag; the name is the canonical lowercase registry entry.
    Tag(&'static str),
}

/// One unit of parser output: a literal text run or a recognized tag.
///
/// # Examples
///
/// ```
/// let nodes = tagmark::parse(r#"[button type="primary"]Go[/button]"#);
/// let button = &nodes[0];
/// assert_eq!(button.type_name(), "button");
/// assert_eq!(button.prop("type"), Some("primary"));
/// assert_eq!(button.content(), "Go");
/// assert!(!button.is_text());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    props: BTreeMap<String, String>,
    content: String,
    span: SourceSpan,
}

impl Node {
    /// Create a text node. `content` is stored as given.
    pub fn text(content: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind: NodeKind::Text,
            props: BTreeMap::new(),
            content: content.into(),
            span,
        }
    }

    /// Create a tag node.
    pub fn tag(
        name: &'static str,
        props: BTreeMap<String, String>,
        content: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            kind: NodeKind::Tag(name),
            props,
            content: content.into(),
            span,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The node type: the tag name, or `"text"` for text nodes.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Text => "text",
            NodeKind::Tag(name) => name,
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }

    /// Attributes of the tag. Always empty for text nodes.
    pub fn props(&self) -> &BTreeMap<String, String> {
        &self.props
    }

    /// Get an attribute value by name.
    pub fn prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).map(|s| s.as_str())
    }

    /// Inner content of a paired tag, the text of a text node, or `""` for
    /// self-closing tags.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Where in the input this node came from. For text nodes this is the
    /// untrimmed run.
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

impl fmt::Display for Node {
    /// Single-line listing: `button{type="primary"} "Go"` or `text "hello"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())?;
        if !self.props.is_empty() {
            f.write_str("{")?;
            for (i, (key, value)) in self.props.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{key}={value:?}")?;
            }
            f.write_str("}")?;
        }
        if !self.content.is_empty() {
            write!(f, " {:?}", self.content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_empty() {
        assert!(SourceSpan::new(5, 5).is_empty());
        assert!(!SourceSpan::new(5, 10).is_empty());
    }

    #[test]
    fn span_overlaps() {
        let a = SourceSpan::new(0, 10);
        let b = SourceSpan::new(5, 15);
        let c = SourceSpan::new(10, 20);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn span_slice() {
        let source = "ab按钮";
        assert_eq!(SourceSpan::new(2, 8).slice(source), Some("按钮"));
        assert_eq!(SourceSpan::new(3, 8).slice(source), None);
    }

    #[test]
    fn text_node() {
        let node = Node::text("hello", SourceSpan::new(0, 5));
        assert!(node.is_text());
        assert_eq!(node.type_name(), "text");
        assert!(node.props().is_empty());
    }

    #[test]
    fn tag_node() {
        let mut props = BTreeMap::new();
        props.insert("type".to_string(), "primary".to_string());
        let node = Node::tag("button", props, "Go", SourceSpan::new(0, 34));

        assert!(!node.is_text());
        assert_eq!(node.kind(), NodeKind::Tag("button"));
        assert_eq!(node.prop("type"), Some("primary"));
        assert_eq!(node.prop("size"), None);
    }

    #[test]
    fn display() {
        let mut props = BTreeMap::new();
        props.insert("type".to_string(), "primary".to_string());
        props.insert("size".to_string(), "large".to_string());
        let button = Node::tag("button", props, "Go", SourceSpan::default());
        assert_eq!(button.to_string(), r#"button{size="large" type="primary"} "Go""#);

        let switch = Node::tag("switch", BTreeMap::new(), "", SourceSpan::default());
        assert_eq!(switch.to_string(), "switch");

        let text = Node::text("hi", SourceSpan::default());
        assert_eq!(text.to_string(), r#"text "hi""#);
    }
}
