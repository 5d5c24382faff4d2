//! Bracket-tag markup parser for widget rendering.
//!
//! This crate turns text with embedded widget tags, like
//! `Welcome [button type="primary"]Start[/button]`, into an ordered list of
//! [`Node`]s that a UI layer can map onto widgets.
//!
//! # Overview
//!
//! Two tag forms are recognized:
//!
//! - `[name attr="value" ...]inner[/name]` - paired tag with inner content
//! - `[name attr='value' .../]` - self-closing tag
//!
//! Only the ten names returned by [`supported_tags`] are tags. Everything
//! else, including brackets around unknown names, is kept as text. Tags do
//! not nest, and there is no escape syntax.
//!
//! Parsing is total: [`parse`] never fails. Use [`try_parse`] with
//! [`Limits`] to bound the work done on untrusted input.
//!
//! # Usage
//!
//! ```
//! use tagmark::{NodeKind, parse};
//!
//! let nodes = parse(r#"Settings [switch/] [button type="primary"]Save[/button]"#);
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[1].kind(), NodeKind::Tag("switch"));
//! assert_eq!(nodes[2].prop("type"), Some("primary"));
//! assert_eq!(nodes[2].content(), "Save");
//! ```

pub mod error;
pub mod limits;
pub mod node;
pub mod parser;
pub mod registry;

// Re-export main types at crate root
pub use error::MarkupError;
pub use limits::Limits;
pub use node::{Node, NodeKind, SourceSpan};
pub use parser::{parse, try_parse};
pub use registry::{is_supported_tag, supported_tags};
