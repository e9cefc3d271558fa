//! Markdown parsing and sanitization module
//!
//! This module provides markdown parsing into a typed node tree using the
//! comrak library, a CommonMark + GFM compatible parser, plus a node-level
//! sanitizer that strips raw HTML and script-capable URLs from the tree.
//!
//! The preview never injects HTML strings anywhere: the card renders the
//! sanitized node tree through native widgets, so sanitization happens
//! structurally rather than by string filtering.
//!
//! # Example
//! ```ignore
//! use crate::markdown::{parse_markdown, sanitize_tree};
//!
//! let mut doc = parse_markdown("# Hello\n\nThis is **bold** text.");
//! let stripped = sanitize_tree(&mut doc.root);
//! ```

mod parser;
mod sanitize;

pub use parser::{
    parse_markdown, parse_markdown_with_options, HeadingLevel, ListType, MarkdownDocument,
    MarkdownNode, MarkdownOptions, NodeKind,
};
pub use sanitize::{is_safe_url, sanitize_tree};
