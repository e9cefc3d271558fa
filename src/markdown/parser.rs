//! Markdown parser implementation using comrak
//!
//! This module wraps comrak's parsing functions to produce the typed node
//! tree the preview card renders. The node set is deliberately limited to
//! what the card can display; anything comrak produces outside that set is
//! flattened to plain text rather than rejected, so parsing never fails.

use comrak::{
    nodes::{AstNode, ListType as ComrakListType, NodeValue},
    parse_document, Arena, Options,
};

// ─────────────────────────────────────────────────────────────────────────────
// Public Types
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration options for markdown parsing.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// Enable strikethrough syntax (~~text~~)
    pub strikethrough: bool,
    /// Enable autolink URLs and emails
    pub autolink: bool,
    /// Enable task lists (- [ ] and - [x])
    pub tasklist: bool,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            strikethrough: true,
            autolink: true,
            tasklist: true,
        }
    }
}

impl MarkdownOptions {
    /// Convert to comrak Options.
    fn to_comrak_options(&self) -> Options {
        let mut options = Options::default();

        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;

        options
    }
}

/// Heading level (H1-H6)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
    H4 = 4,
    H5 = 5,
    H6 = 6,
}

impl From<u8> for HeadingLevel {
    fn from(level: u8) -> Self {
        match level {
            1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            4 => HeadingLevel::H4,
            5 => HeadingLevel::H5,
            _ => HeadingLevel::H6,
        }
    }
}

/// List type (ordered or unordered)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Bullet,
    Ordered { start: u32 },
}

/// The kind of a markdown node in the card's renderable node set.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Root document node
    Document,
    /// Paragraph
    Paragraph,
    /// Heading (H1-H6)
    Heading(HeadingLevel),
    /// Block quote (>)
    BlockQuote,
    /// List container
    List { list_type: ListType, tight: bool },
    /// List item
    Item,
    /// Task list item with its checked state
    TaskItem { checked: bool },
    /// Code block with optional language tag
    CodeBlock { language: String, literal: String },
    /// Thematic break (horizontal rule)
    ThematicBreak,
    /// Inline text content
    Text(String),
    /// Inline code
    Code(String),
    /// Soft line break
    SoftBreak,
    /// Hard line break
    LineBreak,
    /// Emphasis (italic)
    Emphasis,
    /// Strong emphasis (bold)
    Strong,
    /// Strikethrough
    Strikethrough,
    /// Link
    Link { url: String, title: String },
    /// Image
    Image { url: String, title: String },
    /// Raw HTML block (removed by the sanitizer before rendering)
    HtmlBlock(String),
    /// Raw inline HTML (removed by the sanitizer before rendering)
    HtmlInline(String),
}

/// A node in the markdown tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownNode {
    /// The kind of this node
    pub kind: NodeKind,
    /// Child nodes
    pub children: Vec<MarkdownNode>,
}

impl MarkdownNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Get all text content from this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, output: &mut String) {
        match &self.kind {
            NodeKind::Text(t) => output.push_str(t),
            NodeKind::Code(t) => output.push_str(t),
            NodeKind::SoftBreak => output.push(' '),
            NodeKind::LineBreak => output.push('\n'),
            _ => {}
        }
        for child in &self.children {
            child.collect_text(output);
        }
    }

}

/// A parsed markdown document containing the node tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkdownDocument {
    /// Root node of the tree
    pub root: MarkdownNode,
}

impl MarkdownDocument {
    /// An empty document (what an empty editor renders).
    pub fn empty() -> Self {
        Self {
            root: MarkdownNode::new(NodeKind::Document),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Parse markdown text into a node tree.
///
/// Parsing is tolerant: malformed input never fails, it produces
/// best-effort output.
pub fn parse_markdown(markdown: &str) -> MarkdownDocument {
    parse_markdown_with_options(markdown, &MarkdownOptions::default())
}

/// Parse markdown text with custom options.
pub fn parse_markdown_with_options(
    markdown: &str,
    options: &MarkdownOptions,
) -> MarkdownDocument {
    let arena = Arena::new();
    let comrak_options = options.to_comrak_options();

    let root = parse_document(&arena, markdown, &comrak_options);

    MarkdownDocument {
        root: convert_node(root),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Internal Conversion Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert a comrak AST node to our MarkdownNode structure.
fn convert_node<'a>(node: &'a AstNode<'a>) -> MarkdownNode {
    let ast = node.data.borrow();
    let mut markdown_node = MarkdownNode::new(convert_node_value(&ast.value));

    for child in node.children() {
        markdown_node.children.push(convert_node(child));
    }

    markdown_node
}

/// Convert a comrak NodeValue to our NodeKind.
fn convert_node_value(value: &NodeValue) -> NodeKind {
    match value {
        NodeValue::Document => NodeKind::Document,
        NodeValue::Paragraph => NodeKind::Paragraph,
        NodeValue::Heading(heading) => NodeKind::Heading(HeadingLevel::from(heading.level)),
        NodeValue::BlockQuote => NodeKind::BlockQuote,
        NodeValue::List(list) => {
            let list_type = match list.list_type {
                ComrakListType::Bullet => ListType::Bullet,
                ComrakListType::Ordered => ListType::Ordered {
                    start: list.start as u32,
                },
            };
            NodeKind::List {
                list_type,
                tight: list.tight,
            }
        }
        NodeValue::Item(_) => NodeKind::Item,
        NodeValue::TaskItem(checked) => NodeKind::TaskItem {
            checked: checked.map(|c| c == 'x' || c == 'X').unwrap_or(false),
        },
        NodeValue::CodeBlock(code) => NodeKind::CodeBlock {
            language: code.info.clone(),
            literal: code.literal.clone(),
        },
        NodeValue::ThematicBreak => NodeKind::ThematicBreak,
        NodeValue::Text(text) => NodeKind::Text(text.clone()),
        NodeValue::Code(code) => NodeKind::Code(code.literal.clone()),
        NodeValue::SoftBreak => NodeKind::SoftBreak,
        NodeValue::LineBreak => NodeKind::LineBreak,
        NodeValue::Emph => NodeKind::Emphasis,
        NodeValue::Strong => NodeKind::Strong,
        NodeValue::Strikethrough => NodeKind::Strikethrough,
        NodeValue::Link(link) => NodeKind::Link {
            url: link.url.clone(),
            title: link.title.clone(),
        },
        NodeValue::Image(image) => NodeKind::Image {
            url: image.url.clone(),
            title: image.title.clone(),
        },
        NodeValue::HtmlBlock(html) => NodeKind::HtmlBlock(html.literal.clone()),
        NodeValue::HtmlInline(html) => NodeKind::HtmlInline(html.clone()),
        // Anything outside the card's node set degrades to empty text;
        // its children still convert, so content is not lost
        _ => NodeKind::Text(String::new()),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Basic Parsing Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_empty_document() {
        let doc = parse_markdown("");
        assert!(doc.root.children.is_empty());
    }

    #[test]
    fn test_parse_whitespace_only_document() {
        let doc = parse_markdown("  \n\n   \n");
        assert!(doc.root.children.is_empty());
    }

    #[test]
    fn test_parse_simple_paragraph() {
        let doc = parse_markdown("Hello, world!");
        assert_eq!(doc.root.children.len(), 1);
        assert!(matches!(doc.root.children[0].kind, NodeKind::Paragraph));
    }

    #[test]
    fn test_parse_heading_levels() {
        let doc = parse_markdown("# H1\n\n## H2\n\n### H3");
        let levels: Vec<_> = doc
            .root
            .children
            .iter()
            .filter_map(|n| match n.kind {
                NodeKind::Heading(level) => Some(level),
                _ => None,
            })
            .collect();
        assert_eq!(
            levels,
            vec![HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3]
        );
    }

    #[test]
    fn test_parse_heading_and_bold_paragraph() {
        // The canonical card sample: heading followed by emphasized paragraph
        let doc = parse_markdown("# Hi\n\n**bold**");

        assert_eq!(doc.root.children.len(), 2);
        let heading = &doc.root.children[0];
        assert!(matches!(heading.kind, NodeKind::Heading(HeadingLevel::H1)));
        assert_eq!(heading.text_content(), "Hi");

        let para = &doc.root.children[1];
        assert!(matches!(para.kind, NodeKind::Paragraph));
        let strong = para
            .children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::Strong))
            .expect("paragraph should contain a Strong node");
        assert_eq!(strong.text_content(), "bold");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // List Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_unordered_list() {
        let doc = parse_markdown("- Item 1\n- Item 2\n- Item 3");

        let list = &doc.root.children[0];
        if let NodeKind::List { list_type, .. } = &list.kind {
            assert!(matches!(list_type, ListType::Bullet));
        } else {
            panic!("Expected list node");
        }
        assert_eq!(list.children.len(), 3);
        assert!(matches!(list.children[0].kind, NodeKind::Item));
        assert_eq!(list.children[0].text_content(), "Item 1");
    }

    #[test]
    fn test_parse_ordered_list_start() {
        let doc = parse_markdown("3. Third\n4. Fourth");

        let list = &doc.root.children[0];
        if let NodeKind::List {
            list_type: ListType::Ordered { start },
            ..
        } = &list.kind
        {
            assert_eq!(*start, 3);
        } else {
            panic!("Expected ordered list");
        }
    }

    #[test]
    fn test_parse_task_list() {
        let doc = parse_markdown("- [ ] Unchecked\n- [x] Checked");

        let list = &doc.root.children[0];
        assert_eq!(list.children.len(), 2);
        assert!(matches!(
            list.children[0].kind,
            NodeKind::TaskItem { checked: false }
        ));
        assert!(matches!(
            list.children[1].kind,
            NodeKind::TaskItem { checked: true }
        ));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Inline Element Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_emphasis_variants() {
        let doc = parse_markdown("**bold** and *italic* and ~~gone~~");
        let para = &doc.root.children[0];

        assert!(para
            .children
            .iter()
            .any(|c| matches!(c.kind, NodeKind::Strong)));
        assert!(para
            .children
            .iter()
            .any(|c| matches!(c.kind, NodeKind::Emphasis)));
        assert!(para
            .children
            .iter()
            .any(|c| matches!(c.kind, NodeKind::Strikethrough)));
    }

    #[test]
    fn test_parse_nested_emphasis() {
        // ***bold italic*** produces nested Strong/Emphasis
        let doc = parse_markdown("***bold italic***");
        let para = &doc.root.children[0];
        let first_inline = &para.children[0];
        assert!(matches!(
            first_inline.kind,
            NodeKind::Strong | NodeKind::Emphasis
        ));
        assert!(!first_inline.children.is_empty());
        assert_eq!(doc.root.text_content(), "bold italic");
    }

    #[test]
    fn test_parse_inline_code() {
        let doc = parse_markdown("Use `cargo` inline");
        let para = &doc.root.children[0];
        let code = para
            .children
            .iter()
            .find(|c| matches!(c.kind, NodeKind::Code(_)))
            .expect("expected inline code node");
        assert_eq!(code.text_content(), "cargo");
    }

    #[test]
    fn test_parse_link() {
        let doc = parse_markdown("[site](https://example.com \"A title\")");
        let para = &doc.root.children[0];
        if let NodeKind::Link { url, title } = &para.children[0].kind {
            assert_eq!(url, "https://example.com");
            assert_eq!(title, "A title");
        } else {
            panic!("Expected link node");
        }
    }

    #[test]
    fn test_parse_autolink() {
        let doc = parse_markdown("visit https://example.com today");
        let para = &doc.root.children[0];
        assert!(para
            .children
            .iter()
            .any(|c| matches!(&c.kind, NodeKind::Link { url, .. } if url == "https://example.com")));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Block Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_blockquote() {
        let doc = parse_markdown("> This is a quote");
        assert!(matches!(doc.root.children[0].kind, NodeKind::BlockQuote));
        assert_eq!(doc.root.children[0].text_content(), "This is a quote");
    }

    #[test]
    fn test_parse_code_block_with_language() {
        let doc = parse_markdown("```rust\nfn main() {}\n```");
        if let NodeKind::CodeBlock { language, literal } = &doc.root.children[0].kind {
            assert_eq!(language, "rust");
            assert_eq!(literal, "fn main() {}\n");
        } else {
            panic!("Expected code block");
        }
    }

    #[test]
    fn test_parse_thematic_break() {
        let doc = parse_markdown("Before\n\n---\n\nAfter");
        assert!(doc
            .root
            .children
            .iter()
            .any(|n| matches!(n.kind, NodeKind::ThematicBreak)));
    }

    #[test]
    fn test_parse_raw_html_preserved_for_sanitizer() {
        let doc = parse_markdown("<script>alert(1)</script>\n\ntext with <b onclick=\"x()\">html</b>");
        assert!(doc
            .root
            .children
            .iter()
            .any(|n| matches!(n.kind, NodeKind::HtmlBlock(_))));

        let para = doc
            .root
            .children
            .iter()
            .find(|n| matches!(n.kind, NodeKind::Paragraph))
            .unwrap();
        assert!(para
            .children
            .iter()
            .any(|c| matches!(c.kind, NodeKind::HtmlInline(_))));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tolerance Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_malformed_markdown_never_fails() {
        // Comrak is very permissive - even "malformed" markdown parses.
        let inputs = [
            "# Unclosed heading",
            "```\nunclosed code block",
            "[unclosed link(",
            "![broken image",
            "***nested emphasis**",
            "> > > deep quote\n>>broken",
        ];

        for input in inputs {
            let doc = parse_markdown(input);
            assert!(!doc.root.children.is_empty(), "No output for: {}", input);
        }
    }

    #[test]
    fn test_text_content_walks_tree() {
        let doc = parse_markdown("Hello **world**!");
        let text = doc.root.text_content();
        assert!(text.contains("Hello"));
        assert!(text.contains("world"));
    }
}
