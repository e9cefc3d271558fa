//! Node-level sanitization for parsed markdown trees
//!
//! Raw HTML never reaches the preview or any export surface: block and
//! inline HTML nodes are removed from the tree outright, and link/image
//! destinations with script-capable protocols are neutralized. Because the
//! card renders the tree through native widgets, there is no string-level
//! injection surface left after this pass.

use crate::markdown::{MarkdownNode, NodeKind};
use log::debug;

/// URL schemes a card is allowed to reference.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Sanitize a node tree in place.
///
/// Removes `HtmlBlock`/`HtmlInline` nodes and clears unsafe link/image
/// destinations (the node's children survive, so link text still renders
/// as plain text). Returns the number of nodes and URLs neutralized.
pub fn sanitize_tree(node: &mut MarkdownNode) -> usize {
    let mut removed = 0;

    node.children.retain(|child| {
        let keep = !matches!(
            child.kind,
            NodeKind::HtmlBlock(_) | NodeKind::HtmlInline(_)
        );
        if !keep {
            removed += 1;
        }
        keep
    });

    match &mut node.kind {
        NodeKind::Link { url, .. } | NodeKind::Image { url, .. } => {
            if !is_safe_url(url) {
                debug!("Neutralizing unsafe URL in card content: {:?}", url);
                url.clear();
                removed += 1;
            }
        }
        _ => {}
    }

    for child in &mut node.children {
        removed += sanitize_tree(child);
    }

    removed
}

/// Check whether a URL is safe to keep on a link or image node.
///
/// Relative URLs and fragment links are fine; absolute URLs must use one of
/// the allowed schemes. Whitespace and control characters are ignored when
/// detecting the scheme, since they do not stop a browser from honoring
/// `java\nscript:` style payloads.
pub fn is_safe_url(url: &str) -> bool {
    let compact: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();

    let Some(colon) = compact.find(':') else {
        // No scheme at all: relative path or fragment
        return true;
    };

    // A colon after a path separator is not a scheme delimiter ("./a:b")
    if let Some(slash) = compact.find(['/', '?', '#']) {
        if slash < colon {
            return true;
        }
    }

    let scheme = compact[..colon].to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parse_markdown;

    fn tree_has_html(node: &MarkdownNode) -> bool {
        if matches!(node.kind, NodeKind::HtmlBlock(_) | NodeKind::HtmlInline(_)) {
            return true;
        }
        node.children.iter().any(tree_has_html)
    }

    fn collect_urls(node: &MarkdownNode, out: &mut Vec<String>) {
        if let NodeKind::Link { url, .. } | NodeKind::Image { url, .. } = &node.kind {
            out.push(url.clone());
        }
        for child in &node.children {
            collect_urls(child, out);
        }
    }

    #[test]
    fn test_script_block_is_stripped() {
        let mut doc = parse_markdown("# Title\n\n<script>alert('xss')</script>\n\nSafe text");
        let removed = sanitize_tree(&mut doc.root);

        assert!(removed >= 1);
        assert!(!tree_has_html(&doc.root));
        // Surrounding content survives
        let text = doc.root.text_content();
        assert!(text.contains("Title"));
        assert!(text.contains("Safe text"));
        assert!(!text.contains("alert"));
    }

    #[test]
    fn test_inline_event_handler_html_is_stripped() {
        let mut doc = parse_markdown("click <a onclick=\"evil()\">here</a> now");
        sanitize_tree(&mut doc.root);

        assert!(!tree_has_html(&doc.root));
        let text = doc.root.text_content();
        assert!(!text.contains("onclick"));
        assert!(!text.contains("evil"));
    }

    #[test]
    fn test_javascript_link_is_neutralized() {
        let mut doc = parse_markdown("[click me](javascript:alert(1))");
        sanitize_tree(&mut doc.root);

        let mut urls = Vec::new();
        collect_urls(&doc.root, &mut urls);
        assert_eq!(urls, vec![String::new()]);
        // The link text is still there as content
        assert_eq!(doc.root.text_content(), "click me");
    }

    #[test]
    fn test_https_link_survives() {
        let mut doc = parse_markdown("[site](https://example.com)");
        let removed = sanitize_tree(&mut doc.root);

        assert_eq!(removed, 0);
        let mut urls = Vec::new();
        collect_urls(&doc.root, &mut urls);
        assert_eq!(urls, vec!["https://example.com".to_string()]);
    }

    #[test]
    fn test_clean_tree_reports_zero() {
        let mut doc = parse_markdown("# Hi\n\n**bold** and a [link](https://a.b)\n\n> quote");
        assert_eq!(sanitize_tree(&mut doc.root), 0);
    }

    #[test]
    fn test_is_safe_url_schemes() {
        assert!(is_safe_url("https://example.com"));
        assert!(is_safe_url("http://example.com"));
        assert!(is_safe_url("mailto:hi@example.com"));
        assert!(is_safe_url("relative/path.png"));
        assert!(is_safe_url("#fragment"));
        assert!(is_safe_url("./a:b"));

        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("JAVASCRIPT:alert(1)"));
        assert!(!is_safe_url("vbscript:msgbox"));
        assert!(!is_safe_url("data:text/html,<script>1</script>"));
    }

    #[test]
    fn test_is_safe_url_ignores_embedded_whitespace() {
        assert!(!is_safe_url("java\nscript:alert(1)"));
        assert!(!is_safe_url("  javascript:alert(1)"));
        assert!(!is_safe_url("java\tscript:alert(1)"));
    }
}
