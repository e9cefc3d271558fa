//! HTML Export Generation
//!
//! Generates a standalone, scheme-styled HTML document for the card from
//! the sanitized node tree. The body is rendered structurally from the
//! tree with all text escaped; raw HTML nodes are never emitted, so the
//! output cannot carry script content even if a node slipped past the
//! sanitizer.

use crate::markdown::{HeadingLevel, ListType, MarkdownDocument, MarkdownNode, NodeKind};
use crate::scheme::ColorScheme;
use eframe::egui::Color32;

// ─────────────────────────────────────────────────────────────────────────────
// Document Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate a complete HTML document for the card.
///
/// # Arguments
///
/// * `document` - The sanitized node tree
/// * `signature` - Signature text shown in the pill under the content
/// * `scheme` - Color scheme applied to the card
/// * `title` - Optional document title
pub fn generate_card_document(
    document: &MarkdownDocument,
    signature: &str,
    scheme: ColorScheme,
    title: Option<&str>,
) -> String {
    let body = render_body(document);
    let css = generate_scheme_css(scheme);
    let doc_title = title.unwrap_or("Postcraft card");

    let signature_html = if signature.is_empty() {
        String::new()
    } else {
        format!(
            "        <div class=\"signature\"><span>{}</span></div>\n",
            html_escape(signature)
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="generator" content="Postcraft">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <div class="card">
        <div class="content">
{body}        </div>
{signature_html}    </div>
</body>
</html>"#,
        title = html_escape(doc_title),
        css = css,
        body = body,
        signature_html = signature_html,
    )
}

/// Render the card body as an HTML fragment (used for clipboard HTML).
pub fn render_body(document: &MarkdownDocument) -> String {
    let mut out = String::new();
    for child in &document.root.children {
        render_node(child, &mut out);
    }
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Node Rendering
// ─────────────────────────────────────────────────────────────────────────────

fn render_children(node: &MarkdownNode, out: &mut String) {
    for child in &node.children {
        render_node(child, out);
    }
}

fn render_node(node: &MarkdownNode, out: &mut String) {
    match &node.kind {
        NodeKind::Document => render_children(node, out),
        NodeKind::Paragraph => {
            out.push_str("<p>");
            render_children(node, out);
            out.push_str("</p>\n");
        }
        NodeKind::Heading(level) => {
            let n = heading_tag(*level);
            out.push_str(&format!("<h{}>", n));
            render_children(node, out);
            out.push_str(&format!("</h{}>\n", n));
        }
        NodeKind::BlockQuote => {
            out.push_str("<blockquote>\n");
            render_children(node, out);
            out.push_str("</blockquote>\n");
        }
        NodeKind::List { list_type, .. } => match list_type {
            ListType::Bullet => {
                out.push_str("<ul>\n");
                render_children(node, out);
                out.push_str("</ul>\n");
            }
            ListType::Ordered { start } => {
                if *start == 1 {
                    out.push_str("<ol>\n");
                } else {
                    out.push_str(&format!("<ol start=\"{}\">\n", start));
                }
                render_children(node, out);
                out.push_str("</ol>\n");
            }
        },
        NodeKind::Item => {
            out.push_str("<li>");
            render_tight_item(node, out);
            out.push_str("</li>\n");
        }
        NodeKind::TaskItem { checked } => {
            let mark = if *checked { "☑" } else { "☐" };
            out.push_str(&format!("<li class=\"task\">{} ", mark));
            render_tight_item(node, out);
            out.push_str("</li>\n");
        }
        NodeKind::CodeBlock { language, literal } => {
            if language.is_empty() {
                out.push_str("<pre><code>");
            } else {
                out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    html_escape(language)
                ));
            }
            out.push_str(&html_escape(literal));
            out.push_str("</code></pre>\n");
        }
        NodeKind::ThematicBreak => out.push_str("<hr />\n"),
        NodeKind::Text(text) => out.push_str(&html_escape(text)),
        NodeKind::Code(literal) => {
            out.push_str("<code>");
            out.push_str(&html_escape(literal));
            out.push_str("</code>");
        }
        NodeKind::SoftBreak => out.push(' '),
        NodeKind::LineBreak => out.push_str("<br />\n"),
        NodeKind::Emphasis => {
            out.push_str("<em>");
            render_children(node, out);
            out.push_str("</em>");
        }
        NodeKind::Strong => {
            out.push_str("<strong>");
            render_children(node, out);
            out.push_str("</strong>");
        }
        NodeKind::Strikethrough => {
            out.push_str("<del>");
            render_children(node, out);
            out.push_str("</del>");
        }
        NodeKind::Link { url, .. } => {
            if url.is_empty() {
                // Destination was neutralized by the sanitizer
                render_children(node, out);
            } else {
                out.push_str(&format!("<a href=\"{}\">", html_escape(url)));
                render_children(node, out);
                out.push_str("</a>");
            }
        }
        NodeKind::Image { url, .. } => {
            let alt = html_escape(&node.text_content());
            if url.is_empty() {
                out.push_str(&alt);
            } else {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\" />",
                    html_escape(url),
                    alt
                ));
            }
        }
        // Raw HTML is never emitted, sanitized or not
        NodeKind::HtmlBlock(_) | NodeKind::HtmlInline(_) => {}
    }
}

/// List items wrap their single tight paragraph inline; anything more
/// structured renders as-is.
fn render_tight_item(item: &MarkdownNode, out: &mut String) {
    match item.children.as_slice() {
        [only] if matches!(only.kind, NodeKind::Paragraph) => render_children(only, out),
        _ => render_children(item, out),
    }
}

fn heading_tag(level: HeadingLevel) -> u8 {
    level as u8
}

// ─────────────────────────────────────────────────────────────────────────────
// CSS Generation
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the scheme-specific card CSS.
fn generate_scheme_css(scheme: ColorScheme) -> String {
    let styles = scheme.styles();

    format!(
        r#"body {{
    margin: 0;
    padding: 40px 0;
    background: #f6f4f2;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Noto Sans', Helvetica, Arial, sans-serif;
    font-size: 16px;
    line-height: 1.6;
}}

.card {{
    position: relative;
    width: 400px;
    min-height: 500px;
    margin: 0 auto;
    padding: 32px;
    box-sizing: border-box;
    border-radius: 24px;
    border: 1.5px solid {accent};
    background:
        radial-gradient(circle at 78% 20%, {blob1} 0, transparent 22%),
        radial-gradient(circle at 20% 80%, {blob2} 0, transparent 18%),
        radial-gradient(circle at 50% 50%, {blob3} 0, transparent 30%),
        linear-gradient(160deg, {grad_top}, {grad_mid}, {grad_bottom});
    color: {text};
    display: flex;
    flex-direction: column;
}}

.card .content {{
    flex: 1;
}}

.card h1 {{ color: {h1}; font-size: 1.6em; margin: 0.5em 0 0.4em; }}
.card h2 {{ color: {h2}; font-size: 1.35em; margin: 0.5em 0 0.35em; }}
.card h3, .card h4, .card h5, .card h6 {{ color: {h3}; font-size: 1.15em; margin: 0.5em 0 0.3em; }}

.card p {{ margin: 0 0 0.6em; }}

.card strong {{ color: {strong}; }}

.card blockquote {{
    margin: 0 0 0.7em;
    padding: 0.5em 0.7em 0.5em 1em;
    border-left: 4px solid {bq_border};
    border-radius: 6px;
    background: {bq_bg};
    color: {bq_text};
}}

.card code {{
    font-family: 'JetBrains Mono', 'Fira Code', 'Consolas', 'Monaco', monospace;
    font-size: 0.85em;
    padding: 0.15em 0.35em;
    border-radius: 4px;
    background: {code_bg};
    color: {code_text};
}}

.card pre {{
    margin: 0 0 0.7em;
    padding: 10px;
    border-radius: 6px;
    overflow: auto;
    background: {code_bg};
}}

.card pre code {{ padding: 0; background: transparent; }}

.card ul, .card ol {{ margin: 0 0 0.6em; padding-left: 1.4em; }}
.card li {{ margin-bottom: 0.25em; }}
.card li::marker {{ color: {accent}; }}
.card li.task {{ list-style: none; margin-left: -1.2em; }}

.card a {{ color: {h2}; }}

.card hr {{
    height: 2px;
    border: none;
    border-radius: 1px;
    margin: 0.8em 0;
    background: {accent};
    opacity: 0.5;
}}

.card img {{ max-width: 100%; border-radius: 6px; }}

.card .signature {{
    margin-top: 24px;
    text-align: center;
}}

.card .signature span {{
    display: inline-block;
    padding: 6px 14px;
    font-size: 0.8em;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.6);
    color: {text};
}}"#,
        accent = color32_to_css(styles.border_accent),
        blob1 = color32_to_css_alpha(styles.decoration.blob1, 0.16),
        blob2 = color32_to_css_alpha(styles.decoration.blob2, 0.14),
        blob3 = color32_to_css_alpha(styles.decoration.blob3, 0.12),
        grad_top = color32_to_css(styles.gradient.top),
        grad_mid = color32_to_css(styles.gradient.mid),
        grad_bottom = color32_to_css(styles.gradient.bottom),
        text = color32_to_css(styles.text),
        h1 = color32_to_css(styles.heading.h1),
        h2 = color32_to_css(styles.heading.h2),
        h3 = color32_to_css(styles.heading.h3),
        strong = color32_to_css(styles.strong),
        bq_border = color32_to_css(styles.blockquote.border),
        bq_bg = color32_to_css(styles.blockquote.background),
        bq_text = color32_to_css(styles.blockquote.text),
        code_bg = color32_to_css(styles.code.background),
        code_text = color32_to_css(styles.code.text),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Utility Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert Color32 to a CSS color string.
fn color32_to_css(color: Color32) -> String {
    format!("rgb({}, {}, {})", color.r(), color.g(), color.b())
}

/// Convert Color32 to a CSS rgba() string with the given opacity.
fn color32_to_css_alpha(color: Color32, alpha: f32) -> String {
    format!(
        "rgba({}, {}, {}, {:.2})",
        color.r(),
        color.g(),
        color.b(),
        alpha
    )
}

/// HTML-escape a string.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{parse_markdown, sanitize_tree};

    fn sanitized(markdown: &str) -> MarkdownDocument {
        let mut doc = parse_markdown(markdown);
        sanitize_tree(&mut doc.root);
        doc
    }

    #[test]
    fn test_render_heading_and_strong() {
        let doc = sanitized("# Hi\n\n**bold**");
        let body = render_body(&doc);

        assert!(body.contains("<h1>Hi</h1>"));
        assert!(body.contains("<p><strong>bold</strong></p>"));
    }

    #[test]
    fn test_render_list_and_quote() {
        let doc = sanitized("- one\n- two\n\n> quoted");
        let body = render_body(&doc);

        assert!(body.contains("<ul>"));
        assert!(body.contains("<li>one</li>"));
        assert!(body.contains("<blockquote>"));
        assert!(body.contains("quoted"));
    }

    #[test]
    fn test_render_ordered_list_start() {
        let doc = sanitized("3. three\n4. four");
        let body = render_body(&doc);
        assert!(body.contains("<ol start=\"3\">"));
    }

    #[test]
    fn test_script_never_reaches_output() {
        let doc = sanitized("# ok\n\n<script>alert('x')</script>\n\n<b onclick=\"y()\">hi</b>");
        let body = render_body(&doc);

        assert!(!body.contains("<script"));
        assert!(!body.contains("onclick"));
        assert!(!body.contains("alert"));
    }

    #[test]
    fn test_unsafe_link_degrades_to_text() {
        let doc = sanitized("[click](javascript:alert(1))");
        let body = render_body(&doc);

        assert!(!body.contains("javascript:"));
        assert!(!body.contains("<a "));
        assert!(body.contains("click"));
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = sanitized("a < b & c > d");
        let body = render_body(&doc);
        assert!(body.contains("a &lt; b &amp; c &gt; d"));
    }

    #[test]
    fn test_code_block_escaped_with_language() {
        let doc = sanitized("```html\n<div>&</div>\n```");
        let body = render_body(&doc);
        assert!(body.contains("<pre><code class=\"language-html\">"));
        assert!(body.contains("&lt;div&gt;&amp;&lt;/div&gt;"));
    }

    #[test]
    fn test_empty_document_renders_empty_body() {
        let doc = sanitized("");
        assert!(render_body(&doc).is_empty());
    }

    #[test]
    fn test_generate_card_document_structure() {
        let doc = sanitized("# Title");
        let html =
            generate_card_document(&doc, "Made with Postcraft", ColorScheme::OceanBlue, None);

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<div class=\"card\">"));
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("Made with Postcraft"));
        assert!(html.contains("linear-gradient"));
        // Ocean blue H1 token
        assert!(html.contains("rgb(29, 78, 216)"));
    }

    #[test]
    fn test_empty_signature_has_no_pill() {
        let doc = sanitized("text");
        let html = generate_card_document(&doc, "", ColorScheme::CherryBlossom, None);
        assert!(!html.contains("class=\"signature\""));
    }

    #[test]
    fn test_title_is_escaped() {
        let doc = sanitized("text");
        let html = generate_card_document(
            &doc,
            "",
            ColorScheme::CherryBlossom,
            Some("<script>t</script>"),
        );
        assert!(html.contains("<title>&lt;script&gt;t&lt;/script&gt;</title>"));
    }

    #[test]
    fn test_hard_break_renders_br() {
        let doc = sanitized("one  \ntwo");
        let body = render_body(&doc);
        assert!(body.contains("<br />"));
    }
}
