//! Clipboard Operations for Card Export
//!
//! Cross-platform clipboard functionality for copying the rendered card:
//! either as HTML (pasteable into email clients and word processors) or as
//! a bitmap, using the arboard crate.

use crate::error::Result;
use crate::export::html::render_body;
use crate::markdown::MarkdownDocument;
use arboard::{Clipboard, ImageData};
use image::RgbaImage;
use log::debug;
use std::borrow::Cow;

/// Copy the card content to the clipboard as HTML.
///
/// The HTML fragment is rendered from the sanitized node tree; the plain
/// text content rides along as the alt representation for targets that do
/// not accept HTML.
pub fn copy_html_to_clipboard(document: &MarkdownDocument) -> Result<()> {
    let html = render_body(document);
    let alt_text = document.root.text_content();

    let mut clipboard = Clipboard::new()?;
    clipboard.set_html(html, Some(alt_text))?;
    debug!("Copied card HTML to clipboard");
    Ok(())
}

/// Copy a card bitmap to the clipboard.
pub fn copy_image_to_clipboard(card: &RgbaImage) -> Result<()> {
    let data = ImageData {
        width: card.width() as usize,
        height: card.height() as usize,
        bytes: Cow::Borrowed(card.as_raw().as_slice()),
    };

    let mut clipboard = Clipboard::new()?;
    clipboard.set_image(data)?;
    debug!(
        "Copied {}x{} card bitmap to clipboard",
        card.width(),
        card.height()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::{parse_markdown, sanitize_tree};

    // Clipboard access is unavailable on headless CI, so tests cover the
    // payload construction rather than the clipboard round trip.

    #[test]
    fn test_html_payload_matches_tree() {
        let mut doc = parse_markdown("# Hi\n\n**bold**");
        sanitize_tree(&mut doc.root);

        let html = render_body(&doc);
        assert!(html.contains("<h1>Hi</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_image_payload_dimensions() {
        let card = RgbaImage::from_pixel(8, 4, image::Rgba([9, 9, 9, 255]));
        let data = ImageData {
            width: card.width() as usize,
            height: card.height() as usize,
            bytes: Cow::Borrowed(card.as_raw().as_slice()),
        };
        assert_eq!(data.width, 8);
        assert_eq!(data.height, 4);
        assert_eq!(data.bytes.len(), 8 * 4 * 4);
    }
}
