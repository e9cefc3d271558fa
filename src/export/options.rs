//! Export Options and Configuration
//!
//! This module defines the export formats, output constants, and file
//! naming for card export functionality.

// Allow dead code - this module provides the complete export API; some
// format accessors are only exercised by the UI variants that need them
#![allow(dead_code)]

use crate::config::Settings;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

// ─────────────────────────────────────────────────────────────────────────────
// Output Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Pixel density multiplier for exported cards.
pub const EXPORT_SCALE: f32 = 2.0;

/// Output width of exported cards in pixels (the 400-point card at 2x).
pub const EXPORT_PIXEL_WIDTH: u32 = 800;

/// Prefix for exported file names.
pub const FILE_PREFIX: &str = "postcraft-post";

// ─────────────────────────────────────────────────────────────────────────────
// Export Format
// ─────────────────────────────────────────────────────────────────────────────

/// Supported export targets for the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Save the card as a PNG file
    #[default]
    PngFile,
    /// Save the card as a standalone HTML document
    HtmlFile,
    /// Copy the card bitmap to the clipboard
    ClipboardImage,
    /// Copy the card as HTML to the clipboard
    ClipboardHtml,
}

impl ExportFormat {
    /// Get the display label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::PngFile => "Download PNG",
            ExportFormat::HtmlFile => "Save as HTML",
            ExportFormat::ClipboardImage => "Copy Image",
            ExportFormat::ClipboardHtml => "Copy as HTML",
        }
    }

    /// Get the file extension for this format (if applicable).
    pub fn extension(&self) -> Option<&'static str> {
        match self {
            ExportFormat::PngFile => Some("png"),
            ExportFormat::HtmlFile => Some("html"),
            ExportFormat::ClipboardImage | ExportFormat::ClipboardHtml => None,
        }
    }

    /// Get an icon for this format.
    pub fn icon(&self) -> &'static str {
        match self {
            ExportFormat::PngFile => "📥",
            ExportFormat::HtmlFile => "🌐",
            ExportFormat::ClipboardImage => "🖼",
            ExportFormat::ClipboardHtml => "📋",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Naming
// ─────────────────────────────────────────────────────────────────────────────

/// Milliseconds since the Unix epoch, used as the unique file name suffix.
pub fn unix_timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// File name for a PNG export: `postcraft-post-<unix-ms>.png`.
pub fn png_file_name(timestamp_ms: u128) -> String {
    format!("{}-{}.png", FILE_PREFIX, timestamp_ms)
}

/// File name for an HTML export: `postcraft-post-<unix-ms>.html`.
pub fn html_file_name(timestamp_ms: u128) -> String {
    format!("{}-{}.html", FILE_PREFIX, timestamp_ms)
}

/// Directory the save dialog starts in: the remembered export directory,
/// the platform Downloads folder, or the home directory, in that order.
pub fn default_export_directory(settings: &Settings) -> PathBuf {
    settings
        .last_export_directory
        .clone()
        .filter(|dir| dir.is_dir())
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_file_name_pattern() {
        let name = png_file_name(1722945600123);
        assert_eq!(name, "postcraft-post-1722945600123.png");
    }

    #[test]
    fn test_html_file_name_pattern() {
        let name = html_file_name(7);
        assert_eq!(name, "postcraft-post-7.html");
    }

    #[test]
    fn test_file_names_unique_per_timestamp() {
        assert_ne!(png_file_name(1), png_file_name(2));
    }

    #[test]
    fn test_timestamp_is_monotonic_enough() {
        let a = unix_timestamp_ms();
        let b = unix_timestamp_ms();
        assert!(b >= a);
        // Sanity: we are well past 2020
        assert!(a > 1_577_836_800_000);
    }

    #[test]
    fn test_export_scale_matches_pixel_width() {
        assert_eq!(
            (crate::preview::CARD_WIDTH * EXPORT_SCALE) as u32,
            EXPORT_PIXEL_WIDTH
        );
    }

    #[test]
    fn test_format_labels_and_extensions() {
        assert_eq!(ExportFormat::PngFile.extension(), Some("png"));
        assert_eq!(ExportFormat::HtmlFile.extension(), Some("html"));
        assert_eq!(ExportFormat::ClipboardImage.extension(), None);
        assert!(!ExportFormat::ClipboardHtml.label().is_empty());
    }

    #[test]
    fn test_default_export_directory_ignores_missing_dir() {
        let mut settings = Settings::default();
        settings.last_export_directory = Some(PathBuf::from("/no/such/dir/here"));
        let dir = default_export_directory(&settings);
        assert_ne!(dir, PathBuf::from("/no/such/dir/here"));
    }

    #[test]
    fn test_default_export_directory_uses_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.last_export_directory = Some(tmp.path().to_path_buf());
        assert_eq!(default_export_directory(&settings), tmp.path());
    }
}
