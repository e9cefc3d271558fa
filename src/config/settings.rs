//! User settings and preferences for Postcraft
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence. The Markdown document and
//! the signature are deliberately absent: both are ephemeral, in-memory state.

use crate::scheme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Window Size Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Window dimensions and position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    /// Window width in pixels
    pub width: f32,
    /// Window height in pixels
    pub height: f32,
    /// Window X position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f32>,
    /// Window Y position (optional, for restoring position)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f32>,
    /// Whether the window was maximized
    #[serde(default)]
    pub maximized: bool,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 760.0,
            x: None,
            y: None,
            maximized: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences and application settings.
///
/// This struct is serialized to JSON and persisted to the user's config directory.
/// All fields have sensible defaults via the `Default` trait and `#[serde(default)]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Card Appearance
    // ─────────────────────────────────────────────────────────────────────────
    /// Last selected color scheme for the preview card
    pub color_scheme: ColorScheme,

    // ─────────────────────────────────────────────────────────────────────────
    // Window State
    // ─────────────────────────────────────────────────────────────────────────
    /// Window size and position
    pub window_size: WindowSize,

    // ─────────────────────────────────────────────────────────────────────────
    // Export Settings
    // ─────────────────────────────────────────────────────────────────────────
    /// Last directory used for image/HTML export
    pub last_export_directory: Option<PathBuf>,

    /// Whether to open exported files after export
    pub open_after_export: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            window_size: WindowSize::default(),
            last_export_directory: None,
            open_after_export: false,
        }
    }
}

impl Settings {
    /// Minimum window dimension.
    pub const MIN_WINDOW_SIZE: f32 = 400.0;
    /// Maximum window dimension.
    pub const MAX_WINDOW_SIZE: f32 = 10000.0;

    /// Sanitize settings by clamping values to valid ranges.
    ///
    /// This is useful after loading settings from a file that might have
    /// been manually edited with invalid values.
    pub fn sanitize(&mut self) {
        self.window_size.width = self
            .window_size
            .width
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);
        self.window_size.height = self
            .window_size
            .height
            .clamp(Self::MIN_WINDOW_SIZE, Self::MAX_WINDOW_SIZE);

        // Drop a remembered export directory that no longer exists
        if let Some(dir) = &self.last_export_directory {
            if !dir.is_dir() {
                self.last_export_directory = None;
            }
        }
    }

    /// Load settings and sanitize them to ensure validity.
    ///
    /// This is a convenience method that deserializes and then sanitizes.
    pub fn from_json_sanitized(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.color_scheme, ColorScheme::CherryBlossom);
        assert!(!settings.open_after_export);
        assert!(settings.last_export_directory.is_none());
    }

    #[test]
    fn test_window_size_default() {
        let size = WindowSize::default();
        assert!(size.width > 0.0);
        assert!(size.height > 0.0);
        assert!(!size.maximized);
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut settings = Settings::default();
        settings.color_scheme = ColorScheme::OceanBlue;
        settings.open_after_export = true;

        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, restored);
    }

    #[test]
    fn test_sanitize_clamps_window_size() {
        let mut settings = Settings::default();
        settings.window_size.width = 1.0;
        settings.window_size.height = 99999.0;
        settings.sanitize();

        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, Settings::MAX_WINDOW_SIZE);
    }

    #[test]
    fn test_sanitize_drops_missing_export_dir() {
        let mut settings = Settings::default();
        settings.last_export_directory = Some(PathBuf::from("/definitely/not/a/real/dir"));
        settings.sanitize();
        assert!(settings.last_export_directory.is_none());
    }

    #[test]
    fn test_from_json_sanitized() {
        let json = r#"{"window_size": {"width": 10.0, "height": 600.0}}"#;
        let settings = Settings::from_json_sanitized(json).unwrap();
        assert_eq!(settings.window_size.width, Settings::MIN_WINDOW_SIZE);
        assert_eq!(settings.window_size.height, 600.0);
    }

    #[test]
    fn test_unknown_scheme_id_falls_back_in_json() {
        // serde(other) on ColorScheme maps unknown identifiers to the default
        let json = r#"{"color_scheme": "neon-void"}"#;
        let settings = Settings::from_json_sanitized(json).unwrap();
        assert_eq!(settings.color_scheme, ColorScheme::CherryBlossom);
    }
}
