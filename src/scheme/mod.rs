//! Color scheme catalog for the preview card
//!
//! A closed catalog of named schemes, each selecting a fixed bundle of
//! presentation values: background gradient stops, heading colors, body and
//! strong text colors, blockquote and inline-code tokens, three decorative
//! blob colors, and a border accent. The lookup is a total function over the
//! catalog with a cherry-blossom fallback for unrecognized identifiers; there
//! are no user-defined schemes and no runtime mutation.

// Allow dead code - this module carries the complete catalog API (identifier
// lookups, per-token accessors) even where the UI reaches tokens directly
#![allow(dead_code)]

use eframe::egui::Color32;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Scheme Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// The fixed catalog of color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    MintGreen,
    SunsetOrange,
    OceanBlue,
    VioletPurple,
    MilkTea,
    MorandiGray,
    ChampagneGold,
    SageGreen,
    DustyRose,
    MidnightBlue,
    LavenderMist,
    /// Fallback for any unrecognized identifier
    #[default]
    #[serde(other)]
    CherryBlossom,
}

impl ColorScheme {
    /// All schemes, in picker order.
    pub fn all() -> &'static [ColorScheme] {
        &[
            ColorScheme::CherryBlossom,
            ColorScheme::MintGreen,
            ColorScheme::SunsetOrange,
            ColorScheme::OceanBlue,
            ColorScheme::VioletPurple,
            ColorScheme::MilkTea,
            ColorScheme::MorandiGray,
            ColorScheme::ChampagneGold,
            ColorScheme::SageGreen,
            ColorScheme::DustyRose,
            ColorScheme::MidnightBlue,
            ColorScheme::LavenderMist,
        ]
    }

    /// The stable identifier used in config files and lookups.
    pub fn id(&self) -> &'static str {
        match self {
            ColorScheme::CherryBlossom => "cherry-blossom",
            ColorScheme::MintGreen => "mint-green",
            ColorScheme::SunsetOrange => "sunset-orange",
            ColorScheme::OceanBlue => "ocean-blue",
            ColorScheme::VioletPurple => "violet-purple",
            ColorScheme::MilkTea => "milk-tea",
            ColorScheme::MorandiGray => "morandi-gray",
            ColorScheme::ChampagneGold => "champagne-gold",
            ColorScheme::SageGreen => "sage-green",
            ColorScheme::DustyRose => "dusty-rose",
            ColorScheme::MidnightBlue => "midnight-blue",
            ColorScheme::LavenderMist => "lavender-mist",
        }
    }

    /// Resolve an identifier, falling back to cherry-blossom for anything
    /// outside the catalog. This keeps the mapping total.
    pub fn from_id(id: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|scheme| scheme.id() == id)
            .unwrap_or_default()
    }

    /// Human-readable name for the picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            ColorScheme::CherryBlossom => "Cherry Blossom",
            ColorScheme::MintGreen => "Mint Green",
            ColorScheme::SunsetOrange => "Sunset Orange",
            ColorScheme::OceanBlue => "Ocean Blue",
            ColorScheme::VioletPurple => "Violet Purple",
            ColorScheme::MilkTea => "Milk Tea",
            ColorScheme::MorandiGray => "Morandi Gray",
            ColorScheme::ChampagneGold => "Champagne Gold",
            ColorScheme::SageGreen => "Sage Green",
            ColorScheme::DustyRose => "Dusty Rose",
            ColorScheme::MidnightBlue => "Midnight Blue",
            ColorScheme::LavenderMist => "Lavender Mist",
        }
    }

    /// One-line mood description shown under the name in the picker.
    pub fn mood(&self) -> &'static str {
        match self {
            ColorScheme::CherryBlossom => "Soft and romantic",
            ColorScheme::MintGreen => "Fresh and natural",
            ColorScheme::SunsetOrange => "Warm and lively",
            ColorScheme::OceanBlue => "Calm and professional",
            ColorScheme::VioletPurple => "Elegant and dreamy",
            ColorScheme::MilkTea => "Cozy and comforting",
            ColorScheme::MorandiGray => "Muted and modern",
            ColorScheme::ChampagneGold => "Festive and refined",
            ColorScheme::SageGreen => "Gentle and earthy",
            ColorScheme::DustyRose => "Vintage and tender",
            ColorScheme::MidnightBlue => "Deep and composed",
            ColorScheme::LavenderMist => "Airy and serene",
        }
    }

    /// Look up the style bundle for this scheme.
    pub fn styles(&self) -> SchemeStyles {
        SchemeStyles::for_scheme(*self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Style Bundle
// ─────────────────────────────────────────────────────────────────────────────

/// Background gradient stops, painted top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStops {
    pub top: Color32,
    pub mid: Color32,
    pub bottom: Color32,
}

/// Heading colors per level; H4-H6 reuse the H3 token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingColors {
    pub h1: Color32,
    pub h2: Color32,
    pub h3: Color32,
}

impl HeadingColors {
    /// Color for a given heading level (1-based).
    pub fn for_level(&self, level: u8) -> Color32 {
        match level {
            1 => self.h1,
            2 => self.h2,
            _ => self.h3,
        }
    }
}

/// Blockquote presentation tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockquoteColors {
    pub border: Color32,
    pub background: Color32,
    pub text: Color32,
}

/// Inline/block code presentation tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeColors {
    pub background: Color32,
    pub text: Color32,
}

/// The three decorative blob colors painted behind the card content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorationColors {
    pub blob1: Color32,
    pub blob2: Color32,
    pub blob3: Color32,
}

/// The complete style bundle for one scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeStyles {
    /// Card background gradient
    pub gradient: GradientStops,
    /// Heading colors (H1-H3; deeper levels reuse H3)
    pub heading: HeadingColors,
    /// Body text color
    pub text: Color32,
    /// Strong (bold) text color
    pub strong: Color32,
    /// Blockquote tokens
    pub blockquote: BlockquoteColors,
    /// Inline and block code tokens
    pub code: CodeColors,
    /// Decorative blob colors
    pub decoration: DecorationColors,
    /// Border/corner accent color
    pub border_accent: Color32,
}

impl SchemeStyles {
    /// Total lookup from scheme to style bundle.
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::CherryBlossom => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(252, 231, 243),    // pink
                    mid: Color32::from_rgb(250, 245, 255),    // purple tint
                    bottom: Color32::from_rgb(224, 231, 255), // indigo
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(190, 24, 93),
                    h2: Color32::from_rgb(126, 34, 206),
                    h3: Color32::from_rgb(67, 56, 202),
                },
                text: Color32::from_rgb(157, 23, 77),
                strong: Color32::from_rgb(157, 23, 77),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(244, 114, 182),
                    background: Color32::from_rgb(253, 242, 248),
                    text: Color32::from_rgb(157, 23, 77),
                },
                code: CodeColors {
                    background: Color32::from_rgb(252, 231, 243),
                    text: Color32::from_rgb(190, 24, 93),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(249, 168, 212),
                    blob2: Color32::from_rgb(216, 180, 254),
                    blob3: Color32::from_rgb(199, 210, 254),
                },
                border_accent: Color32::from_rgb(244, 114, 182),
            },
            ColorScheme::MintGreen => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(220, 252, 231),    // green
                    mid: Color32::from_rgb(236, 253, 245),    // emerald tint
                    bottom: Color32::from_rgb(204, 251, 241), // teal
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(21, 128, 61),
                    h2: Color32::from_rgb(4, 120, 87),
                    h3: Color32::from_rgb(15, 118, 110),
                },
                text: Color32::from_rgb(22, 101, 52),
                strong: Color32::from_rgb(22, 101, 52),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(74, 222, 128),
                    background: Color32::from_rgb(240, 253, 244),
                    text: Color32::from_rgb(22, 101, 52),
                },
                code: CodeColors {
                    background: Color32::from_rgb(220, 252, 231),
                    text: Color32::from_rgb(21, 128, 61),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(134, 239, 172),
                    blob2: Color32::from_rgb(110, 231, 183),
                    blob3: Color32::from_rgb(153, 246, 228),
                },
                border_accent: Color32::from_rgb(74, 222, 128),
            },
            ColorScheme::SunsetOrange => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(255, 237, 213),    // orange
                    mid: Color32::from_rgb(253, 242, 248),    // pink tint
                    bottom: Color32::from_rgb(254, 249, 195), // yellow
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(194, 65, 12),
                    h2: Color32::from_rgb(190, 24, 93),
                    h3: Color32::from_rgb(161, 98, 7),
                },
                text: Color32::from_rgb(154, 52, 18),
                strong: Color32::from_rgb(154, 52, 18),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(251, 146, 60),
                    background: Color32::from_rgb(255, 247, 237),
                    text: Color32::from_rgb(154, 52, 18),
                },
                code: CodeColors {
                    background: Color32::from_rgb(255, 237, 213),
                    text: Color32::from_rgb(194, 65, 12),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(253, 186, 116),
                    blob2: Color32::from_rgb(249, 168, 212),
                    blob3: Color32::from_rgb(254, 240, 138),
                },
                border_accent: Color32::from_rgb(251, 146, 60),
            },
            ColorScheme::OceanBlue => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(219, 234, 254),    // blue
                    mid: Color32::from_rgb(236, 254, 255),    // cyan tint
                    bottom: Color32::from_rgb(224, 231, 255), // indigo
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(29, 78, 216),
                    h2: Color32::from_rgb(14, 116, 144),
                    h3: Color32::from_rgb(67, 56, 202),
                },
                text: Color32::from_rgb(30, 64, 175),
                strong: Color32::from_rgb(30, 64, 175),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(96, 165, 250),
                    background: Color32::from_rgb(239, 246, 255),
                    text: Color32::from_rgb(30, 64, 175),
                },
                code: CodeColors {
                    background: Color32::from_rgb(219, 234, 254),
                    text: Color32::from_rgb(29, 78, 216),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(147, 197, 253),
                    blob2: Color32::from_rgb(103, 232, 249),
                    blob3: Color32::from_rgb(199, 210, 254),
                },
                border_accent: Color32::from_rgb(96, 165, 250),
            },
            ColorScheme::VioletPurple => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(243, 232, 255),    // purple
                    mid: Color32::from_rgb(245, 243, 255),    // violet tint
                    bottom: Color32::from_rgb(224, 231, 255), // indigo
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(126, 34, 206),
                    h2: Color32::from_rgb(109, 40, 217),
                    h3: Color32::from_rgb(67, 56, 202),
                },
                text: Color32::from_rgb(107, 33, 168),
                strong: Color32::from_rgb(107, 33, 168),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(192, 132, 252),
                    background: Color32::from_rgb(250, 245, 255),
                    text: Color32::from_rgb(107, 33, 168),
                },
                code: CodeColors {
                    background: Color32::from_rgb(243, 232, 255),
                    text: Color32::from_rgb(126, 34, 206),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(216, 180, 254),
                    blob2: Color32::from_rgb(196, 181, 253),
                    blob3: Color32::from_rgb(199, 210, 254),
                },
                border_accent: Color32::from_rgb(192, 132, 252),
            },
            ColorScheme::MilkTea => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(255, 251, 235),    // amber
                    mid: Color32::from_rgb(255, 247, 237),    // orange tint
                    bottom: Color32::from_rgb(254, 252, 232), // yellow
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(180, 83, 9),
                    h2: Color32::from_rgb(194, 65, 12),
                    h3: Color32::from_rgb(161, 98, 7),
                },
                text: Color32::from_rgb(146, 64, 14),
                strong: Color32::from_rgb(146, 64, 14),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(251, 191, 36),
                    background: Color32::from_rgb(255, 251, 235),
                    text: Color32::from_rgb(146, 64, 14),
                },
                code: CodeColors {
                    background: Color32::from_rgb(254, 243, 199),
                    text: Color32::from_rgb(180, 83, 9),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(252, 211, 77),
                    blob2: Color32::from_rgb(253, 186, 116),
                    blob3: Color32::from_rgb(254, 240, 138),
                },
                border_accent: Color32::from_rgb(251, 191, 36),
            },
            ColorScheme::MorandiGray => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(243, 244, 246),    // gray
                    mid: Color32::from_rgb(248, 250, 252),    // slate tint
                    bottom: Color32::from_rgb(245, 245, 244), // stone
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(55, 65, 81),
                    h2: Color32::from_rgb(51, 65, 85),
                    h3: Color32::from_rgb(68, 64, 60),
                },
                text: Color32::from_rgb(31, 41, 55),
                strong: Color32::from_rgb(31, 41, 55),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(156, 163, 175),
                    background: Color32::from_rgb(249, 250, 251),
                    text: Color32::from_rgb(31, 41, 55),
                },
                code: CodeColors {
                    background: Color32::from_rgb(243, 244, 246),
                    text: Color32::from_rgb(55, 65, 81),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(209, 213, 219),
                    blob2: Color32::from_rgb(203, 213, 225),
                    blob3: Color32::from_rgb(231, 229, 228),
                },
                border_accent: Color32::from_rgb(156, 163, 175),
            },
            ColorScheme::ChampagneGold => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(254, 252, 232),    // yellow
                    mid: Color32::from_rgb(255, 251, 235),    // amber tint
                    bottom: Color32::from_rgb(255, 247, 237), // orange
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(161, 98, 7),
                    h2: Color32::from_rgb(180, 83, 9),
                    h3: Color32::from_rgb(194, 65, 12),
                },
                text: Color32::from_rgb(133, 77, 14),
                strong: Color32::from_rgb(133, 77, 14),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(250, 204, 21),
                    background: Color32::from_rgb(254, 252, 232),
                    text: Color32::from_rgb(133, 77, 14),
                },
                code: CodeColors {
                    background: Color32::from_rgb(254, 249, 195),
                    text: Color32::from_rgb(161, 98, 7),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(253, 224, 71),
                    blob2: Color32::from_rgb(252, 211, 77),
                    blob3: Color32::from_rgb(254, 215, 170),
                },
                border_accent: Color32::from_rgb(250, 204, 21),
            },
            ColorScheme::SageGreen => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(236, 253, 245),    // emerald
                    mid: Color32::from_rgb(240, 253, 244),    // green tint
                    bottom: Color32::from_rgb(247, 254, 231), // lime
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(4, 120, 87),
                    h2: Color32::from_rgb(21, 128, 61),
                    h3: Color32::from_rgb(77, 124, 15),
                },
                text: Color32::from_rgb(6, 95, 70),
                strong: Color32::from_rgb(6, 95, 70),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(52, 211, 153),
                    background: Color32::from_rgb(236, 253, 245),
                    text: Color32::from_rgb(6, 95, 70),
                },
                code: CodeColors {
                    background: Color32::from_rgb(209, 250, 229),
                    text: Color32::from_rgb(4, 120, 87),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(110, 231, 183),
                    blob2: Color32::from_rgb(134, 239, 172),
                    blob3: Color32::from_rgb(217, 249, 157),
                },
                border_accent: Color32::from_rgb(52, 211, 153),
            },
            ColorScheme::DustyRose => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(255, 228, 230),    // rose
                    mid: Color32::from_rgb(253, 242, 248),    // pink tint
                    bottom: Color32::from_rgb(255, 247, 237), // orange
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(190, 18, 60),
                    h2: Color32::from_rgb(190, 24, 93),
                    h3: Color32::from_rgb(194, 65, 12),
                },
                text: Color32::from_rgb(159, 18, 57),
                strong: Color32::from_rgb(159, 18, 57),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(251, 113, 133),
                    background: Color32::from_rgb(255, 241, 242),
                    text: Color32::from_rgb(159, 18, 57),
                },
                code: CodeColors {
                    background: Color32::from_rgb(255, 228, 230),
                    text: Color32::from_rgb(190, 18, 60),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(253, 164, 175),
                    blob2: Color32::from_rgb(249, 168, 212),
                    blob3: Color32::from_rgb(254, 215, 170),
                },
                border_accent: Color32::from_rgb(251, 113, 133),
            },
            ColorScheme::MidnightBlue => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(241, 245, 249),    // slate
                    mid: Color32::from_rgb(239, 246, 255),    // blue tint
                    bottom: Color32::from_rgb(224, 231, 255), // indigo
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(51, 65, 85),
                    h2: Color32::from_rgb(29, 78, 216),
                    h3: Color32::from_rgb(67, 56, 202),
                },
                text: Color32::from_rgb(30, 41, 59),
                strong: Color32::from_rgb(30, 41, 59),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(148, 163, 184),
                    background: Color32::from_rgb(248, 250, 252),
                    text: Color32::from_rgb(30, 41, 59),
                },
                code: CodeColors {
                    background: Color32::from_rgb(241, 245, 249),
                    text: Color32::from_rgb(51, 65, 85),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(203, 213, 225),
                    blob2: Color32::from_rgb(147, 197, 253),
                    blob3: Color32::from_rgb(199, 210, 254),
                },
                border_accent: Color32::from_rgb(148, 163, 184),
            },
            ColorScheme::LavenderMist => Self {
                gradient: GradientStops {
                    top: Color32::from_rgb(250, 245, 255),    // purple
                    mid: Color32::from_rgb(245, 243, 255),    // violet tint
                    bottom: Color32::from_rgb(253, 242, 248), // pink
                },
                heading: HeadingColors {
                    h1: Color32::from_rgb(126, 34, 206),
                    h2: Color32::from_rgb(109, 40, 217),
                    h3: Color32::from_rgb(190, 24, 93),
                },
                text: Color32::from_rgb(107, 33, 168),
                strong: Color32::from_rgb(107, 33, 168),
                blockquote: BlockquoteColors {
                    border: Color32::from_rgb(192, 132, 252),
                    background: Color32::from_rgb(250, 245, 255),
                    text: Color32::from_rgb(107, 33, 168),
                },
                code: CodeColors {
                    background: Color32::from_rgb(243, 232, 255),
                    text: Color32::from_rgb(126, 34, 206),
                },
                decoration: DecorationColors {
                    blob1: Color32::from_rgb(216, 180, 254),
                    blob2: Color32::from_rgb(196, 181, 253),
                    blob3: Color32::from_rgb(251, 207, 232),
                },
                border_accent: Color32::from_rgb(192, 132, 252),
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(ColorScheme::all().len(), 12);
    }

    #[test]
    fn test_ids_are_unique_and_roundtrip() {
        for scheme in ColorScheme::all() {
            assert_eq!(ColorScheme::from_id(scheme.id()), *scheme);
        }

        let mut ids: Vec<_> = ColorScheme::all().iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn test_unrecognized_id_falls_back_to_cherry_blossom() {
        assert_eq!(ColorScheme::from_id("neon-void"), ColorScheme::CherryBlossom);
        assert_eq!(ColorScheme::from_id(""), ColorScheme::CherryBlossom);
        assert_eq!(
            ColorScheme::from_id("Cherry-Blossom"),
            ColorScheme::CherryBlossom
        );
    }

    #[test]
    fn test_default_is_cherry_blossom() {
        assert_eq!(ColorScheme::default(), ColorScheme::CherryBlossom);
    }

    #[test]
    fn test_serde_kebab_case_ids() {
        let json = serde_json::to_string(&ColorScheme::MilkTea).unwrap();
        assert_eq!(json, "\"milk-tea\"");

        let parsed: ColorScheme = serde_json::from_str("\"ocean-blue\"").unwrap();
        assert_eq!(parsed, ColorScheme::OceanBlue);
    }

    #[test]
    fn test_serde_unknown_id_falls_back() {
        let parsed: ColorScheme = serde_json::from_str("\"not-a-scheme\"").unwrap();
        assert_eq!(parsed, ColorScheme::CherryBlossom);
    }

    #[test]
    fn test_every_scheme_has_a_complete_bundle() {
        // Every bundle must be fully populated: no transparent/placeholder
        // colors anywhere in the catalog.
        for scheme in ColorScheme::all() {
            let styles = scheme.styles();
            let colors = [
                styles.gradient.top,
                styles.gradient.mid,
                styles.gradient.bottom,
                styles.heading.h1,
                styles.heading.h2,
                styles.heading.h3,
                styles.text,
                styles.strong,
                styles.blockquote.border,
                styles.blockquote.background,
                styles.blockquote.text,
                styles.code.background,
                styles.code.text,
                styles.decoration.blob1,
                styles.decoration.blob2,
                styles.decoration.blob3,
                styles.border_accent,
            ];
            for color in colors {
                assert_ne!(
                    color.a(),
                    0,
                    "scheme {} has a transparent token",
                    scheme.id()
                );
            }
        }
    }

    #[test]
    fn test_text_darker_than_gradient() {
        // Body text must contrast against the pastel background
        for scheme in ColorScheme::all() {
            let styles = scheme.styles();
            let bg_luma = styles.gradient.top.r() as u32
                + styles.gradient.top.g() as u32
                + styles.gradient.top.b() as u32;
            let text_luma =
                styles.text.r() as u32 + styles.text.g() as u32 + styles.text.b() as u32;
            assert!(
                text_luma < bg_luma,
                "scheme {} text does not contrast",
                scheme.id()
            );
        }
    }

    #[test]
    fn test_heading_level_mapping() {
        let styles = ColorScheme::CherryBlossom.styles();
        assert_eq!(styles.heading.for_level(1), styles.heading.h1);
        assert_eq!(styles.heading.for_level(2), styles.heading.h2);
        assert_eq!(styles.heading.for_level(3), styles.heading.h3);
        // Deeper levels reuse the H3 token
        assert_eq!(styles.heading.for_level(6), styles.heading.h3);
    }

    #[test]
    fn test_display_metadata_nonempty() {
        for scheme in ColorScheme::all() {
            assert!(!scheme.display_name().is_empty());
            assert!(!scheme.mood().is_empty());
        }
    }
}
