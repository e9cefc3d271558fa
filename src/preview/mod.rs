//! Preview card rendering
//!
//! Renders the sanitized markdown node tree as a stylized post card:
//! gradient background, decorative blobs, scheme-colored content, and the
//! signature pill. The painted card rect is exposed as the capture target
//! for the image exporter.

mod card;

pub use card::{CardView, CardViewOutput, CARD_MIN_HEIGHT, CARD_WIDTH};
