//! Card Export Module for Postcraft
//!
//! This module provides functionality for exporting the preview card as a
//! PNG image, as a standalone scheme-styled HTML document, and to the system
//! clipboard (bitmap or HTML).
//!
//! # Architecture
//!
//! - `options.rs` - Export formats, file naming, and target constants
//! - `image.rs` - Screenshot crop/resample pipeline and the capture state machine
//! - `html.rs` - HTML document generation from the sanitized node tree
//! - `clipboard.rs` - Platform clipboard operations

pub mod clipboard;
pub mod html;
pub mod image;
pub mod options;

pub use html::generate_card_document;
pub use image::{CapturePurpose, ExportArtifact, ImageExporter};
pub use options::{
    default_export_directory, html_file_name, png_file_name, unix_timestamp_ms, ExportFormat,
};
