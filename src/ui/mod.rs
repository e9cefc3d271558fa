//! UI components for Postcraft
//!
//! Thin presentational panels: the markdown editor, the signature field,
//! the color scheme picker, and the export toolbar. None of these hold
//! state beyond reflecting the values they are given.

mod editor_panel;
mod scheme_picker;
mod toolbar;

pub use editor_panel::{EditorPanel, SignatureInput};
pub use scheme_picker::SchemePicker;
pub use toolbar::{Toolbar, ToolbarAction, ToolbarOutput};
