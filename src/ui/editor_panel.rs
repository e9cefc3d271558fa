//! Markdown editor and signature input panels
//!
//! Both are controlled inputs: they render the value they are handed and
//! report whether the user changed it.

use eframe::egui::{self, RichText, Ui};

/// The markdown text editor.
pub struct EditorPanel;

impl EditorPanel {
    /// Render the editor. Returns `true` when the text changed this frame.
    pub fn show(ui: &mut Ui, text: &mut String) -> bool {
        let mut changed = false;

        ui.label(RichText::new("✨ Markdown").strong());
        ui.label(
            RichText::new("Write your post here; Markdown formatting is supported.")
                .small()
                .weak(),
        );
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("editor_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let response = ui.add(
                    egui::TextEdit::multiline(text)
                        .frame(false)
                        .desired_width(f32::INFINITY)
                        .desired_rows(24)
                        .hint_text("# Today's share ✨\n\nStart typing…"),
                );
                changed = response.changed();
            });

        changed
    }
}

/// The single-line signature input.
pub struct SignatureInput;

impl SignatureInput {
    /// Render the signature field. Returns `true` when the text changed.
    pub fn show(ui: &mut Ui, signature: &mut String) -> bool {
        ui.label(RichText::new("✍ Signature").strong());
        let response = ui.add(
            egui::TextEdit::singleline(signature)
                .desired_width(f32::INFINITY)
                .hint_text("Shown at the bottom of the card"),
        );
        response.changed()
    }
}
