//! Export toolbar
//!
//! The primary "download" button plus a menu with the remaining export
//! targets. The button is disabled while an export is in flight; the real
//! mutual exclusion lives in the exporter itself.

use crate::export::ExportFormat;
use eframe::egui::{self, RichText, Ui};

/// Actions the toolbar can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Save the card as a PNG file
    ExportPng,
    /// Save the card as a standalone HTML document
    ExportHtml,
    /// Copy the card bitmap to the clipboard
    CopyImage,
    /// Copy the card as HTML to the clipboard
    CopyHtml,
}

/// What happened in the toolbar this frame.
#[derive(Debug, Default)]
pub struct ToolbarOutput {
    /// A requested export action, if any
    pub action: Option<ToolbarAction>,
    /// Whether the open-after-export toggle changed
    pub open_after_export_changed: bool,
}

pub struct Toolbar;

impl Toolbar {
    /// Render the toolbar (right-to-left inside the header).
    pub fn show(ui: &mut Ui, busy: bool, open_after_export: &mut bool) -> ToolbarOutput {
        let mut output = ToolbarOutput::default();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let png = ExportFormat::PngFile;
            let label = if busy {
                "Exporting…".to_string()
            } else {
                format!("{} {}", png.icon(), png.label())
            };
            let button = ui.add_enabled(
                !busy,
                egui::Button::new(RichText::new(label).strong()),
            );
            if busy {
                ui.add(egui::Spinner::new().size(14.0));
            }
            if button.clicked() {
                output.action = Some(ToolbarAction::ExportPng);
            }

            ui.menu_button("More ⏷", |ui| {
                let entries = [
                    (ExportFormat::ClipboardImage, ToolbarAction::CopyImage),
                    (ExportFormat::ClipboardHtml, ToolbarAction::CopyHtml),
                    (ExportFormat::HtmlFile, ToolbarAction::ExportHtml),
                ];
                for (format, action) in entries {
                    let enabled = !busy || format == ExportFormat::ClipboardHtml;
                    let label = format!("{} {}", format.icon(), format.label());
                    if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
                        output.action = Some(action);
                        ui.close_menu();
                    }
                }

                ui.separator();
                if ui
                    .checkbox(open_after_export, "Open file after export")
                    .changed()
                {
                    output.open_after_export_changed = true;
                }
            });
        });

        output
    }
}
