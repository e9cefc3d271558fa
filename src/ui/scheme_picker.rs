//! Color scheme swatch picker
//!
//! A two-column grid of the scheme catalog. Each entry shows a small
//! gradient swatch, the scheme name, and its mood line; clicking anywhere
//! on the entry selects it.

use crate::scheme::ColorScheme;
use eframe::egui::{self, Color32, RichText, Rounding, Sense, Stroke, Ui};

/// Swatch size in points.
const SWATCH_SIZE: f32 = 18.0;

pub struct SchemePicker;

impl SchemePicker {
    /// Render the picker. Returns `true` when the selection changed.
    pub fn show(ui: &mut Ui, current: &mut ColorScheme) -> bool {
        let mut changed = false;

        egui::Grid::new("scheme_picker")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                for (index, scheme) in ColorScheme::all().iter().enumerate() {
                    let selected = scheme == current;
                    if scheme_entry(ui, *scheme, selected).clicked() && !selected {
                        *current = *scheme;
                        changed = true;
                    }
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

        changed
    }
}

/// One selectable picker entry: swatch + name + mood.
fn scheme_entry(ui: &mut Ui, scheme: ColorScheme, selected: bool) -> egui::Response {
    let response = ui
        .horizontal(|ui| {
            let (rect, swatch_response) =
                ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
            paint_swatch(ui, rect, scheme, selected);

            let text_response = ui
                .vertical(|ui| {
                    ui.spacing_mut().item_spacing.y = 0.0;
                    let name = ui.selectable_label(
                        selected,
                        RichText::new(scheme.display_name()).size(12.0),
                    );
                    ui.label(RichText::new(scheme.mood()).size(10.0).weak());
                    name
                })
                .inner;

            swatch_response.union(text_response)
        })
        .inner;

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Paint a miniature of the scheme's gradient with its accent ring.
fn paint_swatch(ui: &Ui, rect: egui::Rect, scheme: ColorScheme, selected: bool) {
    let styles = scheme.styles();
    let painter = ui.painter();
    let rounding = Rounding::same(SWATCH_SIZE / 3.0);

    let third = rect.height() / 3.0;
    let bands = [
        (styles.gradient.top, 0.0),
        (styles.gradient.mid, third),
        (styles.gradient.bottom, 2.0 * third),
    ];
    // Base fill carries the rounding; bands layer the stops on top
    painter.rect_filled(rect, rounding, styles.gradient.mid);
    for (color, offset) in bands {
        let band = egui::Rect::from_min_max(
            egui::pos2(rect.left() + 2.0, rect.top() + offset + 1.0),
            egui::pos2(rect.right() - 2.0, (rect.top() + offset + third).min(rect.bottom()) - 1.0),
        );
        painter.rect_filled(band, 2.0, color);
    }

    let ring = if selected {
        Stroke::new(2.0, styles.border_accent)
    } else {
        Stroke::new(1.0, Color32::from_gray(200))
    };
    painter.rect_stroke(rect, rounding, ring);
}
