//! Main application module for Postcraft
//!
//! This module implements the eframe App trait for the main application:
//! the editor column on the left, the live card preview on the right, the
//! export toolbar in the header, and toast feedback in the status bar. It
//! also routes render-worker results and viewport screenshot events.

use crate::config::{save_config_silent, WindowSize};
use crate::export::{
    default_export_directory, generate_card_document, html_file_name, png_file_name,
    unix_timestamp_ms, CapturePurpose, ExportArtifact, ImageExporter,
};
use crate::export::clipboard::copy_html_to_clipboard;
use crate::markdown::{parse_markdown, sanitize_tree, MarkdownDocument};
use crate::preview::CardView;
use crate::render::RenderWorker;
use crate::state::AppState;
use crate::ui::{EditorPanel, SchemePicker, SignatureInput, Toolbar, ToolbarAction};
use eframe::egui;
use log::{debug, info, warn};
use std::path::Path;

/// How long success toasts stay visible, in seconds.
const TOAST_SECS: f64 = 3.0;

/// The main application struct that holds all state and implements eframe::App.
pub struct PostcraftApp {
    /// Central application state
    state: AppState,
    /// Background markdown render worker
    render_worker: RenderWorker,
    /// Card capture state machine
    exporter: ImageExporter,
    /// Card rect painted last frame (the capture target)
    last_card_rect: Option<egui::Rect>,
    /// Application start time for timing toast messages
    start_time: std::time::Instant,
    /// Last known window size (for detecting changes)
    last_window_size: Option<egui::Vec2>,
    /// Last known window position (for detecting changes)
    last_window_pos: Option<egui::Pos2>,
}

impl PostcraftApp {
    /// Create a new PostcraftApp instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing Postcraft");

        // The card catalog is built for a light chrome
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let state = AppState::new();
        let mut render_worker = RenderWorker::spawn();
        render_worker.submit(&state.document);

        Self {
            state,
            render_worker,
            exporter: ImageExporter::new(),
            last_card_rect: None,
            start_time: std::time::Instant::now(),
            last_window_size: None,
            last_window_pos: None,
        }
    }

    /// Get elapsed time since app start in seconds.
    fn app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    fn toast(&mut self, message: impl Into<String>) {
        let now = self.app_time();
        self.state.show_toast(message, now, TOAST_SECS);
    }

    /// Update window geometry in settings if it changed. Saved on exit.
    fn update_window_state(&mut self, ctx: &egui::Context) {
        let mut changed = false;

        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                let current_size = rect.size();
                let current_pos = rect.min;

                let size_changed = self
                    .last_window_size
                    .map(|s| (s - current_size).length() > 1.0)
                    .unwrap_or(true);
                let pos_changed = self
                    .last_window_pos
                    .map(|p| (p - current_pos).length() > 1.0)
                    .unwrap_or(true);

                if size_changed || pos_changed {
                    self.last_window_size = Some(current_size);
                    self.last_window_pos = Some(current_pos);
                    changed = true;
                }
            }
        });

        if changed {
            if let (Some(size), Some(pos)) = (self.last_window_size, self.last_window_pos) {
                let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
                self.state.settings.window_size = WindowSize {
                    width: size.x,
                    height: size.y,
                    x: Some(pos.x),
                    y: Some(pos.y),
                    maximized,
                };
            }
        }
    }

    /// Parse and sanitize the current editor content synchronously.
    ///
    /// Exports always capture current state, so they do not wait on (or
    /// race with) the preview's background conversion.
    fn current_tree(&self) -> MarkdownDocument {
        let mut doc = parse_markdown(&self.state.document);
        sanitize_tree(&mut doc.root);
        doc
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export Handling
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_toolbar_action(&mut self, action: ToolbarAction, ctx: &egui::Context) {
        match action {
            ToolbarAction::ExportPng => self.handle_export_png(ctx),
            ToolbarAction::CopyImage => {
                self.begin_capture(CapturePurpose::Clipboard, ctx);
            }
            ToolbarAction::CopyHtml => self.handle_copy_html(),
            ToolbarAction::ExportHtml => self.handle_export_html(),
        }
    }

    fn handle_export_png(&mut self, ctx: &egui::Context) {
        let file_name = png_file_name(unix_timestamp_ms());
        let directory = default_export_directory(&self.state.settings);

        let Some(path) = rfd::FileDialog::new()
            .set_title("Export card as PNG")
            .set_directory(&directory)
            .set_file_name(file_name)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            debug!("PNG export dialog cancelled");
            return;
        };

        self.remember_export_directory(&path);
        self.begin_capture(CapturePurpose::SaveFile(path), ctx);
    }

    fn handle_export_html(&mut self) {
        let file_name = html_file_name(unix_timestamp_ms());
        let directory = default_export_directory(&self.state.settings);

        let Some(path) = rfd::FileDialog::new()
            .set_title("Export card as HTML")
            .set_directory(&directory)
            .set_file_name(file_name)
            .add_filter("HTML document", &["html"])
            .save_file()
        else {
            debug!("HTML export dialog cancelled");
            return;
        };

        let tree = self.current_tree();
        let html = generate_card_document(
            &tree,
            &self.state.signature,
            self.state.scheme(),
            Some("Postcraft card"),
        );

        match std::fs::write(&path, html) {
            Ok(()) => {
                info!("Exported card HTML to {}", path.display());
                self.remember_export_directory(&path);
                self.toast(format!("Saved {}", path.display()));
                self.maybe_open(&path);
            }
            Err(e) => {
                warn!("HTML export failed: {}", e);
                self.toast(format!("Export failed: {}", e));
            }
        }
    }

    fn handle_copy_html(&mut self) {
        let tree = self.current_tree();
        match copy_html_to_clipboard(&tree) {
            Ok(()) => self.toast("Card HTML copied to clipboard"),
            Err(e) => {
                warn!("Clipboard HTML copy failed: {}", e);
                self.toast(format!("Copy failed: {}", e));
            }
        }
    }

    /// Start a card capture and request a viewport screenshot.
    ///
    /// TODO: stitch scrolled captures so cards taller than the window
    /// export fully instead of clamping to the visible region.
    fn begin_capture(&mut self, purpose: CapturePurpose, ctx: &egui::Context) {
        let pixels_per_point = ctx.pixels_per_point();
        match self
            .exporter
            .begin(purpose, self.last_card_rect, pixels_per_point)
        {
            Ok(()) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot);
                ctx.request_repaint();
            }
            Err(e) => {
                warn!("Cannot start export: {}", e);
                self.toast(e.to_string());
            }
        }
    }

    /// Feed viewport screenshot events to the exporter.
    fn process_screenshot_events(&mut self, ctx: &egui::Context) {
        let screenshot = ctx.input(|i| {
            i.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });

        let Some(image) = screenshot else { return };

        match self.exporter.complete(&image) {
            None => debug!("Ignoring screenshot with no capture pending"),
            Some(Ok(ExportArtifact::Saved(path))) => {
                self.toast(format!("Saved {}", path.display()));
                self.maybe_open(&path);
            }
            Some(Ok(ExportArtifact::CopiedToClipboard)) => {
                self.toast("Card image copied to clipboard");
            }
            Some(Err(e)) => {
                warn!("Card export failed: {}", e);
                self.toast(format!("Export failed: {}", e));
            }
        }
    }

    fn remember_export_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            if self.state.settings.last_export_directory.as_deref() != Some(parent) {
                self.state.settings.last_export_directory = Some(parent.to_path_buf());
                self.state.mark_settings_dirty();
            }
        }
    }

    fn maybe_open(&mut self, path: &Path) {
        if self.state.settings.open_after_export {
            if let Err(e) = open::that(path) {
                warn!("Failed to open {}: {}", path.display(), e);
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Panels
    // ─────────────────────────────────────────────────────────────────────────

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(252, 250, 253))
                    .inner_margin(egui::Margin::symmetric(12.0, 8.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("Postcraft")
                                .size(18.0)
                                .strong()
                                .color(egui::Color32::from_rgb(157, 23, 77)),
                        );
                        ui.label(
                            egui::RichText::new("Turn Markdown into a shareable post card")
                                .small()
                                .weak(),
                        );
                    });

                    let busy = self.exporter.is_busy();
                    let output =
                        Toolbar::show(ui, busy, &mut self.state.settings.open_after_export);
                    if output.open_after_export_changed {
                        self.state.mark_settings_dirty();
                    }
                    if let Some(action) = output.action {
                        self.handle_toolbar_action(action, ctx);
                    }
                });
            });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let words = self.state.document.split_whitespace().count();
                let chars = self.state.document.chars().count();
                ui.label(format!("{} words · {} chars", words, chars));

                if let Some(toast) = &self.state.ui.toast_message {
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label(egui::RichText::new(toast).italics());
                        },
                    );
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(self.state.scheme().display_name());
                });
            });
        });
    }

    fn render_editor_column(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("editor_column")
            .resizable(true)
            .default_width(430.0)
            .min_width(300.0)
            .show(ctx, |ui| {
                let mut resubmit = false;

                // The preview pill reads the signature directly next frame
                SignatureInput::show(ui, &mut self.state.signature);
                ui.add_space(6.0);

                egui::CollapsingHeader::new("🎨 Color scheme")
                    .default_open(true)
                    .show(ui, |ui| {
                        let mut scheme = self.state.scheme();
                        if SchemePicker::show(ui, &mut scheme) {
                            self.state.set_scheme(scheme);
                        }
                    });

                ui.add_space(6.0);
                ui.separator();

                if EditorPanel::show(ui, &mut self.state.document) {
                    resubmit = true;
                }

                if resubmit {
                    let seq = self.render_worker.submit(&self.state.document);
                    debug!("Submitted render request seq {}", seq);
                }
            });
    }

    fn render_preview_column(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(egui::Color32::from_rgb(246, 244, 242))
                    .inner_margin(egui::Margin::same(16.0)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("preview_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(8.0);
                            let output = CardView::new(
                                &self.state.preview,
                                &self.state.signature,
                                self.state.scheme().styles(),
                            )
                            .show(ui);
                            self.last_card_rect = Some(output.card_rect);
                            ui.add_space(16.0);
                        });
                    });
            });
    }
}

impl eframe::App for PostcraftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_window_state(ctx);

        // Commit finished conversions; keep repainting while one is pending
        if let Some(outcome) = self.render_worker.poll() {
            self.state.commit_render(outcome);
        }
        if self.render_worker.is_pending(self.state.committed_seq) {
            ctx.request_repaint_after(std::time::Duration::from_millis(30));
        }

        self.process_screenshot_events(ctx);

        let now = self.app_time();
        self.state.update_toast(now);

        self.render_header(ctx);
        self.render_status_bar(ctx);
        self.render_editor_column(ctx);
        self.render_preview_column(ctx);

        // Preference changes are saved right away; window geometry waits
        // for exit.
        if self.state.take_settings_dirty() {
            save_config_silent(&self.state.settings);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Shutting down, saving settings");
        save_config_silent(&self.state.settings);
    }
}
