//! Card capture and PNG encoding
//!
//! The card is captured from a viewport screenshot: the app requests a
//! screenshot, the card region is cropped out at the native pixel density,
//! resampled to the fixed 2x output width, and written as a PNG (or placed
//! on the clipboard).
//!
//! `ImageExporter` is the capture state machine. It is a real mutual
//! exclusion guard, not advisory UI state: `begin` rejects a second request
//! while one is pending, and the pending state is cleared on every
//! completion path, success or failure.

use crate::error::{Error, Result};
use crate::export::clipboard::copy_image_to_clipboard;
use crate::export::options::EXPORT_PIXEL_WIDTH;
use eframe::egui::{ColorImage, Rect};
use image::RgbaImage;
use log::{debug, info};
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Capture State Machine
// ─────────────────────────────────────────────────────────────────────────────

/// What to do with the captured card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturePurpose {
    /// Write a PNG to this path
    SaveFile(PathBuf),
    /// Place the bitmap on the system clipboard
    Clipboard,
}

/// Result of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportArtifact {
    /// A PNG was written to this path
    Saved(PathBuf),
    /// The card bitmap was placed on the clipboard
    CopiedToClipboard,
}

#[derive(Debug)]
struct PendingCapture {
    purpose: CapturePurpose,
    card_rect: Rect,
    pixels_per_point: f32,
}

/// Tracks an in-flight card capture.
#[derive(Debug, Default)]
pub struct ImageExporter {
    pending: Option<PendingCapture>,
}

impl ImageExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a capture is in flight.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a capture.
    ///
    /// Fails with `ExportInFlight` while another capture is pending, and
    /// with `CaptureUnavailable` when the preview card has not been laid
    /// out (there is nothing to capture). On success the caller must
    /// request a viewport screenshot and feed it to [`Self::complete`].
    pub fn begin(
        &mut self,
        purpose: CapturePurpose,
        card_rect: Option<Rect>,
        pixels_per_point: f32,
    ) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::ExportInFlight);
        }
        let card_rect = card_rect.ok_or(Error::CaptureUnavailable)?;

        debug!(
            "Beginning card capture: {:?}, rect {:?} at {} px/pt",
            purpose, card_rect, pixels_per_point
        );
        self.pending = Some(PendingCapture {
            purpose,
            card_rect,
            pixels_per_point,
        });
        Ok(())
    }

    /// Consume a viewport screenshot and finish the pending capture.
    ///
    /// Returns `None` if no capture was pending (an unsolicited
    /// screenshot). The pending state is cleared before any processing,
    /// so the exporter is ready for a new request regardless of outcome.
    pub fn complete(&mut self, screenshot: &ColorImage) -> Option<Result<ExportArtifact>> {
        let pending = self.pending.take()?;
        Some(finish_capture(pending, screenshot))
    }
}

fn finish_capture(pending: PendingCapture, screenshot: &ColorImage) -> Result<ExportArtifact> {
    let cropped = crop_card(screenshot, pending.card_rect, pending.pixels_per_point)?;
    let rgba = to_rgba_image(&cropped)?;
    let card = resample_to_width(&rgba, EXPORT_PIXEL_WIDTH);

    match pending.purpose {
        CapturePurpose::SaveFile(path) => {
            card.save(&path).map_err(|e| match e {
                image::ImageError::IoError(io) => Error::FileWrite {
                    path: path.clone(),
                    source: io,
                },
                other => Error::from(other),
            })?;
            info!(
                "Exported card to {} ({}x{})",
                path.display(),
                card.width(),
                card.height()
            );
            Ok(ExportArtifact::Saved(path))
        }
        CapturePurpose::Clipboard => {
            copy_image_to_clipboard(&card)?;
            info!("Copied card bitmap to clipboard");
            Ok(ExportArtifact::CopiedToClipboard)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pixel Pipeline
// ─────────────────────────────────────────────────────────────────────────────

/// Crop the card region out of a viewport screenshot.
///
/// The card rect is in UI points; the screenshot is in physical pixels at
/// the given pixels-per-point. The rect is clamped to the screenshot
/// bounds before cropping.
pub fn crop_card(screenshot: &ColorImage, card_rect: Rect, pixels_per_point: f32) -> Result<ColorImage> {
    let image_rect_points = Rect::from_min_size(
        eframe::egui::Pos2::ZERO,
        eframe::egui::vec2(
            screenshot.size[0] as f32 / pixels_per_point,
            screenshot.size[1] as f32 / pixels_per_point,
        ),
    );
    let clamped = card_rect.intersect(image_rect_points);
    if !clamped.is_positive() {
        return Err(Error::CaptureUnavailable);
    }

    Ok(screenshot.region(&clamped, Some(pixels_per_point)))
}

/// Convert an egui image to an `image` crate RGBA buffer.
pub fn to_rgba_image(color_image: &ColorImage) -> Result<RgbaImage> {
    let [width, height] = color_image.size;
    RgbaImage::from_raw(
        width as u32,
        height as u32,
        color_image.as_raw().to_vec(),
    )
    .ok_or_else(|| Error::ImageEncode("pixel buffer does not match image size".to_string()))
}

/// Resample to the fixed output width, preserving aspect ratio.
pub fn resample_to_width(img: &RgbaImage, target_width: u32) -> RgbaImage {
    if img.width() == target_width || img.width() == 0 {
        return img.clone();
    }
    let target_height =
        ((img.height() as u64 * target_width as u64) / img.width() as u64).max(1) as u32;
    image::imageops::resize(
        img,
        target_width,
        target_height,
        image::imageops::FilterType::CatmullRom,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{pos2, vec2, Color32};

    fn test_screenshot(width: usize, height: usize) -> ColorImage {
        ColorImage::new([width, height], Color32::from_rgb(250, 230, 240))
    }

    #[test]
    fn test_begin_without_card_rect_fails() {
        let mut exporter = ImageExporter::new();
        let result = exporter.begin(CapturePurpose::Clipboard, None, 1.0);
        assert!(matches!(result, Err(Error::CaptureUnavailable)));
        assert!(!exporter.is_busy());
    }

    #[test]
    fn test_begin_twice_is_rejected() {
        let mut exporter = ImageExporter::new();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));

        exporter
            .begin(CapturePurpose::Clipboard, Some(rect), 1.0)
            .unwrap();
        assert!(exporter.is_busy());

        let second = exporter.begin(CapturePurpose::Clipboard, Some(rect), 1.0);
        assert!(matches!(second, Err(Error::ExportInFlight)));
    }

    #[test]
    fn test_complete_without_pending_is_none() {
        let mut exporter = ImageExporter::new();
        let screenshot = test_screenshot(64, 64);
        assert!(exporter.complete(&screenshot).is_none());
    }

    #[test]
    fn test_complete_resets_busy_even_on_failure() {
        let mut exporter = ImageExporter::new();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(50.0, 50.0));
        let bad_path = PathBuf::from("/no/such/directory/card.png");

        exporter
            .begin(CapturePurpose::SaveFile(bad_path), Some(rect), 1.0)
            .unwrap();
        let result = exporter.complete(&test_screenshot(64, 64));

        assert!(matches!(result, Some(Err(_))));
        assert!(!exporter.is_busy());
    }

    #[test]
    fn test_save_produces_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postcraft-post-123.png");

        let mut exporter = ImageExporter::new();
        let rect = Rect::from_min_size(pos2(10.0, 10.0), vec2(100.0, 150.0));
        exporter
            .begin(CapturePurpose::SaveFile(path.clone()), Some(rect), 1.0)
            .unwrap();

        let result = exporter
            .complete(&test_screenshot(200, 300))
            .expect("capture was pending");
        assert_eq!(result.unwrap(), ExportArtifact::Saved(path.clone()));
        assert!(!exporter.is_busy());

        // The written file decodes to the fixed export width
        let written = image::open(&path).unwrap().to_rgba8();
        assert_eq!(written.width(), EXPORT_PIXEL_WIDTH);
        assert_eq!(written.height(), EXPORT_PIXEL_WIDTH * 150 / 100);
    }

    #[test]
    fn test_crop_card_respects_pixels_per_point() {
        // 200x200 physical pixels at 2 px/pt = 100x100 points
        let screenshot = test_screenshot(200, 200);
        let rect = Rect::from_min_size(pos2(25.0, 25.0), vec2(50.0, 50.0));

        let cropped = crop_card(&screenshot, rect, 2.0).unwrap();
        assert_eq!(cropped.size, [100, 100]);
    }

    #[test]
    fn test_crop_card_clamps_to_bounds() {
        let screenshot = test_screenshot(100, 100);
        let rect = Rect::from_min_size(pos2(50.0, 50.0), vec2(500.0, 500.0));

        let cropped = crop_card(&screenshot, rect, 1.0).unwrap();
        assert_eq!(cropped.size, [50, 50]);
    }

    #[test]
    fn test_crop_card_fully_outside_fails() {
        let screenshot = test_screenshot(100, 100);
        let rect = Rect::from_min_size(pos2(500.0, 500.0), vec2(50.0, 50.0));
        assert!(crop_card(&screenshot, rect, 1.0).is_err());
    }

    #[test]
    fn test_resample_doubles_and_preserves_aspect() {
        let img = RgbaImage::from_pixel(400, 520, image::Rgba([255, 0, 0, 255]));
        let out = resample_to_width(&img, 800);
        assert_eq!(out.width(), 800);
        assert_eq!(out.height(), 1040);
    }

    #[test]
    fn test_resample_noop_at_target_width() {
        let img = RgbaImage::from_pixel(800, 100, image::Rgba([0, 255, 0, 255]));
        let out = resample_to_width(&img, 800);
        assert_eq!(out.dimensions(), (800, 100));
    }

    #[test]
    fn test_to_rgba_image_roundtrip() {
        let color = ColorImage::new([4, 3], Color32::from_rgb(1, 2, 3));
        let rgba = to_rgba_image(&color).unwrap();
        assert_eq!(rgba.dimensions(), (4, 3));
        assert_eq!(rgba.get_pixel(0, 0).0[..3], [1, 2, 3]);
    }
}
