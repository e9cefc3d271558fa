//! The post-card preview widget
//!
//! Draws the sanitized markdown node tree into a fixed-width card styled by
//! the selected color scheme: a three-stop vertical gradient with rounded
//! corners, soft decoration blobs, a border accent, the content itself, and
//! the signature pill at the bottom.
//!
//! The widget paints its background through a placeholder shape that is
//! filled in after the content height is known, so the gradient always
//! covers exactly the laid-out card.

use crate::markdown::{HeadingLevel, ListType, MarkdownDocument, MarkdownNode, NodeKind};
use crate::scheme::SchemeStyles;
use eframe::egui::{self, Color32, Rect, RichText, Rounding, Stroke, Ui};

/// Logical card width in points (the export pipeline doubles this).
pub const CARD_WIDTH: f32 = 400.0;
/// Minimum card height in points; content may grow past it.
pub const CARD_MIN_HEIGHT: f32 = 500.0;

/// Corner radius of the card.
const CORNER_RADIUS: f32 = 24.0;
/// Inner padding between the card edge and the content.
const CARD_PADDING: f32 = 32.0;
/// Number of strips used to approximate the vertical gradient.
const GRADIENT_STRIPS: usize = 24;

/// Base font size for body text.
const BODY_SIZE: f32 = 16.0;
/// Font size for code, inline and block.
const CODE_SIZE: f32 = 13.5;

// ─────────────────────────────────────────────────────────────────────────────
// Widget
// ─────────────────────────────────────────────────────────────────────────────

/// Output of rendering the card.
pub struct CardViewOutput {
    /// The rect the card was painted into, in UI points. This is the
    /// capture target for the image exporter.
    pub card_rect: Rect,
}

/// Immediate-mode card renderer.
pub struct CardView<'a> {
    document: &'a MarkdownDocument,
    signature: &'a str,
    styles: SchemeStyles,
}

impl<'a> CardView<'a> {
    pub fn new(document: &'a MarkdownDocument, signature: &'a str, styles: SchemeStyles) -> Self {
        Self {
            document,
            signature,
            styles,
        }
    }

    /// Render the card and return the painted rect.
    pub fn show(self, ui: &mut Ui) -> CardViewOutput {
        // Reserve a background slot; it is filled in once the content
        // height is known.
        let background_idx = ui.painter().add(egui::Shape::Noop);

        let styles = self.styles;
        let inner_width = CARD_WIDTH - 2.0 * CARD_PADDING;

        let frame_response = egui::Frame::none()
            .inner_margin(egui::Margin::same(CARD_PADDING))
            .show(ui, |ui| {
                ui.set_width(inner_width);
                ui.spacing_mut().item_spacing.y = 4.0;

                render_blocks(ui, &self.document.root.children, &styles, styles.text);

                // Pad short content up to the minimum card height, keeping
                // the signature pill near the bottom edge.
                let min_content = CARD_MIN_HEIGHT - 2.0 * CARD_PADDING;
                let signature_block = 34.0 + 24.0;
                let filler = min_content - ui.min_rect().height() - signature_block;
                if filler > 0.0 {
                    ui.add_space(filler);
                }

                ui.add_space(24.0);
                if !self.signature.is_empty() {
                    ui.vertical_centered(|ui| {
                        egui::Frame::none()
                            .fill(Color32::from_rgba_unmultiplied(255, 255, 255, 150))
                            .rounding(Rounding::same(14.0))
                            .inner_margin(egui::Margin::symmetric(14.0, 6.0))
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(self.signature)
                                        .size(13.0)
                                        .color(styles.text),
                                );
                            });
                    });
                }
            });

        let card_rect = frame_response.response.rect;
        ui.painter()
            .set(background_idx, background_shapes(card_rect, &styles));

        CardViewOutput { card_rect }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Background painting
// ─────────────────────────────────────────────────────────────────────────────

/// Build the card background: rounded gradient, decoration blobs, border.
fn background_shapes(rect: Rect, styles: &SchemeStyles) -> egui::Shape {
    let mut shapes = Vec::new();
    let g = styles.gradient;

    // Top and bottom bands carry the rounded corners in the end-stop colors;
    // the strips in between blend through the mid stop.
    let top_band = Rect::from_min_max(
        rect.min,
        egui::pos2(rect.max.x, rect.min.y + CORNER_RADIUS),
    );
    let bottom_band = Rect::from_min_max(
        egui::pos2(rect.min.x, rect.max.y - CORNER_RADIUS),
        rect.max,
    );
    shapes.push(egui::Shape::rect_filled(
        top_band,
        Rounding {
            nw: CORNER_RADIUS,
            ne: CORNER_RADIUS,
            sw: 0.0,
            se: 0.0,
        },
        g.top,
    ));
    shapes.push(egui::Shape::rect_filled(
        bottom_band,
        Rounding {
            nw: 0.0,
            ne: 0.0,
            sw: CORNER_RADIUS,
            se: CORNER_RADIUS,
        },
        g.bottom,
    ));

    let inner_top = rect.min.y + CORNER_RADIUS;
    let inner_bottom = rect.max.y - CORNER_RADIUS;
    if inner_bottom > inner_top {
        let strip_height = (inner_bottom - inner_top) / GRADIENT_STRIPS as f32;
        for i in 0..GRADIENT_STRIPS {
            let t = i as f32 / (GRADIENT_STRIPS - 1) as f32;
            let y0 = inner_top + i as f32 * strip_height;
            // Slight overlap avoids hairline seams between strips
            let strip = Rect::from_min_max(
                egui::pos2(rect.min.x, y0 - 0.5),
                egui::pos2(rect.max.x, y0 + strip_height + 0.5),
            );
            shapes.push(egui::Shape::rect_filled(
                strip,
                Rounding::ZERO,
                gradient_color(g.top, g.mid, g.bottom, t),
            ));
        }
    }

    // Decoration blobs: concentric translucent circles stand in for the
    // original's blurred discs.
    let d = styles.decoration;
    push_blob(
        &mut shapes,
        egui::pos2(rect.max.x - 90.0, rect.min.y + 100.0),
        40.0,
        d.blob1,
    );
    push_blob(
        &mut shapes,
        egui::pos2(rect.min.x + 80.0, rect.max.y - 110.0),
        32.0,
        d.blob2,
    );
    push_blob(&mut shapes, rect.center(), 64.0, d.blob3);

    // Border accent
    shapes.push(egui::Shape::rect_stroke(
        rect,
        Rounding::same(CORNER_RADIUS),
        Stroke::new(1.5, styles.border_accent.gamma_multiply(0.55)),
    ));

    egui::Shape::Vec(shapes)
}

/// Sample the three-stop gradient at `t` in `[0, 1]`.
fn gradient_color(top: Color32, mid: Color32, bottom: Color32, t: f32) -> Color32 {
    if t < 0.5 {
        lerp_color(top, mid, t * 2.0)
    } else {
        lerp_color(mid, bottom, (t - 0.5) * 2.0)
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

fn push_blob(shapes: &mut Vec<egui::Shape>, center: egui::Pos2, radius: f32, color: Color32) {
    for (factor, alpha) in [(1.0, 30u8), (1.4, 18), (1.8, 9)] {
        shapes.push(egui::Shape::circle_filled(
            center,
            radius * factor,
            Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha),
        ));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Block rendering
// ─────────────────────────────────────────────────────────────────────────────

fn render_blocks(ui: &mut Ui, nodes: &[MarkdownNode], styles: &SchemeStyles, text_color: Color32) {
    for node in nodes {
        render_block(ui, node, styles, text_color);
    }
}

fn render_block(ui: &mut Ui, node: &MarkdownNode, styles: &SchemeStyles, text_color: Color32) {
    match &node.kind {
        NodeKind::Document => render_blocks(ui, &node.children, styles, text_color),
        NodeKind::Paragraph => {
            for line in collect_inline_lines(&node.children) {
                render_inline_line(ui, &line, styles, BODY_SIZE, text_color, false);
            }
            ui.add_space(8.0);
        }
        NodeKind::Heading(level) => {
            let color = styles.heading.for_level(*level as u8);
            ui.add_space(6.0);
            for line in collect_inline_lines(&node.children) {
                render_inline_line(ui, &line, styles, heading_size(*level), color, true);
            }
            ui.add_space(6.0);
        }
        NodeKind::BlockQuote => {
            let bq = styles.blockquote;
            let response = egui::Frame::none()
                .fill(bq.background)
                .rounding(Rounding::same(6.0))
                .inner_margin(egui::Margin {
                    left: 16.0,
                    right: 10.0,
                    top: 8.0,
                    bottom: 8.0,
                })
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    render_blocks(ui, &node.children, styles, bq.text);
                });

            // Quote bar along the left edge
            let rect = response.response.rect;
            let bar = Rect::from_min_max(
                egui::pos2(rect.left() + 4.0, rect.top() + 5.0),
                egui::pos2(rect.left() + 8.0, rect.bottom() - 5.0),
            );
            ui.painter().rect_filled(bar, 2.0, bq.border);
            ui.add_space(8.0);
        }
        NodeKind::List { list_type, .. } => {
            render_list(ui, node, *list_type, styles, text_color);
            ui.add_space(8.0);
        }
        NodeKind::Item | NodeKind::TaskItem { .. } => {
            // Items outside a list container: render their content directly
            render_blocks(ui, &node.children, styles, text_color);
        }
        NodeKind::CodeBlock { language, literal } => {
            let code = styles.code;
            egui::Frame::none()
                .fill(code.background)
                .rounding(Rounding::same(6.0))
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    if !language.is_empty() {
                        ui.label(
                            RichText::new(language.as_str())
                                .size(11.0)
                                .color(code.text.gamma_multiply(0.7)),
                        );
                    }
                    ui.label(
                        RichText::new(literal.trim_end_matches('\n'))
                            .monospace()
                            .size(CODE_SIZE)
                            .color(code.text),
                    );
                });
            ui.add_space(8.0);
        }
        NodeKind::ThematicBreak => {
            ui.add_space(6.0);
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(ui.available_width(), 2.0),
                egui::Sense::hover(),
            );
            ui.painter()
                .rect_filled(rect, 1.0, styles.border_accent.gamma_multiply(0.5));
            ui.add_space(8.0);
        }
        // Stray inline content at block level: wrap it like a paragraph
        NodeKind::Text(_)
        | NodeKind::Code(_)
        | NodeKind::Emphasis
        | NodeKind::Strong
        | NodeKind::Strikethrough
        | NodeKind::Link { .. }
        | NodeKind::Image { .. }
        | NodeKind::SoftBreak
        | NodeKind::LineBreak => {
            let wrapper = std::slice::from_ref(node);
            for line in collect_inline_lines(wrapper) {
                render_inline_line(ui, &line, styles, BODY_SIZE, text_color, false);
            }
        }
        // Removed by the sanitizer; nothing to draw even if one slips through
        NodeKind::HtmlBlock(_) | NodeKind::HtmlInline(_) => {}
    }
}

fn render_list(
    ui: &mut Ui,
    list: &MarkdownNode,
    list_type: ListType,
    styles: &SchemeStyles,
    text_color: Color32,
) {
    for (index, item) in list.children.iter().enumerate() {
        let marker = item_marker(list_type, index, &item.kind);
        ui.horizontal_top(|ui| {
            ui.add_space(4.0);
            ui.label(
                RichText::new(marker)
                    .size(BODY_SIZE)
                    .color(styles.border_accent),
            );
            ui.add_space(2.0);
            ui.vertical(|ui| {
                render_blocks(ui, &item.children, styles, text_color);
            });
        });
    }
}

/// Marker text for a list item.
fn item_marker(list_type: ListType, index: usize, kind: &NodeKind) -> String {
    if let NodeKind::TaskItem { checked } = kind {
        return if *checked { "☑".to_string() } else { "☐".to_string() };
    }
    match list_type {
        ListType::Bullet => "•".to_string(),
        ListType::Ordered { start } => format!("{}.", start as usize + index),
    }
}

fn heading_size(level: HeadingLevel) -> f32 {
    match level {
        HeadingLevel::H1 => 26.0,
        HeadingLevel::H2 => 22.0,
        HeadingLevel::H3 => 19.0,
        _ => 17.0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Inline rendering
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct InlineFlags {
    strong: bool,
    italics: bool,
    strike: bool,
    code: bool,
    link: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct InlineSpan {
    text: String,
    flags: InlineFlags,
}

/// Flatten inline children into styled spans, split into lines at hard
/// breaks.
fn collect_inline_lines(nodes: &[MarkdownNode]) -> Vec<Vec<InlineSpan>> {
    let mut lines = vec![Vec::new()];
    collect_spans_into(nodes, InlineFlags::default(), &mut lines);
    lines.retain(|line| !line.is_empty());
    lines
}

fn collect_spans_into(
    nodes: &[MarkdownNode],
    flags: InlineFlags,
    lines: &mut Vec<Vec<InlineSpan>>,
) {
    for node in nodes {
        match &node.kind {
            NodeKind::Text(text) => {
                if !text.is_empty() {
                    push_span(lines, text.clone(), flags);
                }
            }
            NodeKind::Code(literal) => {
                let mut f = flags;
                f.code = true;
                push_span(lines, literal.clone(), f);
            }
            NodeKind::SoftBreak => push_span(lines, " ".to_string(), flags),
            NodeKind::LineBreak => lines.push(Vec::new()),
            NodeKind::Emphasis => {
                let mut f = flags;
                f.italics = true;
                collect_spans_into(&node.children, f, lines);
            }
            NodeKind::Strong => {
                let mut f = flags;
                f.strong = true;
                collect_spans_into(&node.children, f, lines);
            }
            NodeKind::Strikethrough => {
                let mut f = flags;
                f.strike = true;
                collect_spans_into(&node.children, f, lines);
            }
            NodeKind::Link { url, .. } => {
                let mut f = flags;
                // A sanitized-away destination leaves plain text
                f.link = !url.is_empty();
                collect_spans_into(&node.children, f, lines);
            }
            NodeKind::Image { title, .. } => {
                // The card has no network access, so images render as a
                // captioned placeholder.
                let alt = node.text_content();
                let caption = if !alt.is_empty() { alt } else { title.clone() };
                let mut f = flags;
                f.italics = true;
                push_span(lines, format!("🖼 {}", caption.trim()), f);
            }
            NodeKind::HtmlInline(_) | NodeKind::HtmlBlock(_) => {}
            // Block nodes nested in inline position: flatten to text
            _ => {
                if node.children.is_empty() {
                    let text = node.text_content();
                    if !text.is_empty() {
                        push_span(lines, text, flags);
                    }
                } else {
                    collect_spans_into(&node.children, flags, lines);
                }
            }
        }
    }
}

fn push_span(lines: &mut Vec<Vec<InlineSpan>>, text: String, flags: InlineFlags) {
    if let Some(last) = lines.last_mut() {
        last.push(InlineSpan { text, flags });
    }
}

fn render_inline_line(
    ui: &mut Ui,
    spans: &[InlineSpan],
    styles: &SchemeStyles,
    size: f32,
    base_color: Color32,
    heading: bool,
) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            let mut rich = RichText::new(span.text.as_str()).size(size);

            if span.flags.code {
                rich = rich
                    .monospace()
                    .size(size.min(CODE_SIZE + 1.5))
                    .background_color(styles.code.background)
                    .color(styles.code.text);
            } else if span.flags.link {
                rich = rich.underline().color(styles.heading.h2);
            } else if span.flags.strong {
                rich = rich.color(styles.strong);
            } else {
                rich = rich.color(base_color);
            }

            if span.flags.strong || heading {
                rich = rich.strong();
            }
            if span.flags.italics {
                rich = rich.italics();
            }
            if span.flags.strike {
                rich = rich.strikethrough();
            }

            ui.label(rich);
        }
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
