//! A canvas that writes an SVG document.

use std::fmt::Write as _;

use crate::entry::Rgba;

use super::canvas::{Canvas, LinearGradient, Point, Rect, TextAlign, TextStyle};

const FONT_FAMILY: &str = "Noto Sans, Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans-serif";

/// Builds an SVG document from draw calls.
///
/// Gradients are emitted inline and referenced by a generated id, so the
/// document can be produced in a single pass.
#[derive(Debug)]
pub struct SvgCanvas {
    width: u32,
    height: u32,
    body: String,
    gradients: usize,
}

impl SvgCanvas {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            gradients: 0,
        }
    }

    #[must_use]
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Closes the document and returns the markup.
    #[must_use]
    pub fn finish(self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>",
            w = self.width,
            h = self.height,
        )
        .unwrap();
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

/// SVG has no `#AARRGGBB`, so alpha goes into a separate opacity attribute.
fn paint(attr: &str, opacity_attr: &str, color: Rgba) -> String {
    let rgb = format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b);
    if color.a == 0xFF {
        format!("{attr}='{rgb}'")
    } else {
        format!(
            "{attr}='{rgb}' {opacity_attr}='{:.3}'",
            f32::from(color.a) / 255.0
        )
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        writeln!(
            self.body,
            "  <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' {}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            paint("fill", "fill-opacity", color)
        )
        .unwrap();
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Rgba) {
        writeln!(
            self.body,
            "  <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' rx='{radius:.2}' {}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            paint("fill", "fill-opacity", color)
        )
        .unwrap();
    }

    #[allow(clippy::cast_precision_loss)]
    fn stroke_round_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        stroke_width: f32,
        gradient: &LinearGradient,
    ) {
        let id = format!("g{}", self.gradients);
        self.gradients += 1;

        writeln!(
            self.body,
            "  <defs><linearGradient id='{id}' gradientUnits='userSpaceOnUse' x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}'>",
            gradient.from.x, gradient.from.y, gradient.to.x, gradient.to.y
        )
        .unwrap();
        let last = gradient.stops.len().saturating_sub(1).max(1) as f32;
        for (i, stop) in gradient.stops.iter().enumerate() {
            writeln!(
                self.body,
                "    <stop offset='{:.4}' {}/>",
                i as f32 / last,
                paint("stop-color", "stop-opacity", *stop)
            )
            .unwrap();
        }
        writeln!(self.body, "  </linearGradient></defs>").unwrap();
        writeln!(
            self.body,
            "  <rect x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' rx='{radius:.2}' fill='none' stroke='url(#{id})' stroke-width='{stroke_width:.2}'/>",
            rect.x, rect.y, rect.width, rect.height
        )
        .unwrap();
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: TextStyle) {
        let align = match style.align {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
        };
        let weight = if style.bold { " font-weight='bold'" } else { "" };
        writeln!(
            self.body,
            "  <text x='{:.2}' y='{:.2}' font-family='{FONT_FAMILY}' font-size='{:.2}'{weight} text-anchor='{align}' {}>{}</text>",
            anchor.x,
            anchor.y,
            style.size,
            paint("fill", "fill-opacity", style.color),
            escape_text(text)
        )
        .unwrap();
    }
}
