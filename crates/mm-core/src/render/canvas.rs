//! Drawing capabilities a mosaic needs from a backend.

use crate::entry::Rgba;

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrinks the rectangle by `amount` on every side.
    #[must_use]
    pub fn inset(self, amount: f32) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: 2.0f32.mul_add(-amount, self.width),
            height: 2.0f32.mul_add(-amount, self.height),
        }
    }

    #[must_use]
    pub fn center_x(self) -> f32 {
        self.x + self.width / 2.0
    }

    #[must_use]
    pub fn center_y(self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// A point in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// How a string is drawn. The anchor's `y` is the text baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba,
    pub bold: bool,
    pub align: TextAlign,
}

impl TextStyle {
    /// Centered, regular weight.
    #[must_use]
    pub const fn centered(size: f32, color: Rgba) -> Self {
        Self {
            size,
            color,
            bold: false,
            align: TextAlign::Center,
        }
    }

    #[must_use]
    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    #[must_use]
    pub const fn left(self) -> Self {
        Self {
            align: TextAlign::Left,
            ..self
        }
    }
}

/// A linear gradient between two points with evenly spaced colour stops.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub stops: Vec<Rgba>,
}

/// A 2D drawing surface.
///
/// The mosaic painter only talks to this trait, so layouts can be checked
/// against a recording double without rasterizing anything.
pub trait Canvas {
    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Fills a rectangle with rounded corners.
    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Rgba);

    /// Strokes a rounded rectangle outline with a gradient.
    fn stroke_round_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        stroke_width: f32,
        gradient: &LinearGradient,
    );

    /// Draws a single line of text.
    fn draw_text(&mut self, text: &str, anchor: Point, style: TextStyle);
}
