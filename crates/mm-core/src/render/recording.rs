//! A canvas that remembers what was drawn.

use crate::entry::Rgba;

use super::canvas::{Canvas, LinearGradient, Point, Rect, TextStyle};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    FillRoundRect {
        rect: Rect,
        radius: f32,
        color: Rgba,
    },
    StrokeRoundRect {
        rect: Rect,
        radius: f32,
        stroke_width: f32,
        gradient: LinearGradient,
    },
    Text {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
}

/// Records every call in order instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Rounded fills as `(rect, color)` pairs in draw order.
    pub fn round_fills(&self) -> impl Iterator<Item = (Rect, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRoundRect { rect, color, .. } => Some((*rect, *color)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f32, color: Rgba) {
        self.commands
            .push(DrawCommand::FillRoundRect { rect, radius, color });
    }

    fn stroke_round_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        stroke_width: f32,
        gradient: &LinearGradient,
    ) {
        self.commands.push(DrawCommand::StrokeRoundRect {
            rect,
            radius,
            stroke_width,
            gradient: gradient.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, anchor: Point, style: TextStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            anchor,
            style,
        });
    }
}
