//! # Rendering Module
//!
//! Immediate-mode 2D drawing for the prompt screen and the playfield.
//!
//! Every draw call goes through the [`Canvas`] trait. At runtime that is the
//! macroquad window; headless code can record the calls with [`RecordingCanvas`].

pub mod canvas;
pub mod display;
pub mod font;

pub use canvas::*;
pub use display::*;
pub use font::*;

use macroquad::color::Color;

/// Minimal set of filled primitives the game draws with.
pub trait Canvas {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Fills a circle centered on `(x, y)`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Circle {
        x: f32,
        y: f32,
        radius: f32,
        color: Color,
    },
}

/// Canvas that stores draw calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Recorded rectangles, in draw order.
    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }

    /// Recorded rectangles of one colour.
    pub fn rects_with_color(&self, wanted: Color) -> Vec<&DrawCommand> {
        self.rects()
            .filter(|c| matches!(c, DrawCommand::Rect { color, .. } if *color == wanted))
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::{BLACK, RED, WHITE};

    #[test]
    fn test_recording_canvas_keeps_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.clear(BLACK);
        canvas.fill_rect(1.0, 2.0, 3.0, 4.0, WHITE);
        canvas.fill_circle(5.0, 6.0, 7.0, RED);

        assert_eq!(canvas.commands.len(), 3);
        assert_eq!(canvas.commands[0], DrawCommand::Clear(BLACK));
        assert_eq!(canvas.rects().count(), 1);
        assert_eq!(canvas.rects_with_color(WHITE).len(), 1);
        assert!(canvas.rects_with_color(RED).is_empty());

        canvas.reset();
        assert!(canvas.commands.is_empty());
    }
}
