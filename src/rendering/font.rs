//! # Bitmap Font
//!
//! Tiny embedded 5x7 font covering the letters of the start prompt.

use crate::rendering::Canvas;
use macroquad::color::Color;

/// Glyph width in font pixels.
pub const GLYPH_WIDTH: i32 = 5;

/// Glyph height in font pixels.
pub const GLYPH_HEIGHT: i32 = 7;

/// Seven rows, top to bottom. Bit 4 of each row is the leftmost column.
pub type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Looks up the glyph for `c`, if the font has one.
pub fn glyph(c: char) -> Option<&'static Glyph> {
    let rows: &'static Glyph = match c {
        ' ' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        'A' => &[0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'C' => &[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'E' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'L' => &[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'O' => &[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => &[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'R' => &[0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => &[0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => &[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'Y' => &[0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        _ => return None,
    };
    Some(rows)
}

/// Horizontal distance from one glyph to the next at `scale`, spacing included.
pub fn glyph_advance(scale: i32) -> i32 {
    GLYPH_WIDTH * scale + scale
}

/// Width taken by `text` at `scale`, including trailing spacing.
pub fn text_width(text: &str, scale: i32) -> i32 {
    glyph_advance(scale) * text.chars().count() as i32
}

/// Draws `text` with its top-left corner at `(x, y)`, one `scale`-sized square per lit bit.
///
/// Characters missing from the font draw nothing but still take up a glyph's width.
/// Returns the cursor position after the last character.
pub fn draw_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    scale: i32,
    color: Color,
    text: &str,
) -> i32 {
    let mut cursor = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            draw_glyph(canvas, cursor, y, scale, color, rows);
        }
        cursor += glyph_advance(scale);
    }
    cursor
}

fn draw_glyph<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    scale: i32,
    color: Color,
    rows: &Glyph,
) {
    let size = scale as f32;
    for (row, &bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                canvas.fill_rect(
                    (x + col * scale) as f32,
                    (y + row as i32 * scale) as f32,
                    size,
                    size,
                    color,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::{DrawCommand, RecordingCanvas};
    use macroquad::color::WHITE;

    fn lit_pixels(rows: &Glyph) -> u32 {
        rows.iter().map(|r| r.count_ones()).sum()
    }

    #[test]
    fn test_prompt_letters_are_covered() {
        for c in "PRESS SPACE TO PLAY".chars() {
            assert!(glyph(c).is_some(), "missing glyph for {:?}", c);
        }
        assert!(glyph('Z').is_none());
        assert!(glyph('a').is_none());
    }

    #[test]
    fn test_rows_fit_five_columns() {
        for c in " ACELOPRSTY".chars() {
            let rows = glyph(c).unwrap();
            assert!(rows.iter().all(|r| *r < 0x20));
        }
    }

    #[test]
    fn test_draw_single_glyph() {
        let mut canvas = RecordingCanvas::new();
        let end = draw_text(&mut canvas, 10, 20, 2, WHITE, "T");
        assert_eq!(end, 10 + glyph_advance(2));

        let rows = glyph('T').unwrap();
        assert_eq!(canvas.commands.len() as u32, lit_pixels(rows));
        // Top bar of the T starts at the leftmost column
        assert_eq!(
            canvas.commands[0],
            DrawCommand::Rect {
                x: 10.0,
                y: 20.0,
                w: 2.0,
                h: 2.0,
                color: WHITE
            }
        );
    }

    #[test]
    fn test_leftmost_column_is_high_bit() {
        let mut canvas = RecordingCanvas::new();
        draw_text(&mut canvas, 0, 0, 1, WHITE, "L");
        let xs: Vec<f32> = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { x, y, .. } if *y < 6.0 => Some(*x),
                _ => None,
            })
            .collect();
        assert!(xs.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_unknown_glyph_advances_cursor() {
        let mut canvas = RecordingCanvas::new();
        let end = draw_text(&mut canvas, 0, 0, 3, WHITE, "?#");
        assert!(canvas.commands.is_empty());
        assert_eq!(end, 2 * glyph_advance(3));

        canvas.reset();
        draw_text(&mut canvas, 0, 0, 3, WHITE, "?A");
        let min_x = canvas
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { x, .. } => Some(*x),
                _ => None,
            })
            .fold(f32::MAX, f32::min);
        assert_eq!(min_x, glyph_advance(3) as f32);
    }

    #[test]
    fn test_space_draws_nothing_but_advances() {
        let mut canvas = RecordingCanvas::new();
        let end = draw_text(&mut canvas, 5, 0, 1, WHITE, "  ");
        assert!(canvas.commands.is_empty());
        assert_eq!(end, 5 + 12);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("PRESS SPACE TO PLAY", 6), 684);
        assert_eq!(text_width("", 6), 0);
    }
}
