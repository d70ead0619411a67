//! # Display
//!
//! Frame composition for the prompt screen and the playfield.

use crate::config::{PROMPT_SCALE, PROMPT_TEXT, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::{GameState, Paddle, Side};
use crate::rendering::{draw_text, text_width, Canvas, GLYPH_HEIGHT};
use crate::scenes::SceneType;
use macroquad::color::{Color, BLACK, WHITE};

/// Background colour of every frame.
pub const BACKGROUND_COLOR: Color = BLACK;

/// Colour of paddles, ball and prompt text.
pub const FOREGROUND_COLOR: Color = WHITE;

/// Colour of the dashed center line.
pub const CENTER_LINE_COLOR: Color = Color::new(80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0, 1.0);

/// Colour of the score blocks.
pub const SCORE_COLOR: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0);

const DASH_WIDTH: f32 = 4.0;
const DASH_LENGTH: f32 = 12.0;
const DASH_PERIOD: usize = 20;

const MARKER_WIDTH: f32 = 8.0;
const MARKER_HEIGHT: f32 = 12.0;
const MARKER_STRIDE: f32 = 12.0;
const MARKER_INSET: f32 = 50.0;
const MARKER_TOP: f32 = 20.0;

/// Draws whichever screen the state is in.
pub fn render<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    match state.scene() {
        SceneType::Prompt => render_prompt(canvas),
        SceneType::Playing => render_playfield(canvas, state),
    }
}

/// Top-left corner that centers `text` at `scale` in the window.
///
/// # Examples
///
/// ```
/// use pong::prompt_origin;
///
/// assert_eq!(prompt_origin("PRESS SPACE TO PLAY", 6), (58, 279));
/// ```
pub fn prompt_origin(text: &str, scale: i32) -> (i32, i32) {
    let x = (WINDOW_WIDTH as i32 - text_width(text, scale)) / 2;
    let y = WINDOW_HEIGHT as i32 / 2 - (GLYPH_HEIGHT * scale) / 2;
    (x, y)
}

/// Draws the pre-launch screen: a black background and the centered prompt.
pub fn render_prompt<C: Canvas + ?Sized>(canvas: &mut C) {
    canvas.clear(BACKGROUND_COLOR);
    let (x, y) = prompt_origin(PROMPT_TEXT, PROMPT_SCALE);
    draw_text(canvas, x, y, PROMPT_SCALE, FOREGROUND_COLOR, PROMPT_TEXT);
}

/// Draws a running match: center line, paddles, ball, then score blocks.
pub fn render_playfield<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    canvas.clear(BACKGROUND_COLOR);
    draw_center_line(canvas);

    draw_paddle(canvas, &state.left);
    draw_paddle(canvas, &state.right);

    let ball = &state.ball;
    canvas.fill_circle(ball.pos.x, ball.pos.y, ball.radius, FOREGROUND_COLOR);

    draw_score_markers(canvas, Side::Left, state.score.markers(Side::Left));
    draw_score_markers(canvas, Side::Right, state.score.markers(Side::Right));
}

fn draw_center_line<C: Canvas + ?Sized>(canvas: &mut C) {
    let x = WINDOW_WIDTH / 2.0 - DASH_WIDTH / 2.0;
    for y in (0..WINDOW_HEIGHT as usize).step_by(DASH_PERIOD) {
        canvas.fill_rect(x, y as f32, DASH_WIDTH, DASH_LENGTH, CENTER_LINE_COLOR);
    }
}

fn draw_paddle<C: Canvas + ?Sized>(canvas: &mut C, paddle: &Paddle) {
    canvas.fill_rect(paddle.x, paddle.y, paddle.w, paddle.h, FOREGROUND_COLOR);
}

/// Left blocks grow rightward from the left inset, right blocks leftward from the right inset.
fn draw_score_markers<C: Canvas + ?Sized>(canvas: &mut C, side: Side, count: u32) {
    for i in 0..count {
        let offset = i as f32 * MARKER_STRIDE;
        let x = match side {
            Side::Left => MARKER_INSET + offset,
            Side::Right => WINDOW_WIDTH - MARKER_INSET - offset - MARKER_WIDTH,
        };
        canvas.fill_rect(x, MARKER_TOP, MARKER_WIDTH, MARKER_HEIGHT, SCORE_COLOR);
    }
}
