//! # Frame Physics
//!
//! Integration step helpers, collision resolution and goal detection.

use crate::config::{MAX_DEFLECT_SPEED, MAX_FRAME_TIME, PADDLE_HIT_SPEEDUP};
use crate::game::{Ball, GameEvent, Paddle, Side, Wall};
use macroquad::math::Rect;

/// Turns a raw frame duration into the physics time step.
///
/// Stalls are clamped to [`MAX_FRAME_TIME`] to bound integration error.
/// Negative or non-finite durations become zero.
///
/// # Examples
///
/// ```
/// use pong::clamp_frame_time;
///
/// assert_eq!(clamp_frame_time(0.016), 0.016);
/// assert_eq!(clamp_frame_time(1.5), 0.05);
/// assert_eq!(clamp_frame_time(f32::NAN), 0.0);
/// ```
pub fn clamp_frame_time(dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return 0.0;
    }
    dt.min(MAX_FRAME_TIME)
}

/// Strict axis-aligned overlap: rectangles that only share an edge do not touch.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && b.x < a.x + a.w && a.y < b.y + b.h && b.y < a.y + a.h
}

/// Keeps the ball between the top and bottom walls.
///
/// The two walls are checked independently, top first. A ball taller than the
/// field triggers both and ends up clamped against the bottom moving upward.
pub fn bounce_off_walls(ball: &mut Ball, field_height: f32, events: &mut Vec<GameEvent>) {
    if ball.pos.y - ball.radius < 0.0 {
        ball.pos.y = ball.radius;
        ball.vel.y = ball.vel.y.abs();
        events.push(GameEvent::WallBounce(Wall::Top));
    }
    if ball.pos.y + ball.radius > field_height {
        ball.pos.y = field_height - ball.radius;
        ball.vel.y = -ball.vel.y.abs();
        events.push(GameEvent::WallBounce(Wall::Bottom));
    }
}

/// Returns the ball off `paddle` if they overlap.
///
/// The ball is placed just outside the paddle's inner face and sent back
/// slightly faster. Its vertical speed follows where it struck: the paddle
/// center sends it straight, the ends send it off at [`MAX_DEFLECT_SPEED`].
///
/// Returns `true` on a hit.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !overlaps(&ball.bounds(), &paddle.rect()) {
        return false;
    }

    match side {
        Side::Left => {
            ball.pos.x = paddle.x + paddle.w + ball.radius;
            ball.vel.x = ball.vel.x.abs() + PADDLE_HIT_SPEEDUP;
        }
        Side::Right => {
            ball.pos.x = paddle.x - ball.radius;
            ball.vel.x = -ball.vel.x.abs() - PADDLE_HIT_SPEEDUP;
        }
    }

    let offset = ((ball.pos.y - paddle.center_y()) / (paddle.h / 2.0)).clamp(-1.0, 1.0);
    ball.vel.y = offset * MAX_DEFLECT_SPEED;
    true
}

/// Returns the side that wins a point if the ball's center has left the field.
pub fn goal_scored(ball: &Ball, field_width: f32) -> Option<Side> {
    if ball.pos.x < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x > field_width {
        Some(Side::Left)
    } else {
        None
    }
}
