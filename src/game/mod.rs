//! # Game Module
//!
//! Core game state and the simulation that advances it.
//!
//! This module contains the building blocks of a match:
//! - Paddles, the ball and the score pair
//! - Frame physics: integration, wall and paddle collisions, goals
//! - The injectable source of serve directions

pub mod physics;
pub mod random;
pub mod state;

pub use physics::*;
pub use random::*;
pub use state::*;

use crate::config::{
    BALL_RADIUS, MAX_SCORE_MARKERS, PADDLE_HEIGHT, PADDLE_MARGIN, PADDLE_SPEED, PADDLE_WIDTH,
    SERVE_SPEED_X, SERVE_SPEED_Y, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::input::PaddleIntent;
use macroquad::math::{vec2, Rect, Vec2};

/// One side of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Horizontal window edges the ball can bounce off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wall {
    Top,
    Bottom,
}

/// Something that happened while advancing a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// The start key moved the game out of the prompt screen
    Launched,
    /// The reset key re-served the ball
    BallReset,
    /// The ball was clamped against a wall and turned around
    WallBounce(Wall),
    /// The ball was returned by a paddle
    PaddleHit { side: Side, speed_x: f32 },
    /// The ball left the field and a point was awarded
    Scored { scorer: Side, score: Score },
}

/// A player's paddle.
///
/// Only moves vertically. The velocity is replaced every frame from input,
/// there is no acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Vertical velocity in pixels per second
    pub vy: f32,
}

impl Paddle {
    /// Creates a resting paddle with the given geometry.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h, vy: 0.0 }
    }

    /// Creates the paddle for `side` at its starting position, vertically centered.
    ///
    /// # Examples
    ///
    /// ```
    /// use pong::{Paddle, Side};
    ///
    /// let right = Paddle::for_side(Side::Right);
    /// assert_eq!(right.x, 744.0);
    /// assert_eq!(right.y, 250.0);
    /// ```
    pub fn for_side(side: Side) -> Self {
        let y = WINDOW_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => WINDOW_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Sets the velocity from the held movement keys.
    pub fn steer(&mut self, intent: PaddleIntent) {
        self.vy = intent.velocity(PADDLE_SPEED);
    }

    /// Moves by the current velocity and keeps the paddle inside the field.
    pub fn integrate(&mut self, dt: f32, field_height: f32) {
        self.y += self.vy * dt;
        self.clamp_to(field_height);
    }

    /// Clamps the paddle so it lies fully within `[0, field_height]`.
    pub fn clamp_to(&mut self, field_height: f32) {
        if self.y < 0.0 {
            self.y = 0.0;
        }
        if self.y + self.h > field_height {
            self.y = field_height - self.h;
        }
    }

    /// Vertical center of the paddle.
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Bounding rectangle used for collisions and drawing.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

/// The ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub radius: f32,
    /// Velocity in pixels per second
    pub vel: Vec2,
}

impl Ball {
    /// Creates a ball at `pos` moving with `vel`.
    pub fn new(pos: Vec2, radius: f32, vel: Vec2) -> Self {
        Self { pos, radius, vel }
    }

    /// Creates the opening ball: centered, heading down and to the right.
    pub fn centered() -> Self {
        Self::new(field_center(), BALL_RADIUS, vec2(SERVE_SPEED_X, SERVE_SPEED_Y))
    }

    /// Moves the ball back to the field center without touching its velocity.
    pub fn recenter(&mut self) {
        self.pos = field_center();
    }

    /// Advances the position by one time step.
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Bounding square around the ball.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// Center of the playfield.
pub fn field_center() -> Vec2 {
    vec2(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0)
}

/// Points won by each side.
///
/// The counters are unbounded; only the number of drawn markers is capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    /// Gives one point to `side`.
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Points held by `side`.
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Number of score blocks to draw for `side`.
    pub fn markers(&self, side: Side) -> u32 {
        self.of(side).min(MAX_SCORE_MARKERS)
    }
}
