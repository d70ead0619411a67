//! # Pong
//!
//! A two-paddle ball game rendered with immediate-mode 2D drawing primitives.
//!
//! ## Architecture Overview
//!
//! The whole game is one control loop: poll input, integrate, collide, render.
//! It is split into phases that each take the explicit [`GameState`] by reference:
//!
//! - **Game State**: paddles, ball, scores and the launch flag, advanced once per frame
//! - **Input**: keyboard sampling turned into a plain [`FrameInput`] snapshot
//! - **Physics**: integration, wall and paddle collisions, scoring
//! - **Rendering**: drawing through the [`Canvas`] trait, backed by macroquad at runtime
//! - **Scenes**: the loop driver that dispatches between the prompt and play screens

pub mod game;
pub mod input;
pub mod rendering;
pub mod scenes;

pub use game::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;

/// Core error type for the game.
#[derive(thiserror::Error, Debug)]
pub enum PongError {
    /// Display subsystem could not be brought up
    #[error("Display initialization failed: {0}")]
    DisplayInit(String),

    /// The game window is missing or unusable
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// Drawing resources could not be created
    #[error("Renderer creation failed: {0}")]
    RendererCreation(String),

    /// A command line argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type used throughout the crate.
pub type PongResult<T> = Result<T, PongError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    use std::time::Duration;

    /// Window title
    pub const WINDOW_TITLE: &str = "Pong";

    /// Window width in pixels
    pub const WINDOW_WIDTH: f32 = 800.0;

    /// Window height in pixels
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Largest time step fed to the physics, in seconds
    pub const MAX_FRAME_TIME: f32 = 0.05;

    /// Paddle width in pixels
    pub const PADDLE_WIDTH: f32 = 16.0;

    /// Paddle height in pixels
    pub const PADDLE_HEIGHT: f32 = 100.0;

    /// Gap between a paddle and its side of the window
    pub const PADDLE_MARGIN: f32 = 40.0;

    /// Paddle speed while a movement key is held, in pixels per second
    pub const PADDLE_SPEED: f32 = 400.0;

    /// Ball radius in pixels
    pub const BALL_RADIUS: f32 = 8.0;

    /// Horizontal serve speed
    pub const SERVE_SPEED_X: f32 = 300.0;

    /// Vertical serve speed
    pub const SERVE_SPEED_Y: f32 = 200.0;

    /// Horizontal speed added on every paddle hit
    pub const PADDLE_HIT_SPEEDUP: f32 = 10.0;

    /// Vertical speed when the ball strikes a paddle's very edge
    pub const MAX_DEFLECT_SPEED: f32 = 300.0;

    /// Score blocks drawn per side at most
    pub const MAX_SCORE_MARKERS: u32 = 10;

    /// Text shown before the first serve
    pub const PROMPT_TEXT: &str = "PRESS SPACE TO PLAY";

    /// Pixel scale of the prompt glyphs
    pub const PROMPT_SCALE: i32 = 6;

    /// Voluntary delay per frame on the prompt screen
    pub const PROMPT_FRAME_DELAY: Duration = Duration::from_millis(16);

    /// Voluntary delay per frame during play
    pub const PLAY_FRAME_DELAY: Duration = Duration::from_millis(1);
}
