//! # Scene Management System
//!
//! Drives the game loop and switches between the prompt screen and play.
//!
//! The scene is derived from the state's launch flag, so the loop itself
//! carries no mode of its own beyond "keep running".

use crate::config::{PLAY_FRAME_DELAY, PROMPT_FRAME_DELAY};
use crate::game::{clamp_frame_time, DirectionSource, GameEvent, GameState};
use crate::input::{FrameInput, InputHandler};
use crate::rendering::{render, Canvas, MacroquadCanvas};
use crate::PongResult;
use log::{debug, info};
use macroquad::time::get_frame_time;
use macroquad::window::next_frame;
use std::time::Duration;

/// Represents the current scene in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    /// Waiting for the start key
    Prompt,
    /// Match in progress
    Playing,
}

/// What the loop should do after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Quit,
}

/// Voluntary pause after presenting a frame, so the loop idles without vsync.
pub fn frame_delay(scene: SceneType) -> Duration {
    match scene {
        SceneType::Prompt => PROMPT_FRAME_DELAY,
        SceneType::Playing => PLAY_FRAME_DELAY,
    }
}

/// Runs one frame: update the state from `input`, then draw it.
///
/// `dt` is the raw elapsed time and is clamped here. A quit request ends
/// the frame before anything is updated or drawn.
pub fn run_frame<C, R>(
    state: &mut GameState,
    input: &FrameInput,
    dt: f32,
    canvas: &mut C,
    rng: &mut R,
) -> FrameOutcome
where
    C: Canvas + ?Sized,
    R: DirectionSource,
{
    if input.quit {
        return FrameOutcome::Quit;
    }

    let events = state.update(input, clamp_frame_time(dt), rng);
    for event in &events {
        log_event(event);
    }

    render(canvas, state);
    FrameOutcome::Continue
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::Launched => info!("Ball launched"),
        GameEvent::Scored { scorer, score } => {
            info!("{:?} scores ({} - {})", scorer, score.left, score.right)
        }
        other => debug!("{:?}", other),
    }
}

/// The main scene manager that owns the state and runs the loop
pub struct SceneManager<R: DirectionSource> {
    state: GameState,
    canvas: MacroquadCanvas,
    input_handler: InputHandler,
    rng: R,
}

impl<R: DirectionSource> SceneManager<R> {
    /// Creates the drawing resources and a fresh pre-launch state.
    pub fn new(input_handler: InputHandler, rng: R) -> PongResult<Self> {
        let canvas = MacroquadCanvas::new()?;
        Ok(Self {
            state: GameState::new(),
            canvas,
            input_handler,
            rng,
        })
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Runs frames until the player quits.
    pub async fn run(&mut self) -> PongResult<()> {
        loop {
            let dt = get_frame_time();
            let input = self.input_handler.poll();

            let outcome = run_frame(
                &mut self.state,
                &input,
                dt,
                &mut self.canvas,
                &mut self.rng,
            );
            if outcome == FrameOutcome::Quit {
                info!("Quit requested");
                break;
            }

            next_frame().await;
            idle(frame_delay(self.state.scene()));
        }

        info!(
            "Game loop ended (final score {} - {})",
            self.state.score.left, self.state.score.right
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn idle(delay: Duration) {
    std::thread::sleep(delay);
}

#[cfg(target_arch = "wasm32")]
fn idle(_delay: Duration) {}
