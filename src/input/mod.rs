//! # Input Module
//!
//! Keyboard sampling for the two players and the global start, reset and quit keys.

use macroquad::prelude::*;

/// Movement keys held for one paddle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    /// Velocity for this frame: `-speed` for up, `speed` for down, zero when idle.
    ///
    /// When both keys are held, down wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use pong::PaddleIntent;
    ///
    /// let both = PaddleIntent { up: true, down: true };
    /// assert_eq!(both.velocity(400.0), 400.0);
    /// assert_eq!(PaddleIntent::default().velocity(400.0), 0.0);
    /// ```
    pub fn velocity(self, speed: f32) -> f32 {
        if self.down {
            speed
        } else if self.up {
            -speed
        } else {
            0.0
        }
    }
}

/// Everything the game needs to know about the keyboard for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Held movement keys for the left paddle
    pub left: PaddleIntent,
    /// Held movement keys for the right paddle
    pub right: PaddleIntent,
    /// Start key went down this frame
    pub start: bool,
    /// Reset key went down this frame
    pub reset: bool,
    /// Escape went down or the window was asked to close
    pub quit: bool,
}

/// Key assignments for every game action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left_up: KeyCode,
    pub left_down: KeyCode,
    pub right_up: KeyCode,
    pub right_down: KeyCode,
    pub start: KeyCode,
    pub reset: KeyCode,
    pub quit: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: KeyCode::W,
            left_down: KeyCode::S,
            right_up: KeyCode::Up,
            right_down: KeyCode::Down,
            start: KeyCode::Space,
            reset: KeyCode::R,
            quit: KeyCode::Escape,
        }
    }
}

/// Input handler that turns macroquad keyboard state into [`FrameInput`].
pub struct InputHandler {
    pub bindings: KeyBindings,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a handler with the default bindings.
    ///
    /// # Examples
    ///
    /// ```
    /// use pong::InputHandler;
    /// use macroquad::prelude::KeyCode;
    ///
    /// let handler = InputHandler::new();
    /// assert_eq!(handler.bindings.start, KeyCode::Space);
    /// ```
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::default(),
        }
    }

    /// Samples the live keyboard. Must run inside the macroquad window.
    ///
    /// Window close requests count as quit; call `prevent_quit` at startup so
    /// they reach the game loop instead of closing the window directly.
    pub fn poll(&self) -> FrameInput {
        let mut input = self.sample(is_key_down, is_key_pressed);
        input.quit |= is_quit_requested();
        input
    }

    /// Builds a [`FrameInput`] from arbitrary key queries.
    ///
    /// `held` answers whether a key is currently down, `pressed` whether it
    /// went down this frame.
    pub fn sample(
        &self,
        held: impl Fn(KeyCode) -> bool,
        pressed: impl Fn(KeyCode) -> bool,
    ) -> FrameInput {
        let keys = &self.bindings;
        FrameInput {
            left: PaddleIntent {
                up: held(keys.left_up),
                down: held(keys.left_down),
            },
            right: PaddleIntent {
                up: held(keys.right_up),
                down: held(keys.right_down),
            },
            start: pressed(keys.start),
            reset: pressed(keys.reset),
            quit: pressed(keys.quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_velocity() {
        assert_eq!(PaddleIntent { up: true, down: false }.velocity(400.0), -400.0);
        assert_eq!(PaddleIntent { up: false, down: true }.velocity(400.0), 400.0);
        assert_eq!(PaddleIntent { up: true, down: true }.velocity(400.0), 400.0);
        assert_eq!(PaddleIntent::default().velocity(400.0), 0.0);
    }

    #[test]
    fn test_sample_held_keys() {
        let handler = InputHandler::new();
        let held = [KeyCode::W, KeyCode::Down];
        let input = handler.sample(|k| held.contains(&k), |_| false);

        assert_eq!(input.left, PaddleIntent { up: true, down: false });
        assert_eq!(input.right, PaddleIntent { up: false, down: true });
        assert!(!input.start && !input.reset && !input.quit);
    }

    #[test]
    fn test_sample_pressed_keys() {
        let handler = InputHandler::new();
        let pressed = [KeyCode::Space, KeyCode::R, KeyCode::Escape];
        let input = handler.sample(|_| false, |k| pressed.contains(&k));

        assert!(input.start);
        assert!(input.reset);
        assert!(input.quit);
        assert_eq!(input.left, PaddleIntent::default());
    }

    #[test]
    fn test_held_start_key_is_not_a_press() {
        let handler = InputHandler::new();
        let input = handler.sample(|k| k == KeyCode::Space, |_| false);
        assert!(!input.start);
    }

    #[test]
    fn test_custom_bindings() {
        let handler = InputHandler {
            bindings: KeyBindings {
                left_up: KeyCode::Q,
                ..KeyBindings::default()
            },
        };
        let input = handler.sample(|k| k == KeyCode::Q, |_| false);
        assert!(input.left.up);
    }
}
