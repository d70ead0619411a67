//! # Game State Module
//!
//! Central game state and the per-frame update that advances it.
//!
//! All match state lives in [`GameState`] and is passed by reference through
//! the input, physics and render phases. Nothing is global, so every phase can
//! be driven headlessly.

use crate::config::{SERVE_SPEED_X, SERVE_SPEED_Y, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::game::{physics, Ball, DirectionSource, GameEvent, Paddle, Score, Side};
use crate::input::FrameInput;
use crate::scenes::SceneType;

/// Complete state of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Paddle controlled with W/S
    pub left: Paddle,
    /// Paddle controlled with the arrow keys
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// While false, only the prompt is shown and the simulation is frozen
    pub launched: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Creates the pre-launch state: paddles centered, ball at the field center.
    ///
    /// # Examples
    ///
    /// ```
    /// use pong::{GameState, SceneType};
    ///
    /// let state = GameState::new();
    /// assert!(!state.launched);
    /// assert_eq!(state.scene(), SceneType::Prompt);
    /// ```
    pub fn new() -> Self {
        Self {
            left: Paddle::for_side(Side::Left),
            right: Paddle::for_side(Side::Right),
            ball: Ball::centered(),
            score: Score::default(),
            launched: false,
        }
    }

    /// Scene implied by the launch flag.
    pub fn scene(&self) -> SceneType {
        if self.launched {
            SceneType::Playing
        } else {
            SceneType::Prompt
        }
    }

    /// Advances the game by one frame.
    ///
    /// Discrete key presses are handled first: start launches from the prompt,
    /// reset re-serves while playing. Before launch nothing else changes.
    /// Once launched the frame runs paddle steering and integration, ball
    /// integration, wall bounces, paddle hits and goal checks, in that order.
    ///
    /// Returns the events that happened during the frame.
    pub fn update<R: DirectionSource>(
        &mut self,
        input: &FrameInput,
        dt: f32,
        rng: &mut R,
    ) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if input.start && self.launch(rng) {
            events.push(GameEvent::Launched);
        }
        if input.reset && self.reset_ball(rng) {
            events.push(GameEvent::BallReset);
        }

        if !self.launched {
            return events;
        }

        self.step_physics(input, dt, rng, &mut events);
        events
    }

    /// Leaves the prompt screen and serves in a random direction.
    ///
    /// Returns false if the game was already running.
    pub fn launch<R: DirectionSource>(&mut self, rng: &mut R) -> bool {
        if self.launched {
            return false;
        }
        self.launched = true;
        self.serve_random(rng);
        true
    }

    /// Re-centers the ball and serves it in a random direction.
    ///
    /// Scores and paddles are untouched. Ignored before launch, returning false.
    pub fn reset_ball<R: DirectionSource>(&mut self, rng: &mut R) -> bool {
        if !self.launched {
            return false;
        }
        self.serve_random(rng);
        true
    }

    fn serve_random<R: DirectionSource>(&mut self, rng: &mut R) {
        self.ball.recenter();
        self.ball.vel.x = SERVE_SPEED_X * rng.sign();
        self.ball.vel.y = SERVE_SPEED_Y * rng.sign();
    }

    /// Serves toward the player who just scored.
    fn serve_after_point<R: DirectionSource>(&mut self, scorer: Side, rng: &mut R) {
        self.ball.recenter();
        self.ball.vel.x = match scorer {
            Side::Left => -SERVE_SPEED_X,
            Side::Right => SERVE_SPEED_X,
        };
        self.ball.vel.y = SERVE_SPEED_Y * rng.sign();
    }

    fn step_physics<R: DirectionSource>(
        &mut self,
        input: &FrameInput,
        dt: f32,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        self.left.steer(input.left);
        self.right.steer(input.right);
        self.left.integrate(dt, WINDOW_HEIGHT);
        self.right.integrate(dt, WINDOW_HEIGHT);

        self.ball.integrate(dt);
        physics::bounce_off_walls(&mut self.ball, WINDOW_HEIGHT, events);

        for (paddle, side) in [(&self.left, Side::Left), (&self.right, Side::Right)] {
            if physics::deflect_off_paddle(&mut self.ball, paddle, side) {
                events.push(GameEvent::PaddleHit {
                    side,
                    speed_x: self.ball.vel.x.abs(),
                });
            }
        }

        if let Some(scorer) = physics::goal_scored(&self.ball, WINDOW_WIDTH) {
            self.score.award(scorer);
            self.serve_after_point(scorer, rng);
            events.push(GameEvent::Scored {
                scorer,
                score: self.score,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BALL_RADIUS, PADDLE_HEIGHT, PADDLE_SPEED};
    use crate::game::{field_center, SequenceSource, Wall};
    use crate::input::PaddleIntent;
    use macroquad::math::vec2;

    fn launched_state() -> GameState {
        let mut state = GameState::new();
        state.launch(&mut SequenceSource::new([true]));
        state
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert!(!state.launched);
        assert_eq!(state.score, Score::default());
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_prompt_frames_change_nothing() {
        let mut state = GameState::new();
        let before = state.clone();
        let input = FrameInput {
            left: PaddleIntent { up: true, down: false },
            right: PaddleIntent { up: false, down: true },
            reset: true,
            ..FrameInput::default()
        };
        let mut rng = SequenceSource::new([true]);
        for _ in 0..10 {
            let events = state.update(&input, 0.016, &mut rng);
            assert!(events.is_empty());
        }
        assert_eq!(state, before);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_launch_uses_two_flips() {
        let mut state = GameState::new();
        let mut rng = SequenceSource::new([false, true]);
        let input = FrameInput {
            start: true,
            ..FrameInput::default()
        };
        let events = state.update(&input, 0.0, &mut rng);
        assert_eq!(events, vec![GameEvent::Launched]);
        assert!(state.launched);
        assert_eq!(state.ball.vel, vec2(-SERVE_SPEED_X, SERVE_SPEED_Y));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_launch_twice_is_ignored() {
        let mut state = launched_state();
        let mut rng = SequenceSource::new([false]);
        assert!(!state.launch(&mut rng));
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_reset_keeps_scores_and_paddles() {
        let mut state = launched_state();
        state.score = Score { left: 3, right: 5 };
        state.left.y = 10.0;
        state.ball.pos = vec2(123.0, 45.0);

        let mut rng = SequenceSource::new([false, false]);
        assert!(state.reset_ball(&mut rng));
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.vel, vec2(-SERVE_SPEED_X, -SERVE_SPEED_Y));
        assert_eq!(state.score, Score { left: 3, right: 5 });
        assert_eq!(state.left.y, 10.0);
    }

    #[test]
    fn test_paddles_follow_input() {
        let mut state = launched_state();
        let input = FrameInput {
            left: PaddleIntent { up: true, down: false },
            right: PaddleIntent { up: false, down: true },
            ..FrameInput::default()
        };
        let left_y = state.left.y;
        let right_y = state.right.y;
        state.update(&input, 0.05, &mut SequenceSource::default());
        assert_eq!(state.left.vy, -PADDLE_SPEED);
        assert_eq!(state.left.y, left_y - PADDLE_SPEED * 0.05);
        assert_eq!(state.right.y, right_y + PADDLE_SPEED * 0.05);
    }

    #[test]
    fn test_wall_bounce_during_update() {
        let mut state = launched_state();
        state.ball.pos = vec2(400.0, 10.0);
        state.ball.vel = vec2(300.0, -200.0);
        let events = state.update(&FrameInput::default(), 0.05, &mut SequenceSource::default());
        assert_eq!(events, vec![GameEvent::WallBounce(Wall::Top)]);
        assert_eq!(state.ball.pos.y, BALL_RADIUS);
        assert_eq!(state.ball.vel.y, 200.0);
    }

    #[test]
    fn test_right_scores_when_ball_exits_left() {
        let mut state = launched_state();
        state.ball.pos = vec2(5.0, 20.0);
        state.ball.vel = vec2(-300.0, 0.0);
        let mut rng = SequenceSource::new([false]);
        let events = state.update(&FrameInput::default(), 0.05, &mut rng);

        assert_eq!(state.score, Score { left: 0, right: 1 });
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.vel, vec2(SERVE_SPEED_X, -SERVE_SPEED_Y));
        assert!(matches!(
            events.last(),
            Some(GameEvent::Scored { scorer: Side::Right, .. })
        ));
    }

    #[test]
    fn test_left_scores_when_ball_exits_right() {
        let mut state = launched_state();
        state.ball.pos = vec2(795.0, 20.0);
        state.ball.vel = vec2(300.0, 0.0);
        let mut rng = SequenceSource::new([true]);
        state.update(&FrameInput::default(), 0.05, &mut rng);

        assert_eq!(state.score, Score { left: 1, right: 0 });
        assert_eq!(state.ball.pos, field_center());
        assert_eq!(state.ball.vel, vec2(-SERVE_SPEED_X, SERVE_SPEED_Y));
    }

    #[test]
    fn test_paddle_hit_during_update() {
        let mut state = launched_state();
        state.ball.pos = vec2(70.0, state.left.center_y());
        state.ball.vel = vec2(-300.0, 0.0);
        let events = state.update(&FrameInput::default(), 0.05, &mut SequenceSource::default());

        assert_eq!(
            events,
            vec![GameEvent::PaddleHit {
                side: Side::Left,
                speed_x: 310.0
            }]
        );
        assert_eq!(state.ball.vel.x, 310.0);
        assert!(state.left.y <= crate::config::WINDOW_HEIGHT - PADDLE_HEIGHT);
    }
}
