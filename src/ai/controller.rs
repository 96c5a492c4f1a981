// Decision pipeline: prediction + behavior modifiers + move signal

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::behavior::BehaviorModifier;
use super::bot::Bot;
use super::clock::{Clock, SystemClock};
use super::difficulty::{Difficulty, DifficultyProfile};
use super::prediction::{TrajectoryPredictor, ACTION_DEAD_ZONE};
use super::signal::{MoveSignal, Observation};
use crate::game::{Ball, GameState, Geometry, Paddle, PaddleAction, Side};

/// What a bot wants its paddle to do this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub action: PaddleAction,
    /// Fraction of the paddle's speed to move at
    pub speed_factor: f32,
    /// Target the decision was derived from; `None` when a gate short-circuited
    pub target_y: Option<f32>,
    /// Raw output of the move-signal provider, when it was consulted
    pub signal: Option<f32>,
}

/// Per-paddle AI controller.
///
/// Owns the behavior modifier's reaction-delay state, so use one instance
/// per controlled paddle. The predictor inside is stateless.
pub struct AiController<S, C = SystemClock, R = StdRng> {
    name: String,
    predictor: TrajectoryPredictor,
    behavior: BehaviorModifier<C, R>,
    signal: S,
    steer_by_signal: bool,
}

impl<S: MoveSignal> AiController<S> {
    /// Wall-clock controller with an entropy-seeded random source
    pub fn new(difficulty: Difficulty, geometry: Geometry, signal: S) -> Self {
        Self::with_parts(
            difficulty.display_name(),
            difficulty.profile().clone(),
            TrajectoryPredictor::new(geometry),
            signal,
            SystemClock::new(),
            StdRng::from_entropy(),
        )
    }
}

impl<S: MoveSignal, C: Clock, R: Rng> AiController<S, C, R> {
    pub fn with_parts(
        name: &str,
        profile: DifficultyProfile,
        predictor: TrajectoryPredictor,
        signal: S,
        clock: C,
        rng: R,
    ) -> Self {
        Self {
            name: name.to_string(),
            predictor,
            behavior: BehaviorModifier::new(profile, clock, rng),
            signal,
            steer_by_signal: false,
        }
    }

    /// Read the move signal against the profile's decisiveness instead of
    /// steering toward the target
    pub fn steer_by_signal(mut self, enabled: bool) -> Self {
        self.steer_by_signal = enabled;
        self
    }

    pub fn predictor(&self) -> &TrajectoryPredictor {
        &self.predictor
    }

    pub fn behavior(&self) -> &BehaviorModifier<C, R> {
        &self.behavior
    }

    /// Choose an action for the paddle defending `side`
    pub fn decide(&mut self, ball: &Ball, paddle: &Paddle, side: Side) -> Decision {
        let speed_factor = self.behavior.speed_factor();

        // 1. Activation gate
        if !self.behavior.should_react(ball, paddle.facing_edge(side), side) {
            return Decision {
                action: PaddleAction::Stay,
                speed_factor,
                target_y: None,
                signal: None,
            };
        }

        // 2. Reaction delay: repeat the last decision until it expires
        if !self.behavior.apply_reaction_delay() {
            return Decision {
                action: self.behavior.last_decision(),
                speed_factor,
                target_y: None,
                signal: None,
            };
        }

        // 3. Targeting
        let geometry = *self.predictor.geometry();
        let raw_target = if self.behavior.uses_advanced_prediction() {
            self.predictor.intercept_point(ball, paddle, side)
        } else {
            self.behavior.naive_target(ball.y)
        };

        // 4. Prediction noise
        let target_y = self
            .behavior
            .apply_prediction_accuracy(raw_target, geometry.window_height);

        // 5. Move signal
        let observation = Observation::new(ball, paddle, target_y, &geometry);
        let signal = self.signal.evaluate(&observation);

        // 6. Decision
        let intended = if self.steer_by_signal {
            PaddleAction::from_signal(signal, self.behavior.decisiveness())
        } else {
            PaddleAction::toward(target_y, paddle.center_y(), ACTION_DEAD_ZONE)
        };

        // 7. Error injection
        let action = self.behavior.apply_decision_error(intended);

        // 8. Remember for the delay gate
        self.behavior.record_decision(action);

        trace!(bot = %self.name, ?side, target_y, signal, ?action, "decision");

        Decision {
            action,
            speed_factor,
            target_y: Some(target_y),
            signal: Some(signal),
        }
    }

    /// Where the ball will be after the profile's look-ahead horizon
    pub fn look_ahead(&self, ball: &Ball, paddle: &Paddle, side: Side) -> Ball {
        let steps = self.behavior.profile().look_ahead_steps;
        self.predictor.advance(ball, steps, Some((paddle, side)))
    }
}

impl<S: MoveSignal, C: Clock, R: Rng> Bot for AiController<S, C, R> {
    fn get_action(&mut self, game_state: &GameState, side: Side) -> Decision {
        self.decide(&game_state.ball, game_state.paddle(side), side)
    }

    fn reset(&mut self) {
        self.behavior.reset();
    }

    fn name(&self) -> &str {
        &self.name
    }
}
