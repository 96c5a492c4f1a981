// Difficulty-driven imperfection layered over a bot's targeting

use std::time::Duration;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use super::clock::Clock;
use super::difficulty::DifficultyProfile;
use crate::game::{Ball, PaddleAction, Side};

/// Noise standard deviation at zero accuracy, as a fraction of window height
const MAX_NOISE_FRACTION: f32 = 0.2;

/// Stateful gate that makes a bot react late, misjudge and misplay.
///
/// Holds the reaction-delay timestamp and the last decision, so each
/// controlled paddle needs its own instance.
pub struct BehaviorModifier<C, R> {
    profile: DifficultyProfile,
    clock: C,
    rng: R,
    last_decision_time: Option<Duration>,
    last_decision: PaddleAction,
}

impl<C: Clock, R: Rng> BehaviorModifier<C, R> {
    pub fn new(profile: DifficultyProfile, clock: C, rng: R) -> Self {
        Self {
            profile,
            clock,
            rng,
            last_decision_time: None,
            last_decision: PaddleAction::Stay,
        }
    }

    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Activation gate: profiles with an activation distance ignore the ball
    /// until it is approaching and horizontally closer than that distance.
    pub fn should_react(&self, ball: &Ball, paddle_x: f32, side: Side) -> bool {
        match self.profile.activation_distance {
            None => true,
            Some(activation_distance) => {
                ball.is_approaching(side) && (ball.x - paddle_x).abs() < activation_distance
            }
        }
    }

    /// Reaction-delay gate.
    ///
    /// Returns true and restarts the delay when enough time has passed since
    /// the last accepted decision. A long pause opens the gate once, not
    /// once per missed interval.
    pub fn apply_reaction_delay(&mut self) -> bool {
        let now = self.clock.now();
        let ready = match self.last_decision_time {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.profile.reaction_delay(),
        };
        if ready {
            self.last_decision_time = Some(now);
        }
        ready
    }

    /// Target for bots that follow the ball instead of predicting it
    pub fn naive_target(&mut self, ball_y: f32) -> f32 {
        let jitter = self.profile.tracking_jitter;
        if jitter > 0.0 {
            ball_y + self.rng.gen_range(-jitter..=jitter)
        } else {
            ball_y
        }
    }

    /// Blur a predicted target with gaussian noise, clamped to the window
    pub fn apply_prediction_accuracy(&mut self, prediction_y: f32, window_height: f32) -> f32 {
        let inaccuracy = self.profile.prediction_inaccuracy;
        if inaccuracy <= 0.0 {
            return prediction_y;
        }

        let noise_std = window_height * MAX_NOISE_FRACTION * inaccuracy;
        let noise = match Normal::new(0.0, noise_std) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => 0.0,
        };
        (prediction_y + noise).clamp(0.0, window_height)
    }

    /// With the profile's error rate, swap the decision for one of the other two
    pub fn apply_decision_error(&mut self, optimal: PaddleAction) -> PaddleAction {
        if self.profile.error_rate > 0.0 && self.rng.gen::<f32>() < self.profile.error_rate {
            let mistake = optimal.random_alternative(&mut self.rng);
            debug!(?optimal, ?mistake, "injected decision error");
            return mistake;
        }
        optimal
    }

    pub fn last_decision(&self) -> PaddleAction {
        self.last_decision
    }

    pub fn record_decision(&mut self, decision: PaddleAction) {
        self.last_decision = decision;
    }

    pub fn decisiveness(&self) -> f32 {
        self.profile.decisiveness
    }

    pub fn speed_factor(&self) -> f32 {
        self.profile.max_speed_factor
    }

    pub fn uses_advanced_prediction(&self) -> bool {
        self.profile.use_advanced_prediction
    }

    /// Forget the last decision and restart the delay (new point)
    pub fn reset(&mut self) {
        self.last_decision_time = None;
        self.last_decision = PaddleAction::Stay;
    }
}
