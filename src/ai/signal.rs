// Move-signal providers: the policy half of a bot

use crate::game::{Ball, Geometry, Paddle};

/// Velocity scale used to normalize ball velocity (typical max ~10 px/tick)
pub const VELOCITY_SCALE: f32 = 10.0;

/// Normalized view of the field handed to a move-signal provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub ball_x: f32,   // [0, 1] across the window
    pub ball_y: f32,   // [0, 1] down the window
    pub ball_vx: f32,  // roughly [-1, 1]
    pub ball_vy: f32,  // roughly [-1, 1]
    pub paddle_y: f32, // [0, 1], paddle top edge
    /// Where the bot wants its paddle center, [0, 1]. Not part of `inputs()`.
    pub target_y: f32,
    /// Current paddle height including modifiers, in window heights.
    /// Not part of `inputs()`.
    pub paddle_height: f32,
}

impl Observation {
    pub const INPUTS: usize = 5;

    pub fn new(ball: &Ball, paddle: &Paddle, target_y: f32, geometry: &Geometry) -> Self {
        Self {
            ball_x: ball.x / geometry.window_width,
            ball_y: ball.y / geometry.window_height,
            ball_vx: ball.vx / VELOCITY_SCALE,
            ball_vy: ball.vy / VELOCITY_SCALE,
            paddle_y: paddle.y / geometry.window_height,
            target_y: target_y / geometry.window_height,
            paddle_height: paddle.current_height() / geometry.window_height,
        }
    }

    /// The fixed-length input vector `(ball_x, ball_y, ball_vx, ball_vy, paddle_y)`
    pub fn inputs(&self) -> [f32; Self::INPUTS] {
        [
            self.ball_x,
            self.ball_y,
            self.ball_vx,
            self.ball_vy,
            self.paddle_y,
        ]
    }
}

/// Anything that turns an observation into a continuous move signal.
///
/// A trained network, a scripted rule or a closure all fit. Negative values
/// mean "up", positive mean "down"; magnitude is confidence.
pub trait MoveSignal {
    fn evaluate(&self, observation: &Observation) -> f32;
}

impl<F> MoveSignal for F
where
    F: Fn(&Observation) -> f32,
{
    fn evaluate(&self, observation: &Observation) -> f32 {
        self(observation)
    }
}

/// Signal per window height of distance between paddle center and target
const TRACKER_GAIN: f32 = 4.0;

/// Scripted policy: steer the paddle center toward the target.
///
/// Returns the signed distance from paddle center to target in window
/// heights, scaled by `TRACKER_GAIN` and clamped to [-1, 1]. The center
/// follows the paddle's current height, so height modifiers are honored.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetTracker;

impl MoveSignal for TargetTracker {
    fn evaluate(&self, observation: &Observation) -> f32 {
        let center = observation.paddle_y + observation.paddle_height / 2.0;
        ((observation.target_y - center) * TRACKER_GAIN).clamp(-1.0, 1.0)
    }
}

/// Always returns the same value
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantSignal(pub f32);

impl MoveSignal for ConstantSignal {
    fn evaluate(&self, _observation: &Observation) -> f32 {
        self.0
    }
}
