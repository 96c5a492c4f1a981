// AI module for paddle opponents

mod behavior;
mod bot;
mod clock;
mod controller;
mod difficulty;
mod prediction;
mod signal;

pub use behavior::BehaviorModifier;
pub use bot::Bot;
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{AiController, Decision};
pub use difficulty::{Difficulty, DifficultyProfile};
pub use prediction::{
    Intercept, TrajectoryPredictor, ACTION_DEAD_ZONE, DEFAULT_MAX_BOUNCES, MAX_ITERATIONS,
};
pub use signal::{ConstantSignal, MoveSignal, Observation, TargetTracker, VELOCITY_SCALE};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::game::Geometry;

/// Create a wall-clock bot for a difficulty.
///
/// The bot steers by target with a `TargetTracker` as its move signal.
/// Pass a seed for reproducible noise and mistakes.
pub fn create_bot(difficulty: Difficulty, geometry: Geometry, seed: Option<u64>) -> Box<dyn Bot> {
    info!(%difficulty, ?seed, "creating bot");
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Box::new(AiController::with_parts(
        difficulty.display_name(),
        difficulty.profile().clone(),
        TrajectoryPredictor::new(geometry),
        TargetTracker,
        SystemClock::new(),
        rng,
    ))
}
