// Bot trait for AI-controlled paddles

use super::controller::Decision;
use crate::game::{GameState, Side};

/// Trait for AI bot implementations
///
/// Bots can maintain internal state and make decisions based on the game state.
/// One bot drives one paddle; sharing an instance between paddles mixes up
/// their reaction timing.
pub trait Bot {
    /// Decide what the paddle defending `side` should do this tick
    fn get_action(&mut self, game_state: &GameState, side: Side) -> Decision;

    /// Reset bot internal state (called when a new point or game starts)
    fn reset(&mut self);

    /// Bot name for debugging/display
    fn name(&self) -> &str;
}
