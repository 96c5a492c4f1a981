pub mod action;
pub mod physics;
pub mod state;

pub use action::PaddleAction;
pub use physics::{bounce_velocity, move_paddle, update, PhysicsEvents};
pub use state::{Ball, GameState, Geometry, Paddle, Side};
