//! Reflex Pong: the decision core of a Pong AI opponent.
//!
//! `game` holds the table model and collision resolver, `ai` the trajectory
//! predictor, difficulty profiles, behavior modifier and decision pipeline.
//! `game_modes` runs headless AI-vs-AI matches on top of both.

use std::time::Duration;

pub mod ai;
pub mod config;
pub mod debug;
pub mod error;
pub mod game;
pub mod game_modes;

pub use error::{Error, Result};

pub const TARGET_FPS: u64 = 60;
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / TARGET_FPS);
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0; // One physics tick
