// Reflex Pong configuration types
// All settings have defaults matching the classic 800x600 table

use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::error::{Error, Result};
use crate::game::{Geometry, Side};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

impl Config {
    /// Check geometry and difficulty tags; an unknown tag is an error, never a default
    pub fn validate(&self) -> Result<()> {
        self.physics.geometry().validate()?;
        if self.physics.winning_score == 0 {
            return Err(Error::InvalidConfig(
                "winning_score must be at least 1".to_string(),
            ));
        }
        self.difficulty(Side::Left)?;
        self.difficulty(Side::Right)?;
        Ok(())
    }

    pub fn difficulty(&self, side: Side) -> Result<Difficulty> {
        match side {
            Side::Left => self.ai.left_difficulty.parse(),
            Side::Right => self.ai.right_difficulty.parse(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Window dimensions in pixels
    pub window_width: f32,
    pub window_height: f32,

    // Paddle size in pixels and speed in pixels per tick
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,

    // Gap between each paddle and its side of the window
    pub paddle_offset: f32,

    pub ball_radius: f32,

    // Ball speed cap in pixels per tick; also scales the bounce angle
    pub ball_max_velocity: f32,

    // Score required to win
    pub winning_score: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let geometry = Geometry::default();
        Self {
            window_width: geometry.window_width,
            window_height: geometry.window_height,
            paddle_width: geometry.paddle_width,
            paddle_height: geometry.paddle_height,
            paddle_speed: geometry.paddle_speed,
            paddle_offset: geometry.paddle_offset,
            ball_radius: geometry.ball_radius,
            ball_max_velocity: geometry.max_velocity,
            winning_score: 10,
        }
    }
}

impl PhysicsConfig {
    pub fn geometry(&self) -> Geometry {
        Geometry {
            window_width: self.window_width,
            window_height: self.window_height,
            paddle_width: self.paddle_width,
            paddle_height: self.paddle_height,
            paddle_speed: self.paddle_speed,
            paddle_offset: self.paddle_offset,
            ball_radius: self.ball_radius,
            max_velocity: self.ball_max_velocity,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // AI difficulties: "easy", "medium", "hard"
    pub left_difficulty: String,
    pub right_difficulty: String,

    // Wall bounces the predictor simulates before settling for a best guess
    pub max_bounces: u32,

    // Seed for noise and mistakes (omit for a different match every run)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            left_difficulty: "medium".to_string(),
            right_difficulty: "hard".to_string(),
            max_bounces: crate::ai::DEFAULT_MAX_BOUNCES,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    // Stop after this many ticks even if nobody has won
    pub max_ticks: u64,

    // Pace ticks at 60 FPS on the wall clock instead of running flat out
    pub realtime: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_ticks: 36_000, // 10 minutes at 60 FPS
            realtime: false,
        }
    }
}
