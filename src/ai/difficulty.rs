use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;

/// Difficulty selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Reactive ball-follower with slow reflexes and frequent mistakes
    Easy,
    /// Predicts trajectories with moderate noise and occasional mistakes
    Medium,
    /// Perfect prediction, instant reactions, no mistakes
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Beginner-friendly - reacts late and often misjudges",
            Difficulty::Medium => "Reads the bounce - occasional errors",
            Difficulty::Hard => "Perfect reflexes - never misses a read",
        }
    }

    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(Error::InvalidDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tuning parameters shaping how a bot plays at one difficulty
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyProfile {
    pub reaction_delay_ms: u64,               // Minimum time between fresh decisions
    pub prediction_inaccuracy: f32,           // 0.0 = perfect target, 1.0 = noise of 20% window height (1σ)
    pub error_rate: f32,                      // Probability of swapping the decision for a wrong one
    pub decisiveness: f32,                    // Signal magnitude needed to move when steering by signal
    pub use_advanced_prediction: bool,        // Bounce-aware intercept vs. following the ball
    pub max_speed_factor: f32,                // Fraction of paddle speed the bot may use
    pub activation_distance: Option<f32>,     // Only react to an approaching ball closer than this
    pub tracking_jitter: f32,                 // Max uniform offset added to the naive target
    pub look_ahead_steps: u32,                // Short-horizon preview length
}

impl DifficultyProfile {
    pub fn reaction_delay(&self) -> Duration {
        Duration::from_millis(self.reaction_delay_ms)
    }

    pub fn prediction_accuracy(&self) -> f32 {
        1.0 - self.prediction_inaccuracy
    }
}

static EASY: DifficultyProfile = DifficultyProfile {
    reaction_delay_ms: 150,
    prediction_inaccuracy: 0.4,
    error_rate: 0.25,
    decisiveness: 0.3,
    use_advanced_prediction: false,
    max_speed_factor: 0.7,
    activation_distance: Some(300.0),
    tracking_jitter: 50.0,
    look_ahead_steps: 3,
};

static MEDIUM: DifficultyProfile = DifficultyProfile {
    reaction_delay_ms: 50,
    prediction_inaccuracy: 0.15,
    error_rate: 0.10,
    decisiveness: 0.5,
    use_advanced_prediction: true,
    max_speed_factor: 0.9,
    activation_distance: None,
    tracking_jitter: 0.0,
    look_ahead_steps: 8,
};

static HARD: DifficultyProfile = DifficultyProfile {
    reaction_delay_ms: 0,
    prediction_inaccuracy: 0.0,
    error_rate: 0.0,
    decisiveness: 0.7,
    use_advanced_prediction: true,
    max_speed_factor: 1.0,
    activation_distance: None,
    tracking_jitter: 0.0,
    look_ahead_steps: 15,
};
