use thiserror::Error;

/// Errors raised at configuration and modifier boundaries.
///
/// Per-tick conditions inside the decision pipeline (ball moving away,
/// prediction budget exhausted) are not errors; they resolve to fallback
/// values instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid difficulty: {0:?} (expected \"easy\", \"medium\" or \"hard\")")]
    InvalidDifficulty(String),

    #[error("Invalid {name} modifier: {value} (must be a positive finite number)")]
    InvalidModifier { name: &'static str, value: f32 },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid config value: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Configuration problems must be fixed by the user; IO may succeed on retry.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidDifficulty(_)
                | Error::InvalidGeometry(_)
                | Error::InvalidConfig(_)
                | Error::ConfigParse(_)
                | Error::ConfigSerialize(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
