//! Local field checks for transcriber configuration
//!
//! The form schema already restricts `model` to the supported set and
//! `temperature` to [0, 1]; these checks are the second line of defense for
//! records built programmatically, before the remote cross-check runs.

use std::fmt;

use super::TranscriberConfig;

/// Temperature bounds accepted by the Whisper endpoints
pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 1.0;

/// Local validation errors, caught before any network round-trip
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValidationError {
    /// API key is empty
    EmptyApiKey,
    /// Display name is empty
    EmptyName,
    /// Temperature out of valid range
    InvalidTemperature { value: f32, min: f32, max: f32 },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyApiKey => write!(f, "API key cannot be empty"),
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidTemperature { value, min, max } => {
                write!(
                    f,
                    "Invalid temperature {}: must be between {} and {}",
                    value, min, max
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Validate temperature value
pub fn validate_temperature(temp: f32) -> Result<(), ConfigValidationError> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temp) {
        return Err(ConfigValidationError::InvalidTemperature {
            value: temp,
            min: MIN_TEMPERATURE,
            max: MAX_TEMPERATURE,
        });
    }

    Ok(())
}

/// Validate a complete TranscriberConfig
pub fn validate_transcriber_config(
    config: &TranscriberConfig,
) -> Result<(), ConfigValidationError> {
    if config.api_key.is_empty() {
        return Err(ConfigValidationError::EmptyApiKey);
    }

    if config.name.is_empty() {
        return Err(ConfigValidationError::EmptyName);
    }

    if let Some(temp) = config.temperature {
        validate_temperature(temp)?;
    }

    Ok(())
}
