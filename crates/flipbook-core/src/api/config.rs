use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extensions::easing::Easing;

/// Tunables for the flip-book, supplied by the embedding page.
/// Loaded from JSON at runtime; every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// Seconds a page turn holds the transition lock (default: 0.8).
    pub turn_duration: f32,
    /// Seconds the whole book stays tilted at the start of a turn (default: 0.6).
    pub tilt_duration: f32,
    /// Magnitude of the book tilt in degrees (default: 3.0).
    pub tilt_degrees: f32,
    /// Minimum horizontal travel in pixels for a swipe to count (default: 0).
    pub swipe_threshold: f32,
    /// Easing applied to the turning leaf's rotation.
    pub easing: Easing,
    /// Visible fraction at which a page section becomes active (default: 0.5).
    pub activation_threshold: f32,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            turn_duration: 0.8,
            tilt_duration: 0.6,
            tilt_degrees: 3.0,
            swipe_threshold: 0.0,
            easing: Easing::default(),
            activation_threshold: 0.5,
        }
    }
}

impl BookConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BookConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the state machine cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("turn_duration", self.turn_duration),
            ("tilt_duration", self.tilt_duration),
            ("tilt_degrees", self.tilt_degrees),
            ("swipe_threshold", self.swipe_threshold),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        let t = self.activation_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "activation_threshold",
                value: t,
            });
        }
        Ok(())
    }
}

/// Why a config could not be loaded.
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON was malformed or had the wrong shape.
    Parse(serde_json::Error),
    /// A field parsed but is out of range.
    Invalid { field: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "invalid book config JSON: {err}"),
            ConfigError::Invalid { field, value } => {
                write!(f, "book config field `{field}` out of range: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
