//! Timing and hint configuration.
//!
//! Defaults reproduce the stock widget. A page can override any subset by
//! embedding a JSON object; unknown keys are rejected so typos surface instead
//! of silently falling back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::board::ImageRef;
use crate::consts::{
    DEFAULT_CELEBRATION_DELAY_MS, DEFAULT_CELEBRATION_MS, DEFAULT_HINT_AFTER_ATTEMPTS, DEFAULT_IMAGE_PATH,
    DEFAULT_PREVIEW_MS, DEFAULT_SCRAMBLE_MS, DEFAULT_SHUFFLE_DELAY_MS,
};

/// Longest delay any single timer may be configured with.
pub const MAX_TIMER_MS: u32 = 60_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid puzzle config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange { field: &'static str, value: u32, min: u32, max: u32 },
    #[error("default_image must not be empty")]
    EmptyDefaultImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Delay before a freshly loaded picture is scrambled.
    pub shuffle_delay_ms: u32,
    /// Length of the scramble animation window.
    pub scramble_ms: u32,
    /// How long a preview shows the assembled picture.
    pub preview_ms: u32,
    /// Pause between the winning move and the celebration.
    pub celebration_delay_ms: u32,
    /// Length of the celebration effect.
    pub celebration_ms: u32,
    /// Move attempts after which auto-solve is offered.
    pub hint_after_attempts: u32,
    /// Picture used by "Use Default Image".
    pub default_image: String,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            shuffle_delay_ms: DEFAULT_SHUFFLE_DELAY_MS,
            scramble_ms: DEFAULT_SCRAMBLE_MS,
            preview_ms: DEFAULT_PREVIEW_MS,
            celebration_delay_ms: DEFAULT_CELEBRATION_DELAY_MS,
            celebration_ms: DEFAULT_CELEBRATION_MS,
            hint_after_attempts: DEFAULT_HINT_AFTER_ATTEMPTS,
            default_image: DEFAULT_IMAGE_PATH.to_owned(),
        }
    }
}

impl PuzzleConfig {
    /// Parse and validate a JSON override. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed JSON, unknown keys, or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first field found out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timers = [
            ("shuffle_delay_ms", self.shuffle_delay_ms),
            ("scramble_ms", self.scramble_ms),
            ("preview_ms", self.preview_ms),
            ("celebration_delay_ms", self.celebration_delay_ms),
            ("celebration_ms", self.celebration_ms),
        ];
        for (field, value) in timers {
            check_range(field, value, 0, MAX_TIMER_MS)?;
        }
        check_range("hint_after_attempts", self.hint_after_attempts, 1, u32::MAX)?;
        if self.default_image.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultImage);
        }
        Ok(())
    }

    #[must_use]
    pub fn default_image(&self) -> ImageRef {
        ImageRef::from(self.default_image.as_str())
    }
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value, min, max })
    }
}
