//! Role-play session configuration

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::domain::character::CharacterType;

use super::error::ValidationError;

/// Sampling temperatures the realtime model accepts.
pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.6..=1.2;

/// Settings for the persona and the voice agent that plays it
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Built-in persona to play
    #[serde(default)]
    pub character_type: CharacterType,

    /// YAML character profile; takes precedence over `character_type`
    pub character_file: Option<PathBuf>,

    /// LLM sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Voice the agent speaks with
    #[serde(default = "default_voice")]
    pub voice: String,

    /// Name the agent worker registers under
    #[serde(default = "default_agent_name")]
    pub agent_name: String,
}

fn default_temperature() -> f64 {
    0.8
}

fn default_voice() -> String {
    "onyx".to_string()
}

fn default_agent_name() -> String {
    "bank-sales-agent".to_string()
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !TEMPERATURE_RANGE.contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature(self.temperature));
        }
        if self.voice.trim().is_empty() {
            return Err(ValidationError::MissingRequired("session.voice"));
        }
        if self.agent_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("session.agent_name"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            character_type: CharacterType::default(),
            character_file: None,
            temperature: default_temperature(),
            voice: default_voice(),
            agent_name: default_agent_name(),
        }
    }
}
