//! Character profile value objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::ValidationError;

/// Persona the agent plays during the role-play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub age: u32,
    pub company_name: String,
    pub company_size: String,
    pub industry: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub concerns: Vec<String>,
    pub personality: PersonalityTraits,
    /// Example phrases grouped by situation (opening, skepticism, ...).
    #[serde(default)]
    pub speech_patterns: BTreeMap<String, Vec<String>>,
    pub environment: EnvironmentalCues,
}

/// How the persona decides, talks, and feels about new proposals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityTraits {
    pub decision_style: String,
    pub communication: String,
    pub expertise: String,
    pub attitude: String,
    #[serde(default)]
    pub tone: Option<String>,
}

/// Flavor text describing where and when the conversation happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentalCues {
    pub setting: String,
    pub time_context: String,
    pub physical_state: String,
    #[serde(default)]
    pub business_context: Option<String>,
}

impl CharacterProfile {
    /// Oldest age accepted for a persona.
    pub const MAX_AGE: u32 = 120;

    /// Checks that the fields the prompt relies on are present.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        if self.age == 0 || self.age > Self::MAX_AGE {
            return Err(ValidationError::out_of_range(
                "age",
                1,
                Self::MAX_AGE as i32,
                self.age.min(i32::MAX as u32) as i32,
            ));
        }
        Ok(())
    }
}
