//! Character domain module.
//!
//! Personas the agent plays. Profiles are immutable inputs to the
//! instruction builder; the core never mutates them.

mod presets;
mod profile;

pub use presets::CharacterType;
pub use profile::{CharacterProfile, EnvironmentalCues, PersonalityTraits};
