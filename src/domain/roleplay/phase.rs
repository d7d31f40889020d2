//! Role-play conversation phases.
//!
//! Phases describe how receptive the simulated counterpart is to the
//! pitch. They only ever move forward: once the counterpart has warmed
//! up, the conversation never returns to an earlier stance.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The counterpart's stance within a role-play conversation.
///
/// Phases flow strictly forward:
/// - `Skeptical` → `Interested` → `Considering`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Guarded and dismissive; new terms are met with sarcasm.
    #[default]
    Skeptical,

    /// Asking practical questions; tone softening but still cautious.
    Interested,

    /// Positive but deliberate; wants materials before committing.
    Considering,
}

impl Phase {
    /// All phases in conversational order.
    pub const ORDER: [Phase; 3] = [Phase::Skeptical, Phase::Interested, Phase::Considering];

    /// Returns the phase that follows this one, or `None` for the last phase.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Self::Skeptical => Some(Self::Interested),
            Self::Interested => Some(Self::Considering),
            Self::Considering => None,
        }
    }

    /// Returns true if no phase follows this one.
    pub fn is_final(&self) -> bool {
        self.next().is_none()
    }

    /// Machine-readable identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skeptical => "skeptical",
            Self::Interested => "interested",
            Self::Considering => "considering",
        }
    }

    /// Japanese label used in prompts and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Skeptical => "懐疑的",
            Self::Interested => "興味",
            Self::Considering => "検討",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}
