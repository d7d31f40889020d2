//! Role-play conversation domain module.
//!
//! Owns the phase state machine of a simulated sales conversation: the
//! phase model, per-phase configuration, transition triggers, the mutable
//! conversation state, and the keyword analysis that feeds it.

mod analyzer;
mod data_point;
mod phase;
mod phase_config;
mod state;
mod trigger;

pub use analyzer::{
    analyze_agent_utterance, analyze_user_message, AgentUtteranceAnalysis, MessageAnalysis,
};
pub use data_point::{DataPoint, DisclosedData};
pub use phase::Phase;
pub use phase_config::{phase_config, PhaseConfig};
pub use state::{ConversationState, TransitionReason};
pub use trigger::TransitionTrigger;
