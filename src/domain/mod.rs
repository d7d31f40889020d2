//! Domain layer containing the role-play engine and its value types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, scores, errors)
//! - `roleplay` - Phases, conversation state, transition rules, utterance analysis
//! - `character` - Personas the agent plays
//! - `case_study` - Reference customer stories
//! - `instructions` - System prompt rendering
//! - `evaluation` - Scoring and feedback for a finished role-play
//! - `transcript` - Per-utterance records

pub mod case_study;
pub mod character;
pub mod evaluation;
pub mod foundation;
pub mod instructions;
pub mod roleplay;
pub mod transcript;
