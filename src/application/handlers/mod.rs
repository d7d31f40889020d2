//! Application handlers.
//!
//! Command handlers that drive a role-play session and emit its records.

mod finish_session;
mod record_utterance;

pub use finish_session::FinishSessionHandler;
pub use record_utterance::{
    RecordUtteranceCommand, RecordUtteranceHandler, RecordUtteranceResult, UtteranceEffect,
};
