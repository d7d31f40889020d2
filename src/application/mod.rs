//! Application layer - Session driver and command handlers.
//!
//! This layer owns live role-play sessions and coordinates between the
//! domain and the record sink port.

pub mod handlers;
mod session;

pub use handlers::{
    FinishSessionHandler, RecordUtteranceCommand, RecordUtteranceHandler, RecordUtteranceResult,
    UtteranceEffect,
};
pub use session::{RoleplaySession, TurnOutcome};
