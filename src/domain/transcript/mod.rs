//! Transcript records.
//!
//! One entry per utterance, in the shape the persistence backend expects.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{MessageId, Timestamp};

/// Who spoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The salesperson practising the pitch.
    User,
    /// The simulated counterpart.
    Agent,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Agent => write!(f, "agent"),
        }
    }
}

/// A single utterance in a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub message_id: MessageId,
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file_path: Option<String>,
}

impl TranscriptEntry {
    /// Creates an entry stamped with the current time.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            message_id: MessageId::new(),
            speaker,
            text: text.into(),
            timestamp: Timestamp::now(),
            audio_file_path: None,
        }
    }

    pub fn with_audio_file(mut self, path: impl Into<String>) -> Self {
        self.audio_file_path = Some(path.into());
        self
    }
}
