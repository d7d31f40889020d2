//! RecordUtterance - Command handler for one utterance in a role-play.

use std::sync::Arc;

use tracing::warn;

use crate::application::session::{RoleplaySession, TurnOutcome};
use crate::domain::foundation::{DomainError, MessageId, ValidationError};
use crate::domain::roleplay::AgentUtteranceAnalysis;
use crate::domain::transcript::{Speaker, TranscriptEntry};
use crate::ports::SessionRecordSink;

/// Command to record an utterance.
#[derive(Debug, Clone)]
pub struct RecordUtteranceCommand {
    pub speaker: Speaker,
    pub text: String,
    pub audio_file_path: Option<String>,
}

impl RecordUtteranceCommand {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            audio_file_path: None,
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
            audio_file_path: None,
        }
    }

    pub fn with_audio_file(mut self, path: impl Into<String>) -> Self {
        self.audio_file_path = Some(path.into());
        self
    }
}

/// How the utterance affected the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UtteranceEffect {
    User(TurnOutcome),
    Agent(AgentUtteranceAnalysis),
}

/// Result of recording an utterance.
#[derive(Debug, Clone)]
pub struct RecordUtteranceResult {
    pub message_id: MessageId,
    /// False when the sink rejected the transcript entry.
    pub persisted: bool,
    pub effect: UtteranceEffect,
}

/// Handler that applies an utterance to a session and emits its transcript entry.
pub struct RecordUtteranceHandler {
    sink: Arc<dyn SessionRecordSink>,
}

impl RecordUtteranceHandler {
    pub fn new(sink: Arc<dyn SessionRecordSink>) -> Self {
        Self { sink }
    }

    /// Applies the utterance, then appends it to the transcript.
    ///
    /// A sink failure is logged and reported in the result; the session
    /// state still advances.
    pub async fn handle(
        &self,
        session: &mut RoleplaySession,
        cmd: RecordUtteranceCommand,
    ) -> Result<RecordUtteranceResult, DomainError> {
        let text = cmd.text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text").into());
        }

        let effect = match cmd.speaker {
            Speaker::User => UtteranceEffect::User(session.on_user_utterance(text)?),
            Speaker::Agent => UtteranceEffect::Agent(session.on_agent_utterance(text)?),
        };

        let mut entry = TranscriptEntry::new(cmd.speaker, text);
        if let Some(path) = cmd.audio_file_path {
            entry = entry.with_audio_file(path);
        }

        let persisted = match self.sink.append_entry(session.id(), &entry).await {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    session_id = %session.id(),
                    message_id = %entry.message_id,
                    error = %err,
                    "Failed to record transcript entry"
                );
                false
            }
        };

        Ok(RecordUtteranceResult {
            message_id: entry.message_id,
            persisted,
            effect,
        })
    }
}
