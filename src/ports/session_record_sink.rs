//! Session Record Sink Port - Interface for emitting session records.
//!
//! Transcript entries are appended as the conversation happens; the
//! evaluation report is saved once when the session finishes.

use async_trait::async_trait;

use crate::domain::evaluation::EvaluationReport;
use crate::domain::foundation::SessionId;
use crate::domain::transcript::TranscriptEntry;

/// Errors that can occur while emitting or reading session records
#[derive(Debug, thiserror::Error)]
pub enum RecordSinkError {
    #[error("Report not found for session: {0}")]
    ReportNotFound(SessionId),

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for persisting what happened in a role-play session
#[async_trait]
pub trait SessionRecordSink: Send + Sync {
    /// Append one utterance to the session transcript
    ///
    /// # Errors
    /// Returns `RecordSinkError` if the entry cannot be written
    async fn append_entry(
        &self,
        session_id: SessionId,
        entry: &TranscriptEntry,
    ) -> Result<(), RecordSinkError>;

    /// Save the final evaluation report, replacing any earlier one
    ///
    /// # Errors
    /// Returns `RecordSinkError` if the report cannot be written
    async fn save_report(
        &self,
        session_id: SessionId,
        report: &EvaluationReport,
    ) -> Result<(), RecordSinkError>;

    /// Load the transcript in the order entries were appended
    ///
    /// A session with no entries yields an empty transcript.
    async fn transcript(&self, session_id: SessionId)
        -> Result<Vec<TranscriptEntry>, RecordSinkError>;

    /// Load the saved evaluation report
    ///
    /// # Errors
    /// Returns `RecordSinkError::ReportNotFound` if the session never finished
    async fn report(&self, session_id: SessionId) -> Result<EvaluationReport, RecordSinkError>;
}
