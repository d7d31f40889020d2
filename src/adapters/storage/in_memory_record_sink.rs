//! In-Memory Record Sink Adapter
//!
//! Keeps transcripts and reports in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::evaluation::EvaluationReport;
use crate::domain::foundation::SessionId;
use crate::domain::transcript::TranscriptEntry;
use crate::ports::{RecordSinkError, SessionRecordSink};

/// In-memory storage for session records
#[derive(Debug, Clone)]
pub struct InMemoryRecordSink {
    transcripts: Arc<RwLock<HashMap<SessionId, Vec<TranscriptEntry>>>>,
    reports: Arc<RwLock<HashMap<SessionId, EvaluationReport>>>,
}

impl InMemoryRecordSink {
    /// Create a new in-memory sink
    pub fn new() -> Self {
        Self {
            transcripts: Arc::new(RwLock::new(HashMap::new())),
            reports: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored records (useful for tests)
    pub async fn clear(&self) {
        self.transcripts.write().await.clear();
        self.reports.write().await.clear();
    }

    /// Get the number of sessions with at least one transcript entry
    pub async fn session_count(&self) -> usize {
        self.transcripts.read().await.len()
    }

    /// Get the number of saved reports
    pub async fn report_count(&self) -> usize {
        self.reports.read().await.len()
    }
}

impl Default for InMemoryRecordSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRecordSink for InMemoryRecordSink {
    async fn append_entry(
        &self,
        session_id: SessionId,
        entry: &TranscriptEntry,
    ) -> Result<(), RecordSinkError> {
        let mut transcripts = self.transcripts.write().await;
        transcripts
            .entry(session_id)
            .or_default()
            .push(entry.clone());
        Ok(())
    }

    async fn save_report(
        &self,
        session_id: SessionId,
        report: &EvaluationReport,
    ) -> Result<(), RecordSinkError> {
        let mut reports = self.reports.write().await;
        reports.insert(session_id, report.clone());
        Ok(())
    }

    async fn transcript(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<TranscriptEntry>, RecordSinkError> {
        let transcripts = self.transcripts.read().await;
        Ok(transcripts.get(&session_id).cloned().unwrap_or_default())
    }

    async fn report(&self, session_id: SessionId) -> Result<EvaluationReport, RecordSinkError> {
        let reports = self.reports.read().await;
        reports
            .get(&session_id)
            .cloned()
            .ok_or(RecordSinkError::ReportNotFound(session_id))
    }
}
