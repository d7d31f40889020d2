//! File-based Record Sink Adapter
//!
//! Writes each session's transcript as JSON lines and its evaluation
//! report as YAML, in one directory per session id.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::domain::evaluation::EvaluationReport;
use crate::domain::foundation::SessionId;
use crate::domain::transcript::TranscriptEntry;
use crate::ports::{RecordSinkError, SessionRecordSink};

/// File-based storage for session records
#[derive(Debug, Clone)]
pub struct FileRecordSink {
    base_path: PathBuf,
}

impl FileRecordSink {
    /// Create a new file sink with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let sink = FileRecordSink::new("./data/sessions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn session_dir(&self, session_id: SessionId) -> PathBuf {
        self.base_path.join(session_id.to_string())
    }

    fn transcript_path(&self, session_id: SessionId) -> PathBuf {
        self.session_dir(session_id).join("transcript.jsonl")
    }

    fn report_path(&self, session_id: SessionId) -> PathBuf {
        self.session_dir(session_id).join("report.yaml")
    }

    async fn ensure_dir(&self, path: &Path) -> Result<(), RecordSinkError> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))
    }
}

#[async_trait]
impl SessionRecordSink for FileRecordSink {
    async fn append_entry(
        &self,
        session_id: SessionId,
        entry: &TranscriptEntry,
    ) -> Result<(), RecordSinkError> {
        self.ensure_dir(&self.session_dir(session_id)).await?;

        let mut line = serde_json::to_string(entry)
            .map_err(|e| RecordSinkError::SerializationFailed(e.to_string()))?;
        line.push('\n');

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.transcript_path(session_id))
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn save_report(
        &self,
        session_id: SessionId,
        report: &EvaluationReport,
    ) -> Result<(), RecordSinkError> {
        self.ensure_dir(&self.session_dir(session_id)).await?;

        let yaml = serde_yaml::to_string(report)
            .map_err(|e| RecordSinkError::SerializationFailed(e.to_string()))?;

        fs::write(self.report_path(session_id), yaml)
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn transcript(
        &self,
        session_id: SessionId,
    ) -> Result<Vec<TranscriptEntry>, RecordSinkError> {
        let path = self.transcript_path(session_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .map_err(|e| RecordSinkError::DeserializationFailed(e.to_string()))
            })
            .collect()
    }

    async fn report(&self, session_id: SessionId) -> Result<EvaluationReport, RecordSinkError> {
        let path = self.report_path(session_id);
        if !path.exists() {
            return Err(RecordSinkError::ReportNotFound(session_id));
        }

        let yaml = fs::read_to_string(&path)
            .await
            .map_err(|e| RecordSinkError::IoError(e.to_string()))?;

        serde_yaml::from_str(&yaml).map_err(|e| RecordSinkError::DeserializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roleplay::{ConversationState, DataPoint};
    use crate::domain::transcript::Speaker;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_sink_appends_json_lines() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileRecordSink::new(temp_dir.path());
        let session_id = SessionId::new();

        let first = TranscriptEntry::new(Speaker::User, "費用は20万円ほどです");
        let second = TranscriptEntry::new(Speaker::Agent, "20万円程度か…")
            .with_audio_file("audio/0002.ogg");
        sink.append_entry(session_id, &first).await.unwrap();
        sink.append_entry(session_id, &second).await.unwrap();

        let raw = std::fs::read_to_string(
            temp_dir
                .path()
                .join(session_id.to_string())
                .join("transcript.jsonl"),
        )
        .unwrap();
        assert_eq!(raw.lines().count(), 2);

        let transcript = sink.transcript(session_id).await.unwrap();
        assert_eq!(transcript, vec![first, second]);
    }

    #[tokio::test]
    async fn test_file_sink_missing_transcript_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileRecordSink::new(temp_dir.path());

        assert!(sink.transcript(SessionId::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_sink_saves_report_as_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileRecordSink::new(temp_dir.path());
        let session_id = SessionId::new();

        let mut state = ConversationState::new();
        for _ in 0..3 {
            state.add_turn();
        }
        state.mark_data_provided(DataPoint::Cost);
        let report = EvaluationReport::for_state(&state);

        sink.save_report(session_id, &report).await.unwrap();

        let raw = std::fs::read_to_string(
            temp_dir
                .path()
                .join(session_id.to_string())
                .join("report.yaml"),
        )
        .unwrap();
        assert!(raw.contains("total_turns: 3"));

        let loaded = sink.report(session_id).await.unwrap();
        assert_eq!(loaded.metrics, report.metrics);
        assert_eq!(loaded.grade, report.grade);
        assert_eq!(loaded.feedback, report.feedback);
    }

    #[tokio::test]
    async fn test_file_sink_missing_report() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileRecordSink::new(temp_dir.path());

        let result = sink.report(SessionId::new()).await;

        assert!(matches!(result, Err(RecordSinkError::ReportNotFound(_))));
    }

    #[tokio::test]
    async fn test_file_sink_rejects_corrupt_transcript() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileRecordSink::new(temp_dir.path());
        let session_id = SessionId::new();

        let dir = temp_dir.path().join(session_id.to_string());
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("transcript.jsonl"), "not json\n").unwrap();

        let result = sink.transcript(session_id).await;

        assert!(matches!(result, Err(RecordSinkError::DeserializationFailed(_))));
    }
}
