//! FinishSession - Command handler that closes a role-play and saves its report.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::session::RoleplaySession;
use crate::domain::evaluation::EvaluationReport;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::SessionRecordSink;

/// Handler for finishing a role-play session.
pub struct FinishSessionHandler {
    sink: Arc<dyn SessionRecordSink>,
}

impl FinishSessionHandler {
    pub fn new(sink: Arc<dyn SessionRecordSink>) -> Self {
        Self { sink }
    }

    /// Finishes the session and persists its evaluation report.
    ///
    /// The session is only closed once the report is saved, so a failed
    /// save can be retried.
    ///
    /// # Errors
    /// - `SessionFinished` if the session was already finished
    /// - `StorageError` if the report could not be saved
    pub async fn handle(
        &self,
        session: &mut RoleplaySession,
    ) -> Result<EvaluationReport, DomainError> {
        let report = session.final_report()?;

        self.sink
            .save_report(session.id(), &report)
            .await
            .map_err(|err| {
                error!(session_id = %session.id(), error = %err, "Failed to save evaluation report");
                DomainError::new(ErrorCode::StorageError, err.to_string())
                    .with_detail("session_id", session.id().to_string())
            })?;

        info!(
            session_id = %session.id(),
            overall = report.overall,
            grade = %report.grade,
            "Evaluation report saved"
        );
        session.mark_finished(&report);

        Ok(report)
    }
}
