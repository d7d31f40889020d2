//! Performance evaluation domain module.
//!
//! Scores a finished role-play from its final conversation state and
//! renders a feedback report for the salesperson.

mod feedback;
mod metrics;

use serde::{Deserialize, Serialize};

use crate::domain::roleplay::ConversationState;

pub use feedback::{recommendations, render_feedback, Grade};
pub use metrics::{evaluate, MissedOpportunity, Pacing, PerformanceMetrics, IDEAL_TURNS};

/// Everything produced at session end, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub metrics: PerformanceMetrics,
    pub overall: f64,
    pub grade: Grade,
    pub feedback: String,
}

impl EvaluationReport {
    pub fn from_metrics(metrics: PerformanceMetrics) -> Self {
        let overall = metrics.overall_score();
        let feedback = render_feedback(&metrics);
        Self {
            grade: Grade::from_score(overall),
            overall,
            feedback,
            metrics,
        }
    }

    /// Evaluates a state and renders its report in one step.
    pub fn for_state(state: &ConversationState) -> Self {
        Self::from_metrics(evaluate(state))
    }
}
