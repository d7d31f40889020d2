//! RoleplaySession - Owns one live role-play.
//!
//! Each session holds its own character and conversation state; nothing is
//! shared between sessions. The driver feeds utterances in, re-renders
//! instructions when asked, and produces the evaluation at the end.

use tracing::{debug, info, warn};

use crate::domain::case_study;
use crate::domain::character::CharacterProfile;
use crate::domain::evaluation::EvaluationReport;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::instructions::{build_instructions, render_phase_guidance};
use crate::domain::roleplay::{
    analyze_agent_utterance, analyze_user_message, phase_config, AgentUtteranceAnalysis,
    ConversationState, DataPoint, Phase, TransitionReason,
};

/// What one salesperson utterance did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Global turn number of this utterance.
    pub turn: u32,
    /// Phase after the turn was processed.
    pub phase: Phase,
    /// Previous phase when the turn caused an advance.
    pub transitioned_from: Option<Phase>,
    /// Why the phase was ready to advance. In the final phase this signals
    /// the conversation can be closed.
    pub reason: Option<TransitionReason>,
    /// Data points disclosed for the first time this turn.
    pub newly_disclosed: Vec<DataPoint>,
    /// Case studies recognised in the utterance.
    pub case_studies: Vec<&'static str>,
    /// Whether the phase guidance in the instructions changed. The full
    /// instructions change on every turn because they carry turn counters.
    pub guidance_changed: bool,
}

impl TurnOutcome {
    pub fn transitioned(&self) -> bool {
        self.transitioned_from.is_some()
    }

    /// True when the final phase's closing condition was met.
    pub fn ready_to_close(&self) -> bool {
        self.phase.is_final() && self.transitioned_from.is_none() && self.reason.is_some()
    }
}

/// A single role-play between a salesperson and a simulated counterpart.
#[derive(Debug, Clone)]
pub struct RoleplaySession {
    id: SessionId,
    character: CharacterProfile,
    state: ConversationState,
    started_at: Timestamp,
    finished: bool,
}

impl RoleplaySession {
    pub fn new(character: CharacterProfile) -> Self {
        Self::with_id(SessionId::new(), character)
    }

    pub fn with_id(id: SessionId, character: CharacterProfile) -> Self {
        info!(
            session_id = %id,
            character = %character.name,
            phase = %Phase::default(),
            "Role-play session started"
        );
        Self {
            id,
            character,
            state: ConversationState::new(),
            started_at: Timestamp::now(),
            finished: false,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn character(&self) -> &CharacterProfile {
        &self.character
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Processes one salesperson utterance.
    ///
    /// Counts the turn, records what was disclosed, then advances the phase
    /// if its transition rules are met.
    pub fn on_user_utterance(&mut self, text: &str) -> Result<TurnOutcome, DomainError> {
        self.ensure_active()?;

        let disclosed_before = self.state.data_provided().clone();
        let guidance_before = render_phase_guidance(&self.state);
        self.state.add_turn();
        let turn = self.state.turn_count();

        let analysis = analyze_user_message(text, &mut self.state);
        let case_studies = case_study::detect_mentions(text);
        for id in &case_studies {
            self.state.record_case_study(*id);
        }

        let newly_disclosed: Vec<DataPoint> = self
            .state
            .data_provided()
            .provided()
            .into_iter()
            .filter(|point| !disclosed_before.get(*point))
            .collect();

        debug!(
            session_id = %self.id,
            turn,
            phase = %self.state.phase(),
            data_points = ?analysis.data_points,
            keywords = ?analysis.keywords,
            case_studies = ?case_studies,
            missing = ?self.state.data_provided().missing(),
            "Analyzed user utterance"
        );

        let current = self.state.phase();
        let config = phase_config(current);
        let reason = self.state.transition_reason(config);
        let mut transitioned_from = None;

        if let Some(reason) = reason {
            let rule = match reason {
                TransitionReason::MaxTurnsReached => format!("max_turns >= {}", config.max_turns),
                TransitionReason::Trigger { index } => config
                    .transition_triggers
                    .get(index)
                    .map(|trigger| trigger.describe())
                    .unwrap_or_default(),
            };
            match self.state.advance() {
                Some(next) => {
                    info!(
                        session_id = %self.id,
                        turn,
                        from = %current,
                        to = %next,
                        rule = %rule,
                        "Phase transition"
                    );
                    transitioned_from = Some(current);
                }
                None => {
                    info!(
                        session_id = %self.id,
                        turn,
                        phase = %current,
                        rule = %rule,
                        "Conversation reached final phase"
                    );
                }
            }
        }

        let guidance_changed = render_phase_guidance(&self.state) != guidance_before;

        Ok(TurnOutcome {
            turn,
            phase: self.state.phase(),
            transitioned_from,
            reason,
            newly_disclosed,
            case_studies,
            guidance_changed,
        })
    }

    /// Processes something the counterpart said. Does not count as a turn.
    pub fn on_agent_utterance(&mut self, text: &str) -> Result<AgentUtteranceAnalysis, DomainError> {
        self.ensure_active()?;

        let analysis = analyze_agent_utterance(text, &mut self.state);
        debug!(
            session_id = %self.id,
            concerns = ?analysis.concerns,
            asked_question = analysis.asked_question,
            "Analyzed agent utterance"
        );
        Ok(analysis)
    }

    /// Marks a data point disclosed by its string key.
    ///
    /// Unknown keys leave the state untouched and are reported as
    /// `UnknownDataPoint`.
    pub fn mark_data_provided(&mut self, key: &str) -> Result<DataPoint, DomainError> {
        self.ensure_active()?;

        self.state.mark_data_provided_key(key).map_err(|err| {
            warn!(session_id = %self.id, key, error = %err, "Ignoring unknown data point");
            DomainError::new(ErrorCode::UnknownDataPoint, err.to_string()).with_detail("key", key)
        })
    }

    /// Renders the counterpart's instructions for the current state.
    pub fn instructions(&self) -> String {
        build_instructions(&self.character, &self.state)
    }

    /// Scores the conversation so far without finishing the session.
    pub fn evaluate(&self) -> EvaluationReport {
        EvaluationReport::for_state(&self.state)
    }

    /// Scores an active session for closing. The session stays open until
    /// `mark_finished` is called.
    pub fn final_report(&self) -> Result<EvaluationReport, DomainError> {
        self.ensure_active()?;
        Ok(self.evaluate())
    }

    /// Ends the session and returns its final evaluation.
    pub fn finish(&mut self) -> Result<EvaluationReport, DomainError> {
        let report = self.final_report()?;
        self.mark_finished(&report);
        Ok(report)
    }

    /// Closes the session once its report has been handed off.
    pub(crate) fn mark_finished(&mut self, report: &EvaluationReport) {
        self.finished = true;
        info!(
            session_id = %self.id,
            turn = self.state.turn_count(),
            phase = %self.state.phase(),
            overall = report.overall,
            grade = %report.grade,
            "Role-play session finished"
        );
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.finished {
            return Err(DomainError::new(
                ErrorCode::SessionFinished,
                "Session already finished",
            )
            .with_detail("session_id", self.id.to_string()));
        }
        Ok(())
    }
}
