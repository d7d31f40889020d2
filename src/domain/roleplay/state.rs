//! Conversation state for a single role-play session.
//!
//! Tracks turn counters, disclosed data, observed keywords, and the
//! concerns, case studies, and questions that came up. One instance is
//! owned by exactly one session.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

use super::data_point::{DataPoint, DisclosedData};
use super::phase::Phase;
use super::phase_config::PhaseConfig;

/// Why a phase is ready to advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionReason {
    /// The phase-local turn count reached `max_turns`.
    MaxTurnsReached,
    /// The trigger at this index of the phase configuration fired.
    Trigger { index: usize },
}

/// Mutable record of a live role-play conversation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConversationState {
    phase: Phase,
    turn_count: u32,
    phase_turn_count: u32,
    keywords_detected: Vec<String>,
    data_provided: DisclosedData,
    concerns_raised: Vec<String>,
    case_studies_mentioned: Vec<String>,
    questions_asked: Vec<String>,
}

impl ConversationState {
    /// Creates the starting state: skeptical, no turns taken.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turns taken across the whole conversation.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Turns taken since entering the current phase.
    pub fn phase_turn_count(&self) -> u32 {
        self.phase_turn_count
    }

    /// Observed keywords in first-seen order.
    pub fn keywords_detected(&self) -> &[String] {
        &self.keywords_detected
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords_detected.iter().any(|kw| kw == keyword)
    }

    pub fn data_provided(&self) -> &DisclosedData {
        &self.data_provided
    }

    pub fn concerns_raised(&self) -> &[String] {
        &self.concerns_raised
    }

    pub fn case_studies_mentioned(&self) -> &[String] {
        &self.case_studies_mentioned
    }

    pub fn questions_asked(&self) -> &[String] {
        &self.questions_asked
    }

    /// Counts one conversational turn, globally and within the phase.
    pub fn add_turn(&mut self) {
        self.turn_count += 1;
        self.phase_turn_count += 1;
    }

    /// Marks a data point as disclosed.
    pub fn mark_data_provided(&mut self, point: DataPoint) {
        self.data_provided.mark(point);
    }

    /// Marks a data point given by its string key.
    ///
    /// Unknown keys leave the state untouched and are reported back to the
    /// caller.
    pub fn mark_data_provided_key(&mut self, key: &str) -> Result<DataPoint, ValidationError> {
        let point: DataPoint = key.parse()?;
        self.mark_data_provided(point);
        Ok(point)
    }

    /// Records a keyword unless already present. Returns true if it was new.
    pub fn add_keyword(&mut self, keyword: impl Into<String>) -> bool {
        push_unique(&mut self.keywords_detected, keyword.into())
    }

    /// Records a concern unless already present. Returns true if it was new.
    pub fn record_concern(&mut self, concern: impl Into<String>) -> bool {
        push_unique(&mut self.concerns_raised, concern.into())
    }

    /// Records a case study id unless already present. Returns true if it was new.
    pub fn record_case_study(&mut self, case_id: impl Into<String>) -> bool {
        push_unique(&mut self.case_studies_mentioned, case_id.into())
    }

    /// Records a question. Repeated questions are kept.
    pub fn record_question(&mut self, question: impl Into<String>) {
        self.questions_asked.push(question.into());
    }

    /// Decides whether the current phase is ready to advance, and why.
    ///
    /// Below `min_turns` nothing fires. At or above `max_turns` advancement
    /// is forced before any trigger is consulted. Otherwise the first
    /// satisfied trigger wins.
    pub fn transition_reason(&self, config: &PhaseConfig) -> Option<TransitionReason> {
        if self.phase_turn_count < config.min_turns {
            return None;
        }

        if self.phase_turn_count >= config.max_turns {
            return Some(TransitionReason::MaxTurnsReached);
        }

        config
            .transition_triggers
            .iter()
            .position(|trigger| trigger.is_satisfied(self))
            .map(|index| TransitionReason::Trigger { index })
    }

    /// Returns true if the current phase is ready to advance.
    pub fn should_transition(&self, config: &PhaseConfig) -> bool {
        self.transition_reason(config).is_some()
    }

    /// Moves to the next phase and resets the phase-local turn counter.
    ///
    /// Returns the new phase, or `None` (leaving the state untouched) when
    /// already in the final phase.
    pub fn advance(&mut self) -> Option<Phase> {
        let next = self.phase.next()?;
        self.phase = next;
        self.phase_turn_count = 0;
        Some(next)
    }
}

fn push_unique(items: &mut Vec<String>, item: String) -> bool {
    if items.contains(&item) {
        return false;
    }
    items.push(item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roleplay::phase_config::phase_config;
    use proptest::prelude::*;

    fn state_in(phase: Phase, phase_turns: u32) -> ConversationState {
        let mut state = ConversationState::new();
        while state.phase() != phase {
            state.advance();
        }
        for _ in 0..phase_turns {
            state.add_turn();
        }
        state
    }

    mod counters {
        use super::*;

        #[test]
        fn new_state_starts_skeptical_with_no_turns() {
            let state = ConversationState::new();
            assert_eq!(state.phase(), Phase::Skeptical);
            assert_eq!(state.turn_count(), 0);
            assert_eq!(state.phase_turn_count(), 0);
        }

        #[test]
        fn add_turn_increments_both_counters() {
            let mut state = ConversationState::new();
            state.add_turn();
            state.add_turn();
            assert_eq!(state.turn_count(), 2);
            assert_eq!(state.phase_turn_count(), 2);
        }

        #[test]
        fn advance_resets_phase_counter_only() {
            let mut state = ConversationState::new();
            state.add_turn();
            state.add_turn();
            state.add_turn();

            assert_eq!(state.advance(), Some(Phase::Interested));
            assert_eq!(state.phase(), Phase::Interested);
            assert_eq!(state.turn_count(), 3);
            assert_eq!(state.phase_turn_count(), 0);
        }

        #[test]
        fn advance_from_final_phase_is_a_no_op() {
            let mut state = state_in(Phase::Considering, 2);
            assert_eq!(state.advance(), None);
            assert_eq!(state.phase(), Phase::Considering);
            assert_eq!(state.phase_turn_count(), 2);
        }
    }

    mod recording {
        use super::*;

        #[test]
        fn add_keyword_is_idempotent_and_ordered() {
            let mut state = ConversationState::new();
            assert!(state.add_keyword("効果"));
            assert!(state.add_keyword("費用"));
            assert!(!state.add_keyword("効果"));
            assert_eq!(state.keywords_detected(), &["効果".to_string(), "費用".to_string()]);
        }

        #[test]
        fn mark_data_provided_key_accepts_known_keys() {
            let mut state = ConversationState::new();
            let point = state.mark_data_provided_key("support_offered").unwrap();
            assert_eq!(point, DataPoint::SupportOffered);
            assert!(state.data_provided().support_offered);
        }

        #[test]
        fn mark_data_provided_key_rejects_unknown_keys_without_mutation() {
            let mut state = ConversationState::new();
            assert!(state.mark_data_provided_key("warranty").is_err());
            assert_eq!(state.data_provided(), &DisclosedData::default());
        }

        #[test]
        fn concerns_and_case_studies_are_deduplicated() {
            let mut state = ConversationState::new();
            state.record_concern("cost");
            state.record_concern("cost");
            state.record_case_study("gunma_parts");
            state.record_case_study("gunma_parts");
            assert_eq!(state.concerns_raised().len(), 1);
            assert_eq!(state.case_studies_mentioned().len(), 1);
        }

        #[test]
        fn questions_keep_repeats() {
            let mut state = ConversationState::new();
            state.record_question("保証はあるの？");
            state.record_question("保証はあるの？");
            assert_eq!(state.questions_asked().len(), 2);
        }
    }

    mod should_transition {
        use super::*;

        #[test]
        fn five_idle_turns_force_skeptical_forward() {
            let mut state = ConversationState::new();
            let config = phase_config(Phase::Skeptical);
            for _ in 0..5 {
                state.add_turn();
            }
            assert_eq!(state.phase_turn_count(), 5);
            assert!(state.should_transition(config));
        }

        #[test]
        fn skeptical_turn_trigger_fires_at_four() {
            let config = phase_config(Phase::Skeptical);
            assert!(!state_in(Phase::Skeptical, 3).should_transition(config));
            assert_eq!(
                state_in(Phase::Skeptical, 4).transition_reason(config),
                Some(TransitionReason::Trigger { index: 1 })
            );
        }

        #[test]
        fn max_turns_reports_forced_reason() {
            let config = phase_config(Phase::Interested);
            assert_eq!(
                state_in(Phase::Interested, 7).transition_reason(config),
                Some(TransitionReason::MaxTurnsReached)
            );
        }

        #[test]
        fn interested_advances_on_full_disclosure_without_keywords() {
            let config = phase_config(Phase::Interested);
            let mut state = state_in(Phase::Interested, 3);
            for point in [
                DataPoint::Cost,
                DataPoint::Roi,
                DataPoint::TimeRequired,
                DataPoint::SupportOffered,
            ] {
                state.mark_data_provided(point);
            }
            assert!(state.keywords_detected().is_empty());
            assert_eq!(
                state.transition_reason(config),
                Some(TransitionReason::Trigger { index: 0 })
            );
        }

        #[test]
        fn triggers_are_ignored_below_min_turns() {
            let config = phase_config(Phase::Interested);
            let mut state = state_in(Phase::Interested, 2);
            for point in DataPoint::ALL {
                state.mark_data_provided(point);
            }
            assert!(!state.should_transition(config));
        }
    }

    fn arbitrary_extras() -> impl Strategy<Value = (Vec<bool>, Vec<&'static str>)> {
        (
            proptest::collection::vec(any::<bool>(), 5),
            proptest::collection::vec(
                prop_oneof![
                    Just("費用"),
                    Just("効果"),
                    Just("事例"),
                    Just("実例"),
                    Just("次回"),
                    Just("資料"),
                ],
                0..4,
            ),
        )
    }

    fn decorate(state: &mut ConversationState, flags: &[bool], keywords: &[&str]) {
        for (point, on) in DataPoint::ALL.iter().zip(flags) {
            if *on {
                state.mark_data_provided(*point);
            }
        }
        for kw in keywords {
            state.add_keyword(*kw);
        }
    }

    proptest! {
        #[test]
        fn never_transitions_below_min_turns(
            phase_index in 0usize..3,
            (flags, keywords) in arbitrary_extras(),
        ) {
            let phase = Phase::ORDER[phase_index];
            let config = phase_config(phase);
            for turns in 0..config.min_turns {
                let mut state = state_in(phase, turns);
                decorate(&mut state, &flags, &keywords);
                prop_assert!(!state.should_transition(config));
            }
        }

        #[test]
        fn always_transitions_at_or_above_max_turns(
            phase_index in 0usize..3,
            extra in 0u32..5,
            (flags, keywords) in arbitrary_extras(),
        ) {
            let phase = Phase::ORDER[phase_index];
            let config = phase_config(phase);
            let mut state = state_in(phase, config.max_turns + extra);
            decorate(&mut state, &flags, &keywords);
            prop_assert_eq!(
                state.transition_reason(config),
                Some(TransitionReason::MaxTurnsReached)
            );
        }
    }
}
