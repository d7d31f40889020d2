//! Phase transition triggers.
//!
//! Triggers form a small rule language over two kinds of accumulated
//! facts: turn counts, and disclosed data / observed keywords. Phase
//! configurations combine them to gate advancement without code changes.

use super::data_point::DataPoint;
use super::state::ConversationState;

/// A rule that, when satisfied, permits advancing to the next phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionTrigger {
    /// Satisfied once the phase-local turn count reaches `turns`.
    TurnCount { turns: u32 },

    /// Satisfied when every listed data point has the required value.
    DataProvided { required: Vec<(DataPoint, bool)> },

    /// Satisfied when at least one of the keywords has been observed.
    Keyword { keywords: Vec<&'static str> },

    /// Satisfied when all listed data points are disclosed and, unless
    /// `keywords` is empty, at least one keyword has been observed.
    Combined {
        data: Vec<DataPoint>,
        keywords: Vec<&'static str>,
    },
}

impl TransitionTrigger {
    /// Evaluates the trigger against the current conversation state.
    ///
    /// Evaluation has no side effects.
    pub fn is_satisfied(&self, state: &ConversationState) -> bool {
        match self {
            Self::TurnCount { turns } => state.phase_turn_count() >= *turns,
            Self::DataProvided { required } => required
                .iter()
                .all(|(point, expected)| state.data_provided().get(*point) == *expected),
            Self::Keyword { keywords } => keywords.iter().any(|kw| state.has_keyword(kw)),
            Self::Combined { data, keywords } => {
                let data_satisfied = data.iter().all(|point| state.data_provided().get(*point));
                // An empty keyword clause is vacuously true.
                let keyword_satisfied =
                    keywords.is_empty() || keywords.iter().any(|kw| state.has_keyword(kw));
                data_satisfied && keyword_satisfied
            }
        }
    }

    /// Short description for logs.
    pub fn describe(&self) -> String {
        match self {
            Self::TurnCount { turns } => format!("turn_count >= {}", turns),
            Self::DataProvided { required } => {
                let parts: Vec<String> = required
                    .iter()
                    .map(|(point, expected)| format!("{}={}", point, expected))
                    .collect();
                format!("data_provided [{}]", parts.join(", "))
            }
            Self::Keyword { keywords } => format!("keyword any of [{}]", keywords.join(", ")),
            Self::Combined { data, keywords } => {
                let points: Vec<&str> = data.iter().map(|p| p.key()).collect();
                format!(
                    "combined data [{}] + keywords [{}]",
                    points.join(", "),
                    keywords.join(", ")
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_turns(turns: u32) -> ConversationState {
        let mut state = ConversationState::new();
        for _ in 0..turns {
            state.add_turn();
        }
        state
    }

    mod turn_count {
        use super::*;

        #[test]
        fn fires_at_threshold() {
            let trigger = TransitionTrigger::TurnCount { turns: 3 };
            assert!(!trigger.is_satisfied(&state_with_turns(2)));
            assert!(trigger.is_satisfied(&state_with_turns(3)));
            assert!(trigger.is_satisfied(&state_with_turns(4)));
        }
    }

    mod data_provided {
        use super::*;

        #[test]
        fn requires_every_flag_to_match() {
            let trigger = TransitionTrigger::DataProvided {
                required: vec![(DataPoint::Cost, true), (DataPoint::Roi, true)],
            };
            let mut state = ConversationState::new();
            state.mark_data_provided(DataPoint::Cost);
            assert!(!trigger.is_satisfied(&state));

            state.mark_data_provided(DataPoint::Roi);
            assert!(trigger.is_satisfied(&state));
        }

        #[test]
        fn can_require_a_flag_to_be_false() {
            let trigger = TransitionTrigger::DataProvided {
                required: vec![(DataPoint::Cost, true), (DataPoint::SupportOffered, false)],
            };
            let mut state = ConversationState::new();
            state.mark_data_provided(DataPoint::Cost);
            assert!(trigger.is_satisfied(&state));

            state.mark_data_provided(DataPoint::SupportOffered);
            assert!(!trigger.is_satisfied(&state));
        }
    }

    mod keyword {
        use super::*;

        #[test]
        fn fires_when_any_keyword_observed() {
            let trigger = TransitionTrigger::Keyword {
                keywords: vec!["資料", "次回"],
            };
            let mut state = ConversationState::new();
            assert!(!trigger.is_satisfied(&state));

            state.add_keyword("次回");
            assert!(trigger.is_satisfied(&state));
        }

        #[test]
        fn empty_keyword_list_never_fires() {
            let trigger = TransitionTrigger::Keyword { keywords: vec![] };
            let mut state = ConversationState::new();
            state.add_keyword("費用");
            assert!(!trigger.is_satisfied(&state));
        }
    }

    mod combined {
        use super::*;

        #[test]
        fn empty_keywords_are_vacuously_satisfied() {
            let trigger = TransitionTrigger::Combined {
                data: vec![
                    DataPoint::Cost,
                    DataPoint::Roi,
                    DataPoint::TimeRequired,
                    DataPoint::SupportOffered,
                ],
                keywords: vec![],
            };
            let mut state = ConversationState::new();
            state.mark_data_provided(DataPoint::Cost);
            state.mark_data_provided(DataPoint::Roi);
            state.mark_data_provided(DataPoint::TimeRequired);
            assert!(!trigger.is_satisfied(&state));

            state.mark_data_provided(DataPoint::SupportOffered);
            assert!(state.keywords_detected().is_empty());
            assert!(trigger.is_satisfied(&state));
        }

        #[test]
        fn needs_both_data_and_keyword() {
            let trigger = TransitionTrigger::Combined {
                data: vec![DataPoint::Cost, DataPoint::CaseStudy],
                keywords: vec!["実例"],
            };
            let mut state = ConversationState::new();
            state.mark_data_provided(DataPoint::Cost);
            state.mark_data_provided(DataPoint::CaseStudy);
            assert!(!trigger.is_satisfied(&state));

            state.add_keyword("実例");
            assert!(trigger.is_satisfied(&state));
        }

        #[test]
        fn keyword_alone_is_not_enough() {
            let trigger = TransitionTrigger::Combined {
                data: vec![DataPoint::Cost],
                keywords: vec!["実例"],
            };
            let mut state = ConversationState::new();
            state.add_keyword("実例");
            assert!(!trigger.is_satisfied(&state));
        }
    }

    #[test]
    fn describe_names_the_rule() {
        assert_eq!(
            TransitionTrigger::TurnCount { turns: 4 }.describe(),
            "turn_count >= 4"
        );
        let combined = TransitionTrigger::Combined {
            data: vec![DataPoint::Cost],
            keywords: vec![],
        };
        assert!(combined.describe().contains("cost"));
    }
}
