//! Keyword analysis of utterances.
//!
//! User (salesperson) utterances are scanned for disclosed information;
//! agent (counterpart) utterances are scanned for the concerns and
//! questions it raised. Matching is case-insensitive substring search and
//! every family is checked independently.

use super::data_point::DataPoint;
use super::state::ConversationState;

/// A group of terms that, when any one appears, marks a data point
/// and/or records a canonical keyword.
#[derive(Debug, Clone, Copy)]
struct KeywordFamily {
    terms: &'static [&'static str],
    data_point: Option<DataPoint>,
    tag: Option<&'static str>,
}

const USER_FAMILIES: [KeywordFamily; 6] = [
    KeywordFamily {
        terms: &["万円", "円", "費用", "コスト", "料金"],
        data_point: Some(DataPoint::Cost),
        tag: Some("費用"),
    },
    KeywordFamily {
        terms: &["増加", "削減", "効果", "利益", "倍", "%", "％", "パーセント"],
        data_point: Some(DataPoint::Roi),
        tag: Some("効果"),
    },
    KeywordFamily {
        terms: &["メーカー", "企業", "会社", "事例", "実績", "群馬", "宇都宮"],
        data_point: Some(DataPoint::CaseStudy),
        tag: Some("事例"),
    },
    KeywordFamily {
        terms: &["期間", "時間", "ヶ月", "週間", "スケジュール"],
        data_point: Some(DataPoint::TimeRequired),
        tag: None,
    },
    KeywordFamily {
        terms: &["対応", "代行", "サポート", "手伝", "お手伝い", "こちらで"],
        data_point: Some(DataPoint::SupportOffered),
        tag: Some("サポート"),
    },
    KeywordFamily {
        terms: &["資料", "次回", "お持ちします", "詳しい", "また"],
        data_point: None,
        tag: Some("次回提案"),
    },
];

/// Concern categories the counterpart voices, keyed by canonical name.
const CONCERN_FAMILIES: [(&str, &[&str]); 4] = [
    ("cost", &["費用", "コスト", "お金", "いくら", "回収"]),
    ("time", &["面倒", "手間", "時間", "書類"]),
    ("effect", &["効果", "本当に", "結果"]),
    ("guarantee", &["保証"]),
];

/// What a single user utterance contributed to the state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageAnalysis {
    /// Data points the utterance disclosed (whether or not already known).
    pub data_points: Vec<DataPoint>,
    /// Canonical keywords the utterance matched.
    pub keywords: Vec<&'static str>,
}

impl MessageAnalysis {
    pub fn is_empty(&self) -> bool {
        self.data_points.is_empty() && self.keywords.is_empty()
    }
}

/// What a single agent utterance contributed to the state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentUtteranceAnalysis {
    /// Concern categories voiced in the utterance.
    pub concerns: Vec<&'static str>,
    /// Whether the utterance was a question.
    pub asked_question: bool,
}

/// Updates the state from a salesperson utterance.
pub fn analyze_user_message(message: &str, state: &mut ConversationState) -> MessageAnalysis {
    let lowered = message.to_lowercase();
    let mut analysis = MessageAnalysis::default();

    for family in USER_FAMILIES.iter() {
        if !family.terms.iter().any(|term| lowered.contains(term)) {
            continue;
        }
        if let Some(point) = family.data_point {
            state.mark_data_provided(point);
            analysis.data_points.push(point);
        }
        if let Some(tag) = family.tag {
            state.add_keyword(tag);
            analysis.keywords.push(tag);
        }
    }

    analysis
}

/// Updates the state from something the counterpart said.
pub fn analyze_agent_utterance(
    utterance: &str,
    state: &mut ConversationState,
) -> AgentUtteranceAnalysis {
    let lowered = utterance.to_lowercase();
    let mut analysis = AgentUtteranceAnalysis::default();

    for (concern, terms) in CONCERN_FAMILIES.iter() {
        if terms.iter().any(|term| lowered.contains(term)) {
            state.record_concern(*concern);
            analysis.concerns.push(*concern);
        }
    }

    if utterance.contains('?') || utterance.contains('？') {
        state.record_question(utterance.trim());
        analysis.asked_question = true;
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    mod user_messages {
        use super::*;

        #[test]
        fn cost_statement_marks_cost_and_keyword() {
            let mut state = ConversationState::new();
            analyze_user_message("追加費用は30万円です", &mut state);

            assert!(state.data_provided().cost);
            assert!(state.has_keyword("費用"));
        }

        #[test]
        fn roi_statement_marks_roi() {
            let mut state = ConversationState::new();
            let analysis = analyze_user_message("発注量が約1.2倍に増加しました", &mut state);

            assert!(state.data_provided().roi);
            assert_eq!(analysis.keywords, vec!["効果"]);
        }

        #[test]
        fn percent_sign_counts_as_roi_in_either_width() {
            for message in ["金利が0.1%下がります", "金利が0.1％下がります"] {
                let mut state = ConversationState::new();
                analyze_user_message(message, &mut state);
                assert!(state.data_provided().roi, "{}", message);
            }
        }

        #[test]
        fn time_family_sets_flag_without_keyword() {
            let mut state = ConversationState::new();
            let analysis = analyze_user_message("期間は約3ヶ月です", &mut state);

            assert!(state.data_provided().time_required);
            assert!(analysis.keywords.is_empty());
            assert!(state.keywords_detected().is_empty());
        }

        #[test]
        fn next_step_family_records_keyword_without_flag() {
            let mut state = ConversationState::new();
            let analysis = analyze_user_message("次回、資料をお持ちします", &mut state);

            assert!(analysis.data_points.is_empty());
            assert!(state.has_keyword("次回提案"));
            assert_eq!(state.data_provided().count(), 0);
        }

        #[test]
        fn families_match_independently() {
            let mut state = ConversationState::new();
            let analysis = analyze_user_message(
                "群馬の部品メーカーは20万円の費用で、書類はこちらで代行しました",
                &mut state,
            );

            assert_eq!(
                analysis.data_points,
                vec![DataPoint::Cost, DataPoint::CaseStudy, DataPoint::SupportOffered]
            );
            assert_eq!(state.keywords_detected(), &["費用", "事例", "サポート"]);
        }

        #[test]
        fn matching_is_case_insensitive() {
            let mut state = ConversationState::new();
            // No ASCII terms exist in the families, so only check that
            // lowering mixed-case input leaves Japanese matches intact.
            analyze_user_message("ROIの効果はBIGです", &mut state);
            assert!(state.data_provided().roi);
        }

        #[test]
        fn unrelated_message_changes_nothing() {
            let mut state = ConversationState::new();
            let analysis = analyze_user_message("こんにちは、本日はよろしくお願いします", &mut state);

            assert!(analysis.is_empty());
            assert_eq!(state, ConversationState::new());
        }

        #[test]
        fn repeated_matches_do_not_duplicate_keywords() {
            let mut state = ConversationState::new();
            analyze_user_message("費用は20万円", &mut state);
            analyze_user_message("コストは抑えられます", &mut state);
            assert_eq!(state.keywords_detected(), &["費用"]);
        }
    }

    mod agent_utterances {
        use super::*;

        #[test]
        fn cost_question_records_concern_and_question() {
            let mut state = ConversationState::new();
            let analysis =
                analyze_agent_utterance("そういうのって結局、費用かかるんじゃないの？", &mut state);

            assert_eq!(analysis.concerns, vec!["cost"]);
            assert!(analysis.asked_question);
            assert_eq!(state.concerns_raised(), &["cost"]);
            assert_eq!(state.questions_asked().len(), 1);
        }

        #[test]
        fn guarantee_and_effect_are_separate_concerns() {
            let mut state = ConversationState::new();
            analyze_agent_utterance("取引先が動く保証はあるの？本当に効果あるのか？", &mut state);
            assert_eq!(state.concerns_raised(), &["effect", "guarantee"]);
        }

        #[test]
        fn statement_is_not_a_question() {
            let mut state = ConversationState::new();
            let analysis = analyze_agent_utterance("うん、まぁ聞くだけ聞くけど", &mut state);

            assert!(!analysis.asked_question);
            assert!(state.questions_asked().is_empty());
        }

        #[test]
        fn question_text_is_trimmed() {
            let mut state = ConversationState::new();
            analyze_agent_utterance("  それで、なんだ？ ", &mut state);
            assert_eq!(state.questions_asked(), &["それで、なんだ？"]);
        }
    }
}
