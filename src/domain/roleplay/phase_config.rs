//! Per-phase configuration.
//!
//! Defines the counterpart's goal, sample lines, behavior hints, turn
//! bounds, and transition triggers for each phase. Built once and never
//! mutated.

use once_cell::sync::Lazy;

use super::data_point::DataPoint;
use super::phase::Phase;
use super::trigger::TransitionTrigger;

/// Static configuration for one phase.
#[derive(Debug, Clone)]
pub struct PhaseConfig {
    /// The phase this configuration is for.
    pub phase: Phase,
    /// What the counterpart is trying to do in this phase.
    pub goal: &'static str,
    /// Example lines the counterpart might say.
    pub sample_phrases: Vec<&'static str>,
    /// How the counterpart behaves.
    pub behaviors: Vec<&'static str>,
    /// Rules that permit advancing, OR'd in listed order.
    pub transition_triggers: Vec<TransitionTrigger>,
    /// Phase-local turns required before any trigger is considered.
    pub min_turns: u32,
    /// Phase-local turns at which advancement is forced.
    pub max_turns: u32,
}

static SKEPTICAL: Lazy<PhaseConfig> = Lazy::new(|| PhaseConfig {
    phase: Phase::Skeptical,
    goal: "新しい提案に対して慎重な姿勢を示す",
    sample_phrases: vec![
        "ポジティブ…インパクト？初めて聞いたな",
        "どうせ証明書出して終わりじゃないの？",
        "そういうのって結局、費用かかるんじゃないの？",
        "うちは環境うんぬんで仕事もらってるわけじゃないからね",
    ],
    behaviors: vec![
        "短く切り捨てるように話す",
        "皮肉を言う",
        "コストへの懸念を強調",
        "新しい用語に戸惑いを示す",
    ],
    transition_triggers: vec![
        TransitionTrigger::Combined {
            data: vec![DataPoint::Cost, DataPoint::CaseStudy],
            keywords: vec!["具体的", "実際", "数字", "万円", "実例"],
        },
        TransitionTrigger::TurnCount { turns: 4 },
    ],
    min_turns: 2,
    max_turns: 5,
});

static INTERESTED: Lazy<PhaseConfig> = Lazy::new(|| PhaseConfig {
    phase: Phase::Interested,
    goal: "詳細を確認しながら徐々に関心を示す",
    sample_phrases: vec![
        "それ、いくらくらいかかったんだ？",
        "なるほど。まぁ、結果が出るならいいけど",
        "ウチの規模でそこまで回収できるかね？",
        "書類関係、面倒じゃないの？",
    ],
    behaviors: vec![
        "質問を増やす",
        "トーンが少し軟化（でもまだ慎重）",
        "具体的な数字に反応する",
        "実務的な懸念を提示",
    ],
    transition_triggers: vec![
        TransitionTrigger::Combined {
            data: vec![
                DataPoint::Cost,
                DataPoint::Roi,
                DataPoint::TimeRequired,
                DataPoint::SupportOffered,
            ],
            keywords: vec![],
        },
        TransitionTrigger::TurnCount { turns: 5 },
    ],
    min_turns: 3,
    max_turns: 7,
});

static CONSIDERING: Lazy<PhaseConfig> = Lazy::new(|| PhaseConfig {
    phase: Phase::Considering,
    goal: "前向きだが慎重に最終確認",
    sample_phrases: vec![
        "数字で見ると小さいけど、積み上げると悪くないな",
        "そこまでやってくれるなら助かるけど...",
        "資料見てから判断させてもらえる？",
        "次回、詳しい話を聞かせてもらおうか",
    ],
    behaviors: vec![
        "考え込む様子（「うーん」「ふむ」）",
        "最終確認の質問をする",
        "前向きな姿勢を示す（でも即決はしない）",
    ],
    transition_triggers: vec![TransitionTrigger::Keyword {
        keywords: vec!["資料", "次回", "検討", "持ってくる", "詳しい", "次回提案"],
    }],
    min_turns: 2,
    max_turns: 5,
});

/// Returns the configuration for a phase.
pub fn phase_config(phase: Phase) -> &'static PhaseConfig {
    match phase {
        Phase::Skeptical => &SKEPTICAL,
        Phase::Interested => &INTERESTED,
        Phase::Considering => &CONSIDERING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phase_has_a_matching_config() {
        for phase in Phase::ORDER {
            assert_eq!(phase_config(phase).phase, phase);
        }
    }

    #[test]
    fn turn_bounds_are_ordered() {
        for phase in Phase::ORDER {
            let config = phase_config(phase);
            assert!(config.max_turns >= config.min_turns, "{:?}", phase);
        }
    }

    #[test]
    fn skeptical_bounds_match_reference() {
        let config = phase_config(Phase::Skeptical);
        assert_eq!(config.min_turns, 2);
        assert_eq!(config.max_turns, 5);
    }

    #[test]
    fn interested_bounds_match_reference() {
        let config = phase_config(Phase::Interested);
        assert_eq!(config.min_turns, 3);
        assert_eq!(config.max_turns, 7);
    }

    #[test]
    fn interested_gate_has_empty_keyword_clause() {
        let config = phase_config(Phase::Interested);
        assert!(matches!(
            &config.transition_triggers[0],
            TransitionTrigger::Combined { keywords, .. } if keywords.is_empty()
        ));
    }

    #[test]
    fn every_phase_has_guidance_text() {
        for phase in Phase::ORDER {
            let config = phase_config(phase);
            assert!(!config.goal.is_empty());
            assert!(!config.sample_phrases.is_empty());
            assert!(!config.behaviors.is_empty());
            assert!(!config.transition_triggers.is_empty());
        }
    }
}
