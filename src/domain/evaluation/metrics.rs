//! Performance scoring for a finished role-play.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Score;
use crate::domain::roleplay::{ConversationState, DataPoint, Phase};

/// Total turns a well-paced conversation takes across all phases.
pub const IDEAL_TURNS: u32 = 12;

/// Concern categories the counterpart is expected to raise.
pub const EXPECTED_CONCERNS: usize = 4;

/// Case studies needed for full marks.
pub const EXPECTED_CASE_STUDIES: usize = 2;

/// Questions needed for full listening marks.
pub const EXPECTED_QUESTIONS: usize = 5;

/// Progression scores above `IDEAL_TURNS / turns` past this ratio are
/// replaced by a flat penalty.
const TOO_FAST_RATIO: f64 = 1.5;
const TOO_FAST_SCORE: f64 = 0.5;

/// Progression below this is considered too slow.
pub const SLOW_PROGRESSION: f64 = 0.5;

const WEIGHT_OBJECTION: f64 = 0.25;
const WEIGHT_DATA: f64 = 0.25;
const WEIGHT_CASE_STUDY: f64 = 0.15;
const WEIGHT_RAPPORT: f64 = 0.15;
const WEIGHT_LISTENING: f64 = 0.10;
const WEIGHT_PROGRESSION: f64 = 0.10;

/// Something the salesperson should have done but did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissedOpportunity {
    NoCost,
    NoRoi,
    NoCaseStudy,
    NoSupport,
}

impl MissedOpportunity {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoCost => "具体的な費用を提示していません",
            Self::NoRoi => "ROI（投資対効果）を示していません",
            Self::NoCaseStudy => "具体的な事例を紹介していません",
            Self::NoSupport => "サポート体制を説明していません",
        }
    }
}

/// How the conversation's length compared to the ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pacing {
    /// No turns were taken.
    NotStarted,
    /// Far fewer turns than ideal; scored with the flat penalty.
    TooFast,
    OnPace,
    /// So many turns that progression fell below half marks.
    TooSlow,
}

impl Pacing {
    /// Classifies pacing from the total number of turns.
    pub fn from_turns(total_turns: u32) -> Self {
        if total_turns == 0 {
            return Self::NotStarted;
        }
        let speed = f64::from(IDEAL_TURNS) / f64::from(total_turns);
        if speed > TOO_FAST_RATIO {
            Self::TooFast
        } else if speed < SLOW_PROGRESSION {
            Self::TooSlow
        } else {
            Self::OnPace
        }
    }
}

/// Scores and details derived from a finished conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_turns: u32,
    pub final_phase: Phase,
    pub conversation_completed: bool,

    pub objection_handling: Score,
    pub data_usage: Score,
    pub case_study_relevance: Score,
    pub rapport_building: Score,
    pub listening_skills: Score,
    pub phase_progression_speed: Score,

    pub concerns_addressed: Vec<String>,
    pub data_points_provided: Vec<DataPoint>,
    pub case_studies_used: Vec<String>,
    pub missed_opportunities: Vec<MissedOpportunity>,
    pub pacing: Pacing,
}

impl PerformanceMetrics {
    /// Weighted sum of the six sub-scores, rounded to two decimals.
    pub fn overall_score(&self) -> f64 {
        let overall = self.objection_handling.value() * WEIGHT_OBJECTION
            + self.data_usage.value() * WEIGHT_DATA
            + self.case_study_relevance.value() * WEIGHT_CASE_STUDY
            + self.rapport_building.value() * WEIGHT_RAPPORT
            + self.listening_skills.value() * WEIGHT_LISTENING
            + self.phase_progression_speed.value() * WEIGHT_PROGRESSION;

        round_to_hundredths(overall)
    }
}

/// Rounds the exact binary value to two decimals, ties to even.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Scores a conversation from its final state.
pub fn evaluate(state: &ConversationState) -> PerformanceMetrics {
    let data = state.data_provided();
    let total_turns = state.turn_count();
    let case_study_count = state.case_studies_mentioned().len();

    let mut missed_opportunities = Vec::new();
    if !data.get(DataPoint::Cost) {
        missed_opportunities.push(MissedOpportunity::NoCost);
    }
    if !data.get(DataPoint::Roi) {
        missed_opportunities.push(MissedOpportunity::NoRoi);
    }
    if case_study_count == 0 {
        missed_opportunities.push(MissedOpportunity::NoCaseStudy);
    }
    if !data.get(DataPoint::SupportOffered) {
        missed_opportunities.push(MissedOpportunity::NoSupport);
    }

    PerformanceMetrics {
        total_turns,
        final_phase: state.phase(),
        conversation_completed: state.phase() == Phase::Considering
            && state.phase_turn_count() >= 2,
        objection_handling: Score::ratio(state.concerns_raised().len(), EXPECTED_CONCERNS),
        data_usage: Score::ratio(data.count(), DataPoint::ALL.len()),
        case_study_relevance: Score::ratio(case_study_count, EXPECTED_CASE_STUDIES),
        rapport_building: rapport_for(state.phase()),
        listening_skills: Score::ratio(state.questions_asked().len(), EXPECTED_QUESTIONS),
        phase_progression_speed: progression_speed(total_turns),
        concerns_addressed: state.concerns_raised().to_vec(),
        data_points_provided: data.provided(),
        case_studies_used: state.case_studies_mentioned().to_vec(),
        missed_opportunities,
        pacing: Pacing::from_turns(total_turns),
    }
}

fn rapport_for(phase: Phase) -> Score {
    match phase {
        Phase::Skeptical => Score::new(0.3),
        Phase::Interested => Score::new(0.6),
        Phase::Considering => Score::FULL,
    }
}

fn progression_speed(total_turns: u32) -> Score {
    if total_turns == 0 {
        return Score::ZERO;
    }
    let speed = f64::from(IDEAL_TURNS) / f64::from(total_turns);
    if speed <= TOO_FAST_RATIO {
        Score::new(speed)
    } else {
        Score::new(TOO_FAST_SCORE)
    }
}
