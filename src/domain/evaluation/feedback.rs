//! Human-readable feedback rendered from performance metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Score;

use super::metrics::{Pacing, PerformanceMetrics};

const BAR_CELLS: usize = 20;
const RULE_WIDTH: usize = 60;

/// Scores below this get a recommendation.
const RECOMMEND_BELOW: f64 = 0.7;

/// Letter grade for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::S
        } else if score >= 0.8 {
            Self::A
        } else if score >= 0.7 {
            Self::B
        } else if score >= 0.6 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::S => "S (優秀)",
            Self::A => "A (良好)",
            Self::B => "B (普通)",
            Self::C => "C (要改善)",
            Self::D => "D (不十分)",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Comments for the three score tiers of one dimension.
struct TierComments {
    strong: &'static str,
    fair: &'static str,
    weak: &'static str,
}

impl TierComments {
    fn pick(&self, score: Score) -> &'static str {
        if score.value() >= 0.8 {
            self.strong
        } else if score.value() >= 0.5 {
            self.fair
        } else {
            self.weak
        }
    }
}

const OBJECTION_COMMENTS: TierComments = TierComments {
    strong: "✅ 社長の懸念に対して具体的なデータで効果的に対応しました",
    fair: "⚠️  懸念への対応は良好ですが、さらに具体例があるとより説得力が増します",
    weak: "❌ 社長の懸念（コスト、時間、効果）への対応が不十分です",
};

const DATA_COMMENTS: TierComments = TierComments {
    strong: "✅ 具体的な数字を効果的に使用し、説得力のある提案ができました",
    fair: "⚠️  数字は使いましたが、もう少しROIや効果を定量的に示すと良いでしょう",
    weak: "❌ 具体的な数字が不足しています。費用、効果、ROIを明確に示しましょう",
};

const CASE_STUDY_COMMENTS: TierComments = TierComments {
    strong: "✅ 適切な事例を効果的に紹介しました",
    fair: "⚠️  事例は紹介しましたが、もう少し詳しく説明すると良いでしょう",
    weak: "❌ 具体的な事例が不足しています。同業他社の成功例を紹介しましょう",
};

const RAPPORT_COMMENTS: TierComments = TierComments {
    strong: "✅ 社長との信頼関係を効果的に構築しました",
    fair: "⚠️  もう少し社長の立場に寄り添った提案を心がけましょう",
    weak: "❌ 信頼構築が不十分です。社長の懸念を理解し、寄り添う姿勢を示しましょう",
};

const LISTENING_COMMENTS: TierComments = TierComments {
    strong: "✅ 社長の質問を引き出し、丁寧に答えました",
    fair: "⚠️  社長の質問にもう少し耳を傾けましょう",
    weak: "❌ 社長からの質問が少なく、対話になっていません",
};

const PROGRESSION_COMMENTS: TierComments = TierComments {
    strong: "✅ 適切なテンポで会話を進めました",
    fair: "⚠️  会話のテンポに改善の余地があります",
    weak: "❌ 会話のテンポが適切ではありません",
};

fn score_bar(score: Score) -> String {
    let filled = ((score.value() * BAR_CELLS as f64) as usize).min(BAR_CELLS);
    format!(
        "{}{} {}",
        "█".repeat(filled),
        "░".repeat(BAR_CELLS - filled),
        score
    )
}

/// Improvement suggestions, one per weak dimension plus pacing.
///
/// Returns a single congratulation when nothing needs work.
pub fn recommendations(metrics: &PerformanceMetrics) -> Vec<&'static str> {
    let mut items = Vec::new();

    if metrics.objection_handling.value() < RECOMMEND_BELOW {
        items.push(
            "✓ 社長の懸念（コスト、時間、効果、保証）を事前に想定し、具体的なデータで対応する準備をしましょう",
        );
    }
    if metrics.data_usage.value() < RECOMMEND_BELOW {
        items.push(
            "✓ 費用、ROI、効果を具体的な数字で示しましょう（例: 20〜30万円、1.2倍増加、年間3万円削減）",
        );
    }
    if metrics.case_study_relevance.value() < RECOMMEND_BELOW {
        items.push(
            "✓ 同業他社の成功事例を詳しく紹介しましょう（群馬の部品メーカー、宇都宮の金型メーカーなど）",
        );
    }
    if metrics.rapport_building.value() < RECOMMEND_BELOW {
        items.push("✓ 社長の立場に寄り添い、懸念を理解していることを示しましょう");
    }
    if metrics.listening_skills.value() < RECOMMEND_BELOW {
        items.push("✓ 社長の質問を引き出し、一つずつ丁寧に答えましょう");
    }

    match metrics.pacing {
        Pacing::TooSlow => {
            items.push("✓ 会話のテンポが遅すぎます。相手の反応を見ながら情報を提供しましょう")
        }
        Pacing::TooFast => {
            items.push("✓ 会話のテンポが速すぎます。社長が納得するまで丁寧に説明しましょう")
        }
        Pacing::NotStarted | Pacing::OnPace => {}
    }

    if items.is_empty() {
        items.push("✓ 素晴らしい営業でした！この調子で頑張ってください");
    }
    items
}

/// Renders the full feedback report.
pub fn render_feedback(metrics: &PerformanceMetrics) -> String {
    let overall = metrics.overall_score();
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines: Vec<String> = Vec::new();

    lines.push(rule.clone());
    lines.push("📊 営業ロールプレイ評価レポート".to_string());
    lines.push(rule.clone());
    lines.push(String::new());

    lines.push(format!("🎯 総合スコア: {:.0}/100", overall * 100.0));
    lines.push(format!("   評価: {}", Grade::from_score(overall)));
    lines.push(String::new());

    lines.push("📈 基本情報:".to_string());
    lines.push(format!("   - 総ターン数: {}", metrics.total_turns));
    lines.push(format!("   - 最終フェーズ: {}", metrics.final_phase.label()));
    lines.push(format!(
        "   - 会話完了: {}",
        if metrics.conversation_completed {
            "✅ はい"
        } else {
            "❌ いいえ"
        }
    ));
    lines.push(String::new());

    lines.push("📋 詳細評価:".to_string());
    lines.push(String::new());

    let data_labels: Vec<&str> = metrics
        .data_points_provided
        .iter()
        .map(|point| point.label())
        .collect();

    let dimensions: [(&str, Score, &TierComments, Option<(&str, String)>); 6] = [
        (
            "1️⃣ 懸念への対応",
            metrics.objection_handling,
            &OBJECTION_COMMENTS,
            Some(("対応した懸念", metrics.concerns_addressed.join(", "))),
        ),
        (
            "2️⃣ 具体的数字の活用",
            metrics.data_usage,
            &DATA_COMMENTS,
            Some(("提供したデータ", data_labels.join(", "))),
        ),
        (
            "3️⃣ 事例の活用",
            metrics.case_study_relevance,
            &CASE_STUDY_COMMENTS,
            Some(("使用した事例", metrics.case_studies_used.join(", "))),
        ),
        (
            "4️⃣ 信頼構築",
            metrics.rapport_building,
            &RAPPORT_COMMENTS,
            None,
        ),
        (
            "5️⃣ 傾聴力",
            metrics.listening_skills,
            &LISTENING_COMMENTS,
            None,
        ),
        (
            "6️⃣ フェーズ遷移速度",
            metrics.phase_progression_speed,
            &PROGRESSION_COMMENTS,
            None,
        ),
    ];

    for (title, score, comments, detail) in dimensions {
        lines.push(format!("{}: {}", title, score_bar(score)));
        lines.push(format!("   {}", comments.pick(score)));
        if let Some((label, items)) = detail {
            if !items.is_empty() {
                lines.push(format!("   {}: {}", label, items));
            }
        }
        lines.push(String::new());
    }

    if !metrics.missed_opportunities.is_empty() {
        lines.push("💡 見逃した機会:".to_string());
        for missed in &metrics.missed_opportunities {
            lines.push(format!("   - {}", missed.message()));
        }
        lines.push(String::new());
    }

    lines.push("🎓 次回への推奨事項:".to_string());
    for item in recommendations(metrics) {
        lines.push(format!("   {}", item));
    }
    lines.push(String::new());

    lines.push(rule);
    lines.join("\n")
}
