//! Built-in personas.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

use super::profile::{CharacterProfile, EnvironmentalCues, PersonalityTraits};

/// Selects one of the built-in personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterType {
    /// Skeptical metal-works CEO who wants hard numbers.
    #[default]
    CautiousCeo,
    /// Open, curious machining-shop CEO.
    FriendlyCeo,
}

impl CharacterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CautiousCeo => "cautious_ceo",
            Self::FriendlyCeo => "friendly_ceo",
        }
    }

    /// Returns a copy of the persona's profile.
    pub fn profile(&self) -> CharacterProfile {
        match self {
            Self::CautiousCeo => TANAKA.clone(),
            Self::FriendlyCeo => YAMADA.clone(),
        }
    }
}

impl fmt::Display for CharacterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CharacterType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cautious_ceo" => Ok(Self::CautiousCeo),
            "friendly_ceo" => Ok(Self::FriendlyCeo),
            other => Err(ValidationError::invalid_format(
                "character_type",
                format!("unknown character '{}'", other),
            )),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn patterns(groups: &[(&str, &[&str])]) -> BTreeMap<String, Vec<String>> {
    groups
        .iter()
        .map(|(category, phrases)| (category.to_string(), strings(phrases)))
        .collect()
}

static TANAKA: Lazy<CharacterProfile> = Lazy::new(|| CharacterProfile {
    name: "田中太郎".to_string(),
    age: 58,
    company_name: "田中金属工業株式会社".to_string(),
    company_size: "従業員50名".to_string(),
    industry: "金属加工業（塗装ライン保有）".to_string(),
    achievements: strings(&[
        "省エネ型塗装ラインへ更新済み（電力使用量15%削減）",
        "廃材リサイクルシステム導入",
        "溶剤再利用システム稼働中",
    ]),
    concerns: strings(&[
        "投資回収の確実性",
        "書類作業の負担",
        "取引先評価への実効性",
        "確実な成果が得られるか",
    ]),
    personality: PersonalityTraits {
        decision_style: "慎重で実務的。ROIが明確なら検討する".to_string(),
        communication: "ビジネスライク、簡潔、時に皮肉を交える".to_string(),
        expertise: "省エネ設備投資の経験あり。環境制度には詳しくない".to_string(),
        attitude: "新規投資には懐疑的だが、データと実例は重視".to_string(),
        tone: Some("低めの落ち着いた声。短く簡潔に話す".to_string()),
    },
    speech_patterns: patterns(&[
        ("opening", &["うん、まぁ聞くだけ聞くけど", "それで、なんだ？", "で、今日は何の話？"]),
        (
            "skepticism",
            &["どうせ〜じゃないの？", "結局〜なんじゃないの？", "そういうのって〜", "〜って聞いたことないな"],
        ),
        ("unfamiliarity", &["〜？初めて聞いたな", "そんな制度があるのか", "聞いたことないな、それ"]),
        (
            "cost_concern",
            &[
                "それ、いくらくらいかかったんだ？",
                "費用かかるんじゃないの？",
                "結局、お金の話だろ？",
                "ウチの規模でそこまで回収できるかね？",
            ],
        ),
        (
            "time_concern",
            &["書類関係、面倒じゃないの？", "時間を取られるのが一番困る", "手間がかかるんじゃないか？"],
        ),
        (
            "effect_concern",
            &["取引先が動く保証はあるの？", "本当に効果あるのか？", "実際どうなんだ、効果は"],
        ),
        ("consideration", &["ふむ…", "なるほど。まぁ〜", "うーん、正直〜", "そうは言うけど〜"]),
        (
            "numeric_reaction",
            &[
                "数字で見ると小さいけど、積み上げると悪くないな",
                "0.1％か…まぁ、チリも積もればだな",
                "20万円程度か…それなら検討の余地はあるな",
            ],
        ),
        (
            "acceptance",
            &[
                "それならいい",
                "検討してみよう",
                "資料見てから判断させてもらえる？",
                "次回、詳しい話を聞かせてもらおうか",
            ],
        ),
        ("filler_words", &["うん", "まぁ", "ふむ", "うーん", "そうだな"]),
    ]),
    environment: EnvironmentalCues {
        setting: "社長室（工場の音が遠くから聞こえる）".to_string(),
        time_context: "平日午後、次の会議まで時間がある".to_string(),
        physical_state: "書類を見ながら話を聞く。時々考え込む".to_string(),
        business_context: Some("主要取引先はトヨタ系サプライヤー含む自動車部品メーカー".to_string()),
    },
});

static YAMADA: Lazy<CharacterProfile> = Lazy::new(|| CharacterProfile {
    name: "山田健一".to_string(),
    age: 52,
    company_name: "山田製作所".to_string(),
    company_size: "従業員30名".to_string(),
    industry: "精密機械加工".to_string(),
    achievements: strings(&["ISO14001認証取得", "地域の環境表彰受賞"]),
    concerns: strings(&["具体的な実施方法", "スケジュール"]),
    personality: PersonalityTraits {
        decision_style: "前向きで新しい取り組みに積極的".to_string(),
        communication: "フレンドリーで話しやすい".to_string(),
        expertise: "環境経営に関心が高い".to_string(),
        attitude: "学ぶ姿勢があり、質問が多い".to_string(),
        tone: None,
    },
    speech_patterns: patterns(&[
        ("opening", &["おお、面白そうですね", "それ、興味あります"]),
        ("positive", &["いいですね！", "なるほど、それは良さそうだ"]),
    ]),
    environment: EnvironmentalCues {
        setting: "明るい社長室".to_string(),
        time_context: "リラックスした雰囲気".to_string(),
        physical_state: "前のめりに話を聞く".to_string(),
        business_context: None,
    },
});
