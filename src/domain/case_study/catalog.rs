//! Built-in case studies the salesperson can cite.

use once_cell::sync::Lazy;

/// A reference customer story.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub company_profile: &'static str,
    pub industry: &'static str,
    pub company_size: &'static str,
    pub investment_type: &'static str,
    pub cost: &'static str,
    pub duration: &'static str,
    /// Metric name and value, in presentation order.
    pub quantitative_results: Vec<(&'static str, &'static str)>,
    pub qualitative_results: Vec<&'static str>,
    pub detail: &'static str,
    pub key_points: Vec<&'static str>,
    /// Terms in an utterance that identify this case study.
    pub mention_terms: Vec<&'static str>,
}

static CATALOG: Lazy<Vec<CaseStudy>> = Lazy::new(|| {
    vec![
        CaseStudy {
            id: "gunma_parts",
            company_profile: "群馬の部品メーカー",
            industry: "自動車部品製造",
            company_size: "中小企業",
            investment_type: "PIF評価レポート作成",
            cost: "20〜30万円程度",
            duration: "約3ヶ月",
            quantitative_results: vec![
                ("発注量増加", "約1.2倍"),
                ("利益増加", "数百万円規模"),
                ("投資回収期間", "約半年"),
            ],
            qualitative_results: vec![
                "トヨタ系サプライヤー調達評価で環境対応ランクA取得",
                "既存取引先からの評価向上",
                "企業ブランド価値の向上",
            ],
            detail: "PIFを活用して評価レポートを作成し、トヨタ系のサプライヤー調達評価で\
                     「環境対応ランクA」を取得。省エネの成果が数字として可視化されたことで評価され、\
                     次年度の発注量が約1.2倍に増えた。",
            key_points: vec![
                "投資額は20〜30万円程度",
                "発注増で数百万円規模の利益",
                "数字として成果を可視化したことが評価された",
            ],
            mention_terms: vec!["群馬", "部品メーカー"],
        },
        CaseStudy {
            id: "utsunomiya_mold",
            company_profile: "宇都宮の金型メーカー",
            industry: "金型製造",
            company_size: "中小企業（同規模）",
            investment_type: "PIF認定取得",
            cost: "評価・レポート作成費用のみ",
            duration: "約2ヶ月",
            quantitative_results: vec![
                ("金利優遇", "0.1%削減"),
                ("年間削減額", "約3万円（借入3,000万円の場合）"),
            ],
            qualitative_results: vec![
                "市の広報誌に環境貢献企業として掲載",
                "新規取引の問い合わせ増加",
                "ブランドイメージ向上",
                "従業員の意識向上",
            ],
            detail: "既存の取り組みを整理しただけでPIF認定を受け、金利が0.1%優遇された。\
                     借入3,000万円規模で年間約3万円の削減。環境貢献企業として市の広報誌にも掲載され、\
                     新規取引の問い合わせにつながった。",
            key_points: vec![
                "既存の取り組みを整理するだけでOK",
                "金利優遇（0.1%）で年間約3万円削減",
                "広報効果で新規取引増加",
            ],
            mention_terms: vec!["宇都宮", "金型メーカー"],
        },
        CaseStudy {
            id: "general_benefits",
            company_profile: "製造業全般",
            industry: "製造業",
            company_size: "中小企業",
            investment_type: "PIF全般",
            cost: "ケースバイケース",
            duration: "2〜3ヶ月",
            quantitative_results: vec![],
            qualitative_results: vec![
                "第三者認証による信用力向上",
                "調達評価・金融面でのメリット",
                "PR・ブランディング効果",
                "従業員のモチベーション向上",
            ],
            detail: "PIF（ポジティブ・インパクト・ファイナンス）は、企業の環境や地域への良い取り組みを\
                     金融面で応援する仕組み。省エネ設備を導入している企業に特に適している。",
            key_points: vec![
                "環境への取り組みが第三者に認められる",
                "取引先からの評価が向上",
                "金融面でのメリット（金利優遇等）",
            ],
            mention_terms: vec![],
        },
    ]
});

/// Looks up a case study by id.
pub fn get(id: &str) -> Option<&'static CaseStudy> {
    CATALOG.iter().find(|case| case.id == id)
}

/// All case studies in catalog order.
pub fn all() -> &'static [CaseStudy] {
    &CATALOG
}

/// Case studies whose industry and company size contain the given filters.
///
/// A `None` filter matches everything.
pub fn search(industry: Option<&str>, company_size: Option<&str>) -> Vec<&'static CaseStudy> {
    CATALOG
        .iter()
        .filter(|case| industry.map_or(true, |wanted| case.industry.contains(wanted)))
        .filter(|case| company_size.map_or(true, |wanted| case.company_size.contains(wanted)))
        .collect()
}

/// Ids of case studies referenced in the text, in catalog order.
pub fn detect_mentions(text: &str) -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter(|case| case.mention_terms.iter().any(|term| text.contains(term)))
        .map(|case| case.id)
        .collect()
}

/// One-paragraph summary suitable for prompts and reports.
pub fn summary(case: &CaseStudy) -> String {
    let mut text = format!("{}の事例:\n投資: {}\n", case.company_profile, case.cost);

    if !case.quantitative_results.is_empty() {
        let results: Vec<String> = case
            .quantitative_results
            .iter()
            .map(|(metric, value)| format!("{}={}", metric, value))
            .collect();
        text.push_str(&format!("成果: {}\n", results.join(", ")));
    }

    text.push_str(&format!("ポイント: {}", case.key_points.join(", ")));
    text
}
