//! Renders the counterpart's system prompt from its profile and the
//! current conversation state.

use crate::domain::character::CharacterProfile;
use crate::domain::roleplay::{phase_config, ConversationState, DataPoint, Phase};

use super::templates;

/// Builds the complete instruction document for the next agent turn.
///
/// Pure and deterministic: the same profile and state always render the
/// same text. Missing optional profile fields render as empty values.
pub fn build_instructions(character: &CharacterProfile, state: &ConversationState) -> String {
    let sections = [
        role_section(character),
        personality_section(character),
        context_section(character),
        templates::PRONUNCIATIONS.to_string(),
        templates::RULES.replace("{name}", &character.name),
        flow_section(state),
        templates::SAFETY.replace("{name}", &character.name),
    ];

    let mut document = sections.join("\n\n");
    document.push('\n');
    document
}

fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn role_section(character: &CharacterProfile) -> String {
    format!(
        "# Role & Objective\n\
         あなたは{name}（{age}歳）、{company}の代表取締役社長です。\n\
         {size}の{industry}を経営しています。\n\n\
         **あなたの経営実績**:\n{achievements}\n\n\
         **あなたの主な懸念事項**:\n{concerns}\n\n\
         {success}",
        name = character.name,
        age = character.age,
        company = character.company_name,
        size = character.company_size,
        industry = character.industry,
        achievements = format_list(&character.achievements),
        concerns = format_list(&character.concerns),
        success = templates::SUCCESS_CRITERIA,
    )
}

fn personality_section(character: &CharacterProfile) -> String {
    let traits = &character.personality;
    format!(
        "# Personality & Tone\n\n\
         **決断スタイル**: {}\n\
         **コミュニケーション**: {}\n\
         **専門性**: {}\n\
         **態度**: {}\n\n\
         {}\n\n\
         **音声トーン**: {}",
        traits.decision_style,
        traits.communication,
        traits.expertise,
        traits.attitude,
        templates::SPEAKING_STYLE,
        traits.tone.as_deref().unwrap_or(""),
    )
}

fn context_section(character: &CharacterProfile) -> String {
    let cues = &character.environment;
    format!(
        "# Context\n\n\
         **環境**: {}\n\
         **時間帯**: {}\n\
         **身体的状態**: {}\n\
         **ビジネス背景**: {}\n\n\
         {}",
        cues.setting,
        cues.time_context,
        cues.physical_state,
        cues.business_context.as_deref().unwrap_or(""),
        templates::PIF_CONTEXT,
    )
}

fn flow_section(state: &ConversationState) -> String {
    format!(
        "# Conversation Flow\n\n\
         ## 【現在のフェーズ: {phase}】\n\n\
         **現在のターン数**: {turns}\n\
         **このフェーズのターン数**: {phase_turns}\n\n\
         {guidance}",
        phase = state.phase(),
        turns = state.turn_count(),
        phase_turns = state.phase_turn_count(),
        guidance = render_phase_guidance(state),
    )
}

/// Renders the phase-dependent part of the flow section: goal, behaviors,
/// samples and transition guidance. Turn counters are not included.
pub fn render_phase_guidance(state: &ConversationState) -> String {
    let phase = state.phase();
    let config = phase_config(phase);

    format!(
        "**このフェーズの目標**: {goal}\n\n\
         **このフェーズでの振る舞い**:\n{behaviors}\n\n\
         **このフェーズのサンプルフレーズ（参考）**:\n{samples}\n\n\
         {guidance}\n\n\
         ## フェーズ遷移について\n\n\
         {transition}",
        goal = config.goal,
        behaviors = format_list(&config.behaviors),
        samples = format_list(&config.sample_phrases),
        guidance = phase_guidance(phase, state),
        transition = transition_guidance(phase, state),
    )
}

fn phase_guidance(phase: Phase, state: &ConversationState) -> String {
    if let Some(text) = templates::static_phase_guidance(phase) {
        return text.to_string();
    }

    let data = state.data_provided();
    let status: Vec<&str> = [
        (DataPoint::Cost, "✅ 費用情報を受け取った"),
        (DataPoint::CaseStudy, "✅ 事例を聞いた"),
        (DataPoint::Roi, "✅ ROI情報を聞いた"),
    ]
    .iter()
    .filter(|(point, _)| data.get(*point))
    .map(|(_, line)| *line)
    .collect();

    let status = if status.is_empty() {
        "まだ情報が不足しています".to_string()
    } else {
        status.join("\n")
    };

    format!(
        "### Phase 2: INTERESTED（興味）の詳細ガイダンス\n\n\
         **現在の状況**:\n{}\n\n\
         {}",
        status,
        templates::INTERESTED_GUIDANCE_BODY,
    )
}

fn transition_guidance(phase: Phase, state: &ConversationState) -> String {
    if let Some(text) = templates::static_transition_guidance(phase) {
        return text.to_string();
    }

    let data = state.data_provided();
    let missing: Vec<&str> = [
        (DataPoint::Cost, "具体的な費用"),
        (DataPoint::Roi, "費用対効果"),
        (DataPoint::TimeRequired, "所要期間"),
        (DataPoint::SupportOffered, "サポート内容"),
    ]
    .iter()
    .filter(|(point, _)| !data.get(*point))
    .map(|(_, label)| *label)
    .collect();

    if missing.is_empty() {
        return templates::INTERESTED_TRANSITION_READY.to_string();
    }

    format!(
        "**次のフェーズ（CONSIDERING）への遷移条件**:\n\
         まだ以下の情報が不足しています:\n{}\n\n\
         これらの情報が提供されたら、検討フェーズに移行します。",
        format_list(&missing),
    )
}
