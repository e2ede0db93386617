//! Wave-driven template selectors for ordinary trainers.

use super::presets::TemplatePreset;
use super::types::{PartyMemberStrength, PartyTemplate};
use crate::battle::BattleContext;
use crate::constants::{
    GRUNT_WAVE_FIVE_SLOT, GRUNT_WAVE_FOUR_SLOT, GRUNT_WAVE_STRONG, GRUNT_WAVE_THREE_AVG,
    RIVAL_FINAL_STAGE, STARTING_WAVE, WAVE_TEMPLATE_OFFSET, WAVE_TEMPLATE_STEP,
};
use PartyMemberStrength::*;

/// Candidate index for a difficulty wave: `ceil((dw - 20) / 30)` clamped to
/// `[0, len - 1]`. Flat below wave 20.
pub fn wave_template_index(difficulty_wave: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let above = difficulty_wave.saturating_sub(WAVE_TEMPLATE_OFFSET);
    let idx = above.div_ceil(WAVE_TEMPLATE_STEP) as usize;
    idx.min(len - 1)
}

/// Picks one of `templates` by the battle's difficulty wave.
/// Returns `None` only for an empty candidate list.
pub fn wave_party_template<'a>(
    battle: &BattleContext,
    templates: &'a [PartyTemplate],
) -> Option<&'a PartyTemplate> {
    let wave = if battle.wave_index == 0 {
        STARTING_WAVE
    } else {
        battle.wave_index
    };
    let dw = battle.game_mode.wave_for_difficulty(wave, true);
    templates.get(wave_template_index(dw, templates.len()))
}

/// Preset variant of [`wave_party_template`].
pub fn wave_preset(battle: &BattleContext, presets: &[TemplatePreset]) -> PartyTemplate {
    let templates: Vec<PartyTemplate> = presets.iter().map(|p| p.template()).collect();
    wave_party_template(battle, &templates)
        .cloned()
        .unwrap_or_else(|| TemplatePreset::TwoAvg.template())
}

pub fn gym_leader_party_template(battle: &BattleContext) -> PartyTemplate {
    wave_preset(
        battle,
        &[
            TemplatePreset::GymLeader1,
            TemplatePreset::GymLeader2,
            TemplatePreset::GymLeader3,
            TemplatePreset::GymLeader4,
            TemplatePreset::GymLeader5,
        ],
    )
}

/// Threshold ladder on the raw wave index.
pub fn evil_grunt_party_template(battle: &BattleContext) -> PartyTemplate {
    let wave = battle.wave_index;
    let preset = if wave >= GRUNT_WAVE_FIVE_SLOT {
        TemplatePreset::GymLeader5
    } else if wave >= GRUNT_WAVE_FOUR_SLOT {
        TemplatePreset::GymLeader4
    } else if wave >= GRUNT_WAVE_STRONG {
        TemplatePreset::TwoAvgOneStrong
    } else if wave >= GRUNT_WAVE_THREE_AVG {
        TemplatePreset::ThreeAvg
    } else {
        TemplatePreset::TwoAvg
    };
    preset.template()
}

fn champion_strong(size: usize) -> PartyTemplate {
    PartyTemplate::new(size, Strong).balanced()
}

/// Nightmare-mode ladder. Champions get balanced strong runs.
pub fn nightmare_party_template(wave_index: u32, is_champion: bool) -> PartyTemplate {
    let leaf = PartyTemplate::new;
    match (wave_index, is_champion) {
        (0..=10, _) => PartyTemplate::compound(vec![leaf(1, Average), leaf(1, Strong)]),
        (11..=20, true) => PartyTemplate::compound(vec![champion_strong(2), leaf(1, Average)]),
        (11..=20, false) => PartyTemplate::compound(vec![leaf(2, Average), leaf(1, Strong)]),
        (21..=45, true) => PartyTemplate::compound(vec![champion_strong(3), leaf(1, Average)]),
        (21..=45, false) => PartyTemplate::compound(vec![leaf(2, Average), leaf(2, Strong)]),
        (46..=60, true) => champion_strong(5),
        (46..=60, false) => PartyTemplate::compound(vec![leaf(2, Average), leaf(3, Strong)]),
        (61..=70, true) => champion_strong(6),
        (61..=70, false) => PartyTemplate::compound(vec![leaf(2, Average), leaf(4, Strong)]),
        (_, true) => PartyTemplate::compound(vec![champion_strong(5), leaf(1, Stronger)]),
        (_, false) => PartyTemplate::compound(vec![
            leaf(1, Average),
            leaf(4, Strong),
            leaf(1, Stronger),
        ]),
    }
}

/// `RIVAL` for the first encounter, `RIVAL_n` after, capped at `RIVAL_6`.
pub fn rival_stage_preset(stage: u32) -> TemplatePreset {
    match stage.min(RIVAL_FINAL_STAGE) {
        0 | 1 => TemplatePreset::Rival,
        2 => TemplatePreset::Rival2,
        3 => TemplatePreset::Rival3,
        4 => TemplatePreset::Rival4,
        5 => TemplatePreset::Rival5,
        _ => TemplatePreset::Rival6,
    }
}

pub fn rival_stage_template(stage: u32) -> PartyTemplate {
    rival_stage_preset(stage).template()
}
