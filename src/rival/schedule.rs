//! Placement of rival encounters on the waves of a run.

use super::selection::{get_dynamic_rival_type, RivalSave};
use super::types::RivalTrainerType;
use crate::constants::{
    RIVAL_FINAL_STAGE, RIVAL_FINAL_WAVE, SCHEDULE_MAX_ATTEMPTS, SECONDARY_FINAL_WAVE_END,
    SECONDARY_RIVAL_COUNT,
};
use crate::error::{ForgeError, ForgeResult};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One planned rival battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RivalEncounter {
    pub stage: u32,
    pub wave: u32,
    pub rival: RivalTrainerType,
    /// Secondary encounters with personas the void still holds.
    pub corrupted: bool,
}

/// Inclusive wave range for `stage`. The primary persona's final stage is
/// pinned to wave 90; secondary personas end one wave earlier.
pub fn stage_wave_range(stage: u32, primary: bool) -> (u32, u32) {
    match stage {
        0 | 1 => (1, 15),
        2 => (16, 30),
        3 => (31, 45),
        4 => (46, 60),
        5 => (61, 75),
        _ if primary => (RIVAL_FINAL_WAVE, RIVAL_FINAL_WAVE),
        _ => (76, SECONDARY_FINAL_WAVE_END),
    }
}

fn place_wave(
    stage: u32,
    primary: bool,
    taken: &mut HashSet<u32>,
    rng: &mut impl Rng,
) -> ForgeResult<u32> {
    let (start, end) = stage_wave_range(stage, primary);
    for _ in 0..SCHEDULE_MAX_ATTEMPTS {
        let wave = if start == end {
            start
        } else {
            rng.gen_range(start..=end)
        };
        if taken.insert(wave) {
            return Ok(wave);
        }
    }
    Err(ForgeError::ScheduleExhausted { stage })
}

/// Plans every rival battle of a run, sorted by wave.
///
/// The run's persona (chosen as for a stage 1 encounter) appears at stages
/// 1 to 6. With any defeated personas on record, five secondary encounters
/// cover stages 2 to 6 as well.
pub fn plan_rival_encounters(
    save: &mut RivalSave,
    rng: &mut impl Rng,
) -> ForgeResult<Vec<RivalEncounter>> {
    let primary = get_dynamic_rival_type(1, save, rng)?;
    let secondaries = save.secondary_rivals(SECONDARY_RIVAL_COUNT, rng);
    let mut taken = HashSet::new();
    let mut encounters = Vec::new();

    for stage in 1..=RIVAL_FINAL_STAGE {
        let wave = place_wave(stage, true, &mut taken, rng)?;
        encounters.push(RivalEncounter {
            stage,
            wave,
            rival: primary,
            corrupted: false,
        });
    }

    let corrupted = !save.unlocks.void_overtaken;
    for (stage, &rival) in (2..=RIVAL_FINAL_STAGE).zip(secondaries.iter()) {
        let wave = place_wave(stage, false, &mut taken, rng)?;
        encounters.push(RivalEncounter {
            stage,
            wave,
            rival,
            corrupted,
        });
    }

    encounters.sort_by_key(|e| e.wave);
    debug!(
        "Planned {} rival encounters: {:?}",
        encounters.len(),
        encounters.iter().map(|e| e.wave).collect::<Vec<_>>()
    );
    Ok(encounters)
}
