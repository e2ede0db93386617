//! Stage scaling of a persona's base config into an encounter party.

use super::forms::apply_late_forms;
use super::types::RivalTrainerType;
use crate::battle::BattleContext;
use crate::constants::{
    FINAL_STAGE_SEGMENTS, MAX_PARTY_SIZE, RIVAL_BGM, RIVAL_BOSS_STAGE, RIVAL_CLIMACTIC_BGM_OPTIONS,
    RIVAL_CLIMACTIC_MUSIC_STAGE, RIVAL_DOUBLE_TERA_STAGE, RIVAL_EVOLVED_SIGNATURE_STAGE,
    RIVAL_FILLER_END, RIVAL_FINAL_STAGE, RIVAL_MONEY_PER_STAGE, RIVAL_RESERVED_SLOT,
    RIVAL_STAGE_TWO_BGM, RIVAL_STAGE_TWO_MUSIC_STAGE, STAGE_FIVE_SEGMENTS, STAGE_FOUR_LEAD_SEGMENTS,
};
use crate::error::{ForgeError, ForgeResult};
use crate::species::{SpeciesCatalog, SpeciesId};
use crate::templates::rival_stage_template;
use crate::trainer::{ModifierPlan, PartyMemberGenerator, PartySlot, TrainerConfig};
use crate::utils::{pick, random_unique_indices};
use log::{debug, warn};
use rand::Rng;
use std::collections::HashSet;

/// Stage numbers start at 1; stage 0 plays as the first encounter.
pub fn rival_encounter_stage(stage: u32) -> u32 {
    stage.max(1)
}

/// Party size for an encounter at `stage`.
pub fn rival_party_size(stage: u32) -> usize {
    (1 + rival_encounter_stage(stage) as usize).min(MAX_PARTY_SIZE)
}

/// Music key for `stage`. Only climactic stages draw.
pub fn rival_stage_music(stage: u32, rng: &mut impl Rng) -> &'static str {
    if stage >= RIVAL_CLIMACTIC_MUSIC_STAGE {
        pick(&RIVAL_CLIMACTIC_BGM_OPTIONS, rng)
            .copied()
            .unwrap_or(RIVAL_STAGE_TWO_BGM)
    } else if stage >= RIVAL_STAGE_TWO_MUSIC_STAGE {
        RIVAL_STAGE_TWO_BGM
    } else {
        RIVAL_BGM
    }
}

/// Fixed boss slots and segment counts for `stage`, excluding the random
/// extra slot of the final stage.
pub fn fixed_boss_segments(stage: u32) -> Vec<(usize, u8)> {
    match stage {
        s if s < RIVAL_BOSS_STAGE => Vec::new(),
        s if s == RIVAL_BOSS_STAGE => vec![(0, STAGE_FOUR_LEAD_SEGMENTS)],
        s if s < RIVAL_FINAL_STAGE => vec![
            (0, STAGE_FIVE_SEGMENTS.0),
            (RIVAL_RESERVED_SLOT, STAGE_FIVE_SEGMENTS.1),
        ],
        _ => vec![
            (0, FINAL_STAGE_SEGMENTS.0),
            (RIVAL_RESERVED_SLOT, FINAL_STAGE_SEGMENTS.1),
        ],
    }
}

/// Signature species for `stage`: the evolved entry once it exists.
fn signature_species(signature_pool: &[SpeciesId], stage: u32) -> Option<&SpeciesId> {
    match signature_pool {
        [_, evolved, ..] if stage >= RIVAL_EVOLVED_SIGNATURE_STAGE => Some(evolved),
        _ => signature_pool.first(),
    }
}

/// Draws a species from the middle pools, avoiding `used` while any unused
/// candidate remains. Flattened duplicates weight the draw.
fn unique_middle_species(
    pools: &[Vec<SpeciesId>],
    used: &mut HashSet<SpeciesId>,
    slot: usize,
    rng: &mut impl Rng,
) -> ForgeResult<SpeciesId> {
    let middle = &pools[1..pools.len() - 1];
    let fresh: Vec<&SpeciesId> = middle.iter().flatten().filter(|s| !used.contains(*s)).collect();
    let candidates = if fresh.is_empty() {
        warn!("Middle pools exhausted at slot {}; allowing repeats", slot);
        middle.iter().flatten().collect()
    } else {
        fresh
    };
    let species = pick(&candidates, rng)
        .map(|s| (*s).clone())
        .ok_or(ForgeError::NoSpeciesAvailable { slot })?;
    used.insert(species.clone());
    Ok(species)
}

/// Draws the reserved-slot species, preferring ones not yet used.
/// The pick is not recorded, so the sixth slot may repeat it.
fn reserved_species(
    pools: &[Vec<SpeciesId>],
    used: &HashSet<SpeciesId>,
    rng: &mut impl Rng,
) -> ForgeResult<SpeciesId> {
    let reserved = pools.last().map(Vec::as_slice).unwrap_or_default();
    let fresh: Vec<&SpeciesId> = reserved.iter().filter(|s| !used.contains(*s)).collect();
    let candidates: Vec<&SpeciesId> = if fresh.is_empty() {
        reserved.iter().collect()
    } else {
        fresh
    };
    let species = pick(&candidates, rng)
        .map(|s| (*s).clone())
        .ok_or(ForgeError::NoSpeciesAvailable {
            slot: RIVAL_RESERVED_SLOT,
        })?;
    Ok(species)
}

/// Scales a persona's base config to `stage`.
///
/// Draws happen in a fixed order: music, filler slots, reserved slot,
/// sixth slot, late forms, extra boss slot, tera slots. The same generator
/// state and inputs always give the same config.
pub fn scale_trainer_party(
    config: &TrainerConfig,
    stage: u32,
    rival: RivalTrainerType,
    pools: &[Vec<SpeciesId>],
    battle: &BattleContext,
    catalog: &impl SpeciesCatalog,
    rng: &mut impl Rng,
) -> ForgeResult<TrainerConfig> {
    let stage = rival_encounter_stage(stage);
    let signature_pool = pools.first().ok_or(ForgeError::MissingPools(rival))?;
    if pools.len() < 3 {
        return Err(ForgeError::MissingPools(rival));
    }
    let signature = signature_species(signature_pool, stage)
        .cloned()
        .ok_or(ForgeError::MissingPools(rival))?;

    let party_size = rival_party_size(stage);
    let bgm = rival_stage_music(stage, rng);

    let mut used = HashSet::from([signature.clone()]);
    let mut generators = vec![PartyMemberGenerator::single(signature)
        .ignoring_evolution(rival == RivalTrainerType::Red)];

    for slot in 1..party_size.min(RIVAL_FILLER_END) {
        let species = unique_middle_species(pools, &mut used, slot, rng)?;
        generators.push(PartyMemberGenerator::single(species));
    }
    if party_size > RIVAL_RESERVED_SLOT {
        let species = reserved_species(pools, &used, rng)?;
        generators.push(PartyMemberGenerator::single(species));
    }
    if party_size == MAX_PARTY_SIZE {
        let species = unique_middle_species(pools, &mut used, MAX_PARTY_SIZE - 1, rng)?;
        generators.push(PartyMemberGenerator::single(species));
    }

    apply_late_forms(&mut generators, battle, catalog, rng);

    let mut bosses = fixed_boss_segments(stage);
    if stage >= RIVAL_FINAL_STAGE {
        let extra: Vec<usize> = (0..party_size)
            .filter(|&i| i != 0 && i != RIVAL_RESERVED_SLOT)
            .collect();
        if let Some(&slot) = pick(&extra, rng) {
            bosses.push((slot, FINAL_STAGE_SEGMENTS.2));
        }
    }
    for &(slot, segments) in &bosses {
        if let Some(generator) = generators.get_mut(slot) {
            generator.boss_segments = Some(segments);
        }
    }

    let tera_count = if stage >= RIVAL_DOUBLE_TERA_STAGE { 2 } else { 1 };
    let tera_slots = random_unique_indices(party_size, tera_count, rng);

    debug!(
        "Scaled {} to stage {}: size {}, bgm {}, bosses {:?}, tera {:?}",
        config.name, stage, party_size, bgm, bosses, tera_slots
    );

    let mut scaled = TrainerConfig::new(config.trainer_type)
        .with_name(&config.name)
        .with_party_templates(vec![rival_stage_template(stage)])
        .with_battle_bgm(bgm)
        .with_mixed_battle_bgm(bgm)
        .with_victory_bgm(&config.victory_bgm)
        .with_money_multiplier(1.0 + f64::from(stage) * RIVAL_MONEY_PER_STAGE)
        .with_static_party()
        .with_modifier_plan(ModifierPlan::TeraShards { slots: tera_slots });
    scaled.title = config.title.clone();
    scaled.has_char_sprite = config.has_char_sprite;
    for (slot, generator) in generators.into_iter().enumerate() {
        scaled.set_party_member(PartySlot::Index(slot), generator);
    }
    Ok(scaled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::GameMode;
    use crate::species::SpeciesRegistry;
    use crate::trainer::TrainerType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn pools(table: &[&[&str]]) -> Vec<Vec<SpeciesId>> {
        table
            .iter()
            .map(|p| p.iter().map(|&s| SpeciesId::from(s)).collect())
            .collect()
    }

    fn base() -> TrainerConfig {
        TrainerConfig::new(TrainerType::Rival(RivalTrainerType::Blue))
            .with_title("rival")
            .with_char_sprite()
    }

    fn species_at(config: &TrainerConfig, slot: usize) -> &str {
        config.party_members[&PartySlot::Index(slot)]
            .fixed_species()
            .map(SpeciesId::as_str)
            .unwrap_or_default()
    }

    #[test]
    fn test_party_size_law() {
        assert_eq!(rival_party_size(0), 2);
        assert_eq!(rival_party_size(1), 2);
        assert_eq!(rival_party_size(4), 5);
        assert_eq!(rival_party_size(5), 6);
        assert_eq!(rival_party_size(9), 6);
    }

    #[test]
    fn test_music_by_stage() {
        let mut rng = create_test_rng();
        assert_eq!(rival_stage_music(1, &mut rng), RIVAL_BGM);
        assert_eq!(rival_stage_music(2, &mut rng), RIVAL_BGM);
        assert_eq!(rival_stage_music(3, &mut rng), RIVAL_STAGE_TWO_BGM);
        assert_eq!(rival_stage_music(4, &mut rng), RIVAL_STAGE_TWO_BGM);
        let climactic = rival_stage_music(5, &mut rng);
        assert!(RIVAL_CLIMACTIC_BGM_OPTIONS.contains(&climactic));
    }

    #[test]
    fn test_boss_table() {
        assert!(fixed_boss_segments(3).is_empty());
        assert_eq!(fixed_boss_segments(4), vec![(0, 3)]);
        assert_eq!(fixed_boss_segments(5), vec![(0, 3), (4, 2)]);
        assert_eq!(fixed_boss_segments(7), vec![(0, 4), (4, 3)]);
    }

    #[test]
    fn test_signature_evolves_from_stage_three() {
        let pool = pools(&[&["squirtle", "wartortle"]]).remove(0);
        assert_eq!(signature_species(&pool, 2).unwrap().as_str(), "squirtle");
        assert_eq!(signature_species(&pool, 3).unwrap().as_str(), "wartortle");
        let single = pools(&[&["pikachu"]]).remove(0);
        assert_eq!(signature_species(&single, 6).unwrap().as_str(), "pikachu");
    }

    #[test]
    fn test_scaled_config_metadata() {
        let catalog = SpeciesRegistry::default();
        let table = pools(&[&["a"], &["b", "c"], &["d"], &["e", "f"], &["g"]]);
        let scaled = scale_trainer_party(
            &base(),
            2,
            RivalTrainerType::Blue,
            &table,
            &BattleContext::default(),
            &catalog,
            &mut create_test_rng(),
        )
        .unwrap();
        assert_eq!(scaled.party_size(), Some(3));
        assert_eq!(scaled.party_members.len(), 3);
        assert_eq!(scaled.money_multiplier, 1.5);
        assert!(scaled.has_static_party);
        assert!(scaled.has_char_sprite);
        assert_eq!(scaled.title.as_deref(), Some("rival"));
        assert_eq!(scaled.battle_bgm, RIVAL_BGM);
        assert_eq!(scaled.mixed_battle_bgm, RIVAL_BGM);
        assert_eq!(species_at(&scaled, 0), "a");
        assert!(matches!(
            scaled.modifier_plan,
            Some(ModifierPlan::TeraShards { ref slots }) if slots.len() == 1
        ));
    }

    #[test]
    fn test_exhausted_middle_pools_allow_repeats() {
        let catalog = SpeciesRegistry::default();
        let table = pools(&[&["a"], &["b"], &["z"]]);
        let scaled = scale_trainer_party(
            &base(),
            3,
            RivalTrainerType::Blue,
            &table,
            &BattleContext::default(),
            &catalog,
            &mut create_test_rng(),
        )
        .unwrap();
        for slot in 1..4 {
            assert_eq!(species_at(&scaled, slot), "b");
        }
    }

    #[test]
    fn test_reserved_slot_prefers_unused_species() {
        let catalog = SpeciesRegistry::default();
        let table = pools(&[&["a"], &["b", "c", "d"], &["b", "g"]]);
        let mut rng = create_test_rng();
        for _ in 0..20 {
            let scaled = scale_trainer_party(
                &base(),
                4,
                RivalTrainerType::Blue,
                &table,
                &BattleContext::default(),
                &catalog,
                &mut rng,
            )
            .unwrap();
            assert_eq!(species_at(&scaled, 4), "g");
        }
    }

    #[test]
    fn test_sixth_slot_may_repeat_reserved_species() {
        let catalog = SpeciesRegistry::default();
        let table = pools(&[&["a"], &["b", "c", "d", "g"], &["g"]]);
        let mut rng = create_test_rng();
        let mut checked = 0;
        for _ in 0..100 {
            let scaled = scale_trainer_party(
                &base(),
                5,
                RivalTrainerType::Blue,
                &table,
                &BattleContext::default(),
                &catalog,
                &mut rng,
            )
            .unwrap();
            assert_eq!(species_at(&scaled, 4), "g");
            let fillers: Vec<&str> = (1..4).map(|slot| species_at(&scaled, slot)).collect();
            if !fillers.contains(&"g") {
                assert_eq!(species_at(&scaled, 5), "g");
                checked += 1;
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn test_stage_zero_plays_as_stage_one() {
        let catalog = SpeciesRegistry::default();
        let table = pools(&[&["a"], &["b", "c"], &["g"]]);
        let scaled = scale_trainer_party(
            &base(),
            0,
            RivalTrainerType::Blue,
            &table,
            &BattleContext::default(),
            &catalog,
            &mut create_test_rng(),
        )
        .unwrap();
        assert_eq!(scaled.party_members.len(), 2);
        assert_eq!(scaled.party_size(), Some(2));
        assert_eq!(scaled.money_multiplier, 1.25);
    }

    #[test]
    fn test_boss_flag_not_carried_from_base() {
        let catalog = SpeciesRegistry::default();
        let table = pools(&[&["a"], &["b", "c"], &["g"]]);
        let scaled = scale_trainer_party(
            &base().with_boss(),
            2,
            RivalTrainerType::Blue,
            &table,
            &BattleContext::default(),
            &catalog,
            &mut create_test_rng(),
        )
        .unwrap();
        assert!(!scaled.is_boss);
    }

    #[test]
    fn test_short_tables_fail() {
        let catalog = SpeciesRegistry::default();
        let err = scale_trainer_party(
            &base(),
            1,
            RivalTrainerType::Blue,
            &pools(&[&["a"], &["b"]]),
            &BattleContext::new(10, GameMode::Classic),
            &catalog,
            &mut create_test_rng(),
        )
        .unwrap_err();
        assert!(matches!(err, ForgeError::MissingPools(RivalTrainerType::Blue)));
    }
}
