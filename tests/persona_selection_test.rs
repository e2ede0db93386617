//! Persona selection integration tests
//!
//! Covers the run lifecycle of a save: choosing a persona, keeping it for
//! later stages, recording defeats, exhausting the roster and reloading the
//! save from disk.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use trainer_forge::battle::{BattleContext, GameMode};
use trainer_forge::rival::{
    all_rival_types, get_dynamic_rival, get_dynamic_rival_type, load_rival_save_at,
    plan_rival_encounters, save_rival_save_at, RivalRoster, RivalSave, RivalTrainerType,
};
use trainer_forge::species::SpeciesRegistry;
use trainer_forge::ForgeError;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

#[test]
fn test_persona_persists_through_a_run() {
    let mut rng = create_test_rng();
    let roster = RivalRoster::standard();
    let catalog = SpeciesRegistry::default();
    let mut save = RivalSave::default();

    let mut names = HashSet::new();
    for stage in 1..=6 {
        let battle = BattleContext::new(stage * 15, GameMode::Classic);
        let config = get_dynamic_rival(stage, &mut save, &roster, &battle, &catalog, &mut rng).unwrap();
        names.insert(config.name);
    }
    assert_eq!(names.len(), 1);
    assert!(save.player_rival.is_some());
}

#[test]
fn test_defeating_every_persona_unlocks_nightmare() {
    let mut rng = create_test_rng();
    let mut save = RivalSave::default();
    let mut seen = HashSet::new();

    for _ in 0..all_rival_types().len() {
        save.reset_run();
        let rival = get_dynamic_rival_type(1, &mut save, &mut rng).unwrap();
        assert!(seen.insert(rival), "{:?} picked twice", rival);
        save.record_defeat(rival);
    }

    assert!(save.unlocks.nightmare_mode);
    save.reset_run();
    assert!(get_dynamic_rival_type(1, &mut save, &mut rng).is_ok());
}

#[test]
fn test_exhausted_roster_without_unlock() {
    let mut rng = create_test_rng();
    let mut save = RivalSave {
        player_rival: Some(RivalTrainerType::Steven),
        defeated_rivals: all_rival_types(),
        ..RivalSave::default()
    };
    assert_eq!(
        get_dynamic_rival_type(1, &mut save, &mut rng).unwrap(),
        RivalTrainerType::Steven
    );

    save.reset_run();
    let err = get_dynamic_rival_type(1, &mut save, &mut rng).unwrap_err();
    assert!(matches!(err, ForgeError::RivalNotInitialized));
    assert!(matches!(
        plan_rival_encounters(&mut save, &mut rng),
        Err(ForgeError::RivalNotInitialized)
    ));
}

#[test]
fn test_save_round_trip_keeps_progress() {
    let dir = std::env::temp_dir().join(format!("trainer_forge_persona_{}", std::process::id()));
    let path = dir.join("rival_save.json");
    let mut rng = create_test_rng();

    let mut save = RivalSave::default();
    let rival = get_dynamic_rival_type(1, &mut save, &mut rng).unwrap();
    save.record_defeat(RivalTrainerType::Maxie);
    save_rival_save_at(&path, &save).unwrap();

    let mut loaded = load_rival_save_at(&path);
    assert_eq!(loaded, save);
    assert_eq!(get_dynamic_rival_type(2, &mut loaded, &mut rng).unwrap(), rival);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_void_dialogue_on_scaled_config() {
    let mut rng = create_test_rng();
    let roster = RivalRoster::standard();
    let catalog = SpeciesRegistry::default();
    let mut save = RivalSave {
        player_rival: Some(RivalTrainerType::Hau),
        ..RivalSave::default()
    }
    .with_unlocks(false, true);

    let battle = BattleContext::new(20, GameMode::Classic);
    let config = get_dynamic_rival(2, &mut save, &roster, &battle, &catalog, &mut rng).unwrap();
    assert_eq!(config.encounter_messages, vec!["dialogue:rival_hau.encounter.8"]);
    assert_eq!(config.victory_messages, vec!["dialogue:rival_hau.victory.8"]);
    assert_eq!(config.defeat_messages, vec!["dialogue:rival_hau.defeat.8"]);

    let battle = BattleContext::new(20, GameMode::Nightmare);
    let config = get_dynamic_rival(2, &mut save, &roster, &battle, &catalog, &mut rng).unwrap();
    assert_eq!(config.encounter_messages, vec!["dialogue:rival_hau.encounter.2"]);
}
