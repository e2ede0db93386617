//! Persona selection, save state and dialogue for recurring rivals.

use super::roster::RivalRoster;
use super::scaling::{rival_encounter_stage, scale_trainer_party};
use super::types::{all_rival_types, RivalTrainerType};
use crate::battle::{BattleContext, GameMode};
use crate::constants::{
    RIVAL_DIALOGUE_ENTRIES, VOID_DIALOGUE_MAX, VOID_DIALOGUE_MIN, VOID_DIALOGUE_OFFSET,
};
use crate::error::{ForgeError, ForgeResult};
use crate::species::SpeciesCatalog;
use crate::templates::rival_stage_template;
use crate::trainer::TrainerConfig;
use crate::utils::pick;
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unlocks {
    /// Every persona has been defeated at least once.
    #[serde(default)]
    pub nightmare_mode: bool,
    #[serde(default)]
    pub void_overtaken: bool,
}

/// Rival state that outlives a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RivalSave {
    /// Persona for the current run.
    #[serde(default)]
    pub player_rival: Option<RivalTrainerType>,
    /// Personas beaten at their final stage, in defeat order, without repeats.
    #[serde(default)]
    pub defeated_rivals: Vec<RivalTrainerType>,
    #[serde(default)]
    pub unlocks: Unlocks,
}

impl RivalSave {
    pub fn with_unlocks(mut self, nightmare_mode: bool, void_overtaken: bool) -> Self {
        self.unlocks = Unlocks {
            nightmare_mode,
            void_overtaken,
        };
        self
    }

    pub fn is_defeated(&self, rival: RivalTrainerType) -> bool {
        self.defeated_rivals.contains(&rival)
    }

    /// Marks `rival` defeated. Returns false if it already was.
    ///
    /// Defeating the last remaining persona unlocks Nightmare mode.
    pub fn record_defeat(&mut self, rival: RivalTrainerType) -> bool {
        if self.is_defeated(rival) {
            return false;
        }
        self.defeated_rivals.push(rival);
        info!(
            "Rival {} defeated ({}/{})",
            rival.display_name(),
            self.defeated_rivals.len(),
            all_rival_types().len()
        );
        if !self.unlocks.nightmare_mode && self.available_rivals().is_empty() {
            self.unlocks.nightmare_mode = true;
            info!("Every rival defeated; Nightmare mode unlocked");
        }
        true
    }

    /// Clears the run's persona so the next run picks a new one.
    pub fn reset_run(&mut self) {
        self.player_rival = None;
    }

    /// Personas not yet defeated, in roster order.
    pub fn available_rivals(&self) -> Vec<RivalTrainerType> {
        all_rival_types()
            .into_iter()
            .filter(|r| !self.is_defeated(*r))
            .collect()
    }

    pub fn random_defeated_rival(&self, rng: &mut impl Rng) -> Option<RivalTrainerType> {
        pick(&self.defeated_rivals, rng).copied()
    }

    /// `count` defeated personas, repeats allowed. Empty when none are defeated.
    pub fn secondary_rivals(&self, count: usize, rng: &mut impl Rng) -> Vec<RivalTrainerType> {
        if self.defeated_rivals.is_empty() {
            return Vec::new();
        }
        (0..count)
            .filter_map(|_| self.random_defeated_rival(rng))
            .collect()
    }
}

/// Persona for this run, choosing a new one on stage 1 or when none is set.
///
/// Undefeated personas are preferred; once all are beaten the whole roster
/// is open again only with Nightmare mode unlocked. Otherwise the persisted
/// persona is kept as is.
pub fn get_dynamic_rival_type(
    stage: u32,
    save: &mut RivalSave,
    rng: &mut impl Rng,
) -> ForgeResult<RivalTrainerType> {
    if stage == 1 || save.player_rival.is_none() {
        let available = save.available_rivals();
        let chosen = if !available.is_empty() {
            pick(&available, rng).copied()
        } else if save.unlocks.nightmare_mode {
            pick(&all_rival_types(), rng).copied()
        } else {
            None
        };
        if let Some(rival) = chosen {
            info!("Selected rival {} for stage {}", rival.display_name(), stage);
            save.player_rival = Some(rival);
        }
    }
    save.player_rival.ok_or(ForgeError::RivalNotInitialized)
}

/// Dialogue entry for `stage`, 1-based.
///
/// Once the void has been overtaken, non-Nightmare runs use the late
/// entries 7 to 12.
pub fn dialogue_stage_index(stage: u32, save: &RivalSave, mode: GameMode) -> u32 {
    if save.unlocks.void_overtaken && !mode.is_nightmare() {
        (VOID_DIALOGUE_OFFSET + stage).clamp(VOID_DIALOGUE_MIN, VOID_DIALOGUE_MAX)
    } else {
        stage
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueKind {
    Encounter,
    Victory,
    Defeat,
}

impl DialogueKind {
    fn key(self) -> &'static str {
        match self {
            DialogueKind::Encounter => "encounter",
            DialogueKind::Victory => "victory",
            DialogueKind::Defeat => "defeat",
        }
    }
}

/// Localisation key for a dialogue line, or an empty string when `index`
/// is outside `1..=12`.
pub fn rival_dialogue_key(rival: RivalTrainerType, kind: DialogueKind, index: u32) -> String {
    if !(1..=RIVAL_DIALOGUE_ENTRIES).contains(&index) {
        return String::new();
    }
    format!("dialogue:rival_{}.{}.{}", rival.key(), kind.key(), index)
}

/// Scaled config for `rival` at `stage`, with dialogue and stage template.
pub fn get_dynamic_rival_config(
    stage: u32,
    rival: RivalTrainerType,
    save: &RivalSave,
    roster: &RivalRoster,
    battle: &BattleContext,
    catalog: &impl SpeciesCatalog,
    rng: &mut impl Rng,
) -> ForgeResult<TrainerConfig> {
    let stage = rival_encounter_stage(stage);
    let base = roster.config(rival)?;
    let pools = roster.pools(rival)?;
    let index = dialogue_stage_index(stage, save, battle.game_mode);
    debug!("Rival {} stage {} uses dialogue {}", rival.display_name(), stage, index);

    let mut config = scale_trainer_party(base, stage, rival, pools, battle, catalog, rng)?;
    config.encounter_messages = vec![rival_dialogue_key(rival, DialogueKind::Encounter, index)];
    config.victory_messages = vec![rival_dialogue_key(rival, DialogueKind::Victory, index)];
    config.defeat_messages = vec![rival_dialogue_key(rival, DialogueKind::Defeat, index)];
    Ok(config.with_party_templates(vec![rival_stage_template(stage)]))
}

/// Selects the run's persona, then builds its config for `stage`.
pub fn get_dynamic_rival(
    stage: u32,
    save: &mut RivalSave,
    roster: &RivalRoster,
    battle: &BattleContext,
    catalog: &impl SpeciesCatalog,
    rng: &mut impl Rng,
) -> ForgeResult<TrainerConfig> {
    let rival = get_dynamic_rival_type(stage, save, rng)?;
    get_dynamic_rival_config(stage, rival, save, roster, battle, catalog, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::SpeciesRegistry;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn all_defeated() -> RivalSave {
        RivalSave {
            defeated_rivals: all_rival_types(),
            ..RivalSave::default()
        }
    }

    #[test]
    fn test_stage_one_picks_undefeated_persona() {
        let mut rng = create_test_rng();
        let mut save = RivalSave::default();
        for rival in all_rival_types().into_iter().skip(1) {
            save.defeated_rivals.push(rival);
        }
        let rival = get_dynamic_rival_type(1, &mut save, &mut rng).unwrap();
        assert_eq!(rival, RivalTrainerType::Blue);
        assert_eq!(save.player_rival, Some(RivalTrainerType::Blue));
    }

    #[test]
    fn test_later_stages_keep_persona() {
        let mut rng = create_test_rng();
        let mut save = RivalSave {
            player_rival: Some(RivalTrainerType::Iris),
            ..RivalSave::default()
        };
        for stage in 2..=6 {
            assert_eq!(
                get_dynamic_rival_type(stage, &mut save, &mut rng).unwrap(),
                RivalTrainerType::Iris
            );
        }
    }

    #[test]
    fn test_exhausted_roster_keeps_existing_persona() {
        let mut rng = create_test_rng();
        let mut save = RivalSave {
            player_rival: Some(RivalTrainerType::Rose),
            ..all_defeated()
        };
        let rival = get_dynamic_rival_type(1, &mut save, &mut rng).unwrap();
        assert_eq!(rival, RivalTrainerType::Rose);
    }

    #[test]
    fn test_exhausted_roster_without_persona_fails() {
        let mut rng = create_test_rng();
        let mut save = all_defeated();
        let err = get_dynamic_rival_type(1, &mut save, &mut rng).unwrap_err();
        assert!(matches!(err, ForgeError::RivalNotInitialized));
    }

    #[test]
    fn test_nightmare_unlock_reopens_roster() {
        let mut rng = create_test_rng();
        let mut save = all_defeated().with_unlocks(true, false);
        assert!(get_dynamic_rival_type(1, &mut save, &mut rng).is_ok());
        assert!(save.player_rival.is_some());
    }

    #[test]
    fn test_record_defeat_dedupes_and_unlocks() {
        let mut save = RivalSave::default();
        assert!(save.record_defeat(RivalTrainerType::Blue));
        assert!(!save.record_defeat(RivalTrainerType::Blue));
        assert_eq!(save.defeated_rivals, vec![RivalTrainerType::Blue]);
        assert!(!save.unlocks.nightmare_mode);

        for rival in all_rival_types() {
            save.record_defeat(rival);
        }
        assert_eq!(save.defeated_rivals.len(), 28);
        assert!(save.unlocks.nightmare_mode);
    }

    #[test]
    fn test_reset_run_clears_persona() {
        let mut save = RivalSave {
            player_rival: Some(RivalTrainerType::Hau),
            ..RivalSave::default()
        };
        save.reset_run();
        assert_eq!(save.player_rival, None);
    }

    #[test]
    fn test_secondary_rivals_come_from_defeated() {
        let mut rng = create_test_rng();
        let empty = RivalSave::default();
        assert!(empty.secondary_rivals(5, &mut rng).is_empty());
        assert_eq!(empty.random_defeated_rival(&mut rng), None);

        let save = RivalSave {
            defeated_rivals: vec![RivalTrainerType::Misty, RivalTrainerType::Norman],
            ..RivalSave::default()
        };
        let picks = save.secondary_rivals(5, &mut rng);
        assert_eq!(picks.len(), 5);
        assert!(picks.iter().all(|r| save.is_defeated(*r)));
    }

    #[test]
    fn test_dialogue_index_remap() {
        let plain = RivalSave::default();
        assert_eq!(dialogue_stage_index(3, &plain, GameMode::Classic), 3);

        let void = RivalSave::default().with_unlocks(false, true);
        assert_eq!(dialogue_stage_index(1, &void, GameMode::Classic), 7);
        assert_eq!(dialogue_stage_index(4, &void, GameMode::Classic), 10);
        assert_eq!(dialogue_stage_index(9, &void, GameMode::Classic), 12);
        assert_eq!(dialogue_stage_index(2, &void, GameMode::Nightmare), 2);
    }

    #[test]
    fn test_dialogue_keys() {
        assert_eq!(
            rival_dialogue_key(RivalTrainerType::LtSurge, DialogueKind::Victory, 4),
            "dialogue:rival_lt_surge.victory.4"
        );
        assert_eq!(rival_dialogue_key(RivalTrainerType::Blue, DialogueKind::Encounter, 0), "");
        assert_eq!(rival_dialogue_key(RivalTrainerType::Blue, DialogueKind::Defeat, 13), "");
    }

    #[test]
    fn test_dynamic_rival_config() {
        let mut rng = create_test_rng();
        let catalog = SpeciesRegistry::default();
        let roster = RivalRoster::standard();
        let mut save = RivalSave::default();
        let config = get_dynamic_rival(
            3,
            &mut save,
            &roster,
            &BattleContext::new(40, GameMode::Classic),
            &catalog,
            &mut rng,
        )
        .unwrap();
        let rival = save.player_rival.unwrap();
        assert_eq!(config.name, rival.display_name());
        assert_eq!(config.party_members.len(), 4);
        assert_eq!(config.party_size(), Some(4));
        assert_eq!(
            config.encounter_messages,
            vec![rival_dialogue_key(rival, DialogueKind::Encounter, 3)]
        );
    }

    #[test]
    fn test_missing_config_is_fatal() {
        let mut rng = create_test_rng();
        let catalog = SpeciesRegistry::default();
        let err = get_dynamic_rival_config(
            1,
            RivalTrainerType::Blue,
            &RivalSave::default(),
            &RivalRoster::default(),
            &BattleContext::default(),
            &catalog,
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, ForgeError::MissingConfig(RivalTrainerType::Blue)));
    }

    #[test]
    fn test_save_serializes_persona_names() {
        let save = RivalSave {
            player_rival: Some(RivalTrainerType::LtSurge),
            defeated_rivals: vec![RivalTrainerType::Blue],
            unlocks: Unlocks::default(),
        };
        let json = serde_json::to_string(&save).unwrap();
        assert!(json.contains("\"LT_SURGE\""));
        let back: RivalSave = serde_json::from_str(&json).unwrap();
        assert_eq!(back, save);
        let empty: RivalSave = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RivalSave::default());
    }
}
