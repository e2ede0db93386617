//! Base configs and stage pools for every persona.

use super::pools::stage_pools;
use super::types::{all_rival_types, RivalCategory, RivalTrainerType};
use crate::error::{ForgeError, ForgeResult};
use crate::species::SpeciesId;
use crate::templates::{gym_leader_party_template, TemplatePreset};
use crate::trainer::{PartyMemberGenerator, PartySlot, TrainerConfig, TrainerType};
use std::collections::BTreeMap;

/// Minimum usable table: signature, one filler pool, reserved pool.
const MIN_STAGE_POOLS: usize = 3;

/// Unscaled config for `rival`, keyed by its category.
///
/// The signature species sits in the last slot so the config still yields a
/// sensible party when used without stage scaling.
pub fn rival_base_config(rival: RivalTrainerType) -> TrainerConfig {
    let category = rival.category();
    let base = TrainerConfig::new(TrainerType::Rival(rival))
        .with_name(rival.display_name())
        .with_title(category.title())
        .with_char_sprite()
        .with_boss()
        .with_static_party();

    let base = match category {
        RivalCategory::Rival => base
            .with_party_presets(&[TemplatePreset::Rival])
            .with_battle_bgm("battle_rival")
            .with_mixed_battle_bgm("battle_rival")
            .with_victory_bgm("victory_rival"),
        RivalCategory::Champion => base
            .with_party_presets(&[TemplatePreset::Champion])
            .with_money_multiplier(10.0)
            .with_battle_bgm("battle_champion")
            .with_mixed_battle_bgm("battle_champion")
            .with_victory_bgm("victory_champion"),
        RivalCategory::EvilTeam => base
            .with_party_presets(&[TemplatePreset::Rival5])
            .with_money_multiplier(1.5)
            .with_battle_bgm("battle_rocket_boss")
            .with_mixed_battle_bgm("battle_rocket_boss")
            .with_victory_bgm("victory_team_plasma"),
        RivalCategory::GymLeader => base
            .with_party_template_func(gym_leader_party_template)
            .with_money_multiplier(2.5)
            .with_battle_bgm("battle_kanto_gym")
            .with_mixed_battle_bgm("battle_kanto_gym")
            .with_victory_bgm("victory_gym"),
        RivalCategory::Other => base
            .with_party_presets(&[TemplatePreset::EliteFour])
            .with_money_multiplier(3.25)
            .with_battle_bgm("battle_elite")
            .with_mixed_battle_bgm("battle_elite")
            .with_victory_bgm("victory_champion"),
    };

    match stage_pools(rival).first() {
        Some(signature) if !signature.is_empty() => base.with_party_member(
            PartySlot::FromEnd(1),
            PartyMemberGenerator::from_names(signature)
                .ignoring_evolution(rival == RivalTrainerType::Red),
        ),
        _ => base,
    }
}

fn owned_pools(table: &[&[&str]]) -> Vec<Vec<SpeciesId>> {
    table
        .iter()
        .map(|pool| pool.iter().map(|&s| SpeciesId::from(s)).collect())
        .collect()
}

/// Lookup table of persona configs and pools.
#[derive(Debug, Clone, Default)]
pub struct RivalRoster {
    configs: BTreeMap<RivalTrainerType, TrainerConfig>,
    pools: BTreeMap<RivalTrainerType, Vec<Vec<SpeciesId>>>,
}

impl RivalRoster {
    /// Every persona with its built-in config and pool table.
    pub fn standard() -> Self {
        all_rival_types()
            .into_iter()
            .fold(Self::default(), |roster, rival| {
                roster.with_rival(rival, rival_base_config(rival), owned_pools(stage_pools(rival)))
            })
    }

    pub fn with_rival(
        mut self,
        rival: RivalTrainerType,
        config: TrainerConfig,
        pools: Vec<Vec<SpeciesId>>,
    ) -> Self {
        self.configs.insert(rival, config);
        self.pools.insert(rival, pools);
        self
    }

    /// Registers `rival` with its base config and the given pool table.
    pub fn with_pool_table(self, rival: RivalTrainerType, table: &[&[&str]]) -> Self {
        self.with_rival(rival, rival_base_config(rival), owned_pools(table))
    }

    pub fn without_pools(mut self, rival: RivalTrainerType) -> Self {
        self.pools.remove(&rival);
        self
    }

    pub fn config(&self, rival: RivalTrainerType) -> ForgeResult<&TrainerConfig> {
        self.configs
            .get(&rival)
            .ok_or(ForgeError::MissingConfig(rival))
    }

    /// Stage pools for `rival`. Tables too short to fill a party, or with an
    /// empty signature pool, count as missing.
    pub fn pools(&self, rival: RivalTrainerType) -> ForgeResult<&[Vec<SpeciesId>]> {
        match self.pools.get(&rival) {
            Some(pools)
                if pools.len() >= MIN_STAGE_POOLS && pools.first().is_some_and(|p| !p.is_empty()) =>
            {
                Ok(pools.as_slice())
            }
            _ => Err(ForgeError::MissingPools(rival)),
        }
    }

    pub fn rivals(&self) -> impl Iterator<Item = RivalTrainerType> + '_ {
        self.configs.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_roster_covers_every_persona() {
        let roster = RivalRoster::standard();
        assert_eq!(roster.len(), 28);
        for rival in all_rival_types() {
            assert!(roster.config(rival).is_ok());
            let pools = roster.pools(rival).unwrap();
            assert!(pools.len() >= 6);
        }
    }

    #[test]
    fn test_base_config_by_category() {
        let cynthia = rival_base_config(RivalTrainerType::Cynthia);
        assert_eq!(cynthia.name, "Cynthia");
        assert_eq!(cynthia.title.as_deref(), Some("champion"));
        assert!(cynthia.is_boss && cynthia.has_static_party && cynthia.has_char_sprite);
        assert_eq!(cynthia.party_size(), Some(TemplatePreset::Champion.template().size()));

        let brock = rival_base_config(RivalTrainerType::Brock);
        assert!(brock.party_template_func.is_some());
        assert_eq!(brock.title.as_deref(), Some("gym_leader"));
    }

    #[test]
    fn test_red_signature_ignores_evolution() {
        let red = rival_base_config(RivalTrainerType::Red);
        let signature = red.party_members.get(&PartySlot::FromEnd(1)).unwrap();
        assert!(signature.ignore_evolution);
        let blue = rival_base_config(RivalTrainerType::Blue);
        assert!(!blue.party_members[&PartySlot::FromEnd(1)].ignore_evolution);
    }

    #[test]
    fn test_missing_lookups() {
        let roster = RivalRoster::default();
        assert!(matches!(
            roster.config(RivalTrainerType::Hau),
            Err(ForgeError::MissingConfig(RivalTrainerType::Hau))
        ));
        let roster = RivalRoster::standard().without_pools(RivalTrainerType::Hau);
        assert!(roster.config(RivalTrainerType::Hau).is_ok());
        assert!(matches!(
            roster.pools(RivalTrainerType::Hau),
            Err(ForgeError::MissingPools(RivalTrainerType::Hau))
        ));
    }

    #[test]
    fn test_short_pool_tables_are_rejected() {
        let roster = RivalRoster::default()
            .with_pool_table(RivalTrainerType::Blue, &[&["squirtle"], &["pidgey"]]);
        assert!(matches!(
            roster.pools(RivalTrainerType::Blue),
            Err(ForgeError::MissingPools(_))
        ));
    }
}
