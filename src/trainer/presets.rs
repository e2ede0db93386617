//! Static configs for ordinary trainer classes.

use super::config::{PartySlot, TrainerConfig};
use super::member::PartyMemberGenerator;
use super::modifiers::ModifierPlan;
use crate::battle::BattleContext;
use crate::rival::{rival_base_config, RivalTrainerType};
use crate::species::{ElementType, PoolTier, SpeciesFilter, SpeciesPools};
use crate::templates::{
    evil_grunt_party_template, gym_leader_party_template, wave_preset, PartyTemplate,
    TemplatePreset,
};
use serde::{Deserialize, Serialize};

const GYM_LEADER_TERA_WAVE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainerType {
    AceTrainer,
    Artist,
    Backpacker,
    RocketGrunt,
    Veteran,
    GymLeaderBrock,
    Rival(RivalTrainerType),
}

impl TrainerType {
    pub const ORDINARY: [TrainerType; 6] = [
        TrainerType::AceTrainer,
        TrainerType::Artist,
        TrainerType::Backpacker,
        TrainerType::RocketGrunt,
        TrainerType::Veteran,
        TrainerType::GymLeaderBrock,
    ];

    pub fn display_name(self) -> String {
        match self {
            TrainerType::AceTrainer => "Ace Trainer".to_string(),
            TrainerType::Artist => "Artist".to_string(),
            TrainerType::Backpacker => "Backpacker".to_string(),
            TrainerType::RocketGrunt => "Rocket Grunt".to_string(),
            TrainerType::Veteran => "Veteran".to_string(),
            TrainerType::GymLeaderBrock => "Brock".to_string(),
            TrainerType::Rival(rival) => rival.display_name().to_string(),
        }
    }
}

fn ace_trainer_template(battle: &BattleContext) -> PartyTemplate {
    wave_preset(
        battle,
        &[
            TemplatePreset::ThreeWeakBalanced,
            TemplatePreset::FourWeakBalanced,
            TemplatePreset::FiveWeakBalanced,
            TemplatePreset::SixWeakBalanced,
        ],
    )
}

/// Builds the static config for `kind`.
pub fn trainer_config(kind: TrainerType) -> TrainerConfig {
    let base = TrainerConfig::new(kind);
    match kind {
        TrainerType::AceTrainer => base
            .with_money_multiplier(2.25)
            .with_party_template_func(ace_trainer_template),
        TrainerType::Artist => base
            .with_party_presets(&[
                TemplatePreset::OneStrong,
                TemplatePreset::TwoAvg,
                TemplatePreset::ThreeAvg,
            ])
            .with_species_pools(SpeciesPools::new().with_tier(PoolTier::Common, &["smeargle"])),
        TrainerType::Backpacker => base
            .with_party_presets(&[
                TemplatePreset::OneStrong,
                TemplatePreset::OneWeakOneStrong,
                TemplatePreset::OneAvgOneStrong,
            ])
            .with_species_filter(SpeciesFilter::of_types(&[ElementType::Flying, ElementType::Rock]))
            .with_species_pools(
                SpeciesPools::new()
                    .with_tier(
                        PoolTier::Common,
                        &["rhyhorn", "aipom", "makuhita", "mawile", "numel", "lillipup", "sandile", "wooloo"],
                    )
                    .with_tier(
                        PoolTier::Uncommon,
                        &["girafarig", "zangoose", "seviper", "cubchoo", "pancham", "skiddo", "mudbray"],
                    )
                    .with_tier(
                        PoolTier::Rare,
                        &["tauros", "stantler", "darumaka", "bouffalant", "deerling", "impidimp"],
                    )
                    .with_tier(PoolTier::SuperRare, &["galar_darumaka", "teddiursa"]),
            ),
        TrainerType::RocketGrunt => base
            .with_battle_bgm("battle_plasma_grunt")
            .with_mixed_battle_bgm("battle_rocket_grunt")
            .with_victory_bgm("victory_team_plasma")
            .with_party_template_func(evil_grunt_party_template)
            .with_species_pools(
                SpeciesPools::new()
                    .with_tier(
                        PoolTier::Common,
                        &["weedle", "ekans", "sandshrew", "zubat", "geodude", "koffing", "grimer", "oddish"],
                    )
                    .with_tier(
                        PoolTier::Uncommon,
                        &[
                            "gyarados", "tauros", "scyther", "cubone", "growlithe", "murkrow", "gastly",
                            "exeggcute", "voltorb",
                        ],
                    )
                    .with_tier(
                        PoolTier::Rare,
                        &["porygon", "alola_sandshrew", "alola_meowth", "alola_grimer", "alola_geodude"],
                    )
                    .with_tier(PoolTier::SuperRare, &["dratini", "larvitar"]),
            ),
        TrainerType::Veteran => base
            .with_money_multiplier(2.5)
            .with_species_filter(SpeciesFilter::of_types(&[ElementType::Dragon])),
        TrainerType::GymLeaderBrock => base
            .with_title("gym_leader")
            .with_char_sprite()
            .with_party_template_func(gym_leader_party_template)
            .with_party_member(PartySlot::FromEnd(1), PartyMemberGenerator::single("geodude"))
            .with_party_member(PartySlot::FromEnd(2), PartyMemberGenerator::single("onix"))
            .with_species_filter(SpeciesFilter::of_types(&[ElementType::Rock]))
            .with_specialty_types(&[ElementType::Rock])
            .with_money_multiplier(2.5)
            .with_boss()
            .with_static_party()
            .with_battle_bgm("battle_kanto_gym")
            .with_mixed_battle_bgm("battle_kanto_gym")
            .with_victory_bgm("victory_gym")
            .with_modifier_plan(ModifierPlan::RandomTera {
                count: 1,
                types: vec![ElementType::Rock],
                min_wave: GYM_LEADER_TERA_WAVE,
            }),
        TrainerType::Rival(rival) => rival_base_config(rival),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{CatalogCombatantFactory, GameMode};
    use crate::species::{SpeciesInfo, SpeciesRegistry};
    use crate::trainer::generate_party;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_ace_trainer_grows_with_wave() {
        let config = trainer_config(TrainerType::AceTrainer);
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let early = config.party_template(&BattleContext::new(10, GameMode::Classic), &mut rng);
        let late = config.party_template(&BattleContext::new(150, GameMode::Classic), &mut rng);
        assert_eq!(early.size(), 3);
        assert_eq!(late.size(), 6);
        assert!(late.is_balanced(5));
    }

    #[test]
    fn test_brock_signature_slots_fill_from_end() {
        let catalog = SpeciesRegistry::default()
            .with_species("sudowoodo", SpeciesInfo::new(ElementType::Rock))
            .with_species("rhyhorn", SpeciesInfo::new(ElementType::Rock));
        let factory = CatalogCombatantFactory::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let config = trainer_config(TrainerType::GymLeaderBrock);

        let battle = BattleContext::new(120, GameMode::Classic);
        let party = generate_party(&config, &battle, &catalog, &factory, &mut rng).unwrap();
        let names: Vec<&str> = party.members.iter().map(|m| m.species.as_str()).collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names[5], "geodude");
        assert_eq!(names[4], "onix");
        assert_eq!(party.modifiers.len(), 1);
    }

    #[test]
    fn test_grunt_pools_are_tiered() {
        let config = trainer_config(TrainerType::RocketGrunt);
        let pools = config.species_pools.expect("grunts use pools");
        assert!(pools.tier(PoolTier::UltraRare).is_none());
        assert_eq!(pools.resolve_tier(PoolTier::UltraRare), Some(PoolTier::SuperRare));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(TrainerType::AceTrainer.display_name(), "Ace Trainer");
        assert_eq!(
            TrainerType::Rival(RivalTrainerType::LtSurge).display_name(),
            "Lt. Surge"
        );
    }
}
