//! Party generation from a trainer config.

use super::config::TrainerConfig;
use super::member::PartyMemberGenerator;
use super::modifiers::Modifier;
use crate::battle::{BattleContext, Combatant, CombatantFactory, CombatantRequest, TrainerSlot};
use crate::constants::BALANCED_REROLL_ATTEMPTS;
use crate::error::{ForgeError, ForgeResult};
use crate::species::{SpeciesCatalog, SpeciesId};
use crate::templates::{PartyMemberStrength, PartyTemplate};
use log::debug;
use rand::Rng;

/// A rolled party plus the modifiers bound to it.
#[derive(Debug, Clone)]
pub struct GeneratedParty {
    pub template: PartyTemplate,
    pub levels: Vec<u32>,
    pub members: Vec<Combatant>,
    pub modifiers: Vec<Modifier>,
}

impl GeneratedParty {
    pub fn boss_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_boss()).count()
    }

    pub fn species(&self) -> Vec<&SpeciesId> {
        self.members.iter().map(|m| &m.species).collect()
    }
}

/// Rolls the full party for `config` in slot order.
///
/// Each slot uses, in order of precedence: an explicit override, a copy of
/// the first species of its same-species sub-template, or a fresh species
/// from the tier pools or catalog filter.
pub fn generate_party(
    config: &TrainerConfig,
    battle: &BattleContext,
    catalog: &impl SpeciesCatalog,
    factory: &impl CombatantFactory,
    rng: &mut impl Rng,
) -> ForgeResult<GeneratedParty> {
    let template = config.party_template(battle, rng);
    let levels = battle.party_levels(&template, rng);
    let size = template.size();
    let mut members: Vec<Combatant> = Vec::with_capacity(size);

    for index in 0..size {
        let strength = template.strength(index);
        let member = if let Some(generator) = config.party_member(index, size) {
            generator.generate(index, &levels, strength, catalog, factory, rng)?
        } else {
            let level = PartyMemberGenerator::level_for(index, &levels);
            let offset = template.sub_template_offset(index);
            let species = match members.get(offset) {
                Some(first) if template.is_same_species(index) && index > offset => {
                    first.species.clone()
                }
                _ => new_member_species(config, &template, &members, index, level, catalog, rng)?,
            };
            factory.create(
                CombatantRequest {
                    species,
                    level,
                    trainer_slot: TrainerSlot::Trainer,
                    strength,
                    ignore_evolution: false,
                },
                rng,
            )
        };
        debug!("{} slot {}: {} Lv.{}", config.name, index, member.species, member.level);
        members.push(member);
    }

    let modifiers = config
        .modifier_plan
        .as_ref()
        .map(|plan| plan.generate(&members, battle, rng))
        .unwrap_or_default();

    Ok(GeneratedParty {
        template,
        levels,
        members,
        modifiers,
    })
}

fn draw_species(
    config: &TrainerConfig,
    catalog: &impl SpeciesCatalog,
    rng: &mut impl Rng,
) -> Option<SpeciesId> {
    match &config.species_pools {
        Some(pools) if !pools.is_empty() => pools.draw(rng),
        _ => catalog.random_species(&config.species_filter, rng),
    }
}

/// Draws a species for `index`, rerolling members that break a balanced
/// slot's type spread or miss the trainer's specialty types.
fn new_member_species(
    config: &TrainerConfig,
    template: &PartyTemplate,
    members: &[Combatant],
    index: usize,
    level: u32,
    catalog: &impl SpeciesCatalog,
    rng: &mut impl Rng,
) -> ForgeResult<SpeciesId> {
    let taken: Vec<_> = members.iter().flat_map(Combatant::types).collect();
    let mut attempt = 0;
    loop {
        let base = draw_species(config, catalog, rng)
            .ok_or(ForgeError::NoSpeciesAvailable { slot: index })?;
        let evolved = catalog.species_for_level(&base, level);
        let types = catalog.types(&evolved);

        let clashes = template.is_balanced(index) && types.iter().any(|t| taken.contains(t));
        let off_specialty = !config.specialty_types.is_empty()
            && !types.iter().any(|t| config.specialty_types.contains(t));

        if !(clashes || off_specialty) || attempt >= BALANCED_REROLL_ATTEMPTS {
            return Ok(base);
        }
        attempt += 1;
        debug!("Rerolling {} slot {} ({} rejected)", config.name, index, evolved);
    }
}

/// Strength of every slot, for reports.
pub fn slot_strengths(template: &PartyTemplate) -> Vec<PartyMemberStrength> {
    (0..template.size()).map(|i| template.strength(i)).collect()
}
