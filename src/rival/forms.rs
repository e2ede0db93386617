//! Late-game alternate forms for Nightmare rival parties.

use crate::battle::BattleContext;
use crate::constants::{LATE_FORM_MIN_WAVE, LATE_FORM_SECOND_WAVE};
use crate::species::SpeciesCatalog;
use crate::trainer::{FormOverride, PartyMemberGenerator};
use crate::utils::{pick, rand_index};
use log::{debug, warn};
use rand::Rng;

/// How many members get an alternate form at this wave.
pub fn late_forms_needed(battle: &BattleContext) -> usize {
    if !battle.game_mode.is_nightmare() || battle.wave_index < LATE_FORM_MIN_WAVE {
        0
    } else if battle.wave_index > LATE_FORM_SECOND_WAVE {
        2
    } else {
        1
    }
}

/// Assigns late-game forms to up to `late_forms_needed` distinct slots.
///
/// Slots whose species has its own late-game form are preferred. Any
/// shortfall is filled from the catalog's universal forms on random slots
/// not already chosen. Returns the slots that received a form.
pub fn apply_late_forms(
    generators: &mut [PartyMemberGenerator],
    battle: &BattleContext,
    catalog: &impl SpeciesCatalog,
    rng: &mut impl Rng,
) -> Vec<usize> {
    let needed = late_forms_needed(battle);
    if needed == 0 {
        return Vec::new();
    }

    let mut qualifying: Vec<(usize, Vec<u8>)> = generators
        .iter()
        .enumerate()
        .filter_map(|(slot, generator)| {
            let species = generator.fixed_species()?;
            let species = if generator.ignore_evolution {
                species.clone()
            } else {
                catalog.species_for_level(species, battle.highest_player_level)
            };
            let forms = catalog.late_game_forms(&species);
            (!forms.is_empty()).then(|| (slot, forms.to_vec()))
        })
        .collect();

    let mut open: Vec<usize> = (0..generators.len()).collect();
    let mut chosen = Vec::with_capacity(needed);

    while chosen.len() < needed && !qualifying.is_empty() {
        let (slot, forms) = qualifying.remove(rand_index(qualifying.len(), rng));
        let form = forms[rand_index(forms.len(), rng)];
        generators[slot].form = Some(FormOverride::Index(form));
        open.retain(|&s| s != slot);
        debug!("Late form {} on slot {}", form, slot);
        chosen.push(slot);
    }

    let universal = catalog.universal_forms();
    if chosen.len() < needed && universal.is_empty() {
        warn!(
            "No universal forms in catalog; {} late form(s) skipped",
            needed - chosen.len()
        );
        return chosen;
    }

    while chosen.len() < needed && !open.is_empty() {
        let slot = open.remove(rand_index(open.len(), rng));
        if let Some(form) = pick(universal, rng) {
            generators[slot].form = Some(FormOverride::Universal(form.clone()));
            debug!("Universal form {} on slot {}", form.name, slot);
            chosen.push(slot);
        }
    }

    chosen
}
