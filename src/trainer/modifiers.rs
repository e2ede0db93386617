//! Held-item modifiers attached to a generated party.

use crate::battle::{BattleContext, Combatant};
use crate::species::ElementType;
use crate::utils::{pick, rand_index};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    /// Grants the member at `slot` the `tera_type` affinity for the battle.
    TeraShard { slot: usize, tera_type: ElementType },
}

impl Modifier {
    pub fn slot(&self) -> usize {
        match self {
            Modifier::TeraShard { slot, .. } => *slot,
        }
    }
}

/// How a trainer's modifiers are produced once the party exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierPlan {
    /// Fixed slots, each typed to its member's primary type.
    TeraShards { slots: Vec<usize> },
    /// `count` distinct random members from `min_wave` on. The type comes
    /// from `types` when given, else from the member's own types.
    RandomTera {
        count: usize,
        types: Vec<ElementType>,
        min_wave: u32,
    },
}

impl ModifierPlan {
    pub fn generate(
        &self,
        party: &[Combatant],
        battle: &BattleContext,
        rng: &mut impl Rng,
    ) -> Vec<Modifier> {
        match self {
            ModifierPlan::TeraShards { slots } => slots
                .iter()
                .filter_map(|&slot| {
                    party.get(slot).map(|member| Modifier::TeraShard {
                        slot,
                        tera_type: member.primary_type,
                    })
                })
                .collect(),
            ModifierPlan::RandomTera {
                count,
                types,
                min_wave,
            } => {
                if battle.wave_index < *min_wave {
                    return Vec::new();
                }
                random_tera(party, *count, types, rng)
            }
        }
    }
}

fn random_tera(
    party: &[Combatant],
    count: usize,
    types: &[ElementType],
    rng: &mut impl Rng,
) -> Vec<Modifier> {
    let mut remaining: Vec<usize> = (0..party.len()).collect();
    let mut modifiers = Vec::new();
    for _ in 0..count.min(party.len()) {
        let slot = remaining.remove(rand_index(remaining.len(), rng));
        let own_types = party[slot].types();
        let choices = if types.is_empty() { &own_types[..] } else { types };
        if let Some(&tera_type) = pick(choices, rng) {
            modifiers.push(Modifier::TeraShard { slot, tera_type });
        }
    }
    modifiers
}
