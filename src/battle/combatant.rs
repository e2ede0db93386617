//! Enemy combatants and the factory that instantiates them.

use crate::species::{ElementType, SpeciesCatalog, SpeciesId};
use crate::templates::PartyMemberStrength;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which trainer a combatant belongs to in double battles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrainerSlot {
    None,
    #[default]
    Trainer,
    TrainerPartner,
}

/// An alternate form applied on top of the base species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatantForm {
    /// A species-specific form index.
    Index(u8),
    /// A form trigger that works on any species.
    Universal(String),
}

/// What the battle HUD shows for a combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleInfo {
    pub name: String,
    pub level: u32,
    pub boss_segments: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub species: SpeciesId,
    pub level: u32,
    pub trainer_slot: TrainerSlot,
    pub strength: PartyMemberStrength,
    pub primary_type: ElementType,
    #[serde(default)]
    pub secondary_type: Option<ElementType>,
    #[serde(default)]
    pub form: Option<CombatantForm>,
    pub display_name: String,
    /// `Some(n)` marks a boss with `n` health segments.
    #[serde(default)]
    pub boss_segments: Option<u8>,
    #[serde(default)]
    pub shiny: bool,
    #[serde(default)]
    pub shadow: bool,
    #[serde(default)]
    pub battle_info: Option<BattleInfo>,
}

impl Combatant {
    pub fn is_boss(&self) -> bool {
        self.boss_segments.is_some()
    }

    pub fn types(&self) -> Vec<ElementType> {
        std::iter::once(self.primary_type)
            .chain(self.secondary_type)
            .collect()
    }

    pub fn set_boss(&mut self, boss: bool, segments: u8) {
        self.boss_segments = boss.then_some(segments);
    }

    /// Rebuilds the HUD state from the current name, level and boss flag.
    pub fn init_battle_info(&mut self) {
        self.battle_info = Some(BattleInfo {
            name: self.display_name.clone(),
            level: self.level,
            boss_segments: self.boss_segments.unwrap_or(0),
        });
    }

    pub fn generate_name(&mut self) {
        let base = self.species.display_name();
        self.display_name = match &self.form {
            Some(CombatantForm::Universal(name)) => {
                format!("{} {}", SpeciesId::from(name.as_str()).display_name(), base)
            }
            Some(CombatantForm::Index(index)) if *index > 0 => format!("{base} (Form {index})"),
            _ => base,
        };
    }

    pub fn toggle_shadow(&mut self, shadow: bool) {
        self.shadow = shadow;
    }

    /// Sets a species-specific form index.
    pub fn set_form_index(&mut self, index: u8) {
        self.form = Some(CombatantForm::Index(index));
    }

    /// Applies a universal form. Clears the shiny and shadow cosmetics.
    pub fn apply_universal_form(&mut self, name: &str) {
        self.form = Some(CombatantForm::Universal(name.to_string()));
        self.shiny = false;
        self.generate_name();
        self.toggle_shadow(false);
    }
}

/// Everything the factory needs to build one combatant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatantRequest {
    pub species: SpeciesId,
    pub level: u32,
    pub trainer_slot: TrainerSlot,
    pub strength: PartyMemberStrength,
    /// Keep the requested species instead of evolving it to fit `level`.
    pub ignore_evolution: bool,
}

pub trait CombatantFactory {
    fn create(&self, request: CombatantRequest, rng: &mut impl Rng) -> Combatant;
}

/// Builds combatants from catalog metadata.
#[derive(Debug, Clone, Copy)]
pub struct CatalogCombatantFactory<'a, C> {
    catalog: &'a C,
    /// One-in-N shiny odds. `None` never rolls.
    shiny_odds: Option<u32>,
}

impl<'a, C: SpeciesCatalog> CatalogCombatantFactory<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self {
            catalog,
            shiny_odds: None,
        }
    }

    pub fn with_shiny_odds(mut self, odds: u32) -> Self {
        self.shiny_odds = Some(odds.max(1));
        self
    }
}

impl<C: SpeciesCatalog> CombatantFactory for CatalogCombatantFactory<'_, C> {
    fn create(&self, request: CombatantRequest, rng: &mut impl Rng) -> Combatant {
        let species = if request.ignore_evolution {
            request.species
        } else {
            self.catalog.species_for_level(&request.species, request.level)
        };
        let types = self.catalog.types(&species);
        let shiny = self
            .shiny_odds
            .is_some_and(|odds| rng.gen_range(0..odds) == 0);

        let mut combatant = Combatant {
            display_name: String::new(),
            primary_type: types.first().copied().unwrap_or(ElementType::Normal),
            secondary_type: types.get(1).copied(),
            species,
            level: request.level,
            trainer_slot: request.trainer_slot,
            strength: request.strength,
            form: None,
            boss_segments: None,
            shiny,
            shadow: false,
            battle_info: None,
        };
        combatant.generate_name();
        combatant
    }
}
