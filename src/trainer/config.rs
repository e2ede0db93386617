//! Trainer configuration: templates, pools, slot overrides and presentation.

use super::member::PartyMemberGenerator;
use super::modifiers::ModifierPlan;
use super::presets::TrainerType;
use crate::battle::BattleContext;
use crate::constants::{DEFAULT_TRAINER_BGM, DEFAULT_VICTORY_BGM};
use crate::species::{ElementType, SpeciesFilter, SpeciesPools};
use crate::templates::{PartyTemplate, TemplatePreset};
use crate::utils::rand_index;
use rand::Rng;
use std::collections::BTreeMap;

/// Computes the party template from the live battle.
pub type PartyTemplateFunc = fn(&BattleContext) -> PartyTemplate;

/// Key for an explicit party slot override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartySlot {
    /// Zero-based from the front.
    Index(usize),
    /// Counted from the back; `FromEnd(1)` is the last slot.
    FromEnd(usize),
}

impl PartySlot {
    /// Concrete slot index in a party of `size`, if it lands inside it.
    pub fn resolve(self, size: usize) -> Option<usize> {
        match self {
            PartySlot::Index(i) => (i < size).then_some(i),
            PartySlot::FromEnd(n) => (n >= 1 && n <= size).then(|| size - n),
        }
    }
}

/// Immutable-by-convention trainer description.
///
/// Setters consume and return the config; the last setter wins.
#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub trainer_type: TrainerType,
    pub name: String,
    pub title: Option<String>,
    pub has_char_sprite: bool,
    pub party_templates: Vec<PartyTemplate>,
    pub party_template_func: Option<PartyTemplateFunc>,
    pub party_members: BTreeMap<PartySlot, PartyMemberGenerator>,
    pub species_pools: Option<SpeciesPools>,
    pub species_filter: SpeciesFilter,
    pub specialty_types: Vec<ElementType>,
    pub battle_bgm: String,
    pub mixed_battle_bgm: String,
    pub victory_bgm: String,
    pub money_multiplier: f64,
    pub is_boss: bool,
    /// Composition is fixed once rolled.
    pub has_static_party: bool,
    pub modifier_plan: Option<ModifierPlan>,
    pub encounter_messages: Vec<String>,
    pub victory_messages: Vec<String>,
    pub defeat_messages: Vec<String>,
}

impl TrainerConfig {
    pub fn new(trainer_type: TrainerType) -> Self {
        Self {
            trainer_type,
            name: trainer_type.display_name(),
            title: None,
            has_char_sprite: false,
            party_templates: Vec::new(),
            party_template_func: None,
            party_members: BTreeMap::new(),
            species_pools: None,
            species_filter: SpeciesFilter::default(),
            specialty_types: Vec::new(),
            battle_bgm: DEFAULT_TRAINER_BGM.to_string(),
            mixed_battle_bgm: DEFAULT_TRAINER_BGM.to_string(),
            victory_bgm: DEFAULT_VICTORY_BGM.to_string(),
            money_multiplier: 1.0,
            is_boss: false,
            has_static_party: false,
            modifier_plan: None,
            encounter_messages: Vec::new(),
            victory_messages: Vec::new(),
            defeat_messages: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_char_sprite(mut self) -> Self {
        self.has_char_sprite = true;
        self
    }

    pub fn with_party_templates(mut self, templates: Vec<PartyTemplate>) -> Self {
        self.party_templates = templates;
        self
    }

    pub fn with_party_presets(self, presets: &[TemplatePreset]) -> Self {
        self.with_party_templates(presets.iter().map(|p| p.template()).collect())
    }

    pub fn with_party_template_func(mut self, func: PartyTemplateFunc) -> Self {
        self.party_template_func = Some(func);
        self
    }

    pub fn with_party_member(mut self, slot: PartySlot, generator: PartyMemberGenerator) -> Self {
        self.party_members.insert(slot, generator);
        self
    }

    pub fn set_party_member(&mut self, slot: PartySlot, generator: PartyMemberGenerator) {
        self.party_members.insert(slot, generator);
    }

    pub fn with_species_pools(mut self, pools: SpeciesPools) -> Self {
        self.species_pools = Some(pools);
        self
    }

    pub fn with_species_filter(mut self, filter: SpeciesFilter) -> Self {
        self.species_filter = filter;
        self
    }

    pub fn with_specialty_types(mut self, types: &[ElementType]) -> Self {
        self.specialty_types = types.to_vec();
        self
    }

    pub fn with_battle_bgm(mut self, bgm: &str) -> Self {
        self.battle_bgm = bgm.to_string();
        self
    }

    pub fn with_mixed_battle_bgm(mut self, bgm: &str) -> Self {
        self.mixed_battle_bgm = bgm.to_string();
        self
    }

    pub fn with_victory_bgm(mut self, bgm: &str) -> Self {
        self.victory_bgm = bgm.to_string();
        self
    }

    pub fn with_money_multiplier(mut self, multiplier: f64) -> Self {
        self.money_multiplier = multiplier;
        self
    }

    pub fn with_boss(mut self) -> Self {
        self.is_boss = true;
        self
    }

    pub fn with_static_party(mut self) -> Self {
        self.has_static_party = true;
        self
    }

    pub fn with_modifier_plan(mut self, plan: ModifierPlan) -> Self {
        self.modifier_plan = Some(plan);
        self
    }

    /// Resolves the template for this battle.
    ///
    /// A template func wins; otherwise one configured template is picked
    /// (no draw when there is only one); with none configured, `TWO_AVG`.
    pub fn party_template(&self, battle: &BattleContext, rng: &mut impl Rng) -> PartyTemplate {
        if let Some(func) = self.party_template_func {
            return func(battle);
        }
        let idx = rand_index(self.party_templates.len(), rng);
        self.party_templates
            .get(idx)
            .cloned()
            .unwrap_or_else(|| TemplatePreset::TwoAvg.template())
    }

    /// Party size when it does not depend on a roll.
    pub fn party_size(&self) -> Option<usize> {
        match (self.party_template_func, self.party_templates.as_slice()) {
            (None, [only]) => Some(only.size()),
            _ => None,
        }
    }

    /// Explicit override for `index`; front indices win over back ones.
    pub fn party_member(&self, index: usize, size: usize) -> Option<&PartyMemberGenerator> {
        self.party_members
            .get(&PartySlot::Index(index))
            .or_else(|| {
                size.checked_sub(index)
                    .and_then(|n| self.party_members.get(&PartySlot::FromEnd(n)))
            })
    }
}
