//! Per-slot species generators.

use crate::battle::{Combatant, CombatantFactory, CombatantRequest, TrainerSlot};
use crate::error::{ForgeError, ForgeResult};
use crate::species::{SpeciesCatalog, SpeciesFilter, SpeciesId, UniversalForm};
use crate::templates::PartyMemberStrength;
use crate::utils::pick;
use rand::Rng;

const FALLBACK_LEVEL: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesSource {
    /// Uniform pick from a fixed list.
    Pool(Vec<SpeciesId>),
    /// Catalog query.
    Filter(SpeciesFilter),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOverride {
    /// A species-specific form index.
    Index(u8),
    Universal(UniversalForm),
}

/// Produces the combatant for one party slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyMemberGenerator {
    pub source: SpeciesSource,
    pub trainer_slot: TrainerSlot,
    pub ignore_evolution: bool,
    pub boss_segments: Option<u8>,
    pub form: Option<FormOverride>,
}

impl PartyMemberGenerator {
    pub fn from_pool(species: Vec<SpeciesId>) -> Self {
        Self {
            source: SpeciesSource::Pool(species),
            trainer_slot: TrainerSlot::Trainer,
            ignore_evolution: false,
            boss_segments: None,
            form: None,
        }
    }

    /// Generator bound to exactly one species.
    pub fn single(species: impl Into<SpeciesId>) -> Self {
        Self::from_pool(vec![species.into()])
    }

    pub fn from_names(species: &[&str]) -> Self {
        Self::from_pool(species.iter().map(|&s| SpeciesId::from(s)).collect())
    }

    pub fn from_filter(filter: SpeciesFilter) -> Self {
        Self {
            source: SpeciesSource::Filter(filter),
            ..Self::from_pool(Vec::new())
        }
    }

    pub fn ignoring_evolution(mut self, ignore: bool) -> Self {
        self.ignore_evolution = ignore;
        self
    }

    pub fn with_trainer_slot(mut self, slot: TrainerSlot) -> Self {
        self.trainer_slot = slot;
        self
    }

    pub fn with_boss(mut self, segments: u8) -> Self {
        self.boss_segments = Some(segments);
        self
    }

    pub fn with_form(mut self, form: FormOverride) -> Self {
        self.form = Some(form);
        self
    }

    /// The bound species when the pool holds exactly one.
    pub fn fixed_species(&self) -> Option<&SpeciesId> {
        match &self.source {
            SpeciesSource::Pool(pool) if pool.len() == 1 => pool.first(),
            _ => None,
        }
    }

    /// Species this generator may produce, before evolution.
    pub fn candidates(&self) -> &[SpeciesId] {
        match &self.source {
            SpeciesSource::Pool(pool) => pool.as_slice(),
            SpeciesSource::Filter(_) => &[],
        }
    }

    /// Level for `slot`; positions past the table reuse its last entry.
    pub fn level_for(slot: usize, levels: &[u32]) -> u32 {
        levels
            .get(slot)
            .or_else(|| levels.last())
            .copied()
            .unwrap_or(FALLBACK_LEVEL)
    }

    /// Builds the combatant, then applies the form and boss overrides.
    pub fn generate(
        &self,
        slot: usize,
        levels: &[u32],
        strength: PartyMemberStrength,
        catalog: &impl SpeciesCatalog,
        factory: &impl CombatantFactory,
        rng: &mut impl Rng,
    ) -> ForgeResult<Combatant> {
        let level = Self::level_for(slot, levels);
        let species = match &self.source {
            SpeciesSource::Pool(pool) => pick(pool, rng).cloned(),
            SpeciesSource::Filter(filter) => catalog.random_species(filter, rng),
        }
        .ok_or(ForgeError::NoSpeciesAvailable { slot })?;

        let mut combatant = factory.create(
            CombatantRequest {
                species,
                level,
                trainer_slot: self.trainer_slot,
                strength,
                ignore_evolution: self.ignore_evolution,
            },
            rng,
        );

        match &self.form {
            Some(FormOverride::Index(index)) => {
                combatant.set_form_index(*index);
                combatant.generate_name();
            }
            Some(FormOverride::Universal(form)) => combatant.apply_universal_form(&form.name),
            None => {}
        }

        if let Some(segments) = self.boss_segments {
            combatant.set_boss(true, segments);
            combatant.init_battle_info();
        }

        Ok(combatant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::CatalogCombatantFactory;
    use crate::species::{ElementType, SpeciesInfo, SpeciesRegistry};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_level_falls_back_to_last_entry() {
        assert_eq!(PartyMemberGenerator::level_for(1, &[10, 12]), 12);
        assert_eq!(PartyMemberGenerator::level_for(5, &[10, 12]), 12);
        assert_eq!(PartyMemberGenerator::level_for(0, &[]), FALLBACK_LEVEL);
    }

    #[test]
    fn test_generate_applies_boss_and_level() {
        let catalog = SpeciesRegistry::default();
        let factory = CatalogCombatantFactory::new(&catalog);
        let mut rng = create_test_rng();
        let generator = PartyMemberGenerator::single("onix").with_boss(3);

        let c = generator
            .generate(0, &[30, 31], PartyMemberStrength::Strong, &catalog, &factory, &mut rng)
            .unwrap();
        assert_eq!(c.species.as_str(), "onix");
        assert_eq!(c.level, 30);
        assert_eq!(c.boss_segments, Some(3));
        assert_eq!(c.battle_info.map(|b| b.boss_segments), Some(3));
    }

    #[test]
    fn test_generate_applies_forms() {
        let catalog = SpeciesRegistry::default();
        let factory = CatalogCombatantFactory::new(&catalog);
        let mut rng = create_test_rng();

        let indexed = PartyMemberGenerator::single("charizard").with_form(FormOverride::Index(3));
        let c = indexed
            .generate(0, &[80], PartyMemberStrength::Strong, &catalog, &factory, &mut rng)
            .unwrap();
        assert_eq!(c.form, Some(crate::battle::CombatantForm::Index(3)));

        let universal = PartyMemberGenerator::single("onix").with_form(FormOverride::Universal(
            UniversalForm {
                name: "glitch".to_string(),
            },
        ));
        let c = universal
            .generate(0, &[80], PartyMemberStrength::Strong, &catalog, &factory, &mut rng)
            .unwrap();
        assert_eq!(c.display_name, "Glitch Onix");
    }

    #[test]
    fn test_empty_sources_fail() {
        let catalog = SpeciesRegistry::default();
        let factory = CatalogCombatantFactory::new(&catalog);
        let mut rng = create_test_rng();

        let empty = PartyMemberGenerator::from_pool(Vec::new());
        let err = empty
            .generate(2, &[5], PartyMemberStrength::Weak, &catalog, &factory, &mut rng)
            .unwrap_err();
        assert!(matches!(err, ForgeError::NoSpeciesAvailable { slot: 2 }));

        let filter = PartyMemberGenerator::from_filter(SpeciesFilter::of_types(&[ElementType::Ice]));
        assert!(filter
            .generate(0, &[5], PartyMemberStrength::Weak, &catalog, &factory, &mut rng)
            .is_err());
    }

    #[test]
    fn test_filter_source_draws_from_catalog() {
        let catalog = SpeciesRegistry::default()
            .with_species("snorunt", SpeciesInfo::new(ElementType::Ice))
            .with_species("geodude", SpeciesInfo::new(ElementType::Rock));
        let factory = CatalogCombatantFactory::new(&catalog);
        let mut rng = create_test_rng();
        let generator = PartyMemberGenerator::from_filter(SpeciesFilter::of_types(&[ElementType::Ice]));
        for _ in 0..10 {
            let c = generator
                .generate(0, &[5], PartyMemberStrength::Weak, &catalog, &factory, &mut rng)
                .unwrap();
            assert_eq!(c.species.as_str(), "snorunt");
        }
    }
}
