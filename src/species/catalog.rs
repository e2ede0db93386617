//! Species metadata consumed by party generation.
//!
//! The catalog answers type, form and evolution questions. Battle code only
//! sees the [`SpeciesCatalog`] trait; [`SpeciesRegistry`] is the JSON-backed
//! implementation used by the simulator and tests.

use super::types::{ElementType, SpeciesFilter, SpeciesId};
use crate::error::ForgeResult;
use crate::utils::pick;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evolution {
    pub into: SpeciesId,
    pub level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub primary_type: ElementType,
    #[serde(default)]
    pub secondary_type: Option<ElementType>,
    #[serde(default)]
    pub legendary: bool,
    #[serde(default)]
    pub base_total: u32,
    /// Form indices only reachable in the late nightmare game.
    #[serde(default)]
    pub late_game_forms: Vec<u8>,
    #[serde(default = "default_form_count")]
    pub form_count: u8,
    #[serde(default)]
    pub evolutions: Vec<Evolution>,
}

fn default_form_count() -> u8 {
    1
}

impl SpeciesInfo {
    pub fn new(primary_type: ElementType) -> Self {
        Self {
            primary_type,
            secondary_type: None,
            legendary: false,
            base_total: 0,
            late_game_forms: Vec::new(),
            form_count: 1,
            evolutions: Vec::new(),
        }
    }

    pub fn types(&self) -> Vec<ElementType> {
        std::iter::once(self.primary_type)
            .chain(self.secondary_type)
            .collect()
    }

    pub fn is_of_type(&self, element: ElementType) -> bool {
        self.primary_type == element || self.secondary_type == Some(element)
    }

    fn matches(&self, filter: &SpeciesFilter) -> bool {
        (filter.allow_legendaries || !self.legendary)
            && self.base_total >= filter.min_base_total
            && (filter.types.is_empty() || filter.types.iter().any(|&t| self.is_of_type(t)))
    }
}

/// A form trigger that can be applied to any species.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniversalForm {
    pub name: String,
}

pub trait SpeciesCatalog {
    fn info(&self, species: &SpeciesId) -> Option<&SpeciesInfo>;

    /// Unknown species are treated as Normal.
    fn primary_type(&self, species: &SpeciesId) -> ElementType {
        self.info(species)
            .map_or(ElementType::Normal, |info| info.primary_type)
    }

    fn types(&self, species: &SpeciesId) -> Vec<ElementType> {
        self.info(species)
            .map_or_else(|| vec![ElementType::Normal], SpeciesInfo::types)
    }

    fn late_game_forms(&self, species: &SpeciesId) -> &[u8] {
        self.info(species)
            .map(|info| info.late_game_forms.as_slice())
            .unwrap_or_default()
    }

    fn form_count(&self, species: &SpeciesId) -> u8 {
        self.info(species).map_or(1, |info| info.form_count)
    }

    fn universal_forms(&self) -> &[UniversalForm];

    fn random_species(&self, filter: &SpeciesFilter, rng: &mut impl Rng) -> Option<SpeciesId>;

    /// Follows the evolution chain as far as `level` allows.
    fn species_for_level(&self, species: &SpeciesId, level: u32) -> SpeciesId {
        let mut current = species.clone();
        // Cyclic catalog data stops after eight hops.
        for _ in 0..8 {
            let next = self.info(&current).and_then(|info| {
                info.evolutions
                    .iter()
                    .filter(|evo| evo.level <= level)
                    .max_by_key(|evo| evo.level)
                    .map(|evo| evo.into.clone())
            });
            match next {
                Some(evolved) => current = evolved,
                None => break,
            }
        }
        current
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRegistry {
    #[serde(default)]
    species: BTreeMap<SpeciesId, SpeciesInfo>,
    #[serde(default)]
    universal_forms: Vec<UniversalForm>,
}

impl SpeciesRegistry {
    pub fn from_json(json: &str) -> ForgeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> ForgeResult<Self> {
        let json = fs::read_to_string(path)?;
        let registry = Self::from_json(&json)?;
        log::info!(
            "Loaded {} species from {}",
            registry.species.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn insert(&mut self, species: impl Into<SpeciesId>, info: SpeciesInfo) {
        self.species.insert(species.into(), info);
    }

    pub fn with_species(mut self, species: &str, info: SpeciesInfo) -> Self {
        self.insert(species, info);
        self
    }

    pub fn with_universal_form(mut self, name: &str) -> Self {
        self.universal_forms.push(UniversalForm {
            name: name.to_string(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

impl SpeciesCatalog for SpeciesRegistry {
    fn info(&self, species: &SpeciesId) -> Option<&SpeciesInfo> {
        self.species.get(species)
    }

    fn universal_forms(&self) -> &[UniversalForm] {
        &self.universal_forms
    }

    fn random_species(&self, filter: &SpeciesFilter, rng: &mut impl Rng) -> Option<SpeciesId> {
        let candidates: Vec<&SpeciesId> = self
            .species
            .iter()
            .filter(|(_, info)| info.matches(filter))
            .map(|(id, _)| id)
            .collect();
        pick(&candidates, rng).map(|&id| id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const CATALOG: &str = r#"{
        "species": {
            "charmander": {
                "primary_type": "fire",
                "base_total": 309,
                "evolutions": [{ "into": "charmeleon", "level": 16 }]
            },
            "charmeleon": {
                "primary_type": "fire",
                "base_total": 405,
                "evolutions": [{ "into": "charizard", "level": 36 }]
            },
            "charizard": {
                "primary_type": "fire",
                "secondary_type": "flying",
                "base_total": 534,
                "form_count": 4,
                "late_game_forms": [3]
            },
            "mewtwo": { "primary_type": "psychic", "legendary": true, "base_total": 680 }
        },
        "universal_forms": [{ "name": "glitch" }]
    }"#;

    #[test]
    fn test_from_json() {
        let registry = SpeciesRegistry::from_json(CATALOG).unwrap();
        assert_eq!(registry.len(), 4);
        let charizard = SpeciesId::from("charizard");
        assert_eq!(
            registry.types(&charizard),
            vec![ElementType::Fire, ElementType::Flying]
        );
        assert_eq!(registry.late_game_forms(&charizard), &[3]);
        assert_eq!(registry.form_count(&charizard), 4);
        assert_eq!(registry.form_count(&SpeciesId::from("charmander")), 1);
        assert_eq!(registry.universal_forms().len(), 1);
    }

    #[test]
    fn test_invalid_json_is_catalog_error() {
        let err = SpeciesRegistry::from_json("{ \"species\": 4 }").unwrap_err();
        assert!(err.to_string().starts_with("invalid species catalog"));
    }

    #[test]
    fn test_unknown_species_is_normal() {
        let registry = SpeciesRegistry::default();
        let id = SpeciesId::from("missingno");
        assert_eq!(registry.primary_type(&id), ElementType::Normal);
        assert!(registry.late_game_forms(&id).is_empty());
        assert_eq!(registry.species_for_level(&id, 100), id);
    }

    #[test]
    fn test_species_for_level_follows_chain() {
        let registry = SpeciesRegistry::from_json(CATALOG).unwrap();
        let base = SpeciesId::from("charmander");
        assert_eq!(registry.species_for_level(&base, 10).as_str(), "charmander");
        assert_eq!(registry.species_for_level(&base, 20).as_str(), "charmeleon");
        assert_eq!(registry.species_for_level(&base, 50).as_str(), "charizard");
    }

    #[test]
    fn test_random_species_respects_filter() {
        let registry = SpeciesRegistry::from_json(CATALOG).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        for _ in 0..20 {
            let id = registry
                .random_species(&SpeciesFilter::default(), &mut rng)
                .unwrap();
            assert_ne!(id.as_str(), "mewtwo");
        }

        let psychic = SpeciesFilter {
            allow_legendaries: true,
            ..SpeciesFilter::of_types(&[ElementType::Psychic])
        };
        assert_eq!(
            registry.random_species(&psychic, &mut rng).unwrap().as_str(),
            "mewtwo"
        );

        let strong = SpeciesFilter {
            min_base_total: 500,
            ..SpeciesFilter::default()
        };
        assert_eq!(
            registry.random_species(&strong, &mut rng).unwrap().as_str(),
            "charizard"
        );
        assert!(SpeciesRegistry::default()
            .random_species(&SpeciesFilter::default(), &mut rng)
            .is_none());
    }
}
