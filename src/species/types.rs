use crate::constants::{
    TIER_COMMON_MIN, TIER_RARE_MIN, TIER_ROLL_RANGE, TIER_SUPER_RARE_MIN, TIER_UNCOMMON_MIN,
};
use crate::utils::pick;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Lower-snake species name, e.g. `"alola_raichu"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub String);

impl SpeciesId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display name: underscores become spaces, words are capitalized.
    pub fn display_name(&self) -> String {
        self.0
            .split('_')
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<&str> for SpeciesId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

/// Rarity tier of an ordinary trainer's species pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoolTier {
    Common,
    Uncommon,
    Rare,
    SuperRare,
    UltraRare,
}

impl PoolTier {
    pub const ALL: [PoolTier; 5] = [
        PoolTier::Common,
        PoolTier::Uncommon,
        PoolTier::Rare,
        PoolTier::SuperRare,
        PoolTier::UltraRare,
    ];

    /// Maps a roll in `0..512` to a tier.
    pub fn from_roll(roll: u32) -> Self {
        if roll >= TIER_COMMON_MIN {
            PoolTier::Common
        } else if roll >= TIER_UNCOMMON_MIN {
            PoolTier::Uncommon
        } else if roll >= TIER_RARE_MIN {
            PoolTier::Rare
        } else if roll >= TIER_SUPER_RARE_MIN {
            PoolTier::SuperRare
        } else {
            PoolTier::UltraRare
        }
    }

    pub fn roll(rng: &mut impl Rng) -> Self {
        Self::from_roll(rng.gen_range(0..TIER_ROLL_RANGE))
    }
}

/// Species lists keyed by tier. Tiers may be left undefined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesPools {
    tiers: BTreeMap<PoolTier, Vec<SpeciesId>>,
}

impl SpeciesPools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tier(mut self, tier: PoolTier, species: &[&str]) -> Self {
        self.tiers
            .insert(tier, species.iter().map(|&s| SpeciesId::from(s)).collect());
        self
    }

    pub fn tier(&self, tier: PoolTier) -> Option<&[SpeciesId]> {
        self.tiers
            .get(&tier)
            .filter(|list| !list.is_empty())
            .map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.values().all(Vec::is_empty)
    }

    /// Nearest non-empty tier at or below `tier`, else the nearest above.
    pub fn resolve_tier(&self, tier: PoolTier) -> Option<PoolTier> {
        let below = PoolTier::ALL
            .iter()
            .rev()
            .filter(|&&t| t <= tier)
            .find(|&&t| self.tier(t).is_some());
        let found = below.or_else(|| {
            PoolTier::ALL
                .iter()
                .filter(|&&t| t > tier)
                .find(|&&t| self.tier(t).is_some())
        });
        if let Some(&resolved) = found {
            if resolved != tier {
                log::warn!("Downgraded trainer pool tier from {:?} to {:?}", tier, resolved);
            }
        }
        found.copied()
    }

    /// Rolls a tier, then picks uniformly within it.
    pub fn draw(&self, rng: &mut impl Rng) -> Option<SpeciesId> {
        let rolled = PoolTier::roll(rng);
        let tier = self.resolve_tier(rolled)?;
        pick(self.tier(tier)?, rng).cloned()
    }
}

/// Catalog query for species drawn without an explicit pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesFilter {
    pub allow_legendaries: bool,
    /// Empty means any type.
    pub types: Vec<ElementType>,
    pub min_base_total: u32,
}

impl SpeciesFilter {
    pub fn of_types(types: &[ElementType]) -> Self {
        Self {
            types: types.to_vec(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_tier_roll_thresholds() {
        assert_eq!(PoolTier::from_roll(511), PoolTier::Common);
        assert_eq!(PoolTier::from_roll(156), PoolTier::Common);
        assert_eq!(PoolTier::from_roll(155), PoolTier::Uncommon);
        assert_eq!(PoolTier::from_roll(32), PoolTier::Uncommon);
        assert_eq!(PoolTier::from_roll(31), PoolTier::Rare);
        assert_eq!(PoolTier::from_roll(6), PoolTier::Rare);
        assert_eq!(PoolTier::from_roll(5), PoolTier::SuperRare);
        assert_eq!(PoolTier::from_roll(1), PoolTier::SuperRare);
        assert_eq!(PoolTier::from_roll(0), PoolTier::UltraRare);
    }

    #[test]
    fn test_resolve_tier_downgrades() {
        let pools = SpeciesPools::new()
            .with_tier(PoolTier::Common, &["rattata"])
            .with_tier(PoolTier::Rare, &["dratini"]);
        assert_eq!(pools.resolve_tier(PoolTier::UltraRare), Some(PoolTier::Rare));
        assert_eq!(pools.resolve_tier(PoolTier::Uncommon), Some(PoolTier::Common));
        assert_eq!(pools.resolve_tier(PoolTier::Rare), Some(PoolTier::Rare));
    }

    #[test]
    fn test_resolve_tier_upgrades_when_nothing_below() {
        let pools = SpeciesPools::new().with_tier(PoolTier::Rare, &["dratini"]);
        assert_eq!(pools.resolve_tier(PoolTier::Common), Some(PoolTier::Rare));
        assert_eq!(SpeciesPools::new().resolve_tier(PoolTier::Common), None);
    }

    #[test]
    fn test_draw_stays_in_pools() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let pools = SpeciesPools::new()
            .with_tier(PoolTier::Common, &["rattata", "pidgey"])
            .with_tier(PoolTier::Uncommon, &["abra"]);
        for _ in 0..100 {
            let species = pools.draw(&mut rng).unwrap();
            assert!(["rattata", "pidgey", "abra"].contains(&species.as_str()));
        }
        assert!(SpeciesPools::new().draw(&mut rng).is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(SpeciesId::from("alola_raichu").display_name(), "Alola Raichu");
        assert_eq!(SpeciesId::from("pikachu").display_name(), "Pikachu");
    }
}
