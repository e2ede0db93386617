use serde::{Deserialize, Serialize};

/// Relative power tier of a party slot. Used as a tag only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartyMemberStrength {
    Weaker,
    Weak,
    Average,
    Strong,
    Stronger,
}

/// Fixed-size, fixed-strength run of party slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafTemplate {
    pub size: usize,
    pub strength: PartyMemberStrength,
    /// All slots share the species of the run's first slot.
    pub same_species: bool,
    /// Levels and types are spread evenly instead of skewed.
    pub balanced: bool,
}

/// A party template: either a leaf run or an ordered sequence of sub-templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartyTemplate {
    Leaf(LeafTemplate),
    Compound(Vec<PartyTemplate>),
}

/// Answer returned for slot queries past the end of a template.
const FALLBACK_STRENGTH: PartyMemberStrength = PartyMemberStrength::Average;

impl PartyTemplate {
    pub fn new(size: usize, strength: PartyMemberStrength) -> Self {
        PartyTemplate::Leaf(LeafTemplate {
            size,
            strength,
            same_species: false,
            balanced: false,
        })
    }

    pub fn compound(templates: Vec<PartyTemplate>) -> Self {
        PartyTemplate::Compound(templates)
    }

    /// Marks a leaf as same-species. No effect on compound templates.
    pub fn same_species(mut self) -> Self {
        if let PartyTemplate::Leaf(leaf) = &mut self {
            leaf.same_species = true;
        }
        self
    }

    /// Marks a leaf as balanced. No effect on compound templates.
    pub fn balanced(mut self) -> Self {
        if let PartyTemplate::Leaf(leaf) = &mut self {
            leaf.balanced = true;
        }
        self
    }

    /// Number of slots; a compound template's size is the sum of its parts.
    pub fn size(&self) -> usize {
        match self {
            PartyTemplate::Leaf(leaf) => leaf.size,
            PartyTemplate::Compound(parts) => parts.iter().map(PartyTemplate::size).sum(),
        }
    }

    /// Resolves `index` to the leaf answering for it.
    /// Returns `None` past the end.
    pub fn leaf_at(&self, index: usize) -> Option<&LeafTemplate> {
        match self {
            PartyTemplate::Leaf(leaf) => (index < leaf.size).then_some(leaf),
            PartyTemplate::Compound(parts) => {
                let mut start = 0;
                for part in parts {
                    let size = part.size();
                    if start + size > index {
                        return part.leaf_at(index - start);
                    }
                    start += size;
                }
                None
            }
        }
    }

    pub fn strength(&self, index: usize) -> PartyMemberStrength {
        self.leaf_at(index)
            .map_or(FALLBACK_STRENGTH, |leaf| leaf.strength)
    }

    pub fn is_same_species(&self, index: usize) -> bool {
        self.leaf_at(index).is_some_and(|leaf| leaf.same_species)
    }

    pub fn is_balanced(&self, index: usize) -> bool {
        self.leaf_at(index).is_some_and(|leaf| leaf.balanced)
    }

    /// Start slot of the top-level sub-template containing `index`.
    /// Same-species slots copy the species generated at this offset.
    pub fn sub_template_offset(&self, index: usize) -> usize {
        match self {
            PartyTemplate::Leaf(_) => 0,
            PartyTemplate::Compound(parts) => {
                let mut start = 0;
                for part in parts {
                    let size = part.size();
                    if start + size > index {
                        break;
                    }
                    start += size;
                }
                start
            }
        }
    }

    /// Flattens the template into one leaf answer per slot.
    pub fn slots(&self) -> Vec<LeafTemplate> {
        (0..self.size())
            .filter_map(|i| self.leaf_at(i).copied())
            .collect()
    }
}
