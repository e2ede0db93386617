//! Named party templates tuned for existing balance.

use super::types::{PartyMemberStrength, PartyTemplate};
use PartyMemberStrength::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplatePreset {
    OneWeakOneStrong,
    OneAvg,
    OneAvgOneStrong,
    OneStrong,
    OneStronger,
    TwoWeaker,
    TwoWeak,
    TwoWeakOneAvg,
    TwoWeakSameOneAvg,
    TwoWeakSameTwoWeakSame,
    TwoWeakOneStrong,
    TwoAvg,
    TwoAvgOneStrong,
    TwoAvgSameOneAvg,
    TwoAvgSameOneStrong,
    TwoAvgSameTwoAvgSame,
    TwoStrong,
    ThreeWeak,
    ThreeWeakSame,
    ThreeAvg,
    ThreeAvgSame,
    ThreeWeakBalanced,
    FourWeaker,
    FourWeakerSame,
    FourWeak,
    FourWeakSame,
    FourWeakBalanced,
    FiveWeaker,
    FiveWeak,
    FiveWeakBalanced,
    SixWeaker,
    SixWeakerSame,
    SixWeakSame,
    SixWeakBalanced,
    GymLeader1,
    GymLeader2,
    GymLeader3,
    GymLeader4,
    GymLeader5,
    EliteFour,
    Champion,
    Rival,
    Rival2,
    Rival3,
    Rival4,
    Rival5,
    Rival6,
}

fn leaf(size: usize, strength: PartyMemberStrength) -> PartyTemplate {
    PartyTemplate::new(size, strength)
}

fn same(size: usize, strength: PartyMemberStrength) -> PartyTemplate {
    PartyTemplate::new(size, strength).same_species()
}

fn balanced(size: usize, strength: PartyMemberStrength) -> PartyTemplate {
    PartyTemplate::new(size, strength).balanced()
}

fn compound<const N: usize>(parts: [PartyTemplate; N]) -> PartyTemplate {
    PartyTemplate::compound(parts.into())
}

impl TemplatePreset {
    pub fn template(self) -> PartyTemplate {
        use TemplatePreset as P;
        match self {
            P::OneWeakOneStrong => compound([leaf(1, Weak), leaf(1, Strong)]),
            P::OneAvg => leaf(1, Average),
            P::OneAvgOneStrong => compound([leaf(1, Average), leaf(1, Strong)]),
            P::OneStrong => leaf(1, Strong),
            P::OneStronger => leaf(1, Stronger),
            P::TwoWeaker => leaf(2, Weaker),
            P::TwoWeak => leaf(2, Weak),
            P::TwoWeakOneAvg => compound([leaf(2, Weak), leaf(1, Average)]),
            P::TwoWeakSameOneAvg => compound([same(2, Weak), leaf(1, Average)]),
            P::TwoWeakSameTwoWeakSame => compound([same(2, Weak), same(2, Weak)]),
            P::TwoWeakOneStrong => compound([leaf(2, Weak), leaf(1, Strong)]),
            P::TwoAvg => leaf(2, Average),
            P::TwoAvgOneStrong => compound([leaf(2, Average), leaf(1, Strong)]),
            P::TwoAvgSameOneAvg => compound([same(2, Average), leaf(1, Average)]),
            P::TwoAvgSameOneStrong => compound([same(2, Average), leaf(1, Strong)]),
            P::TwoAvgSameTwoAvgSame => compound([same(2, Average), same(2, Average)]),
            P::TwoStrong => leaf(2, Strong),
            P::ThreeWeak => leaf(3, Weak),
            P::ThreeWeakSame => same(3, Weak),
            P::ThreeAvg => leaf(3, Average),
            P::ThreeAvgSame => same(3, Average),
            P::ThreeWeakBalanced => balanced(3, Weak),
            P::FourWeaker => leaf(4, Weaker),
            P::FourWeakerSame => same(4, Weaker),
            P::FourWeak => leaf(4, Weak),
            P::FourWeakSame => same(4, Weak),
            P::FourWeakBalanced => balanced(4, Weak),
            P::FiveWeaker => leaf(5, Weaker),
            P::FiveWeak => leaf(5, Weak),
            P::FiveWeakBalanced => balanced(5, Weak),
            P::SixWeaker => leaf(6, Weaker),
            P::SixWeakerSame => same(6, Weaker),
            P::SixWeakSame => same(6, Weak),
            P::SixWeakBalanced => balanced(6, Weak),

            P::GymLeader1 => compound([leaf(1, Average), leaf(1, Strong)]),
            P::GymLeader2 => compound([leaf(1, Average), leaf(1, Strong), leaf(1, Stronger)]),
            P::GymLeader3 => compound([leaf(2, Average), leaf(1, Strong), leaf(1, Stronger)]),
            P::GymLeader4 => compound([leaf(3, Average), leaf(1, Strong), leaf(1, Stronger)]),
            P::GymLeader5 => compound([leaf(3, Average), leaf(2, Strong), leaf(1, Stronger)]),

            P::EliteFour => compound([leaf(2, Average), leaf(3, Strong), leaf(1, Stronger)]),
            P::Champion => compound([leaf(1, Stronger), balanced(5, Strong)]),

            P::Rival => compound([leaf(1, Strong), leaf(1, Average)]),
            P::Rival2 => compound([leaf(1, Strong), leaf(1, Average), balanced(1, Weak)]),
            P::Rival3 => compound([
                leaf(1, Strong),
                leaf(1, Average),
                balanced(1, Average),
                balanced(1, Weak),
            ]),
            P::Rival4 => compound([
                leaf(1, Strong),
                leaf(1, Average),
                balanced(2, Average),
                balanced(1, Weak),
            ]),
            P::Rival5 => compound([
                leaf(1, Strong),
                leaf(1, Average),
                balanced(3, Average),
                leaf(1, Strong),
            ]),
            P::Rival6 => compound([
                leaf(1, Strong),
                leaf(1, Average),
                balanced(3, Average),
                leaf(1, Stronger),
            ]),
        }
    }
}
