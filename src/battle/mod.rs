//! Battle-side collaborators: context, level table, combatants.

#![allow(unused_imports)]

pub mod combatant;
pub mod context;

pub use combatant::*;
pub use context::*;
