//! Trainer Forge - trainer party generation and recurring rival scaling
//!
//! Builds opponent parties for a monster-collecting battle game: party
//! templates, trainer configs, and the persona system that scales a
//! recurring rival's party with each encounter.

pub mod battle;
pub mod constants;
pub mod error;
pub mod rival;
pub mod simulator;
pub mod species;
pub mod templates;
pub mod trainer;
pub mod utils;

pub use error::{ForgeError, ForgeResult};
