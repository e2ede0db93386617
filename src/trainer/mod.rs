//! Trainer configs, slot generators, modifiers and party generation.

#![allow(unused_imports)]

pub mod config;
pub mod member;
pub mod modifiers;
pub mod party;
pub mod presets;

pub use config::*;
pub use member::*;
pub use modifiers::*;
pub use party::*;
pub use presets::*;
