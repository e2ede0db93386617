//! Monte Carlo simulator for rival encounters.
//!
//! Plays out many runs of persona selection, encounter scheduling, stage
//! scaling and party generation to check:
//! - Party size, boss and tera counts per stage
//! - How evenly personas and music tracks are picked
//! - How often small pools force repeated species
//! - How many runs it takes to unlock Nightmare mode

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{SimReport, StageSummary};
pub use runner::{run_simulation, EncounterStats, RunStats};
