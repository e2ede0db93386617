//! Simulation configuration.

use crate::battle::GameMode;
use std::path::PathBuf;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated runs
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub game_mode: GameMode,

    /// Species catalog JSON; None uses an untyped catalog built from the pools
    pub catalog_path: Option<PathBuf>,

    /// Added to every planned wave (Nightmare runs meet rivals in later hundreds)
    pub wave_offset: u32,

    /// Strongest player level, used by late Nightmare waves
    pub player_level: u32,

    /// Personas marked defeated before the first run, in roster order
    pub pre_defeated: usize,

    /// Keep one save across runs so defeats accumulate
    pub carry_save: bool,

    pub nightmare_unlocked: bool,
    pub void_overtaken: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            game_mode: GameMode::Classic,
            catalog_path: None,
            wave_offset: 0,
            player_level: 50,
            pre_defeated: 0,
            carry_save: false,
            nightmare_unlocked: false,
            void_overtaken: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick sanity pass over the classic schedule
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            ..Default::default()
        }
    }

    /// Runs share a save until every persona has fallen
    pub fn full_roster(num_runs: u32) -> Self {
        Self {
            num_runs,
            carry_save: true,
            ..Default::default()
        }
    }

    /// Nightmare rivals late enough to carry alternate forms
    pub fn nightmare_endgame() -> Self {
        Self {
            num_runs: 100,
            game_mode: GameMode::Nightmare,
            wave_offset: 400,
            player_level: 200,
            nightmare_unlocked: true,
            ..Default::default()
        }
    }
}
