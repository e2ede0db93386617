//! Battle context and the wave-derived level table.

use crate::constants::{
    DAILY_CURVE_DIVISOR, DAILY_WAVE_BONUS, LEVEL_CURVE_DIVISOR, LEVEL_MULTIPLIER_FIXED_WAVE,
    LEVEL_MULTIPLIER_MAX, LEVEL_MULTIPLIER_MIN, NIGHTMARE_BOOSTED_LEVEL_WAVE,
    NIGHTMARE_FIXED_MULTIPLIER_WAVE, NIGHTMARE_WAVE_BLOCK, STARTING_WAVE,
};
use crate::templates::PartyTemplate;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    Classic,
    Endless,
    Daily,
    Nightmare,
}

impl GameMode {
    pub fn is_nightmare(self) -> bool {
        self == GameMode::Nightmare
    }

    /// Difficulty-normalised wave number.
    ///
    /// Daily runs start 30 waves ahead and, unless `ignore_curve_changes`,
    /// gain one extra wave every five.
    pub fn wave_for_difficulty(self, wave_index: u32, ignore_curve_changes: bool) -> u32 {
        match self {
            GameMode::Daily => {
                let curve = if ignore_curve_changes {
                    0
                } else {
                    wave_index / DAILY_CURVE_DIVISOR
                };
                wave_index + DAILY_WAVE_BONUS + curve
            }
            _ => wave_index,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "endless" => Some(GameMode::Endless),
            "daily" => Some(GameMode::Daily),
            "nightmare" => Some(GameMode::Nightmare),
            _ => None,
        }
    }
}

/// Live state of the battle being set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleContext {
    pub wave_index: u32,
    pub game_mode: GameMode,
    pub highest_player_level: u32,
}

impl Default for BattleContext {
    fn default() -> Self {
        Self {
            wave_index: STARTING_WAVE,
            game_mode: GameMode::Classic,
            highest_player_level: 5,
        }
    }
}

impl BattleContext {
    pub fn new(wave_index: u32, game_mode: GameMode) -> Self {
        Self {
            wave_index,
            game_mode,
            ..Self::default()
        }
    }

    pub fn with_highest_player_level(mut self, level: u32) -> Self {
        self.highest_player_level = level;
        self
    }

    pub fn wave_for_difficulty(&self, ignore_curve_changes: bool) -> u32 {
        self.game_mode
            .wave_for_difficulty(self.wave_index, ignore_curve_changes)
    }

    /// Nightmare runs repeat the level curve every 100 waves.
    fn level_wave(&self) -> u32 {
        if !self.game_mode.is_nightmare() {
            return self.wave_index;
        }
        match self.wave_index % NIGHTMARE_WAVE_BLOCK {
            0 => NIGHTMARE_WAVE_BLOCK,
            rem => rem,
        }
    }

    fn fixed_multiplier(&self, level_wave: u32) -> bool {
        if self.game_mode.is_nightmare() {
            level_wave >= NIGHTMARE_FIXED_MULTIPLIER_WAVE
        } else {
            level_wave > LEVEL_MULTIPLIER_FIXED_WAVE
        }
    }

    /// One level per template slot.
    ///
    /// Late nightmare waves match the player's strongest member outright.
    /// Otherwise levels follow `1 + w/2 + (w/25)^2` scaled by 1.25, or by a
    /// random multiplier in `[1.22, 1.25)` on early waves (one draw per slot).
    pub fn party_levels(&self, template: &PartyTemplate, rng: &mut impl Rng) -> Vec<u32> {
        let size = template.size();
        if self.game_mode.is_nightmare() && self.wave_index > NIGHTMARE_BOOSTED_LEVEL_WAVE {
            return vec![self.highest_player_level; size];
        }

        let level_wave = self.level_wave();
        let dw = self.game_mode.wave_for_difficulty(level_wave, false) as f64;
        let base = 1.0 + dw / 2.0 + (dw / LEVEL_CURVE_DIVISOR).powi(2);
        let fixed = self.fixed_multiplier(level_wave);

        (0..size)
            .map(|_| {
                let multiplier = if fixed {
                    LEVEL_MULTIPLIER_MAX
                } else {
                    rng.gen_range(LEVEL_MULTIPLIER_MIN..LEVEL_MULTIPLIER_MAX)
                };
                (base * multiplier).ceil() as u32
            })
            .collect()
    }
}
