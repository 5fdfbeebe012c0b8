//! Caller-facing simulation options.

use serde::{Deserialize, Serialize};

/// Difficulty as seen from the human-controlled ("player") team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Insane,
}

impl Difficulty {
    /// Power multiplier applied to the player team only.
    pub fn power_modifier(self) -> f32 {
        match self {
            Difficulty::Easy => 1.10,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.92,
            Difficulty::Insane => 0.85,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeriesFormat {
    #[serde(rename = "BO3", alias = "bo3")]
    #[default]
    Bo3,
    #[serde(rename = "BO5", alias = "bo5")]
    Bo5,
}

impl SeriesFormat {
    pub const fn wins_needed(self) -> u8 {
        match self {
            SeriesFormat::Bo3 => 2,
            SeriesFormat::Bo5 => 3,
        }
    }

    pub const fn max_sets(self) -> u8 {
        match self {
            SeriesFormat::Bo3 => 3,
            SeriesFormat::Bo5 => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SimOptions {
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Team the difficulty modifier applies to. `None` disables it.
    #[serde(default)]
    pub player_team: Option<String>,
    #[serde(default)]
    pub series_format: SeriesFormat,
    /// Champions already locked out before the first set.
    #[serde(default)]
    pub fearless_bans: Vec<String>,
}

impl SimOptions {
    pub fn power_modifier_for(&self, team: &str) -> f32 {
        match &self.player_team {
            Some(name) if name == team => self.difficulty.power_modifier(),
            _ => 1.0,
        }
    }
}
