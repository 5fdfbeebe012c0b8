//! POG / POS scoring configuration

use serde::{Deserialize, Serialize};

/// MVP 점수 공식 파라미터
///
/// score = kda_weight * (k + a) / max(1, d) + dpm / dpm_divisor
///       + gold / gold_divisor + assist_weight * a
/// then multiplied by the role bonus for junglers and supports.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostGameConfig {
    pub kda_weight: f32,
    pub dpm_divisor: f32,
    pub gold_divisor: f32,
    pub assist_weight: f32,
    pub jungle_bonus: f32,
    pub support_bonus: f32,
}

impl Default for PostGameConfig {
    fn default() -> Self {
        Self {
            kda_weight: 3.0,
            dpm_divisor: 100.0,
            gold_divisor: 1000.0,
            assist_weight: 1.0,
            jungle_bonus: 1.15,
            support_bonus: 1.15,
        }
    }
}

impl PostGameConfig {
    /// Second formula found in older balance sheets: lighter jungle bonus,
    /// heavier support bonus. Not the default; see DESIGN.md.
    pub fn alternate() -> Self {
        Self { jungle_bonus: 1.10, support_bonus: 1.25, ..Self::default() }
    }
}
