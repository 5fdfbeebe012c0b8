//! Draft / champion scoring configuration

use serde::{Deserialize, Serialize};

/// 드래프트 점수 파라미터
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DraftConfig {
    // === Score blend ===
    /// 선수 overall 가중치 (기본: 0.40)
    pub overall_weight: f32,
    /// 메타(티어) 점수 가중치 (기본: 0.35)
    pub meta_weight: f32,
    /// 숙련도 점수 가중치 (기본: 0.25)
    pub mastery_weight: f32,

    // === Meta ===
    /// Meta score for tiers 1..=5
    pub tier_meta: [f32; 5],
    /// Mastery needed to treat a champion one tier higher (기본: 70)
    pub one_tier_mastery: f32,
    /// Mastery needed to treat a champion two tiers higher (기본: 85)
    pub two_tier_mastery: f32,

    // === Mastery ===
    /// Score for champions the player has never played (기본: 40)
    pub unplayed_mastery: f32,
    /// Weight of `ln(1 + games)` bonus (기본: 5.0)
    pub games_log_weight: f32,

    // === Counters ===
    /// Per enemy pick this champion counters (기본: 1.10)
    pub counter_bonus: f32,
    /// Per enemy pick that counters this champion (기본: 0.92)
    pub countered_penalty: f32,

    // === Bans ===
    /// Ban that removes a counter to our own picks (기본: 1.30)
    pub ban_protect_multiplier: f32,
    /// Ban that breaks an opponent combo (기본: 1.25)
    pub ban_combo_multiplier: f32,
    /// Candidates considered per ban/pick step (기본: 3)
    pub candidates_per_step: usize,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            overall_weight: 0.40,
            meta_weight: 0.35,
            mastery_weight: 0.25,

            tier_meta: [100.0, 88.0, 76.0, 64.0, 52.0],
            one_tier_mastery: 70.0,
            two_tier_mastery: 85.0,

            unplayed_mastery: 40.0,
            games_log_weight: 5.0,

            counter_bonus: 1.10,
            countered_penalty: 0.92,

            ban_protect_multiplier: 1.30,
            ban_combo_multiplier: 1.25,
            candidates_per_step: 3,
        }
    }
}
