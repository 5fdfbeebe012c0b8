//! Power model configuration

use serde::{Deserialize, Serialize};

/// Weights over the six player stat axes for one game phase.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatWeights {
    pub laning: f32,
    pub mechanics: f32,
    pub growth: f32,
    pub macro_play: f32,
    pub teamfight: f32,
    pub stability: f32,
}

impl StatWeights {
    pub fn sum(&self) -> f32 {
        self.laning + self.mechanics + self.growth + self.macro_play + self.teamfight + self.stability
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoldBreakpoint {
    pub gold: u32,
    pub bonus: f32,
}

/// 전투력 모델 파라미터
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PowerConfig {
    // === Base blend ===
    pub stat_weight: f32,
    pub meta_weight: f32,
    pub mastery_weight: f32,

    // === Phase weights ===
    pub early_stats: StatWeights,
    pub mid_stats: StatWeights,
    pub late_stats: StatWeights,
    /// Role weights in `Role::ALL` order
    pub early_roles: [f32; 5],
    pub mid_roles: [f32; 5],
    pub late_roles: [f32; 5],

    // === Champion phase stat ===
    /// factor = base + step * phase_stat (기본: 0.85 + 0.03 * stat)
    pub phase_stat_base: f32,
    pub phase_stat_step: f32,

    // === Level ===
    pub per_level_bonus: f32,
    pub spike_bonus: f32,
    pub spike_levels: [u8; 3],

    // === Gold ===
    /// Ascending; highest matching breakpoint wins.
    pub gold_breakpoints: Vec<GoldBreakpoint>,
    pub gold_cap: u32,
    pub adc_gold_cap: u32,
    pub gold_cap_bonus: f32,

    // === Objectives ===
    /// Per dragon stack when the element suits the champion class
    pub dragon_primary_bonus: f32,
    /// Per dragon stack otherwise
    pub dragon_secondary_bonus: f32,
    pub soul_multiplier: f32,
    pub baron_multiplier: f32,
    pub elder_multiplier: f32,
    pub grub_bonus_per_stack: f32,

    // === Team composition ===
    pub same_damage_threshold: usize,
    pub same_damage_penalty: f32,
    pub same_damage_after_minute: u32,

    /// penalty = 1 / (1 + coeff * dead²)
    pub death_penalty_coeff: f32,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            stat_weight: 0.55,
            meta_weight: 0.25,
            mastery_weight: 0.20,

            early_stats: StatWeights {
                laning: 0.35,
                mechanics: 0.25,
                growth: 0.10,
                macro_play: 0.15,
                teamfight: 0.05,
                stability: 0.10,
            },
            mid_stats: StatWeights {
                laning: 0.15,
                mechanics: 0.25,
                growth: 0.15,
                macro_play: 0.20,
                teamfight: 0.15,
                stability: 0.10,
            },
            late_stats: StatWeights {
                laning: 0.05,
                mechanics: 0.20,
                growth: 0.10,
                macro_play: 0.20,
                teamfight: 0.30,
                stability: 0.15,
            },
            // TOP, JGL, MID, ADC, SUP
            early_roles: [1.0, 1.15, 1.10, 0.90, 0.95],
            mid_roles: [1.0, 1.05, 1.05, 1.0, 0.95],
            late_roles: [1.0, 0.95, 1.05, 1.20, 0.90],

            phase_stat_base: 0.85,
            phase_stat_step: 0.03,

            per_level_bonus: 0.01,
            spike_bonus: 0.02,
            spike_levels: [6, 11, 16],

            gold_breakpoints: Self::canonical_gold_curve(),
            gold_cap: 18_000,
            adc_gold_cap: 20_000,
            gold_cap_bonus: 0.20,

            dragon_primary_bonus: 0.02,
            dragon_secondary_bonus: 0.01,
            soul_multiplier: 1.08,
            baron_multiplier: 1.15,
            elder_multiplier: 1.25,
            grub_bonus_per_stack: 0.01,

            same_damage_threshold: 4,
            same_damage_penalty: 0.92,
            same_damage_after_minute: 15,

            death_penalty_coeff: 0.08,
        }
    }
}

impl PowerConfig {
    pub fn canonical_gold_curve() -> Vec<GoldBreakpoint> {
        [(3_500, 0.03), (6_500, 0.06), (9_500, 0.10), (12_500, 0.14), (15_500, 0.17)]
            .into_iter()
            .map(|(gold, bonus)| GoldBreakpoint { gold, bonus })
            .collect()
    }

    /// Flatter curve with later breakpoints. Kept selectable because two
    /// balance sheets disagree; see DESIGN.md.
    pub fn alternate_gold_curve() -> Vec<GoldBreakpoint> {
        [(4_000, 0.03), (8_000, 0.07), (12_000, 0.11), (16_000, 0.15)]
            .into_iter()
            .map(|(gold, bonus)| GoldBreakpoint { gold, bonus })
            .collect()
    }
}
