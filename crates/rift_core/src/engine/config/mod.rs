//! # Engine Configuration Module
//!
//! 모든 튜닝 상수를 중앙에서 관리하는 설정 시스템.
//!
//! ## 목적
//! - 밸런스 조정 용이
//! - 프리셋 지원 (Standard, HighTempo, LowVariance)
//! - JSON / YAML 파일에서 부분 override (누락 필드는 기본값)
//!
//! ## 사용법
//! ```rust
//! use rift_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let fast = EngineConfig::high_tempo();
//! assert!(config.validate().is_ok() && fast.validate().is_ok());
//! ```

mod draft_config;
mod postgame_config;
mod power_config;
mod tick_config;

pub use draft_config::DraftConfig;
pub use postgame_config::PostGameConfig;
pub use power_config::{GoldBreakpoint, PowerConfig, StatWeights};
pub use tick_config::TickConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MatchError, Result};

/// Hard ceiling for `TickConfig::max_minutes`.
pub const MINUTE_CAP: u32 = 70;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub draft: DraftConfig,
    #[serde(default)]
    pub power: PowerConfig,
    #[serde(default)]
    pub tick: TickConfig,
    #[serde(default)]
    pub postgame: PostGameConfig,
}

impl EngineConfig {
    pub fn standard() -> Self {
        Self::default()
    }

    /// 교전 빈도와 푸시 확률을 높인 프리셋 (짧은 경기)
    pub fn high_tempo() -> Self {
        let mut cfg = Self::default();
        cfg.tick.skirmish_base = [0.35, 0.45, 0.55];
        cfg.tick.outer_chance = 0.45;
        cfg.tick.inner_chance = 0.40;
        cfg.tick.inhibitor_turret_chance = 0.35;
        cfg.tick.nexus_chance = 0.55;
        cfg
    }

    /// 전력 차이가 결과에 더 강하게 반영되는 프리셋
    pub fn low_variance() -> Self {
        let mut cfg = Self::default();
        cfg.tick.combat_tilt = 0.30;
        cfg.tick.counter_kill_base = 0.15;
        cfg.tick.flash_escape_chance = 0.15;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse by file extension (`.yaml`/`.yml` → YAML, otherwise JSON).
    pub fn from_str_with_path(content: &str, path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml(content),
            _ => Self::from_json(content),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let tick = &self.tick;
        if tick.max_minutes == 0 || tick.max_minutes > MINUTE_CAP {
            return Err(invalid(format!("tick.max_minutes must be 1..={MINUTE_CAP}, got {}", tick.max_minutes)));
        }
        if tick.max_level == 0 {
            return Err(invalid("tick.max_level must be positive"));
        }
        // NaN slips past every ordered comparison below
        for (name, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(invalid(format!("{name} must be a finite number, got {value}")));
            }
        }

        let mut probabilities = vec![
            ("tick.skirmish_cap", tick.skirmish_cap),
            ("tick.flash_escape_chance", tick.flash_escape_chance),
            ("tick.counter_kill_base", tick.counter_kill_base),
            ("tick.plate_chance", tick.plate_chance),
            ("tick.outer_chance_plated", tick.outer_chance_plated),
            ("tick.outer_chance", tick.outer_chance),
            ("tick.inner_chance", tick.inner_chance),
            ("tick.inhibitor_turret_chance", tick.inhibitor_turret_chance),
            ("tick.inhibitor_chance", tick.inhibitor_chance),
            ("tick.nexus_chance", tick.nexus_chance),
        ];
        probabilities.extend(tick.skirmish_base.iter().map(|&p| ("tick.skirmish_base", p)));
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(invalid(format!("{name} must be within 0..=1, got {p}")));
            }
        }

        if tick.kill_count_weights.iter().sum::<f32>() <= 0.0 {
            return Err(invalid("tick.kill_count_weights must not all be zero"));
        }
        if tick.killer_weights.iter().sum::<f32>() <= 0.0 || tick.victim_weights.iter().sum::<f32>() <= 0.0 {
            return Err(invalid("tick killer/victim weights must not all be zero"));
        }
        if !(tick.nexus_chip_min > 0.0 && tick.nexus_chip_min <= tick.nexus_chip_max) {
            return Err(invalid("tick.nexus_chip_min/max must satisfy 0 < min <= max"));
        }
        if !(tick.push_power_min > 0.0 && tick.push_power_min <= tick.push_power_max) {
            return Err(invalid("tick.push_power_min/max must satisfy 0 < min <= max"));
        }

        let power = &self.power;
        for (name, weights) in
            [("early", &power.early_stats), ("mid", &power.mid_stats), ("late", &power.late_stats)]
        {
            if weights.sum() <= 0.0 {
                return Err(invalid(format!("power.{name}_stats must have a positive sum")));
            }
        }
        if power.gold_breakpoints.windows(2).any(|w| w[0].gold >= w[1].gold) {
            return Err(invalid("power.gold_breakpoints must be strictly ascending"));
        }
        if power.death_penalty_coeff < 0.0 {
            return Err(invalid("power.death_penalty_coeff must be non-negative"));
        }

        let draft = &self.draft;
        if draft.candidates_per_step == 0 {
            return Err(invalid("draft.candidates_per_step must be at least 1"));
        }
        if draft.overall_weight < 0.0 || draft.meta_weight < 0.0 || draft.mastery_weight < 0.0 {
            return Err(invalid("draft score weights must be non-negative"));
        }

        let pg = &self.postgame;
        if pg.dpm_divisor <= 0.0 || pg.gold_divisor <= 0.0 {
            return Err(invalid("postgame divisors must be positive"));
        }
        Ok(())
    }

    fn float_fields(&self) -> Vec<(&'static str, f32)> {
        let (t, p, d, pg) = (&self.tick, &self.power, &self.draft, &self.postgame);
        let mut fields = vec![
            ("tick.combat_tilt", t.combat_tilt),
            ("tick.skirmish_buff_bonus", t.skirmish_buff_bonus),
            ("tick.skirmish_dragon_bonus", t.skirmish_dragon_bonus),
            ("tick.respawn_base", t.respawn_base),
            ("tick.respawn_per_level", t.respawn_per_level),
            ("tick.respawn_late_per_minute", t.respawn_late_per_minute),
            ("tick.nexus_chip_min", t.nexus_chip_min),
            ("tick.nexus_chip_max", t.nexus_chip_max),
            ("tick.push_power_min", t.push_power_min),
            ("tick.push_power_max", t.push_power_max),
            ("tick.baron_push_bonus", t.baron_push_bonus),
            ("tick.elder_push_bonus", t.elder_push_bonus),
            ("tick.herald_push_bonus", t.herald_push_bonus),
            ("tick.open_inhibitor_push_bonus", t.open_inhibitor_push_bonus),
            ("power.stat_weight", p.stat_weight),
            ("power.meta_weight", p.meta_weight),
            ("power.mastery_weight", p.mastery_weight),
            ("power.phase_stat_base", p.phase_stat_base),
            ("power.phase_stat_step", p.phase_stat_step),
            ("power.per_level_bonus", p.per_level_bonus),
            ("power.spike_bonus", p.spike_bonus),
            ("power.gold_cap_bonus", p.gold_cap_bonus),
            ("power.dragon_primary_bonus", p.dragon_primary_bonus),
            ("power.dragon_secondary_bonus", p.dragon_secondary_bonus),
            ("power.soul_multiplier", p.soul_multiplier),
            ("power.baron_multiplier", p.baron_multiplier),
            ("power.elder_multiplier", p.elder_multiplier),
            ("power.grub_bonus_per_stack", p.grub_bonus_per_stack),
            ("power.same_damage_penalty", p.same_damage_penalty),
            ("power.death_penalty_coeff", p.death_penalty_coeff),
            ("draft.overall_weight", d.overall_weight),
            ("draft.meta_weight", d.meta_weight),
            ("draft.mastery_weight", d.mastery_weight),
            ("draft.one_tier_mastery", d.one_tier_mastery),
            ("draft.two_tier_mastery", d.two_tier_mastery),
            ("draft.unplayed_mastery", d.unplayed_mastery),
            ("draft.games_log_weight", d.games_log_weight),
            ("draft.counter_bonus", d.counter_bonus),
            ("draft.countered_penalty", d.countered_penalty),
            ("draft.ban_protect_multiplier", d.ban_protect_multiplier),
            ("draft.ban_combo_multiplier", d.ban_combo_multiplier),
            ("postgame.kda_weight", pg.kda_weight),
            ("postgame.dpm_divisor", pg.dpm_divisor),
            ("postgame.gold_divisor", pg.gold_divisor),
            ("postgame.assist_weight", pg.assist_weight),
            ("postgame.jungle_bonus", pg.jungle_bonus),
            ("postgame.support_bonus", pg.support_bonus),
        ];
        let arrays: [(&'static str, &[f32]); 10] = [
            ("tick.role_gold_weights", &t.role_gold_weights),
            ("tick.role_xp_weights", &t.role_xp_weights),
            ("tick.kill_count_weights", &t.kill_count_weights),
            ("tick.killer_weights", &t.killer_weights),
            ("tick.assist_weights", &t.assist_weights),
            ("tick.victim_weights", &t.victim_weights),
            ("power.early_roles", &p.early_roles),
            ("power.mid_roles", &p.mid_roles),
            ("power.late_roles", &p.late_roles),
            ("draft.tier_meta", &d.tier_meta),
        ];
        for (name, values) in arrays {
            fields.extend(values.iter().map(|&v| (name, v)));
        }
        for (name, w) in
            [("power.early_stats", &p.early_stats), ("power.mid_stats", &p.mid_stats), ("power.late_stats", &p.late_stats)]
        {
            fields.extend([w.laning, w.mechanics, w.growth, w.macro_play, w.teamfight, w.stability].map(|v| (name, v)));
        }
        fields.extend(p.gold_breakpoints.iter().map(|b| ("power.gold_breakpoints.bonus", b.bonus)));
        fields
    }
}

fn invalid(msg: impl Into<String>) -> MatchError {
    MatchError::InvalidConfig(msg.into())
}

// ========== Tests ==========
