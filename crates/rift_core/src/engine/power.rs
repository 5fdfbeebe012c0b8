//! Team power model
//!
//! Converts a lineup plus the current game state into a [`SidePower`] for
//! the combat resolver.
//!
//! ## Per-player contribution
//! ```text
//! (statBlend(phase)*0.55 + meta*0.25 + mastery*0.20)
//!   × championPhaseFactor × roleWeight(phase)
//!   × levelBonus × goldMultiplier(role)
//!   × dragons(class) × soul × baron × elder × grubs
//! ```
//! Dead players contribute 0.
//!
//! ## Team multipliers
//! synergy × same-damage penalty × difficulty × death penalty

use super::combat::SidePower;
use super::config::{EngineConfig, PowerConfig, StatWeights};
use super::lineup::{Lineup, Participant};
use super::scoring::ScoringModel;
use super::synergy;
use super::tick::state::GameState;
use crate::models::{ChampionClass, DamageType, DragonElement, GamePhase, PlayerStats, Role, Side};

const PHASES: [GamePhase; 3] = [GamePhase::Early, GamePhase::Mid, GamePhase::Late];

#[inline]
fn phase_index(phase: GamePhase) -> usize {
    match phase {
        GamePhase::Early => 0,
        GamePhase::Mid => 1,
        GamePhase::Late => 2,
    }
}

/// Element each class benefits most from.
pub fn dragon_affinity(class: ChampionClass) -> DragonElement {
    match class {
        ChampionClass::Fighter | ChampionClass::Marksman => DragonElement::Infernal,
        ChampionClass::Tank => DragonElement::Mountain,
        ChampionClass::Enchanter => DragonElement::Ocean,
        ChampionClass::Assassin => DragonElement::Cloud,
        ChampionClass::Mage => DragonElement::Hextech,
    }
}

pub struct PowerModel<'a> {
    config: &'a EngineConfig,
}

impl<'a> PowerModel<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    fn power(&self) -> &PowerConfig {
        &self.config.power
    }

    fn stat_weights(&self, phase: GamePhase) -> &StatWeights {
        match phase {
            GamePhase::Early => &self.power().early_stats,
            GamePhase::Mid => &self.power().mid_stats,
            GamePhase::Late => &self.power().late_stats,
        }
    }

    pub fn role_weight(&self, role: Role, phase: GamePhase) -> f32 {
        let weights = match phase {
            GamePhase::Early => &self.power().early_roles,
            GamePhase::Mid => &self.power().mid_roles,
            GamePhase::Late => &self.power().late_roles,
        };
        weights[role.index()]
    }

    /// Phase-weighted mean of detail stats (0-100).
    pub fn stat_blend(&self, stats: &PlayerStats, phase: GamePhase) -> f32 {
        let w = self.stat_weights(phase);
        let total = w.sum();
        if total <= 0.0 {
            return 0.0;
        }
        let blended = stats.laning as f32 * w.laning
            + stats.mechanics as f32 * w.mechanics
            + stats.growth as f32 * w.growth
            + stats.macro_play as f32 * w.macro_play
            + stats.teamfight as f32 * w.teamfight
            + stats.stability as f32 * w.stability;
        blended / total
    }

    /// State-independent part of a participant's contribution.
    pub fn base_contribution(&self, participant: &Participant, phase: GamePhase) -> f32 {
        let cfg = self.power();
        let scoring = ScoringModel::new(&self.config.draft);
        let player = &participant.player;
        let champion = &participant.champion;

        let mastery = scoring.mastery_score(player, &champion.name);
        let meta = scoring.meta_score(champion.tier, mastery);
        let blend = self.stat_blend(&player.stats(), phase) * cfg.stat_weight
            + meta * cfg.meta_weight
            + mastery * cfg.mastery_weight;

        let phase_factor = cfg.phase_stat_base + cfg.phase_stat_step * champion.phase.for_phase(phase) as f32;
        blend * phase_factor * self.role_weight(player.role, phase)
    }

    /// Base contributions for both lineups, `[side][role][phase]`.
    pub fn profile(&self, lineups: &[Lineup; 2]) -> PowerProfile {
        let mut base = [[[0.0; 3]; 5]; 2];
        for (s, lineup) in lineups.iter().enumerate() {
            for (r, participant) in lineup.participants.iter().enumerate() {
                for phase in PHASES {
                    base[s][r][phase_index(phase)] = self.base_contribution(participant, phase);
                }
            }
        }
        let synergy = lineups.each_ref().map(|l| synergy::team_multiplier(&l.champion_names()));
        let damage_types =
            lineups.each_ref().map(|l| l.participants.each_ref().map(|p| p.champion.damage_type));
        let classes = lineups.each_ref().map(|l| l.participants.each_ref().map(|p| p.champion.class));
        PowerProfile { base, synergy, damage_types, classes }
    }

    pub fn level_bonus(&self, level: u8) -> f32 {
        let cfg = self.power();
        let spikes = cfg.spike_levels.iter().filter(|&&l| level >= l).count() as f32;
        1.0 + cfg.per_level_bonus * level.saturating_sub(1) as f32 + cfg.spike_bonus * spikes
    }

    pub fn gold_multiplier(&self, role: Role, gold: u32) -> f32 {
        let cfg = self.power();
        let cap = if role == Role::Adc { cfg.adc_gold_cap } else { cfg.gold_cap };
        if gold >= cap {
            return 1.0 + cfg.gold_cap_bonus;
        }
        let bonus = cfg
            .gold_breakpoints
            .iter()
            .filter(|bp| gold >= bp.gold)
            .map(|bp| bp.bonus)
            .last()
            .unwrap_or(0.0);
        1.0 + bonus
    }

    pub fn dragon_multiplier(&self, class: ChampionClass, dragons: &[DragonElement]) -> f32 {
        let cfg = self.power();
        let affinity = dragon_affinity(class);
        dragons.iter().fold(1.0, |acc, &element| {
            let bonus = if element == affinity { cfg.dragon_primary_bonus } else { cfg.dragon_secondary_bonus };
            acc * (1.0 + bonus)
        })
    }

    /// `1 / (1 + k·d²)` for `d` dead players.
    pub fn death_penalty(&self, dead: usize) -> f32 {
        let d = dead as f32;
        1.0 / (1.0 + self.power().death_penalty_coeff * d * d)
    }

    pub fn damage_penalty(&self, types: &[DamageType; 5], minute: u32) -> f32 {
        let cfg = self.power();
        if minute < cfg.same_damage_after_minute {
            return 1.0;
        }
        let physical = types.iter().filter(|t| **t == DamageType::Physical).count();
        let magic = types.iter().filter(|t| **t == DamageType::Magic).count();
        if physical.max(magic) >= cfg.same_damage_threshold {
            cfg.same_damage_penalty
        } else {
            1.0
        }
    }

    /// Power of `side` at `second`.
    pub fn side_power(
        &self,
        profile: &PowerProfile,
        state: &GameState,
        side: Side,
        second: u32,
        modifier: f32,
    ) -> SidePower {
        let cfg = self.power();
        let minute = second / 60;
        let phase = GamePhase::from_minute(minute);
        let s = side.index();
        let side_state = state.side(side);

        let mut objective = 1.0 + cfg.grub_bonus_per_stack * side_state.grubs as f32;
        if state.has_soul(side) {
            objective *= cfg.soul_multiplier;
        }
        if state.has_baron(side, second) {
            objective *= cfg.baron_multiplier;
        }
        if state.has_elder(side, second) {
            objective *= cfg.elder_multiplier;
        }

        let mut total = 0.0;
        let mut alive = 0;
        for role in Role::ALL {
            let r = role.index();
            let runtime = &side_state.players[r];
            if !runtime.is_alive(second) {
                continue;
            }
            alive += 1;
            total += profile.base[s][r][phase_index(phase)]
                * self.level_bonus(runtime.level)
                * self.gold_multiplier(role, runtime.gold)
                * self.dragon_multiplier(profile.classes[s][r], &side_state.dragons)
                * objective;
        }

        let team = profile.synergy[s]
            * self.damage_penalty(&profile.damage_types[s], minute)
            * modifier
            * self.death_penalty(5 - alive);
        SidePower::new(total * team, alive)
    }
}

/// Precomputed per-game inputs of the power model.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerProfile {
    /// `[side][role][phase]`
    pub base: [[[f32; 3]; 5]; 2],
    pub synergy: [f32; 2],
    pub damage_types: [[DamageType; 5]; 2],
    pub classes: [[ChampionClass; 5]; 2],
}
