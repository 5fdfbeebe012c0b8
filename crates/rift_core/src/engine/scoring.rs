//! Champion suitability scoring
//!
//! Used by the draft (which champion to ban / pick) and by the power model
//! (meta and mastery components of a player's contribution).
//!
//! All functions are pure - they take player and champion data as input and
//! return scores, so they are unit-testable without a draft in progress.

use super::config::DraftConfig;
use super::synergy;
use crate::models::{Champion, Player};

#[derive(Debug, Clone, Copy)]
pub struct ScoringModel<'a> {
    config: &'a DraftConfig,
}

impl<'a> ScoringModel<'a> {
    pub fn new(config: &'a DraftConfig) -> Self {
        Self { config }
    }

    /// Winrate / KDA blend plus a logarithmic experience bonus.
    ///
    /// A champion the player has never played scores `unplayed_mastery`.
    pub fn mastery_score(&self, player: &Player, champion: &str) -> f32 {
        let Some(record) = player.mastery.get(champion) else {
            return self.config.unplayed_mastery;
        };
        let winrate = record.winrate.clamp(0.0, 1.0) * 100.0;
        let kda = (record.kda.max(0.0) / 5.0).min(1.0) * 100.0;
        let experience = self.config.games_log_weight * (1.0 + record.games as f32).ln();
        winrate * 0.6 + kda * 0.4 + experience
    }

    /// Tier-derived score; strong mastery lifts the effective tier.
    pub fn meta_score(&self, tier: u8, mastery: f32) -> f32 {
        let boost = if mastery >= self.config.two_tier_mastery {
            2
        } else if mastery >= self.config.one_tier_mastery {
            1
        } else {
            0
        };
        let effective = tier.clamp(1, 5).saturating_sub(boost).max(1);
        self.config.tier_meta[(effective - 1) as usize]
    }

    /// Score without draft context.
    pub fn base_score(&self, player: &Player, champion: &Champion) -> f32 {
        let mastery = self.mastery_score(player, &champion.name);
        let meta = self.meta_score(champion.tier, mastery);
        player.overall as f32 * self.config.overall_weight
            + meta * self.config.meta_weight
            + mastery * self.config.mastery_weight
    }

    /// Score in draft context: combos with `allies`, counters vs `enemies`.
    pub fn score(
        &self,
        player: &Player,
        champion: &Champion,
        allies: &[&Champion],
        enemies: &[&Champion],
    ) -> f32 {
        let ally_names: Vec<&str> = allies.iter().map(|c| c.name.as_str()).collect();
        let synergy = synergy::completion_multiplier(&ally_names, &champion.name);
        self.base_score(player, champion) * synergy * self.counter_multiplier(champion, enemies)
    }

    pub fn counter_multiplier(&self, champion: &Champion, enemies: &[&Champion]) -> f32 {
        enemies.iter().fold(1.0, |acc, enemy| {
            let mut m = acc;
            if champion.counters(&enemy.name) {
                m *= self.config.counter_bonus;
            }
            if enemy.counters(&champion.name) {
                m *= self.config.countered_penalty;
            }
            m
        })
    }
}
