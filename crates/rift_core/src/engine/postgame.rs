//! Post-game evaluation: Player of the Game (POG) and Player of the Series
//! (POS).

use std::collections::HashMap;

use super::config::PostGameConfig;
use super::lineup::Lineup;
use super::tick::GameState;
use crate::models::{MvpAward, PlayerLine, PlayerRef, Role, Side};

pub struct PostGameEvaluator<'a> {
    config: &'a PostGameConfig,
}

impl<'a> PostGameEvaluator<'a> {
    pub fn new(config: &'a PostGameConfig) -> Self {
        Self { config }
    }

    /// `kda_weight*(k+a)/max(1,d) + dpm/dpm_divisor + gold/gold_divisor
    /// + assist_weight*a`, times the role bonus. Always finite.
    pub fn score(&self, line: &PlayerLine, duration_seconds: u32) -> f32 {
        let cfg = self.config;
        let minutes = (duration_seconds as f32 / 60.0).max(1.0);
        let kda = (line.kills + line.assists) as f32 / line.deaths.max(1) as f32;
        let dpm = line.damage as f32 / minutes;
        let raw = cfg.kda_weight * kda
            + dpm / cfg.dpm_divisor
            + line.gold as f32 / cfg.gold_divisor
            + cfg.assist_weight * line.assists as f32;
        raw * self.role_bonus(line.role)
    }

    pub fn role_bonus(&self, role: Role) -> f32 {
        match role {
            Role::Jungle => self.config.jungle_bonus,
            Role::Support => self.config.support_bonus,
            _ => 1.0,
        }
    }

    /// Best player on the winning side. Ties go to the earlier role.
    pub fn player_of_the_game(
        &self,
        lines: &[PlayerLine],
        winner_team: &str,
        duration_seconds: u32,
    ) -> Option<MvpAward> {
        let mut best: Option<MvpAward> = None;
        for line in lines.iter().filter(|l| l.team == winner_team) {
            let score = self.score(line, duration_seconds);
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(MvpAward {
                    player: line.name.clone(),
                    team: line.team.clone(),
                    role: line.role,
                    champion: Some(line.champion.clone()),
                    score,
                });
            }
        }
        best
    }
}

/// End-of-game lines for one side.
pub fn player_lines(lineup: &Lineup, state: &GameState, side: Side) -> Vec<PlayerLine> {
    Role::ALL
        .iter()
        .map(|&role| {
            let participant = lineup.participant(role);
            let runtime = state.player(PlayerRef::new(side, role));
            PlayerLine {
                name: participant.player.name.clone(),
                team: lineup.team.clone(),
                role,
                champion: participant.champion.name.clone(),
                kills: runtime.kills,
                deaths: runtime.deaths,
                assists: runtime.assists,
                damage: runtime.damage,
                gold: runtime.gold,
                level: runtime.level,
            }
        })
        .collect()
}

/// Accumulates per-set POG scores of every winning-side player across a
/// series.
#[derive(Debug, Default, Clone)]
pub struct SeriesTally {
    scores: HashMap<(String, String), (Role, f32)>,
    order: Vec<(String, String)>,
}

impl SeriesTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every winning-side player's score of one set.
    pub fn record_set(&mut self, evaluator: &PostGameEvaluator<'_>, lines: &[PlayerLine], winner_team: &str, duration_seconds: u32) {
        for line in lines.iter().filter(|l| l.team == winner_team) {
            let key = (line.team.clone(), line.name.clone());
            let score = evaluator.score(line, duration_seconds);
            match self.scores.get_mut(&key) {
                Some(entry) => entry.1 += score,
                None => {
                    self.order.push(key.clone());
                    self.scores.insert(key, (line.role, score));
                }
            }
        }
    }

    /// Highest summed score among players of `series_winner`.
    pub fn player_of_the_series(&self, series_winner: &str) -> Option<MvpAward> {
        let mut best: Option<MvpAward> = None;
        for key in self.order.iter().filter(|(team, _)| team == series_winner) {
            let Some(&(role, score)) = self.scores.get(key) else { continue };
            if best.as_ref().map_or(true, |b| score > b.score) {
                best = Some(MvpAward { player: key.1.clone(), team: key.0.clone(), role, champion: None, score });
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(name: &str, team: &str, role: Role, k: u32, d: u32, a: u32) -> PlayerLine {
        PlayerLine {
            name: name.to_string(),
            team: team.to_string(),
            role,
            champion: "Ahri".to_string(),
            kills: k,
            deaths: d,
            assists: a,
            damage: 20_000,
            gold: 12_000,
            level: 16,
        }
    }

    #[test]
    fn test_zero_deaths_is_finite() {
        let cfg = PostGameConfig::default();
        let eval = PostGameEvaluator::new(&cfg);
        let score = eval.score(&line("Faker", "T1", Role::Mid, 10, 0, 5), 0);
        assert!(score.is_finite());
        // 3*15 + 20000/1/100 + 12 + 5
        assert!((score - (45.0 + 200.0 + 12.0 + 5.0)).abs() < 1e-3);
    }

    #[test]
    fn test_role_bonus_applies_to_jungle_and_support() {
        let cfg = PostGameConfig::default();
        let eval = PostGameEvaluator::new(&cfg);
        let mid = eval.score(&line("A", "T1", Role::Mid, 2, 2, 8), 1800);
        let sup = eval.score(&line("B", "T1", Role::Support, 2, 2, 8), 1800);
        assert!((sup / mid - 1.15).abs() < 1e-4);

        let alt = PostGameConfig::alternate();
        let eval = PostGameEvaluator::new(&alt);
        assert!((eval.role_bonus(Role::Support) - 1.25).abs() < 1e-6);
        assert!((eval.role_bonus(Role::Jungle) - 1.10).abs() < 1e-6);
    }

    #[test]
    fn test_pog_only_from_winners() {
        let cfg = PostGameConfig::default();
        let eval = PostGameEvaluator::new(&cfg);
        let lines = vec![
            line("Loser Star", "GEN", Role::Adc, 20, 0, 10),
            line("Zeus", "T1", Role::Top, 3, 1, 4),
            line("Gumayusi", "T1", Role::Adc, 6, 1, 5),
        ];
        let pog = eval.player_of_the_game(&lines, "T1", 1800).unwrap();
        assert_eq!(pog.player, "Gumayusi");
        assert_eq!(pog.champion.as_deref(), Some("Ahri"));
        assert!(eval.player_of_the_game(&lines, "Nobody", 1800).is_none());
    }

    #[test]
    fn test_series_tally_sums_sets() {
        let cfg = PostGameConfig::default();
        let eval = PostGameEvaluator::new(&cfg);
        let mut tally = SeriesTally::new();
        // Oner is POG-worthy twice, Faker once with a bigger single game
        tally.record_set(&eval, &[line("Oner", "T1", Role::Jungle, 5, 1, 10), line("Faker", "T1", Role::Mid, 4, 2, 3)], "T1", 1800);
        tally.record_set(&eval, &[line("Oner", "T1", Role::Jungle, 5, 1, 10), line("Faker", "T1", Role::Mid, 4, 2, 3)], "T1", 1800);
        tally.record_set(&eval, &[line("Chovy", "GEN", Role::Mid, 12, 0, 4)], "GEN", 1800);
        let pos = tally.player_of_the_series("T1").unwrap();
        assert_eq!(pos.player, "Oner");
        assert!(pos.champion.is_none());
        assert!(pos.score > eval.score(&line("Oner", "T1", Role::Jungle, 5, 1, 10), 1800));
    }
}
