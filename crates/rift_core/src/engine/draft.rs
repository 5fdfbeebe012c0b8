//! # Draft Simulator
//!
//! 20-step ban/pick sequence:
//!
//! | Phase | Order |
//! |---|---|
//! | Ban 1 | B R B R B R |
//! | Pick 1 | B R R B B R |
//! | Ban 2 | R B R B |
//! | Pick 2 | R B B R |
//!
//! Bans target the opponent's best remaining options; picks take the best
//! role for the picking side. Both draw weighted-randomly among the top
//! candidates so drafts vary between sets. A step without candidates is
//! logged and skipped, which leaves the draft incomplete.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use super::config::DraftConfig;
use super::scoring::ScoringModel;
use super::selection::weighted_index;
use super::synergy;
use crate::models::{Champion, ChampionCatalog, Player, Role, Side, TeamRoster};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftAction {
    Ban,
    Pick,
}

pub const DRAFT_ORDER: [(DraftAction, Side); 20] = {
    use DraftAction::{Ban, Pick};
    use Side::{Blue as B, Red as R};
    [
        (Ban, B), (Ban, R), (Ban, B), (Ban, R), (Ban, B), (Ban, R),
        (Pick, B), (Pick, R), (Pick, R), (Pick, B), (Pick, B), (Pick, R),
        (Ban, R), (Ban, B), (Ban, R), (Ban, B),
        (Pick, R), (Pick, B), (Pick, B), (Pick, R),
    ]
};

/// Bans, picks and locked-out champions of a draft in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftState {
    pub bans: [Vec<String>; 2],
    /// `[side][role]`
    pub picks: [[Option<Champion>; 5]; 2],
    /// Banned, picked, or locked out before the draft (fearless).
    pub unavailable: HashSet<String>,
}

impl DraftState {
    pub fn new(locked: impl IntoIterator<Item = String>) -> Self {
        Self { unavailable: locked.into_iter().collect(), ..Default::default() }
    }

    #[inline]
    pub fn is_available(&self, champion: &str) -> bool {
        !self.unavailable.contains(champion)
    }

    pub fn remaining_roles(&self, side: Side) -> Vec<Role> {
        Role::ALL.into_iter().filter(|r| self.picks[side.index()][r.index()].is_none()).collect()
    }

    pub fn picked(&self, side: Side) -> Vec<&Champion> {
        self.picks[side.index()].iter().flatten().collect()
    }

    pub fn ban(&mut self, side: Side, champion: &str) {
        self.unavailable.insert(champion.to_string());
        self.bans[side.index()].push(champion.to_string());
    }

    pub fn pick(&mut self, side: Side, role: Role, champion: Champion) {
        self.unavailable.insert(champion.name.clone());
        self.picks[side.index()][role.index()] = Some(champion);
    }

    pub fn is_complete(&self) -> bool {
        self.picks.iter().all(|side| side.iter().all(Option::is_some))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOutcome {
    /// `[side][role]`, `None` where no champion could be picked.
    pub picks: [[Option<Champion>; 5]; 2],
    pub bans: [Vec<String>; 2],
    pub log: Vec<String>,
    /// Every champion banned or picked, in draft order.
    pub used: Vec<String>,
    pub complete: bool,
}

impl DraftOutcome {
    pub fn pick_names(&self, side: Side) -> Vec<String> {
        self.picks[side.index()].iter().flatten().map(|c| c.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'c> {
    champion: &'c Champion,
    role: Role,
    score: f32,
}

fn by_score_desc(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.champion.name.cmp(&b.champion.name))
}

pub struct DraftSimulator<'a> {
    catalog: &'a ChampionCatalog,
    config: &'a DraftConfig,
}

impl<'a> DraftSimulator<'a> {
    pub fn new(catalog: &'a ChampionCatalog, config: &'a DraftConfig) -> Self {
        Self { catalog, config }
    }

    /// Run the full sequence. `rosters[0]` drafts blue.
    ///
    /// `locked` champions (fearless list) can be neither banned nor picked.
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        rosters: [&TeamRoster; 2],
        locked: &[String],
    ) -> DraftOutcome {
        let mut state = DraftState::new(locked.iter().cloned());
        let mut log = Vec::with_capacity(DRAFT_ORDER.len());
        let mut used = Vec::with_capacity(DRAFT_ORDER.len());

        for (i, &(action, side)) in DRAFT_ORDER.iter().enumerate() {
            let step = i + 1;
            let team = &rosters[side.index()].name;
            match action {
                DraftAction::Ban => match self.choose_ban(rng, &state, rosters, side) {
                    Some(champion) => {
                        log.push(format!("[Ban {step:02}] {} ({team}) bans {}", side.label(), champion.name));
                        used.push(champion.name.clone());
                        state.ban(side, &champion.name);
                    }
                    None => {
                        log.push(format!("[Ban {step:02}] {} ({team}) has no ban target - skipped", side.label()));
                    }
                },
                DraftAction::Pick => match self.choose_pick(rng, &state, rosters[side.index()], side) {
                    Some((role, champion)) => {
                        let player = &rosters[side.index()].player(role).name;
                        log.push(format!(
                            "[Pick {step:02}] {} ({team}) {player} [{role}] picks {}",
                            side.label(),
                            champion.name
                        ));
                        used.push(champion.name.clone());
                        state.pick(side, role, champion.clone());
                    }
                    None => {
                        log.push(format!(
                            "[Pick {step:02}] {} ({team}) has no available champion - slot left empty",
                            side.label()
                        ));
                    }
                },
            }
        }

        let complete = state.is_complete();
        if complete {
            log::debug!("Draft complete: {} champions used", used.len());
        } else {
            log::warn!(
                "Draft incomplete for {} vs {} ({} locked champions)",
                rosters[0].name,
                rosters[1].name,
                locked.len()
            );
        }

        DraftOutcome { picks: state.picks, bans: state.bans, log, used, complete }
    }

    fn scoring(&self) -> ScoringModel<'a> {
        ScoringModel::new(self.config)
    }

    /// Top-scored available champions of `role` for `player` on `side`.
    fn top_candidates(&self, state: &DraftState, player: &Player, role: Role, side: Side) -> Vec<Candidate<'a>> {
        let scoring = self.scoring();
        let allies = state.picked(side);
        let enemies = state.picked(side.opponent());
        let catalog: &'a ChampionCatalog = self.catalog;

        let mut candidates: Vec<Candidate<'a>> = catalog
            .by_role(role)
            .filter(|c| state.is_available(&c.name))
            .map(|champion| Candidate {
                champion,
                role,
                score: scoring.score(player, champion, &allies, &enemies),
            })
            .collect();
        candidates.sort_by(by_score_desc);
        candidates.truncate(self.config.candidates_per_step);
        candidates
    }

    /// Ban from the opponent's perspective: their best remaining options.
    fn choose_ban<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        state: &DraftState,
        rosters: [&TeamRoster; 2],
        side: Side,
    ) -> Option<&'a Champion> {
        let opponent = side.opponent();
        let roster = rosters[opponent.index()];

        let mut pool: Vec<Candidate<'a>> = state
            .remaining_roles(opponent)
            .into_iter()
            .flat_map(|role| self.top_candidates(state, roster.player(role), role, opponent))
            .collect();
        pool.sort_by(by_score_desc);
        pool.truncate(self.config.candidates_per_step);
        if pool.is_empty() {
            return None;
        }

        let own_picks = state.picked(side);
        let their_picks: Vec<&str> = state.picked(opponent).iter().map(|c| c.name.as_str()).collect();
        let score_sum: f32 = pool.iter().map(|c| c.score.max(0.0)).sum();
        let overall_sum: f32 = pool.iter().map(|c| roster.player(c.role).overall as f32).sum();

        let weights: Vec<f32> = pool
            .iter()
            .map(|c| {
                let score_share = if score_sum > 0.0 { c.score.max(0.0) / score_sum } else { 0.0 };
                let overall = roster.player(c.role).overall as f32;
                let overall_share = if overall_sum > 0.0 { overall / overall_sum } else { 0.0 };
                let mut weight = score_share + overall_share;
                if own_picks.iter().any(|mine| c.champion.counters(&mine.name)) {
                    weight *= self.config.ban_protect_multiplier;
                }
                if synergy::completes_combo(&their_picks, &c.champion.name) {
                    weight *= self.config.ban_combo_multiplier;
                }
                weight
            })
            .collect();

        let index = weighted_index(rng, &weights).unwrap_or(0);
        Some(pool[index].champion)
    }

    /// Pick the role whose best candidate scores highest, then draw among
    /// that role's top candidates by score.
    fn choose_pick<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        state: &DraftState,
        roster: &TeamRoster,
        side: Side,
    ) -> Option<(Role, &'a Champion)> {
        let mut best: Option<Vec<Candidate<'a>>> = None;
        for role in state.remaining_roles(side) {
            let candidates = self.top_candidates(state, roster.player(role), role, side);
            let Some(top) = candidates.first() else {
                log::trace!("{}: no available champion for {}", roster.name, role);
                continue;
            };
            let better = best.as_ref().and_then(|b| b.first()).map_or(true, |current| top.score > current.score);
            if better {
                best = Some(candidates);
            }
        }

        let candidates = best?;
        let weights: Vec<f32> = candidates.iter().map(|c| c.score).collect();
        let index = weighted_index(rng, &weights).unwrap_or(0);
        let chosen = candidates[index];
        Some((chosen.role, chosen.champion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChampionClass, DamageType, PhaseStats};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn champion(name: &str, role: Role, tier: u8) -> Champion {
        Champion {
            name: name.to_string(),
            role,
            tier,
            damage_type: DamageType::Physical,
            class: ChampionClass::Fighter,
            counters: Vec::new(),
            phase: PhaseStats::default(),
        }
    }

    /// `per_role` champions for each role.
    fn catalog(per_role: usize) -> ChampionCatalog {
        let mut champions = Vec::new();
        for role in Role::ALL {
            for i in 0..per_role {
                champions.push(champion(&format!("{}-{i}", role.code()), role, (i % 5 + 1) as u8));
            }
        }
        ChampionCatalog::new(champions).unwrap()
    }

    fn assert_valid(outcome: &DraftOutcome) {
        let mut seen = HashSet::new();
        for side in Side::BOTH {
            for (role, pick) in Role::ALL.iter().zip(&outcome.picks[side.index()]) {
                let pick = pick.as_ref().expect("complete draft");
                assert_eq!(pick.role, *role);
                assert!(seen.insert(pick.name.clone()), "duplicate pick {}", pick.name);
            }
        }
        for side in Side::BOTH {
            for ban in &outcome.bans[side.index()] {
                assert!(seen.insert(ban.clone()), "{ban} both banned and picked");
            }
        }
    }

    #[test]
    fn test_draft_order_shape() {
        let bans = DRAFT_ORDER.iter().filter(|(a, _)| *a == DraftAction::Ban).count();
        assert_eq!(bans, 10);
        for side in Side::BOTH {
            let picks = DRAFT_ORDER.iter().filter(|(a, s)| *a == DraftAction::Pick && *s == side).count();
            assert_eq!(picks, 5);
        }
        assert_eq!(DRAFT_ORDER[7], (DraftAction::Pick, Side::Red));
        assert_eq!(DRAFT_ORDER[12], (DraftAction::Ban, Side::Red));
    }

    #[test]
    fn test_full_draft_is_valid() {
        let cat = catalog(10);
        let cfg = DraftConfig::default();
        let sim = DraftSimulator::new(&cat, &cfg);
        let a = TeamRoster::placeholder("T1");
        let b = TeamRoster::placeholder("GEN");
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let outcome = sim.run(&mut rng, [&a, &b], &[]);
        assert!(outcome.complete);
        assert_eq!(outcome.used.len(), 20);
        assert_eq!(outcome.log.len(), 20);
        assert_eq!(outcome.bans[0].len() + outcome.bans[1].len(), 10);
        assert_valid(&outcome);
    }

    #[test]
    fn test_locked_champions_never_used() {
        let cat = catalog(12);
        let cfg = DraftConfig::default();
        let sim = DraftSimulator::new(&cat, &cfg);
        let roster = TeamRoster::placeholder("T1");
        let locked: Vec<String> = Role::ALL
            .iter()
            .flat_map(|r| [format!("{}-0", r.code()), format!("{}-1", r.code())])
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let outcome = sim.run(&mut rng, [&roster, &roster], &locked);
        assert!(outcome.complete);
        for name in &outcome.used {
            assert!(!locked.contains(name), "{name} was locked");
        }
    }

    #[test]
    fn test_thin_pool_leaves_draft_incomplete() {
        // one champion per role: the second team cannot complete
        let cat = catalog(1);
        let cfg = DraftConfig::default();
        let sim = DraftSimulator::new(&cat, &cfg);
        let roster = TeamRoster::placeholder("T1");
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let outcome = sim.run(&mut rng, [&roster, &roster], &[]);
        assert!(!outcome.complete);
        assert_eq!(outcome.log.len(), 20);
        assert!(outcome.log.iter().any(|l| l.contains("skipped") || l.contains("left empty")));
    }

    #[test]
    fn test_bans_target_high_value_champions() {
        // tier 1 champions should be banned far more than tier 5
        let cat = catalog(10);
        let cfg = DraftConfig::default();
        let sim = DraftSimulator::new(&cat, &cfg);
        let roster = TeamRoster::placeholder("T1");
        let mut strong = 0;
        let mut weak = 0;
        for seed in 0..40 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = sim.run(&mut rng, [&roster, &roster], &[]);
            for ban in outcome.bans.iter().flatten() {
                let tier = cat.get(ban).map(|c| c.tier).unwrap_or(0);
                if tier == 1 {
                    strong += 1;
                } else if tier == 5 {
                    weak += 1;
                }
            }
        }
        assert!(strong > weak);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_drafts_never_repeat_champions(seed in any::<u64>(), per_role in 4usize..10) {
            let cat = catalog(per_role);
            let cfg = DraftConfig::default();
            let sim = DraftSimulator::new(&cat, &cfg);
            let a = TeamRoster::placeholder("A");
            let b = TeamRoster::placeholder("B");
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = sim.run(&mut rng, [&a, &b], &[]);
            let unique: HashSet<&String> = outcome.used.iter().collect();
            prop_assert_eq!(unique.len(), outcome.used.len());
            if outcome.complete {
                assert_valid(&outcome);
            }
        }
    }
}
