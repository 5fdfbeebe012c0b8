//! # Match Orchestrator
//!
//! BO3 / BO5 series with fearless draft.
//!
//! - Set 1: team A plays blue. Afterwards the previous loser takes blue
//!   with 90% probability.
//! - Every champion picked in a completed set joins the fearless list and
//!   is locked for the rest of the series.
//! - A set whose draft cannot complete is not played; the series stops
//!   without a winner.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::config::EngineConfig;
use super::draft::DraftSimulator;
use super::lineup::Lineup;
use super::postgame::{player_lines, PostGameEvaluator, SeriesTally};
use super::tick::TickEngine;
use crate::models::{
    format_clock, ChampionCatalog, EventNames, RosterProvider, SeriesFormat, SeriesResult, SetResult, Side,
    SimOptions, TeamPair, TeamRoster,
};

/// Probability that the loser of the previous set takes blue side.
pub const LOSER_BLUE_CHANCE: f64 = 0.9;

pub struct MatchOrchestrator<'a, P: RosterProvider + ?Sized> {
    catalog: &'a ChampionCatalog,
    rosters: &'a P,
    config: &'a EngineConfig,
}

impl<'a, P: RosterProvider + ?Sized> MatchOrchestrator<'a, P> {
    pub fn new(catalog: &'a ChampionCatalog, rosters: &'a P, config: &'a EngineConfig) -> Self {
        Self { catalog, rosters, config }
    }

    /// Draft and play one set. `a_side` is the map side of `team_a`.
    pub fn play_set<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        set_number: u8,
        team_a: &TeamRoster,
        team_b: &TeamRoster,
        a_side: Side,
        options: &SimOptions,
        locked: &[String],
    ) -> SetResult {
        let b_side = a_side.opponent();
        let (blue, red) = match a_side {
            Side::Blue => (team_a, team_b),
            Side::Red => (team_b, team_a),
        };

        let draft = DraftSimulator::new(self.catalog, &self.config.draft).run(rng, [blue, red], locked);
        let picks = TeamPair::new(draft.pick_names(a_side), draft.pick_names(b_side));
        let bans = TeamPair::new(draft.bans[a_side.index()].clone(), draft.bans[b_side.index()].clone());

        let mut result = SetResult {
            set_number,
            blue_team: blue.name.clone(),
            red_team: red.name.clone(),
            winner_name: None,
            summary: String::new(),
            picks,
            bans,
            used_champions: Vec::new(),
            pog_player: None,
            draft_log: draft.log.clone(),
            event_log: Vec::new(),
            events: Vec::new(),
            duration_seconds: 0,
            end_reason: None,
            kills: TeamPair::default(),
            gold: TeamPair::default(),
            player_lines: TeamPair::default(),
        };

        if !draft.complete {
            result.summary = format!(
                "Set {set_number}: draft incomplete ({} vs {}), set not played",
                blue.name, red.name
            );
            log::warn!("{}", result.summary);
            return result;
        }

        let lineups = [Lineup::from_picks(blue, &draft.picks[0]), Lineup::from_picks(red, &draft.picks[1])];
        let modifiers = [options.power_modifier_for(&blue.name), options.power_modifier_for(&red.name)];
        let outcome = TickEngine::new(self.config).simulate(rng, &lineups, modifiers);

        let names = event_names(&lineups);
        let winner = &lineups[outcome.winner.index()].team;
        let loser = &lineups[outcome.winner.opponent().index()].team;
        let lines_a = player_lines(&lineups[a_side.index()], &outcome.state, a_side);
        let lines_b = player_lines(&lineups[b_side.index()], &outcome.state, b_side);
        let all_lines: Vec<_> = lines_a.iter().chain(lines_b.iter()).cloned().collect();
        let evaluator = PostGameEvaluator::new(&self.config.postgame);

        let state_a = outcome.state.side(a_side);
        let state_b = outcome.state.side(b_side);
        let (winner_kills, loser_kills) = {
            let w = outcome.state.side(outcome.winner).kills;
            let l = outcome.state.side(outcome.winner.opponent()).kills;
            (w, l)
        };

        result.summary = format!(
            "Set {set_number}: {winner} defeated {loser} in {} ({winner_kills}-{loser_kills} kills)",
            format_clock(outcome.end_second)
        );
        result.pog_player = evaluator.player_of_the_game(&all_lines, winner, outcome.end_second);
        result.winner_name = Some(winner.clone());
        result.used_champions = draft.pick_names(Side::Blue).into_iter().chain(draft.pick_names(Side::Red)).collect();
        result.event_log = outcome.events.iter().filter(|e| e.is_notable()).map(|e| e.render(&names)).collect();
        result.duration_seconds = outcome.end_second;
        result.end_reason = Some(outcome.reason);
        result.kills = TeamPair::new(state_a.kills, state_b.kills);
        result.gold = TeamPair::new(state_a.gold(), state_b.gold());
        result.player_lines = TeamPair::new(lines_a, lines_b);
        result.events = outcome.events;

        log::debug!("{}", result.summary);
        result
    }

    pub fn play_series<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        team_a: &str,
        team_b: &str,
        options: &SimOptions,
    ) -> SeriesResult {
        let format = options.series_format;
        let needed = format.wins_needed();
        let roster_a = self.rosters.roster(team_a);
        let roster_b = self.rosters.roster(team_b);
        let evaluator = PostGameEvaluator::new(&self.config.postgame);

        // set winners are credited by name
        if roster_a.name == roster_b.name {
            let reason = format!("{} cannot play itself", roster_a.name);
            log::warn!("series not played: {reason}");
            return SeriesResult {
                team_a: roster_a.name.clone(),
                team_b: roster_b.name.clone(),
                format,
                sets: Vec::new(),
                wins: TeamPair::new(0, 0),
                winner: None,
                score_string: "0:0".to_string(),
                series_mvp: None,
                fearless_bans: options.fearless_bans.clone(),
                aborted: Some(reason),
            };
        }

        let mut fearless: Vec<String> = options.fearless_bans.clone();
        let mut sets: Vec<SetResult> = Vec::with_capacity(format.max_sets() as usize);
        let mut wins = TeamPair::new(0u8, 0u8);
        let mut tally = SeriesTally::new();
        let mut aborted = None;
        let mut a_side = Side::Blue;

        for set_number in 1..=format.max_sets() {
            if wins.a >= needed || wins.b >= needed {
                break;
            }
            if let Some(last) = sets.last() {
                let a_lost = last.winner_name.as_deref() != Some(roster_a.name.as_str());
                let loser_blue = rng.gen_bool(LOSER_BLUE_CHANCE);
                a_side = if a_lost == loser_blue { Side::Blue } else { Side::Red };
            }

            let result = self.play_set(rng, set_number, &roster_a, &roster_b, a_side, options, &fearless);
            let Some(winner) = result.winner_name.clone() else {
                aborted = Some(result.summary.clone());
                sets.push(result);
                break;
            };

            if winner == roster_a.name {
                wins.a += 1;
            } else {
                wins.b += 1;
            }
            for champion in &result.used_champions {
                if !fearless.contains(champion) {
                    fearless.push(champion.clone());
                }
            }
            let lines: Vec<_> = result.player_lines.a.iter().chain(&result.player_lines.b).cloned().collect();
            tally.record_set(&evaluator, &lines, &winner, result.duration_seconds);
            sets.push(result);
        }

        let winner = if aborted.is_some() {
            None
        } else if wins.a >= needed {
            Some(roster_a.name.clone())
        } else if wins.b >= needed {
            Some(roster_b.name.clone())
        } else {
            None
        };
        let series_mvp = match (&winner, format) {
            (Some(w), SeriesFormat::Bo5) => tally.player_of_the_series(w),
            _ => None,
        };
        let score_string = format!("{}:{}", wins.a, wins.b);
        log::info!(
            "{} vs {} ({:?}) finished {}{}",
            roster_a.name,
            roster_b.name,
            format,
            score_string,
            aborted.as_deref().map(|r| format!(" - aborted: {r}")).unwrap_or_default()
        );

        SeriesResult {
            team_a: roster_a.name.clone(),
            team_b: roster_b.name.clone(),
            format,
            sets,
            wins,
            winner,
            score_string,
            series_mvp,
            fearless_bans: fearless,
            aborted,
        }
    }
}

fn event_names(lineups: &[Lineup; 2]) -> EventNames {
    EventNames {
        teams: lineups.each_ref().map(|l| l.team.clone()),
        players: lineups.each_ref().map(|l| {
            l.participants.each_ref().map(|p| (p.player.name.clone(), p.champion.name.clone()))
        }),
    }
}

/// Seed of the `index`-th series in a round.
#[inline]
pub fn round_seed(seed: u64, index: usize) -> u64 {
    seed ^ (index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Play independent series in parallel, one per `(team_a, team_b)` fixture.
///
/// Each series gets its own `ChaCha8Rng` derived from `seed` and its
/// position, so results do not depend on thread scheduling.
pub fn simulate_round<P>(
    catalog: &ChampionCatalog,
    rosters: &P,
    config: &EngineConfig,
    fixtures: &[(String, String)],
    options: &SimOptions,
    seed: u64,
) -> Vec<SeriesResult>
where
    P: RosterProvider + Sync + ?Sized,
{
    fixtures
        .par_iter()
        .enumerate()
        .map(|(i, (a, b))| {
            let mut rng = ChaCha8Rng::seed_from_u64(round_seed(seed, i));
            MatchOrchestrator::new(catalog, rosters, config).play_series(&mut rng, a, b, options)
        })
        .collect()
}
