//! # Tick Engine
//!
//! 1분 단위 경기 시뮬레이션.
//!
//! Each simulated minute runs, in order:
//! 1. passive income and level-ups
//! 2. inhibitor respawns
//! 3. fixed objectives (grubs, herald)
//! 4. recurring objectives (dragon, elder, baron)
//! 5. a skirmish roll
//! 6. a structure push
//!
//! Every decision produces a [`GameEvent`]; [`reducer::reduce`] is the only
//! code that mutates [`GameState`]. Events inside a minute get synthesized
//! seconds from fixed windows so the sorted log keeps the step order.

mod objectives;
mod push;
pub mod reducer;
mod skirmish;
pub mod state;

use rand::Rng;
use std::ops::RangeInclusive;

use super::combat::{CombatOutcome, CombatResolver, SidePower};
use super::config::{EngineConfig, TickConfig, MINUTE_CAP};
use super::lineup::Lineup;
use super::power::{PowerModel, PowerProfile};
use crate::models::{EndReason, EventKind, GameEvent, GamePhase, Lane, Role, Side};

pub use reducer::reduce;
pub use state::{GameState, GameStatus, PlayerRuntimeState};

/// Seconds within a minute used by each step.
pub(crate) const OBJECTIVE_WINDOW: RangeInclusive<u32> = 5..=30;
pub(crate) const SKIRMISH_WINDOW: RangeInclusive<u32> = 31..=45;
pub(crate) const PUSH_WINDOW: RangeInclusive<u32> = 46..=57;

/// Result of one game.
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub winner: Side,
    pub end_second: u32,
    pub reason: EndReason,
    /// Sorted by second.
    pub events: Vec<GameEvent>,
    pub state: GameState,
}

/// Mutable bookkeeping of a game in progress.
pub(crate) struct GameRun {
    pub(crate) state: GameState,
    pub(crate) events: Vec<GameEvent>,
    profile: PowerProfile,
    modifiers: [f32; 2],
}

impl GameRun {
    pub(crate) fn emit(&mut self, second: u32, kind: EventKind) {
        let event = GameEvent::new(second, kind);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, &event);
        self.events.push(event);
    }
}

pub struct TickEngine<'a> {
    config: &'a EngineConfig,
    power: PowerModel<'a>,
    resolver: CombatResolver,
}

impl<'a> TickEngine<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self {
            config,
            power: PowerModel::new(config),
            resolver: CombatResolver::new(config.tick.combat_tilt),
        }
    }

    #[inline]
    pub(crate) fn tick(&self) -> &TickConfig {
        &self.config.tick
    }

    /// Play one game between `lineups[0]` (blue) and `lineups[1]` (red).
    ///
    /// `modifiers` are per-side power multipliers (difficulty). Never fails;
    /// terminates at the minute cap at the latest.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        lineups: &[Lineup; 2],
        modifiers: [f32; 2],
    ) -> GameOutcome {
        let mut run = GameRun {
            state: GameState::new(self.tick()),
            events: Vec::with_capacity(256),
            profile: self.power.profile(lineups),
            modifiers,
        };

        let last_minute = self.tick().max_minutes.clamp(1, MINUTE_CAP);
        for minute in 1..last_minute {
            self.step(rng, &mut run, minute);
            if !run.state.is_running() {
                break;
            }
        }
        if run.state.is_running() {
            self.end_by_time_limit(rng, &mut run, last_minute);
        }

        run.events.sort_by_key(|e| e.second);
        let (winner, end_second, reason) = match run.state.status {
            GameStatus::Ended { winner, second, reason } => (winner, second, reason),
            // unreachable: the time limit always ends the game
            GameStatus::Running => (Side::Blue, last_minute * 60, EndReason::TimeLimit),
        };
        log::debug!(
            "Game ended at {}s: {:?} wins ({:?}), {} events",
            end_second,
            winner,
            reason,
            run.events.len()
        );

        GameOutcome { winner, end_second, reason, events: run.events, state: run.state }
    }

    fn step<R: Rng + ?Sized>(&self, rng: &mut R, run: &mut GameRun, minute: u32) {
        let start = minute * 60;
        run.emit(start, EventKind::MinuteStarted { minute });
        self.passive_income(run, minute);
        self.respawn_inhibitors(run, start);
        self.fixed_objectives(rng, run, minute);
        self.recurring_objectives(rng, run, minute);
        self.skirmish(rng, run, minute);
        if minute >= self.tick().push_start_minute {
            self.push(rng, run, minute);
        }
    }

    fn passive_income(&self, run: &mut GameRun, minute: u32) {
        let cfg = self.tick();
        let start = minute * 60;
        let phase = match GamePhase::from_minute(minute) {
            GamePhase::Early => 0,
            GamePhase::Mid => 1,
            GamePhase::Late => 2,
        };

        let mut gold = [[0; 5]; 2];
        let mut xp = [[0; 5]; 2];
        let mut damage = [[0; 5]; 2];
        for side in Side::BOTH {
            for role in Role::ALL {
                let (s, r) = (side.index(), role.index());
                if !run.state.sides[s].players[r].is_alive(start) {
                    continue;
                }
                gold[s][r] = (cfg.passive_gold[phase] as f32 * cfg.role_gold_weights[r]).round() as u32;
                xp[s][r] = (cfg.passive_xp[phase] as f32 * cfg.role_xp_weights[r]).round() as u32;
                damage[s][r] = (cfg.passive_damage as f32 * cfg.role_gold_weights[r]).round() as u32;
            }
        }
        run.emit(start, EventKind::MinuteIncome { gold, xp, damage });
    }

    fn respawn_inhibitors(&self, run: &mut GameRun, start: u32) {
        for side in Side::BOTH {
            for lane in Lane::ALL {
                let due = run.state.side(side).lane(lane).inhibitor_down_until;
                if let Some(at) = due.filter(|&at| at <= start) {
                    run.emit(at, EventKind::InhibitorRespawned { side, lane });
                }
            }
        }
    }

    fn end_by_time_limit<R: Rng + ?Sized>(&self, rng: &mut R, run: &mut GameRun, minute: u32) {
        let second = minute * 60;
        run.emit(second, EventKind::MinuteStarted { minute });
        let winner = time_limit_winner(rng, &run.state);
        log::debug!("Minute cap reached, {:?} wins on tiebreakers", winner);
        run.emit(second, EventKind::GameEnded { winner, reason: EndReason::TimeLimit });
    }

    pub(crate) fn side_power(&self, run: &GameRun, side: Side, second: u32) -> SidePower {
        self.power.side_power(&run.profile, &run.state, side, second, run.modifiers[side.index()])
    }

    /// Blue is side A of the returned outcome.
    pub(crate) fn contest<R: Rng + ?Sized>(&self, rng: &mut R, run: &GameRun, second: u32) -> (Side, CombatOutcome) {
        let blue = self.side_power(run, Side::Blue, second);
        let red = self.side_power(run, Side::Red, second);
        let outcome = self.resolver.resolve(rng, blue, red);
        let winner = if outcome.a_wins { Side::Blue } else { Side::Red };
        (winner, outcome)
    }
}

/// Nexus health, then structures destroyed, then kills, then gold, then a
/// coin flip.
pub fn time_limit_winner<R: Rng + ?Sized>(rng: &mut R, state: &GameState) -> Side {
    let blue = state.side(Side::Blue);
    let red = state.side(Side::Red);

    if (blue.nexus_health - red.nexus_health).abs() > f32::EPSILON {
        return if blue.nexus_health > red.nexus_health { Side::Blue } else { Side::Red };
    }
    let tiebreaks = [
        (blue.structures_destroyed, red.structures_destroyed),
        (blue.kills, red.kills),
        (blue.gold(), red.gold()),
    ];
    for (b, r) in tiebreaks {
        if b != r {
            return if b > r { Side::Blue } else { Side::Red };
        }
    }
    if rng.gen_bool(0.5) {
        Side::Blue
    } else {
        Side::Red
    }
}

#[cfg(test)]
mod tick_test;
