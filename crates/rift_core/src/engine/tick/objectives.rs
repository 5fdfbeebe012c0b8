//! Neutral objectives: grubs, herald, dragons, elder, baron.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{GameRun, TickEngine, OBJECTIVE_WINDOW};
use crate::models::{DragonElement, EventKind, Objective};

impl<'a> TickEngine<'a> {
    /// Grubs and herald spawn once, at fixed minutes.
    pub(super) fn fixed_objectives<R: Rng + ?Sized>(&self, rng: &mut R, run: &mut GameRun, minute: u32) {
        let cfg = self.tick();
        let fixed = [
            (cfg.grubs_minute, Objective::Grubs, cfg.grubs_gold),
            (cfg.herald_minute, Objective::Herald, cfg.herald_gold),
        ];
        for (at_minute, objective, gold) in fixed {
            if minute != at_minute {
                continue;
            }
            let second = minute * 60 + rng.gen_range(OBJECTIVE_WINDOW);
            let (side, outcome) = self.contest(rng, run, second);
            log::trace!("{} to {:?} (p_blue={:.2})", objective.label(), side, outcome.p_a);
            run.emit(second, EventKind::ObjectiveTaken { side, objective, gold });
        }
    }

    /// Dragon until soul, then elder; baron from its first spawn on.
    pub(super) fn recurring_objectives<R: Rng + ?Sized>(&self, rng: &mut R, run: &mut GameRun, minute: u32) {
        let cfg = self.tick();

        if run.state.soul.is_none() {
            if let Some(second) = spawn_second(rng, run.state.timers.dragon, minute) {
                let (side, _) = self.contest(rng, run, second);
                let element = match run.state.rift_element {
                    Some(element) => element,
                    None => *DragonElement::ALL.choose(rng).unwrap_or(&DragonElement::Infernal),
                };
                run.emit(
                    second,
                    EventKind::ObjectiveTaken { side, objective: Objective::Dragon(element), gold: cfg.dragon_gold },
                );
                if run.state.side(side).dragons.len() >= cfg.soul_dragons as usize {
                    let element = run.state.rift_element.unwrap_or(element);
                    log::debug!("{:?} claimed {} soul at {}s", side, element.label(), second);
                    run.emit(second, EventKind::SoulClaimed { side, element });
                }
            }
        }

        if let Some(second) = spawn_second(rng, run.state.timers.elder, minute) {
            let (side, _) = self.contest(rng, run, second);
            run.emit(second, EventKind::ObjectiveTaken { side, objective: Objective::Elder, gold: cfg.elder_gold });
        }

        if let Some(second) = spawn_second(rng, run.state.timers.baron, minute) {
            let (side, outcome) = self.contest(rng, run, second);
            log::trace!("Baron to {:?} (p_blue={:.2})", side, outcome.p_a);
            run.emit(second, EventKind::ObjectiveTaken { side, objective: Objective::Baron, gold: cfg.baron_gold });
        }
    }
}

/// In-minute second at which an objective spawning at `spawn` is fought
/// over, or `None` when it is not up within this minute's window.
fn spawn_second<R: Rng + ?Sized>(rng: &mut R, spawn: Option<u32>, minute: u32) -> Option<u32> {
    let spawn = spawn?;
    let start = minute * 60;
    let earliest = start + OBJECTIVE_WINDOW.start();
    let latest = start + OBJECTIVE_WINDOW.end();
    if spawn > latest {
        return None;
    }
    Some(rng.gen_range(spawn.max(earliest)..=latest))
}
