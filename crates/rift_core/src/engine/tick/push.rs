//! Structure pushes: plates → outer → inner → inhibitor turret →
//! inhibitor → nexus.

use rand::Rng;

use super::state::{PushTarget, SideState};
use super::{GameRun, TickEngine, PUSH_WINDOW};
use crate::engine::selection::chance;
use crate::models::{EndReason, EventKind, Lane, Side, TurretTier};

impl<'a> TickEngine<'a> {
    pub(super) fn push<R: Rng + ?Sized>(&self, rng: &mut R, run: &mut GameRun, minute: u32) {
        let cfg = self.tick();
        let second = minute * 60 + rng.gen_range(PUSH_WINDOW);

        let (attacker, outcome) = self.contest(rng, run, second);
        if run.state.side(attacker).alive_count(second) == 0 {
            return;
        }
        let defender = attacker.opponent();

        let mut buffs = cfg.open_inhibitor_push_bonus * run.state.side(defender).open_inhibitors() as f32;
        let baron = run.state.has_baron(attacker, second);
        if baron {
            buffs += cfg.baron_push_bonus;
        }
        if run.state.has_elder(attacker, second) {
            buffs += cfg.elder_push_bonus;
        }

        let lanes: Vec<Lane> = if baron {
            Lane::ALL.to_vec()
        } else {
            vec![choose_lane(rng, run.state.side(defender))]
        };
        if run.state.side(attacker).herald_charge {
            run.emit(second, EventKind::HeraldUsed { side: attacker, lane: lanes[0] });
            buffs += cfg.herald_push_bonus;
        }

        let push_power = self.push_power(outcome.winner_probability(), buffs);
        log::trace!("{:?} pushes {:?} at {}s with power {:.2}", attacker, lanes, second, push_power);

        for (i, lane) in lanes.into_iter().enumerate() {
            self.push_lane(rng, run, attacker, lane, push_power, minute, second + i as u32);
            if !run.state.is_running() {
                break;
            }
        }
    }

    /// `clamp(1 + 2(p - 0.5) + buffs, min, max)`
    pub fn push_power(&self, p: f32, buffs: f32) -> f32 {
        let cfg = self.tick();
        (1.0 + 2.0 * (p - 0.5) + buffs).clamp(cfg.push_power_min, cfg.push_power_max)
    }

    fn push_lane<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        run: &mut GameRun,
        attacker: Side,
        lane: Lane,
        push_power: f32,
        minute: u32,
        second: u32,
    ) {
        let cfg = self.tick();
        let defender = attacker.opponent();
        let structures = *run.state.side(defender).lane(lane);

        match structures.next_target() {
            PushTarget::Turret(TurretTier::Outer) => {
                let plated = minute < cfg.plates_until_minute && structures.plates_left > 0;
                if plated {
                    if chance(rng, cfg.plate_chance * push_power) {
                        run.emit(second, EventKind::PlateTaken { side: attacker, lane, gold: cfg.plate_gold });
                    }
                    if chance(rng, cfg.outer_chance_plated * push_power) {
                        destroy_turret(run, attacker, lane, TurretTier::Outer, cfg.turret_gold[0], second);
                    }
                } else if chance(rng, cfg.outer_chance * push_power) {
                    destroy_turret(run, attacker, lane, TurretTier::Outer, cfg.turret_gold[0], second);
                }
            }
            PushTarget::Turret(TurretTier::Inner) => {
                if chance(rng, cfg.inner_chance * push_power) {
                    destroy_turret(run, attacker, lane, TurretTier::Inner, cfg.turret_gold[1], second);
                }
            }
            PushTarget::Turret(TurretTier::Inhibitor) => {
                if chance(rng, cfg.inhibitor_turret_chance * push_power) {
                    destroy_turret(run, attacker, lane, TurretTier::Inhibitor, cfg.turret_gold[2], second);
                }
            }
            PushTarget::Inhibitor => {
                if chance(rng, cfg.inhibitor_chance * push_power) {
                    let respawn_at = second + cfg.inhibitor_respawn;
                    run.emit(second, EventKind::InhibitorDestroyed { side: attacker, lane, respawn_at });
                }
            }
            PushTarget::Nexus => {
                if chance(rng, cfg.nexus_chance * push_power) {
                    let amount = rng.gen_range(cfg.nexus_chip_min..=cfg.nexus_chip_max) * push_power;
                    run.emit(second, EventKind::NexusDamaged { side: attacker, amount });
                    if run.state.side(defender).nexus_health <= 0.0 {
                        run.emit(second, EventKind::GameEnded { winner: attacker, reason: EndReason::NexusDestroyed });
                    }
                }
            }
        }
    }
}

fn destroy_turret(run: &mut GameRun, side: Side, lane: Lane, tier: TurretTier, gold: u32, second: u32) {
    run.emit(second, EventKind::TurretDestroyed { side, lane, tier, gold });
}

/// Half the time the most advanced lane, otherwise any lane.
fn choose_lane<R: Rng + ?Sized>(rng: &mut R, defender: &SideState) -> Lane {
    if rng.gen_bool(0.5) {
        let mut best = Lane::Mid;
        let mut best_depth = defender.lane(best).depth();
        for lane in Lane::ALL {
            let depth = defender.lane(lane).depth();
            if depth > best_depth {
                best = lane;
                best_depth = depth;
            }
        }
        best
    } else {
        Lane::ALL[rng.gen_range(0..Lane::ALL.len())]
    }
}
