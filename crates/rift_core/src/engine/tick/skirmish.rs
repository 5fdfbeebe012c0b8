//! Skirmishes and kills.

use rand::Rng;

use super::{GameRun, TickEngine, SKIRMISH_WINDOW};
use crate::engine::selection::{chance, weighted_index};
use crate::models::{EventKind, GamePhase, PlayerRef, Role, Side};

impl<'a> TickEngine<'a> {
    pub(super) fn skirmish<R: Rng + ?Sized>(&self, rng: &mut R, run: &mut GameRun, minute: u32) {
        let cfg = self.tick();
        let second = minute * 60 + rng.gen_range(SKIRMISH_WINDOW);

        let mut p = match GamePhase::from_minute(minute) {
            GamePhase::Early => cfg.skirmish_base[0],
            GamePhase::Mid => cfg.skirmish_base[1],
            GamePhase::Late => cfg.skirmish_base[2],
        };
        if run.state.any_major_buff(second) {
            p += cfg.skirmish_buff_bonus;
        }
        if run.state.dragon_up(second) {
            p += cfg.skirmish_dragon_bonus;
        }
        if !chance(rng, p.min(cfg.skirmish_cap)) {
            return;
        }

        let blue = self.side_power(run, Side::Blue, second);
        let red = self.side_power(run, Side::Red, second);
        if blue.alive == 0 || red.alive == 0 {
            return;
        }
        let outcome = self.resolver.resolve(rng, blue, red);
        let winner = if outcome.a_wins { Side::Blue } else { Side::Red };
        let loser = winner.opponent();
        let p_win = outcome.winner_probability();

        let mut damage = Vec::with_capacity(10);
        for side in Side::BOTH {
            let scale = if side == winner { 1.25 } else { 0.85 };
            for role in Role::ALL {
                let p = PlayerRef::new(side, role);
                let runtime = run.state.player(p);
                if runtime.is_alive(second) {
                    let dealt = rng.gen_range(300.0..900.0) * scale * (1.0 + 0.05 * runtime.level as f32);
                    damage.push((p, dealt.round() as u32));
                }
            }
        }
        run.emit(second, EventKind::Skirmish { winner, damage });

        let victims = run.state.side(loser).alive_count(second).min(cfg.kill_count_weights.len());
        let kills = weighted_index(rng, &cfg.kill_count_weights[..victims]).map_or(0, |i| i + 1);
        log::trace!("Skirmish at {}s won by {:?}, up to {} kills", second, winner, kills);

        // kills stay inside the skirmish window so they sort before the push
        let last = minute * 60 + SKIRMISH_WINDOW.end();
        let mut at = second;
        for _ in 0..kills {
            at = (at + 1).min(last);
            self.attempt_kill(rng, run, winner, at, minute);
        }

        // losers can still trade one back
        if p_win > 0.0 && chance(rng, cfg.counter_kill_base * (1.0 - p_win) / p_win) {
            at = (at + 1).min(last);
            self.attempt_kill(rng, run, loser, at, minute);
        }
    }

    /// One kill attempt by `attacker`. Returns whether someone died.
    pub(super) fn attempt_kill<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        run: &mut GameRun,
        attacker: Side,
        second: u32,
        minute: u32,
    ) -> bool {
        let cfg = self.tick();
        let defender = attacker.opponent();

        let Some(victim) = pick_alive(rng, run, defender, second, &cfg.victim_weights, &[]) else {
            return false;
        };
        let Some(killer) = pick_alive(rng, run, attacker, second, &cfg.killer_weights, &[]) else {
            return false;
        };

        if run.state.player(victim).flash_ready(second) && chance(rng, cfg.flash_escape_chance) {
            run.emit(second, EventKind::FlashEscape { player: victim, ready_at: second + cfg.flash_cooldown });
            return false;
        }

        let helpers = Role::ALL
            .iter()
            .filter(|&&r| r != killer.role && run.state.player(PlayerRef::new(attacker, r)).is_alive(second))
            .count();
        let assist_count = rng.gen_range(0..=helpers.min(cfg.max_assisters));
        let mut assisters = Vec::with_capacity(assist_count);
        let mut taken = vec![killer.role];
        for _ in 0..assist_count {
            match pick_alive(rng, run, attacker, second, &cfg.assist_weights, &taken) {
                Some(p) => {
                    taken.push(p.role);
                    assisters.push(p);
                }
                None => break,
            }
        }

        let level = run.state.player(victim).level as f32;
        let late = minute.saturating_sub(cfg.respawn_late_after_minute) as f32;
        let timer = cfg.respawn_base + cfg.respawn_per_level * level + cfg.respawn_late_per_minute * late;
        let respawn_at = second + timer.round().max(1.0) as u32;

        run.emit(second, EventKind::Kill { killer, victim, assisters, gold: cfg.kill_gold, respawn_at });
        true
    }
}

/// Weighted draw among living players of `side`, skipping `exclude`.
fn pick_alive<R: Rng + ?Sized>(
    rng: &mut R,
    run: &GameRun,
    side: Side,
    second: u32,
    weights: &[f32; 5],
    exclude: &[Role],
) -> Option<PlayerRef> {
    let masked: Vec<f32> = Role::ALL
        .iter()
        .map(|&role| {
            let alive = run.state.player(PlayerRef::new(side, role)).is_alive(second);
            if alive && !exclude.contains(&role) {
                weights[role.index()]
            } else {
                0.0
            }
        })
        .collect();
    weighted_index(rng, &masked).map(|i| PlayerRef::new(side, Role::ALL[i]))
}
