//! Event reducer: `(GameState, &GameEvent) -> GameState`.
//!
//! The only place where game state changes. The tick engine decides which
//! events happen; this module decides what they mean. Events arriving after
//! `GameEnded` are ignored.

use super::state::{GameState, GameStatus, PlayerRuntimeState, TimedBuff};
use crate::models::{EventKind, GameEvent, Objective, PlayerRef, Role, Side, TurretTier};

pub fn reduce(mut state: GameState, event: &GameEvent) -> GameState {
    if !state.is_running() {
        return state;
    }
    let second = event.second;

    match &event.kind {
        EventKind::MinuteStarted { minute } => {
            state.minute = *minute;
            if state.baron.is_some_and(|b| b.expires_at <= second) {
                state.baron = None;
            }
            if state.elder.is_some_and(|b| b.expires_at <= second) {
                state.elder = None;
            }
        }

        EventKind::MinuteIncome { gold, xp, damage } => {
            for side in Side::BOTH {
                for role in Role::ALL {
                    let (s, r) = (side.index(), role.index());
                    let p = PlayerRef::new(side, role);
                    let max_level = state.rules.max_level;
                    let player = state.player_mut(p);
                    player.gold += gold[s][r];
                    player.damage += damage[s][r];
                    gain_xp(player, xp[s][r], max_level);
                }
            }
        }

        EventKind::InhibitorRespawned { side, lane } => {
            state.side_mut(*side).lanes[lane.index()].inhibitor_down_until = None;
        }

        EventKind::ObjectiveTaken { side, objective, gold } => {
            share_team_gold(&mut state, *side, *gold, second);
            apply_objective(&mut state, *side, *objective, second);
        }

        EventKind::SoulClaimed { side, element } => {
            state.soul = Some((*side, *element));
            state.timers.dragon = None;
            state.timers.elder = Some(second + state.rules.elder_delay);
        }

        EventKind::Skirmish { damage, .. } => {
            for (p, amount) in damage {
                state.player_mut(*p).damage += *amount;
            }
        }

        EventKind::Kill { killer, victim, assisters, gold, respawn_at } => {
            let rules = state.rules;
            {
                let v = state.player_mut(*victim);
                v.deaths += 1;
                v.respawn_until = (*respawn_at).max(second);
            }
            {
                let k = state.player_mut(*killer);
                k.kills += 1;
                k.gold += *gold;
                gain_xp(k, rules.kill_xp, rules.max_level);
            }
            if !assisters.is_empty() {
                let share = rules.assist_gold / assisters.len() as u32;
                for a in assisters {
                    let player = state.player_mut(*a);
                    player.assists += 1;
                    player.gold += share;
                    gain_xp(player, rules.kill_xp / 2, rules.max_level);
                }
            }
            state.side_mut(killer.side).kills += 1;
        }

        EventKind::FlashEscape { player, ready_at } => {
            state.player_mut(*player).flash_ready_at = *ready_at;
        }

        EventKind::HeraldUsed { side, .. } => {
            state.side_mut(*side).herald_charge = false;
        }

        EventKind::PlateTaken { side, lane, gold } => {
            let lane = &mut state.side_mut(side.opponent()).lanes[lane.index()];
            lane.plates_left = lane.plates_left.saturating_sub(1);
            share_team_gold(&mut state, *side, *gold, second);
        }

        EventKind::TurretDestroyed { side, lane, tier, gold } => {
            let structures = &mut state.side_mut(side.opponent()).lanes[lane.index()];
            match tier {
                TurretTier::Outer => {
                    structures.outer_down = true;
                    structures.plates_left = 0;
                }
                TurretTier::Inner => structures.inner_down = true,
                TurretTier::Inhibitor => structures.inhibitor_turret_down = true,
            }
            state.side_mut(*side).structures_destroyed += 1;
            share_team_gold(&mut state, *side, *gold, second);
        }

        EventKind::InhibitorDestroyed { side, lane, respawn_at } => {
            state.side_mut(side.opponent()).lanes[lane.index()].inhibitor_down_until = Some(*respawn_at);
            state.side_mut(*side).structures_destroyed += 1;
            let gold = state.rules.inhibitor_gold;
            share_team_gold(&mut state, *side, gold, second);
        }

        EventKind::NexusDamaged { side, amount } => {
            let nexus = &mut state.side_mut(side.opponent()).nexus_health;
            *nexus = (*nexus - amount.max(0.0)).max(0.0);
        }

        EventKind::GameEnded { winner, reason } => {
            state.status = GameStatus::Ended { winner: *winner, second, reason: *reason };
        }
    }
    state
}

fn apply_objective(state: &mut GameState, side: Side, objective: Objective, second: u32) {
    let rules = state.rules;
    match objective {
        Objective::Grubs => {
            let s = state.side_mut(side);
            s.grubs = s.grubs.saturating_add(rules.grubs_stacks);
        }
        Objective::Herald => state.side_mut(side).herald_charge = true,
        Objective::Dragon(element) => {
            state.side_mut(side).dragons.push(element);
            state.dragons_taken = state.dragons_taken.saturating_add(1);
            if state.dragons_taken == 3 && state.rift_element.is_none() {
                state.rift_element = Some(element);
            }
            state.timers.dragon = Some(second + rules.dragon_respawn);
        }
        Objective::Elder => {
            state.elder = Some(TimedBuff { owner: side, expires_at: second + rules.elder_duration });
            state.timers.elder = Some(second + rules.elder_respawn);
        }
        Objective::Baron => {
            state.baron = Some(TimedBuff { owner: side, expires_at: second + rules.baron_duration });
            state.timers.baron = Some(second + rules.baron_respawn);
        }
    }
}

/// Split team gold between players alive at `second` (everyone if the
/// whole side is dead). The remainder goes to the first recipient.
fn share_team_gold(state: &mut GameState, side: Side, gold: u32, second: u32) {
    let players = &mut state.side_mut(side).players;
    let alive: Vec<usize> = (0..5).filter(|&i| players[i].is_alive(second)).collect();
    let recipients: Vec<usize> = if alive.is_empty() { (0..5).collect() } else { alive };
    let share = gold / recipients.len() as u32;
    let remainder = gold - share * recipients.len() as u32;
    for (n, &i) in recipients.iter().enumerate() {
        players[i].gold += share + if n == 0 { remainder } else { 0 };
    }
}

/// xp needed to go from `level` to `level + 1`.
#[inline]
pub fn xp_to_next(level: u8) -> u32 {
    180 + 100 * level as u32
}

fn gain_xp(player: &mut PlayerRuntimeState, xp: u32, max_level: u8) {
    if player.level >= max_level {
        return;
    }
    player.xp += xp;
    while player.level < max_level && player.xp >= xp_to_next(player.level) {
        player.xp -= xp_to_next(player.level);
        player.level += 1;
    }
    if player.level >= max_level {
        player.xp = 0;
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DragonElement, EndReason, Lane};

    fn apply(state: GameState, events: &[GameEvent]) -> GameState {
        events.iter().fold(state, reduce)
    }

    #[test]
    fn test_reduce_is_pure() {
        let base = GameState::default();
        let event = GameEvent::new(
            400,
            EventKind::ObjectiveTaken {
                side: Side::Blue,
                objective: Objective::Dragon(DragonElement::Ocean),
                gold: 250,
            },
        );
        let a = reduce(base.clone(), &event);
        let b = reduce(base.clone(), &event);
        assert_eq!(a, b);
        assert_ne!(a, base);
    }

    #[test]
    fn test_level_up_from_income() {
        let mut gold = [[0; 5]; 2];
        let mut xp = [[0; 5]; 2];
        gold[0][0] = 100;
        xp[0][0] = 280 + 380 + 10; // level 1 -> 3
        let state = reduce(
            GameState::default(),
            &GameEvent::new(60, EventKind::MinuteIncome { gold, xp, damage: [[0; 5]; 2] }),
        );
        let top = state.player(PlayerRef::new(Side::Blue, Role::Top));
        assert_eq!(top.level, 3);
        assert_eq!(top.xp, 10);
        assert_eq!(top.gold, 600);
    }

    #[test]
    fn test_level_capped() {
        let mut player = PlayerRuntimeState::default();
        gain_xp(&mut player, 1_000_000, 18);
        assert_eq!(player.level, 18);
        assert_eq!(player.xp, 0);
    }

    #[test]
    fn test_kill_updates_both_players() {
        let killer = PlayerRef::new(Side::Red, Role::Adc);
        let victim = PlayerRef::new(Side::Blue, Role::Mid);
        let helper = PlayerRef::new(Side::Red, Role::Support);
        let state = reduce(
            GameState::default(),
            &GameEvent::new(
                600,
                EventKind::Kill { killer, victim, assisters: vec![helper], gold: 300, respawn_at: 640 },
            ),
        );
        assert_eq!(state.player(killer).kills, 1);
        assert_eq!(state.player(killer).gold, 800);
        assert_eq!(state.player(helper).assists, 1);
        assert_eq!(state.player(helper).gold, 650);
        assert_eq!(state.player(victim).deaths, 1);
        assert!(!state.player(victim).is_alive(620));
        assert!(state.player(victim).is_alive(640));
        assert_eq!(state.side(Side::Red).kills, 1);
    }

    #[test]
    fn test_nexus_health_floor() {
        let state = apply(
            GameState::default(),
            &[
                GameEvent::new(1800, EventKind::NexusDamaged { side: Side::Blue, amount: 80.0 }),
                GameEvent::new(1830, EventKind::NexusDamaged { side: Side::Blue, amount: 80.0 }),
            ],
        );
        assert_eq!(state.side(Side::Red).nexus_health, 0.0);
        assert!((state.side(Side::Blue).nexus_health - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_structures_hit_defender() {
        let state = apply(
            GameState::default(),
            &[
                GameEvent::new(500, EventKind::PlateTaken { side: Side::Blue, lane: Lane::Top, gold: 125 }),
                GameEvent::new(
                    700,
                    EventKind::TurretDestroyed { side: Side::Blue, lane: Lane::Top, tier: TurretTier::Outer, gold: 250 },
                ),
            ],
        );
        let top = state.side(Side::Red).lane(Lane::Top);
        assert!(top.outer_down);
        assert_eq!(top.plates_left, 0);
        assert_eq!(state.side(Side::Blue).structures_destroyed, 1);
        assert_eq!(state.side(Side::Blue).gold(), 2500 + 125 + 250);
        assert!(!state.side(Side::Blue).lane(Lane::Top).outer_down);
    }

    #[test]
    fn test_inhibitor_destroy_and_respawn() {
        let state = apply(
            GameState::default(),
            &[GameEvent::new(1500, EventKind::InhibitorDestroyed { side: Side::Red, lane: Lane::Mid, respawn_at: 1800 })],
        );
        assert_eq!(state.side(Side::Blue).open_inhibitors(), 1);
        let state = reduce(
            state,
            &GameEvent::new(1800, EventKind::InhibitorRespawned { side: Side::Blue, lane: Lane::Mid }),
        );
        assert_eq!(state.side(Side::Blue).open_inhibitors(), 0);
    }

    #[test]
    fn test_rift_element_fixed_on_third_dragon() {
        let dragon = |second, side, element| {
            GameEvent::new(
                second,
                EventKind::ObjectiveTaken { side, objective: Objective::Dragon(element), gold: 250 },
            )
        };
        let state = apply(
            GameState::default(),
            &[
                dragon(300, Side::Blue, DragonElement::Infernal),
                dragon(610, Side::Red, DragonElement::Ocean),
                dragon(920, Side::Blue, DragonElement::Cloud),
            ],
        );
        assert_eq!(state.rift_element, Some(DragonElement::Cloud));
        assert_eq!(state.timers.dragon, Some(1220));

        let state = reduce(
            state,
            &GameEvent::new(1500, EventKind::SoulClaimed { side: Side::Blue, element: DragonElement::Cloud }),
        );
        assert!(state.has_soul(Side::Blue));
        assert_eq!(state.timers.dragon, None);
        assert_eq!(state.timers.elder, Some(1860));
    }

    #[test]
    fn test_baron_expires_on_minute_start() {
        let state = apply(
            GameState::default(),
            &[
                GameEvent::new(
                    1250,
                    EventKind::ObjectiveTaken { side: Side::Red, objective: Objective::Baron, gold: 1500 },
                ),
                GameEvent::new(1380, EventKind::MinuteStarted { minute: 23 }),
            ],
        );
        assert!(state.has_baron(Side::Red, 1380));
        let state = reduce(state, &GameEvent::new(1440, EventKind::MinuteStarted { minute: 24 }));
        assert!(state.baron.is_none());
        assert_eq!(state.timers.baron, Some(1610));
    }

    #[test]
    fn test_events_after_end_are_ignored() {
        let state = apply(
            GameState::default(),
            &[
                GameEvent::new(2000, EventKind::GameEnded { winner: Side::Blue, reason: EndReason::NexusDestroyed }),
                GameEvent::new(2010, EventKind::NexusDamaged { side: Side::Red, amount: 50.0 }),
            ],
        );
        assert!(matches!(state.status, GameStatus::Ended { winner: Side::Blue, second: 2000, .. }));
        assert!((state.side(Side::Blue).nexus_health - 100.0).abs() < 1e-6);
    }
}
