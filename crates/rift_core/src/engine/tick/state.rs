//! Game state for the tick engine.
//!
//! `GameState` is plain data. It is only ever changed by
//! [`reduce`](super::reducer::reduce), one [`GameEvent`](crate::models::GameEvent)
//! at a time.

use serde::{Deserialize, Serialize};

use crate::engine::config::TickConfig;
use crate::models::{DragonElement, EndReason, Lane, PlayerRef, Side, TurretTier};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Running,
    Ended { winner: Side, second: u32, reason: EndReason },
}

/// Per-player runtime counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerRuntimeState {
    pub gold: u32,
    /// 1..=max_level
    pub level: u8,
    /// xp toward the next level
    pub xp: u32,
    /// Dead while `respawn_until > second`.
    pub respawn_until: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub damage: u32,
    pub flash_ready_at: u32,
}

impl Default for PlayerRuntimeState {
    fn default() -> Self {
        Self {
            gold: 500,
            level: 1,
            xp: 0,
            respawn_until: 0,
            kills: 0,
            deaths: 0,
            assists: 0,
            damage: 0,
            flash_ready_at: 0,
        }
    }
}

impl PlayerRuntimeState {
    #[inline]
    pub fn is_alive(&self, second: u32) -> bool {
        self.respawn_until <= second
    }

    #[inline]
    pub fn flash_ready(&self, second: u32) -> bool {
        self.flash_ready_at <= second
    }
}

/// Next structure an attacker would hit in a lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushTarget {
    Turret(TurretTier),
    Inhibitor,
    Nexus,
}

/// One lane's defensive structures, owned by the defending side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneStructures {
    pub plates_left: u8,
    pub outer_down: bool,
    pub inner_down: bool,
    pub inhibitor_turret_down: bool,
    /// Respawn second while the inhibitor is destroyed.
    pub inhibitor_down_until: Option<u32>,
}

impl LaneStructures {
    pub fn new(plates: u8) -> Self {
        Self {
            plates_left: plates,
            outer_down: false,
            inner_down: false,
            inhibitor_turret_down: false,
            inhibitor_down_until: None,
        }
    }

    #[inline]
    pub fn inhibitor_down(&self) -> bool {
        self.inhibitor_down_until.is_some()
    }

    pub fn next_target(&self) -> PushTarget {
        if !self.outer_down {
            PushTarget::Turret(TurretTier::Outer)
        } else if !self.inner_down {
            PushTarget::Turret(TurretTier::Inner)
        } else if !self.inhibitor_turret_down {
            PushTarget::Turret(TurretTier::Inhibitor)
        } else if !self.inhibitor_down() {
            PushTarget::Inhibitor
        } else {
            PushTarget::Nexus
        }
    }

    /// Structures lost in this lane (plates excluded).
    pub fn depth(&self) -> u8 {
        [self.outer_down, self.inner_down, self.inhibitor_turret_down, self.inhibitor_down()]
            .iter()
            .filter(|down| **down)
            .count() as u8
    }
}

/// Per-side state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideState {
    pub kills: u32,
    /// This side's own structures (attacked by the opponent).
    pub lanes: [LaneStructures; 3],
    /// 0.0 ..= 100.0
    pub nexus_health: f32,
    pub dragons: Vec<DragonElement>,
    pub grubs: u8,
    pub herald_charge: bool,
    /// Enemy structures this side destroyed.
    pub structures_destroyed: u32,
    pub players: [PlayerRuntimeState; 5],
}

impl SideState {
    pub fn new(plates: u8) -> Self {
        Self {
            kills: 0,
            lanes: [LaneStructures::new(plates); 3],
            nexus_health: 100.0,
            dragons: Vec::new(),
            grubs: 0,
            herald_charge: false,
            structures_destroyed: 0,
            players: [PlayerRuntimeState::default(); 5],
        }
    }

    pub fn gold(&self) -> u32 {
        self.players.iter().map(|p| p.gold).sum()
    }

    pub fn alive_count(&self, second: u32) -> usize {
        self.players.iter().filter(|p| p.is_alive(second)).count()
    }

    pub fn open_inhibitors(&self) -> usize {
        self.lanes.iter().filter(|l| l.inhibitor_down()).count()
    }

    #[inline]
    pub fn lane(&self, lane: Lane) -> &LaneStructures {
        &self.lanes[lane.index()]
    }
}

impl Default for SideState {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Baron / Elder buff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedBuff {
    pub owner: Side,
    pub expires_at: u32,
}

impl TimedBuff {
    #[inline]
    pub fn active_for(&self, side: Side, second: u32) -> bool {
        self.owner == side && second < self.expires_at
    }
}

/// Spawn seconds of recurring objectives. `None` = not scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveTimers {
    pub dragon: Option<u32>,
    pub elder: Option<u32>,
    pub baron: Option<u32>,
}

/// Timing values the reducer needs, copied from `TickConfig` so that the
/// reducer stays a function of `(state, event)` only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateRules {
    pub max_level: u8,
    pub grubs_stacks: u8,
    pub dragon_respawn: u32,
    pub soul_dragons: u8,
    pub elder_delay: u32,
    pub elder_respawn: u32,
    pub elder_duration: u32,
    pub baron_respawn: u32,
    pub baron_duration: u32,
    pub assist_gold: u32,
    pub kill_xp: u32,
    pub inhibitor_gold: u32,
}

impl From<&TickConfig> for StateRules {
    fn from(cfg: &TickConfig) -> Self {
        Self {
            max_level: cfg.max_level,
            grubs_stacks: cfg.grubs_stacks,
            dragon_respawn: cfg.dragon_respawn,
            soul_dragons: cfg.soul_dragons,
            elder_delay: cfg.elder_delay,
            elder_respawn: cfg.elder_respawn,
            elder_duration: cfg.elder_duration,
            baron_respawn: cfg.baron_respawn,
            baron_duration: cfg.baron_duration,
            assist_gold: cfg.assist_gold,
            kill_xp: cfg.kill_xp,
            inhibitor_gold: cfg.inhibitor_gold,
        }
    }
}

impl Default for StateRules {
    fn default() -> Self {
        Self::from(&TickConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub minute: u32,
    pub status: GameStatus,
    /// Indexed by `Side::index()`.
    pub sides: [SideState; 2],
    pub soul: Option<(Side, DragonElement)>,
    pub baron: Option<TimedBuff>,
    pub elder: Option<TimedBuff>,
    pub timers: ObjectiveTimers,
    /// Fixed once the third dragon is taken.
    pub rift_element: Option<DragonElement>,
    pub dragons_taken: u8,
    pub rules: StateRules,
}

impl GameState {
    pub fn new(config: &TickConfig) -> Self {
        Self {
            minute: 0,
            status: GameStatus::Running,
            sides: [SideState::new(config.plates_per_turret), SideState::new(config.plates_per_turret)],
            soul: None,
            baron: None,
            elder: None,
            timers: ObjectiveTimers {
                dragon: Some(config.dragon_first_spawn),
                elder: None,
                baron: Some(config.baron_first_spawn),
            },
            rift_element: None,
            dragons_taken: 0,
            rules: StateRules::from(config),
        }
    }

    #[inline]
    pub fn side(&self, side: Side) -> &SideState {
        &self.sides[side.index()]
    }

    #[inline]
    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        &mut self.sides[side.index()]
    }

    #[inline]
    pub fn player(&self, p: PlayerRef) -> &PlayerRuntimeState {
        &self.sides[p.side.index()].players[p.role.index()]
    }

    #[inline]
    pub fn player_mut(&mut self, p: PlayerRef) -> &mut PlayerRuntimeState {
        &mut self.sides[p.side.index()].players[p.role.index()]
    }

    pub fn is_running(&self) -> bool {
        matches!(self.status, GameStatus::Running)
    }

    pub fn has_baron(&self, side: Side, second: u32) -> bool {
        self.baron.is_some_and(|b| b.active_for(side, second))
    }

    pub fn has_elder(&self, side: Side, second: u32) -> bool {
        self.elder.is_some_and(|b| b.active_for(side, second))
    }

    pub fn has_soul(&self, side: Side) -> bool {
        self.soul.is_some_and(|(owner, _)| owner == side)
    }

    /// Any side-wide buff active (baron, elder or soul).
    pub fn any_major_buff(&self, second: u32) -> bool {
        self.soul.is_some()
            || self.baron.is_some_and(|b| second < b.expires_at)
            || self.elder.is_some_and(|b| second < b.expires_at)
    }

    /// Whether a regular dragon is on the map at `second`.
    pub fn dragon_up(&self, second: u32) -> bool {
        self.soul.is_none() && self.timers.dragon.is_some_and(|s| s <= second)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&TickConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert!(state.is_running());
        assert_eq!(state.timers.dragon, Some(300));
        assert_eq!(state.timers.baron, Some(1200));
        for side in Side::BOTH {
            assert!((state.side(side).nexus_health - 100.0).abs() < 1e-6);
            assert_eq!(state.side(side).alive_count(0), 5);
            assert_eq!(state.side(side).lanes[0].plates_left, 5);
        }
    }

    #[test]
    fn test_lane_targets_in_order() {
        let mut lane = LaneStructures::new(5);
        assert_eq!(lane.next_target(), PushTarget::Turret(TurretTier::Outer));
        lane.outer_down = true;
        assert_eq!(lane.next_target(), PushTarget::Turret(TurretTier::Inner));
        lane.inner_down = true;
        lane.inhibitor_turret_down = true;
        assert_eq!(lane.next_target(), PushTarget::Inhibitor);
        lane.inhibitor_down_until = Some(900);
        assert_eq!(lane.next_target(), PushTarget::Nexus);
        assert_eq!(lane.depth(), 4);
    }

    #[test]
    fn test_buff_expiry_by_second() {
        let buff = TimedBuff { owner: Side::Blue, expires_at: 1500 };
        assert!(buff.active_for(Side::Blue, 1499));
        assert!(!buff.active_for(Side::Blue, 1500));
        assert!(!buff.active_for(Side::Red, 1400));
    }
}
