//! Structured game events.
//!
//! Events are the single source of truth for everything that happens in a
//! game: the tick engine decides which events occur and the reducer applies
//! them to `GameState`. Text lines in the event log are rendered from these
//! records, never parsed back.

use serde::{Deserialize, Serialize};

use super::map::{DragonElement, Lane, Objective, PlayerRef, Side, TurretTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    NexusDestroyed,
    TimeLimit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Start of a simulated minute. Expires timed buffs.
    MinuteStarted { minute: u32 },
    /// Passive farm for one minute, indexed `[side][role]`.
    MinuteIncome { gold: [[u32; 5]; 2], xp: [[u32; 5]; 2], damage: [[u32; 5]; 2] },
    InhibitorRespawned { side: Side, lane: Lane },
    ObjectiveTaken { side: Side, objective: Objective, gold: u32 },
    SoulClaimed { side: Side, element: DragonElement },
    Skirmish { winner: Side, damage: Vec<(PlayerRef, u32)> },
    Kill { killer: PlayerRef, victim: PlayerRef, assisters: Vec<PlayerRef>, gold: u32, respawn_at: u32 },
    FlashEscape { player: PlayerRef, ready_at: u32 },
    HeraldUsed { side: Side, lane: Lane },
    /// `side` is the attacking side in all structure events.
    PlateTaken { side: Side, lane: Lane, gold: u32 },
    TurretDestroyed { side: Side, lane: Lane, tier: TurretTier, gold: u32 },
    InhibitorDestroyed { side: Side, lane: Lane, respawn_at: u32 },
    NexusDamaged { side: Side, amount: f32 },
    GameEnded { winner: Side, reason: EndReason },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Absolute game second.
    pub second: u32,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl GameEvent {
    pub fn new(second: u32, kind: EventKind) -> Self {
        Self { second, kind }
    }

    /// Bookkeeping events (minute ticks, passive income, fight damage) are
    /// left out of the rendered log.
    pub fn is_notable(&self) -> bool {
        !matches!(
            self.kind,
            EventKind::MinuteStarted { .. } | EventKind::MinuteIncome { .. } | EventKind::Skirmish { .. }
        )
    }

    pub fn render(&self, names: &EventNames) -> String {
        let body = match &self.kind {
            EventKind::MinuteStarted { minute } => format!("Minute {minute}"),
            EventKind::MinuteIncome { .. } => "Passive income".to_string(),
            EventKind::InhibitorRespawned { side, lane } => {
                format!("{}'s {} inhibitor has respawned", names.team(*side), lane.label())
            }
            EventKind::ObjectiveTaken { side, objective, gold } => {
                format!("{} secured {} (+{} gold)", names.team(*side), objective.label(), gold)
            }
            EventKind::SoulClaimed { side, element } => {
                format!("{} claimed the {} Soul", names.team(*side), element.label())
            }
            EventKind::Skirmish { winner, .. } => {
                format!("{} won a skirmish", names.team(*winner))
            }
            EventKind::Kill { killer, victim, assisters, .. } => {
                let mut line = format!("{} slain by {}", names.player(*victim), names.player(*killer));
                if !assisters.is_empty() {
                    let helpers: Vec<String> = assisters.iter().map(|a| names.player_name(*a)).collect();
                    line.push_str(&format!(" (assists: {})", helpers.join(", ")));
                }
                line
            }
            EventKind::FlashEscape { player, .. } => {
                format!("{} flashed away to survive", names.player(*player))
            }
            EventKind::HeraldUsed { side, lane } => {
                format!("{} released the Herald {}", names.team(*side), lane.label())
            }
            EventKind::PlateTaken { side, lane, gold } => {
                format!("{} took a {} turret plate (+{} gold)", names.team(*side), lane.label(), gold)
            }
            EventKind::TurretDestroyed { side, lane, tier, .. } => format!(
                "{} destroyed {}'s {} {} turret",
                names.team(*side),
                names.team(side.opponent()),
                lane.label(),
                tier.label()
            ),
            EventKind::InhibitorDestroyed { side, lane, .. } => format!(
                "{} destroyed {}'s {} inhibitor",
                names.team(*side),
                names.team(side.opponent()),
                lane.label()
            ),
            EventKind::NexusDamaged { side, amount } => format!(
                "{} hit {}'s nexus for {:.0}",
                names.team(*side),
                names.team(side.opponent()),
                amount
            ),
            EventKind::GameEnded { winner, reason } => match reason {
                EndReason::NexusDestroyed => format!("{} destroyed the nexus. Victory!", names.team(*winner)),
                EndReason::TimeLimit => format!("Time limit reached. {} wins on advantage", names.team(*winner)),
            },
        };
        format!("[{}] {}", format_clock(self.second), body)
    }
}

/// `mm:ss`
pub fn format_clock(second: u32) -> String {
    format!("{:02}:{:02}", second / 60, second % 60)
}

/// Display names used when rendering events.
#[derive(Debug, Clone, Default)]
pub struct EventNames {
    /// Indexed by `Side::index()`.
    pub teams: [String; 2],
    /// `[side][role]` -> (player, champion)
    pub players: [[(String, String); 5]; 2],
}

impl EventNames {
    fn team(&self, side: Side) -> &str {
        &self.teams[side.index()]
    }

    fn player_name(&self, p: PlayerRef) -> String {
        self.players[p.side.index()][p.role.index()].0.clone()
    }

    fn player(&self, p: PlayerRef) -> String {
        let (name, champion) = &self.players[p.side.index()][p.role.index()];
        format!("{} ({})", name, champion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn names() -> EventNames {
        let mut names = EventNames { teams: ["T1".to_string(), "GEN".to_string()], ..Default::default() };
        names.players[0][Role::Mid.index()] = ("Faker".to_string(), "Ahri".to_string());
        names.players[1][Role::Adc.index()] = ("Ruler".to_string(), "Jinx".to_string());
        names.players[0][Role::Support.index()] = ("Keria".to_string(), "Rakan".to_string());
        names
    }

    #[test]
    fn test_clock_format() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(754), "12:34");
        assert_eq!(format_clock(4200), "70:00");
    }

    #[test]
    fn test_render_kill_with_assists() {
        let event = GameEvent::new(
            754,
            EventKind::Kill {
                killer: PlayerRef::new(Side::Blue, Role::Mid),
                victim: PlayerRef::new(Side::Red, Role::Adc),
                assisters: vec![PlayerRef::new(Side::Blue, Role::Support)],
                gold: 300,
                respawn_at: 790,
            },
        );
        assert_eq!(
            event.render(&names()),
            "[12:34] Ruler (Jinx) slain by Faker (Ahri) (assists: Keria)"
        );
    }

    #[test]
    fn test_bookkeeping_events_are_not_notable() {
        assert!(!GameEvent::new(60, EventKind::MinuteStarted { minute: 1 }).is_notable());
        assert!(GameEvent::new(
            60,
            EventKind::GameEnded { winner: Side::Red, reason: EndReason::NexusDestroyed }
        )
        .is_notable());
    }

    #[test]
    fn test_event_serializes_flat() {
        let event = GameEvent::new(300, EventKind::HeraldUsed { side: Side::Red, lane: Lane::Mid });
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["second"], 300);
        assert_eq!(value["type"], "herald_used");
        assert_eq!(value["lane"], "mid");
    }
}
