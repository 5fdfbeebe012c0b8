//! Player, roster and roster provider types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::champion::ChampionClass;
use crate::error::{MatchError, Result};

/// Lane role. Every roster has exactly one player per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "TOP")]
    Top,
    #[serde(rename = "JGL", alias = "JUNGLE")]
    Jungle,
    #[serde(rename = "MID")]
    Mid,
    #[serde(rename = "ADC", alias = "BOT")]
    Adc,
    #[serde(rename = "SUP", alias = "SUPPORT")]
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Role::Top, Role::Jungle, Role::Mid, Role::Adc, Role::Support];

    /// Slot index (0-4) in lineups and runtime arrays.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Role::Top => 0,
            Role::Jungle => 1,
            Role::Mid => 2,
            Role::Adc => 3,
            Role::Support => 4,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Role::Top => "TOP",
            Role::Jungle => "JGL",
            Role::Mid => "MID",
            Role::Adc => "ADC",
            Role::Support => "SUP",
        }
    }

    pub(crate) fn default_class(self) -> ChampionClass {
        match self {
            Role::Top => ChampionClass::Fighter,
            Role::Jungle => ChampionClass::Fighter,
            Role::Mid => ChampionClass::Mage,
            Role::Adc => ChampionClass::Marksman,
            Role::Support => ChampionClass::Enchanter,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// 선수 세부 능력치 (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub laning: u8,
    pub mechanics: u8,
    pub teamfight: u8,
    pub growth: u8,
    pub stability: u8,
    pub macro_play: u8,
}

impl PlayerStats {
    pub fn uniform(value: u8) -> Self {
        Self {
            laning: value,
            mechanics: value,
            teamfight: value,
            growth: value,
            stability: value,
            macro_play: value,
        }
    }
}

/// Historical record of one player on one champion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasteryRecord {
    pub games: u32,
    /// 0.0 - 1.0
    pub winrate: f32,
    pub kda: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub role: Role,
    pub overall: u8,
    /// Falls back to `overall` on every axis when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PlayerStats>,
    #[serde(default)]
    pub mastery: HashMap<String, MasteryRecord>,
}

impl Player {
    pub fn new(name: impl Into<String>, role: Role, overall: u8) -> Self {
        Self { name: name.into(), role, overall, stats: None, mastery: HashMap::new() }
    }

    /// Synthetic average player used when a team has no data.
    pub fn placeholder(team: &str, role: Role) -> Self {
        let overall = match role {
            Role::Top => 72,
            Role::Jungle => 71,
            Role::Mid => 74,
            Role::Adc => 73,
            Role::Support => 70,
        };
        Self::new(format!("{team} {}", role.code()), role, overall)
    }

    #[inline]
    pub fn stats(&self) -> PlayerStats {
        self.stats.unwrap_or_else(|| PlayerStats::uniform(self.overall))
    }

    pub fn with_mastery(mut self, champion: impl Into<String>, record: MasteryRecord) -> Self {
        self.mastery.insert(champion.into(), record);
        self
    }

    /// Ratings are 0-100 and mastery win rates 0-1.
    fn rating_error(&self) -> Option<String> {
        if self.overall > 100 {
            return Some(format!("player {} overall must be 0..=100, got {}", self.name, self.overall));
        }
        if let Some(s) = &self.stats {
            let axes = [
                ("laning", s.laning),
                ("mechanics", s.mechanics),
                ("teamfight", s.teamfight),
                ("growth", s.growth),
                ("stability", s.stability),
                ("macro_play", s.macro_play),
            ];
            if let Some((axis, value)) = axes.into_iter().find(|&(_, v)| v > 100) {
                return Some(format!("player {} {axis} must be 0..=100, got {value}", self.name));
            }
        }
        for (champion, record) in &self.mastery {
            if !(0.0..=1.0).contains(&record.winrate) || !(record.kda >= 0.0 && record.kda.is_finite()) {
                return Some(format!("player {} has an invalid mastery record on {champion}", self.name));
            }
        }
        None
    }
}

#[derive(Debug, Deserialize)]
struct RosterData {
    name: String,
    players: Vec<Player>,
}

/// Exactly five players, stored in `Role::ALL` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RosterData")]
pub struct TeamRoster {
    pub name: String,
    players: [Player; 5],
}

impl TeamRoster {
    pub fn new(name: impl Into<String>, players: Vec<Player>) -> Result<Self> {
        let name = name.into();
        if players.len() != 5 {
            return Err(MatchError::InvalidRoster {
                team: name,
                reason: format!("expected 5 players, found {}", players.len()),
            });
        }

        let mut slots: [Option<Player>; 5] = Default::default();
        for player in players {
            if let Some(reason) = player.rating_error() {
                return Err(MatchError::InvalidRoster { team: name, reason });
            }
            let slot = &mut slots[player.role.index()];
            if slot.is_some() {
                return Err(MatchError::InvalidRoster {
                    team: name,
                    reason: format!("duplicate role {}", player.role),
                });
            }
            *slot = Some(player);
        }

        let mut ordered = Vec::with_capacity(5);
        for (role, slot) in Role::ALL.into_iter().zip(slots) {
            match slot {
                Some(p) => ordered.push(p),
                None => return Err(MatchError::MissingRole { team: name, role }),
            }
        }
        let players: [Player; 5] = ordered
            .try_into()
            .map_err(|_| MatchError::InvalidRoster { team: name.clone(), reason: "slot mismatch".into() })?;
        Ok(Self { name, players })
    }

    pub fn placeholder(team: &str) -> Self {
        Self {
            name: team.to_string(),
            players: Role::ALL.map(|role| Player::placeholder(team, role)),
        }
    }

    #[inline]
    pub fn player(&self, role: Role) -> &Player {
        &self.players[role.index()]
    }

    pub fn players(&self) -> &[Player; 5] {
        &self.players
    }

    pub fn average_overall(&self) -> f32 {
        let sum: u32 = self.players.iter().map(|p| p.overall as u32).sum();
        sum as f32 / 5.0
    }
}

impl TryFrom<RosterData> for TeamRoster {
    type Error = MatchError;

    fn try_from(data: RosterData) -> Result<Self> {
        TeamRoster::new(data.name, data.players)
    }
}

/// Read-only source of team rosters, injected into the orchestrator.
pub trait RosterProvider {
    /// Never fails: unknown teams get synthetic 70-75 rated players.
    fn roster(&self, team: &str) -> TeamRoster;
}

/// Roster repository backed by a map, e.g. loaded from JSON.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRosters {
    teams: HashMap<String, TeamRoster>,
}

impl InMemoryRosters {
    pub fn new(rosters: impl IntoIterator<Item = TeamRoster>) -> Self {
        Self { teams: rosters.into_iter().map(|r| (r.name.clone(), r)).collect() }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let rosters: Vec<TeamRoster> = serde_json::from_str(json)?;
        Ok(Self::new(rosters))
    }

    pub fn insert(&mut self, roster: TeamRoster) {
        self.teams.insert(roster.name.clone(), roster);
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.keys().map(String::as_str)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.teams.contains_key(team)
    }
}

impl RosterProvider for InMemoryRosters {
    fn roster(&self, team: &str) -> TeamRoster {
        match self.teams.get(team) {
            Some(roster) => roster.clone(),
            None => {
                log::warn!("No roster data for '{}', using placeholder players", team);
                TeamRoster::placeholder(team)
            }
        }
    }
}
