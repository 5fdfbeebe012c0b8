//! Set and series result structures.
//!
//! These are the output contract consumed by bracket/standings code outside
//! this crate. A set with `winner_name == None` was not played (incomplete
//! draft) and must not be recorded.

use serde::{Deserialize, Serialize};

use super::events::{EndReason, GameEvent};
use super::options::SeriesFormat;
use super::player::Role;

/// A value per series team (A = first named team, B = second).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TeamPair<T> {
    pub a: T,
    pub b: T,
}

impl<T> TeamPair<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }
}

/// End-of-game line for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub name: String,
    pub team: String,
    pub role: Role,
    pub champion: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub damage: u32,
    pub gold: u32,
    pub level: u8,
}

impl PlayerLine {
    pub fn kda_string(&self) -> String {
        format!("{}/{}/{}", self.kills, self.deaths, self.assists)
    }
}

/// Player of the Game / Series award.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MvpAward {
    pub player: String,
    pub team: String,
    pub role: Role,
    /// Champion for a single set, `None` for a series award.
    pub champion: Option<String>,
    pub score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetResult {
    pub set_number: u8,
    pub blue_team: String,
    pub red_team: String,
    pub winner_name: Option<String>,
    pub summary: String,
    pub picks: TeamPair<Vec<String>>,
    pub bans: TeamPair<Vec<String>>,
    /// Champions picked in this set; feeds the fearless list.
    pub used_champions: Vec<String>,
    pub pog_player: Option<MvpAward>,
    pub draft_log: Vec<String>,
    pub event_log: Vec<String>,
    pub events: Vec<GameEvent>,
    pub duration_seconds: u32,
    pub end_reason: Option<EndReason>,
    pub kills: TeamPair<u32>,
    pub gold: TeamPair<u32>,
    pub player_lines: TeamPair<Vec<PlayerLine>>,
}

impl SetResult {
    pub fn is_played(&self) -> bool {
        self.winner_name.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesResult {
    pub team_a: String,
    pub team_b: String,
    pub format: SeriesFormat,
    pub sets: Vec<SetResult>,
    pub wins: TeamPair<u8>,
    pub winner: Option<String>,
    /// e.g. "3:1" from team A's perspective
    pub score_string: String,
    pub series_mvp: Option<MvpAward>,
    /// Fearless list after the last completed set.
    pub fearless_bans: Vec<String>,
    /// Why the series stopped early, if it did.
    pub aborted: Option<String>,
}
