//! JSON API for series and single-set simulation
//!
//! Request/response are plain JSON strings so that game clients can call
//! the engine without linking Rust types. Errors come back as
//! `"CODE: message"` strings.

use std::borrow::Cow;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::data;
use crate::engine::{EngineConfig, MatchOrchestrator};
use crate::models::{
    Champion, ChampionCatalog, InMemoryRosters, Player, RosterProvider, SeriesResult, SetResult, Side,
    SimOptions, TeamRoster,
};

/// Only schema understood by this build.
pub const SCHEMA_VERSION: u8 = 1;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNSUPPORTED_SCHEMA: &str = "UNSUPPORTED_SCHEMA";
    pub const INVALID_ROSTER: &str = "INVALID_ROSTER";
    pub const INVALID_CATALOG: &str = "INVALID_CATALOG";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
    pub const DUPLICATE_TEAM: &str = "DUPLICATE_TEAM";
    pub const DATA_UNAVAILABLE: &str = "DATA_UNAVAILABLE";
    pub const SERIALIZATION: &str = "SERIALIZATION";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

// ============================================================================
// Request / Response
// ============================================================================

/// A team by name, optionally with its five players embedded.
///
/// Without players the embedded sample rosters are used, and teams unknown
/// there get synthetic players.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamData {
    pub name: String,
    #[serde(default)]
    pub players: Option<Vec<Player>>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub team_a: TeamData,
    pub team_b: TeamData,
    /// Defaults to the embedded champion catalog.
    #[serde(default)]
    pub champions: Option<Vec<Champion>>,
    #[serde(default)]
    pub options: SimOptions,
    /// Partial overrides are fine, missing fields keep their defaults.
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

/// One set between `blue_team` and `red_team`. `options.fearless_bans`
/// is used as the locked champion list.
#[derive(Debug, Deserialize)]
pub struct SetRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub blue_team: TeamData,
    pub red_team: TeamData,
    #[serde(default = "default_set_number")]
    pub set_number: u8,
    #[serde(default)]
    pub champions: Option<Vec<Champion>>,
    #[serde(default)]
    pub options: SimOptions,
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

fn default_set_number() -> u8 {
    1
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub result: SeriesResult,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SetResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub result: SetResult,
}

// ============================================================================
// Entry points
// ============================================================================

pub fn simulate_series_json(request_json: &str) -> Result<String, String> {
    let request: SeriesRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("Invalid JSON request: {e}")))?;
    check_schema(request.schema_version)?;

    let config = resolve_config(request.config)?;
    let catalog = resolve_catalog(request.champions)?;
    let rosters = resolve_rosters([&request.team_a, &request.team_b])?;

    info!(
        "simulate_series_json: {} vs {} ({:?}, seed {})",
        request.team_a.name, request.team_b.name, request.options.series_format, request.seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let result = MatchOrchestrator::new(&catalog, &rosters, &config).play_series(
        &mut rng,
        &request.team_a.name,
        &request.team_b.name,
        &request.options,
    );
    if let Some(reason) = &result.aborted {
        warn!("series aborted: {}", reason);
    }

    let response = SeriesResponse { schema_version: SCHEMA_VERSION, seed: request.seed, result };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

pub fn simulate_set_json(request_json: &str) -> Result<String, String> {
    let request: SetRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, format!("Invalid JSON request: {e}")))?;
    check_schema(request.schema_version)?;

    let config = resolve_config(request.config)?;
    let catalog = resolve_catalog(request.champions)?;
    let rosters = resolve_rosters([&request.blue_team, &request.red_team])?;
    let blue = rosters.roster(&request.blue_team.name);
    let red = rosters.roster(&request.red_team.name);

    info!("simulate_set_json: {} (blue) vs {} (red), seed {}", blue.name, red.name, request.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let result = MatchOrchestrator::new(&catalog, &rosters, &config).play_set(
        &mut rng,
        request.set_number,
        &blue,
        &red,
        Side::Blue,
        &request.options,
        &request.options.fearless_bans,
    );
    if !result.is_played() {
        warn!("{}", result.summary);
    }

    let response = SetResponse { schema_version: SCHEMA_VERSION, seed: request.seed, result };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

// ============================================================================
// Helpers
// ============================================================================

fn check_schema(version: u8) -> Result<(), String> {
    if version == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(err_code(error_codes::UNSUPPORTED_SCHEMA, format!("Unsupported schema version: {version}")))
    }
}

fn resolve_config(config: Option<EngineConfig>) -> Result<EngineConfig, String> {
    let config = config.unwrap_or_default();
    config.validate().map_err(|e| err_code(error_codes::INVALID_CONFIG, e))?;
    Ok(config)
}

fn resolve_catalog(champions: Option<Vec<Champion>>) -> Result<Cow<'static, ChampionCatalog>, String> {
    match champions {
        Some(list) => {
            debug!("using request champion list ({} champions)", list.len());
            ChampionCatalog::new(list).map(Cow::Owned).map_err(|e| err_code(error_codes::INVALID_CATALOG, e))
        }
        None => data::champion_catalog().map(Cow::Borrowed).map_err(|e| err_code(error_codes::DATA_UNAVAILABLE, e)),
    }
}

/// Sample rosters overlaid with any players embedded in the request.
fn resolve_rosters(teams: [&TeamData; 2]) -> Result<InMemoryRosters, String> {
    if teams[0].name == teams[1].name {
        return Err(err_code(error_codes::DUPLICATE_TEAM, format!("both teams are named '{}'", teams[0].name)));
    }

    let mut rosters = match data::sample_rosters() {
        Ok(sample) => sample.clone(),
        Err(e) => {
            warn!("sample rosters unavailable, continuing without them: {}", e);
            InMemoryRosters::default()
        }
    };
    for team in teams {
        if let Some(players) = &team.players {
            let roster = TeamRoster::new(team.name.clone(), players.clone())
                .map_err(|e| err_code(error_codes::INVALID_ROSTER, e))?;
            rosters.insert(roster);
        }
    }
    Ok(rosters)
}

// ============================================================================
// 테스트
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeriesFormat;
    use serde_json::json;

    fn series_request(seed: u64) -> serde_json::Value {
        json!({
            "schema_version": 1,
            "seed": seed,
            "team_a": { "name": "T1" },
            "team_b": { "name": "Gen.G" },
            "options": { "series_format": "BO5", "difficulty": "hard", "player_team": "T1" }
        })
    }

    #[test]
    fn test_series_json_with_embedded_data() {
        let out = simulate_series_json(&series_request(42).to_string()).unwrap();
        let response: SeriesResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(response.schema_version, 1);
        assert_eq!(response.result.format, SeriesFormat::Bo5);
        assert!(response.result.aborted.is_none());
        assert!(response.result.winner.is_some());
        assert!(response.result.series_mvp.is_some());
    }

    #[test]
    fn test_series_json_is_deterministic() {
        let a = simulate_series_json(&series_request(9).to_string()).unwrap();
        let b = simulate_series_json(&series_request(9).to_string()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_unknown_schema() {
        let mut request = series_request(1);
        request["schema_version"] = json!(2);
        let err = simulate_series_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::UNSUPPORTED_SCHEMA), "{err}");
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = simulate_series_json("{ not json").unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_REQUEST));
    }

    #[test]
    fn test_rejects_identical_team_names() {
        let request = json!({
            "schema_version": 1, "seed": 1,
            "team_a": { "name": "T1" }, "team_b": { "name": "T1" }
        });
        let err = simulate_series_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::DUPLICATE_TEAM));
    }

    #[test]
    fn test_rejects_invalid_config_override() {
        let mut request = series_request(1);
        request["config"] = json!({ "tick": { "max_minutes": 0 } });
        let err = simulate_series_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_CONFIG), "{err}");
    }

    #[test]
    fn test_rejects_roster_missing_role() {
        let request = json!({
            "schema_version": 1, "seed": 1,
            "blue_team": { "name": "Home", "players": [
                { "name": "a", "role": "TOP", "overall": 70 },
                { "name": "b", "role": "TOP", "overall": 70 },
                { "name": "c", "role": "MID", "overall": 70 },
                { "name": "d", "role": "ADC", "overall": 70 },
                { "name": "e", "role": "SUP", "overall": 70 }
            ]},
            "red_team": { "name": "Away" }
        });
        let err = simulate_set_json(&request.to_string()).unwrap_err();
        assert!(err.starts_with(error_codes::INVALID_ROSTER), "{err}");
    }

    #[test]
    fn test_set_json_with_embedded_players_and_locks() {
        let request = json!({
            "schema_version": 1, "seed": 5, "set_number": 2,
            "blue_team": { "name": "Home", "players": [
                { "name": "h1", "role": "TOP", "overall": 78 },
                { "name": "h2", "role": "JGL", "overall": 78 },
                { "name": "h3", "role": "MID", "overall": 78 },
                { "name": "h4", "role": "ADC", "overall": 78 },
                { "name": "h5", "role": "SUP", "overall": 78 }
            ]},
            "red_team": { "name": "T1" },
            "options": { "fearless_bans": ["Azir", "Rakan"] }
        });
        let out = simulate_set_json(&request.to_string()).unwrap();
        let response: SetResponse = serde_json::from_str(&out).unwrap();
        let set = response.result;
        assert_eq!(set.set_number, 2);
        assert_eq!(set.blue_team, "Home");
        assert!(set.is_played());
        assert!(!set.used_champions.iter().any(|c| c == "Azir" || c == "Rakan"));
        assert_eq!(set.player_lines.a[0].name, "h1");
        assert!(!set.event_log.is_empty());
    }

    #[test]
    fn test_thin_request_catalog_reports_unplayed_set() {
        let champions: Vec<_> = ["TOP", "JGL", "MID", "ADC", "SUP"]
            .iter()
            .map(|role| json!({ "name": format!("Only {role}"), "role": role, "tier": 3,
                                "damage_type": "physical", "class": "fighter" }))
            .collect();
        let request = json!({
            "schema_version": 1, "seed": 3,
            "blue_team": { "name": "A" }, "red_team": { "name": "B" },
            "champions": champions
        });
        let out = simulate_set_json(&request.to_string()).unwrap();
        let response: SetResponse = serde_json::from_str(&out).unwrap();
        assert!(response.result.winner_name.is_none());
        assert!(response.result.summary.contains("draft incomplete"));
    }
}
