//! # rift_core - Deterministic 5v5 Esports Series Simulation Engine
//!
//! This library simulates a professional MOBA series end to end:
//! ban/pick draft, a minute-by-minute game, post-game awards and BO3/BO5
//! series with fearless draft.
//!
//! ## Features
//! - Deterministic simulation (same seed = same result)
//! - Structured event log with a pure `(state, event) -> state` reducer
//! - Player of the Game / Player of the Series
//! - JSON API for easy integration with game clients

// Many engine entry points take rng + lineups + side + second + modifiers
#![allow(clippy::too_many_arguments)]
// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]
// Loop style - can fix incrementally
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{simulate_series_json, simulate_set_json, SeriesRequest, SetRequest};
pub use error::{MatchError, Result};

// Re-export engine entry points
pub use engine::{simulate_round, EngineConfig, MatchOrchestrator, TickEngine};

// Re-export core models
pub use models::{
    Champion, ChampionCatalog, Difficulty, InMemoryRosters, Player, Role, RosterProvider, SeriesFormat,
    SeriesResult, SetResult, SimOptions, TeamRoster,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
