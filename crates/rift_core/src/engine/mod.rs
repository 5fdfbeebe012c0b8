//! # Simulation engine
//!
//! 드래프트 → 라인업 → 분 단위 경기 → 포스트게임 → 시리즈 순서로 진행.
//!
//! All randomness comes from the caller's `Rng`; the engine never reads
//! the clock or touches the filesystem.

pub mod combat;
pub mod config;
pub mod draft;
pub mod lineup;
pub mod postgame;
pub mod power;
pub mod scoring;
pub mod selection;
pub mod series;
pub mod synergy;
pub mod tick;

#[cfg(test)]
mod series_test;

pub use combat::{CombatOutcome, CombatResolver, SidePower};
pub use config::EngineConfig;
pub use draft::{DraftOutcome, DraftSimulator};
pub use lineup::{Lineup, Participant};
pub use postgame::{PostGameEvaluator, SeriesTally};
pub use power::PowerModel;
pub use scoring::ScoringModel;
pub use series::{simulate_round, MatchOrchestrator};
pub use tick::{reduce, GameOutcome, GameState, TickEngine};
