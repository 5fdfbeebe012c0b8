//! 임베딩된 게임 데이터
//!
//! `include_str!` 매크로를 사용하여 컴파일 시점에 JSON 데이터를 바이너리에 포함합니다.
//! 첫 호출 때 한 번만 파싱하고 이후에는 캐시를 빌려줍니다.

use std::sync::OnceLock;

use crate::error::{MatchError, Result};
use crate::models::{ChampionCatalog, InMemoryRosters};

// ============================================================================
// 임베딩된 JSON 데이터
// ============================================================================

/// 챔피언 카탈로그 JSON
pub const CHAMPIONS_JSON: &str = include_str!("../../../../data/champions.json");

/// 샘플 리그 로스터 JSON
pub const ROSTERS_JSON: &str = include_str!("../../../../data/rosters.json");

// ============================================================================
// 캐싱된 데이터 (한 번만 파싱)
// ============================================================================

static CHAMPIONS: OnceLock<std::result::Result<ChampionCatalog, String>> = OnceLock::new();
static ROSTERS: OnceLock<std::result::Result<InMemoryRosters, String>> = OnceLock::new();

fn cached<T>(cell: &'static OnceLock<std::result::Result<T, String>>, parse: impl FnOnce() -> Result<T>) -> Result<&'static T> {
    cell.get_or_init(|| parse().map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| MatchError::Data(e.clone()))
}

// ============================================================================
// 공개 API
// ============================================================================

/// 임베딩된 챔피언 카탈로그
///
/// 첫 호출 시 JSON 파싱, 이후 캐시된 데이터 반환
pub fn champion_catalog() -> Result<&'static ChampionCatalog> {
    cached(&CHAMPIONS, || ChampionCatalog::from_json(CHAMPIONS_JSON))
}

/// 임베딩된 샘플 로스터
pub fn sample_rosters() -> Result<&'static InMemoryRosters> {
    cached(&ROSTERS, || InMemoryRosters::from_json(ROSTERS_JSON))
}

// ============================================================================
// 테스트
// ============================================================================
