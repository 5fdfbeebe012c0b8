//! 게임 데이터 모듈
//!
//! 바이너리에 임베딩된 기본 데이터를 제공합니다.
//! - Champion catalog (패치 기준 챔피언 풀)
//! - Sample team rosters (리그 팀 로스터)

pub mod embedded;

pub use embedded::{champion_catalog, sample_rosters, CHAMPIONS_JSON, ROSTERS_JSON};
