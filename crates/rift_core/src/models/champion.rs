//! Champion reference data
//!
//! 밸런스 패치 기준의 챔피언 정보 (읽기 전용).
//! The catalog is loaded once and borrowed by every draft and game.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::player::Role;
use crate::error::{MatchError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Physical,
    Magic,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChampionClass {
    Fighter,
    Mage,
    Assassin,
    Marksman,
    Tank,
    Enchanter,
}

/// Game phase used by phase stats, stat weights and role weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// minute < 15
    Early,
    /// 15 ..= 25
    Mid,
    /// minute >= 26
    Late,
}

impl GamePhase {
    pub fn from_minute(minute: u32) -> Self {
        if minute < 15 {
            GamePhase::Early
        } else if minute <= 25 {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }
}

/// 페이즈별 챔피언 강도 (1-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseStats {
    pub early: u8,
    pub mid: u8,
    pub late: u8,
}

impl Default for PhaseStats {
    fn default() -> Self {
        Self { early: 5, mid: 5, late: 5 }
    }
}

impl PhaseStats {
    #[inline]
    pub fn for_phase(&self, phase: GamePhase) -> u8 {
        match phase {
            GamePhase::Early => self.early,
            GamePhase::Mid => self.mid,
            GamePhase::Late => self.late,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Champion {
    pub name: String,
    pub role: Role,
    /// 1 = strongest in the current patch, 5 = weakest
    pub tier: u8,
    pub damage_type: DamageType,
    pub class: ChampionClass,
    /// Names of champions this champion is strong against.
    #[serde(default)]
    pub counters: Vec<String>,
    #[serde(default)]
    pub phase: PhaseStats,
}

impl Champion {
    /// Stand-in used when a lineup slot could not be resolved.
    pub fn placeholder(role: Role) -> Self {
        Self {
            name: format!("Unknown {}", role.code()),
            role,
            tier: 5,
            damage_type: DamageType::Mixed,
            class: role.default_class(),
            counters: Vec::new(),
            phase: PhaseStats::default(),
        }
    }

    #[inline]
    pub fn counters(&self, other: &str) -> bool {
        self.counters.iter().any(|c| c == other)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MatchError::InvalidChampion {
                name: self.name.clone(),
                reason: "empty name".to_string(),
            });
        }
        if !(1..=5).contains(&self.tier) {
            return Err(MatchError::InvalidChampion {
                name: self.name.clone(),
                reason: format!("tier must be 1..=5, got {}", self.tier),
            });
        }
        for value in [self.phase.early, self.phase.mid, self.phase.late] {
            if !(1..=10).contains(&value) {
                return Err(MatchError::InvalidChampion {
                    name: self.name.clone(),
                    reason: format!("phase stats must be 1..=10, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// Ordered champion list with name lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<Champion>", into = "Vec<Champion>")]
pub struct ChampionCatalog {
    champions: Vec<Champion>,
    index: HashMap<String, usize>,
}

impl ChampionCatalog {
    pub fn new(champions: Vec<Champion>) -> Result<Self> {
        let mut index = HashMap::with_capacity(champions.len());
        for (i, champion) in champions.iter().enumerate() {
            champion.validate()?;
            if index.insert(champion.name.clone(), i).is_some() {
                return Err(MatchError::DuplicateChampion(champion.name.clone()));
            }
        }
        Ok(Self { champions, index })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let champions: Vec<Champion> = serde_json::from_str(json)?;
        Self::new(champions)
    }

    pub fn get(&self, name: &str) -> Option<&Champion> {
        self.index.get(name).map(|&i| &self.champions[i])
    }

    pub fn by_role(&self, role: Role) -> impl Iterator<Item = &Champion> + '_ {
        self.champions.iter().filter(move |c| c.role == role)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Champion> + '_ {
        self.champions.iter()
    }

    pub fn len(&self) -> usize {
        self.champions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

impl TryFrom<Vec<Champion>> for ChampionCatalog {
    type Error = MatchError;

    fn try_from(champions: Vec<Champion>) -> Result<Self> {
        Self::new(champions)
    }
}

impl From<ChampionCatalog> for Vec<Champion> {
    fn from(catalog: ChampionCatalog) -> Self {
        catalog.champions
    }
}
