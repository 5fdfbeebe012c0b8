//! Map-level enums shared by the draft, the tick engine and event records.

use serde::{Deserialize, Serialize};

use super::player::Role;

/// Map side. Blue drafts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    Blue,
    Red,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Blue, Side::Red];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Blue => 0,
            Side::Red => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Blue => Side::Red,
            Side::Red => Side::Blue,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Side::Blue => "Blue",
            Side::Red => "Red",
        }
    }
}

/// A player slot on the map: side + role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRef {
    pub side: Side,
    pub role: Role,
}

impl PlayerRef {
    #[inline]
    pub const fn new(side: Side, role: Role) -> Self {
        Self { side, role }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lane {
    Top,
    Mid,
    Bot,
}

impl Lane {
    pub const ALL: [Lane; 3] = [Lane::Top, Lane::Mid, Lane::Bot];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Lane::Top => 0,
            Lane::Mid => 1,
            Lane::Bot => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Lane::Top => "top",
            Lane::Mid => "mid",
            Lane::Bot => "bot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurretTier {
    Outer,
    Inner,
    Inhibitor,
}

impl TurretTier {
    pub const fn label(self) -> &'static str {
        match self {
            TurretTier::Outer => "outer",
            TurretTier::Inner => "inner",
            TurretTier::Inhibitor => "inhibitor",
        }
    }
}

/// 드래곤 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragonElement {
    Infernal,
    Mountain,
    Ocean,
    Cloud,
    Hextech,
    Chemtech,
}

impl DragonElement {
    pub const ALL: [DragonElement; 6] = [
        DragonElement::Infernal,
        DragonElement::Mountain,
        DragonElement::Ocean,
        DragonElement::Cloud,
        DragonElement::Hextech,
        DragonElement::Chemtech,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            DragonElement::Infernal => "Infernal",
            DragonElement::Mountain => "Mountain",
            DragonElement::Ocean => "Ocean",
            DragonElement::Cloud => "Cloud",
            DragonElement::Hextech => "Hextech",
            DragonElement::Chemtech => "Chemtech",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "element")]
pub enum Objective {
    Grubs,
    Herald,
    Dragon(DragonElement),
    Elder,
    Baron,
}

impl Objective {
    pub fn label(self) -> String {
        match self {
            Objective::Grubs => "Void Grubs".to_string(),
            Objective::Herald => "Rift Herald".to_string(),
            Objective::Dragon(element) => format!("{} Dragon", element.label()),
            Objective::Elder => "Elder Dragon".to_string(),
            Objective::Baron => "Baron Nashor".to_string(),
        }
    }
}
