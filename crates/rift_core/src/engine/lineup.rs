//! Drafted lineups handed from the draft to the tick engine.

use serde::{Deserialize, Serialize};

use crate::models::{Champion, Player, Role, TeamRoster};

/// One player locked onto one champion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub player: Player,
    pub champion: Champion,
}

/// Five participants in `Role::ALL` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub team: String,
    pub participants: [Participant; 5],
}

impl Lineup {
    /// Pair every roster player with the champion picked for their role.
    /// Missing picks become role placeholders.
    pub fn from_picks(roster: &TeamRoster, picks: &[Option<Champion>; 5]) -> Self {
        let participants = Role::ALL.map(|role| {
            let champion = match &picks[role.index()] {
                Some(c) => c.clone(),
                None => {
                    log::warn!("{}: no champion for {}, using placeholder", roster.name, role);
                    Champion::placeholder(role)
                }
            };
            Participant { player: roster.player(role).clone(), champion }
        });
        Self { team: roster.name.clone(), participants }
    }

    #[inline]
    pub fn participant(&self, role: Role) -> &Participant {
        &self.participants[role.index()]
    }

    pub fn champion_names(&self) -> [&str; 5] {
        [0, 1, 2, 3, 4].map(|i| self.participants[i].champion.name.as_str())
    }
}
