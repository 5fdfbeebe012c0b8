pub mod champion;
pub mod events;
pub mod map;
pub mod match_result;
pub mod options;
pub mod player;

pub use champion::{Champion, ChampionCatalog, ChampionClass, DamageType, GamePhase, PhaseStats};
pub use events::{format_clock, EndReason, EventKind, EventNames, GameEvent};
pub use map::{DragonElement, Lane, Objective, PlayerRef, Side, TurretTier};
pub use match_result::{MvpAward, PlayerLine, SeriesResult, SetResult, TeamPair};
pub use options::{Difficulty, SeriesFormat, SimOptions};
pub use player::{
    InMemoryRosters, MasteryRecord, Player, PlayerStats, Role, RosterProvider, TeamRoster,
};
