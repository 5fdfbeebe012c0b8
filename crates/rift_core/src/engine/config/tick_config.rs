//! Tick engine configuration (economy, objectives, skirmishes, pushes)
//!
//! All times are absolute game seconds unless the field says minute.

use serde::{Deserialize, Serialize};

/// 틱 엔진 파라미터
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TickConfig {
    /// Hard ceiling on simulated minutes (기본: 70)
    pub max_minutes: u32,
    /// Linear tilt applied by the combat resolver (기본: 0.02)
    pub combat_tilt: f32,

    // === Economy ===
    /// Passive gold per minute for early / mid / late
    pub passive_gold: [u32; 3],
    /// Passive xp per minute for early / mid / late
    pub passive_xp: [u32; 3],
    /// Farm share in `Role::ALL` order
    pub role_gold_weights: [f32; 5],
    pub role_xp_weights: [f32; 5],
    /// Lane damage per minute before role/stat scaling
    pub passive_damage: u32,
    pub max_level: u8,

    // === Fixed objectives ===
    pub grubs_minute: u32,
    pub grubs_stacks: u8,
    pub grubs_gold: u32,
    pub herald_minute: u32,
    pub herald_gold: u32,

    // === Dragons ===
    pub dragon_first_spawn: u32,
    pub dragon_respawn: u32,
    pub dragon_gold: u32,
    pub soul_dragons: u8,
    pub elder_delay: u32,
    pub elder_respawn: u32,
    pub elder_duration: u32,
    pub elder_gold: u32,

    // === Baron ===
    pub baron_first_spawn: u32,
    pub baron_respawn: u32,
    pub baron_duration: u32,
    pub baron_gold: u32,

    // === Skirmish ===
    /// Base skirmish chance for early / mid / late
    pub skirmish_base: [f32; 3],
    pub skirmish_buff_bonus: f32,
    pub skirmish_dragon_bonus: f32,
    pub skirmish_cap: f32,
    /// Relative weights for 1..=5 kills
    pub kill_count_weights: [f32; 5],
    /// Killer weights in `Role::ALL` order
    pub killer_weights: [f32; 5],
    pub assist_weights: [f32; 5],
    pub victim_weights: [f32; 5],
    pub max_assisters: usize,
    pub kill_gold: u32,
    pub assist_gold: u32,
    pub kill_xp: u32,
    pub respawn_base: f32,
    pub respawn_per_level: f32,
    pub respawn_late_per_minute: f32,
    pub respawn_late_after_minute: u32,
    pub flash_escape_chance: f32,
    pub flash_cooldown: u32,
    pub counter_kill_base: f32,

    // === Structures ===
    /// No structure pushes before this minute
    pub push_start_minute: u32,
    pub plates_per_turret: u8,
    pub plate_gold: u32,
    /// Plates fall off at this minute
    pub plates_until_minute: u32,
    pub plate_chance: f32,
    /// Outer turret chance while plates are still up
    pub outer_chance_plated: f32,
    pub outer_chance: f32,
    pub inner_chance: f32,
    pub inhibitor_turret_chance: f32,
    pub inhibitor_chance: f32,
    pub nexus_chance: f32,
    /// Gold for outer / inner / inhibitor turret
    pub turret_gold: [u32; 3],
    pub inhibitor_gold: u32,
    pub inhibitor_respawn: u32,
    pub nexus_chip_min: f32,
    pub nexus_chip_max: f32,
    pub push_power_min: f32,
    pub push_power_max: f32,
    pub baron_push_bonus: f32,
    pub elder_push_bonus: f32,
    pub herald_push_bonus: f32,
    pub open_inhibitor_push_bonus: f32,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            max_minutes: 70,
            combat_tilt: 0.02,

            passive_gold: [330, 380, 420],
            passive_xp: [420, 520, 600],
            // TOP, JGL, MID, ADC, SUP
            role_gold_weights: [1.0, 0.9, 1.05, 1.1, 0.6],
            role_xp_weights: [1.05, 0.95, 1.05, 0.95, 0.8],
            passive_damage: 250,
            max_level: 18,

            grubs_minute: 7,
            grubs_stacks: 3,
            grubs_gold: 300,
            herald_minute: 15,
            herald_gold: 400,

            dragon_first_spawn: 300,
            dragon_respawn: 300,
            dragon_gold: 250,
            soul_dragons: 4,
            elder_delay: 360,
            elder_respawn: 360,
            elder_duration: 150,
            elder_gold: 500,

            baron_first_spawn: 1_200,
            baron_respawn: 360,
            baron_duration: 180,
            baron_gold: 1_500,

            skirmish_base: [0.25, 0.35, 0.45],
            skirmish_buff_bonus: 0.15,
            skirmish_dragon_bonus: 0.10,
            skirmish_cap: 0.90,
            kill_count_weights: [0.35, 0.28, 0.18, 0.12, 0.07],
            killer_weights: [2.0, 1.5, 2.5, 3.0, 0.5],
            assist_weights: [1.0, 2.5, 1.0, 1.0, 3.0],
            victim_weights: [1.0, 1.0, 1.1, 1.2, 1.3],
            max_assisters: 3,
            kill_gold: 300,
            assist_gold: 150,
            kill_xp: 250,
            respawn_base: 10.0,
            respawn_per_level: 2.5,
            respawn_late_per_minute: 1.5,
            respawn_late_after_minute: 15,
            flash_escape_chance: 0.25,
            flash_cooldown: 300,
            counter_kill_base: 0.30,

            push_start_minute: 4,
            plates_per_turret: 5,
            plate_gold: 125,
            plates_until_minute: 14,
            plate_chance: 0.45,
            outer_chance_plated: 0.15,
            outer_chance: 0.35,
            inner_chance: 0.30,
            inhibitor_turret_chance: 0.25,
            inhibitor_chance: 0.35,
            nexus_chance: 0.45,
            turret_gold: [250, 300, 300],
            inhibitor_gold: 50,
            inhibitor_respawn: 300,
            nexus_chip_min: 25.0,
            nexus_chip_max: 45.0,
            push_power_min: 0.5,
            push_power_max: 2.5,
            baron_push_bonus: 0.5,
            elder_push_bonus: 0.3,
            herald_push_bonus: 0.3,
            open_inhibitor_push_bonus: 0.1,
        }
    }
}
