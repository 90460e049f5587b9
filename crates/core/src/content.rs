//! Stat tables: player base stats and the spawn-stat formulas that scale
//! enemies with run length and depth.

use crate::types::Species;

pub const PLAYER_BASE_MAX_HP: i32 = 20;
pub const PLAYER_BASE_ATTACK: i32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnStats {
    pub hp: i32,
    pub attack: i32,
    pub exp_reward: u32,
}

/// Stats for a freshly spawned enemy. Slimes are durable, wolves hit hard;
/// both grow with every 5 total turns and with each floor.
pub fn spawn_stats(species: Species, total_turns: u32, floor: u32) -> SpawnStats {
    let scale = (total_turns / 5 + floor) as i32;
    let (base_hp, base_attack) = match species {
        Species::Slime => (15, 4),
        Species::Wolf => (8, 8),
    };
    let hp = base_hp + scale;
    let attack = base_attack + scale;
    SpawnStats { hp, attack, exp_reward: ((hp + attack) / 2) as u32 }
}
