//! Periodic enemy spawning: every 8th turn on a floor, capped at 8 live
//! enemies, with stats scaled to run length and depth.

use rand_chacha::rand_core::Rng;

use super::*;
use crate::board::{EnemyUnit, Occupant};
use crate::content::spawn_stats;
use crate::types::Species;

const SPAWN_INTERVAL: u32 = 8;
const MAX_ENEMIES: u32 = 8;

impl Game {
    /// Spawn cadence counts from turn 0, so a fresh floor spawns on its very
    /// first turn. A saturated board skips the spawn rather than looping.
    pub(super) fn maybe_spawn_enemy(&mut self) {
        if self.state.floor_turn % SPAWN_INTERVAL != 0 || self.state.enemy_count >= MAX_ENEMIES {
            return;
        }
        let species =
            if self.rng.next_u64() % 2 == 0 { Species::Slime } else { Species::Wolf };
        let stats = spawn_stats(species, self.state.total_turns, self.state.floor);
        let Some(pos) = self.state.board.random_free_tile(&mut self.rng) else {
            return;
        };
        let unit = EnemyUnit {
            species,
            hp: stats.hp,
            attack: stats.attack,
            exp_reward: stats.exp_reward,
            acted: false,
        };
        self.state.board.set_occupant(pos, Occupant::Enemy(unit));
        self.state.enemy_count += 1;
    }
}
