//! Stable snapshot hashing for replay-equivalence checks.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u32(self.state.total_turns);
        hasher.write_u32(self.state.floor_turn);
        hasher.write_u32(self.state.floor);
        hasher.write_u32(self.state.enemy_count);
        hasher.write_u8(u8::from(self.state.dead));

        let player = &self.state.player;
        hasher.write_i32(player.pos.y);
        hasher.write_i32(player.pos.x);
        hasher.write_i32(player.hp);
        hasher.write_i32(player.max_hp);
        hasher.write_i32(player.attack);
        hasher.write_u32(player.experience);
        hasher.write_u32(player.level);
        hasher.write_u32(player.level_ups);
        hasher.write_u32(player.potions);

        hasher.write(&self.state.board.canonical_bytes());
        hasher.finish()
    }
}
