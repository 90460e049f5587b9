//! Player-action resolution: directional moves, bump attacks, potion pickup,
//! and the experience/level bookkeeping that follows an attack.

use super::*;
use crate::board::{Board, EnemyUnit, Ground, Occupant};
use crate::progression::{attack_for_level, level_for_experience, max_hp_for_level};
use crate::types::Direction;

impl Game {
    /// Returns whether the action consumed the turn. Out-of-bounds moves do
    /// not; everything else (attack, move, pickup, stairs) does. Attacking
    /// never moves the player.
    pub(super) fn resolve_player_action(&mut self, direction: Direction) -> bool {
        let target = self.state.player.pos.step(direction);
        if !Board::in_bounds(target) {
            return false;
        }

        match self.state.board.occupant_at(target) {
            Occupant::Enemy(unit) => {
                self.attack_enemy(target, unit);
                true
            }
            Occupant::Empty => {
                self.state.board.move_occupant(self.state.player.pos, target);
                self.state.player.pos = target;
                match self.state.board.ground_at(target) {
                    Ground::Potion => {
                        self.state.player.potions += 1;
                        self.state.board.set_ground(target, Ground::Grass);
                    }
                    Ground::Stairs => self.advance_floor(),
                    Ground::Grass => {}
                }
                true
            }
            // A second player cell cannot exist; treat it like a wall.
            Occupant::Player => false,
        }
    }

    fn attack_enemy(&mut self, target: Pos, unit: EnemyUnit) {
        let mut unit = unit;
        let damage = self.state.player.attack;
        unit.hp -= damage;
        let mut message = format!("The {} took {} damage.", unit.species.name(), damage);
        if unit.hp <= 0 {
            message.push_str(&format!(
                " The {} died. You gained {} exp.",
                unit.species.name(),
                unit.exp_reward
            ));
            self.state.player.experience += unit.exp_reward;
            self.state.board.clear_occupant(target);
            self.state.enemy_count -= 1;
        } else {
            self.state.board.set_occupant(target, Occupant::Enemy(unit));
        }
        self.state.combat_message = Some(message);
        self.apply_level_progress();
    }

    /// Recomputes level and level-scaled stats from total experience. At most
    /// one level-up is granted per call, even when a single gain crosses
    /// several thresholds; each grant fully heals the player.
    fn apply_level_progress(&mut self) {
        let player = &mut self.state.player;
        player.level = level_for_experience(player.experience);
        player.attack = attack_for_level(player.level);
        player.max_hp = max_hp_for_level(player.level);
        if player.level_ups < player.level {
            player.level_ups += 1;
            player.hp = player.max_hp;
        }
    }
}
