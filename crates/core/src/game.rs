//! The turn engine. One accepted command drives a full tick: player action,
//! enemy phase, spawn phase, then counter finalization. All randomness flows
//! through one seeded generator so a seed plus a command stream reproduces a
//! run exactly.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::board::Board;
use crate::state::{GameState, PlayerState};
use crate::types::{Command, CommandOutcome, Pos, RunSummary};

mod enemy_phase;
mod floor_transition;
mod hash;
mod player_action;
mod spawner;

#[cfg(test)]
mod test_support;

pub struct Game {
    seed: u64,
    rng: ChaCha8Rng,
    state: GameState,
}

impl Game {
    /// Fresh session: floor 1, the player in the top-left corner, and a newly
    /// generated board. No enemies exist until the first turn's spawn phase.
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let player = PlayerState::starting(Pos { y: 0, x: 0 });
        let mut board = Board::new();
        board.reset(player.pos, 1, &mut rng);
        Self {
            seed,
            rng,
            state: GameState {
                board,
                player,
                floor: 1,
                floor_turn: 0,
                total_turns: 0,
                enemy_count: 0,
                combat_message: None,
                dead: false,
            },
        }
    }

    /// Rebuilds a session around an imported state. The generator restarts
    /// from the run seed; the board and counters come from the blob.
    pub(crate) fn from_parts(seed: u64, state: GameState) -> Self {
        Self { seed, rng: ChaCha8Rng::seed_from_u64(seed), state }
    }

    /// Resolves one command. Only `TurnResolved` consumes a turn; blocked
    /// moves and commands after death leave the session untouched.
    pub fn resolve_command(&mut self, command: Command) -> CommandOutcome {
        if self.state.dead {
            return CommandOutcome::Rejected;
        }

        match command {
            Command::Skip => {}
            Command::Move(direction) => {
                if !self.resolve_player_action(direction) {
                    return CommandOutcome::Blocked;
                }
            }
        }

        self.resolve_enemies();
        if !self.state.dead {
            self.maybe_spawn_enemy();
        }
        self.state.floor_turn += 1;
        self.state.total_turns += 1;
        CommandOutcome::TurnResolved
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.dead
    }

    pub fn score(&self) -> u32 {
        self.state.total_turns * 5 + self.state.player.experience + self.state.floor * 10
    }

    /// Final stats for the score collaborator; `None` while the run is live.
    pub fn final_summary(&self) -> Option<RunSummary> {
        if !self.state.dead {
            return None;
        }
        Some(RunSummary {
            score: self.score(),
            floor: self.state.floor,
            level: self.state.player.level,
            total_turns: self.state.total_turns,
            experience: self.state.player.experience,
        })
    }
}
