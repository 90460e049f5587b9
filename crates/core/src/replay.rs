//! Journal replay: reconstruct a session from its seed and command stream
//! and verify it deterministically, either to completion or up to the last
//! recorded command (crash recovery).

use crate::game::Game;
use crate::journal::CommandJournal;
use crate::types::CommandOutcome;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    /// A recorded command was blocked on replay; journals only ever hold
    /// accepted commands, so the journal does not match the seed.
    CommandBlocked { seq: u64 },
    /// A recorded command arrived after the session had already ended.
    SessionAlreadyOver { seq: u64 },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandBlocked { seq } => {
                write!(f, "journal command {seq} was blocked on replay")
            }
            Self::SessionAlreadyOver { seq } => {
                write!(f, "journal command {seq} arrived after the session ended")
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub final_score: u32,
    pub total_turns: u32,
    pub dead: bool,
}

/// Re-applies every journaled command to a fresh session with the journal's
/// seed. Returns the reconstructed session for further play or inspection.
pub fn replay_commands(journal: &CommandJournal) -> Result<Game, ReplayError> {
    let mut game = Game::new(journal.seed);
    for record in &journal.commands {
        match game.resolve_command(record.command) {
            CommandOutcome::TurnResolved => {}
            CommandOutcome::Blocked => {
                return Err(ReplayError::CommandBlocked { seq: record.seq });
            }
            CommandOutcome::Rejected => {
                return Err(ReplayError::SessionAlreadyOver { seq: record.seq });
            }
        }
    }
    Ok(game)
}

pub fn replay_to_end(journal: &CommandJournal) -> Result<ReplayResult, ReplayError> {
    let game = replay_commands(journal)?;
    Ok(ReplayResult {
        final_snapshot_hash: game.snapshot_hash(),
        final_score: game.score(),
        total_turns: game.state().total_turns,
        dead: game.is_over(),
    })
}
