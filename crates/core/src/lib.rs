pub mod board;
pub mod content;
pub mod game;
pub mod journal;
pub mod journal_file;
pub mod progression;
pub mod replay;
pub mod save;
pub mod state;
pub mod types;

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell, EnemyUnit, Ground, Occupant};
pub use game::Game;
pub use journal::{CommandJournal, CommandRecord};
pub use journal_file::{JournalLoadError, JournalWriter, LoadedJournal, load_journal_from_file};
pub use replay::{ReplayError, ReplayResult, replay_commands, replay_to_end};
pub use save::{SAVE_FORMAT_VERSION, SaveError, SaveState};
pub use state::{GameState, PlayerState};
pub use types::*;
