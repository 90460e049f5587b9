use serde::{Deserialize, Serialize};

use crate::types::Command;

/// In-memory record of every accepted command in a run. Together with the
/// run seed this reproduces the session exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandJournal {
    pub format_version: u16,
    pub seed: u64,
    pub commands: Vec<CommandRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub seq: u64,
    pub command: Command,
}

impl CommandJournal {
    pub fn new(seed: u64) -> Self {
        Self { format_version: 1, seed, commands: Vec::new() }
    }

    pub fn append(&mut self, command: Command) {
        let seq = self.commands.len() as u64;
        self.commands.push(CommandRecord { seq, command });
    }
}
