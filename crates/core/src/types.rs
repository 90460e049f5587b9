use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn step(self, direction: Direction) -> Pos {
        match direction {
            Direction::Up => Pos { y: self.y - 1, x: self.x },
            Direction::Down => Pos { y: self.y + 1, x: self.x },
            Direction::Left => Pos { y: self.y, x: self.x - 1 },
            Direction::Right => Pos { y: self.y, x: self.x + 1 },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One abstract player input. Exactly one command is consumed per resolved turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Move(Direction),
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    Slime,
    Wolf,
}

impl Species {
    pub fn name(self) -> &'static str {
        match self {
            Self::Slime => "slime",
            Self::Wolf => "wolf",
        }
    }
}

/// What became of a submitted command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A full turn elapsed: player action, enemy phase, spawn phase, counters.
    TurnResolved,
    /// The move would leave the board; nothing changed and no turn elapsed.
    Blocked,
    /// The run is already over; commands are no longer accepted.
    Rejected,
}

/// Final figures handed to the score collaborator once a run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u32,
    pub floor: u32,
    pub level: u32,
    pub total_turns: u32,
    pub experience: u32,
}
