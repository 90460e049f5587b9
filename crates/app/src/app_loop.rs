//! Screen flow and input translation: title → playing → game over →
//! scoreboard. The simulation stays in `gridfall-core`; this layer turns
//! keys into commands, watches for the terminal state, and asks the shell
//! (main) to do file work through `ShellRequest`s.

use gridfall_core::{Command, CommandOutcome, Direction, Game, RunSummary};
use macroquad::prelude::KeyCode;

const MAX_NAME_LEN: usize = 12;

/// Keyboard state for one rendered frame, captured by the binary.
#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
    pub typed: Vec<char>,
}

impl FrameInput {
    pub fn pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Title,
    Playing,
    GameOver,
    Scoreboard,
}

/// A command the simulation accepted this frame, for journal persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AcceptedCommand {
    pub turn: u32,
    pub command: Command,
}

/// File and lifecycle work the shell performs on the app's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellRequest {
    NewGame,
    ResumeFromSave,
    SaveAndQuit,
    Quit,
    RecordScore { name: String, score: u32 },
}

#[derive(Default)]
pub struct AppState {
    pub screen: Screen,
    pub has_save: bool,
    pub name_entry: String,
    pub summary: Option<RunSummary>,
    /// Commands accepted during this frame; drained by the shell each tick.
    pub accepted_commands: Vec<AcceptedCommand>,
}

impl AppState {
    pub fn new(has_save: bool) -> Self {
        Self { has_save, ..Self::default() }
    }

    /// Processes one frame of input. `game` is `None` until the shell has
    /// created a session (on the title screen, or briefly after a request).
    pub fn tick(&mut self, game: Option<&mut Game>, input: &FrameInput) -> Vec<ShellRequest> {
        self.accepted_commands.clear();
        let mut requests = Vec::new();

        match self.screen {
            Screen::Title => {
                if input.pressed(KeyCode::Space) {
                    self.has_save = false;
                    self.screen = Screen::Playing;
                    requests.push(ShellRequest::NewGame);
                } else if input.pressed(KeyCode::Enter) && self.has_save {
                    self.screen = Screen::Playing;
                    requests.push(ShellRequest::ResumeFromSave);
                } else if input.pressed(KeyCode::Escape) {
                    requests.push(ShellRequest::Quit);
                }
            }
            Screen::Playing => {
                let Some(game) = game else {
                    return requests;
                };
                if input.pressed(KeyCode::Escape) {
                    requests.push(ShellRequest::SaveAndQuit);
                    return requests;
                }
                if let Some(command) = command_for_input(input) {
                    let turn = game.state().total_turns;
                    if game.resolve_command(command) == CommandOutcome::TurnResolved {
                        self.accepted_commands.push(AcceptedCommand { turn, command });
                    }
                }
                if let Some(summary) = game.final_summary() {
                    self.summary = Some(summary);
                    self.name_entry.clear();
                    self.screen = Screen::GameOver;
                }
            }
            Screen::GameOver => {
                for &ch in &input.typed {
                    if ch.is_alphabetic() && self.name_entry.len() < MAX_NAME_LEN {
                        self.name_entry.push(ch);
                    }
                }
                if input.pressed(KeyCode::Backspace) {
                    self.name_entry.pop();
                }
                if input.pressed(KeyCode::Enter)
                    && let Some(summary) = self.summary
                {
                    requests.push(ShellRequest::RecordScore {
                        name: self.name_entry.clone(),
                        score: summary.score,
                    });
                    self.screen = Screen::Scoreboard;
                }
            }
            Screen::Scoreboard => {
                if input.pressed(KeyCode::Space) {
                    self.screen = Screen::Playing;
                    self.summary = None;
                    requests.push(ShellRequest::NewGame);
                } else if input.pressed(KeyCode::Escape) {
                    requests.push(ShellRequest::Quit);
                }
            }
        }
        requests
    }
}

fn command_for_input(input: &FrameInput) -> Option<Command> {
    for &key in &input.keys_pressed {
        let command = match key {
            KeyCode::Up => Command::Move(Direction::Up),
            KeyCode::Down => Command::Move(Direction::Down),
            KeyCode::Left => Command::Move(Direction::Left),
            KeyCode::Right => Command::Move(Direction::Right),
            KeyCode::Space => Command::Skip,
            _ => continue,
        };
        return Some(command);
    }
    None
}
