//! Desktop shell: owns the session, the save/score/journal files, and the
//! frame loop. All gameplay decisions live in `gridfall-core`; all screen
//! flow lives in `gridfall_app::app_loop`.

use std::path::PathBuf;

use gridfall_app::app_loop::{AppState, ShellRequest};
use gridfall_app::score_file::ScoreTable;
use gridfall_app::{save_file, seed};
use gridfall_core::{Game, JournalWriter};
use macroquad::prelude::next_frame;

mod frame_input;
mod ui_render;
mod window_config;

struct Shell {
    save_path: Option<PathBuf>,
    score_path: Option<PathBuf>,
    journal_path: Option<PathBuf>,
    next_seed: u64,
    game: Option<Game>,
    journal: Option<JournalWriter>,
    scores: ScoreTable,
}

impl Shell {
    fn start_new_game(&mut self) {
        if let Some(path) = &self.save_path {
            // Old runs are gone the moment a new one starts.
            let _ = save_file::delete_save(path);
        }
        let run_seed = self.next_seed;
        self.next_seed = seed::generate_runtime_seed();
        self.game = Some(Game::new(run_seed));
        self.journal = self
            .journal_path
            .as_ref()
            .and_then(|path| JournalWriter::create(path, run_seed).ok());
    }

    fn resume_from_save(&mut self) {
        let restored = self
            .save_path
            .as_ref()
            .and_then(|path| save_file::load_save(path).ok())
            .and_then(|save| Game::from_save(save).ok());
        match restored {
            Some(game) => {
                if let Some(path) = &self.save_path {
                    let _ = save_file::delete_save(path);
                }
                // A resumed session cannot extend the old journal coherently.
                self.journal = None;
                self.game = Some(game);
            }
            // Unreadable or inconsistent saves fall back to a fresh run.
            None => self.start_new_game(),
        }
    }

    fn save_and_exit(&mut self) {
        if let (Some(game), Some(path)) = (&self.game, &self.save_path) {
            let _ = save_file::write_save_atomic(path, &game.to_save());
        }
        std::process::exit(0);
    }

    fn record_score(&mut self, name: &str, score: u32) {
        self.scores.record(name, score);
        if let Some(path) = &self.score_path {
            let _ = self.scores.write_atomic(path);
        }
    }
}

fn window_conf() -> macroquad::window::Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match seed::resolve_seed_from_args(&args, seed::generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("gridfall: {message}");
            std::process::exit(2);
        }
    };

    let save_path = save_file::default_save_path();
    let score_path = ScoreTable::default_path();
    let journal_path = save_path.as_ref().map(|path| path.with_file_name("last_run.jsonl"));
    let scores = score_path.as_deref().map(ScoreTable::load_or_default).unwrap_or_default();
    let has_save = save_path.as_deref().is_some_and(save_file::save_exists);

    let mut shell = Shell {
        save_path,
        score_path,
        journal_path,
        next_seed: seed_choice.value(),
        game: None,
        journal: None,
        scores,
    };
    let mut app = AppState::new(has_save);

    loop {
        let input = frame_input::capture_frame_input();
        let requests = app.tick(shell.game.as_mut(), &input);
        for request in requests {
            match request {
                ShellRequest::NewGame => shell.start_new_game(),
                ShellRequest::ResumeFromSave => shell.resume_from_save(),
                ShellRequest::SaveAndQuit => shell.save_and_exit(),
                ShellRequest::Quit => std::process::exit(0),
                ShellRequest::RecordScore { name, score } => shell.record_score(&name, score),
            }
        }

        if let Some(journal) = &mut shell.journal {
            for accepted in &app.accepted_commands {
                let _ = journal.append(accepted.turn, accepted.command);
            }
        }

        ui_render::draw_frame(&app, shell.game.as_ref(), &shell.scores);
        next_frame().await
    }
}
