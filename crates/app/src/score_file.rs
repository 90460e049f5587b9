//! Persistent high-score table: the top ten runs, stored as versioned JSON
//! with the same atomic-write discipline as the save file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::APP_NAME;

pub const MAX_ENTRIES: usize = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub score: u32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    pub format_version: u16,
    pub entries: Vec<ScoreEntry>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self { format_version: 1, entries: Vec::new() }
    }
}

impl ScoreTable {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("high_scores.json"))
    }

    /// A missing or unreadable table starts empty; scores are not worth
    /// refusing to boot over.
    pub fn load_or_default(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Inserts a run, keeps entries sorted by descending score, and trims the
    /// table to the top ten. Ties keep the earlier entry first.
    pub fn record(&mut self, name: &str, score: u32) {
        self.entries.push(ScoreEntry { score, name: normalized_name(name) });
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

fn normalized_name(name: &str) -> String {
    if name.is_empty() { "anonymous".to_string() } else { name.to_string() }
}
