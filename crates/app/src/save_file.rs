//! On-disk encoding of the core's save blob: versioned JSON written
//! atomically (temp file + rename) under the platform data directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use gridfall_core::SaveState;

use crate::APP_NAME;

pub fn default_save_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.data_dir().join("save.json"))
}

pub fn save_exists(path: &Path) -> bool {
    path.is_file()
}

pub fn write_save_atomic(path: &Path, save: &SaveState) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("json.tmp");
    let json = serde_json::to_string_pretty(save).map_err(io::Error::other)?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn load_save(path: &Path) -> io::Result<SaveState> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Removes the save file; a missing file is not an error.
pub fn delete_save(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}
