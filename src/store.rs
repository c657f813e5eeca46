// src/store.rs
//
// Raw per-game files: one JSON document per game, holding the action array
// verbatim, or `null` when the crawl could not get one.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::clean;
use crate::data::{CleanedRow, RawAction};
use crate::error::{Error, LoadError, PersistError};
use crate::progress::Progress;

/// Write one game's payload, 4-space indented. `None` is stored as `null`.
pub fn save_game(path: &Path, actions: Option<&[Value]>) -> Result<(), PersistError> {
    let io_err = |source| PersistError::Io { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }
    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);

    let mut ser = serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    actions.serialize(&mut ser)?;
    out.flush().map_err(io_err)?;
    Ok(())
}

/// Read one stored game. `Ok(None)` means the file holds no data (null or blank).
pub fn load_game_file(path: &Path) -> Result<Option<Vec<RawAction>>, LoadError> {
    let text = fs::read_to_string(path)
        .map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&text).map_err(|source| LoadError::Json { path: path.to_path_buf(), source })
}

/// `*.json` file names in `dir`, sorted so game order never depends on the OS.
pub fn list_game_files(dir: &Path) -> Result<Vec<String>, Error> {
    let list_err = |source| Error::ListDir { path: dir.to_path_buf(), source };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some("json") { continue; }
        if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
            names.push(name.to_string());
        }
    }
    names.sort_unstable();
    Ok(names)
}

/// `S2425-G0001.json` → `S2425-G0001`
pub fn game_id_of(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

pub struct FileFailure {
    pub file: String,
    pub error: LoadError,
}

/// Everything the loader produced, plus what it had to skip.
#[derive(Default)]
pub struct LoadSummary {
    pub rows: Vec<CleanedRow>,
    pub loaded: Vec<String>,
    /// Files that exist but hold no play-by-play (null payload).
    pub empty: Vec<String>,
    pub failed: Vec<FileFailure>,
}

/// Load, tag and clean the given files from `dir`, in the order given.
pub fn load_games(
    dir: &Path,
    files: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> LoadSummary {
    let mut summary = LoadSummary::default();

    for file in files {
        let path: PathBuf = dir.join(file);
        let game_id = game_id_of(file);
        logd!("Processing file: {file}");

        let result = load_game_file(&path).and_then(|actions| match actions {
            Some(actions) => clean::clean_game(game_id, actions)
                .map(Some)
                .map_err(|source| LoadError::Clean { game_id: s!(game_id), source }),
            None => Ok(None),
        });

        match result {
            Ok(Some(mut rows)) => {
                summary.rows.append(&mut rows);
                summary.loaded.push(file.clone());
            }
            Ok(None) => {
                logw!("{file}: no play-by-play stored, skipping");
                summary.empty.push(file.clone());
            }
            Err(error) => {
                loge!("{file}: {error}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Skipped {file}"));
                }
                summary.failed.push(FileFailure { file: file.clone(), error });
            }
        }
    }

    summary
}

/// List the season's raw directory and load every game in it.
pub fn load_season(dir: &Path, mut progress: Option<&mut dyn Progress>) -> Result<LoadSummary, Error> {
    let files = list_game_files(dir)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Loading {} game files from {}", files.len(), dir.display()));
    }
    Ok(load_games(dir, &files, progress))
}
