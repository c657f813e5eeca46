// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::ProcessOptions,
    error::Error,
    export::{self, ExportSummary},
    file,
    progress::Progress,
    store::{self, FileFailure},
};

/// Summary of what the processing run produced.
pub struct ProcessSummary {
    pub rows: usize,
    pub loaded: usize,
    pub empty: Vec<String>,
    pub failed: Vec<FileFailure>,
    pub combined: PathBuf,
    pub teams: ExportSummary,
    pub players: ExportSummary,
    pub team_players: ExportSummary,
}

/// Load + clean every stored game of the season, write the combined table,
/// then re-read it and write the team / player / team-player partitions.
pub fn process(
    opts: &ProcessOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<ProcessSummary, Error> {
    let label = opts.label.as_str();
    let paths = &opts.paths;

    let load = store::load_season(&paths.raw_dir(label), progress)?;
    logf!(
        "Loaded {} rows from {} games ({} without data, {} failed)",
        load.rows.len(),
        load.loaded.len(),
        load.empty.len(),
        load.failed.len()
    );

    let combined = paths.combined_csv(label);
    file::write_rows(&combined, &load.rows)?;
    logf!("Wrote {}", combined.display());

    // Partitions are built from what is on disk, not from memory.
    let table = file::read_rows(&combined)?;

    let teams = export::by_team(&table, &paths.team_dir(label));
    let players = export::by_player(&table, &paths.player_dir(label));
    let team_players = export::by_team_player(&table, &paths.teamplayer_dir(label));

    Ok(ProcessSummary {
        rows: table.len(),
        loaded: load.loaded.len(),
        empty: load.empty,
        failed: load.failed,
        combined,
        teams,
        players,
        team_players,
    })
}
