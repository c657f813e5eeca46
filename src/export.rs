// src/export.rs
//
// Fan the combined season table out into one CSV per team, per player and per
// (team, player) pair. Partitions are independent: a failed write is logged and
// recorded, the rest still get written.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::core::sanitize::file_stem;
use crate::data::CleanedRow;
use crate::error::ExportError;
use crate::file::write_rows;

pub struct PartitionFailure {
    pub key: String,
    pub error: ExportError,
}

#[derive(Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<PartitionFailure>,
}

impl ExportSummary {
    fn write<'a, I>(&mut self, key: String, path: PathBuf, rows: I)
    where
        I: IntoIterator<Item = &'a CleanedRow>,
    {
        match write_rows(&path, rows) {
            Ok(n) => {
                logd!("Wrote {n} rows to {}", path.display());
                self.written.push(path);
            }
            Err(error) => {
                loge!("Could not save {key}: {error}");
                self.failed.push(PartitionFailure { key, error });
            }
        }
    }
}

/// Every team code seen as home or away, sorted.
pub fn teams(rows: &[CleanedRow]) -> Vec<&str> {
    rows.iter()
        .flat_map(|r| [r.home.as_str(), r.away.as_str()])
        .filter(|t| !t.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every named player, sorted, exact (case-sensitive) match.
pub fn players(rows: &[CleanedRow]) -> Vec<&str> {
    rows.iter()
        .filter_map(|r| r.player_name_i.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `(player, team)` pairs that occur together. Players sorted; a traded
/// player's teams in the order they first appear.
pub fn team_players(rows: &[CleanedRow]) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    for player in players(rows) {
        let mut seen: Vec<&str> = Vec::new();
        for r in rows.iter().filter(|r| r.player_name_i.as_deref() == Some(player)) {
            if let Some(team) = r.team_tricode.as_deref() {
                if !seen.contains(&team) {
                    seen.push(team);
                }
            }
        }
        out.extend(seen.into_iter().map(|team| (player, team)));
    }
    out
}

/// `<dir>/<TEAM>_games.csv`: all rows where the team is home or away.
pub fn by_team(rows: &[CleanedRow], dir: &Path) -> ExportSummary {
    let mut summary = ExportSummary::default();
    for team in teams(rows) {
        let path = dir.join(format!("{}_games.csv", file_stem(team)));
        summary.write(s!(team), path, rows.iter().filter(|r| r.involves(team)));
    }
    logf!("Saved {} files containing team-specific data.", summary.written.len());
    summary
}

/// `<dir>/<Player>_play-by-play.csv`, player name with spaces removed.
pub fn by_player(rows: &[CleanedRow], dir: &Path) -> ExportSummary {
    let mut summary = ExportSummary::default();
    for player in players(rows) {
        let path = dir.join(format!("{}_play-by-play.csv", file_stem(player)));
        summary.write(
            s!(player),
            path,
            rows.iter().filter(|r| r.player_name_i.as_deref() == Some(player)),
        );
    }
    logf!("Saved {} files containing player-specific data.", summary.written.len());
    summary
}

/// `<dir>/<TEAM>_<Player>_games.csv`: the player's rows while on that team.
pub fn by_team_player(rows: &[CleanedRow], dir: &Path) -> ExportSummary {
    let mut summary = ExportSummary::default();
    for (player, team) in team_players(rows) {
        let path = dir.join(format!("{}_{}_games.csv", file_stem(team), file_stem(player)));
        summary.write(
            format!("{team}/{player}"),
            path,
            rows.iter().filter(|r| {
                r.player_name_i.as_deref() == Some(player) && r.team_tricode.as_deref() == Some(team)
            }),
        );
    }
    logf!("Saved {} files containing team-player data.", summary.written.len());
    summary
}
