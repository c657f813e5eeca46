// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;

use super::consts::*;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    /// Two-digit season start year, e.g. "24" for 2024-25.
    pub season: String,
    pub range: GameRange,
    pub paths: DataPaths,
    pub pause: Pause,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            season: s!(DEFAULT_SEASON),
            range: GameRange::All,
            paths: DataPaths::default(),
            pause: Pause::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Season folder name, e.g. "S2425".
    pub label: String,
    pub paths: DataPaths,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            label: s!(DEFAULT_SEASON_LABEL),
            paths: DataPaths::default(),
        }
    }
}

/// Which game numbers (1-based) to crawl.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameRange {
    All,
    Span { start: u32, end: u32 },
}

impl GameRange {
    pub fn resolve(&self) -> Result<RangeInclusive<u32>, Error> {
        match *self {
            GameRange::All => Ok(1..=TOTAL_GAMES),
            GameRange::Span { start, end } => {
                if start == 0 || start > end || end > TOTAL_GAMES {
                    return Err(Error::InvalidRange { start, end, total: TOTAL_GAMES });
                }
                Ok(start..=end)
            }
        }
    }
}

/// Delay between consecutive requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pause {
    Off,
    RandomSecs { min: u64, max: u64 },
}

impl Default for Pause {
    fn default() -> Self {
        Pause::RandomSecs { min: PAUSE_SECS_MIN, max: PAUSE_SECS_MAX }
    }
}

impl Pause {
    pub fn pick(&self) -> Duration {
        match *self {
            Pause::Off => Duration::ZERO,
            Pause::RandomSecs { min, max } => {
                let secs = if min >= max { min } else { rand::thread_rng().gen_range(min..=max) };
                Duration::from_secs(secs)
            }
        }
    }
}

/// On-disk layout rooted at one data directory:
///
/// ```text
/// <root>/raw/<label>/<label>-G0001.json
/// <root>/processed/<label>/<label>_all_play-by-play.csv
/// <root>/processed/<label>/{team,player,teamplayer}/*.csv
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataPaths {
    root: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self { root: PathBuf::from(DEFAULT_DATA_DIR) }
    }
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn raw_dir(&self, label: &str) -> PathBuf {
        self.root.join(RAW_SUBDIR).join(label)
    }

    pub fn raw_file(&self, label: &str, game_num: u32) -> PathBuf {
        self.raw_dir(label).join(format!("{label}-G{game_num:04}.json"))
    }

    pub fn processed_dir(&self, label: &str) -> PathBuf {
        self.root.join(PROCESSED_SUBDIR).join(label)
    }

    pub fn combined_csv(&self, label: &str) -> PathBuf {
        self.processed_dir(label).join(format!("{label}_all_play-by-play.csv"))
    }

    pub fn team_dir(&self, label: &str) -> PathBuf {
        self.processed_dir(label).join(TEAM_SUBDIR)
    }

    pub fn player_dir(&self, label: &str) -> PathBuf {
        self.processed_dir(label).join(PLAYER_SUBDIR)
    }

    pub fn teamplayer_dir(&self, label: &str) -> PathBuf {
        self.processed_dir(label).join(TEAMPLAYER_SUBDIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_the_season() {
        assert_eq!(GameRange::All.resolve().unwrap(), 1..=1230);
    }

    #[test]
    fn span_is_validated() {
        assert_eq!(GameRange::Span { start: 5, end: 9 }.resolve().unwrap(), 5..=9);
        assert!(GameRange::Span { start: 0, end: 9 }.resolve().is_err());
        assert!(GameRange::Span { start: 9, end: 5 }.resolve().is_err());
        assert!(GameRange::Span { start: 1, end: 1231 }.resolve().is_err());
    }

    #[test]
    fn random_pause_stays_in_bounds() {
        let p = Pause::default();
        for _ in 0..20 {
            let d = p.pick();
            assert!(d >= Duration::from_secs(1) && d <= Duration::from_secs(2));
        }
        assert_eq!(Pause::Off.pick(), Duration::ZERO);
    }

    #[test]
    fn layout_matches_naming_scheme() {
        let paths = DataPaths::new("d");
        assert_eq!(paths.root(), Path::new("d"));
        assert_eq!(DataPaths::default().root(), Path::new("data"));
        let raw = paths.raw_file("S2425", 7);
        assert_eq!(raw, Path::new("d").join("raw").join("S2425").join("S2425-G0007.json"));
        let all = paths.combined_csv("S2425");
        assert!(all.ends_with("processed/S2425/S2425_all_play-by-play.csv"));
        assert!(paths.teamplayer_dir("S2425").ends_with("S2425/teamplayer"));
    }
}
