// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::consts::{DEFAULT_DATA_DIR, DEFAULT_SEASON, DEFAULT_SEASON_LABEL};
use crate::config::options::{CrawlOptions, DataPaths, GameRange, Pause, ProcessOptions};
use crate::core::net::HttpSource;
use crate::error::Error;
use crate::export::ExportSummary;
use crate::progress::LogProgress;
use crate::runner::{self, ProcessSummary};
use crate::scrape::{self, CrawlSummary};

#[derive(Debug, Parser)]
#[command(name = "nba_pbp", version)]
#[command(about = "Crawl NBA play-by-play and export it as per-team / per-player CSV", long_about = None)]
pub struct Cli {
    /// Debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Warnings and errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Root of the raw/ and processed/ trees
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch game pages and store each game's actions as JSON
    Crawl {
        /// Two-digit season start year ("24" = 2024-25)
        #[arg(default_value = DEFAULT_SEASON)]
        season: String,

        /// First game number (1-based, inclusive)
        #[arg(long, requires = "end")]
        start: Option<u32>,

        /// Last game number (inclusive)
        #[arg(long, requires = "start")]
        end: Option<u32>,

        /// Skip the 1-2 s pause between requests
        #[arg(long)]
        no_pause: bool,
    },

    /// Clean stored games and write the combined and partitioned CSVs
    Process {
        /// Season folder under raw/ ("S2425")
        #[arg(default_value = DEFAULT_SEASON_LABEL)]
        season_folder: String,
    },
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }
}

pub fn run(cli: Cli) -> Result<(), Error> {
    crate::logging::init(cli.log_level());
    let paths = DataPaths::new(&cli.data_dir);
    logd!("Data directory: {}", paths.root().display());

    match cli.command {
        Command::Crawl { season, start, end, no_pause } => {
            let range = match (start, end) {
                (Some(start), Some(end)) => GameRange::Span { start, end },
                _ => GameRange::All,
            };
            let opts = CrawlOptions {
                season,
                range,
                paths,
                pause: if no_pause { Pause::Off } else { Pause::default() },
            };
            let source = HttpSource::new().map_err(Error::Client)?;
            let mut progress = LogProgress::new();
            let summary = scrape::crawl(&opts, &source, Some(&mut progress))?;
            report_crawl(&summary);
        }
        Command::Process { season_folder } => {
            let opts = ProcessOptions { label: season_folder, paths };
            let mut progress = LogProgress::new();
            let summary = runner::process(&opts, Some(&mut progress))?;
            report_process(&summary);
        }
    }
    Ok(())
}

fn report_crawl(summary: &CrawlSummary) {
    println!(
        "Crawled {} games: {} stored, {} failed",
        summary.attempted(),
        summary.succeeded.len(),
        summary.failed.len()
    );
    for f in &summary.failed {
        println!("  game {:>4}  {:<8} {}", f.game_num, f.error.kind(), f.error);
    }
}

fn report_process(summary: &ProcessSummary) {
    println!("Wrote {} ({} rows from {} games)", summary.combined.display(), summary.rows, summary.loaded);
    if !summary.empty.is_empty() {
        println!("  {} files without play-by-play: {}", summary.empty.len(), summary.empty.join(", "));
    }
    for f in &summary.failed {
        println!("  skipped {}: {}", f.file, f.error);
    }
    report_export("team", &summary.teams);
    report_export("player", &summary.players);
    report_export("team-player", &summary.team_players);
}

fn report_export(what: &str, summary: &ExportSummary) {
    println!("  {what} files: {} written, {} failed", summary.written.len(), summary.failed.len());
    for f in &summary.failed {
        println!("    {}: {}", f.key, f.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crawl_defaults() {
        let cli = Cli::try_parse_from(["nba_pbp", "crawl"]).unwrap();
        match cli.command {
            Command::Crawl { season, start, end, no_pause } => {
                assert_eq!(season, "24");
                assert_eq!((start, end), (None, None));
                assert!(!no_pause);
            }
            _ => panic!("expected crawl"),
        }
        assert_eq!(cli.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn crawl_range_needs_both_ends() {
        assert!(Cli::try_parse_from(["nba_pbp", "crawl", "23", "--start", "5"]).is_err());
        let cli = Cli::try_parse_from(["nba_pbp", "crawl", "23", "--start", "5", "--end", "9"]).unwrap();
        assert!(matches!(cli.command, Command::Crawl { start: Some(5), end: Some(9), .. }));
    }

    #[test]
    fn process_takes_folder_and_global_flags() {
        let cli = Cli::try_parse_from(["nba_pbp", "process", "S2324", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert!(matches!(cli.command, Command::Process { ref season_folder } if season_folder == "S2324"));
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }
}
