// src/scrape.rs
use std::{path::PathBuf, thread};

use crate::{
    config::options::{CrawlOptions, DataPaths},
    core::net::PageSource,
    error::{CrawlError, Error},
    progress::Progress,
    specs::game_charts,
    store,
};

pub struct GameFailure {
    pub game_num: u32,
    pub error: CrawlError,
}

/// Outcome of a crawl: which games were stored, which were not and why.
#[derive(Default)]
pub struct CrawlSummary {
    pub succeeded: Vec<u32>,
    pub failed: Vec<GameFailure>,
}

impl CrawlSummary {
    pub fn attempted(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Walk the requested game numbers: fetch → extract → persist, one game at a time,
/// pausing between requests. Only a bad season code or range aborts the run.
pub fn crawl(
    opts: &CrawlOptions,
    source: &dyn PageSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<CrawlSummary, Error> {
    let urls = game_charts::game_urls(&opts.season)?;
    let label = game_charts::season_label(&opts.season)?;
    let range = opts.range.resolve()?;
    let last = *range.end();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(range.clone().count());
        p.log(&format!("Crawling {label} games {}..={last}", range.start()));
    }

    let mut summary = CrawlSummary::default();
    for game_num in range {
        let url = &urls[(game_num - 1) as usize];

        match crawl_game(source, url, &opts.paths, &label, game_num) {
            Ok(path) => {
                logd!("Exported game {game_num} to {}", path.display());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(game_num);
                }
                summary.succeeded.push(game_num);
            }
            Err(error) => {
                loge!("Could not export game {game_num} ({}): {error}", error.kind());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(game_num, &error.to_string());
                }
                summary.failed.push(GameFailure { game_num, error });
            }
        }

        if game_num != last {
            thread::sleep(opts.pause.pick()); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Fetch, extract and store one game. On a fetch or extract failure the slot
/// is still filled with `null`, unless an earlier run already stored something.
pub fn crawl_game(
    source: &dyn PageSource,
    url: &str,
    paths: &DataPaths,
    label: &str,
    game_num: u32,
) -> Result<PathBuf, CrawlError> {
    let path = paths.raw_file(label, game_num);

    let actions = game_charts::fetch_document(source, url)
        .map_err(CrawlError::from)
        .and_then(|doc| game_charts::extract_actions(&doc).map_err(CrawlError::from));

    match actions {
        Ok(actions) => {
            store::save_game(&path, Some(actions.as_slice()))?;
            Ok(path)
        }
        Err(error) => {
            if !path.exists() {
                if let Err(e) = store::save_game(&path, None) {
                    logw!("Game {game_num}: could not write placeholder: {e}");
                }
            }
            Err(error)
        }
    }
}
