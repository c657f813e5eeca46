// tests/crawl_offline.rs
//
// Drives the crawl against in-memory pages instead of nba.com.
//
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

use nba_pbp::config::options::{CrawlOptions, DataPaths, GameRange, Pause};
use nba_pbp::core::net::PageSource;
use nba_pbp::error::FetchError;
use nba_pbp::scrape;
use nba_pbp::specs::game_charts::game_urls;

struct FixtureSite {
    pages: HashMap<String, String>,
    requested: RefCell<Vec<String>>,
}

impl PageSource for FixtureSite {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status { url: url.to_string(), status: 404 })
    }
}

fn game_page(actions: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>Game Charts</title></head><body>
        <div id="__next"><h1>Charts</h1></div>
        <script id="__NEXT_DATA__" type="application/json">
        {{"props":{{"pageProps":{{"playByPlay":{{"gameId":"x","actions":{actions}}}}}}},"page":"/game/[gameId]/game-charts"}}
        </script></body></html>"#
    )
}

const THREE_ACTIONS: &str = r#"[
    {"actionNumber":1,"clock":"PT12M00.00S","period":1,"teamTricode":"","location":"","actionType":"period","subType":"start","description":"Period Start","isFieldGoal":0,"scoreHome":"0","scoreAway":"0"},
    {"actionNumber":2,"clock":"PT11M41.00S","period":1,"teamTricode":"BOS","playerNameI":"J. Tatum","location":"h","actionType":"Made Shot","subType":"Jump Shot","description":"Tatum 26' 3PT Jump Shot (3 PTS)","isFieldGoal":1,"scoreHome":"3","scoreAway":"0"},
    {"actionNumber":3,"clock":"PT11M20.50S","period":1,"teamTricode":"NYK","playerNameI":"J. Brunson","location":"v","actionType":"Missed Shot","subType":"Layup","description":"MISS Brunson 2' Layup","isFieldGoal":1,"scoreHome":"3","scoreAway":"0"}
]"#;

fn site() -> FixtureSite {
    let urls = game_urls("24").unwrap();
    let mut pages = HashMap::new();
    pages.insert(urls[0].clone(), game_page(THREE_ACTIONS));
    // game 2 is never served, so it 404s
    // game 3: empty action list
    pages.insert(urls[2].clone(), game_page("[]"));
    // game 4: page renders but has no play-by-play yet
    pages.insert(urls[3].clone(), s("<html><body>Game postponed</body></html>"));
    FixtureSite { pages, requested: RefCell::new(Vec::new()) }
}

fn s(x: &str) -> String {
    x.to_string()
}

fn options(root: &std::path::Path, start: u32, end: u32) -> CrawlOptions {
    CrawlOptions {
        season: s("24"),
        range: GameRange::Span { start, end },
        paths: DataPaths::new(root),
        pause: Pause::Off,
    }
}

#[test]
fn crawl_continues_past_failed_games() {
    let dir = tempfile::tempdir().unwrap();
    let site = site();

    let summary = scrape::crawl(&options(dir.path(), 1, 4), &site, None).unwrap();

    assert_eq!(summary.succeeded, vec![1, 3]);
    let failed: Vec<(u32, &str)> = summary.failed.iter().map(|f| (f.game_num, f.error.kind())).collect();
    assert_eq!(failed, vec![(2, "fetch"), (4, "extract")]);
    assert_eq!(summary.attempted(), 4);

    // requested in order, one per game
    let requested = site.requested.borrow();
    assert_eq!(requested.len(), 4);
    assert!(requested[0].ends_with("/game/0022400001/game-charts"));
    assert!(requested[3].ends_with("/game/0022400004/game-charts"));

    let raw = dir.path().join("raw").join("S2425");
    let g1: serde_json::Value = serde_json::from_str(&fs::read_to_string(raw.join("S2425-G0001.json")).unwrap()).unwrap();
    assert_eq!(g1.as_array().unwrap().len(), 3);
    assert_eq!(fs::read_to_string(raw.join("S2425-G0002.json")).unwrap(), "null");
    assert_eq!(fs::read_to_string(raw.join("S2425-G0003.json")).unwrap(), "[]");
    assert_eq!(fs::read_to_string(raw.join("S2425-G0004.json")).unwrap(), "null");
}

#[test]
fn failed_refetch_keeps_earlier_data() {
    let dir = tempfile::tempdir().unwrap();
    let raw = dir.path().join("raw").join("S2425");
    fs::create_dir_all(&raw).unwrap();
    fs::write(raw.join("S2425-G0002.json"), "[{\"clock\":\"PT1M00.00S\"}]").unwrap();

    let summary = scrape::crawl(&options(dir.path(), 2, 2), &site(), None).unwrap();
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(fs::read_to_string(raw.join("S2425-G0002.json")).unwrap(), "[{\"clock\":\"PT1M00.00S\"}]");
}

#[test]
fn bad_season_or_range_aborts_before_any_request() {
    let dir = tempfile::tempdir().unwrap();
    let site = site();

    let mut bad_season = options(dir.path(), 1, 2);
    bad_season.season = s("2024");
    assert!(scrape::crawl(&bad_season, &site, None).is_err());

    assert!(scrape::crawl(&options(dir.path(), 10, 2), &site, None).is_err());
    assert!(site.requested.borrow().is_empty());
}
