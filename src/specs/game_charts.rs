// src/specs/game_charts.rs
//! Spec for `https://www.nba.com/game/<id>/game-charts`.
//!
//! The page is a Next.js render; the full play-by-play sits in the
//! `<script id="__NEXT_DATA__">` JSON blob at `props.pageProps.playByPlay.actions`.
//! Postponed or future games render the page without that key.

use scraper::Html;
use serde_json::Value;

use crate::config::consts::{
    ACTIONS_PATH, GAME_NUM_SUFFIX, NEXT_DATA_ID, TOTAL_GAMES, URL_END, URL_START,
};
use crate::core::html;
use crate::core::net::PageSource;
use crate::error::{EnumerateError, ExtractError, FetchError};

fn check_season(season: &str) -> Result<u32, EnumerateError> {
    if season.len() != 2 || !season.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EnumerateError::InvalidSeason(s!(season)));
    }
    season.parse().map_err(|_| EnumerateError::InvalidSeason(s!(season)))
}

/// All game-chart URLs for a season, in game-number order (index 0 = game 1).
///
/// `"24"` → `.../game/0022400001/game-charts` ..= `.../game/0022401230/game-charts`
pub fn game_urls(season: &str) -> Result<Vec<String>, EnumerateError> {
    check_season(season)?;
    let base: u64 = join!(season, GAME_NUM_SUFFIX)
        .parse()
        .map_err(|_| EnumerateError::InvalidSeason(s!(season)))?;

    // Seven digits after the "002" prefix, so "05" keeps its leading zero.
    Ok((0..u64::from(TOTAL_GAMES))
        .map(|offset| format!("{URL_START}{:07}{URL_END}", base + offset))
        .collect())
}

/// Season folder name: `"24"` → `"S2425"`.
pub fn season_label(season: &str) -> Result<String, EnumerateError> {
    let start = check_season(season)?;
    Ok(format!("S{season}{:02}", (start + 1) % 100))
}

pub fn fetch_document(source: &dyn PageSource, url: &str) -> Result<Html, FetchError> {
    let body = source.get(url)?;
    let t = std::time::Instant::now();
    let doc = Html::parse_document(&body);
    logd!("Parsed {url} ({} bytes) in {:?}", body.len(), t.elapsed());
    Ok(doc)
}

/// The raw action array, exactly as embedded in the page.
pub fn extract_actions(doc: &Html) -> Result<Vec<Value>, ExtractError> {
    let text = html::text_by_id(doc, NEXT_DATA_ID).ok_or(ExtractError::MissingElement(NEXT_DATA_ID))?;
    let mut root: Value = serde_json::from_str(&text)?;

    let mut node = &mut root;
    for key in ACTIONS_PATH {
        node = node.get_mut(key).ok_or(ExtractError::MissingKey(key))?;
    }
    match node.take() {
        Value::Array(actions) => Ok(actions),
        _ => Err(ExtractError::NotAnArray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(next_data: &str) -> Html {
        Html::parse_document(&format!(
            r#"<!DOCTYPE html><html><head><title>Game</title></head><body>
               <div id="__next"></div>
               <script id="__NEXT_DATA__" type="application/json">{next_data}</script>
               </body></html>"#
        ))
    }

    #[test]
    fn urls_cover_the_season() {
        let urls = game_urls("24").unwrap();
        assert_eq!(urls.len(), 1230);
        assert_eq!(urls[0], "https://www.nba.com/game/0022400001/game-charts");
        assert_eq!(urls[1229], "https://www.nba.com/game/0022401230/game-charts");

        let ids: Vec<u64> = urls
            .iter()
            .map(|u| u.trim_start_matches(URL_START).trim_end_matches(URL_END).parse().unwrap())
            .collect();
        assert!(ids.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn early_seasons_keep_leading_zero() {
        let urls = game_urls("05").unwrap();
        assert_eq!(urls[0], "https://www.nba.com/game/0020500001/game-charts");
    }

    #[test]
    fn bad_season_codes() {
        for s in ["", "2", "2024", "ab", "2a", " 4"] {
            assert!(game_urls(s).is_err(), "{s:?}");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(season_label("24").unwrap(), "S2425");
        assert_eq!(season_label("99").unwrap(), "S9900");
        assert!(season_label("x").is_err());
    }

    #[test]
    fn extracts_actions() {
        let doc = page(r#"{"props":{"pageProps":{"playByPlay":{"gameId":"0022400001","actions":[{"actionNumber":1},{"actionNumber":2}]}}}}"#);
        let actions = extract_actions(&doc).unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1]["actionNumber"], 2);
    }

    #[test]
    fn extract_failures_are_distinct() {
        let no_script = Html::parse_document("<html><body><p>hi</p></body></html>");
        assert!(matches!(extract_actions(&no_script), Err(ExtractError::MissingElement(_))));

        assert!(matches!(extract_actions(&page("{not json")), Err(ExtractError::Json(_))));

        let postponed = page(r#"{"props":{"pageProps":{"playByPlay":null}}}"#);
        assert!(matches!(extract_actions(&postponed), Err(ExtractError::MissingKey("actions"))));

        let no_pbp = page(r#"{"props":{"pageProps":{}}}"#);
        assert!(matches!(extract_actions(&no_pbp), Err(ExtractError::MissingKey("playByPlay"))));

        let odd = page(r#"{"props":{"pageProps":{"playByPlay":{"actions":{}}}}}"#);
        assert!(matches!(extract_actions(&odd), Err(ExtractError::NotAnArray)));
    }
}
