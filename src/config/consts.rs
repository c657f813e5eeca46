// src/config/consts.rs

// Net config
pub const URL_START: &str = "https://www.nba.com/game/002";
pub const URL_END: &str = "/game-charts";
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:52.0) Gecko/20100101 Firefox/52.0";
// Sent as-is; the site ignores them.
pub const EXTRA_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Access-Control-Max-Age", "3600"),
];

// Season numbering: game ids run <season>00001 ..= <season>01230
pub const GAME_NUM_SUFFIX: &str = "00001";
pub const TOTAL_GAMES: u32 = 1230;
pub const DEFAULT_SEASON: &str = "24";
pub const DEFAULT_SEASON_LABEL: &str = "S2425";

// Embedded payload
pub const NEXT_DATA_ID: &str = "__NEXT_DATA__";
pub const ACTIONS_PATH: [&str; 4] = ["props", "pageProps", "playByPlay", "actions"];

// Storage
pub const DEFAULT_DATA_DIR: &str = "data";
pub const RAW_SUBDIR: &str = "raw";
pub const PROCESSED_SUBDIR: &str = "processed";
pub const TEAM_SUBDIR: &str = "team";
pub const PLAYER_SUBDIR: &str = "player";
pub const TEAMPLAYER_SUBDIR: &str = "teamplayer";

// Be polite: whole seconds, inclusive
pub const PAUSE_SECS_MIN: u64 = 1;
pub const PAUSE_SECS_MAX: u64 = 2;
