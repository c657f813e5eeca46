// src/clean.rs
//! Turns one game's raw actions into export rows.
//!
//! Per game, in order:
//! 1. resolve home/away team codes from the `h` / `v` location markers,
//! 2. derive shot value and score value,
//! 3. reformat the clock to `MM:SS`,
//! 4. project onto [`EXPORT_COLUMNS`](crate::data::EXPORT_COLUMNS).

use crate::data::{CleanedRow, RawAction};
use crate::error::CleanError;

const HOME: &str = "h";
const AWAY: &str = "v";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

pub fn clean_game(game_id: &str, actions: Vec<RawAction>) -> Result<Vec<CleanedRow>, CleanError> {
    let matchup = resolve_teams(&actions)?;
    actions
        .into_iter()
        .map(|a| clean_action(game_id, &matchup, a))
        .collect()
}

pub fn resolve_teams(actions: &[RawAction]) -> Result<Matchup, CleanError> {
    Ok(Matchup {
        home: team_at(actions, HOME)?,
        away: team_at(actions, AWAY)?,
    })
}

/// The single team code used by every action at `location`.
fn team_at(actions: &[RawAction], location: &'static str) -> Result<String, CleanError> {
    let mut codes = actions
        .iter()
        .filter(|a| a.location == location)
        .map(|a| a.team_tricode.as_str())
        .filter(|code| !code.is_empty());

    let first = codes.next().ok_or(CleanError::MissingLocation(location))?;
    if let Some(other) = codes.find(|code| *code != first) {
        return Err(CleanError::InconsistentTeam {
            location,
            first: s!(first),
            other: s!(other),
        });
    }
    Ok(s!(first))
}

/// Points the attempt is worth: 3 / 2 for field goals, 1 for free throws.
pub fn shot_value(a: &RawAction) -> Option<u8> {
    if a.action_type == "Free Throw" {
        return Some(1);
    }
    match a.is_field_goal {
        Some(1) if a.description.contains("3PT") => Some(3),
        Some(1) => Some(2),
        _ => None,
    }
}

/// Points actually scored. Never more than `shot`.
pub fn score_value(a: &RawAction, shot: Option<u8>) -> Option<u8> {
    match a.action_type.as_str() {
        "Made Shot" => shot,
        "Missed Shot" => Some(0),
        "Free Throw" if a.description.contains("MISS") => Some(0),
        "Free Throw" => Some(1),
        _ => None,
    }
}

/// `PT11M23.00S` → `11:23`. Sub-second precision is dropped.
pub fn format_clock(raw: &str) -> Result<String, CleanError> {
    let bad = || CleanError::Clock(s!(raw));

    let body = raw
        .trim()
        .strip_prefix("PT")
        .and_then(|s| s.strip_suffix('S'))
        .ok_or_else(bad)?;
    let (min, sec) = body.split_once('M').ok_or_else(bad)?;
    let (whole, frac) = sec.split_once('.').unwrap_or((sec, "0"));

    let minutes = digits(min).ok_or_else(bad)?;
    let seconds = digits(whole).ok_or_else(bad)?;
    digits(frac).ok_or_else(bad)?;
    if minutes > 59 || seconds > 59 {
        return Err(bad());
    }
    Ok(format!("{minutes:02}:{seconds:02}"))
}

fn digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

fn clean_action(game_id: &str, matchup: &Matchup, a: RawAction) -> Result<CleanedRow, CleanError> {
    let clock = format_clock(&a.clock)?;
    let shot_val = shot_value(&a);
    let score_val = score_value(&a, shot_val);

    Ok(CleanedRow {
        game_id: s!(game_id),
        period: a.period,
        clock,
        home: matchup.home.clone(),
        score_home: a.score_home,
        away: matchup.away.clone(),
        score_away: a.score_away,
        player_name_i: non_empty(a.player_name_i),
        team_tricode: non_empty(a.team_tricode),
        description: a.description,
        action_type: a.action_type,
        sub_type: a.sub_type,
        x_legacy: a.x_legacy,
        y_legacy: a.y_legacy,
        shot_distance: a.shot_distance,
        is_field_goal: a.is_field_goal,
        shot_val,
        score_val,
        location: a.location,
    })
}
