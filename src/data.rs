// src/data.rs
//
// Row shapes for both pipelines.
//
// - RawAction: one play-by-play event as the site delivers it. Only the fields
//              the cleaner needs are typed; everything else stays in the raw file.
// - CleanedRow: one line of every exported CSV. Field order IS the column order.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// CSV header, in output order.
pub const EXPORT_COLUMNS: [&str; 19] = [
    "game_id", "period", "clock", "home", "scoreHome", "away", "scoreAway",
    "playerNameI", "teamTricode", "description", "actionType", "subType",
    "xLegacy", "yLegacy", "shotDistance", "isFieldGoal", "shotVal", "scoreVal",
    "location",
];

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawAction {
    pub period: Option<u32>,
    pub clock: String,
    #[serde(deserialize_with = "text_or_number")]
    pub score_home: String,
    #[serde(deserialize_with = "text_or_number")]
    pub score_away: String,
    #[serde(rename = "playerNameI", deserialize_with = "text_or_number")]
    pub player_name_i: String,
    #[serde(deserialize_with = "text_or_number")]
    pub team_tricode: String,
    #[serde(deserialize_with = "text_or_number")]
    pub description: String,
    #[serde(deserialize_with = "text_or_number")]
    pub action_type: String,
    #[serde(deserialize_with = "text_or_number")]
    pub sub_type: String,
    pub x_legacy: Option<f64>,
    pub y_legacy: Option<f64>,
    pub shot_distance: Option<f64>,
    pub is_field_goal: Option<u8>,
    /// "h" (home), "v" (visitor) or empty for game-level events.
    #[serde(deserialize_with = "text_or_number")]
    pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanedRow {
    pub game_id: String,
    pub period: Option<u32>,
    /// `MM:SS`
    pub clock: String,
    pub home: String,
    #[serde(rename = "scoreHome")]
    pub score_home: String,
    pub away: String,
    #[serde(rename = "scoreAway")]
    pub score_away: String,
    #[serde(rename = "playerNameI")]
    pub player_name_i: Option<String>,
    #[serde(rename = "teamTricode")]
    pub team_tricode: Option<String>,
    pub description: String,
    #[serde(rename = "actionType")]
    pub action_type: String,
    #[serde(rename = "subType")]
    pub sub_type: String,
    #[serde(rename = "xLegacy")]
    pub x_legacy: Option<f64>,
    #[serde(rename = "yLegacy")]
    pub y_legacy: Option<f64>,
    #[serde(rename = "shotDistance")]
    pub shot_distance: Option<f64>,
    #[serde(rename = "isFieldGoal")]
    pub is_field_goal: Option<u8>,
    #[serde(rename = "shotVal")]
    pub shot_val: Option<u8>,
    #[serde(rename = "scoreVal")]
    pub score_val: Option<u8>,
    pub location: String,
}

impl CleanedRow {
    /// Team appears on either side of this row's game.
    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}

/// Scores arrive as strings ("12"), other payloads send numbers or null.
fn text_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        None | Some(Value::Null) => s!(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
