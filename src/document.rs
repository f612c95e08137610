// src/document.rs
//! # Collected game document
//!
//! One game as the collector persists it: `{ "lineup": …, "relay": …, "record": … }`.
//! Shapes follow the portal's own JSON payloads (lineup tab, relay tab per inning,
//! record tab), so field names keep the site's camelCase spelling.
//!
//! ## Tolerance
//! - Every key is optional; a missing key, an explicit `null` and a value of
//!   the wrong shape all give the empty default. Lists fall back per element.
//! - Counting cells stay raw (`serde_json::Value`) and are coerced on read with
//!   `core::num::to_int`. The site sends `"3"`, `3` and `"-"` for the same column.
//! - Player codes may arrive as strings or numbers; see `core::de::PlayerCode`.
//!
//! Only a top level that is not a JSON object is rejected. Everything
//! downstream works on present-but-possibly-empty structures and never fails.

use serde::Deserialize;
use serde_json::Value;

use crate::core::de::{lenient, lenient_seq, player_code, PlayerCode};
use crate::core::Side;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameDocument {
    #[serde(deserialize_with = "lenient")]
    pub lineup: LineupSection,
    #[serde(alias = "inning_data", deserialize_with = "lenient_seq")]
    pub relay: Vec<Inning>,
    #[serde(alias = "record_data", deserialize_with = "lenient")]
    pub record: RecordSection,
}

impl GameDocument {
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn from_value(v: Value) -> serde_json::Result<Self> {
        serde_json::from_value(v)
    }

    /// Number of relay text events across all innings.
    pub fn relay_event_count(&self) -> usize {
        self.relay
            .iter()
            .flat_map(|inn| inn.iter())
            .map(|half| half.text_options.len())
            .sum()
    }
}

/* ---------------- lineup tab ---------------- */

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LineupSection {
    #[serde(deserialize_with = "lenient_seq")]
    pub home_starter: Vec<LineupEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub away_starter: Vec<LineupEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub home_bullpen: Vec<LineupEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub away_bullpen: Vec<LineupEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub home_candidate: Vec<LineupEntry>,
    #[serde(deserialize_with = "lenient_seq")]
    pub away_candidate: Vec<LineupEntry>,
    #[serde(deserialize_with = "lenient")]
    pub game_info: GameInfo,
}

impl LineupSection {
    pub fn starters(&self, side: Side) -> &[LineupEntry] {
        match side {
            Side::Home => &self.home_starter,
            Side::Away => &self.away_starter,
        }
    }

    pub fn bullpen(&self, side: Side) -> &[LineupEntry] {
        match side {
            Side::Home => &self.home_bullpen,
            Side::Away => &self.away_bullpen,
        }
    }

    pub fn candidates(&self, side: Side) -> &[LineupEntry] {
        match side {
            Side::Home => &self.home_candidate,
            Side::Away => &self.away_candidate,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineupEntry {
    #[serde(deserialize_with = "player_code")]
    pub player_code: Option<PlayerCode>,
    #[serde(deserialize_with = "lenient")]
    pub player_name: String,
    pub position: Value,
    #[serde(deserialize_with = "lenient")]
    pub position_name: String,
    pub batorder: Value,
}

/// Pre-game metadata. Only the announced starting pitchers are read.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GameInfo {
    #[serde(rename = "hPCode", deserialize_with = "player_code")]
    pub home_pitcher: Option<PlayerCode>,
    #[serde(rename = "aPCode", deserialize_with = "player_code")]
    pub away_pitcher: Option<PlayerCode>,
}

impl GameInfo {
    pub fn starting_pitcher(&self, side: Side) -> Option<&PlayerCode> {
        match side {
            Side::Home => self.home_pitcher.as_ref(),
            Side::Away => self.away_pitcher.as_ref(),
        }
    }
}

/* ---------------- relay tab ---------------- */

/// Top and bottom halves, in play order.
pub type Inning = Vec<HalfInning>;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HalfInning {
    /// "0" while the away team bats
    pub home_or_away: Value,
    #[serde(deserialize_with = "lenient_seq")]
    pub text_options: Vec<TextEvent>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextEvent {
    #[serde(rename = "type")]
    pub kind: Value,
    #[serde(deserialize_with = "lenient")]
    pub text: String,
    #[serde(deserialize_with = "lenient")]
    pub current_game_state: GameState,
}

/// Running game state embedded in every relay event.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    #[serde(deserialize_with = "player_code")]
    pub batter: Option<PlayerCode>,
    #[serde(deserialize_with = "player_code")]
    pub pitcher: Option<PlayerCode>,
    pub home_score: Value,
    pub away_score: Value,
    pub home_hit: Value,
    pub away_hit: Value,
    /// Walks plus hit-by-pitch
    pub home_ball_four: Value,
    pub away_ball_four: Value,
    pub home_error: Value,
    pub away_error: Value,
}

/* ---------------- record tab ---------------- */

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecordSection {
    #[serde(deserialize_with = "lenient")]
    pub batter: BatterTable,
    #[serde(deserialize_with = "lenient")]
    pub pitcher: PitcherTable,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatterTable {
    #[serde(deserialize_with = "lenient_seq")]
    pub home: Vec<BatterRow>,
    #[serde(deserialize_with = "lenient_seq")]
    pub away: Vec<BatterRow>,
    #[serde(deserialize_with = "lenient")]
    pub home_total: BatterRow,
    #[serde(deserialize_with = "lenient")]
    pub away_total: BatterRow,
}

impl BatterTable {
    pub fn rows(&self, side: Side) -> &[BatterRow] {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn total(&self, side: Side) -> &BatterRow {
        match side {
            Side::Home => &self.home_total,
            Side::Away => &self.away_total,
        }
    }
}

/// One batting line; team-total rows share the shape without a code.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatterRow {
    #[serde(deserialize_with = "player_code")]
    pub player_code: Option<PlayerCode>,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    pub bat_order: Value,
    pub ab: Value,
    pub hit: Value,
    pub bb: Value,
    pub hr: Value,
    pub rbi: Value,
    /// Strikeouts
    pub kk: Value,
    pub run: Value,
    pub sb: Value,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PitcherTable {
    #[serde(deserialize_with = "lenient_seq")]
    pub home: Vec<PitcherRow>,
    #[serde(deserialize_with = "lenient_seq")]
    pub away: Vec<PitcherRow>,
}

impl PitcherTable {
    pub fn rows(&self, side: Side) -> &[PitcherRow] {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PitcherRow {
    #[serde(deserialize_with = "player_code")]
    pub pcode: Option<PlayerCode>,
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    /// Innings pitched, "6.2" / "1 ⅔" notation
    pub inn: Value,
    pub r: Value,
    pub er: Value,
    pub hit: Value,
    pub bb: Value,
    pub kk: Value,
    pub hr: Value,
    pub ab: Value,
    pub bf: Value,
    pub pa: Value,
    pub bbhp: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_object_is_empty_document() {
        let doc = GameDocument::from_json_str("{}").unwrap();
        assert!(doc.lineup.home_starter.is_empty());
        assert!(doc.relay.is_empty());
        assert!(doc.record.batter.home.is_empty());
        assert!(doc.lineup.game_info.home_pitcher.is_none());
    }

    #[test]
    fn null_sections_are_empty() {
        let doc = GameDocument::from_value(json!({
            "lineup": null,
            "relay": null,
            "record": { "batter": null, "pitcher": { "home": null } }
        }))
        .unwrap();
        assert!(doc.relay.is_empty());
        assert!(doc.record.pitcher.home.is_empty());
    }

    #[test]
    fn legacy_keys_are_accepted() {
        let doc = GameDocument::from_value(json!({
            "inning_data": [[{ "homeOrAway": "0", "textOptions": [{ "type": 13, "text": "x" }] }]],
            "record_data": { "batter": { "home": [{ "playerCode": "1" }] } }
        }))
        .unwrap();
        assert_eq!(doc.relay_event_count(), 1);
        assert_eq!(doc.record.batter.home.len(), 1);
    }

    #[test]
    fn wrong_shaped_sections_degrade_to_empty() {
        let doc = GameDocument::from_value(json!({
            "lineup": {
                "game_info": "n/a",
                "home_starter": [
                    { "playerCode": "H1", "playerName": 7, "position": "8" },
                    "garbage"
                ],
                "away_bullpen": { "not": "a list" }
            },
            "relay": [[{ "homeOrAway": "0", "textOptions": "none" }], 42],
            "record": { "batter": [1, 2, 3], "pitcher": { "home": [{ "pcode": "P1", "name": ["x"] }] } }
        }))
        .unwrap();

        let lineup = &doc.lineup;
        assert!(lineup.game_info.home_pitcher.is_none());
        assert_eq!(lineup.home_starter.len(), 2);
        assert_eq!(lineup.home_starter[0].player_code.as_ref().map(PlayerCode::as_str), Some("H1"));
        assert_eq!(lineup.home_starter[0].player_name, "");
        assert!(lineup.home_starter[1].player_code.is_none());
        assert!(lineup.away_bullpen.is_empty());

        assert_eq!(doc.relay.len(), 2);
        assert_eq!(doc.relay_event_count(), 0);
        assert!(doc.record.batter.home.is_empty());
        assert_eq!(doc.record.pitcher.home[0].name, "");
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        assert!(GameDocument::from_json_str("\"game\"").is_err());
        assert!(GameDocument::from_json_str("{ broken").is_err());
    }

    #[test]
    fn game_info_codes_are_read() {
        let doc = GameDocument::from_value(json!({
            "lineup": { "game_info": { "hPCode": 50001, "aPCode": "60001" } }
        }))
        .unwrap();
        let gi = &doc.lineup.game_info;
        assert_eq!(gi.starting_pitcher(Side::Home).map(PlayerCode::as_str), Some("50001"));
        assert_eq!(gi.starting_pitcher(Side::Away).map(PlayerCode::as_str), Some("60001"));
    }
}
