// src/specs/lineup.rs
use std::collections::{BTreeMap, BTreeSet};

use crate::config::consts::{DEFAULT_INT, PITCHER_POSITION};
use crate::core::num::{to_int, value_text};
use crate::core::{PerSide, PlayerCode, Side};
use crate::document::{LineupEntry, LineupSection};

/// What a starting-lineup entry stands for. Decided once, here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Pitcher,
    Batter { order: i64, position: String },
}

impl Slot {
    /// The site marks the starting pitcher's entry with position "1".
    pub fn of(entry: &LineupEntry) -> Slot {
        match value_text(&entry.position) {
            Some(p) if p == PITCHER_POSITION => Slot::Pitcher,
            _ => Slot::Batter {
                order: to_int(&entry.batorder, DEFAULT_INT),
                position: entry.position_name.clone(),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartingBatter {
    pub name: String,
    pub bat_order: i64,
    pub position: String,
}

#[derive(Clone, Debug, Default)]
pub struct TeamLineup {
    pub starters: BTreeMap<PlayerCode, StartingBatter>,
    pub starting_pitcher: Option<PlayerCode>,
    pub candidates: BTreeMap<PlayerCode, String>,
    pub bullpen: BTreeMap<PlayerCode, String>,
}

impl TeamLineup {
    /// Starting pitcher plus bullpen.
    pub fn pitchers(&self) -> BTreeSet<&PlayerCode> {
        self.bullpen.keys().chain(self.starting_pitcher.as_ref()).collect()
    }

    /// Everyone the lineup tab lists for this team.
    pub fn known_players(&self) -> BTreeSet<&PlayerCode> {
        let mut all = self.pitchers();
        all.extend(self.starters.keys());
        all.extend(self.candidates.keys());
        all
    }
}

pub type LineupProjection = PerSide<TeamLineup>;

pub fn extract_lineup(section: &LineupSection) -> LineupProjection {
    PerSide::from_fn(|side| extract_team(section, side))
}

fn extract_team(section: &LineupSection, side: Side) -> TeamLineup {
    let mut team = TeamLineup::default();

    for entry in section.starters(side) {
        let Some(code) = entry.player_code.clone() else { continue };
        match Slot::of(entry) {
            // Several pitcher-slot entries: last one wins
            Slot::Pitcher => team.starting_pitcher = Some(code),
            Slot::Batter { order, position } => {
                team.starters.insert(code, StartingBatter {
                    name: entry.player_name.clone(),
                    bat_order: order,
                    position,
                });
            }
        }
    }

    team.bullpen = name_map(section.bullpen(side));
    team.candidates = name_map(section.candidates(side));
    team
}

fn name_map(entries: &[LineupEntry]) -> BTreeMap<PlayerCode, String> {
    entries
        .iter()
        .filter_map(|e| e.player_code.clone().map(|c| (c, e.player_name.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::GameDocument;
    use serde_json::json;

    fn lineup(v: serde_json::Value) -> LineupProjection {
        let doc = GameDocument::from_value(json!({ "lineup": v })).unwrap();
        extract_lineup(&doc.lineup)
    }

    #[test]
    fn splits_pitcher_from_batters() {
        let li = lineup(json!({
            "home_starter": [
                { "playerCode": "P1", "playerName": "Ace", "position": "1", "batorder": 0 },
                { "playerCode": "B1", "playerName": "Lead", "position": "8", "positionName": "CF", "batorder": "1" },
                { "playerCode": "B2", "playerName": "Two", "position": 6, "positionName": "SS", "batorder": 2 }
            ]
        }));
        let home = &li[Side::Home];
        assert_eq!(home.starting_pitcher, Some(PlayerCode::from("P1")));
        assert_eq!(home.starters.len(), 2);
        assert!(!home.starters.contains_key(&PlayerCode::from("P1")));
        let lead = &home.starters[&PlayerCode::from("B1")];
        assert_eq!(lead.bat_order, 1);
        assert_eq!(lead.position, "CF");
        assert!(li[Side::Away].starters.is_empty());
    }

    #[test]
    fn numeric_pitcher_marker_is_recognized() {
        let li = lineup(json!({
            "away_starter": [{ "playerCode": 77, "position": 1 }]
        }));
        assert_eq!(li[Side::Away].starting_pitcher, Some(PlayerCode::from("77")));
    }

    #[test]
    fn last_pitcher_slot_wins() {
        let li = lineup(json!({
            "home_starter": [
                { "playerCode": "P1", "position": "1" },
                { "playerCode": "P2", "position": "1" }
            ]
        }));
        assert_eq!(li[Side::Home].starting_pitcher, Some(PlayerCode::from("P2")));
    }

    #[test]
    fn entries_without_code_are_skipped() {
        let li = lineup(json!({
            "home_starter": [{ "playerName": "Ghost", "position": "7" }],
            "home_bullpen": [{ "playerName": "Ghost" }, { "playerCode": "R1", "playerName": "Relief" }],
            "home_candidate": [{ "playerCode": "", "playerName": "Nobody" }]
        }));
        let home = &li[Side::Home];
        assert!(home.starters.is_empty());
        assert_eq!(home.bullpen.len(), 1);
        assert_eq!(home.bullpen[&PlayerCode::from("R1")], "Relief");
        assert!(home.candidates.is_empty());
    }

    #[test]
    fn pitchers_and_known_players() {
        let li = lineup(json!({
            "home_starter": [
                { "playerCode": "P1", "position": "1" },
                { "playerCode": "B1", "position": "2" }
            ],
            "home_bullpen": [{ "playerCode": "R1" }],
            "home_candidate": [{ "playerCode": "C1" }]
        }));
        let home = &li[Side::Home];
        let p: Vec<&str> = home.pitchers().into_iter().map(PlayerCode::as_str).collect();
        assert_eq!(p, vec!["P1", "R1"]);
        assert_eq!(home.known_players().len(), 4);
    }
}
