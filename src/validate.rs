// src/validate.rs
// One game in, one verdict out. Pure: no I/O, no logging, no shared state.

use serde::Serialize;

use crate::check::{self, Findings};
use crate::document::GameDocument;
use crate::specs::{
    self, BattingProjection, LineupProjection, PitcherAppearances, PitchingProjection,
    RelayBatting, Scoreboard,
};

/// `ok` is true iff there are no issues; warnings never fail a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub ok: bool,
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl From<Findings> for Verdict {
    fn from(f: Findings) -> Self {
        Self { ok: f.issues.is_empty(), issues: f.issues, warnings: f.warnings }
    }
}

/// Every projection the checks need, built once per document.
#[derive(Clone, Debug)]
pub struct Projections {
    pub lineup: LineupProjection,
    pub batting: BattingProjection,
    pub pitching: PitchingProjection,
    pub relay_batting: RelayBatting,
    pub appearances: PitcherAppearances,
    pub scoreboard: Option<Scoreboard>,
}

impl Projections {
    pub fn extract(doc: &GameDocument) -> Self {
        Self {
            lineup: specs::extract_lineup(&doc.lineup),
            batting: specs::extract_batting(&doc.record.batter),
            pitching: specs::extract_pitching(&doc.record.pitcher),
            relay_batting: specs::relay_batting(&doc.relay),
            appearances: specs::pitcher_appearances(&doc.relay),
            scoreboard: specs::final_scoreboard(&doc.relay),
        }
    }
}

/// Run all nine cross-checks in fixed order.
pub fn validate_game_full(doc: &GameDocument) -> Verdict {
    let p = Projections::extract(doc);
    let sb = p.scoreboard.as_ref();
    let mut all = Findings::default();

    // batting
    all.absorb(check::check_lineup_vs_record_batter(&p.lineup, &p.batting));
    all.absorb(check::check_relay_vs_record_batter(&p.relay_batting, &p.batting));
    all.absorb_issues(check::check_record_batter_team_totals(&p.batting));
    all.absorb_issues(check::check_batters_vs_scoreboard(&p.batting, sb));

    // pitching
    all.absorb(check::check_lineup_vs_record_pitcher(&p.lineup, &p.pitching));
    all.absorb(check::check_pitcher_appearances(&p.appearances, &p.pitching, &p.lineup));
    all.absorb_issues(check::check_pitchers_vs_batters(&p.pitching, &p.batting));
    all.absorb_issues(check::check_pitchers_vs_scoreboard(&p.pitching, sb));

    // metadata
    all.absorb(check::check_game_info_vs_lineup(&doc.lineup.game_info, &p.lineup));

    all.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_document_is_ok() {
        let v = validate_game_full(&GameDocument::default());
        assert_eq!(v, Verdict { ok: true, issues: vec![], warnings: vec![] });
    }

    #[test]
    fn warnings_do_not_fail() {
        let doc = GameDocument::from_value(json!({
            "lineup": { "home_starter": [{ "playerCode": "B1", "position": "7", "batorder": 1 }] }
        }))
        .unwrap();
        let v = validate_game_full(&doc);
        assert!(v.ok);
        assert_eq!(v.warnings.len(), 1);
    }

    #[test]
    fn oversized_cells_give_issues_not_panics() {
        let doc = GameDocument::from_value(json!({
            "record": {
                "batter": { "home": [
                    { "playerCode": "H1", "ab": "9223372036854775807" },
                    { "playerCode": "H2", "ab": "1" }
                ]},
                "pitcher": { "away": [{ "pcode": "P1", "inn": "9223372036854775807", "ab": 5 }] }
            }
        }))
        .unwrap();
        let v = validate_game_full(&doc);
        assert!(!v.ok);
        assert!(v.issues.iter().any(|m| m == "[home] team total ab mismatch: players=9223372036854775807, team total=0"));
    }

    #[test]
    fn verdict_serializes_flat() {
        let v = Verdict { ok: false, issues: vec![s!("x")], warnings: vec![] };
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({ "ok": false, "issues": ["x"], "warnings": [] })
        );
    }
}
