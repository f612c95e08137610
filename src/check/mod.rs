// src/check/mod.rs
//! # Cross-source reconciliation
//!
//! Each check compares two (or more) projections from `specs` and reports what
//! disagrees. Two severities only:
//! - **issue**: a hard numeric or referential mismatch; the game data is wrong
//!   or incomplete.
//! - **warning**: a soft anomaly, e.g. a bat-order difference that substitution
//!   bookkeeping can explain.
//!
//! Checks that can only produce issues return `Vec<String>`; the rest return
//! `Findings`. All checks are total: empty projections give empty results.
//!
//! Message scopes: `[home]` / `[away]` for one team, `[score]` for the final
//! scoreboard, `[meta]` for pre-game metadata.
pub mod batting;
pub mod meta;
pub mod pitching;

pub use batting::{
    check_batters_vs_scoreboard, check_lineup_vs_record_batter, check_record_batter_team_totals,
    check_relay_vs_record_batter,
};
pub use meta::check_game_info_vs_lineup;
pub use pitching::{
    check_lineup_vs_record_pitcher, check_pitcher_appearances, check_pitchers_vs_batters,
    check_pitchers_vs_scoreboard,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Findings {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn issue(&mut self, msg: String) {
        self.issues.push(msg);
    }

    pub fn warn(&mut self, msg: String) {
        self.warnings.push(msg);
    }

    /// Append another check's output, keeping order.
    pub fn absorb(&mut self, other: Findings) {
        self.issues.extend(other.issues);
        self.warnings.extend(other.warnings);
    }

    pub fn absorb_issues(&mut self, issues: Vec<String>) {
        self.issues.extend(issues);
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }
}
