// src/specs/relay.rs
use std::collections::{BTreeMap, BTreeSet};
use std::ops::AddAssign;

use crate::config::consts::{DEFAULT_INT, PA_EVENT_TYPES};
use crate::core::num::to_int;
use crate::core::{PerSide, PlayerCode, Side};
use crate::document::{GameState, HalfInning, Inning, TextEvent};

use super::play_text::classify_plate_appearance;

/// Batting counts rebuilt from relay text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelayLine {
    pub pa: i64,
    pub ab: i64,
    pub hit: i64,
    pub bb: i64,
    pub so: i64,
    pub hbp: i64,
}

impl AddAssign for RelayLine {
    fn add_assign(&mut self, o: Self) {
        self.pa += o.pa;
        self.ab += o.ab;
        self.hit += o.hit;
        self.bb += o.bb;
        self.so += o.so;
        self.hbp += o.hbp;
    }
}

pub type RelayBatting = PerSide<BTreeMap<PlayerCode, RelayLine>>;
pub type PitcherAppearances = PerSide<BTreeSet<PlayerCode>>;

impl TextEvent {
    /// Only numeric `type` 13/23 events close out a plate appearance.
    pub fn resolves_plate_appearance(&self) -> bool {
        self.kind.as_i64().is_some_and(|t| PA_EVENT_TYPES.contains(&t))
    }
}

fn halves(relay: &[Inning]) -> impl Iterator<Item = &HalfInning> {
    relay.iter().flat_map(|inn| inn.iter())
}

/// Per-team, per-batter counts from plate-appearance events.
pub fn relay_batting(relay: &[Inning]) -> RelayBatting {
    let mut stats = RelayBatting::default();

    for half in halves(relay) {
        let side = Side::batting_from_flag(&half.home_or_away);
        for ev in half.text_options.iter().filter(|e| e.resolves_plate_appearance()) {
            let Some(batter) = ev.current_game_state.batter.clone() else { continue };
            *stats[side].entry(batter).or_default() += classify_plate_appearance(&ev.text);
        }
    }
    stats
}

/// Pitchers seen on the mound, credited to the fielding team.
pub fn pitcher_appearances(relay: &[Inning]) -> PitcherAppearances {
    let mut seen = PitcherAppearances::default();

    for half in halves(relay) {
        let fielding = Side::fielding_from_flag(&half.home_or_away);
        for ev in &half.text_options {
            if let Some(p) = &ev.current_game_state.pitcher {
                seen[fielding].insert(p.clone());
            }
        }
    }
    seen
}

/// Final running totals from the last relay event of the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub home_score: i64,
    pub away_score: i64,
    pub home_hit: i64,
    pub away_hit: i64,
    /// Walks plus hit-by-pitch
    pub home_ball_four: i64,
    pub away_ball_four: i64,
    pub home_error: i64,
    pub away_error: i64,
}

impl Scoreboard {
    pub fn from_state(gs: &GameState) -> Self {
        let n = |v: &serde_json::Value| to_int(v, DEFAULT_INT);
        Self {
            home_score: n(&gs.home_score),
            away_score: n(&gs.away_score),
            home_hit: n(&gs.home_hit),
            away_hit: n(&gs.away_hit),
            home_ball_four: n(&gs.home_ball_four),
            away_ball_four: n(&gs.away_ball_four),
            home_error: n(&gs.home_error),
            away_error: n(&gs.away_error),
        }
    }

    pub fn score(&self, side: Side) -> i64 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    pub fn hits(&self, side: Side) -> i64 {
        match side {
            Side::Home => self.home_hit,
            Side::Away => self.away_hit,
        }
    }

    pub fn ball_four(&self, side: Side) -> i64 {
        match side {
            Side::Home => self.home_ball_four,
            Side::Away => self.away_ball_four,
        }
    }

    pub fn errors(&self, side: Side) -> i64 {
        match side {
            Side::Home => self.home_error,
            Side::Away => self.away_error,
        }
    }
}

/// Scoreboard from the last non-empty half-inning's last event.
/// `None` when the relay has no events at all.
pub fn final_scoreboard(relay: &[Inning]) -> Option<Scoreboard> {
    relay
        .iter()
        .rev()
        .flat_map(|inn| inn.iter().rev())
        .find_map(|half| half.text_options.last())
        .map(|ev| Scoreboard::from_state(&ev.current_game_state))
}
