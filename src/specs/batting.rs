// src/specs/batting.rs
use std::collections::BTreeMap;

use crate::config::consts::DEFAULT_INT;
use crate::core::num::to_int;
use crate::core::{PerSide, PlayerCode};
use crate::document::{BatterRow, BatterTable};

/// Batting columns shared by player lines and the team-total row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatStat {
    Ab,
    Hit,
    Bb,
    Hr,
    Rbi,
    So,
    Run,
    Sb,
}

impl BatStat {
    pub fn name(self) -> &'static str {
        match self {
            BatStat::Ab => "ab",
            BatStat::Hit => "hit",
            BatStat::Bb => "bb",
            BatStat::Hr => "hr",
            BatStat::Rbi => "rbi",
            BatStat::So => "so",
            BatStat::Run => "run",
            BatStat::Sb => "sb",
        }
    }

    /// Raw cell of a record row for this column (strikeouts are `kk` on the site).
    fn cell(self, row: &BatterRow) -> &serde_json::Value {
        match self {
            BatStat::Ab => &row.ab,
            BatStat::Hit => &row.hit,
            BatStat::Bb => &row.bb,
            BatStat::Hr => &row.hr,
            BatStat::Rbi => &row.rbi,
            BatStat::So => &row.kk,
            BatStat::Run => &row.run,
            BatStat::Sb => &row.sb,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BattingLine {
    pub name: String,
    pub bat_order: i64,
    pub ab: i64,
    pub hit: i64,
    pub bb: i64,
    pub hr: i64,
    pub rbi: i64,
    pub so: i64,
    pub run: i64,
    pub sb: i64,
}

impl BattingLine {
    pub fn from_row(row: &BatterRow) -> Self {
        let n = |stat: BatStat| to_int(stat.cell(row), DEFAULT_INT);
        Self {
            name: row.name.clone(),
            bat_order: to_int(&row.bat_order, DEFAULT_INT),
            ab: n(BatStat::Ab),
            hit: n(BatStat::Hit),
            bb: n(BatStat::Bb),
            hr: n(BatStat::Hr),
            rbi: n(BatStat::Rbi),
            so: n(BatStat::So),
            run: n(BatStat::Run),
            sb: n(BatStat::Sb),
        }
    }

    pub fn get(&self, stat: BatStat) -> i64 {
        match stat {
            BatStat::Ab => self.ab,
            BatStat::Hit => self.hit,
            BatStat::Bb => self.bb,
            BatStat::Hr => self.hr,
            BatStat::Rbi => self.rbi,
            BatStat::So => self.so,
            BatStat::Run => self.run,
            BatStat::Sb => self.sb,
        }
    }

    /// Any sign the player actually batted.
    pub fn has_plate_record(&self) -> bool {
        [BatStat::Ab, BatStat::Hit, BatStat::Bb, BatStat::Hr, BatStat::Rbi, BatStat::So]
            .iter()
            .any(|&s| self.get(s) != 0)
    }
}

/// Team-total row, stored as sent and coerced on read.
#[derive(Clone, Debug, Default)]
pub struct TeamTotal(BatterRow);

impl TeamTotal {
    pub fn get(&self, stat: BatStat) -> i64 {
        to_int(stat.cell(&self.0), DEFAULT_INT)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TeamBatting {
    pub players: BTreeMap<PlayerCode, BattingLine>,
    pub total: TeamTotal,
}

impl TeamBatting {
    /// Sum of one column over the individual lines.
    pub fn sum(&self, stat: BatStat) -> i64 {
        self.players.values().fold(0, |acc, p| acc.saturating_add(p.get(stat)))
    }
}

pub type BattingProjection = PerSide<TeamBatting>;

pub fn extract_batting(table: &BatterTable) -> BattingProjection {
    PerSide::from_fn(|side| TeamBatting {
        players: table
            .rows(side)
            .iter()
            .filter_map(|row| row.player_code.clone().map(|c| (c, BattingLine::from_row(row))))
            .collect(),
        total: TeamTotal(table.total(side).clone()),
    })
}
