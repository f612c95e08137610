// src/specs/pitching.rs
use std::collections::BTreeMap;

use crate::config::consts::DEFAULT_INT;
use crate::core::num::{outs_from_ip_value, to_int, value_text};
use crate::core::{PerSide, PlayerCode};
use crate::document::{PitcherRow, PitcherTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PitchStat {
    /// Runs allowed
    R,
    Er,
    Hit,
    Bb,
    So,
    Hr,
    Ab,
    Bf,
    Pa,
    /// Walks plus hit-by-pitch
    Bbhp,
}

impl PitchStat {
    pub fn name(self) -> &'static str {
        match self {
            PitchStat::R => "r",
            PitchStat::Er => "er",
            PitchStat::Hit => "hit",
            PitchStat::Bb => "bb",
            PitchStat::So => "kk",
            PitchStat::Hr => "hr",
            PitchStat::Ab => "ab",
            PitchStat::Bf => "bf",
            PitchStat::Pa => "pa",
            PitchStat::Bbhp => "bbhp",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PitchingLine {
    pub name: String,
    /// Canonical innings pitched
    pub outs: i64,
    /// `inn` cell as the site wrote it
    pub ip_raw: Option<String>,
    pub r: i64,
    pub er: i64,
    pub hit: i64,
    pub bb: i64,
    pub so: i64,
    pub hr: i64,
    pub ab: i64,
    pub bf: i64,
    pub pa: i64,
    pub bbhp: i64,
}

impl PitchingLine {
    pub fn from_row(row: &PitcherRow) -> Self {
        let n = |v: &serde_json::Value| to_int(v, DEFAULT_INT);
        Self {
            name: row.name.clone(),
            outs: outs_from_ip_value(&row.inn),
            ip_raw: value_text(&row.inn),
            r: n(&row.r),
            er: n(&row.er),
            hit: n(&row.hit),
            bb: n(&row.bb),
            so: n(&row.kk),
            hr: n(&row.hr),
            ab: n(&row.ab),
            bf: n(&row.bf),
            pa: n(&row.pa),
            bbhp: n(&row.bbhp),
        }
    }

    pub fn get(&self, stat: PitchStat) -> i64 {
        match stat {
            PitchStat::R => self.r,
            PitchStat::Er => self.er,
            PitchStat::Hit => self.hit,
            PitchStat::Bb => self.bb,
            PitchStat::So => self.so,
            PitchStat::Hr => self.hr,
            PitchStat::Ab => self.ab,
            PitchStat::Bf => self.bf,
            PitchStat::Pa => self.pa,
            PitchStat::Bbhp => self.bbhp,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct TeamPitching {
    pub staff: BTreeMap<PlayerCode, PitchingLine>,
}

impl TeamPitching {
    /// Staff total for one column.
    pub fn sum(&self, stat: PitchStat) -> i64 {
        self.staff.values().fold(0, |acc, p| acc.saturating_add(p.get(stat)))
    }

    pub fn total_outs(&self) -> i64 {
        self.staff.values().fold(0, |acc, p| acc.saturating_add(p.outs))
    }
}

pub type PitchingProjection = PerSide<TeamPitching>;

pub fn extract_pitching(table: &PitcherTable) -> PitchingProjection {
    PerSide::from_fn(|side| TeamPitching {
        staff: table
            .rows(side)
            .iter()
            .filter_map(|row| row.pcode.clone().map(|c| (c, PitchingLine::from_row(row))))
            .collect(),
    })
}
