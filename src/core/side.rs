// src/core/side.rs
use std::fmt;
use std::ops::{Index, IndexMut};

use serde_json::Value;

use crate::config::consts::AWAY_BATTING_FLAG;
use super::num::value_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Report order: home first.
    pub const ALL: [Side; 2] = [Side::Home, Side::Away];

    pub fn opposite(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }

    /// Batting side of a half-inning from its `homeOrAway` flag.
    /// Only a flag reading "0" means the away team bats; anything else
    /// (including a missing flag) is the home half.
    pub fn batting_from_flag(flag: &Value) -> Side {
        match value_text(flag) {
            Some(t) if t == AWAY_BATTING_FLAG => Side::Away,
            _ => Side::Home,
        }
    }

    /// Fielding (pitching) side of a half-inning.
    pub fn fielding_from_flag(flag: &Value) -> Side {
        Side::batting_from_flag(flag).opposite()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per team.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub fn new(home: T, away: T) -> Self { Self { home, away } }

    /// Build both sides from the same constructor.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self { home: f(Side::Home), away: f(Side::Away) }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Home, &self.home), (Side::Away, &self.away)].into_iter()
    }
}

impl<T> Index<Side> for PerSide<T> {
    type Output = T;
    fn index(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

impl<T> IndexMut<Side> for PerSide<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}
