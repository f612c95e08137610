// src/specs/mod.rs
//! # Projection "specs" module
//!
//! Each spec reads **one tab** of the collected game document and shapes it into
//! a normalized per-team, per-player projection keyed by `PlayerCode`.
//!
//! ## What lives here
//! - **Lineup** (`lineup`): starters, starting pitcher, bench candidates, bullpen.
//! - **Record tab** (`batting`, `pitching`): official box-score lines with every
//!   counting cell coerced through `core::num::to_int`.
//! - **Relay tab** (`relay`, `play_text`): batting lines rebuilt from the
//!   play-by-play text, pitchers seen on the mound, and the final scoreboard.
//!
//! ## What does **not** live here
//! - **Cross-checks**: comparing projections is `check`'s job.
//! - **I/O or logging**: specs are pure functions of the document.
//!
//! ## Conventions & invariants
//! - Rows without a player code are skipped silently.
//! - Missing sections give empty projections, never errors.
//! - Maps are ordered by player code so reports are stable run to run.
//!
//! ## Typical call chain
//! ```text
//! store::load_game → validate::validate_game_full → specs::<tab>::extract_*
//!                                              ↘  check::* on the projections
//! ```
pub mod batting;
pub mod lineup;
pub mod pitching;
pub mod play_text;
pub mod relay;

pub use batting::{extract_batting, BatStat, BattingLine, BattingProjection, TeamBatting};
pub use lineup::{extract_lineup, LineupProjection, Slot, StartingBatter, TeamLineup};
pub use pitching::{extract_pitching, PitchStat, PitchingLine, PitchingProjection, TeamPitching};
pub use play_text::{classify_plate_appearance, PlayText};
pub use relay::{
    final_scoreboard, pitcher_appearances, relay_batting, PitcherAppearances, RelayBatting,
    RelayLine, Scoreboard,
};
