// src/check/pitching.rs
use std::collections::BTreeSet;

use crate::core::de::code_list;
use crate::core::{PlayerCode, Side};
use crate::specs::{
    BatStat, BattingProjection, LineupProjection, PitchStat, PitcherAppearances,
    PitchingProjection, Scoreboard,
};

use super::batting::missing_from;
use super::Findings;

/// Pitching record vs the lineup's starter + bullpen.
pub fn check_lineup_vs_record_pitcher(lineup: &LineupProjection, record: &PitchingProjection) -> Findings {
    let mut out = Findings::default();

    for side in Side::ALL {
        let listed = lineup[side].pitchers();
        let recorded: BTreeSet<&PlayerCode> = record[side].staff.keys().collect();

        let extra = missing_from(&recorded, &listed);
        if !extra.is_empty() {
            out.issue(finding!(side,
                "pitching record players not in lineup pitchers (starter+bullpen): {}",
                code_list(extra)));
        }
    }
    out
}

/// Pitchers seen on the mound in the relay vs record and lineup.
pub fn check_pitcher_appearances(
    seen: &PitcherAppearances,
    record: &PitchingProjection,
    lineup: &LineupProjection,
) -> Findings {
    let mut out = Findings::default();

    for side in Side::ALL {
        let recorded: BTreeSet<&PlayerCode> = record[side].staff.keys().collect();
        let mound: BTreeSet<&PlayerCode> = seen[side].iter().collect();
        let listed = lineup[side].pitchers();

        let never_pitched = missing_from(&recorded, &mound);
        if !never_pitched.is_empty() {
            out.issue(finding!(side,
                "pitchers in pitching record but never on the mound in relay: {}",
                code_list(never_pitched)));
        }

        let unrecorded = missing_from(&mound, &recorded);
        if !unrecorded.is_empty() {
            out.issue(finding!(side,
                "pitchers on the mound in relay but not in pitching record: {}",
                code_list(unrecorded)));
        }

        let unlisted = missing_from(&mound, &listed);
        if !unlisted.is_empty() {
            out.issue(finding!(side,
                "pitchers on the mound in relay but not in lineup (starter+bullpen): {}",
                code_list(unlisted)));
        }
    }
    out
}

/// Each staff's allowed totals vs the opposing batters.
/// Runs and hits compare against the opposing team-total row; walks, home runs
/// and at-bats against the sum of the opposing individual lines.
pub fn check_pitchers_vs_batters(pitching: &PitchingProjection, batting: &BattingProjection) -> Vec<String> {
    let mut issues = Vec::new();

    for side in Side::ALL {
        let staff = &pitching[side];
        let opp = &batting[side.opposite()];

        for (p_stat, b_stat) in [(PitchStat::R, BatStat::Run), (PitchStat::Hit, BatStat::Hit)] {
            let (allowed, total) = (staff.sum(p_stat), opp.total.get(b_stat));
            if allowed != total {
                issues.push(finding!(side,
                    "pitchers' {} sum ({allowed}) != opposing team total {} ({total})",
                    p_stat.name(), b_stat.name()));
            }
        }

        for (p_stat, b_stat) in [
            (PitchStat::Bb, BatStat::Bb),
            (PitchStat::Hr, BatStat::Hr),
            (PitchStat::Ab, BatStat::Ab),
        ] {
            let (allowed, batted) = (staff.sum(p_stat), opp.sum(b_stat));
            if allowed != batted {
                issues.push(finding!(side,
                    "pitchers' {} sum ({allowed}) != opposing batters' {} sum ({batted})",
                    p_stat.name(), b_stat.name()));
            }
        }
    }
    issues
}

/// Staff runs / hits / walks+HBP allowed vs the opposing line on the scoreboard.
pub fn check_pitchers_vs_scoreboard(pitching: &PitchingProjection, scoreboard: Option<&Scoreboard>) -> Vec<String> {
    let Some(sb) = scoreboard else { return Vec::new() };
    let mut issues = Vec::new();

    let pairs: [(PitchStat, fn(&Scoreboard, Side) -> i64, &str); 3] = [
        (PitchStat::R, Scoreboard::score, "score"),
        (PitchStat::Hit, Scoreboard::hits, "hits"),
        (PitchStat::Bbhp, Scoreboard::ball_four, "walks+hbp"),
    ];
    for (stat, read, label) in pairs {
        // away staff first
        for staff_side in [Side::Away, Side::Home] {
            let batting_side = staff_side.opposite();
            let allowed = pitching[staff_side].sum(stat);
            let board = read(sb, batting_side);
            if allowed != board {
                issues.push(finding!("score",
                    "{staff_side} pitchers' {} sum ({allowed}) != final {batting_side} {label} ({board})",
                    stat.name()));
            }
        }
    }
    issues
}
