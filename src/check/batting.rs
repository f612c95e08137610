// src/check/batting.rs
use std::collections::BTreeSet;

use crate::core::de::code_list;
use crate::core::{PlayerCode, Side};
use crate::specs::{BatStat, BattingProjection, LineupProjection, RelayBatting, Scoreboard};

use super::Findings;

/// Batting record vs lineup tab.
/// - record batter not listed anywhere in the lineup → issue
/// - starting batter absent from the record → warning
/// - bat order differs (both non-zero) → warning
pub fn check_lineup_vs_record_batter(lineup: &LineupProjection, record: &BattingProjection) -> Findings {
    let mut out = Findings::default();

    for side in Side::ALL {
        let team = &lineup[side];
        let players = &record[side].players;
        let known = team.known_players();

        let extra: Vec<&PlayerCode> = players.keys().filter(|c| !known.contains(c)).collect();
        if !extra.is_empty() {
            out.issue(finding!(side,
                "batting record players not in lineup (starters+candidates+pitchers): {}",
                code_list(extra)));
        }

        let missing: Vec<&PlayerCode> = team.starters.keys().filter(|c| !players.contains_key(*c)).collect();
        if !missing.is_empty() {
            out.warn(finding!(side, "starting batters not in batting record: {}", code_list(missing)));
        }

        for (code, starter) in &team.starters {
            let Some(rec) = players.get(code) else { continue };
            let (s_order, r_order) = (starter.bat_order, rec.bat_order);
            if s_order != 0 && r_order != 0 && s_order != r_order {
                out.warn(finding!(side,
                    "bat order mismatch {code} {}: lineup={s_order}, record={r_order}",
                    starter.name));
            }
        }
    }
    out
}

/// Relay-derived batting vs the record. Runs and steals are not compared.
pub fn check_relay_vs_record_batter(relay: &RelayBatting, record: &BattingProjection) -> Findings {
    let mut out = Findings::default();

    for side in Side::ALL {
        let rel = &relay[side];
        let rec = &record[side].players;

        let only_relay: Vec<&PlayerCode> = rel.keys().filter(|c| !rec.contains_key(*c)).collect();
        if !only_relay.is_empty() {
            out.issue(finding!(side, "batters only in relay, not in batting record: {}", code_list(only_relay)));
        }

        // A real batting line must show up in the play-by-play
        let only_record: Vec<&PlayerCode> = rec
            .iter()
            .filter(|(c, line)| !rel.contains_key(*c) && line.has_plate_record())
            .map(|(c, _)| c)
            .collect();
        if !only_record.is_empty() {
            out.issue(finding!(side,
                "batters with a plate record but missing from relay: {}",
                code_list(only_record)));
        }

        for (code, r) in rel {
            let Some(line) = rec.get(code) else { continue };
            let pairs = [
                (BatStat::Ab, r.ab),
                (BatStat::Hit, r.hit),
                (BatStat::Bb, r.bb),
                (BatStat::So, r.so),
            ];
            for (stat, v_relay) in pairs {
                let v_record = line.get(stat);
                if v_relay != v_record {
                    out.issue(finding!(side,
                        "batter {code} {} {} mismatch: relay={v_relay}, record={v_record}",
                        line.name, stat.name()));
                }
            }
        }
    }
    out
}

/// Summed player lines vs each team-total row.
pub fn check_record_batter_team_totals(record: &BattingProjection) -> Vec<String> {
    const SUMMED: [BatStat; 5] = [BatStat::Ab, BatStat::Hit, BatStat::Rbi, BatStat::Run, BatStat::Sb];
    let mut issues = Vec::new();

    for side in Side::ALL {
        let team = &record[side];
        for stat in SUMMED {
            let (sum, total) = (team.sum(stat), team.total.get(stat));
            if sum != total {
                issues.push(finding!(side,
                    "team total {} mismatch: players={sum}, team total={total}",
                    stat.name()));
            }
        }
    }
    issues
}

/// Team-total runs and hits vs the final relay scoreboard.
pub fn check_batters_vs_scoreboard(record: &BattingProjection, scoreboard: Option<&Scoreboard>) -> Vec<String> {
    let Some(sb) = scoreboard else { return Vec::new() };
    let mut issues = Vec::new();

    let pairs: [(BatStat, fn(&Scoreboard, Side) -> i64, &str); 2] = [
        (BatStat::Run, Scoreboard::score, "score"),
        (BatStat::Hit, Scoreboard::hits, "hits"),
    ];
    for (stat, read, label) in pairs {
        for side in Side::ALL {
            let total = record[side].total.get(stat);
            let board = read(sb, side);
            if total != board {
                issues.push(finding!("score",
                    "{side} team total {} ({total}) != final {side} {label} ({board})",
                    stat.name()));
            }
        }
    }
    issues
}

/// Codes present in `a` but not `b`.
pub(crate) fn missing_from<'a>(a: &BTreeSet<&'a PlayerCode>, b: &BTreeSet<&PlayerCode>) -> Vec<&'a PlayerCode> {
    a.iter().filter(|c| !b.contains(*c)).copied().collect()
}
