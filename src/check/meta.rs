// src/check/meta.rs
use crate::core::Side;
use crate::document::GameInfo;
use crate::specs::LineupProjection;

use super::Findings;

/// Announced starting pitcher (`hPCode` / `aPCode`) vs the lineup's pitcher slot.
/// Skipped for a side when either value is missing.
pub fn check_game_info_vs_lineup(info: &GameInfo, lineup: &LineupProjection) -> Findings {
    let mut out = Findings::default();

    for side in Side::ALL {
        let key = match side {
            Side::Home => "hPCode",
            Side::Away => "aPCode",
        };
        if let (Some(announced), Some(starter)) =
            (info.starting_pitcher(side), lineup[side].starting_pitcher.as_ref())
        {
            if announced != starter {
                out.issue(finding!("meta",
                    "game_info.{key} ({announced}) != {side} starting pitcher ({starter})"));
            }
        }
    }
    out
}
