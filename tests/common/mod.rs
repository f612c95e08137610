// tests/common/mod.rs
//
// A small, fully consistent game: one inning, two batters and one starting
// pitcher per side. Away 0, home 1 (solo home run).
//
#![allow(dead_code)]
use serde_json::{json, Value};

pub fn consistent_game() -> Value {
    json!({
        "lineup": {
            "game_info": { "hPCode": "HP1", "aPCode": "AP1" },
            "home_starter": [
                { "playerCode": "HP1", "playerName": "Home Ace", "position": "1", "positionName": "투수", "batorder": 0 },
                { "playerCode": "H1", "playerName": "Home One", "position": "8", "positionName": "중견수", "batorder": 1 },
                { "playerCode": "H2", "playerName": "Home Two", "position": "6", "positionName": "유격수", "batorder": 2 }
            ],
            "away_starter": [
                { "playerCode": "AP1", "playerName": "Away Ace", "position": 1, "positionName": "투수", "batorder": "0" },
                { "playerCode": "A1", "playerName": "Away One", "position": 4, "positionName": "2루수", "batorder": "1" },
                { "playerCode": "A2", "playerName": "Away Two", "position": 2, "positionName": "포수", "batorder": "2" }
            ],
            "home_bullpen": [{ "playerCode": "HR1", "playerName": "Home Relief" }],
            "away_bullpen": [{ "playerCode": "AR1", "playerName": "Away Relief" }],
            "home_candidate": [{ "playerCode": "HC1", "playerName": "Home Bench" }],
            "away_candidate": []
        },
        "relay": [[
            { "homeOrAway": "0", "textOptions": [
                { "type": 0, "text": "1회초 원정 공격", "currentGameState": { "pitcher": "HP1" } },
                { "type": 13, "text": "Away One : 좌익수 앞 안타",
                  "currentGameState": { "batter": "A1", "pitcher": "HP1", "awayHit": 1 } },
                { "type": 23, "text": "Away Two : 삼진 아웃",
                  "currentGameState": { "batter": "A2", "pitcher": "HP1", "awayHit": 1 } }
            ]},
            { "homeOrAway": "1", "textOptions": [
                { "type": 0, "text": "1회말 홈 공격", "currentGameState": { "pitcher": "AP1", "awayHit": 1 } },
                { "type": 13, "text": "Home One : 좌월 홈런",
                  "currentGameState": { "batter": "H1", "pitcher": "AP1", "homeScore": 1, "homeHit": 1, "awayHit": 1 } },
                { "type": 13, "text": "Home Two : 볼넷",
                  "currentGameState": {
                      "batter": "H2", "pitcher": "AP1",
                      "homeScore": "1", "awayScore": "0", "homeHit": "1", "awayHit": "1",
                      "homeBallFour": "1", "awayBallFour": "0", "homeError": "0", "awayError": "0"
                  } }
            ]}
        ]],
        "record": {
            "batter": {
                "home": [
                    { "playerCode": "H1", "name": "Home One", "batOrder": 1, "ab": 1, "hit": 1, "bb": 0, "hr": 1, "rbi": 1, "kk": 0, "run": 1, "sb": 0 },
                    { "playerCode": "H2", "name": "Home Two", "batOrder": 2, "ab": 0, "hit": 0, "bb": 1, "hr": 0, "rbi": 0, "kk": 0, "run": 0, "sb": 0 }
                ],
                "away": [
                    { "playerCode": "A1", "name": "Away One", "batOrder": "1", "ab": "1", "hit": "1", "bb": "0", "hr": "0", "rbi": "0", "kk": "0", "run": "0", "sb": "0" },
                    { "playerCode": "A2", "name": "Away Two", "batOrder": "2", "ab": "1", "hit": "0", "bb": "0", "hr": "0", "rbi": "0", "kk": "1", "run": "0", "sb": "0" }
                ],
                "homeTotal": { "ab": 1, "hit": 1, "rbi": 1, "run": 1, "sb": 0 },
                "awayTotal": { "ab": "2", "hit": "1", "rbi": "0", "run": "0", "sb": "0" }
            },
            "pitcher": {
                "home": [
                    { "pcode": "HP1", "name": "Home Ace", "inn": "1", "r": 0, "er": 0, "hit": 1, "bb": 0, "kk": 1, "hr": 0, "ab": 2, "bf": 2, "pa": 2, "bbhp": 0 }
                ],
                "away": [
                    { "pcode": "AP1", "name": "Away Ace", "inn": "0 ⅔", "r": 1, "er": 1, "hit": 1, "bb": 1, "kk": 0, "hr": 1, "ab": 1, "bf": 2, "pa": 2, "bbhp": 1 }
                ]
            }
        }
    })
}

/// Set a field on a batting-record row, by side and player code.
pub fn set_batter_field(game: &mut Value, side: &str, code: &str, field: &str, v: Value) {
    let rows = game["record"]["batter"][side].as_array_mut().expect("batter rows");
    let row = rows
        .iter_mut()
        .find(|r| r["playerCode"] == code)
        .expect("batter row");
    row[field] = v;
}
