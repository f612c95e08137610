// benches/validate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use kbo_scrape::{validate_game_full, GameDocument};

/// Nine innings of synthetic relay: three plate appearances per half.
fn synthetic_game() -> Value {
    let texts = ["좌익수 앞 안타", "삼진 아웃", "유격수 땅볼 아웃"];
    let mut innings = Vec::new();
    for _ in 0..9 {
        let mut halves = Vec::new();
        for (flag, prefix, pitcher) in [("0", "A", "HP"), ("1", "H", "AP")] {
            let events: Vec<Value> = texts
                .iter()
                .enumerate()
                .map(|(i, t)| json!({
                    "type": 13,
                    "text": t,
                    "currentGameState": { "batter": format!("{prefix}{i}"), "pitcher": pitcher }
                }))
                .collect();
            halves.push(json!({ "homeOrAway": flag, "textOptions": events }));
        }
        innings.push(Value::Array(halves));
    }

    let batters = |prefix: &str| -> Vec<Value> {
        (0..3)
            .map(|i| json!({ "playerCode": format!("{prefix}{i}"), "batOrder": i + 1, "ab": 9, "hit": if i == 0 { 9 } else { 0 }, "kk": if i == 1 { 9 } else { 0 } }))
            .collect()
    };

    json!({
        "lineup": {
            "home_starter": [{ "playerCode": "HP", "position": "1" }],
            "away_starter": [{ "playerCode": "AP", "position": "1" }]
        },
        "relay": innings,
        "record": {
            "batter": { "home": batters("H"), "away": batters("A") },
            "pitcher": { "home": [{ "pcode": "HP", "inn": "9" }], "away": [{ "pcode": "AP", "inn": "9" }] }
        }
    })
}

fn bench_validate(c: &mut Criterion) {
    let raw = synthetic_game().to_string();
    let doc = GameDocument::from_json_str(&raw).expect("synthetic game parses");

    c.bench_function("parse_game", |b| {
        b.iter(|| {
            let d = GameDocument::from_json_str(black_box(&raw)).unwrap();
            black_box(d.relay_event_count())
        })
    });

    c.bench_function("validate_game_full", |b| {
        b.iter(|| {
            let v = validate_game_full(black_box(&doc));
            black_box(v.issues.len())
        })
    });
}

criterion_group!(benches, bench_validate);
criterion_main!(benches);
