// src/core/num.rs
// Tolerant numeric reads and the innings-pitched notation.
//
// Innings pitched are written with a ternary fraction: "6.1" is six innings
// and one out, not 6.1 innings. Canonical form is an out count:
//   outs = whole * 3 + partial_outs

use serde_json::Value;

const ONE_THIRD: char = '⅓';
const TWO_THIRDS: char = '⅔';

/// Coerce a JSON value to an integer.
/// Integer parse first, then float parse truncated toward zero, else `default`.
pub fn to_int(v: &Value, default: i64) -> i64 {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(float_to_int))
            .unwrap_or(default),
        Value::String(s) => str_to_int(s, default),
        Value::Bool(b) => i64::from(*b),
        _ => default,
    }
}

/// Same policy as `to_int` for plain text.
pub fn str_to_int(s: &str, default: i64) -> i64 {
    let t = s.trim();
    if let Ok(v) = t.parse::<i64>() {
        return v;
    }
    t.parse::<f64>().ok().and_then(float_to_int).unwrap_or(default)
}

fn float_to_int(f: f64) -> Option<i64> {
    // NaN/inf and out-of-range values have no integer form
    if f.is_finite() && f.abs() < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// Text form of a scalar JSON value, the way it reads in the record table.
/// `null` and containers have no text form.
pub fn value_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// "6" → 18, "6.2" → 20, "0 ⅓" → 1, "1 ⅔" → 5.
/// Empty, placeholder ("-") or unparseable input → 0.
pub fn outs_from_ip(ip: &str) -> i64 {
    let s = ip.trim();
    if s.is_empty() || s == "-" {
        return 0;
    }

    if s.contains(ONE_THIRD) || s.contains(TWO_THIRDS) {
        let whole = s
            .split_whitespace()
            .next()
            .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_digit()))
            .and_then(|t| t.parse::<i64>().ok())
            .unwrap_or(0);
        let partial = if s.contains(ONE_THIRD) { 1 } else { 2 };
        return to_outs(whole, partial);
    }

    let parsed = match s.split_once('.') {
        Some((whole, frac)) => parse_or_zero(whole).zip(parse_or_zero(frac)),
        None => s.parse::<i64>().ok().map(|whole| (whole, 0)),
    };

    match parsed {
        Some((whole, outs)) => to_outs(whole, outs),
        None => 0,
    }
}

// Out of i64 range counts as unparseable.
fn to_outs(whole: i64, outs: i64) -> i64 {
    whole.checked_mul(3).and_then(|w| w.checked_add(outs)).unwrap_or(0)
}

// Empty side of the decimal point counts as zero; anything else must parse.
fn parse_or_zero(part: &str) -> Option<i64> {
    if part.is_empty() { Some(0) } else { part.parse().ok() }
}

/// Raw `inn` cell (string or number) → outs.
pub fn outs_from_ip_value(v: &Value) -> i64 {
    value_text(v).map(|s| outs_from_ip(&s)).unwrap_or(0)
}

/// 18 → "6", 19 → "6.1", 20 → "6.2".
pub fn ip_from_outs(outs: i64) -> String {
    let whole = outs.div_euclid(3);
    match outs.rem_euclid(3) {
        0 => format!("{whole}"),
        1 => format!("{whole}.1"),
        _ => format!("{whole}.2"),
    }
}
