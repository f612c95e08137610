// src/core/de.rs
// Lenient serde helpers for the collected game JSON.
// The site mixes strings and numbers for the same field and sends `null`
// for empty lists, so the boundary absorbs both.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::num::value_text;

/// `null` or a value of the wrong shape → `T::default()`.
/// Pair with `#[serde(default)]` for missing keys.
pub fn lenient<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let v = Value::deserialize(d)?;
    Ok(T::deserialize(v).unwrap_or_default())
}

/// List field read element by element: a malformed element becomes
/// `T::default()`, anything but an array becomes an empty list.
pub fn lenient_seq<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    match Value::deserialize(d)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|v| T::deserialize(v).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// Opaque player identifier; the join key between lineup, record and relay.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerCode(String);

impl PlayerCode {
    /// Empty text, zero and non-scalars are not codes.
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Bool(false) => None,
            _ => value_text(v).filter(|s| !s.is_empty()).map(PlayerCode),
        }
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<&str> for PlayerCode {
    fn from(s: &str) -> Self { PlayerCode(s.to_string()) }
}

impl fmt::Display for PlayerCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// String-or-number code field → `Option<PlayerCode>`.
pub fn player_code<'de, D>(d: D) -> Result<Option<PlayerCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(d)?;
    Ok(PlayerCode::from_value(&v))
}

/// Sorted, comma-separated list of codes for messages: "[a, b]".
pub fn code_list<'a>(codes: impl IntoIterator<Item = &'a PlayerCode>) -> String {
    let mut v: Vec<&str> = codes.into_iter().map(PlayerCode::as_str).collect();
    v.sort_unstable();
    format!("[{}]", v.join(", "))
}
