// src/specs/play_text.rs
// Plate-appearance outcome from one line of relay text.
// Phrase lists are matched as plain substrings of the Korean commentary.

use super::relay::RelayLine;

/// "몸에 맞는 볼" (hit by pitch)
pub const HBP_PHRASES: &[&str] = &["몸에 맞는 볼"];

/// Walk, intentional walk (two spellings)
pub const WALK_PHRASES: &[&str] = &["볼넷", "고의4구", "고의 4구"];

/// Generic hit, single, double, triple, home run
pub const HIT_PHRASES: &[&str] = &["안타", "1루타", "2루타", "3루타", "홈런"];

/// Sacrifice fly, sacrifice bunt
pub const SACRIFICE_PHRASES: &[&str] = &["희생플라이", "희생번트"];

/// Strikeout, dropped third strike (two spellings)
pub const STRIKEOUT_PHRASES: &[&str] = &["삼진 아웃", "스트라이크 낫 아웃", "스트라이크 낫아웃"];

fn mentions(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

/// Which event categories a relay line mentions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayText {
    pub walk: bool,
    pub hbp: bool,
    pub hit: bool,
    pub sacrifice: bool,
    pub strikeout: bool,
}

impl PlayText {
    pub fn classify(text: &str) -> Self {
        let hbp = mentions(text, HBP_PHRASES);
        Self {
            // HBP wording can contain walk wording; HBP wins
            walk: mentions(text, WALK_PHRASES) && !hbp,
            hbp,
            hit: mentions(text, HIT_PHRASES),
            sacrifice: mentions(text, SACRIFICE_PHRASES),
            strikeout: mentions(text, STRIKEOUT_PHRASES),
        }
    }

    /// Counting stats for the plate appearance. Always exactly one PA.
    pub fn tally(self) -> RelayLine {
        let mut line = RelayLine { pa: 1, ..RelayLine::default() };

        if self.walk {
            line.bb = 1;
        } else if self.hbp {
            line.hbp = 1;
        } else if self.hit {
            line.ab = 1;
            line.hit = 1;
        } else if !self.sacrifice {
            // outs, reached on error, fielder's choice…
            line.ab = 1;
        }

        if self.strikeout {
            line.so = 1;
        }
        line
    }
}

/// Classify a plate-appearance-resolving line straight to its counts.
pub fn classify_plate_appearance(text: &str) -> RelayLine {
    PlayText::classify(text).tally()
}
