// src/config/consts.rs

// Local store
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Collected games
pub const DEFAULT_GAMES_DIR: &str = "games";
pub const GAME_FILE_EXT: &str = "json";

// Relay: `type` values of text events that resolve a plate appearance
pub const PA_EVENT_TYPES: [i64; 2] = [13, 23];

// Lineup: `position` marker of the starting pitcher's slot
pub const PITCHER_POSITION: &str = "1";

// Half-inning `homeOrAway` flag meaning "away team is batting"
pub const AWAY_BATTING_FLAG: &str = "0";

// Fallback for unreadable counting fields
pub const DEFAULT_INT: i64 = 0;
