// src/config/params.rs
use std::path::PathBuf;

use super::consts::DEFAULT_GAMES_DIR;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable pass/fail lines with itemized issues and warnings
    Text,
    /// One JSON verdict object per game
    Json,
}

#[derive(Clone, Debug)]
pub struct Params {
    pub paths: Vec<PathBuf>,         // game files or directories of game files
    pub output: OutputMode,
    pub quiet: bool,                 // only report games that fail
    pub show_warnings: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            output: OutputMode::Text,
            quiet: false,
            show_warnings: true,
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requested paths, or the default games directory when none were given.
    pub fn targets(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(DEFAULT_GAMES_DIR)]
        } else {
            self.paths.clone()
        }
    }
}
