// src/store.rs
// Collected game artifacts on disk: one `<game_id>.json` per game.
//
// The collector's skip-if-valid policy lives here: an existing artifact that
// validates clean is kept; anything else (absent, unreadable, or with issues)
// must be collected again and overwritten.

use std::{error::Error, fs, path::{Path, PathBuf}};

use crate::config::consts::GAME_FILE_EXT;
use crate::document::GameDocument;
use crate::validate::{validate_game_full, Verdict};

/// `<dir>/<game_id>.json`
pub fn game_path(dir: &Path, game_id: &str) -> PathBuf {
    dir.join(format!("{game_id}.{GAME_FILE_EXT}"))
}

/// Read and deserialize one game file.
pub fn load_game(path: &Path) -> Result<GameDocument, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let doc = GameDocument::from_json_str(&text)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(doc)
}

/// All game files directly inside `dir`, sorted by name.
pub fn list_game_files(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()).into());
    }
    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some(GAME_FILE_EXT) { continue; }
        out.push(path);
    }
    out.sort();
    Ok(out)
}

/// State of a previously collected artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Existing {
    /// Nothing on disk yet
    Missing,
    /// Validates clean (warnings allowed)
    Valid(Verdict),
    /// Loads, but has issues
    Stale(Verdict),
    /// Could not be read or parsed
    Unreadable(String),
}

impl Existing {
    /// Only a clean artifact may be skipped.
    pub fn needs_collect(&self) -> bool {
        !matches!(self, Existing::Valid(_))
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Existing::Valid(v) | Existing::Stale(v) => Some(v),
            _ => None,
        }
    }
}

/// Load and validate the artifact at `path`, if any.
pub fn review_existing(path: &Path) -> Existing {
    if !path.exists() {
        logd!("Store: no artifact at {}", path.display());
        return Existing::Missing;
    }

    let doc = match load_game(path) {
        Ok(d) => d,
        Err(e) => {
            logw!("Store: unreadable {} ({e}), recollect", path.display());
            return Existing::Unreadable(e.to_string());
        }
    };

    let verdict = validate_game_full(&doc);
    if verdict.ok {
        logf!("Store: valid {} (skip), warnings={}", path.display(), verdict.warnings.len());
        Existing::Valid(verdict)
    } else {
        logw!(
            "Store: stale {} issues={} warnings={}, recollect: {}",
            path.display(),
            verdict.issues.len(),
            verdict.warnings.len(),
            verdict.issues.join("; ")
        );
        Existing::Stale(verdict)
    }
}
