// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::params::Params,
    progress::Progress,
    store::{self, Existing},
};

/// Outcome for one game file.
#[derive(Clone, Debug)]
pub struct GameReport {
    pub path: PathBuf,
    pub status: Existing,
}

impl GameReport {
    pub fn ok(&self) -> bool {
        !self.status.needs_collect()
    }
}

/// Summary of a batch review.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<GameReport>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.ok()).count()
    }

    pub fn with_issues(&self) -> usize {
        self.reports.iter().filter(|r| matches!(r.status, Existing::Stale(_))).count()
    }

    /// Missing or unreadable files.
    pub fn unreadable(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.status, Existing::Missing | Existing::Unreadable(_)))
            .count()
    }

    pub fn all_ok(&self) -> bool {
        self.reports.iter().all(GameReport::ok)
    }
}

/// Review every requested game file.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let files = expand_targets(&params.targets())?;

    if files.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No game files to check.");
            p.finish();
        }
        return Ok(RunSummary::default());
    }

    logf!("Check: Begin files={}", files.len());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(files.len());
    }

    let mut summary = RunSummary { reports: Vec::with_capacity(files.len()) };
    for path in files {
        let report = GameReport { status: store::review_existing(&path), path };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&report);
        }
        summary.reports.push(report);
    }

    logf!(
        "Check: Done passed={} issues={} unreadable={}",
        summary.passed(),
        summary.with_issues(),
        summary.unreadable()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(summary)
}

/// Directories expand to their game files; anything else is taken as a file.
fn expand_targets(targets: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let mut out = Vec::new();
    for t in targets {
        if t.is_dir() {
            let files = store::list_game_files(t).inspect_err(|e| {
                loge!("Check: cannot list {}: {e}", t.display());
            })?;
            out.extend(files);
        } else {
            out.push(t.clone());
        }
    }
    Ok(out)
}
