// src/cli.rs
use std::{env, path::PathBuf};

use serde_json::json;

use crate::config::params::{OutputMode, Params};
use crate::progress::Progress;
use crate::runner::{self, GameReport, RunSummary};
use crate::store::Existing;

pub fn run() -> Result<RunSummary, Box<dyn std::error::Error>> {
    let params = parse_cli(env::args().skip(1))?;
    let mut console = ConsoleProgress::new(&params);
    let summary = runner::run(&params, Some(&mut console))?;

    eprintln!(
        "{} games: {} ok, {} with issues, {} missing/unreadable",
        summary.reports.len(),
        summary.passed(),
        summary.with_issues(),
        summary.unreadable()
    );
    Ok(summary)
}

pub fn parse_cli(args: impl Iterator<Item = String>) -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    for a in args {
        match a.as_str() {
            "--json" => params.output = OutputMode::Json,
            "-q" | "--quiet" => params.quiet = true,
            "--no-warnings" => params.show_warnings = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            flag if flag.starts_with('-') => return Err(format!("Unknown arg: {}", flag).into()),
            path => params.paths.push(PathBuf::from(path)),
        }
    }

    Ok(params)
}

/// Prints one block per game as it is reviewed.
struct ConsoleProgress {
    output: OutputMode,
    quiet: bool,
    show_warnings: bool,
}

impl ConsoleProgress {
    fn new(params: &Params) -> Self {
        Self {
            output: params.output.clone(),
            quiet: params.quiet,
            show_warnings: params.show_warnings,
        }
    }

    fn print_text(&self, report: &GameReport) {
        let path = report.path.display();
        match &report.status {
            Existing::Missing => println!("MISSING {path}"),
            Existing::Unreadable(e) => println!("ERROR   {path}: {e}"),
            Existing::Valid(v) | Existing::Stale(v) => {
                println!("{} {path}", if v.ok { "PASS   " } else { "FAIL   " });
                for msg in &v.issues {
                    println!("  issue:   {msg}");
                }
                if self.show_warnings {
                    for msg in &v.warnings {
                        println!("  warning: {msg}");
                    }
                }
            }
        }
    }

    fn print_json(&self, report: &GameReport) {
        let path = report.path.to_string_lossy();
        let line = match &report.status {
            Existing::Missing => json!({ "path": path, "error": "missing" }),
            Existing::Unreadable(e) => json!({ "path": path, "error": e }),
            Existing::Valid(v) | Existing::Stale(v) => {
                let warnings = if self.show_warnings { v.warnings.clone() } else { Vec::new() };
                json!({ "path": path, "ok": v.ok, "issues": v.issues, "warnings": warnings })
            }
        };
        println!("{line}");
    }
}

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, report: &GameReport) {
        if self.quiet && report.ok() {
            return;
        }
        match self.output {
            OutputMode::Text => self.print_text(report),
            OutputMode::Json => self.print_json(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> impl Iterator<Item = String> {
        v.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults_to_games_dir() {
        let p = parse_cli(args(&[])).unwrap();
        assert_eq!(p.output, OutputMode::Text);
        assert!(!p.quiet && p.show_warnings);
        assert_eq!(p.targets(), vec![PathBuf::from("games")]);
    }

    #[test]
    fn flags_and_paths() {
        let p = parse_cli(args(&["--json", "-q", "a.json", "--no-warnings", "dir"])).unwrap();
        assert_eq!(p.output, OutputMode::Json);
        assert!(p.quiet && !p.show_warnings);
        assert_eq!(p.targets(), vec![PathBuf::from("a.json"), PathBuf::from("dir")]);
    }

    #[test]
    fn unknown_flag_is_error() {
        assert!(parse_cli(args(&["--bogus"])).is_err());
    }
}
