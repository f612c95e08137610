// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod check;
pub mod config;
pub mod core;
pub mod document;
pub mod specs;
pub mod validate;

pub mod cli;
pub mod progress;
pub mod runner;
pub mod store;

pub use document::GameDocument;
pub use validate::{validate_game_full, Verdict};
