#![forbid(unsafe_code)]
//! Level runner configuration
//!
//! Resolves the ordered (optionally shuffled) list of levels for a session,
//! pairs each with a condition label, and keeps the two lists the same
//! length however either is edited.

pub mod config;
pub mod constants;
pub mod instance;
pub mod levels;
pub mod prefs;
pub mod reconcile;
pub mod runtime;
pub mod shuffle;
pub mod types;

pub use config::{ConfigState, RunSettings};
pub use runtime::Runtime;
pub use types::{ExperimentName, LevelRef, RunMode};
