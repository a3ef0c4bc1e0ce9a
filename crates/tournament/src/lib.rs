//! Tournament Runner for Isolation agents
//!
//! This crate provides infrastructure for:
//! - Running matches between different agents under a per-move clock
//! - Tracking Elo ratings across agent configurations
//! - Generating reports to compare heuristics and search settings
//!
//! # Usage
//!
//! ```bash
//! # Run a match between two agents
//! cargo run -p tournament -- match id_custom ab_improved --games 20 --time 150
//!
//! # Run a gauntlet (one agent vs the reference field)
//! cargo run -p tournament -- gauntlet id_custom --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;

use thiserror::Error;

/// Failure to read or write a persisted report.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
