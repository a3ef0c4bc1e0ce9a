//! Search Agent
//!
//! Adversarial search for Isolation under a per-move clock.
//!
//! This crate provides:
//! - Depth-limited minimax and alpha-beta search over any [`GameState`](isolation_core::GameState)
//! - Iterative deepening that only ever trusts fully completed depths
//! - Cooperative cancellation against a live [`TimeSource`]
//! - A family of board heuristics selectable by name

pub mod config;
pub mod deepening;
pub mod eval;
pub mod search;

#[cfg(test)]
mod test_tree;

use isolation_core::{Agent, Board, Move, TimeSource};
use tracing::info;

pub use config::{ConfigError, SearchConfig, SearchMethod, SearchMode};
pub use deepening::{get_move, SearchReport};
pub use eval::{custom_score, Heuristic};
pub use search::{SearchOutcome, SearchResult, Searcher, Timeout};

/// An agent that picks moves with the configured search and heuristic.
#[derive(Debug, Clone)]
pub struct SearchAgent {
    name: String,
    config: SearchConfig,
    last_report: Option<SearchReport<Move>>,
}

impl SearchAgent {
    /// Create an agent, rejecting invalid configurations up front.
    pub fn new(name: impl Into<String>, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            config,
            last_report: None,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent `get_move` call.
    pub fn last_report(&self) -> Option<&SearchReport<Move>> {
        self.last_report.as_ref()
    }
}

impl Agent for SearchAgent {
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        time: &dyn TimeSource,
    ) -> Option<Move> {
        let report = get_move(&self.config, &self.config.heuristic, board, legal_moves, time);
        info!(
            agent = %self.name,
            player = %board.active_player(),
            best_move = ?report.best_move,
            score = report.score,
            depth = report.depth,
            nodes = report.nodes,
            stopped = report.stopped,
            "move chosen"
        );
        self.last_report = Some(report);
        report.best_move
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.last_report = None;
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
