//! Random Move Isolation Agent
//!
//! A simple agent that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing the match runner without paying for search
//! - Baseline comparisons (any real agent should easily beat this)

use isolation_core::{Agent, Board, Move, TimeSource};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// An agent that plays random legal moves.
///
/// Ignores the clock entirely; picking a move is instant.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            name: "Random".to_string(),
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible agent, for tests and seeded tournaments.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            name: "Random".to_string(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn get_move(
        &mut self,
        _board: &Board,
        legal_moves: &[Move],
        _time: &dyn TimeSource,
    ) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
