//! Depth-limited minimax and alpha-beta search with cooperative cancellation.
//!
//! Every recursive entry samples the time source first. Once the time left
//! drops below the threshold the call returns `Err(Timeout)`, and each frame
//! above it propagates that with `?` until it reaches the deepening loop.

use std::ops::ControlFlow;
use std::time::Duration;

use isolation_core::{Evaluator, GameState, Player, TimeSource};
use thiserror::Error;

use crate::config::SearchMethod;

/// Raised when the time left drops below the safety threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search cancelled: time left fell below the safety threshold")]
pub struct Timeout;

/// Best score found at one layer together with the move that achieved it.
///
/// `best_move` is None at leaves and when no move beat the initial bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<M> {
    pub score: f64,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    fn leaf(score: f64) -> Self {
        Self {
            score,
            best_move: None,
        }
    }

    fn worst(maximizing: bool) -> Self {
        Self::leaf(if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    /// Strict improvement only: ties keep the earlier move.
    #[inline]
    fn improved_by(&self, score: f64, maximizing: bool) -> bool {
        if maximizing {
            score > self.score
        } else {
            score < self.score
        }
    }
}

pub type SearchOutcome<M> = Result<SearchResult<M>, Timeout>;

/// Runs bounded-depth searches from the point of view of one player.
///
/// Holds no game state between calls; only the visit counters survive a
/// search so callers can inspect them.
pub struct Searcher<'a, E: ?Sized, T: ?Sized> {
    evaluator: &'a E,
    time: &'a T,
    threshold: Duration,
    player: Player,
    nodes: u64,
    reached_horizon: bool,
}

impl<'a, E: ?Sized, T: TimeSource + ?Sized> Searcher<'a, E, T> {
    /// # Arguments
    /// * `evaluator` - Scores states where the depth limit is reached
    /// * `time` - Live read of the time left in this turn
    /// * `threshold` - Safety margin; searching stops once less than this is left
    /// * `player` - Perspective the scores are computed for (the maximizer)
    pub fn new(evaluator: &'a E, time: &'a T, threshold: Duration, player: Player) -> Self {
        Self {
            evaluator,
            time,
            threshold,
            player,
            nodes: 0,
            reached_horizon: false,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    /// States entered since the searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// True if the last search evaluated at least one depth-limited leaf.
    /// When false, the whole game tree below the root was searched.
    pub fn reached_horizon(&self) -> bool {
        self.reached_horizon
    }

    /// Run one search with `method` from a maximizing root.
    pub fn search<S>(&mut self, method: SearchMethod, state: &S, depth: u32) -> SearchOutcome<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.reached_horizon = false;
        match method {
            SearchMethod::Minimax => self.minimax(state, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    fn check_time(&mut self) -> Result<(), Timeout> {
        self.nodes += 1;
        if self.time.time_left() < self.threshold {
            return Err(Timeout);
        }
        Ok(())
    }

    /// Depth-limit or terminal value for `state`, or its moves if it must be expanded.
    fn expand<S>(&mut self, state: &S, depth: u32) -> ControlFlow<SearchResult<S::Move>, Vec<S::Move>>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        if depth == 0 {
            self.reached_horizon = true;
            return ControlFlow::Break(SearchResult::leaf(self.evaluator.score(state, self.player)));
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return ControlFlow::Break(SearchResult::leaf(state.utility(self.player)));
        }
        ControlFlow::Continue(moves)
    }

    /// Plain depth-limited minimax.
    pub fn minimax<S>(&mut self, state: &S, depth: u32, maximizing: bool) -> SearchOutcome<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.check_time()?;

        let moves = match self.expand(state, depth) {
            ControlFlow::Continue(moves) => moves,
            ControlFlow::Break(leaf) => return Ok(leaf),
        };

        let mut best = SearchResult::worst(maximizing);
        for mv in moves {
            let child = self.minimax(&state.forecast_move(mv), depth - 1, !maximizing)?;
            if best.improved_by(child.score, maximizing) {
                best = SearchResult {
                    score: child.score,
                    best_move: Some(mv),
                };
            }
        }
        Ok(best)
    }

    /// Minimax with alpha-beta pruning. Start the root with `(-inf, +inf)`.
    ///
    /// Returns the same score as [`Searcher::minimax`] at the same depth; only
    /// the number of visited states differs.
    pub fn alphabeta<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchOutcome<S::Move>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.check_time()?;

        let moves = match self.expand(state, depth) {
            ControlFlow::Continue(moves) => moves,
            ControlFlow::Break(leaf) => return Ok(leaf),
        };

        let mut best = SearchResult::worst(maximizing);
        for mv in moves {
            let child = self.alphabeta(&state.forecast_move(mv), depth - 1, alpha, beta, !maximizing)?;
            if best.improved_by(child.score, maximizing) {
                best = SearchResult {
                    score: child.score,
                    best_move: Some(mv),
                };
            }

            if maximizing {
                if best.score >= beta {
                    return Ok(best); // Beta cutoff
                }
                alpha = alpha.max(best.score);
            } else {
                if best.score <= alpha {
                    return Ok(best); // Alpha cutoff
                }
                beta = beta.min(best.score);
            }
        }
        Ok(best)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
