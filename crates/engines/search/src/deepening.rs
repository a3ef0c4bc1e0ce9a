//! Top-level move selection: fixed-depth search or iterative deepening.

use isolation_core::{Evaluator, GameState, TimeSource};
use tracing::debug;

use crate::config::{SearchConfig, SearchMode};
use crate::search::{Searcher, Timeout};

/// What a call to [`get_move`] decided and how far it got.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport<M> {
    /// The move to play (None only when there were no legal moves)
    pub best_move: Option<M>,
    /// Score of the last completed depth (0 if none completed)
    pub score: f64,
    /// Last depth that completed; 0 if cancellation hit before depth 1 finished
    pub depth: u32,
    /// States entered across all depths, including the abandoned one
    pub nodes: u64,
    /// True if a search was cancelled by the clock
    pub stopped: bool,
}

/// Choose a move for the active player of `state`.
///
/// Returns straight away with no move when `legal_moves` is empty. Otherwise
/// the returned move always comes from a depth that ran to completion; a
/// cancelled depth is discarded whole. If cancellation hits before any depth
/// completes, or a completed depth finds every move lost, the first legal move
/// is returned.
///
/// # Arguments
/// * `config` - Mode, method, depth and timeout margin
/// * `evaluator` - Scores depth-limited leaves
/// * `state` - Position to search; its active player is the maximizer
/// * `legal_moves` - Moves available to the active player
/// * `time` - Live read of the time left in this turn
pub fn get_move<S, E, T>(
    config: &SearchConfig,
    evaluator: &E,
    state: &S,
    legal_moves: &[S::Move],
    time: &T,
) -> SearchReport<S::Move>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeSource + ?Sized,
{
    let placeholder = match legal_moves.first() {
        Some(&mv) => mv,
        None => {
            return SearchReport {
                best_move: None,
                score: 0.0,
                depth: 0,
                nodes: 0,
                stopped: false,
            }
        }
    };

    let mut report = SearchReport {
        best_move: Some(placeholder),
        score: 0.0,
        depth: 0,
        nodes: 0,
        stopped: false,
    };

    let mut searcher = Searcher::new(
        evaluator,
        time,
        config.timer_threshold,
        state.active_player(),
    );

    let depths: Box<dyn Iterator<Item = u32>> = match config.mode {
        SearchMode::Fixed => Box::new(std::iter::once(config.search_depth)),
        SearchMode::Iterative => match config.max_depth {
            Some(max) => Box::new(1..=max),
            None => Box::new(1..),
        },
    };

    for depth in depths {
        match searcher.search(config.method, state, depth) {
            Ok(result) => {
                report.best_move = Some(result.best_move.unwrap_or(placeholder));
                report.score = result.score;
                report.depth = depth;
                debug!(
                    depth,
                    score = result.score,
                    best_move = ?report.best_move,
                    nodes = searcher.nodes(),
                    "depth completed"
                );
                if !searcher.reached_horizon() {
                    debug!(depth, "game tree exhausted");
                    break;
                }
            }
            Err(Timeout) => {
                debug!(depth, nodes = searcher.nodes(), "search cancelled");
                report.stopped = true;
                break;
            }
        }
    }

    report.nodes = searcher.nodes();
    report
}

#[cfg(test)]
#[path = "deepening_tests.rs"]
mod deepening_tests;
