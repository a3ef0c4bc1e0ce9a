pub mod bitboard;
pub mod board;
pub mod error;
pub mod movegen;
pub mod perft;
pub mod time_control;
pub mod types;

// Re-export core game logic (not agent-specific)
pub use bitboard::*;
pub use board::*;
pub use error::BoardError;
pub use movegen::*;
pub use perft::perft;
pub use time_control::*;
pub use types::*;

use std::fmt::Debug;

// =============================================================================
// Collaborator contracts shared by every agent
// =============================================================================

/// A two-player game state a search can walk.
///
/// States are values: `forecast_move` returns the successor and must leave the
/// receiver untouched. `legal_moves` must enumerate in a fixed, deterministic
/// order, since search tie-breaking follows that order.
pub trait GameState: Clone {
    type Move: Copy + Eq + Debug;

    /// The player whose turn it is.
    fn active_player(&self) -> Player;

    /// Moves available to the active player, in enumeration order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn forecast_move(&self, mv: Self::Move) -> Self;

    /// Terminal value for `player`: `+inf` for a win, `-inf` for a loss, 0 otherwise.
    fn utility(&self, player: Player) -> f64;
}

impl GameState for Board {
    type Move = Move;

    fn active_player(&self) -> Player {
        Board::active_player(self)
    }

    fn legal_moves(&self) -> Vec<Move> {
        self.get_legal_moves(Board::active_player(self))
    }

    fn forecast_move(&self, mv: Move) -> Self {
        Board::forecast_move(self, mv)
    }

    fn utility(&self, player: Player) -> f64 {
        Board::utility(self, player)
    }
}

/// Scores a state from `player`'s point of view.
///
/// Must return `+inf` when `player` has already won, `-inf` when they have
/// already lost, and a finite value otherwise. Searches do not check this.
pub trait Evaluator<S> {
    fn score(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S, Player) -> f64,
{
    fn score(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

/// A game-playing agent driven by the match runner.
pub trait Agent: Send {
    /// Choose a move for the active player before `time` runs out.
    ///
    /// # Arguments
    /// * `board` - The current game state
    /// * `legal_moves` - Moves available to the active player
    /// * `time` - Live read of the time left in this turn
    ///
    /// # Returns
    /// The chosen move, or None when `legal_moves` is empty
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        time: &dyn TimeSource,
    ) -> Option<Move>;

    /// Returns the agent's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
