//! Heuristic evaluation of Isolation boards.
//!
//! Every heuristic is wrapped in the same terminal check, so a decided game
//! always scores `+inf` for the winner and `-inf` for the loser.

use std::fmt;
use std::str::FromStr;

use isolation_core::{Board, Evaluator, Player};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Most knight jumps available from a single cell.
const MAX_KNIGHT_MOVES: f64 = 8.0;

/// The board heuristics an agent can be configured with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Heuristic {
    /// Every open position scores 0
    Null,
    /// Own mobility
    Open,
    /// Own mobility minus opponent mobility
    Improved,
    /// Mobility difference summed over the side to move's replies
    Lookahead,
    /// Minus the opponent's mobility after each reply; `-inf` if we would be stuck
    Chase,
    /// Blend of `Lookahead` and `Chase`, shifting to `Chase` as the board fills up
    #[default]
    Custom,
    /// Harmonic mean of own mobility and blocked opponent jumps
    Harmonic,
    /// Stay close to the opponent
    Distance,
}

impl Heuristic {
    pub const ALL: [Heuristic; 8] = [
        Heuristic::Null,
        Heuristic::Open,
        Heuristic::Improved,
        Heuristic::Lookahead,
        Heuristic::Chase,
        Heuristic::Custom,
        Heuristic::Harmonic,
        Heuristic::Distance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Heuristic::Null => "null",
            Heuristic::Open => "open",
            Heuristic::Improved => "improved",
            Heuristic::Lookahead => "lookahead",
            Heuristic::Chase => "chase",
            Heuristic::Custom => "custom",
            Heuristic::Harmonic => "harmonic",
            Heuristic::Distance => "distance",
        }
    }

    /// Score `board` for `player`, without the terminal check.
    fn open_score(self, board: &Board, player: Player) -> f64 {
        match self {
            Heuristic::Null => 0.0,
            Heuristic::Open => board.mobility(player) as f64,
            Heuristic::Improved => {
                board.mobility(player) as f64 - board.mobility(player.opponent()) as f64
            }
            Heuristic::Lookahead => lookahead(board, player),
            Heuristic::Chase => chase(board, player),
            Heuristic::Custom => blended(board, player),
            Heuristic::Harmonic => harmonic(board, player),
            Heuristic::Distance => -distance(board, player),
        }
    }
}

impl Evaluator<Board> for Heuristic {
    fn score(&self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return f64::NEG_INFINITY;
        }
        if board.is_winner(player) {
            return f64::INFINITY;
        }
        self.open_score(board, player)
    }
}

/// The default evaluation: terminal check, then the blended heuristic.
pub fn custom_score(board: &Board, player: Player) -> f64 {
    Heuristic::Custom.score(board, player)
}

impl FromStr for Heuristic {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Heuristic::ALL
            .into_iter()
            .find(|h| h.as_str() == lower)
            .ok_or_else(|| ConfigError::UnknownHeuristic(s.to_string()))
    }
}

impl TryFrom<String> for Heuristic {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Heuristic> for String {
    fn from(h: Heuristic) -> Self {
        h.as_str().to_string()
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sum of (own - opponent) mobility after each move of the side to move.
fn lookahead(board: &Board, player: Player) -> f64 {
    let opponent = player.opponent();
    board
        .get_legal_moves(board.active_player())
        .into_iter()
        .map(|mv| {
            let next = board.forecast_move(mv);
            next.mobility(player) as f64 - next.mobility(opponent) as f64
        })
        .sum()
}

fn chase(board: &Board, player: Player) -> f64 {
    let opponent = player.opponent();
    let mut score = 0.0;
    let mut own_total = 0usize;
    for mv in board.get_legal_moves(board.active_player()) {
        let next = board.forecast_move(mv);
        score -= next.mobility(opponent) as f64;
        own_total += next.mobility(player);
    }
    if own_total > 0 {
        score
    } else {
        f64::NEG_INFINITY
    }
}

fn blended(board: &Board, player: Player) -> f64 {
    let chased = chase(board, player);
    if chased == f64::NEG_INFINITY {
        return chased;
    }
    let coefficient = board.get_blank_spaces().len() as f64 / board.cell_count() as f64;
    coefficient * lookahead(board, player) + (1.0 - coefficient) * chased
}

fn harmonic(board: &Board, player: Player) -> f64 {
    let opponent = player.opponent();
    let mut own = 0.0;
    let mut blocked = 0.0;
    for mv in board.get_legal_moves(board.active_player()) {
        let next = board.forecast_move(mv);
        own += next.mobility(player) as f64 / MAX_KNIGHT_MOVES;
        blocked += (MAX_KNIGHT_MOVES - next.mobility(opponent) as f64).max(0.0) / MAX_KNIGHT_MOVES;
    }
    if own + blocked == 0.0 {
        return 0.0;
    }
    2.0 * own * blocked / (own + blocked)
}

/// Euclidean distance between the players, 0 while either is unplaced.
fn distance(board: &Board, player: Player) -> f64 {
    match (
        board.get_player_location(player),
        board.get_player_location(player.opponent()),
    ) {
        (Some(a), Some(b)) => {
            let dr = a.row as f64 - b.row as f64;
            let dc = a.col as f64 - b.col as f64;
            (dr * dr + dc * dc).sqrt()
        }
        _ => 0.0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
