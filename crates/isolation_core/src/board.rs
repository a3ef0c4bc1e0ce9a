use std::fmt;

use crate::bitboard::CellSet;
use crate::error::BoardError;
use crate::movegen::{legal_moves, mobility};
use crate::types::*;

pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;

/// An Isolation game state.
///
/// Every move blocks the destination cell for the rest of the game. A player
/// who cannot move on their turn loses. Boards are value objects: search code
/// only ever calls [`Board::forecast_move`], which leaves the receiver untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: CellSet,
    locations: [Option<Cell>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Create an empty board with player one to move.
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        let cells = width as u32 * height as u32;
        if cells == 0 || cells > 64 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            blocked: CellSet::EMPTY,
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        })
    }

    /// Parse a board from a compact layout string used by tests and tooling.
    ///
    /// Rows are separated by `/`; `.` is blank, `#` is blocked, `1` and `2`
    /// mark the players (their cells count as blocked). The trailing field
    /// names the player to move, e.g. `"1..#/..../.2../.... 2"`.
    pub fn from_layout(layout: &str) -> Result<Self, BoardError> {
        let parts: Vec<&str> = layout.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(BoardError::InvalidLayout(
                "expected `<rows> <player to move>`".to_string(),
            ));
        }

        let rows: Vec<&str> = parts[0].split('/').collect();
        let width = rows[0].chars().count();
        if rows.iter().any(|r| r.chars().count() != width) {
            return Err(BoardError::InvalidLayout("ragged rows".to_string()));
        }
        if width > u8::MAX as usize || rows.len() > u8::MAX as usize {
            return Err(BoardError::InvalidLayout("board too large".to_string()));
        }

        let mut board = Board::new(width as u8, rows.len() as u8)?;
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = Cell::new(r as u8, c as u8);
                match ch {
                    '.' => {}
                    '#' => board.block(cell),
                    '1' | '2' => {
                        let player = if ch == '1' { Player::One } else { Player::Two };
                        if board.locations[player.idx()].is_some() {
                            return Err(BoardError::InvalidLayout(format!(
                                "player {player} placed twice"
                            )));
                        }
                        board.locations[player.idx()] = Some(cell);
                        board.block(cell);
                    }
                    _ => {
                        return Err(BoardError::InvalidLayout(format!(
                            "unexpected character `{ch}`"
                        )))
                    }
                }
            }
        }

        board.active = match parts[1] {
            "1" => Player::One,
            "2" => Player::Two,
            other => {
                return Err(BoardError::InvalidLayout(format!(
                    "invalid player to move `{other}`"
                )))
            }
        };
        board.move_count = board.locations.iter().flatten().count() as u32;
        Ok(board)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn cell_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    #[inline]
    pub fn index(&self, cell: Cell) -> u8 {
        cell.row * self.width + cell.col
    }

    #[inline]
    pub fn cell_at(&self, idx: u8) -> Cell {
        Cell::new(idx / self.width, idx % self.width)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn is_blank(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.blocked.contains(self.index(cell))
    }

    fn block(&mut self, cell: Cell) {
        let idx = self.index(cell);
        self.blocked.set(idx);
    }

    pub(crate) fn blank_set(&self) -> CellSet {
        !self.blocked & CellSet::full(self.cell_count())
    }

    /// All blank cells in ascending row-major order.
    pub fn get_blank_spaces(&self) -> Vec<Cell> {
        self.blank_set().map(|idx| self.cell_at(idx)).collect()
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    pub fn get_opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    /// Location of `player`, or None before their first move.
    pub fn get_player_location(&self, player: Player) -> Option<Cell> {
        self.locations[player.idx()]
    }

    /// Number of moves played so far (both players).
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn get_legal_moves(&self, player: Player) -> Vec<Move> {
        legal_moves(self, player)
    }

    pub fn mobility(&self, player: Player) -> usize {
        mobility(self, player)
    }

    pub fn is_legal(&self, mv: Move) -> bool {
        self.get_legal_moves(self.active).contains(&mv)
    }

    /// The state after the active player jumps to `mv`.
    ///
    /// The move is not validated; callers pass moves from `get_legal_moves`.
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.play(mv);
        next
    }

    /// Play `mv` in place, rejecting moves that are not legal for the active player.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_legal(mv) {
            return Err(BoardError::IllegalMove {
                player: self.active,
                mv,
            });
        }
        self.play(mv);
        Ok(())
    }

    fn play(&mut self, mv: Move) {
        self.block(mv);
        self.locations[self.active.idx()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    /// True when `player` is to move and has no legal move.
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.mobility(self.active) == 0
    }

    /// True when `player` just moved and the opponent is stuck.
    pub fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.mobility(self.active) == 0
    }

    /// `+inf` for a won position, `-inf` for a lost one, `0` while the game is open.
    pub fn utility(&self, player: Player) -> f64 {
        if self.mobility(self.active) > 0 {
            0.0
        } else if player == self.inactive_player() {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: CellSet::EMPTY,
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            write!(f, "|")?;
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                let mark = if self.locations[0] == Some(cell) {
                    '1'
                } else if self.locations[1] == Some(cell) {
                    '2'
                } else if self.is_blank(cell) {
                    ' '
                } else {
                    '-'
                };
                write!(f, " {mark} |")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
