use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}
impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "1"),
            Player::Two => write!(f, "2"),
        }
    }
}

/// A board coordinate. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Offset this cell by (drow, dcol), or None if it leaves the `width` x `height` grid.
    pub fn offset(self, drow: i8, dcol: i8, width: u8, height: u8) -> Option<Cell> {
        let r = self.row as i16 + drow as i16;
        let c = self.col as i16 + dcol as i16;
        if (0..height as i16).contains(&r) && (0..width as i16).contains(&c) {
            Some(Cell::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move is the cell the active player jumps to.
pub type Move = Cell;

/// Knight-style jumps, in the order legal moves are enumerated.
pub const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
