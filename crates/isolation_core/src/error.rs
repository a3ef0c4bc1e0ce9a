use thiserror::Error;

use crate::types::{Cell, Player};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have between 1 and 64 cells, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("player {player} cannot move to {mv}")]
    IllegalMove { player: Player, mv: Cell },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}
