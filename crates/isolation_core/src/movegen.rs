use crate::{board::Board, types::*};

/// Generate the legal moves of `player`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut out = Vec::with_capacity(8);
    legal_moves_into(board, player, &mut out);
    out
}

/// Generate the legal moves of `player` into the provided buffer, reusing it across calls.
///
/// An unplaced player may jump to any blank cell (ascending row-major order);
/// a placed player moves like a knight onto blank cells, in `KNIGHT_DIRECTIONS` order.
pub fn legal_moves_into(board: &Board, player: Player, out: &mut Vec<Move>) {
    out.clear();
    match board.get_player_location(player) {
        None => out.extend(board.blank_set().map(|idx| board.cell_at(idx))),
        Some(from) => {
            for &(dr, dc) in KNIGHT_DIRECTIONS.iter() {
                match from.offset(dr, dc, board.width(), board.height()) {
                    Some(to) if board.is_blank(to) => out.push(to),
                    _ => {}
                }
            }
        }
    }
}

/// Number of legal moves for `player`, without allocating.
pub fn mobility(board: &Board, player: Player) -> usize {
    match board.get_player_location(player) {
        None => board.blank_set().popcount() as usize,
        Some(from) => KNIGHT_DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc, board.width(), board.height()))
            .filter(|&to| board.is_blank(to))
            .count(),
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
