use crate::{board::Board, movegen::legal_moves_into, types::Move};

/// Pure perft node count.
/// Counts every line of play from the current board down to `depth` plies;
/// lines that end early because the mover is stuck count as one leaf.
pub fn perft(board: &Board, depth: u8) -> u64 {
    fn inner(board: &Board, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let (buf, rest) = match layers.split_first_mut() {
            Some(split) => split,
            None => return 1,
        };

        legal_moves_into(board, board.active_player(), buf);
        if buf.is_empty() {
            return 1;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            nodes += inner(&board.forecast_move(mv), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(8); depth as usize];
    inner(board, depth, &mut layers[..])
}
