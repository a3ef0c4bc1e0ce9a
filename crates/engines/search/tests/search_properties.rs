//! Property tests: alpha-beta against plain minimax on real Isolation boards.

use std::time::Duration;

use isolation_core::{Board, GameState};
use proptest::prelude::*;
use search_engine::{get_move, Heuristic, SearchConfig, SearchMethod, Searcher};

const THRESHOLD: Duration = Duration::from_millis(10);

fn unlimited() -> Duration {
    Duration::MAX
}

// Strategy: a small board after a few pseudo-random plies.
fn random_board() -> impl Strategy<Value = Board> {
    (
        prop::sample::select(vec![(4u8, 4u8), (5, 4), (5, 5)]),
        prop::collection::vec(any::<prop::sample::Index>(), 2..6),
    )
        .prop_map(|((width, height), picks)| {
            let mut board = Board::new(width, height).unwrap();
            for pick in picks {
                let moves = board.legal_moves();
                if moves.is_empty() {
                    break;
                }
                board = board.forecast_move(moves[pick.index(moves.len())]);
            }
            board
        })
}

fn heuristic() -> impl Strategy<Value = Heuristic> {
    prop::sample::select(vec![
        Heuristic::Open,
        Heuristic::Improved,
        Heuristic::Custom,
        Heuristic::Distance,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alphabeta_scores_match_minimax(board in random_board(), h in heuristic(), depth in 1u32..4) {
        let player = board.active_player();
        let mut mm = Searcher::new(&h, &unlimited, THRESHOLD, player);
        let mut ab = Searcher::new(&h, &unlimited, THRESHOLD, player);

        let full = mm.search(SearchMethod::Minimax, &board, depth).unwrap();
        let pruned = ab.search(SearchMethod::AlphaBeta, &board, depth).unwrap();

        prop_assert_eq!(full.score, pruned.score);
        prop_assert!(ab.nodes() <= mm.nodes());
        if let Some(mv) = pruned.best_move {
            prop_assert!(board.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn repeated_searches_are_identical(board in random_board(), h in heuristic(), depth in 1u32..4) {
        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let player = board.active_player();
            let first = Searcher::new(&h, &unlimited, THRESHOLD, player).search(method, &board, depth);
            let second = Searcher::new(&h, &unlimited, THRESHOLD, player).search(method, &board, depth);
            let (first, second) = (first.unwrap(), second.unwrap());
            prop_assert_eq!(first.score.to_bits(), second.score.to_bits());
            prop_assert_eq!(first.best_move, second.best_move);
        }
    }

    #[test]
    fn deepening_to_d_matches_fixed_depth_d(board in random_board(), depth in 1u32..4) {
        let moves = board.legal_moves();
        for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
            let fixed = SearchConfig::fixed(method, depth).with_heuristic(Heuristic::Improved);
            let deepening = SearchConfig::iterative(method)
                .with_heuristic(Heuristic::Improved)
                .with_max_depth(depth);

            let a = get_move(&fixed, &fixed.heuristic, &board, &moves, &unlimited);
            let b = get_move(&deepening, &deepening.heuristic, &board, &moves, &unlimited);
            prop_assert_eq!(a.best_move, b.best_move);
            prop_assert_eq!(a.score.to_bits(), b.score.to_bits());
        }
    }
}
