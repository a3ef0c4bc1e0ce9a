use super::*;
use isolation_core::{Cell, Player, TimeControl};
use std::time::{Duration, Instant};

fn unlimited() -> Duration {
    Duration::MAX
}

/// One can trap Two at once by jumping to (2, 1), Two's only escape.
fn winning_board() -> Board {
    Board::from_layout("1.2./#.../...#/.... 1").unwrap()
}

#[test]
fn test_agent_rejects_invalid_config() {
    let err = SearchAgent::new("broken", SearchConfig::fixed(SearchMethod::Minimax, 0)).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroDepth));
}

#[test]
fn test_agent_returns_none_without_legal_moves() {
    let board = Board::from_layout("1../..#/.#2 1").unwrap();
    let mut agent = SearchAgent::new("ab", SearchConfig::iterative(SearchMethod::AlphaBeta)).unwrap();
    assert_eq!(agent.get_move(&board, &[], &unlimited), None);
}

#[test]
fn test_agent_finds_immediate_win() {
    let board = winning_board();
    let moves = board.get_legal_moves(Player::One);
    assert_eq!(moves, vec![Cell::new(1, 2), Cell::new(2, 1)]);

    let configs = [
        SearchConfig::fixed(SearchMethod::Minimax, 1),
        SearchConfig::fixed(SearchMethod::AlphaBeta, 3),
        SearchConfig::iterative(SearchMethod::Minimax).with_max_depth(4),
        SearchConfig::iterative(SearchMethod::AlphaBeta).with_heuristic(Heuristic::Improved),
    ];
    for config in configs {
        let mut agent = SearchAgent::new("agent", config.clone()).unwrap();
        let mv = agent.get_move(&board, &moves, &unlimited);
        assert_eq!(mv, Some(Cell::new(2, 1)), "{config:?}");
        assert_eq!(agent.last_report().unwrap().score, f64::INFINITY);
    }
}

#[test]
fn test_agent_falls_back_to_first_move_when_out_of_time() {
    let board = Board::default();
    let moves = board.get_legal_moves(Player::One);
    let expired = || Duration::ZERO;

    let mut agent = SearchAgent::new("id", SearchConfig::default()).unwrap();
    assert_eq!(agent.get_move(&board, &moves, &expired), Some(moves[0]));

    let report = agent.last_report().unwrap();
    assert!(report.stopped);
    assert_eq!(report.depth, 0);

    agent.new_game();
    assert!(agent.last_report().is_none());
}

#[test]
fn test_agent_respects_a_real_clock() {
    let board = Board::default()
        .forecast_move(Cell::new(3, 3))
        .forecast_move(Cell::new(2, 2));
    let moves = board.get_legal_moves(Player::One);

    let clock = TimeControl::new(Some(Duration::from_millis(60)));
    let mut agent = SearchAgent::new(
        "id_improved",
        SearchConfig::iterative(SearchMethod::AlphaBeta).with_heuristic(Heuristic::Improved),
    )
    .unwrap();

    let started = Instant::now();
    clock.start();
    let mv = agent.get_move(&board, &moves, &clock).unwrap();

    assert!(moves.contains(&mv));
    assert!(started.elapsed() < Duration::from_millis(500));
    assert!(agent.last_report().unwrap().depth >= 1);
}

#[test]
fn test_agent_name_and_config() {
    let config = SearchConfig::fixed(SearchMethod::AlphaBeta, 5);
    let agent = SearchAgent::new("AB_Improved", config.clone()).unwrap();
    assert_eq!(agent.name(), "AB_Improved");
    assert_eq!(agent.config(), &config);
}
