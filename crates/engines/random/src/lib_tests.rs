use super::*;
use isolation_core::Player;
use std::time::Duration;

fn unlimited() -> Duration {
    Duration::MAX
}

#[test]
fn random_agent_returns_legal_move() {
    let mut agent = RandomAgent::new();
    let board = Board::default();
    let legal_moves = board.get_legal_moves(Player::One);

    let mv = agent.get_move(&board, &legal_moves, &unlimited);

    assert!(mv.is_some());
    assert!(legal_moves.contains(&mv.unwrap()));
}

#[test]
fn random_agent_handles_no_moves() {
    let mut agent = RandomAgent::new();
    let board = Board::from_layout("1../..#/.#2 1").unwrap();

    let mv = agent.get_move(&board, &[], &unlimited);

    assert!(mv.is_none());
}

#[test]
fn seeded_agents_agree() {
    let board = Board::default();
    let legal_moves = board.get_legal_moves(Player::One);
    let mut a = RandomAgent::with_seed(7);
    let mut b = RandomAgent::with_seed(7);

    for _ in 0..10 {
        assert_eq!(
            a.get_move(&board, &legal_moves, &unlimited),
            b.get_move(&board, &legal_moves, &unlimited)
        );
    }
}
