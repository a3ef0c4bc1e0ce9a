use super::*;
use isolation_core::{Cell, TimeSource};
use random_engine::RandomAgent;
use search_engine::{Heuristic, SearchAgent, SearchConfig, SearchMethod};

/// Never answers.
struct Resigner;

impl Agent for Resigner {
    fn get_move(&mut self, _: &Board, _: &[Move], _: &dyn TimeSource) -> Option<Move> {
        None
    }

    fn name(&self) -> &str {
        "resigner"
    }
}

/// Always jumps off the board.
struct Cheater;

impl Agent for Cheater {
    fn get_move(&mut self, _: &Board, _: &[Move], _: &dyn TimeSource) -> Option<Move> {
        Some(Cell::new(99, 99))
    }

    fn name(&self) -> &str {
        "cheater"
    }
}

/// Picks a legal move, but only after oversleeping.
struct Sleeper(Duration);

impl Agent for Sleeper {
    fn get_move(&mut self, _: &Board, legal_moves: &[Move], _: &dyn TimeSource) -> Option<Move> {
        std::thread::sleep(self.0);
        legal_moves.first().copied()
    }

    fn name(&self) -> &str {
        "sleeper"
    }
}

fn quiet(num_games: u32) -> MatchConfig {
    MatchConfig {
        num_games,
        time_per_move: None,
        seed: Some(42),
        verbose: false,
        ..Default::default()
    }
}

#[test]
fn test_random_self_play() {
    let mut agent1 = RandomAgent::with_seed(1);
    let mut agent2 = RandomAgent::with_seed(2);

    let runner = MatchRunner::new(quiet(4));
    let result = runner.run_match(&mut agent1, &mut agent2).unwrap();

    assert_eq!(result.total_games(), 4);
    assert_eq!(result.wins_by_forfeit + result.losses_by_forfeit, 0);
}

#[test]
fn test_no_move_forfeits_every_game() {
    let mut resigner = Resigner;
    let mut random = RandomAgent::with_seed(3);

    let runner = MatchRunner::new(quiet(4));
    let result = runner.run_match(&mut resigner, &mut random).unwrap();

    assert_eq!(result.losses, 4);
    assert_eq!(result.losses_by_forfeit, 4);
}

#[test]
fn test_opponent_forfeits_count_as_wins_from_both_seats() {
    let mut random = RandomAgent::with_seed(4);
    let mut resigner = Resigner;

    let runner = MatchRunner::new(quiet(4));
    let result = runner.run_match(&mut random, &mut resigner).unwrap();

    assert_eq!(result.wins, 4);
    assert_eq!(result.wins_by_forfeit, 4);
    assert_eq!(result.losses, 0);
}

#[test]
fn test_illegal_move_forfeits() {
    let runner = MatchRunner::new(quiet(1));
    let start = random_opening(&Board::default(), &mut StdRng::seed_from_u64(5));
    let mut random = RandomAgent::with_seed(5);

    let record = runner.play_game(&mut Cheater, &mut random, &start);

    assert_eq!(record.winner, Player::Two);
    assert_eq!(record.reason, EndReason::IllegalMove);
    assert!(record.moves.is_empty());
}

#[test]
fn test_overtime_forfeits() {
    let runner = MatchRunner::new(MatchConfig {
        time_per_move: Some(Duration::from_millis(5)),
        ..quiet(1)
    });
    let mut sleeper = Sleeper(Duration::from_millis(30));
    let mut random = RandomAgent::with_seed(6);

    let record = runner.play_game(&mut random, &mut sleeper, &Board::default());

    assert_eq!(record.winner, Player::One);
    assert_eq!(record.reason, EndReason::Timeout);
    assert_eq!(record.moves.len(), 1);
}

#[test]
fn test_isolated_player_loses() {
    let runner = MatchRunner::new(quiet(1));
    let start = Board::from_layout("1../..#/.#2 1").unwrap();

    let record = runner.play_game(&mut Resigner, &mut Resigner, &start);

    assert_eq!(record.winner, Player::Two);
    assert_eq!(record.reason, EndReason::Isolated);
    assert!(!record.reason.is_forfeit());
}

#[test]
fn test_random_opening_places_both_players() {
    let mut rng = StdRng::seed_from_u64(9);
    let opening = random_opening(&Board::default(), &mut rng);

    assert_eq!(opening.move_count(), 2);
    assert_eq!(opening.active_player(), Player::One);
    assert!(opening.get_player_location(Player::One).is_some());
    assert!(opening.get_player_location(Player::Two).is_some());
}

#[test]
fn test_seeded_matches_repeat() {
    let runner = MatchRunner::new(quiet(6));

    let first = runner
        .run_match(&mut RandomAgent::with_seed(1), &mut RandomAgent::with_seed(2))
        .unwrap();
    let second = runner
        .run_match(&mut RandomAgent::with_seed(1), &mut RandomAgent::with_seed(2))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_board_size() {
    let runner = MatchRunner::new(MatchConfig {
        width: 9,
        height: 9,
        ..quiet(1)
    });

    let err = runner
        .run_match(&mut Resigner, &mut Resigner)
        .unwrap_err();
    assert!(matches!(err, BoardError::InvalidDimensions { .. }));
}

#[test]
fn test_search_agent_answers_in_time() {
    let config = SearchConfig::iterative(SearchMethod::AlphaBeta).with_heuristic(Heuristic::Improved);
    let mut search = SearchAgent::new("id_improved", config).unwrap();
    let mut random = RandomAgent::with_seed(11);

    let runner = MatchRunner::new(MatchConfig {
        time_per_move: Some(Duration::from_millis(60)),
        ..quiet(2)
    });
    let result = runner.run_match(&mut search, &mut random).unwrap();

    assert_eq!(result.total_games(), 2);
    assert_eq!(result.losses_by_forfeit, 0);
}
