//! Match runner for playing games between agents

use std::fmt;
use std::time::Duration;

use isolation_core::{Agent, Board, BoardError, Move, Player, SearchLimits};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::elo::{GameResult, MatchResult};

/// Time per move used by the reference tournament
pub const DEFAULT_TIME_PER_MOVE: Duration = Duration::from_millis(150);

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Board width
    pub width: u8,
    /// Board height
    pub height: u8,
    /// Place both players at random before handing the game to the agents
    pub random_openings: bool,
    /// Alternate which agent moves first; each opening is then played from both sides
    pub alternate_first: bool,
    /// Seed for opening placements (None = fresh entropy)
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            time_per_move: Some(DEFAULT_TIME_PER_MOVE),
            width: 7,
            height: 7,
            random_openings: true,
            alternate_first: true,
            seed: None,
            verbose: true,
        }
    }
}

impl MatchConfig {
    /// Fresh limits for one move; the clock starts when the runner says so
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::move_time(time),
            None => SearchLimits::unlimited(),
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// The side to move had no legal move
    Isolated,
    /// An agent returned no move while it had legal moves
    NoMove,
    /// An agent returned a move that was not legal
    IllegalMove,
    /// An agent used more than its move time
    Timeout,
}

impl EndReason {
    pub fn is_forfeit(self) -> bool {
        self != EndReason::Isolated
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EndReason::Isolated => "isolated",
            EndReason::NoMove => "forfeit (no move)",
            EndReason::IllegalMove => "forfeit (illegal move)",
            EndReason::Timeout => "forfeit (timeout)",
        };
        f.write_str(s)
    }
}

/// Outcome of a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub winner: Player,
    pub reason: EndReason,
    /// Moves made by the agents, after the opening
    pub moves: Vec<Move>,
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Run a match between two agents
    ///
    /// Returns the result from agent1's perspective. Fails only if the
    /// configured board dimensions are invalid.
    pub fn run_match(
        &self,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
    ) -> Result<MatchResult, BoardError> {
        let empty = Board::new(self.config.width, self.config.height)?;
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut result = MatchResult::new();
        let mut opening = empty.clone();

        for game_num in 0..self.config.num_games {
            let agent1_first = !self.config.alternate_first || game_num % 2 == 0;

            // With alternation the second game of each pair replays the same opening
            if !self.config.alternate_first || game_num % 2 == 0 {
                opening = if self.config.random_openings {
                    random_opening(&empty, &mut rng)
                } else {
                    empty.clone()
                };
            }

            let record = if agent1_first {
                self.play_game(agent1, agent2, &opening)
            } else {
                self.play_game(agent2, agent1, &opening)
            };
            let game_result = if agent1_first {
                first_mover_result(&record)
            } else {
                first_mover_result(&record).flip()
            };

            match game_result {
                GameResult::Win => {
                    result.wins += 1;
                    if record.reason.is_forfeit() {
                        result.wins_by_forfeit += 1;
                    }
                }
                GameResult::Loss => {
                    result.losses += 1;
                    if record.reason.is_forfeit() {
                        result.losses_by_forfeit += 1;
                    }
                }
            }

            debug!(
                game = game_num + 1,
                winner = %record.winner,
                reason = %record.reason,
                plies = record.moves.len(),
                "game finished"
            );

            if self.config.verbose {
                let side = if agent1_first { "1st" } else { "2nd" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                };
                println!(
                    "Game {}/{}: {} ({}, {}) - Score: {}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    side,
                    record.reason,
                    result.wins,
                    result.losses
                );
            }
        }

        Ok(result)
    }

    /// Play a single game from `start`. `first` plays as player one.
    ///
    /// Each turn gets a fresh clock. An agent forfeits by returning no move,
    /// an illegal move, or by answering after its time ran out.
    pub fn play_game(
        &self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
        start: &Board,
    ) -> GameRecord {
        let mut board = start.clone();
        let mut moves = Vec::new();
        first.new_game();
        second.new_game();

        loop {
            let player = board.active_player();
            let agent: &mut dyn Agent = match player {
                Player::One => &mut *first,
                Player::Two => &mut *second,
            };

            let legal_moves = board.get_legal_moves(player);
            if legal_moves.is_empty() {
                return GameRecord {
                    winner: player.opponent(),
                    reason: EndReason::Isolated,
                    moves,
                };
            }

            // Create fresh search limits for each move (resets the clock)
            let limits = self.config.search_limits();
            limits.start();
            let choice = agent.get_move(&board, &legal_moves, &limits.time_control);

            let forfeit = if limits.time_control.is_expired() {
                Some(EndReason::Timeout)
            } else {
                match choice {
                    None => Some(EndReason::NoMove),
                    Some(mv) => board.apply_move(mv).err().map(|_| EndReason::IllegalMove),
                }
            };

            if let Some(reason) = forfeit {
                warn!(
                    agent = agent.name(),
                    player = %player,
                    chosen = ?choice,
                    elapsed_ms = limits.time_control.elapsed().as_millis() as u64,
                    %reason,
                    "agent forfeits"
                );
                return GameRecord {
                    winner: player.opponent(),
                    reason,
                    moves,
                };
            }

            if let Some(mv) = choice {
                moves.push(mv);
            }
        }
    }
}

/// Place both players on random blank cells.
pub fn random_opening(board: &Board, rng: &mut StdRng) -> Board {
    let mut opening = board.clone();
    for _ in 0..2 {
        let blanks = opening.get_legal_moves(opening.active_player());
        match blanks.choose(rng) {
            Some(&cell) => opening = opening.forecast_move(cell),
            None => break,
        }
    }
    opening
}

fn first_mover_result(record: &GameRecord) -> GameResult {
    if record.winner == Player::One {
        GameResult::Win
    } else {
        GameResult::Loss
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
