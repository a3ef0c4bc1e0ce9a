//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::elo::MatchResult;
use crate::StoreError;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating agents
    pub participants: Vec<String>,
    /// All match results (indexed by participant pairs)
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub agent1: String,
    pub agent2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    /// Milliseconds per move (None = unlimited)
    pub time_per_move_ms: Option<u64>,
    pub board_width: u8,
    pub board_height: u8,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            time_per_move_ms: Some(150),
            board_width: 7,
            board_height: 7,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, agent1: &str, agent2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            agent1: agent1.to_string(),
            agent2: agent2.to_string(),
            result,
        });
    }

    /// Fraction of all games won by `agent`, across every match it played
    pub fn win_rate(&self, agent: &str) -> Option<f64> {
        let (mut wins, mut games) = (0u32, 0u32);
        for entry in &self.matches {
            if entry.agent1 == agent {
                wins += entry.result.wins;
            } else if entry.agent2 == agent {
                wins += entry.result.losses;
            } else {
                continue;
            }
            games += entry.result.total_games();
        }
        (games > 0).then(|| wins as f64 / games as f64)
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        let time = match self.config.time_per_move_ms {
            Some(ms) => format!("{} ms/move", ms),
            None => "unlimited time".to_string(),
        };
        report.push_str(&format!(
            "Config: {} games/match, {}, {}x{} board\n\n",
            self.config.games_per_match, time, self.config.board_width, self.config.board_height
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<20} vs {:<20} {:>5}-{:<5} {:>9}\n",
            "Agent 1", "Agent 2", "W", "L", "Forfeits"
        ));
        report.push_str(&"-".repeat(66));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<20} vs {:<20} {:>5}-{:<5} {:>4}/{:<4}\n",
                entry.agent1,
                entry.agent2,
                entry.result.wins,
                entry.result.losses,
                entry.result.losses_by_forfeit,
                entry.result.wins_by_forfeit
            ));
        }

        if let Some(first) = self.participants.first() {
            if let Some(rate) = self.win_rate(first) {
                report.push_str(&format!("\n{} win rate: {:.1}%\n", first, rate * 100.0));
            }
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
