//! Elo rating calculation and tracking

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

use crate::StoreError;

/// Default starting Elo for new agents
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Elo rating system for tracking agent strength
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    /// Ratings for each agent (by agent name)
    pub ratings: HashMap<String, f64>,
    /// Number of games played by each agent
    pub games_played: HashMap<String, u32>,
    /// Match history for analysis
    pub history: Vec<MatchRecord>,
}

/// Record of a single match result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub agent1: String,
    pub agent2: String,
    pub result: MatchResult,
    pub timestamp: String,
    pub elo_change: f64,
}

/// Result of a single game. Isolation cannot be drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

impl GameResult {
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
        }
    }
}

/// Result of a match (multiple games), from agent1's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    /// Games agent1 won because agent2 forfeited
    pub wins_by_forfeit: u32,
    /// Games agent1 lost by forfeiting
    pub losses_by_forfeit: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Fraction of games won by agent1 (0.5 for an empty match)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        self.wins as f64 / total
    }
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tracker from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load the tracker at `path`, starting fresh if there is none.
    ///
    /// A file that exists but cannot be read or parsed is logged, since the
    /// next `save` replaces it.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(&path) {
            Ok(tracker) => tracker,
            Err(StoreError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Self::new()
            }
            Err(err) => {
                warn!(error = %err, "ignoring unreadable Elo tracker, ratings start fresh");
                Self::new()
            }
        }
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| StoreError::Json {
            path: path.display().to_string(),
            source,
        })?;
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Get or initialize rating for an agent
    pub fn get_rating(&mut self, agent: &str) -> f64 {
        *self.ratings.entry(agent.to_string()).or_insert(DEFAULT_ELO)
    }

    /// Calculate expected score for agent1 against agent2
    pub fn expected_score(&mut self, agent1: &str, agent2: &str) -> f64 {
        let r1 = self.get_rating(agent1);
        let r2 = self.get_rating(agent2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update ratings after a match
    pub fn update_ratings(&mut self, agent1: &str, agent2: &str, result: &MatchResult) {
        let expected = self.expected_score(agent1, agent2);
        let actual = result.score();

        let games = result.total_games() as f64;
        let elo_change = K_FACTOR * games * (actual - expected);

        let r1 = self.get_rating(agent1);
        let r2 = self.get_rating(agent2);
        self.ratings.insert(agent1.to_string(), r1 + elo_change);
        self.ratings.insert(agent2.to_string(), r2 - elo_change);

        *self.games_played.entry(agent1.to_string()).or_insert(0) += result.total_games();
        *self.games_played.entry(agent2.to_string()).or_insert(0) += result.total_games();

        self.history.push(MatchRecord {
            agent1: agent1.to_string(),
            agent2: agent2.to_string(),
            result: result.clone(),
            timestamp: unix_timestamp(),
            elo_change,
        });
    }

    /// Get a sorted leaderboard
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Agent Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Agent", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rating, games) in self.leaderboard() {
            println!("{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        println!();
    }
}

/// Seconds since the Unix epoch
fn unix_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_secs())
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
