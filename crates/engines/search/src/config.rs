//! Search configuration: mode, method, depth and the timeout safety margin.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eval::Heuristic;

/// Default safety margin left on the clock when a search is abandoned.
pub const DEFAULT_TIMER_THRESHOLD: Duration = Duration::from_millis(10);

/// Default depth for fixed-depth search.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown search method `{0}` (expected `minimax` or `alphabeta`)")]
    UnknownMethod(String),

    #[error("unknown heuristic `{0}`")]
    UnknownHeuristic(String),

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether to search once at a fixed depth or deepen until time runs out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Fixed,
    #[default]
    Iterative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SearchMethod {
    #[default]
    Minimax,
    AlphaBeta,
}

impl SearchMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        }
    }
}

impl FromStr for SearchMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "minimax" | "mm" => Ok(SearchMethod::Minimax),
            "alphabeta" | "alpha_beta" | "alpha-beta" | "ab" => Ok(SearchMethod::AlphaBeta),
            _ => Err(ConfigError::UnknownMethod(s.to_string())),
        }
    }
}

impl TryFrom<String> for SearchMethod {
    type Error = ConfigError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SearchMethod> for String {
    fn from(method: SearchMethod) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for SearchMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a search agent.
///
/// In TOML the threshold is given in milliseconds:
///
/// ```toml
/// mode = "iterative"
/// method = "alphabeta"
/// timer_threshold_ms = 15
/// heuristic = "improved"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    pub method: SearchMethod,
    /// Plies searched in fixed-depth mode
    pub search_depth: u32,
    /// Search is abandoned once less than this is left on the clock
    #[serde(rename = "timer_threshold_ms", with = "millis")]
    pub timer_threshold: Duration,
    /// Optional cap for iterative deepening (None = until time or the tree runs out)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<u32>,
    pub heuristic: Heuristic,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Iterative,
            method: SearchMethod::Minimax,
            search_depth: DEFAULT_SEARCH_DEPTH,
            timer_threshold: DEFAULT_TIMER_THRESHOLD,
            max_depth: None,
            heuristic: Heuristic::Custom,
        }
    }
}

impl SearchConfig {
    /// One search at exactly `depth` plies.
    pub fn fixed(method: SearchMethod, depth: u32) -> Self {
        Self {
            mode: SearchMode::Fixed,
            method,
            search_depth: depth,
            ..Default::default()
        }
    }

    /// Iterative deepening until the clock or the game tree runs out.
    pub fn iterative(method: SearchMethod) -> Self {
        Self {
            mode: SearchMode::Iterative,
            method,
            ..Default::default()
        }
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.timer_threshold = threshold;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Reject configurations that could never produce a search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == SearchMode::Fixed && self.search_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
