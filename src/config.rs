use std::path::PathBuf;
use thiserror::Error;

use crate::history::GameHistory;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_RECENT_LIMIT: usize = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Seed file {path} is not a JSON array of games: {source}")]
    SeedParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Runtime settings, read from `DARTLOG_*` environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: String,
    /// How many games the recent activity view shows
    pub recent_limit: usize,
    /// JSON array of games loaded into the store at start-up
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            seed_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from any variable source; unset values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(addr) = lookup("DARTLOG_BIND_ADDR") {
            config.bind_addr = addr;
        }

        if let Some(raw) = lookup("DARTLOG_RECENT_LIMIT") {
            config.recent_limit = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidNumber {
                    name: "DARTLOG_RECENT_LIMIT",
                    value: raw.clone(),
                })?;
        }

        config.seed_path = lookup("DARTLOG_SEED_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Reads the seed file, if one is configured
    pub fn load_seed(&self) -> Result<Vec<GameHistory>, ConfigError> {
        let Some(path) = &self.seed_path else {
            return Ok(Vec::new());
        };

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
            path: path.clone(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::SeedParse {
            path: path.clone(),
            source,
        })
    }
}
