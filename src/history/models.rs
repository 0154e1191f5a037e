use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString};

use super::HistoryError;

/// Rule variant a game was played under. Opaque to this crate: scoring for
/// each variant lives in the live game engine.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum_macros::Display,
)]
pub enum GameType {
    #[serde(rename = "501")]
    #[strum(serialize = "501")]
    FiveOhOne,
    #[serde(rename = "301")]
    #[strum(serialize = "301")]
    ThreeOhOne,
    #[serde(rename = "cricket")]
    #[strum(serialize = "cricket")]
    Cricket,
}

impl GameType {
    /// Human-facing name, e.g. "Cricket" or "501"
    pub fn label(&self) -> &'static str {
        match self {
            GameType::FiveOhOne => "501",
            GameType::ThreeOhOne => "301",
            GameType::Cricket => "Cricket",
        }
    }

    /// Parses the wire form ("501", "301", "cricket")
    pub fn parse(s: &str) -> Result<Self, HistoryError> {
        GameType::from_str(s)
            .map_err(|_| HistoryError::Validation(format!("unknown game type '{}'", s)))
    }
}

/// Selection applied by the history filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameTypeFilter {
    #[default]
    All,
    Only(GameType),
}

impl GameTypeFilter {
    /// Filter options in display order: all, then every game type
    pub fn options() -> Vec<GameTypeFilter> {
        std::iter::once(GameTypeFilter::All)
            .chain(GameType::iter().map(GameTypeFilter::Only))
            .collect()
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameTypeFilter::All => "All Games",
            GameTypeFilter::Only(game_type) => game_type.label(),
        }
    }

    pub fn matches(&self, game_type: GameType) -> bool {
        match self {
            GameTypeFilter::All => true,
            GameTypeFilter::Only(wanted) => *wanted == game_type,
        }
    }
}

impl fmt::Display for GameTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameTypeFilter::All => write!(f, "all"),
            GameTypeFilter::Only(game_type) => write!(f, "{}", game_type),
        }
    }
}

impl TryFrom<&str> for GameTypeFilter {
    type Error = HistoryError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "all" => Ok(GameTypeFilter::All),
            other => GameType::parse(other).map(GameTypeFilter::Only),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String, // Unique within one game
    pub name: String,
    pub avatar_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRules {
    pub best_of: u32,
}

/// Raw per-player counters for one game, as produced by the live engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub darts_thrown: u32,
    pub average_per_turn: f64,
    pub highest_turn: u32,
    /// `None` when the player never checked out, which is not the same as zero
    #[serde(default)]
    pub highest_checkout: Option<u32>,
    pub doubles_hit: u32,
    pub triples_hit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub player_stats: HashMap<String, PlayerStats>,
}

/// A completed game. Created once by the live engine and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameHistory {
    pub id: String,
    pub game_type: GameType,
    pub players: Vec<Player>,
    pub winner_id: String,
    pub legs_won: HashMap<String, u32>,
    pub rules: GameRules,
    pub statistics: Statistics,
    pub completed_at: String, // ISO-8601
}

impl GameHistory {
    /// Decodes a record from untyped JSON, reporting shape problems
    /// (unknown game type, missing fields) as validation errors
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, HistoryError> {
        serde_json::from_value(value)
            .map_err(|err| HistoryError::Validation(format!("malformed game record: {}", err)))
    }

    /// Decodes a record from raw bytes; text that is not JSON at all is
    /// reported the same way as a malformed record
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, HistoryError> {
        serde_json::from_slice(bytes)
            .map_err(|err| HistoryError::Validation(format!("malformed game record: {}", err)))
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// The recorded winner, if it resolves to a player in this game
    pub fn winner(&self) -> Option<&Player> {
        self.player(&self.winner_id)
    }

    /// Legs won by a player; a missing entry counts as zero
    pub fn legs_for(&self, player_id: &str) -> u32 {
        self.legs_won.get(player_id).copied().unwrap_or_default()
    }

    pub fn stats_for(&self, player_id: &str) -> Option<&PlayerStats> {
        self.statistics.player_stats.get(player_id)
    }
}
