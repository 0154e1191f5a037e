use serde::{Deserialize, Serialize};

use super::{
    presentation::{format_date_label, format_short_date, DisplayStats},
    GameHistory, GameType, Player,
};

/// Query string for `GET /games`
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "type")]
    pub game_type: Option<String>,
}

/// One row of the history list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: String,
    pub game_type: GameType,
    pub label: String,
    pub completed_at: String,
    pub date_label: Option<String>,
    pub player_count: usize,
    pub best_of: u32,
    pub winner_name: Option<String>,
}

impl From<&GameHistory> for GameSummary {
    fn from(game: &GameHistory) -> Self {
        Self {
            id: game.id.clone(),
            game_type: game.game_type,
            label: game.game_type.label().to_string(),
            completed_at: game.completed_at.clone(),
            date_label: format_date_label(&game.completed_at),
            player_count: game.players.len(),
            best_of: game.rules.best_of,
            winner_name: game.winner().map(|p| p.name.clone()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryView {
    pub filter: String,
    pub filter_label: String,
    pub games: Vec<GameSummary>,
    pub diagnostics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentGame {
    pub id: String,
    pub label: String,
    pub opponent_count: usize,
    pub winner_name: Option<String>,
    pub date: Option<String>,
}

impl From<&GameHistory> for RecentGame {
    fn from(game: &GameHistory) -> Self {
        Self {
            id: game.id.clone(),
            label: game.game_type.label().to_string(),
            opponent_count: game.players.len().saturating_sub(1),
            winner_name: game.winner().map(|p| p.name.clone()),
            date: format_short_date(&game.completed_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub total_games: usize,
    pub recent: Vec<RecentGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingView {
    pub rank: u32,
    pub player: Player,
    pub legs_won: u32,
    pub is_winner: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsView {
    pub player: Player,
    pub stats: DisplayStats,
}

/// Everything the game detail view shows for one game
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetail {
    pub id: String,
    pub game_type: GameType,
    pub title: String,
    pub date_label: Option<String>,
    pub best_of: u32,
    pub standings: Vec<StandingView>,
    pub player_stats: Vec<PlayerStatsView>,
    pub diagnostics: Vec<String>,
}
