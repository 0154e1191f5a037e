use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistoryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed completedAt '{value}' on game {game_id}")]
    MalformedTimestamp { game_id: String, value: String },

    #[error(
        "Ranking inconsistency in game {game_id}: recorded winner '{recorded_winner}' but '{leader}' leads on legs"
    )]
    RankingInconsistency {
        game_id: String,
        recorded_winner: String,
        leader: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),
}
