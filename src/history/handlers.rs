use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    types::{GameDetail, GameSummary, HistoryQuery, HistoryView, RecentActivity},
    GameHistory, GameTypeFilter,
};
use crate::shared::{AppError, AppState};

/// Routes for the game history API
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", post(record_game).get(list_games))
        .route("/games/recent", get(recent_activity))
        .route("/games/:id", get(game_detail))
}

/// HTTP handler for storing a completed game
///
/// POST /games
/// Returns the stored game's summary row
#[instrument(name = "record_game", skip(state, body))]
pub async fn record_game(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<GameSummary>), AppError> {
    let record = GameHistory::from_json_slice(&body)?;
    info!(game_id = %record.id, game_type = %record.game_type, "Recording game");

    let summary = state.history_service.record_game(record).await?;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// HTTP handler for the history list
///
/// GET /games?type=all|501|301|cricket
#[instrument(name = "list_games", skip(state))]
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryView>, AppError> {
    let filter = match query.game_type.as_deref() {
        None => GameTypeFilter::All,
        Some(raw) => GameTypeFilter::try_from(raw)?,
    };

    let view = state.history_service.history(filter).await?;
    info!(game_count = view.games.len(), "History listed");

    Ok(Json(view))
}

/// GET /games/recent
#[instrument(name = "recent_activity", skip(state))]
pub async fn recent_activity(
    State(state): State<AppState>,
) -> Result<Json<RecentActivity>, AppError> {
    Ok(Json(state.history_service.recent_activity().await?))
}

/// GET /games/:id
#[instrument(name = "game_detail", skip(state))]
pub async fn game_detail(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameDetail>, AppError> {
    Ok(Json(state.history_service.game_detail(&game_id).await?))
}
