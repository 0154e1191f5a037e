use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    presentation::{format_date_label, players_missing_stats, summarize_game},
    query::{filter_by_type, sort_by_recency},
    ranking::{is_winner, resolve_standings},
    repository::HistoryRepository,
    timestamps::completed_at_of,
    types::{
        GameDetail, GameSummary, HistoryView, PlayerStatsView, RecentActivity, RecentGame,
        StandingView,
    },
    GameHistory, GameTypeFilter, HistoryError,
};

/// Builds the history, recent-activity and game detail views over a store
pub struct HistoryService {
    repository: Arc<dyn HistoryRepository>,
    recent_limit: usize,
}

impl HistoryService {
    pub fn new(repository: Arc<dyn HistoryRepository>, recent_limit: usize) -> Self {
        Self {
            repository,
            recent_limit,
        }
    }

    /// Appends a completed game handed over by the live game engine
    #[instrument(skip(self, record), fields(game_id = %record.id))]
    pub async fn record_game(&self, record: GameHistory) -> Result<GameSummary, HistoryError> {
        let summary = GameSummary::from(&record);
        self.repository.append(record).await?;
        Ok(summary)
    }

    /// Appends each record in turn, logging and skipping the ones rejected.
    /// Returns how many were stored.
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn import_games(&self, records: Vec<GameHistory>) -> usize {
        let mut stored = 0;
        for record in records {
            let game_id = record.id.clone();
            match self.repository.append(record).await {
                Ok(()) => stored += 1,
                Err(err) => warn!(%game_id, %err, "Skipping game during import"),
            }
        }
        info!(stored, "Import finished");
        stored
    }

    /// Games matching `filter`, most recent first.
    ///
    /// Games whose timestamp cannot be read are left out and reported in
    /// `diagnostics` instead of failing the whole view.
    #[instrument(skip(self))]
    pub async fn history(&self, filter: GameTypeFilter) -> Result<HistoryView, HistoryError> {
        let games = self.repository.all().await?;
        let filtered = filter_by_type(&games, filter);
        let mut diagnostics = Vec::new();

        let sorted = match sort_by_recency(filtered.clone()) {
            Ok(sorted) => sorted,
            Err(err) => {
                warn!(%err, "Dropping games with malformed timestamps from history view");
                let (readable, malformed): (Vec<_>, Vec<_>) = filtered
                    .into_iter()
                    .partition(|game| completed_at_of(game).is_ok());
                diagnostics.extend(
                    malformed
                        .into_iter()
                        .filter_map(|game| completed_at_of(game).err())
                        .map(|err| err.to_string()),
                );
                sort_by_recency(readable)?
            }
        };

        debug!(games = sorted.len(), "History view built");

        Ok(HistoryView {
            filter: filter.to_string(),
            filter_label: filter.label().to_string(),
            games: sorted.into_iter().map(GameSummary::from).collect(),
            diagnostics,
        })
    }

    #[instrument(skip(self))]
    pub async fn recent_activity(&self) -> Result<RecentActivity, HistoryError> {
        let recent = self.repository.latest(self.recent_limit).await?;
        let total_games = self.repository.count().await?;

        Ok(RecentActivity {
            total_games,
            recent: recent.iter().map(RecentGame::from).collect(),
        })
    }

    /// Final standings and per-player statistics for one game
    #[instrument(skip(self))]
    pub async fn game_detail(&self, game_id: &str) -> Result<GameDetail, HistoryError> {
        let game = self
            .repository
            .get(game_id)
            .await?
            .ok_or_else(|| HistoryError::NotFound(format!("game '{}'", game_id)))?;

        let mut diagnostics = Vec::new();

        let resolved = resolve_standings(&game);
        if let Some(err) = resolved.inconsistency {
            warn!(%err, "Recorded winner disagrees with legs won");
            diagnostics.push(err.to_string());
        }

        let standings = resolved
            .standings
            .into_iter()
            .map(|standing| StandingView {
                is_winner: is_winner(&game, &standing.player.id),
                rank: standing.rank,
                player: standing.player,
                legs_won: standing.legs_won,
            })
            .collect();

        for player in players_missing_stats(&game) {
            warn!(player_id = %player.id, "No statistics recorded for player");
            diagnostics.push(format!(
                "no statistics recorded for player '{}'",
                player.id
            ));
        }

        let mut display = summarize_game(&game);
        let player_stats = game
            .players
            .iter()
            .filter_map(|player| {
                display.remove(&player.id).map(|stats| PlayerStatsView {
                    player: player.clone(),
                    stats,
                })
            })
            .collect();

        Ok(GameDetail {
            title: format!("{} Game", game.game_type.label()),
            date_label: format_date_label(&game.completed_at),
            best_of: game.rules.best_of,
            game_type: game.game_type,
            standings,
            player_stats,
            diagnostics,
            id: game.id,
        })
    }
}
