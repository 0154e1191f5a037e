use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::{query::most_recently_added, validation::validate_record, GameHistory, HistoryError};

/// Append-only store of completed games, kept in insertion order
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Validates and appends one record. A rejected record leaves the store untouched.
    async fn append(&self, record: GameHistory) -> Result<(), HistoryError>;

    /// Snapshot of every record in insertion order
    async fn all(&self) -> Result<Vec<GameHistory>, HistoryError>;

    async fn get(&self, game_id: &str) -> Result<Option<GameHistory>, HistoryError>;

    async fn count(&self) -> Result<usize, HistoryError>;

    /// The last `limit` records appended, newest first
    async fn latest(&self, limit: usize) -> Result<Vec<GameHistory>, HistoryError> {
        let games = self.all().await?;
        Ok(most_recently_added(&games, limit).into_iter().cloned().collect())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryHistoryRepository {
    games: Arc<RwLock<Vec<GameHistory>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    #[instrument(skip(self, record), fields(game_id = %record.id))]
    async fn append(&self, record: GameHistory) -> Result<(), HistoryError> {
        if let Err(err) = validate_record(&record) {
            warn!(%err, "Rejected game record");
            return Err(err);
        }

        // Writers are serialized by the lock, so the duplicate check and push are atomic
        let mut games = self.games.write().await;
        if games.iter().any(|existing| existing.id == record.id) {
            warn!("Rejected duplicate game id");
            return Err(HistoryError::Validation(format!(
                "game id '{}' is already recorded",
                record.id
            )));
        }

        games.push(record);
        info!(total_games = games.len(), "Game recorded");
        Ok(())
    }

    async fn all(&self) -> Result<Vec<GameHistory>, HistoryError> {
        let games = self.games.read().await;
        Ok(games.clone())
    }

    #[instrument(skip(self))]
    async fn get(&self, game_id: &str) -> Result<Option<GameHistory>, HistoryError> {
        let games = self.games.read().await;
        let game = games.iter().find(|g| g.id == game_id).cloned();
        if game.is_none() {
            debug!("Game not found in memory");
        }
        Ok(game)
    }

    async fn count(&self) -> Result<usize, HistoryError> {
        Ok(self.games.read().await.len())
    }

    async fn latest(&self, limit: usize) -> Result<Vec<GameHistory>, HistoryError> {
        let games = self.games.read().await;
        Ok(most_recently_added(&games, limit).into_iter().cloned().collect())
    }
}
