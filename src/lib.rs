// Library crate for the darts game history service
// This file exposes the public API for integration tests

pub mod config;
pub mod history;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::{Config, ConfigError};
pub use history::{
    GameHistory, GameType, GameTypeFilter, HistoryError, HistoryRepository, HistoryService,
    InMemoryHistoryRepository,
};
pub use shared::{AppError, AppState};

use axum::Router;

/// Full application router with state attached
pub fn app(state: AppState) -> Router {
    history::router().with_state(state)
}
