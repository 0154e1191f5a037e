use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use dartlog::{app, AppState, HistoryRepository, HistoryService, InMemoryHistoryRepository};

use super::GameBuilder;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub repository: Arc<InMemoryHistoryRepository>,
    pub history_service: Arc<HistoryService>,
    pub router: Router,
}

pub struct TestSetupBuilder {
    recent_limit: usize,
    games: Vec<GameBuilder>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            recent_limit: 3,
            games: vec![],
        }
    }

    pub fn with_recent_limit(mut self, recent_limit: usize) -> Self {
        self.recent_limit = recent_limit;
        self
    }

    pub fn with_game(mut self, game: GameBuilder) -> Self {
        self.games.push(game);
        self
    }

    pub async fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryHistoryRepository::new());
        for game in &self.games {
            repository
                .append(game.build())
                .await
                .expect("seeded game should be valid");
        }

        let history_service = Arc::new(HistoryService::new(
            repository.clone(),
            self.recent_limit,
        ));
        let router = app(AppState::new(history_service.clone()));

        TestSetup {
            repository,
            history_service,
            router,
        }
    }
}

impl TestSetup {
    /// Sends a request through the router and decodes the JSON body
    pub async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_game(&self, game: &GameBuilder) -> (StatusCode, Value) {
        self.request(
            Request::builder()
                .method("POST")
                .uri("/games")
                .header("content-type", "application/json")
                .body(Body::from(game.to_json().to_string()))
                .unwrap(),
        )
        .await
    }
}
