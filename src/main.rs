use dartlog::{app, AppState, Config, HistoryService, InMemoryHistoryRepository};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dartlog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!(%err, "dartlog exited with an error");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    info!(?config, "Starting dartlog history service");

    let repository = Arc::new(InMemoryHistoryRepository::new());
    let history_service = Arc::new(HistoryService::new(repository, config.recent_limit));

    let seed = config.load_seed()?;
    if !seed.is_empty() {
        let stored = history_service.import_games(seed).await;
        info!(stored, "Seed games loaded");
    }

    let app = app(AppState::new(history_service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
