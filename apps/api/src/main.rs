mod catalog;
mod config;
mod db;
mod errors;
mod models;
mod recommendation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{ActivityStore, InMemoryActivityStore, PgActivityStore};
use crate::config::Config;
use crate::db::create_pool;
use crate::recommendation::engine::RecommendationEngine;
use crate::recommendation::rules::ScoringRules;
use crate::recommendation::scoring::Scorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing catalog source)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathways API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog store: Postgres when configured, otherwise the JSON seed
    let store = build_store(&config).await?;

    // Compile scoring rules once; shared read-only by every request
    let rules = ScoringRules::load(config.scoring_rules_path.as_deref())?;
    let scorer = Scorer::new(&rules)?;
    info!(
        "Scoring rules loaded ({})",
        config
            .scoring_rules_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string())
    );

    let engine = RecommendationEngine::new(store, scorer, config.store_timeout);

    // Build app state
    let state = AppState {
        engine: Arc::new(engine),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_store(config: &Config) -> Result<Arc<dyn ActivityStore>> {
    if let Some(database_url) = &config.database_url {
        let pool = create_pool(database_url, config.store_timeout).await?;
        info!("Using Postgres activity catalog");
        return Ok(Arc::new(PgActivityStore::new(pool)));
    }

    match &config.activity_seed_path {
        Some(path) => {
            let store = InMemoryActivityStore::from_json_file(path)?;
            if store.is_empty() {
                tracing::warn!("Seed catalog {} is empty", path.display());
            } else {
                info!("Using in-memory activity catalog ({} activities)", store.len());
            }
            Ok(Arc::new(store))
        }
        None => anyhow::bail!("No activity catalog configured"),
    }
}
