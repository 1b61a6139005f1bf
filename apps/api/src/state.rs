use std::sync::Arc;

use crate::config::Config;
use crate::recommendation::engine::RecommendationEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the catalog store and the compiled scoring rules; read-only after startup.
    pub engine: Arc<RecommendationEngine>,
    pub config: Config,
}
