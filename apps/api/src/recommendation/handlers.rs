//! Axum route handlers for the Recommendation API.

use std::collections::BTreeSet;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::activity::ActivityView;
use crate::recommendation::ranking::RankedActivity;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub career_text: String,
    pub category: i64,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub activities: Vec<ActivityView>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub career_text: String,
    pub keywords: BTreeSet<String>,
    pub results: Vec<RankedActivity>,
    pub generated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Ranked shortlist of catalog activities for a career interest within one category.
pub async fn handle_recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<RecommendResponse>, AppError> {
    let Json(request) = payload?;
    let activities = state
        .engine
        .recommend(&request.career_text, request.category)
        .await?;

    Ok(Json(RecommendResponse { activities }))
}

/// POST /api/v1/recommendations/explain
///
/// Same pipeline, but returns the per-dimension scores and rationale behind the order.
pub async fn handle_explain(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, AppError> {
    let Json(request) = payload?;
    let recommendation = state
        .engine
        .explain(&request.career_text, request.category)
        .await?;

    Ok(Json(ExplainResponse {
        career_text: recommendation.intent.raw_text,
        keywords: recommendation.intent.keywords,
        results: recommendation.ranked,
        generated_at: Utc::now(),
    }))
}
