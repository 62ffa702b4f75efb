use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::CATALOG_VERSION;
use super::domain::UserProfile;
use super::ranking::describe_categories;
use super::views::DashboardTab;
use super::RecommendationEngine;

/// Router builder exposing the recommendation endpoints.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .route("/api/v1/recommendations/catalog", get(catalog_handler))
        .with_state(engine)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendationQuery {
    #[serde(default)]
    pub(crate) tab: Option<String>,
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    Query(query): Query<RecommendationQuery>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response {
    let tab = query
        .tab
        .as_deref()
        .map(DashboardTab::parse)
        .unwrap_or_default();
    let report = engine.recommend(&profile, &tab);
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<RecommendationEngine>>) -> Response {
    let payload = json!({
        "catalog_version": CATALOG_VERSION,
        "top_picks": engine.settings().top_picks,
        "categories": describe_categories(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
