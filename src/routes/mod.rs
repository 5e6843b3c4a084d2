use axum::{
    http::{StatusCode, Uri},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    db::FilmStore,
    error::AppError,
    middleware::{make_span_with_request_id, request_id_middleware},
    services::{providers::ReviewProvider, RecommendationPipeline},
};

pub mod recommendations;

/// Shared application state
pub struct AppState {
    pub pipeline: RecommendationPipeline,
}

impl AppState {
    pub fn new(store: Arc<dyn FilmStore>, reviews: Arc<dyn ReviewProvider>) -> Self {
        Self {
            pipeline: RecommendationPipeline::new(store, reviews),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/films/:id/recommendations",
            get(recommendations::recommendations),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
        .with_state(Arc::new(state))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Catch-all for unmatched routes
async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
