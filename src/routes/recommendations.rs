use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::RecommendationResponse,
    routes::AppState,
    services::validate,
};

/// Raw pagination parameters; parsed by the validator so bad values get a 422
#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Handler for film recommendations endpoint
///
/// Path and query rejections (bad UTF-8, repeated keys) are reported as
/// invalid input, same as values that fail to parse.
pub async fn recommendations(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    path: Result<Path<String>, PathRejection>,
    params: Result<Query<RecommendationParams>, QueryRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Path(film_id) = path?;
    let Query(params) = params?;

    let query = validate(
        &film_id,
        params.limit.as_deref(),
        params.offset.as_deref(),
    )?;

    tracing::info!(
        request_id = %request_id,
        film_id = query.film_id,
        limit = query.page.limit,
        offset = query.page.offset,
        "Processing recommendations request"
    );

    let response = state.pipeline.run(query).await?;

    tracing::info!(
        request_id = %request_id,
        recommendations = response.recommendations.len(),
        "Recommendations completed"
    );

    Ok(Json(response))
}
