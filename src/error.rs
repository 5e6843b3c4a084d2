use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Film not found: {0}")]
    FilmNotFound(i64),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(reason) => {
                tracing::debug!(reason = %reason, "Rejected request input");
                (StatusCode::UNPROCESSABLE_ENTITY, "Invalid ID")
            }
            AppError::FilmNotFound(id) => {
                tracing::debug!(film_id = id, "Film not found");
                (StatusCode::NOT_FOUND, "Film not found")
            }
            AppError::RouteNotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            AppError::Database(_)
            | AppError::HttpClient(_)
            | AppError::ExternalService(_)
            | AppError::Internal(_) => {
                // Detail stays in the logs, clients only get the generic message
                tracing::error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error occured")
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidInput(rejection.body_text())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_invalid_input_is_unprocessable() {
        let status = status_of(AppError::InvalidInput("id".to_string()));
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_variants() {
        assert_eq!(status_of(AppError::FilmNotFound(7)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(AppError::RouteNotFound("/nope".to_string())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_internal_failures_map_to_500() {
        assert_eq!(
            status_of(AppError::Database(sqlx::Error::RowNotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::ExternalService("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
