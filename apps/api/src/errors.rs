use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::embedding_client::{EmbeddingError, EmbeddingErrorKind};
use crate::matching::evaluator::EvaluateError;

/// Seconds a client should wait before resubmitting while the model loads.
const MODEL_LOADING_RETRY_AFTER_SECS: &str = "20";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Evaluate(EvaluateError::Embedding(e)) => embedding_error_parts(e),
            AppError::Evaluate(EvaluateError::Similarity(e)) => {
                tracing::error!("Scoring error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SCORING_ERROR",
                    format!("An error occurred: {e}"),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        if status == StatusCode::SERVICE_UNAVAILABLE {
            return (
                status,
                [(header::RETRY_AFTER, MODEL_LOADING_RETRY_AFTER_SECS)],
                body,
            )
                .into_response();
        }

        (status, body).into_response()
    }
}

fn embedding_error_parts(e: &EmbeddingError) -> (StatusCode, &'static str, String) {
    match e.kind() {
        EmbeddingErrorKind::Config => {
            tracing::error!("Embedding configuration error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                format!("An error occurred: {e}"),
            )
        }
        EmbeddingErrorKind::Transient => (
            StatusCode::SERVICE_UNAVAILABLE,
            "MODEL_LOADING",
            e.to_string(),
        ),
        EmbeddingErrorKind::Service => {
            tracing::error!("Embedding service error: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "EMBEDDING_SERVICE_ERROR",
                format!("An error occurred: {e}"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::similarity::SimilarityError;

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::Validation("too short".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_credential_maps_to_500() {
        let err = AppError::from(EvaluateError::from(EmbeddingError::MissingCredential));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_model_loading_maps_to_503_with_retry_after() {
        let err = AppError::from(EvaluateError::from(EmbeddingError::ModelLoading));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(response.headers()[header::RETRY_AFTER], "20");
    }

    #[test]
    fn test_service_error_maps_to_502() {
        let err = AppError::from(EvaluateError::from(EmbeddingError::Api {
            status: 500,
            message: "boom".to_string(),
        }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_scoring_error_maps_to_500() {
        let err = AppError::from(EvaluateError::from(SimilarityError::ZeroNorm));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
