use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::shared::validation::ValidationErrors;
use serde_json::json;

/// Erros devolvidos pelos handlers HTTP
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid id: {0}")]
    InvalidId(String),

    #[error("record not found")]
    NotFound,

    #[error("invalid anti-forgery token")]
    InvalidAntiforgeryToken,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidId(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Registro não encontrado" })),
            )
                .into_response(),
            ApiError::InvalidAntiforgeryToken => (
                StatusCode::FORBIDDEN,
                Json(json!({ "error": "Token anti-forgery inválido ou expirado" })),
            )
                .into_response(),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "error": "Envie PUT, ou POST com _method=PUT" })),
            )
                .into_response(),
            // 422 com os erros por campo, para o form reexibir ao lado dos inputs
            ApiError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response()
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Erro interno do servidor" })),
                )
                    .into_response()
            }
        }
    }
}
