use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Errors surfaced by the link store.
///
/// Every variant is terminal from the store's perspective: failures are
/// returned synchronously to the caller and never retried or swallowed.
/// The only internally retried condition is a random-token collision during
/// generation, which is never surfaced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// A link was requested without a target URL.
    #[error("no URL specified")]
    EmptyTarget,

    /// A lookup was requested without a token.
    #[error("no token specified")]
    EmptyToken,

    /// The requested custom name is already mapped to another URL.
    #[error("custom name {0} already exists")]
    AliasConflict(String),

    /// No mapping exists for the given token.
    #[error("URL not found")]
    NotFound,
}

impl AppError {
    fn code(&self) -> &'static str {
        match self {
            AppError::EmptyTarget => "empty_target",
            AppError::EmptyToken => "empty_token",
            AppError::AliasConflict(_) => "alias_conflict",
            AppError::NotFound => "not_found",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyTarget | AppError::EmptyToken => StatusCode::BAD_REQUEST,
            AppError::AliasConflict(_) => StatusCode::CONFLICT,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    fn details(&self) -> Value {
        match self {
            AppError::AliasConflict(name) => json!({ "customName": name }),
            _ => json!({}),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorInfo {
                code: self.code(),
                message: self.to_string(),
                details: self.details(),
            },
        };

        (self.status(), Json(body)).into_response()
    }
}
