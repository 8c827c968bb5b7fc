//! Handler for the token expansion endpoint.

use axum::{Form, Json, extract::State};

use crate::api::dto::expand::{ExpandRequest, ExpandResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short token.
///
/// # Endpoint
///
/// `POST /expand` with form field `shortURL`.
///
/// # Response
///
/// ```json
/// { "longURL": "https://example.com" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request when `shortURL` is missing or empty
/// - 404 Not Found when no mapping exists for the token
pub async fn expand_handler(
    State(state): State<AppState>,
    Form(payload): Form<ExpandRequest>,
) -> Result<Json<ExpandResponse>, AppError> {
    let link = state.link_service.resolve(&payload.short_url).await?;

    Ok(Json(ExpandResponse {
        long_url: link.target_url,
    }))
}
