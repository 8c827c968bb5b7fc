//! Handler for the link shortening endpoint.

use axum::{Form, Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short token for a long URL.
///
/// # Endpoint
///
/// `POST /shorten` with form fields `longURL` and optional `customName`.
///
/// # Response
///
/// ```json
/// { "shortURL": "hQzXwkuLmvTc" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request when `longURL` is missing or empty
/// - 409 Conflict when `customName` is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(payload): Form<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state
        .link_service
        .create_link(payload.long_url, payload.custom_name)
        .await?;

    Ok(Json(ShortenResponse {
        short_url: link.token,
    }))
}
