//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// Responds with `307 Temporary Redirect` to the stored target URL.
///
/// # Errors
///
/// Returns 404 Not Found when the token has no entry.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&token).await?;

    Ok(Redirect::temporary(&link.target_url))
}
