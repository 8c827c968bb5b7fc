//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing page with the shorten form
//! - `POST /shorten`  - Create a short link
//! - `POST /expand`   - Resolve a token to its original URL
//! - `GET  /health`   - Service health report
//! - `GET  /{token}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{expand_handler, health_handler, redirect_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web::handlers::index_handler;

/// Constructs the application router with all routes and middleware.
///
/// Static paths win over the `/{token}` capture, so `shorten`, `expand`, and
/// `health` are effectively reserved tokens at the routing level.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_handler))
        .route("/expand", post(expand_handler))
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
