//! HTTP server initialization and runtime setup.
//!
//! Builds the in-memory store, wires it into the router, and runs the Axum
//! server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::MemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// The store is created once here and lives until the process exits; every
/// handler reaches it through [`AppState`].
///
/// # Errors
///
/// Returns an error if:
/// - the listen address does not parse
/// - the server bind fails
/// - a server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(store.clone(), config.token_length));

    let state = AppState {
        link_service,
        store,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
