use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::MemoryLinkRepository;

/// Shared application state injected into every handler.
///
/// The store and the service wrapping it are created once at startup and
/// passed by reference through the router, never accessed through a global.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub store: Arc<MemoryLinkRepository>,
}
