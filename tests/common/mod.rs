#![allow(dead_code)]

use std::sync::Arc;

use linkstore::application::services::LinkService;
use linkstore::infrastructure::persistence::MemoryLinkRepository;
use linkstore::state::AppState;

pub const TOKEN_LENGTH: usize = 12;

pub fn create_test_state() -> AppState {
    let store = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(store.clone(), TOKEN_LENGTH));

    AppState {
        link_service,
        store,
    }
}

pub async fn create_test_link(state: &AppState, token: &str, url: &str) {
    state
        .link_service
        .create_link(url.to_string(), Some(token.to_string()))
        .await
        .unwrap();
}
