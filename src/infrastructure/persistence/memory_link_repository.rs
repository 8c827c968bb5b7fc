//! In-memory implementation of the link repository.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-wide in-memory store mapping short tokens to long URLs.
///
/// A single mutex serializes every read and write, so the check-then-insert
/// in [`create`](LinkRepository::create) is one critical section and all
/// calls observe a total order consistent with lock acquisition. The lock is
/// held only for map operations, never across an await point.
///
/// The mapping is memory-resident only; it is built at startup and torn down
/// implicitly at process exit.
pub struct MemoryLinkRepository {
    links: Mutex<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            links: Mutex::new(HashMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> usize {
        self.links.lock().len()
    }

    /// Returns true when no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.lock();

        if links.contains_key(&new_link.token) {
            return Err(AppError::AliasConflict(new_link.token));
        }

        let link = Link::new(new_link.token, new_link.target_url, Utc::now());
        links.insert(link.token.clone(), link.clone());

        debug!("stored {} -> {}", link.token, link.target_url);
        Ok(link)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.lock().get(token).cloned())
    }
}
