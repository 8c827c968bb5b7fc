//! Repository trait for link store data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the token-to-URL mapping.
///
/// The store is append-only for the lifetime of the process: entries are
/// created exactly once and there is no update or delete operation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new mapping entry.
    ///
    /// The uniqueness check and the insert are a single atomic step: when the
    /// token is already present the call fails with
    /// [`AppError::AliasConflict`] and the existing entry is left untouched.
    /// Two concurrent calls can therefore never both claim the same token.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds an entry by its token.
    ///
    /// Returns `Ok(None)` when no entry exists for the token. Read-only.
    async fn find_by_token(&self, token: &str) -> Result<Option<Link>, AppError>;
}
