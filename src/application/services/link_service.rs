//! Link creation and resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::token_generator::generate_token;

/// Service for creating and resolving shortened links.
///
/// Owns token generation and custom-name handling on top of the repository's
/// atomic insert.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    token_length: usize,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service generating tokens of `token_length`.
    pub fn new(repository: Arc<R>, token_length: usize) -> Self {
        Self {
            repository,
            token_length,
        }
    }

    /// Creates a mapping for `target_url` and returns the stored entry.
    ///
    /// A non-empty `custom_alias` claims exactly that token. A missing or
    /// empty alias means "generate one": random candidates are drawn until an
    /// insert wins.
    ///
    /// The generation loop carries no retry cap. With `52^token_length`
    /// possible tokens the expected number of draws stays ~1 until the store
    /// approaches saturation of the key space, so termination is guaranteed
    /// with probability 1 under any realistic load.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyTarget`] when `target_url` is empty
    /// - [`AppError::AliasConflict`] when a supplied alias is already mapped;
    ///   the existing entry is left untouched
    pub async fn create_link(
        &self,
        target_url: String,
        custom_alias: Option<String>,
    ) -> Result<Link, AppError> {
        if target_url.is_empty() {
            return Err(AppError::EmptyTarget);
        }

        if let Some(alias) = custom_alias.filter(|a| !a.is_empty()) {
            return self
                .repository
                .create(NewLink {
                    token: alias,
                    target_url,
                })
                .await;
        }

        loop {
            let candidate = generate_token(self.token_length);

            match self
                .repository
                .create(NewLink {
                    token: candidate,
                    target_url: target_url.clone(),
                })
                .await
            {
                Err(AppError::AliasConflict(taken)) => {
                    debug!("token collision on {taken}, resampling");
                }
                result => return result,
            }
        }
    }

    /// Resolves a token to its stored entry. Read-only.
    ///
    /// # Errors
    ///
    /// - [`AppError::EmptyToken`] when `token` is empty
    /// - [`AppError::NotFound`] when no mapping exists
    pub async fn resolve(&self, token: &str) -> Result<Link, AppError> {
        if token.is_empty() {
            return Err(AppError::EmptyToken);
        }

        self.repository
            .find_by_token(token)
            .await?
            .ok_or(AppError::NotFound)
    }
}
