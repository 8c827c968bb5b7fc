//! Link entity representing a token-to-URL mapping.

use chrono::{DateTime, Utc};

/// A single entry in the link store.
///
/// Maps a short token (either system-generated or a caller-supplied custom
/// name) to the original long URL. The target URL is stored verbatim and is
/// never validated or normalized. Entries are created exactly once and live
/// for the remainder of the process.
#[derive(Debug, Clone)]
pub struct Link {
    pub token: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(token: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            token,
            target_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping entry.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub token: String,
    pub target_url: String,
}
