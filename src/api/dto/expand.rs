//! DTOs for the token expansion endpoint.

use serde::{Deserialize, Serialize};

/// Form payload for `POST /expand`.
#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    /// The short token to look up.
    #[serde(default, rename = "shortURL")]
    pub short_url: String,
}

/// Response carrying the original URL for a token.
#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    #[serde(rename = "longURL")]
    pub long_url: String,
}
