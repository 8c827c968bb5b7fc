//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Form payload for `POST /shorten`.
///
/// Missing fields deserialize to their empty defaults so that validation
/// happens in the service, not at extraction time.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[serde(default, rename = "longURL")]
    pub long_url: String,

    /// Optional caller-chosen token; empty means "generate one".
    #[serde(default, rename = "customName")]
    pub custom_name: Option<String>,
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "shortURL")]
    pub short_url: String,
}
