//! Error taxonomy for the resolution pipeline.
//!
//! Every variant converges on the same caller-visible outcome (an empty
//! stream list); the distinction exists for internal diagnostics only.

use thiserror::Error;

/// Errors produced by the resolution pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The episode identifier does not match `tt<digits>:<season>:<episode>`.
    #[error("invalid episode identifier {0:?}")]
    Format(String),

    /// The metadata document could not be fetched (network failure or
    /// non-2xx status).
    #[error("metadata fetch failed for {show_id}")]
    MetadataFetch {
        show_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// The metadata document was fetched but contained no extractable title.
    #[error("no show title found in metadata document for {0}")]
    MetadataExtract(String),

    /// A single search request failed; isolated per query.
    #[error("search fetch failed")]
    SearchFetch(#[source] reqwest::Error),

    /// A search response was not a decodable listing; isolated per query.
    #[error("malformed search response")]
    SearchDecode(#[source] serde_json::Error),

    /// Transport-level error outside a specific pipeline stage
    /// (e.g. HTTP client construction).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
