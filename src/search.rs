//! Reddit search adapter.
//!
//! Each search request is independent: transport failures and malformed
//! response envelopes are reported per query, and malformed items inside a
//! valid envelope decode to empty posts that the scorer rejects naturally.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Error;
use crate::http_client::HttpClient;

/// Base URL permalinks resolve against, regardless of which host served
/// the search.
const POST_BASE_URL: &str = "https://www.reddit.com";

/// A single forum post returned by a search query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePost {
    /// Absolute URL of the discussion thread.
    pub url: String,
    /// Post title.
    pub title: String,
    /// Subreddit the post was made in.
    pub subreddit: String,
    /// Net upvote count; may be negative.
    pub upvotes: f64,
}

/// Source of ranked text posts for a prepared search URL.
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Run one search request and return its posts.
    async fn search(&self, url: &str) -> Result<Vec<CandidatePost>, Error>;
}

/// Reddit `search.json` implementation of [`SearchSource`].
pub struct RedditSearch {
    client: HttpClient,
}

impl RedditSearch {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchSource for RedditSearch {
    async fn search(&self, url: &str) -> Result<Vec<CandidatePost>, Error> {
        let body = self
            .client
            .fetch_text(url)
            .await
            .map_err(Error::SearchFetch)?;

        let posts = decode_listing(&body)?;
        debug!(%url, count = posts.len(), "search returned");
        Ok(posts)
    }
}

/// Decode a search response body into candidate posts.
///
/// The listing envelope must parse; inside it, missing fields default and a
/// wholly malformed item becomes an empty post, so one bad item cannot
/// abort the batch.
pub fn decode_listing(body: &str) -> Result<Vec<CandidatePost>, Error> {
    let listing: Listing = serde_json::from_str(body).map_err(Error::SearchDecode)?;
    Ok(listing
        .data
        .children
        .into_iter()
        .map(decode_post)
        .collect())
}

fn decode_post(child: Value) -> CandidatePost {
    let data = child.get("data").cloned().unwrap_or(Value::Null);
    let post: RawPost = serde_json::from_value(data).unwrap_or_default();

    CandidatePost {
        url: format!("{POST_BASE_URL}{}", post.permalink),
        title: post.title,
        subreddit: post.subreddit,
        upvotes: post.score,
    }
}

// ============================================================================
// Search API response types
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct Listing {
    #[serde(default)]
    data: ListingData,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPost {
    permalink: String,
    title: String,
    subreddit: String,
    score: f64,
}
