//! Show metadata resolution via IMDb title-page scraping.
//!
//! The title page is treated as opaque text: independent regex patterns
//! pull out the display title, season count, alternate titles, and original
//! title. The text matching is deliberately confined to this module so it
//! can be swapped for a structured source without touching query generation
//! or ranking.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::Error;
use crate::http_client::HttpClient;

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<title>(.*?) - IMDb</title>").expect("valid title pattern"));

static TRAILING_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)\s*$").expect("valid parenthetical pattern"));

static SEASON_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+season").expect("valid season pattern"));

static ALTERNATE_TITLES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""alternateTitles":\s*\[(.*?)\]"#).expect("valid alternate titles pattern")
});

static ORIGINAL_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""originalTitle":\s*"([^"]*)""#).expect("valid original title pattern")
});

/// Canonical show name plus alternative names usable during matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInfo {
    /// Display title with any trailing parenthetical (release year etc.)
    /// stripped.
    pub canonical_name: String,
    /// Discovery-ordered, deduplicated; never contains the canonical name.
    pub aliases: Vec<String>,
    /// Number of seasons, 1 if undeterminable.
    pub season_count: u32,
}

impl ShowInfo {
    /// Fallback used when the metadata document is unreachable or yields no
    /// title. The show id stands in as a degraded but non-empty search name.
    #[must_use]
    pub fn fallback(show_id: &str) -> Self {
        Self {
            canonical_name: show_id.to_string(),
            aliases: Vec::new(),
            season_count: 1,
        }
    }

    /// Canonical name followed by aliases, in query-generation order.
    #[must_use]
    pub fn all_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(1 + self.aliases.len());
        names.push(self.canonical_name.clone());
        names.extend(self.aliases.iter().cloned());
        names
    }
}

/// Source of show metadata keyed by show identifier.
///
/// Implementations report failures as errors; the pipeline converts every
/// failure into [`ShowInfo::fallback`] so downstream stages always run.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Resolve metadata for `show_id`.
    async fn show_info(&self, show_id: &str) -> Result<ShowInfo, Error>;
}

/// IMDb-backed [`MetadataSource`] scraping the public title page.
pub struct ImdbMetadata {
    client: HttpClient,
    base_url: String,
}

impl ImdbMetadata {
    /// Create a source rooted at `base_url` (show pages live under
    /// `/title/<id>/`).
    pub fn new(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MetadataSource for ImdbMetadata {
    async fn show_info(&self, show_id: &str) -> Result<ShowInfo, Error> {
        let url = format!("{}/title/{}/", self.base_url, show_id);
        debug!(%url, "fetching show metadata");

        let html = self
            .client
            .fetch_text(&url)
            .await
            .map_err(|source| Error::MetadataFetch {
                show_id: show_id.to_string(),
                source,
            })?;

        let info = extract_show_info(&html)
            .ok_or_else(|| Error::MetadataExtract(show_id.to_string()))?;

        debug!(
            show = %info.canonical_name,
            aliases = info.aliases.len(),
            seasons = info.season_count,
            "resolved show metadata"
        );
        Ok(info)
    }
}

/// Extract show metadata from raw document text.
///
/// Each pattern is independent: a missing season count or alias array only
/// affects its own field. Returns `None` when no title is present.
#[must_use]
pub fn extract_show_info(html: &str) -> Option<ShowInfo> {
    let raw_title = TITLE.captures(html)?.get(1)?.as_str();
    let canonical_name = TRAILING_PAREN.replace(raw_title, "").trim().to_string();
    if canonical_name.is_empty() {
        return None;
    }

    let season_count = SEASON_COUNT
        .captures(html)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1);

    let mut aliases = Vec::new();
    if let Some(caps) = ALTERNATE_TITLES.captures(html) {
        let literal = format!("[{}]", &caps[1]);
        match serde_json::from_str::<Vec<String>>(&literal) {
            Ok(titles) => {
                for title in titles {
                    push_unique(&mut aliases, title.trim().to_string());
                }
            }
            Err(error) => warn!(%error, "unparseable alternate titles array"),
        }
    }
    if let Some(caps) = ORIGINAL_TITLE.captures(html) {
        push_unique(&mut aliases, caps[1].trim().to_string());
    }

    // Common variations: spaces removed, all lowercase.
    push_unique(&mut aliases, canonical_name.split_whitespace().collect());
    push_unique(&mut aliases, canonical_name.to_lowercase());

    aliases.retain(|alias| alias != &canonical_name);

    Some(ShowInfo {
        canonical_name,
        aliases,
        season_count,
    })
}

fn push_unique(aliases: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !aliases.contains(&candidate) {
        aliases.push(candidate);
    }
}
