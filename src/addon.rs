//! Discussion stream resolution — the addon-facing capability.
//!
//! [`DiscussionResolver::resolve`] is the single inbound operation: an
//! episode identifier in, a list of zero or one external stream links out.
//! Every internal failure collapses into the empty list; callers never see
//! an error.
//!
//! # Example
//!
//! ```rust,no_run
//! use threadlink::{DiscussionResolver, Endpoints};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let resolver = DiscussionResolver::from_endpoints(Endpoints::default())?;
//! let response = resolver.resolve("tt0903747:2:5").await;
//! for stream in &response.streams {
//!     println!("{}", stream.external_url);
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::episode::EpisodeRef;
use crate::error::Error;
use crate::http_client::HttpClient;
use crate::metadata::{ImdbMetadata, MetadataSource, ShowInfo};
use crate::query::generate_queries;
use crate::ranker::find_discussion;
use crate::search::{RedditSearch, SearchSource};

/// External hosts the resolver talks to.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Base URL of the metadata host; show pages live under `/title/<id>/`.
    pub metadata_base: String,
    /// Base URL of the search host exposing `/search.json`.
    pub search_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            metadata_base: "https://www.imdb.com".to_string(),
            search_base: "https://www.reddit.com".to_string(),
        }
    }
}

/// A single resolvable stream entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StreamLink {
    /// Display label for the entry.
    pub title: String,
    /// URL the player should hand off to an external browser.
    pub external_url: String,
    /// Always `"open-external"`: the link is opened, not played.
    pub behavior_hint: String,
}

/// Wire response for a resolve call.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StreamsResponse {
    pub streams: Vec<StreamLink>,
}

/// Addon self-description served alongside the capability.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: &'static str,
    pub version: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub resources: Vec<&'static str>,
    pub types: Vec<&'static str>,
    pub id_prefixes: Vec<&'static str>,
    pub catalogs: Vec<&'static str>,
}

/// Build the addon manifest.
#[must_use]
pub fn manifest() -> Manifest {
    Manifest {
        id: "org.threadlink.redditlink",
        version: crate::VERSION,
        name: "Reddit Discussion Redirector",
        description: "Provides a direct link to the Reddit discussion for TV series episodes",
        resources: vec!["stream"],
        types: vec!["series"],
        id_prefixes: vec!["tt"],
        catalogs: vec![],
    }
}

/// Stateless resolver wiring the pipeline components together.
///
/// Holds only injected collaborators; nothing survives between calls.
pub struct DiscussionResolver {
    metadata: Arc<dyn MetadataSource>,
    search: Arc<dyn SearchSource>,
    search_base: String,
}

impl DiscussionResolver {
    /// Build a resolver over the production adapters.
    pub fn from_endpoints(endpoints: Endpoints) -> Result<Self, Error> {
        let client = HttpClient::new()?;
        Ok(Self::new(
            Arc::new(ImdbMetadata::new(client.clone(), endpoints.metadata_base)),
            Arc::new(RedditSearch::new(client)),
            endpoints.search_base,
        ))
    }

    /// Build a resolver over arbitrary source implementations.
    pub fn new(
        metadata: Arc<dyn MetadataSource>,
        search: Arc<dyn SearchSource>,
        search_base: impl Into<String>,
    ) -> Self {
        Self {
            metadata,
            search,
            search_base: search_base.into(),
        }
    }

    /// Resolve an episode identifier to at most one discussion stream link.
    ///
    /// All failure paths (unparseable identifier, unreachable metadata,
    /// failed searches, nothing above the threshold) produce an empty
    /// stream list.
    pub async fn resolve(&self, identifier: &str) -> StreamsResponse {
        let episode = match EpisodeRef::parse(identifier) {
            Ok(episode) => episode,
            Err(error) => {
                warn!(%identifier, %error, "unresolvable identifier");
                return StreamsResponse::default();
            }
        };

        let show = match self.metadata.show_info(&episode.show_id).await {
            Ok(show) => show,
            Err(error) => {
                warn!(show_id = %episode.show_id, %error, "metadata degraded to fallback");
                ShowInfo::fallback(&episode.show_id)
            }
        };
        info!(
            show = %show.canonical_name,
            aliases = show.aliases.len(),
            season = episode.season,
            episode = episode.episode,
            "resolving discussion"
        );

        let names = show.all_names();
        let queries =
            generate_queries(&self.search_base, &names, episode.season, episode.episode);
        debug!(queries = queries.len(), "generated search fan-out");

        match find_discussion(
            self.search.as_ref(),
            &queries,
            &names,
            episode.season,
            episode.episode,
        )
        .await
        {
            Some(url) => StreamsResponse {
                streams: vec![StreamLink {
                    title: "Open Reddit Discussion".to_string(),
                    external_url: url,
                    behavior_hint: "open-external".to_string(),
                }],
            },
            None => {
                info!("no discussion thread cleared the threshold");
                StreamsResponse::default()
            }
        }
    }

    /// Resolve with an explicit content type.
    ///
    /// Only `"series"` requests are answered; everything else yields an
    /// empty list without touching the network.
    pub async fn resolve_typed(&self, content_type: &str, identifier: &str) -> StreamsResponse {
        if content_type != "series" {
            debug!(%content_type, "unsupported content type");
            return StreamsResponse::default();
        }
        self.resolve(identifier).await
    }
}
