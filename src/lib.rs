//! `threadlink` - Reddit episode discussion resolver
//!
//! Resolves a television episode identifier (`tt<imdb>:<season>:<episode>`)
//! to the single most relevant Reddit discussion thread.
//!
//! # Pipeline
//!
//! - **Identifier parsing**: `tt0903747:2:5` → show id + episode coordinates
//! - **Metadata resolution**: canonical show name and aliases scraped from
//!   the IMDb title page
//! - **Query fan-out**: three phrasing variants per show name, fetched in
//!   parallel
//! - **Ranking**: weighted heuristic scorer over the merged search results
//!
//! # Example
//!
//! ```rust,no_run
//! use threadlink::{DiscussionResolver, Endpoints};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let resolver = DiscussionResolver::from_endpoints(Endpoints::default())?;
//!     let response = resolver.resolve("tt0903747:2:5").await;
//!     match response.streams.first() {
//!         Some(stream) => println!("{}", stream.external_url),
//!         None => println!("no discussion thread found"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod addon;
pub mod episode;
pub mod error;
pub mod http_client;
pub mod metadata;
pub mod query;
pub mod ranker;
pub mod search;

pub use addon::{manifest, DiscussionResolver, Endpoints, Manifest, StreamLink, StreamsResponse};
pub use episode::EpisodeRef;
pub use error::Error;
pub use http_client::HttpClient;
pub use metadata::{extract_show_info, ImdbMetadata, MetadataSource, ShowInfo};
pub use query::{generate_queries, queries_for_show, SearchQuery};
pub use ranker::{rank_candidates, score_candidate, ScoredCandidate, ACCEPT_THRESHOLD};
pub use search::{CandidatePost, RedditSearch, SearchSource};

/// Version of threadlink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
