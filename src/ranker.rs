//! Candidate scoring and ranking.
//!
//! All search requests are issued concurrently and merged by concatenation;
//! a failed request contributes an empty candidate list rather than
//! aborting the batch. Merged candidates are scored against the show names
//! and episode coordinates, filtered by the acceptance threshold, and
//! ordered by a stable descending sort so ties keep first-seen order.

use std::cmp::Ordering;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::query::SearchQuery;
use crate::search::{CandidatePost, SearchSource};

/// Minimum score (exclusive) a candidate must exceed to be eligible.
pub const ACCEPT_THRESHOLD: f64 = 50.0;

/// Maximum contribution of the engagement bonus.
const UPVOTE_BONUS_CAP: f64 = 20.0;

/// Phrases marking speculation threads rather than episode discussions.
/// The penalty applies once however many of these match.
const PENALTY_PHRASES: [&str; 3] = ["pre-episode", "prediction", "theory"];

/// A candidate post together with its computed score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub post: CandidatePost,
    pub score: f64,
}

/// Score a candidate against the show names and episode coordinates.
///
/// Returns -1 when no show name appears in the title; such candidates are
/// never eligible regardless of their other fields.
#[must_use]
pub fn score_candidate(
    post: &CandidatePost,
    show_names: &[String],
    season: u32,
    episode: u32,
) -> f64 {
    let title = post.title.to_lowercase();
    let subreddit = post.subreddit.to_lowercase();

    if !show_names
        .iter()
        .any(|name| title.contains(&name.to_lowercase()))
    {
        return -1.0;
    }

    let mut score = 0.0;

    let episode_markers = [
        format!("episode {episode}"),
        format!("ep {episode}"),
        format!("e{episode:02}"),
    ];
    if episode_markers
        .iter()
        .any(|marker| title.contains(marker.as_str()))
    {
        score += 30.0;
    }

    if title.contains(&format!("season {season}")) || title.contains(&format!("s{season:02}")) {
        score += 20.0;
    }

    if title.contains("episode discussion") {
        score += 30.0;
    }

    if subreddit == "anime" {
        score += 20.0;
    } else if subreddit == "television" {
        score += 15.0;
    }

    if PENALTY_PHRASES
        .iter()
        .any(|phrase| title.contains(phrase))
    {
        score -= 20.0;
    }

    score += (post.upvotes / 10.0).min(UPVOTE_BONUS_CAP);

    score
}

/// Score, filter, and order the merged candidate set.
///
/// Stable descending sort: on equal scores the candidate seen earlier wins.
#[must_use]
pub fn rank_candidates(
    candidates: Vec<CandidatePost>,
    show_names: &[String],
    season: u32,
    episode: u32,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|post| {
            let score = score_candidate(&post, show_names, season, episode);
            ScoredCandidate { post, score }
        })
        .filter(|candidate| candidate.score > ACCEPT_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Fan out all search requests, merge the results, and return the URL of
/// the best-scoring candidate above the acceptance threshold.
pub async fn find_discussion(
    source: &dyn SearchSource,
    queries: &[SearchQuery],
    show_names: &[String],
    season: u32,
    episode: u32,
) -> Option<String> {
    let fetches = queries.iter().map(|query| async move {
        match source.search(&query.url).await {
            Ok(posts) => posts,
            Err(error) => {
                warn!(query = %query.query, %error, "search request failed");
                Vec::new()
            }
        }
    });

    let candidates: Vec<CandidatePost> =
        join_all(fetches).await.into_iter().flatten().collect();
    debug!(candidates = candidates.len(), "merged search results");

    let ranked = rank_candidates(candidates, show_names, season, episode);
    let best = ranked.first()?;
    info!(
        url = %best.post.url,
        score = best.score,
        title = %best.post.title,
        subreddit = %best.post.subreddit,
        "best match"
    );
    Some(best.post.url.clone())
}
