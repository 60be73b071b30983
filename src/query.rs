//! Search query generation.
//!
//! Three phrasing variants per show name, most specific first:
//! season + episode as words, the compact `SxxEyy` code, then a
//! season-agnostic episode query as the broadest net.

use crate::metadata::ShowInfo;

/// Relevance-sorted, unrestricted time range, capped result count.
const SEARCH_PARAMS: &str = "sort=relevance&t=all&limit=100";

/// A generated search query and the request URL derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Quoted exact-match terms as typed into the search box.
    pub query: String,
    /// Fully-encoded search request URL.
    pub url: String,
}

/// Build the full query fan-out: three phrasing variants per name, names in
/// the order given. No deduplication across names; fan-out = 3 x |names|.
#[must_use]
pub fn generate_queries(
    search_base: &str,
    names: &[String],
    season: u32,
    episode: u32,
) -> Vec<SearchQuery> {
    names
        .iter()
        .flat_map(|name| {
            [
                format!("\"{name}\" \"Season {season}\" \"Episode {episode}\" \"Discussion\""),
                format!("\"{name}\" \"S{season:02}E{episode:02}\" \"Discussion\""),
                format!("\"{name}\" \"Episode {episode}\" \"Discussion\""),
            ]
        })
        .map(|query| {
            let url = format!(
                "{search_base}/search.json?q={}&{SEARCH_PARAMS}",
                urlencoding::encode(&query)
            );
            SearchQuery { query, url }
        })
        .collect()
}

/// Convenience wrapper over [`generate_queries`] for a resolved show.
#[must_use]
pub fn queries_for_show(
    search_base: &str,
    show: &ShowInfo,
    season: u32,
    episode: u32,
) -> Vec<SearchQuery> {
    generate_queries(search_base, &show.all_names(), season, episode)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.reddit.com";

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn single_name_yields_three_phrasings_in_order() {
        let queries = generate_queries(BASE, &names(&["Show"]), 1, 3);
        assert_eq!(queries.len(), 3);
        assert_eq!(
            queries[0].query,
            r#""Show" "Season 1" "Episode 3" "Discussion""#
        );
        assert_eq!(queries[1].query, r#""Show" "S01E03" "Discussion""#);
        assert_eq!(queries[2].query, r#""Show" "Episode 3" "Discussion""#);
    }

    #[test]
    fn urls_embed_encoded_query_and_fixed_params() {
        let queries = generate_queries(BASE, &names(&["Show"]), 1, 3);
        assert_eq!(
            queries[1].url,
            "https://www.reddit.com/search.json?\
             q=%22Show%22%20%22S01E03%22%20%22Discussion%22\
             &sort=relevance&t=all&limit=100"
        );
    }

    #[test]
    fn compact_code_zero_pads_both_coordinates() {
        let queries = generate_queries(BASE, &names(&["Show"]), 2, 5);
        assert!(queries[1].query.contains("\"S02E05\""));

        let queries = generate_queries(BASE, &names(&["Show"]), 12, 103);
        assert!(queries[1].query.contains("\"S12E103\""));
    }

    #[test]
    fn fan_out_is_three_per_name_without_dedup() {
        let queries = generate_queries(BASE, &names(&["Foo", "Bar", "Foo"]), 1, 1);
        assert_eq!(queries.len(), 9);
        // Name order is preserved; duplicates fan out again.
        assert!(queries[0].query.starts_with("\"Foo\""));
        assert!(queries[3].query.starts_with("\"Bar\""));
        assert!(queries[6].query.starts_with("\"Foo\""));
    }

    #[test]
    fn names_with_special_characters_are_percent_encoded() {
        let queries = generate_queries(BASE, &names(&["Tom & Jerry"]), 1, 1);
        assert!(queries[0].url.contains("Tom%20%26%20Jerry"));
    }

    #[test]
    fn queries_for_show_uses_canonical_then_aliases() {
        let show = ShowInfo {
            canonical_name: "Foo".to_string(),
            aliases: vec!["Bar".to_string()],
            season_count: 1,
        };
        let queries = queries_for_show(BASE, &show, 1, 1);
        assert_eq!(queries.len(), 6);
        assert!(queries[0].query.starts_with("\"Foo\""));
        assert!(queries[3].query.starts_with("\"Bar\""));
    }
}
