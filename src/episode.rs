//! Episode identifier parsing.
//!
//! Callers supply a composite identifier of the form
//! `tt<imdb digits>:<season>:<episode>`. Parsing failure is terminal for a
//! request: the pipeline answers with an empty result instead of guessing.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

static EPISODE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(tt\d+):(\d+):(\d+)$").expect("valid episode id pattern"));

/// Episode coordinates parsed from a composite identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRef {
    /// IMDb-shaped show identifier (`tt` followed by digits).
    pub show_id: String,
    /// Season number, at least 1.
    pub season: u32,
    /// Episode number within the season, at least 1.
    pub episode: u32,
}

impl EpisodeRef {
    /// Parse `"tt<digits>:<season>:<episode>"`.
    ///
    /// Season and episode must both be at least 1.
    pub fn parse(id: &str) -> Result<Self, Error> {
        let format_error = || Error::Format(id.to_string());

        let caps = EPISODE_ID.captures(id).ok_or_else(format_error)?;
        let season: u32 = caps[2].parse().map_err(|_| format_error())?;
        let episode: u32 = caps[3].parse().map_err(|_| format_error())?;
        if season == 0 || episode == 0 {
            return Err(format_error());
        }

        Ok(Self {
            show_id: caps[1].to_string(),
            season,
            episode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_identifier() {
        let parsed = EpisodeRef::parse("tt1234567:2:5").unwrap();
        assert_eq!(parsed.show_id, "tt1234567");
        assert_eq!(parsed.season, 2);
        assert_eq!(parsed.episode, 5);
    }

    #[test]
    fn parses_multi_digit_coordinates() {
        let parsed = EpisodeRef::parse("tt0903747:12:103").unwrap();
        assert_eq!(parsed.season, 12);
        assert_eq!(parsed.episode, 103);
    }

    #[test]
    fn rejects_missing_episode_part() {
        assert!(matches!(
            EpisodeRef::parse("tt1234567:2"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn rejects_non_imdb_prefix() {
        assert!(EpisodeRef::parse("nm1234567:2:5").is_err());
        assert!(EpisodeRef::parse("1234567:2:5").is_err());
    }

    #[test]
    fn rejects_non_numeric_parts() {
        assert!(EpisodeRef::parse("tt1234567:two:5").is_err());
        assert!(EpisodeRef::parse("tt1234567:2:five").is_err());
    }

    #[test]
    fn rejects_surrounding_garbage() {
        assert!(EpisodeRef::parse(" tt1234567:2:5").is_err());
        assert!(EpisodeRef::parse("tt1234567:2:5#extra").is_err());
    }

    #[test]
    fn rejects_zero_coordinates() {
        assert!(EpisodeRef::parse("tt1234567:0:5").is_err());
        assert!(EpisodeRef::parse("tt1234567:2:0").is_err());
    }

    #[test]
    fn rejects_overflowing_numbers() {
        assert!(EpisodeRef::parse("tt1234567:99999999999:1").is_err());
    }

    #[test]
    fn rejects_empty_and_movie_shaped_ids() {
        assert!(EpisodeRef::parse("").is_err());
        assert!(EpisodeRef::parse("tt1234567").is_err());
    }
}
