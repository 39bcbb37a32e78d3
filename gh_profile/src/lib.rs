//! GitHub profile statistics
//!
//! # Overview
//!
//! Library behind a public-profile view: given a user's repositories it
//! accumulates per-repository language byte counts into one ranked
//! percentage breakdown, and ranks the repositories themselves by stars,
//! forks or size.
//!
//! For every repository declaring a primary language the aggregator fetches
//! the full language byte breakdown and folds it into a per-language total.
//! Totals are converted to integer percentages with a fixed display color
//! per language and sorted by descending share. Independently, the ranker
//! filters out forks and produces the top-N views a profile page renders
//! (repository browser, most starred, stars per language).
//!
//! The `api` feature exposes the client contract and error taxonomy the
//! `gh_profile_github_client` crate implements; the `stats` feature carries
//! the aggregation and ranking on top of it.

#[cfg(feature = "api")]
pub mod api;

#[cfg(feature = "stats")]
mod aggregator;
#[cfg(feature = "stats")]
mod colors;
#[cfg(feature = "stats")]
mod ranker;

#[cfg(feature = "stats")]
pub use aggregator::{language_stats, LanguageAggregator, LanguageStat};
#[cfg(feature = "stats")]
pub use colors::{language_color, DEFAULT_LANGUAGE_COLOR, LANGUAGE_COLORS};
#[cfg(feature = "stats")]
pub use ranker::{stars_per_language, top_repos, LanguageStars, MOST_STARRED_LIMIT, TOP_REPOS_LIMIT};
