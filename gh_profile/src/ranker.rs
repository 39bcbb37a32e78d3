use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt::Display;

use derive_more::Constructor;

use crate::api::{Repo, SortKey};

/// Repository browser view length.
pub const TOP_REPOS_LIMIT: usize = 12;
/// Most-starred chart view length.
pub const MOST_STARRED_LIMIT: usize = 5;

/// Star total of all ranked repositories sharing one primary language.
#[derive(Clone, Constructor, Debug, PartialEq)]
pub struct LanguageStars {
    pub language: String,
    pub stars: u64,
}

impl Display for LanguageStars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}\tstars: {}", self.language, self.stars))
    }
}

/// Non-fork repositories sorted descending by `sort`, truncated to `limit`.
/// The sort is stable, ties keep the order of the source list, which itself
/// is never mutated.
pub fn top_repos<R: Repo>(repos: &[R], sort: SortKey, limit: usize) -> Vec<&R> {
    let mut ranked: Vec<&R> = repos.iter().filter(|repo| !repo.is_fork()).collect();
    ranked.sort_by_key(|repo| Reverse(sort_value(*repo, sort)));
    ranked.truncate(limit);
    ranked
}

fn sort_value<R: Repo>(repo: &R, sort: SortKey) -> u32 {
    match sort {
        SortKey::Stars => repo.stars(),
        SortKey::Forks => repo.forks(),
        SortKey::Size => repo.size(),
    }
}

/// Groups starred non-fork repositories by primary language and sums their
/// stars. Shares the fork filter with [`top_repos`] but feeds the doughnut
/// view, not the language byte statistics.
pub fn stars_per_language<R: Repo>(repos: &[R]) -> Vec<LanguageStars> {
    let mut totals: BTreeMap<&str, u64> = BTreeMap::new();
    for repo in repos.iter().filter(|repo| !repo.is_fork() && repo.stars() > 0) {
        if let Some(language) = repo.language() {
            *totals.entry(language).or_insert(0) += repo.stars() as u64;
        }
    }
    totals
        .into_iter()
        .map(|(language, stars)| LanguageStars::new(language.to_string(), stars))
        .collect()
}

/// Tests

#[cfg(test)]
#[derive(Constructor)]
struct TestRepo {
    name: &'static str,
    language: Option<&'static str>,
    stars: u32,
    forks: u32,
    size: u32,
    fork: bool,
}

#[cfg(test)]
impl Repo for TestRepo {
    fn name(&self) -> &str {
        self.name
    }
    fn language(&self) -> Option<&str> {
        self.language
    }
    fn stars(&self) -> u32 {
        self.stars
    }
    fn forks(&self) -> u32 {
        self.forks
    }
    fn size(&self) -> u32 {
        self.size
    }
    fn is_fork(&self) -> bool {
        self.fork
    }
}

#[cfg(test)]
fn fixture() -> Vec<TestRepo> {
    vec![
        TestRepo::new("alpha", Some("Rust"), 50, 5, 120, false),
        TestRepo::new("beta", Some("Go"), 30, 10, 300, false),
        TestRepo::new("gamma", None, 99, 0, 10, false),
        TestRepo::new("delta", Some("Rust"), 1000, 400, 9000, true),
    ]
}

#[cfg(test)]
fn names<'a>(ranked: &[&'a TestRepo]) -> Vec<&'a str> {
    ranked.iter().map(|repo| repo.name).collect()
}

#[test]
fn top_repos_by_stars_test() {
    let repos = fixture();
    let ranked = top_repos(&repos, SortKey::Stars, TOP_REPOS_LIMIT);
    assert_eq!(names(&ranked), vec!["gamma", "alpha", "beta"], "forks are excluded");
}

#[test]
fn top_repos_by_forks_test() {
    let repos = fixture();
    let ranked = top_repos(&repos, SortKey::Forks, TOP_REPOS_LIMIT);
    assert_eq!(names(&ranked), vec!["beta", "alpha", "gamma"]);
}

#[test]
fn top_repos_by_size_test() {
    let repos = fixture();
    let ranked = top_repos(&repos, SortKey::Size, TOP_REPOS_LIMIT);
    assert_eq!(names(&ranked), vec!["beta", "alpha", "gamma"]);
}

#[test]
fn top_repos_truncates_test() {
    let repos = fixture();
    let ranked = top_repos(&repos, SortKey::Stars, 2);
    assert_eq!(names(&ranked), vec!["gamma", "alpha"]);
}

#[test]
fn top_repos_tie_keeps_list_order_test() {
    let repos = vec![
        TestRepo::new("second", None, 10, 0, 0, false),
        TestRepo::new("first", None, 10, 0, 0, false),
    ];
    let ranked = top_repos(&repos, SortKey::Stars, TOP_REPOS_LIMIT);
    assert_eq!(names(&ranked), vec!["second", "first"]);
}

#[test]
fn top_repos_does_not_mutate_test() {
    let repos = fixture();
    top_repos(&repos, SortKey::Forks, TOP_REPOS_LIMIT);
    assert_eq!(names(&repos.iter().collect::<Vec<_>>()), vec!["alpha", "beta", "gamma", "delta"]);
}

#[test]
fn stars_per_language_test() {
    let mut repos = fixture();
    // Starless repository, filtered out even with a language.
    repos.push(TestRepo::new("epsilon", Some("Rust"), 0, 1, 5, false));
    let totals = stars_per_language(&repos);
    assert_eq!(
        totals,
        vec![
            LanguageStars::new("Go".to_string(), 30),
            LanguageStars::new("Rust".to_string(), 50),
        ],
        "forks and unlabeled repositories do not count"
    );
}
