use std::fmt::Display;
use std::sync::Arc;

use derive_more::Constructor;
use futures::{stream, StreamExt};
use log::error;

use crate::api::{Client, LanguageBytes, Repo};
use crate::colors::language_color;

/// Share of one language in a user's accumulated source bytes.
#[derive(Clone, Constructor, Debug, PartialEq)]
pub struct LanguageStat {
    pub label: String,
    /// Integer percentage of the grand byte total, in `[0, 100]`.
    pub value: u32,
    pub color: String,
}

impl Display for LanguageStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}\t{}%\t{}", self.label, self.value, self.color))
    }
}

/// Accumulates per-repository language byte breakdowns into one total map.
pub struct LanguageAggregator<CLIENT> {
    client: Arc<CLIENT>,
    max_requests: usize,
}

impl<CLIENT> LanguageAggregator<CLIENT>
where
    CLIENT: Client,
{
    pub fn new(client: Arc<CLIENT>, max_requests: usize) -> Self {
        LanguageAggregator { client, max_requests }
    }

    /// Fetches the byte breakdown of every repository declaring a primary
    /// language, at most `max_requests` calls in flight. Repositories without
    /// one are skipped entirely. Breakdowns are collected first and folded in
    /// a single pass, so no two partial updates touch the map concurrently.
    pub async fn aggregate(&self, repos: &[CLIENT::REPO]) -> LanguageBytes {
        let breakdowns: Vec<LanguageBytes> = stream::iter(repos.iter().filter(|repo| repo.language().is_some()))
            .map(|repo| self.repo_languages(repo))
            .buffer_unordered(self.max_requests)
            .filter_map(|breakdown| async move { breakdown })
            .collect()
            .await;
        merge_breakdowns(breakdowns)
    }

    /// A failed breakdown fetch contributes zero instead of failing the run.
    async fn repo_languages(&self, repo: &CLIENT::REPO) -> Option<LanguageBytes> {
        match self.client.languages(repo).await {
            Ok(breakdown) => Some(breakdown),
            Err(err) => {
                error!("Failed to get languages of {}: {}", repo.name(), err);
                None
            }
        }
    }
}

fn merge_breakdowns(breakdowns: Vec<LanguageBytes>) -> LanguageBytes {
    let mut totals = LanguageBytes::new();
    for breakdown in breakdowns {
        for (language, bytes) in breakdown {
            *totals.entry(language).or_insert(0) += bytes;
        }
    }
    totals
}

/// Converts accumulated byte totals into percentage entries sorted by
/// descending share. Ties keep the alphabetical traversal order of the map.
/// An empty map yields an empty result; percentages are rounded
/// independently and need not sum to exactly 100.
pub fn language_stats(totals: &LanguageBytes) -> Vec<LanguageStat> {
    let grand_total: u64 = totals.values().sum();
    if grand_total == 0 {
        return Vec::new();
    }
    let mut stats: Vec<LanguageStat> = totals
        .iter()
        .map(|(label, bytes)| {
            LanguageStat::new(
                label.clone(),
                round_percentage(*bytes, grand_total),
                language_color(label).to_string(),
            )
        })
        .collect();
    stats.sort_by(|a, b| b.value.cmp(&a.value));
    stats
}

/// Integer percentage in `[0, 100]`, rounding half up.
fn round_percentage(bytes: u64, grand_total: u64) -> u32 {
    ((bytes * 200 + grand_total) / (2 * grand_total)) as u32
}

/// Tests

#[test]
fn round_percentage_test() {
    assert_eq!(round_percentage(100, 100), 100);
    assert_eq!(round_percentage(0, 100), 0);
    assert_eq!(round_percentage(1, 3), 33);
    assert_eq!(round_percentage(2, 3), 67);
    assert_eq!(round_percentage(1, 200), 1, "0.5% rounds half up");
    assert_eq!(round_percentage(199, 200), 100);
}

#[test]
fn merge_breakdowns_test() {
    let breakdowns = vec![
        [("Rust".to_string(), 7000), ("Shell".to_string(), 1000)].into_iter().collect(),
        [("Rust".to_string(), 2000)].into_iter().collect(),
        [("Go".to_string(), 2000)].into_iter().collect(),
    ];
    let totals = merge_breakdowns(breakdowns);
    let expected: LanguageBytes = [
        ("Go".to_string(), 2000),
        ("Rust".to_string(), 9000),
        ("Shell".to_string(), 1000),
    ]
    .into_iter()
    .collect();
    assert_eq!(totals, expected);
}

#[test]
fn language_stats_sorted_test() {
    let totals: LanguageBytes = [
        ("Go".to_string(), 1500),
        ("Rust".to_string(), 7500),
        ("Brainfuck".to_string(), 1000),
    ]
    .into_iter()
    .collect();
    let stats = language_stats(&totals);
    assert_eq!(
        stats,
        vec![
            LanguageStat::new("Rust".to_string(), 75, "#dea584".to_string()),
            LanguageStat::new("Go".to_string(), 15, "#00ADD8".to_string()),
            LanguageStat::new("Brainfuck".to_string(), 10, "#586069".to_string()),
        ]
    );
}

#[test]
fn language_stats_rounding_drift_test() {
    // Seven equal shares round to 14% each; the drift from 100 stays below
    // the number of entries.
    let totals: LanguageBytes = (0..7).map(|index| (format!("lang_{}", index), 10)).collect();
    let stats = language_stats(&totals);
    let sum: u32 = stats.iter().map(|stat| stat.value).sum();
    assert!(stats.iter().all(|stat| stat.value == 14));
    assert!((100 - sum as i64).unsigned_abs() <= stats.len() as u64);
}

#[test]
fn language_stats_tie_test() {
    let totals: LanguageBytes = [("Zig".to_string(), 100), ("Ada".to_string(), 100)].into_iter().collect();
    let labels: Vec<String> = language_stats(&totals).into_iter().map(|stat| stat.label).collect();
    assert_eq!(labels, vec!["Ada", "Zig"], "equal shares stay in alphabetical order");
}

#[test]
fn language_stats_empty_test() {
    assert!(language_stats(&LanguageBytes::new()).is_empty());
}
