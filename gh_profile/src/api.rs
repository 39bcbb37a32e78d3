use std::collections::BTreeMap;

use async_trait::async_trait;
use derive_more::Constructor;
use strum_macros::{Display, EnumString};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("User or repository not found")]
    NotFound,
    #[error("API rate limit exceeded")]
    QuotaExceeded,
    #[error("Unexpected response status: {0}")]
    UnexpectedStatus(u16),
    // the only reason of `reqwest` dependency..
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// HTTP-style category reported to consumers: 404, 403 or 400.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::NotFound => 404,
            Error::QuotaExceeded => 403,
            _ => 400,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Per-repository language byte breakdown, and the accumulated totals.
pub type LanguageBytes = BTreeMap<String, u64>;

/// Field a repository ranking is sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortKey {
    Stars,
    Forks,
    Size,
}

pub trait Repo: Send + Sync {
    fn name(&self) -> &str;
    /// Primary language, when GitHub's heuristic designates one.
    fn language(&self) -> Option<&str>;
    fn stars(&self) -> u32;
    fn forks(&self) -> u32;
    /// Size in kilobytes.
    fn size(&self) -> u32;
    fn is_fork(&self) -> bool;
}

/// Public profile of a user.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub created_at: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// Remaining request quota of the core API resource.
#[derive(Clone, Constructor, Debug, PartialEq)]
pub struct RateLimit {
    pub remaining: u32,
    pub limit: u32,
}

#[async_trait]
pub trait Client: Send + Sync {
    type REPO: Repo;

    async fn user(&self, username: &str) -> Result<User>;

    async fn repos(&self, username: &str) -> Result<Vec<Self::REPO>>;

    async fn languages(&self, repo: &Self::REPO) -> Result<LanguageBytes>;

    async fn rate_limit(&self) -> Result<RateLimit>;
}

/// Tests

#[test]
fn status_code_test() {
    assert_eq!(Error::NotFound.status_code(), 404);
    assert_eq!(Error::QuotaExceeded.status_code(), 403);
    assert_eq!(Error::UnexpectedStatus(500).status_code(), 400);
}

#[test]
fn sort_key_parse_test() {
    use std::str::FromStr;
    assert_eq!(SortKey::from_str("stars"), Ok(SortKey::Stars));
    assert_eq!(SortKey::from_str("forks"), Ok(SortKey::Forks));
    assert_eq!(SortKey::from_str("size"), Ok(SortKey::Size));
    assert_eq!(format!("{}", SortKey::Stars), "stars");
    assert!(SortKey::from_str("watchers").is_err());
}
