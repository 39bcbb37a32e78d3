//! GitHub REST v3 implementation of the `gh_profile` client contract.

use std::fmt::Display;

use async_trait::async_trait;
use gh_profile::api::{Client, Error, LanguageBytes, RateLimit, Repo, Result, User};
use log::debug;
use reqwest::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

mod builder;
mod payload;

pub use builder::{GithubClientBuilder, DEFAULT_GITHUB_URL};

/// API default page size cap; a single page is requested, no pagination.
const MAX_REPOS_PAGE: u32 = 100;

pub struct GithubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) github_url: String,
}

/// Repository as listed for a user, carrying the counters the rankers sort on.
#[derive(Clone, Debug, PartialEq)]
pub struct GithubRepo {
    pub id: u64,
    pub name: String,
    pub owner: String,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks: u32,
    pub size: u32,
    pub fork: bool,
}

impl Repo for GithubRepo {
    fn name(&self) -> &str {
        &self.name
    }

    fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    fn stars(&self) -> u32 {
        self.stargazers_count
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

impl Display for GithubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{}\tstars: {}\tforks: {}\tsize: {} KB\tlanguage: {}",
            self.name,
            self.stargazers_count,
            self.forks,
            self.size,
            self.language.as_deref().unwrap_or("-")
        ))
    }
}

#[async_trait]
impl Client for GithubClient {
    type REPO = GithubRepo;

    async fn user(&self, username: &str) -> Result<User> {
        let request_url = format!("{}/users/{}", self.github_url, username);
        debug!("GET {}", request_url);
        let response = self.client.get(request_url).send().await?;
        read_response::<payload::User>(response).await.map(User::from)
    }

    async fn repos(&self, username: &str) -> Result<Vec<GithubRepo>> {
        let request_url = format!("{}/users/{}/repos", self.github_url, username);
        debug!("GET {}", request_url);
        let response = self
            .client
            .get(request_url)
            .query(&[("per_page", MAX_REPOS_PAGE.to_string())])
            .send()
            .await?;
        let repos = read_response::<Vec<payload::Repo>>(response).await?;
        Ok(repos.into_iter().map(GithubRepo::from).collect())
    }

    async fn languages(&self, repo: &GithubRepo) -> Result<LanguageBytes> {
        let request_url = format!("{}/repos/{}/{}/languages", self.github_url, repo.owner, repo.name);
        debug!("GET {}", request_url);
        let response = self.client.get(request_url).send().await?;
        read_response::<LanguageBytes>(response).await
    }

    async fn rate_limit(&self) -> Result<RateLimit> {
        let request_url = format!("{}/rate_limit", self.github_url);
        debug!("GET {}", request_url);
        let response = self.client.get(request_url).send().await?;
        read_response::<payload::RateLimitBody>(response)
            .await
            .map(|body| RateLimit::from(body.resources.core))
    }
}

async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        StatusCode::FORBIDDEN => Err(Error::QuotaExceeded),
        status if status.is_success() => Ok(response.json::<T>().await?),
        status => Err(Error::UnexpectedStatus(status.as_u16())),
    }
}
