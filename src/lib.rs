use std::sync::Arc;

use gh_profile::api::{Client, Error, RateLimit, Result, SortKey, User};
use gh_profile::{
    language_stats, stars_per_language, top_repos, LanguageAggregator, LanguageStat, LanguageStars,
    MOST_STARRED_LIMIT, TOP_REPOS_LIMIT,
};
use github_client::{GithubClient, GithubClientBuilder, GithubRepo};
use log::{debug, info};

mod args;
pub use args::Args;

/// Everything a profile view renders for one user. The ranked views are
/// recomputed from the carried repository list on demand.
#[derive(Debug, Default)]
pub struct ProfileReport {
    pub user: Option<User>,
    pub language_stats: Vec<LanguageStat>,
    pub repos: Vec<GithubRepo>,
    pub rate_limit: Option<RateLimit>,
    pub error: Option<Error>,
}

impl ProfileReport {
    pub fn top_repos(&self, sort: SortKey) -> Vec<&GithubRepo> {
        top_repos(&self.repos, sort, TOP_REPOS_LIMIT)
    }

    pub fn most_starred(&self) -> Vec<&GithubRepo> {
        top_repos(&self.repos, SortKey::Stars, MOST_STARRED_LIMIT)
    }

    pub fn stars_per_language(&self) -> Vec<LanguageStars> {
        stars_per_language(&self.repos)
    }
}

/// Runs the whole profile query: quota gate first, then the profile lookup
/// concurrently with the repository list and its language aggregation.
/// Sub-fetch failures land in `ProfileReport::error` (first one wins, profile
/// lookup takes precedence); `Err` is reserved for failing to assemble the
/// client itself.
pub async fn fetch_profile(args: Args) -> Result<ProfileReport> {
    let mut builder = GithubClientBuilder::default().with_github_url(&args.api_url);
    if let Some(token) = args.api_token {
        builder = builder.try_with_token(token)?;
    }
    let client = Arc::new(builder.build()?);

    let rate_limit = check_rate_limit(client.as_ref()).await;
    if let Some(limit) = &rate_limit {
        if limit.remaining < 1 {
            info!("API quota exhausted: {} / {} requests left", limit.remaining, limit.limit);
            return Ok(ProfileReport {
                rate_limit,
                error: Some(Error::QuotaExceeded),
                ..ProfileReport::default()
            });
        }
    }

    let (user, pipeline) = tokio::join!(
        client.user(&args.username),
        repos_with_languages(client.clone(), &args.username, args.max_lang_req)
    );

    let mut report = ProfileReport {
        rate_limit,
        ..ProfileReport::default()
    };
    match user {
        Ok(user) => report.user = Some(user),
        Err(err) => report.error = Some(err),
    }
    match pipeline {
        Ok((repos, stats)) => {
            report.repos = repos;
            report.language_stats = stats;
        }
        Err(err) => {
            if report.error.is_none() {
                report.error = Some(err);
            }
        }
    }
    Ok(report)
}

/// The intra-pipeline ordering: the full repository list first, then the
/// bounded language fan-out over it. Ranking never runs on a zero byte total.
async fn repos_with_languages(
    client: Arc<GithubClient>,
    username: &str,
    max_lang_req: usize,
) -> Result<(Vec<GithubRepo>, Vec<LanguageStat>)> {
    let repos = client.repos(username).await?;
    let aggregator = LanguageAggregator::new(client, max_lang_req);
    let totals = aggregator.aggregate(&repos).await;
    let stats = if totals.is_empty() { Vec::new() } else { language_stats(&totals) };
    Ok((repos, stats))
}

/// A failed quota lookup is no gate at all, the query proceeds without one.
async fn check_rate_limit(client: &GithubClient) -> Option<RateLimit> {
    match client.rate_limit().await {
        Ok(rate_limit) => Some(rate_limit),
        Err(err) => {
            debug!("Rate limit lookup failed: {}", err);
            None
        }
    }
}
