use serde::Deserialize;

#[derive(Deserialize, Debug)]
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

impl From<User> for gh_profile::api::User {
    fn from(user: User) -> Self {
        gh_profile::api::User {
            login: user.login,
            name: user.name,
            avatar_url: user.avatar_url,
            html_url: user.html_url,
            bio: user.bio,
            company: user.company,
            location: user.location,
            created_at: user.created_at,
            public_repos: user.public_repos,
            followers: user.followers,
            following: user.following,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub owner: RepoOwner,
    pub html_url: String,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks: u32,
    pub size: u32,
    pub fork: bool,
}

#[derive(Deserialize, Debug)]
pub struct RepoOwner {
    pub login: String,
}

impl From<Repo> for crate::GithubRepo {
    fn from(repo: Repo) -> Self {
        crate::GithubRepo {
            id: repo.id,
            name: repo.name,
            owner: repo.owner.login,
            html_url: repo.html_url,
            description: repo.description,
            language: repo.language,
            stargazers_count: repo.stargazers_count,
            forks: repo.forks,
            size: repo.size,
            fork: repo.fork,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct RateLimitBody {
    pub resources: RateLimitResources,
}

#[derive(Deserialize, Debug)]
pub struct RateLimitResources {
    pub core: RateLimitResource,
}

#[derive(Deserialize, Debug)]
pub struct RateLimitResource {
    pub limit: u32,
    pub remaining: u32,
}

impl From<RateLimitResource> for gh_profile::api::RateLimit {
    fn from(resource: RateLimitResource) -> Self {
        gh_profile::api::RateLimit::new(resource.remaining, resource.limit)
    }
}
