use gh_profile::api::SortKey;
use gh_profile_app::Args;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const USERNAME: &str = "octocat";

pub fn test_args(server: &MockServer, username: &str) -> Args {
    Args {
        username: username.to_string(),
        sort: SortKey::Stars,
        api_token: None,
        api_url: server.uri(),
        max_lang_req: 4,
    }
}

pub async fn mock_rate_limit(server: &MockServer, remaining: u32, limit: u32) {
    let body = format!(
        r#"{{ "resources": {{ "core": {{ "limit": {}, "remaining": {}, "reset": 1713108000, "used": 0 }} }} }}"#,
        limit, remaining
    );
    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

pub async fn mock_user(server: &MockServer, username: &str) {
    let body = format!(
        r#"{{
            "login": "{}",
            "name": "The Octocat",
            "avatar_url": "https://avatars.example/{}",
            "html_url": "https://github.com/{}",
            "bio": null,
            "company": "GitHub",
            "location": "San Francisco",
            "created_at": "2011-01-25T18:44:36Z",
            "public_repos": 8,
            "followers": 9999,
            "following": 9
        }}"#,
        username, username, username
    );
    Mock::given(method("GET"))
        .and(path(format!("/users/{}", username)))
        .and(header("Accept", "application/vnd.github.v3+json"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

pub fn repo_body(
    username: &str,
    id: u32,
    name: &str,
    language: Option<&str>,
    stars: u32,
    forks: u32,
    size: u32,
    fork: bool,
) -> String {
    let language = language.map(|language| format!(r#""{}""#, language)).unwrap_or_else(|| "null".to_string());
    format!(
        r#"{{
            "id": {},
            "name": "{}",
            "owner": {{ "login": "{}" }},
            "html_url": "https://github.com/{}/{}",
            "description": "Repository {}",
            "language": {},
            "stargazers_count": {},
            "forks": {},
            "size": {},
            "fork": {}
        }}"#,
        id, name, username, username, name, name, language, stars, forks, size, fork
    )
}

pub async fn mock_repos(server: &MockServer, username: &str, repos: &[String]) {
    let body = format!("[{}]", repos.join(","));
    Mock::given(method("GET"))
        .and(path(format!("/users/{}/repos", username)))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}

pub async fn mock_languages(server: &MockServer, username: &str, repo: &str, entries: &[(&str, u64)]) {
    let body = format!(
        "{{{}}}",
        entries
            .iter()
            .map(|(language, bytes)| format!(r#""{}": {}"#, language, bytes))
            .collect::<Vec<_>>()
            .join(",")
    );
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/{}/languages", username, repo)))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(server)
        .await;
}
