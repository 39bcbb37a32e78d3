use gh_profile::api::{RateLimit, SortKey};
use gh_profile::LanguageStat;
use gh_profile_app::fetch_profile;
use rand::seq::SliceRandom;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::{mock_languages, mock_rate_limit, mock_repos, mock_user, repo_body, test_args, USERNAME};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn happy_path_report() {
    let server = MockServer::start().await;

    mock_rate_limit(&server, 4999, 5000).await;
    mock_user(&server, USERNAME).await;
    mock_repos(
        &server,
        USERNAME,
        &[
            repo_body(USERNAME, 1, "alpha", Some("Rust"), 50, 5, 120, false),
            repo_body(USERNAME, 2, "beta", Some("Go"), 30, 10, 300, false),
            repo_body(USERNAME, 3, "gamma", None, 99, 0, 10, false),
            repo_body(USERNAME, 4, "delta", Some("Rust"), 1000, 400, 9000, true),
        ],
    )
    .await;
    mock_languages(&server, USERNAME, "alpha", &[("Rust", 7000), ("Shell", 1000)]).await;
    mock_languages(&server, USERNAME, "beta", &[("Go", 2000)]).await;
    // Forks still feed the byte statistics, only the rankings drop them.
    mock_languages(&server, USERNAME, "delta", &[("Rust", 2000)]).await;
    // No declared language, the breakdown must never be requested.
    Mock::given(method("GET"))
        .and(path(format!("/repos/{}/gamma/languages", USERNAME)))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(0)
        .mount(&server)
        .await;

    let report = fetch_profile(test_args(&server, USERNAME)).await.unwrap();

    assert!(report.error.is_none(), "no sub-fetch should fail: {:?}", report.error);
    assert_eq!(report.rate_limit, Some(RateLimit::new(4999, 5000)));

    let user = report.user.as_ref().expect("profile data");
    assert_eq!(user.login, USERNAME);
    assert_eq!(user.name.as_deref(), Some("The Octocat"));
    assert_eq!(user.bio, None);
    assert_eq!(user.followers, 9999);

    // 12000 bytes total: Rust 9000, Go 2000, Shell 1000.
    assert_eq!(
        report.language_stats,
        vec![
            LanguageStat::new("Rust".to_string(), 75, "#dea584".to_string()),
            LanguageStat::new("Go".to_string(), 17, "#00ADD8".to_string()),
            LanguageStat::new("Shell".to_string(), 8, "#89e051".to_string()),
        ]
    );

    let names = |ranked: Vec<&github_client::GithubRepo>| -> Vec<String> {
        ranked.into_iter().map(|repo| repo.name.clone()).collect()
    };
    assert_eq!(names(report.top_repos(SortKey::Stars)), vec!["gamma", "alpha", "beta"]);
    assert_eq!(names(report.top_repos(SortKey::Forks)), vec!["beta", "alpha", "gamma"]);
    assert_eq!(names(report.top_repos(SortKey::Size)), vec!["beta", "alpha", "gamma"]);
    assert_eq!(names(report.most_starred()), vec!["gamma", "alpha", "beta"]);

    let stars_per_language = report.stars_per_language();
    assert_eq!(stars_per_language.len(), 2);
    assert_eq!(stars_per_language[0].language, "Go");
    assert_eq!(stars_per_language[0].stars, 30);
    assert_eq!(stars_per_language[1].language, "Rust");
    assert_eq!(stars_per_language[1].stars, 50);

    // Re-sorting is a view, the fetched list keeps the API order.
    let api_order: Vec<&str> = report.repos.iter().map(|repo| repo.name.as_str()).collect();
    assert_eq!(api_order, vec!["alpha", "beta", "gamma", "delta"]);
}

#[tokio::test]
async fn single_go_repository() {
    let server = MockServer::start().await;

    mock_rate_limit(&server, 59, 60).await;
    mock_user(&server, USERNAME).await;
    mock_repos(&server, USERNAME, &[repo_body(USERNAME, 1, "a", Some("Go"), 1, 0, 10, false)]).await;
    mock_languages(&server, USERNAME, "a", &[("Go", 100)]).await;

    let report = fetch_profile(test_args(&server, USERNAME)).await.unwrap();

    assert!(report.error.is_none());
    assert_eq!(
        report.language_stats,
        vec![LanguageStat::new("Go".to_string(), 100, "#00ADD8".to_string())]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn ranking_limits() {
    let server = MockServer::start().await;

    const REPOS_COUNT: u32 = 30;

    let mut stars: Vec<u32> = (1..=REPOS_COUNT).map(|index| index * 10).collect();
    stars.shuffle(&mut rand::thread_rng());

    let mut bodies: Vec<String> = stars
        .iter()
        .enumerate()
        .map(|(index, stars)| {
            repo_body(USERNAME, index as u32, &format!("repo_{}", index), None, *stars, index as u32, 100, false)
        })
        .collect();
    bodies.push(repo_body(USERNAME, REPOS_COUNT, "forked", None, 100_000, 0, 1, true));

    mock_rate_limit(&server, 4999, 5000).await;
    mock_user(&server, USERNAME).await;
    mock_repos(&server, USERNAME, &bodies).await;

    let report = fetch_profile(test_args(&server, USERNAME)).await.unwrap();

    assert!(report.error.is_none());
    assert!(report.language_stats.is_empty(), "no declared languages, nothing to chart");

    let mut expected: Vec<(u32, String)> = stars
        .iter()
        .enumerate()
        .map(|(index, stars)| (*stars, format!("repo_{}", index)))
        .collect();
    expected.sort_by(|a, b| b.0.cmp(&a.0));

    let top = report.top_repos(SortKey::Stars);
    assert_eq!(top.len(), 12);
    let top_names: Vec<&str> = top.iter().map(|repo| repo.name.as_str()).collect();
    let expected_names: Vec<&str> = expected.iter().take(12).map(|(_, name)| name.as_str()).collect();
    assert_eq!(top_names, expected_names);

    let most_starred = report.most_starred();
    assert_eq!(most_starred.len(), 5);
    assert_eq!(most_starred[0].name, expected[0].1);
    assert!(
        !report.top_repos(SortKey::Stars).iter().any(|repo| repo.fork),
        "forks never appear in a ranking"
    );
}
