use clap::Parser;
use gh_profile::api::SortKey;
use secrecy::SecretString;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// GitHub login to summarize
    #[clap(env, parse(try_from_str=username_not_blank))]
    pub username: String,

    /// Repository ranking key
    #[clap(short, long, env, default_value = "stars")]
    pub sort: SortKey,

    /// API OAuth access token
    #[clap(short, long, env)]
    pub api_token: Option<SecretString>,

    /// Repository API URL
    #[clap(long, env, default_value = "https://api.github.com")]
    pub api_url: String,

    /// Maximal parallel repository language requests
    #[clap(long, env, default_value_t = 10, parse(try_from_str=max_lang_req_in_range))]
    pub max_lang_req: usize,
}

fn username_not_blank(value: &str) -> clap::Result<String, String> {
    if value.trim().is_empty() {
        return Err("Username must not be blank.".to_string());
    }
    Ok(value.to_string())
}

fn max_lang_req_in_range(value: &str) -> clap::Result<usize, String> {
    value.parse::<usize>().map_err(|err| format!("{}", err)).and_then(|value| {
        if value < 1 || value > 100 {
            return Err(format!("max_lang_req {} is not in range 1 .. 100.", value));
        }
        Ok(value)
    })
}

/// Tests

#[test]
fn username_not_blank_test() {
    assert!(username_not_blank("octocat").is_ok());
    assert!(username_not_blank("  ").is_err());
}

#[test]
fn max_lang_req_in_range_test() {
    assert_eq!(max_lang_req_in_range("10"), Ok(10));
    assert!(max_lang_req_in_range("0").is_err());
    assert!(max_lang_req_in_range("101").is_err());
    assert!(max_lang_req_in_range("ten").is_err());
}
