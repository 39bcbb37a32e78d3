use clap::Parser;
use gh_profile::api::{Error, SortKey};
use gh_profile_app::{Args, ProfileReport};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    env_logger::init();
    let args = Args::parse();
    let sort = args.sort;

    let mut report = gh_profile_app::fetch_profile(args).await?;

    if let Some(rate_limit) = &report.rate_limit {
        println!("{} / {} requests left", rate_limit.remaining, rate_limit.limit);
    }
    if let Some(error) = report.error.take() {
        return Err(error);
    }

    print_report(&report, sort);
    Ok(())
}

fn print_report(report: &ProfileReport, sort: SortKey) {
    if let Some(user) = &report.user {
        println!();
        match &user.name {
            Some(name) => println!("{} ({})", user.login, name),
            None => println!("{}", user.login),
        }
        println!("{}", user.html_url);
        if let Some(bio) = &user.bio {
            println!("{}", bio);
        }
        if let Some(company) = &user.company {
            println!("company: {}", company);
        }
        if let Some(location) = &user.location {
            println!("location: {}", location);
        }
        println!(
            "repos: {}\tfollowers: {}\tfollowing: {}\tjoined: {}",
            user.public_repos, user.followers, user.following, user.created_at
        );
    }

    print_section("Top languages", &report.language_stats);
    print_section(&format!("Top repos by {}", sort), &report.top_repos(sort));
    print_section("Most starred", &report.most_starred());
    print_section("Stars per language", &report.stars_per_language());
}

fn print_section<T: std::fmt::Display>(title: &str, items: &[T]) {
    println!("\n{}", title);
    if items.is_empty() {
        println!("Nothing to see here!");
        return;
    }
    for item in items {
        println!("{}", item);
    }
}
