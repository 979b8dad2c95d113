mod config;
mod digest;
mod github;
mod slack;

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// PR Digest — fetches open pull requests for a configured list of GitHub
/// repositories and posts a summary to a Slack incoming webhook.
#[derive(Parser, Debug)]
#[command(name = "pr-digest", version, about)]
struct Cli {
    /// Path to the repository config file (defaults to repos.json next to
    /// the executable)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the digest to stdout instead of posting to Slack
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::Config::default_path);
    info!(path = %config_path.display(), "loading configuration");
    let config = config::Config::load(&config_path)?;

    if config.repos.is_empty() {
        info!("no repositories found in configuration");
        return Ok(());
    }

    let settings = config::Settings::from_env();
    let webhook_url = if cli.dry_run {
        None
    } else {
        match settings.webhook_url {
            Some(url) => Some(url),
            None => {
                error!("SLACK_WEBHOOK_URL is not set");
                return Ok(());
            }
        }
    };

    let client = github::GitHubClient::new(settings.github_token);
    let mut digest = digest::Digest::new();

    // Strictly sequential: one fetch at a time, config order preserved.
    for entry in &config.repos {
        let Some((name, url)) = entry.validated() else {
            warn!(?entry, "invalid repository entry in configuration, skipping");
            continue;
        };

        let slug = match github::parse_repo_url(url) {
            Ok(slug) => slug,
            Err(err) => {
                warn!(repo = name, %err, "skipping repository");
                continue;
            }
        };

        let pulls = match client.fetch_open_pulls(&slug).await {
            Ok(pulls) => pulls,
            Err(err) => {
                warn!(repo = name, %err, "fetching pull requests failed");
                Vec::new()
            }
        };

        digest.push(name, pulls);
    }

    let message = digest.format_message();
    match webhook_url {
        Some(url) => {
            info!("posting digest to Slack");
            let notifier = slack::SlackNotifier::new(url);
            if let Err(err) = notifier.post_digest(&message).await {
                error!(%err, "failed to deliver digest");
            }
        }
        None => println!("{message}"),
    }

    Ok(())
}
