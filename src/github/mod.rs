pub mod types;

pub use types::{PullRequest, RepoSlug};

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument, warn};

const GITHUB_API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "pr-digest";

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("GitHub API request failed: {0}")]
    ApiRequest(#[from] reqwest::Error),

    #[error("Invalid GitHub repository URL: {0}")]
    InvalidRepositoryUrl(String),
}

/// Resolve the owner and repository name out of a configured repository URL.
///
/// Strips at most one trailing slash, splits on `/`, and takes the last two
/// segments. Anything shorter than `scheme://host/owner/repo` (5 segments,
/// counting the empty one after `scheme:`) is rejected.
pub fn parse_repo_url(url: &str) -> Result<RepoSlug, GitHubError> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let parts: Vec<&str> = trimmed.split('/').collect();
    if parts.len() < 5 {
        return Err(GitHubError::InvalidRepositoryUrl(url.to_string()));
    }

    Ok(RepoSlug {
        owner: parts[parts.len() - 2].to_string(),
        name: parts[parts.len() - 1].to_string(),
    })
}

/// Thin client for the GitHub REST API list-pulls endpoint.
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(GITHUB_API_BASE.to_string(), token)
    }

    /// Point the client at a different API base. Used by tests.
    pub fn with_base_url(base_url: String, token: Option<String>) -> Self {
        GitHubClient {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    /// Fetch the open pull requests of one repository.
    ///
    /// A non-200 response is logged and treated as "no open PRs"; only
    /// transport failures surface as errors. No pagination: whatever the
    /// first page returns is the result.
    #[instrument(skip(self), fields(owner = %slug.owner, repo = %slug.name))]
    pub async fn fetch_open_pulls(&self, slug: &RepoSlug) -> Result<Vec<PullRequest>, GitHubError> {
        let url = format!(
            "{}/repos/{}/{}/pulls?state=open",
            self.base_url, slug.owner, slug.name
        );

        let mut request = self.http.get(&url).header("User-Agent", USER_AGENT);
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {token}"));
        }

        debug!("fetching open pull requests");
        let response = request.send().await?;

        if response.status() != StatusCode::OK {
            warn!(status = %response.status(), "failed to fetch open pull requests");
            return Ok(Vec::new());
        }

        let pulls = response.json::<Vec<PullRequest>>().await?;
        debug!(open_prs = pulls.len(), "received pull request list");
        Ok(pulls)
    }
}
