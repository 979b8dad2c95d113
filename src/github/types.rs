use serde::Deserialize;

/// Owner/name pair resolved from a configured repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

/// One open pull request as returned by the GitHub list endpoint.
///
/// Only the two fields the digest renders are deserialized; both default
/// permissively when absent rather than rejecting the entry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR title, or a placeholder when the API omits it.
    #[serde(default = "default_title")]
    pub title: String,
    /// Web URL of the PR, or empty when the API omits it.
    #[serde(default)]
    pub html_url: String,
}

fn default_title() -> String {
    "No title".to_string()
}
