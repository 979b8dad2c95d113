use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration loaded from repos.json.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Repositories to poll for open pull requests.
    /// An absent `repos` key parses as an empty list.
    #[serde(default)]
    pub repos: Vec<RepoEntry>,
}

/// One configured repository. Fields are optional at parse time so that a
/// single malformed entry can be skipped instead of failing the whole file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoEntry {
    /// Display label used in the digest. May repeat across entries.
    #[serde(default)]
    pub name: Option<String>,
    /// Repository host URL, e.g. https://github.com/org/repo
    #[serde(default)]
    pub url: Option<String>,
}

impl RepoEntry {
    /// Returns the (name, url) pair if both are present and non-empty.
    /// Empty strings count as missing.
    pub fn validated(&self) -> Option<(&str, &str)> {
        match (self.name.as_deref(), self.url.as_deref()) {
            (Some(name), Some(url)) if !name.is_empty() && !url.is_empty() => Some((name, url)),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from the given JSON file.
    ///
    /// A missing or unparseable file is the one fatal error of the program.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Default config location: repos.json next to the executable, falling
    /// back to the current directory when the executable path is unknown.
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("repos.json")))
            .unwrap_or_else(|| PathBuf::from("repos.json"))
    }
}

/// Process-environment settings, read once at startup and passed explicitly
/// to the components that need them.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Optional GitHub API token for authenticated requests.
    pub github_token: Option<String>,
    /// Slack incoming-webhook URL. Required unless running with --dry-run.
    pub webhook_url: Option<String>,
}

impl Settings {
    pub fn from_env() -> Settings {
        Settings {
            github_token: std::env::var("GITHUB_TOKEN").ok(),
            webhook_url: std::env::var("SLACK_WEBHOOK_URL").ok(),
        }
    }
}
