use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("portfolio-server/", env!("CARGO_PKG_VERSION"));

/// Subset of the GitHub repository payload we care about.
#[derive(Debug, Default, Deserialize)]
struct GitHubRepo {
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
}

/// What `/api/github-stats` returns to the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
}

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("failed to reach GitHub API: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Whether `segment` can be an owner or repository name.
///
/// GitHub names use ASCII letters, digits, `-`, `_` and `.`; `.` and `..`
/// alone would walk the API path instead of naming a repository.
pub fn is_valid_name(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build GitHub HTTP client ({}), using defaults", e);
                reqwest::Client::new()
            });

        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn repo_url(&self, repo: &str) -> String {
        format!("{}/repos/{}", self.api_url, repo)
    }

    /// Fetch star and fork counts for `repo` (`name` or `owner/name`).
    ///
    /// Only transport failures are errors. An unexpected status or an
    /// undecodable body yields zero counts.
    pub async fn fetch_stats(&self, repo: &str) -> Result<RepoStats, GitHubError> {
        let url = self.repo_url(repo);
        debug!("Fetching repository stats from {}", url);

        let mut request = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("token {}", token));
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("GitHub API returned {} for {}", status, repo);
        }

        let body = response.bytes().await?;
        let repo_data: GitHubRepo = serde_json::from_slice(&body).unwrap_or_else(|e| {
            warn!("Ignoring undecodable GitHub response for {}: {}", repo, e);
            GitHubRepo::default()
        });

        Ok(RepoStats {
            stars: repo_data.stargazers_count,
            forks: repo_data.forks_count,
        })
    }
}
