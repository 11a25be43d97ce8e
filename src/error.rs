use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid GitHub URL format. Use: https://github.com/owner/repo (got: {0})")]
    InvalidRepoUrl(String),

    #[error("Issue #{number} not found in {repo}")]
    IssueNotFound { repo: String, number: u64 },

    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("LLM API error: {0}")]
    LlmApi(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Fetch errors are the only ones shown to the end user unmodified;
    /// everything else is absorbed into the heuristic fallback.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidRepoUrl(_) | Error::IssueNotFound { .. } | Error::GitHubApi(_)
        )
    }
}
