use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::github::paginator::Paginator;
use crate::models::{IssueData, RawComment, RawIssue};

/// Extracts `(owner, repo)` from a GitHub repository URL. Accepts
/// `https://` and `http://` forms as well as a bare `owner/repo` path;
/// trailing slashes are ignored.
pub fn parse_repo_url(url: &str) -> Result<(String, String)> {
    let trimmed = url
        .trim()
        .trim_end_matches('/')
        .trim_start_matches("https://github.com/")
        .trim_start_matches("http://github.com/");

    let parts: Vec<&str> = trimmed.split('/').filter(|p| !p.is_empty()).collect();
    if parts.len() < 2 {
        return Err(Error::InvalidRepoUrl(url.to_string()));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// The token is optional; anonymous requests work for public repos
    /// at a lower rate limit.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("issueassist/0.1"),
        );
        if let Some(token) = token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
        })
    }

    pub async fn get_issue(&self, owner: &str, repo: &str, number: u64) -> Result<RawIssue> {
        let url = format!("{}/repos/{}/{}/issues/{}", self.base_url, owner, repo, number);
        tracing::info!("Fetching issue: {}/{}#{}", owner, repo, number);

        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::IssueNotFound {
                repo: format!("{}/{}", owner, repo),
                number,
            });
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch issue {}/{}#{}: {} - {}",
                owner, repo, number, status, body
            )));
        }

        Ok(response.json().await?)
    }

    pub async fn get_issue_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<RawComment>> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.base_url, owner, repo, number
        );
        let paginator = Paginator::new(&self.client);
        tracing::debug!("Fetching comments for: {}/{}#{}", owner, repo, number);
        paginator.fetch_all(&url, 100).await
    }

    /// Fetches the issue plus its fully-drained comment thread and folds
    /// both into an [`IssueData`]. This is the only entry point the
    /// analysis pipeline consumes.
    pub async fn fetch_issue(&self, repo_url: &str, number: u64) -> Result<IssueData> {
        let (owner, repo) = parse_repo_url(repo_url)?;

        let issue = self.get_issue(&owner, &repo, number).await?;
        let comments = self.get_issue_comments(&owner, &repo, number).await?;

        Ok(issue.into_issue_data(comments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_url() {
        let (owner, repo) = parse_repo_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(owner, "rust-lang");
        assert_eq!(repo, "rust");
    }

    #[test]
    fn parses_http_url_with_trailing_slash() {
        let (owner, repo) = parse_repo_url("http://github.com/tokio-rs/tokio/").unwrap();
        assert_eq!(owner, "tokio-rs");
        assert_eq!(repo, "tokio");
    }

    #[test]
    fn parses_bare_owner_repo() {
        let (owner, repo) = parse_repo_url("serde-rs/serde").unwrap();
        assert_eq!(owner, "serde-rs");
        assert_eq!(repo, "serde");
    }

    #[test]
    fn rejects_url_without_repo_segment() {
        assert!(matches!(
            parse_repo_url("https://github.com/rust-lang"),
            Err(Error::InvalidRepoUrl(_))
        ));
        assert!(matches!(parse_repo_url(""), Err(Error::InvalidRepoUrl(_))));
    }
}
