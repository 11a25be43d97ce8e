pub mod client;
pub mod paginator;

pub use client::{parse_repo_url, GitHubClient};
pub use paginator::Paginator;
