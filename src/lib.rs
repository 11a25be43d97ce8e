pub mod analysis;
pub mod config;
pub mod error;
pub mod github;
pub mod llm;
pub mod models;

pub use analysis::{classify, validate, Analyzer};
pub use config::Config;
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use llm::{ChatProvider, OpenAiProvider};
pub use models::{Analysis, IssueData, IssueType};
