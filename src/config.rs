use std::env;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Runtime configuration. Built explicitly by callers; only the binary
/// reads the process environment, so tests can construct arbitrary
/// configurations without touching env vars.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// GitHub API token. Optional; public repos work anonymously.
    pub github_token: Option<String>,
    /// Model provider credential. Absent or implausible means demo mode.
    pub openai_api_key: Option<String>,
    /// Force demo mode regardless of credential validity.
    pub force_demo: bool,
    /// Chat model identifier.
    pub model: String,
}

impl Config {
    pub fn from_env() -> Self {
        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let force_demo = env::var("FORCE_DEMO_MODE")
            .ok()
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            github_token,
            openai_api_key,
            force_demo,
            model,
        }
    }
}
