use std::sync::Arc;

use crate::analysis::heuristic::classify;
use crate::analysis::validator::validate;
use crate::config::Config;
use crate::llm::prompts::{build_prompt, SYSTEM_PROMPT};
use crate::llm::{parser::parse_model_reply, ChatProvider, OpenAiProvider};
use crate::models::{Analysis, IssueData};

/// Outcome of one model invocation, before the façade erases failure.
/// The reason string only feeds diagnostic logging; callers of
/// [`Analyzer::analyze`] never see it.
enum ModelOutcome {
    Success(Analysis),
    Failure(String),
}

enum Mode {
    Demo,
    Live(Arc<dyn ChatProvider>),
}

/// Entry point for the presentation layer. Picks Demo or Live once at
/// construction; `analyze` is total and always returns the canonical
/// five-field schema.
pub struct Analyzer {
    mode: Mode,
}

impl Analyzer {
    pub fn new(config: &Config) -> Self {
        if config.force_demo {
            tracing::info!("Demo mode forced by configuration");
            return Self { mode: Mode::Demo };
        }

        let credential = match &config.openai_api_key {
            Some(key) if looks_like_api_key(key) => key.trim().to_string(),
            Some(_) => {
                tracing::warn!("Credential does not look like a valid API key, using demo mode");
                return Self { mode: Mode::Demo };
            }
            None => {
                tracing::info!("No credential configured, using demo mode");
                return Self { mode: Mode::Demo };
            }
        };

        match OpenAiProvider::new(credential, config.model.clone()) {
            Ok(provider) => Self {
                mode: Mode::Live(Arc::new(provider)),
            },
            Err(e) => {
                tracing::warn!("Failed to initialize model provider, using demo mode: {}", e);
                Self { mode: Mode::Demo }
            }
        }
    }

    /// Construction seam for tests and alternative providers.
    pub fn with_provider(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            mode: Mode::Live(provider),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.mode, Mode::Live(_))
    }

    /// Never fails: the Live path absorbs every model-side error into the
    /// heuristic result, and Demo is the heuristic directly.
    pub async fn analyze(&self, issue: &IssueData) -> Analysis {
        match &self.mode {
            Mode::Demo => classify(issue),
            Mode::Live(provider) => match self.invoke_model(provider.as_ref(), issue).await {
                ModelOutcome::Success(analysis) => analysis,
                ModelOutcome::Failure(reason) => {
                    tracing::warn!("Model analysis failed, falling back to heuristic: {}", reason);
                    classify(issue)
                }
            },
        }
    }

    async fn invoke_model(&self, provider: &dyn ChatProvider, issue: &IssueData) -> ModelOutcome {
        let prompt = build_prompt(issue);
        tracing::debug!("Sending issue to {} for analysis", provider.name());

        let reply = match provider.complete(SYSTEM_PROMPT, &prompt).await {
            Ok(reply) => reply,
            Err(e) => return ModelOutcome::Failure(e.to_string()),
        };

        match parse_model_reply(&reply) {
            Ok(raw) => ModelOutcome::Success(validate(&raw)),
            Err(e) => ModelOutcome::Failure(e.to_string()),
        }
    }
}

/// Syntactic plausibility check, not authentication: non-empty after
/// trimming and carrying the provider's key prefix.
fn looks_like_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key.starts_with("sk-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{IssueComment, IssueType};
    use async_trait::async_trait;

    struct ScriptedProvider {
        reply: crate::error::Result<String>,
    }

    impl ScriptedProvider {
        fn ok(reply: &str) -> Arc<dyn ChatProvider> {
            Arc::new(Self {
                reply: Ok(reply.to_string()),
            })
        }

        fn err(e: Error) -> Arc<dyn ChatProvider> {
            Arc::new(Self { reply: Err(e) })
        }
    }

    #[async_trait]
    impl ChatProvider for ScriptedProvider {
        async fn complete(&self, _system: &str, _user: &str) -> crate::error::Result<String> {
            match &self.reply {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(Error::LlmApi(e.to_string())),
            }
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    fn sample_issue() -> IssueData {
        IssueData {
            title: "App crashes on startup".to_string(),
            body: "Happens after the 2.0 upgrade".to_string(),
            comments: vec![IssueComment {
                body: "Same here".to_string(),
                user: "someone".to_string(),
            }],
            ..Default::default()
        }
    }

    fn config(key: Option<&str>, force_demo: bool) -> Config {
        Config {
            github_token: None,
            openai_api_key: key.map(str::to_string),
            force_demo,
            model: "gpt-3.5-turbo".to_string(),
        }
    }

    #[test]
    fn plausible_credential_selects_live_mode() {
        assert!(Analyzer::new(&config(Some("sk-abc123"), false)).is_live());
    }

    #[test]
    fn missing_or_implausible_credential_selects_demo() {
        assert!(!Analyzer::new(&config(None, false)).is_live());
        assert!(!Analyzer::new(&config(Some(""), false)).is_live());
        assert!(!Analyzer::new(&config(Some("   "), false)).is_live());
        assert!(!Analyzer::new(&config(Some("not-a-key"), false)).is_live());
    }

    #[test]
    fn force_demo_overrides_valid_credential() {
        assert!(!Analyzer::new(&config(Some("sk-abc123"), true)).is_live());
    }

    #[tokio::test]
    async fn demo_mode_returns_heuristic_result() {
        let issue = sample_issue();
        let analyzer = Analyzer::new(&config(None, false));
        assert_eq!(analyzer.analyze(&issue).await, classify(&issue));
    }

    #[tokio::test]
    async fn valid_model_reply_is_validated_and_returned() {
        let analyzer = Analyzer::with_provider(ScriptedProvider::ok(
            r#"{"summary": "Startup crash after 2.0", "type": "bug",
                "priority_score": "4/5 - High", "suggested_labels": ["bug"],
                "potential_impact": "Blocks all users on 2.0"}"#,
        ));
        let analysis = analyzer.analyze(&sample_issue()).await;
        assert_eq!(analysis.issue_type, IssueType::Bug);
        assert_eq!(analysis.summary, "Startup crash after 2.0");
        assert_eq!(analysis.suggested_labels, vec!["bug"]);
    }

    #[tokio::test]
    async fn fenced_model_reply_is_recovered() {
        let analyzer = Analyzer::with_provider(ScriptedProvider::ok(
            "Here you go:\n```json\n{\"summary\": \"s\", \"type\": \"question\"}\n```",
        ));
        let analysis = analyzer.analyze(&sample_issue()).await;
        assert_eq!(analysis.issue_type, IssueType::Question);
        assert_eq!(analysis.summary, "s");
    }

    #[tokio::test]
    async fn unparsable_reply_falls_back_to_heuristic() {
        let issue = sample_issue();
        let analyzer =
            Analyzer::with_provider(ScriptedProvider::ok("I cannot produce JSON today."));
        assert_eq!(analyzer.analyze(&issue).await, classify(&issue));
    }

    #[tokio::test]
    async fn provider_error_falls_back_to_heuristic() {
        let issue = sample_issue();
        let analyzer = Analyzer::with_provider(ScriptedProvider::err(Error::LlmApi(
            "401 Unauthorized".to_string(),
        )));
        assert_eq!(analyzer.analyze(&issue).await, classify(&issue));
    }

    #[tokio::test]
    async fn validated_model_output_respects_length_caps() {
        let long = "x".repeat(1000);
        let reply = format!(
            r#"{{"summary": "{long}", "type": "bug", "priority_score": "{long}",
                "suggested_labels": ["a","b","c","d","e","f","g","h","i","j","k","l"],
                "potential_impact": "{long}"}}"#
        );
        let analyzer = Analyzer::with_provider(ScriptedProvider::ok(&reply));
        let analysis = analyzer.analyze(&sample_issue()).await;
        assert!(analysis.summary.chars().count() <= 200);
        assert!(analysis.priority_score.chars().count() <= 100);
        assert!(analysis.potential_impact.chars().count() <= 200);
        assert_eq!(analysis.suggested_labels.len(), 10);
    }
}
