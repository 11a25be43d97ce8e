use async_trait::async_trait;

use crate::error::Result;

/// Seam between the analysis pipeline and the model provider's HTTP API.
/// Takes a system instruction and a user prompt, returns the model's raw
/// text reply. Test doubles implement this to script replies.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    fn name(&self) -> &str;
}
