use async_trait::async_trait;

use super::{AssistantError, RunStatus};

/// Trait for assistant backends.
///
/// One classification attempt uses exactly one session: create it, post
/// the ticket text, start a run, poll its status, read back the verdict.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Provider name (e.g. "openai")
    fn provider(&self) -> &str;

    /// Create a fresh conversation session and return its id.
    async fn create_session(&self) -> Result<String, AssistantError>;

    /// Post a user message into the session.
    async fn post_message(&self, session_id: &str, text: &str) -> Result<(), AssistantError>;

    /// Start a run of the configured assistant against the session.
    async fn start_run(&self, session_id: &str) -> Result<String, AssistantError>;

    /// Query the current status of a run.
    async fn run_status(
        &self,
        session_id: &str,
        run_id: &str,
    ) -> Result<RunStatus, AssistantError>;

    /// Fetch the first text block of the most recent message in the session.
    async fn latest_message_text(&self, session_id: &str) -> Result<String, AssistantError>;
}
