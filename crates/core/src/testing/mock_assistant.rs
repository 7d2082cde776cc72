//! Mock assistant for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::assistant::{AssistantClient, AssistantError, RunStatus};

/// Mock implementation of the AssistantClient trait.
///
/// Scripts the run status sequence observed by the poll loop: statuses
/// are served in order and the last one repeats forever, so a script of
/// `[InProgress]` simulates a run that never terminates.
pub struct MockAssistant {
    statuses: Arc<RwLock<Vec<RunStatus>>>,
    final_message: Arc<RwLock<Option<String>>>,
    next_session_error: Arc<RwLock<Option<AssistantError>>>,
    next_run_error: Arc<RwLock<Option<AssistantError>>>,
    sessions: Arc<RwLock<u32>>,
    messages: Arc<RwLock<Vec<String>>>,
    runs: Arc<RwLock<u32>>,
    status_queries: Arc<RwLock<u32>>,
}

impl Default for MockAssistant {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAssistant {
    pub fn new() -> Self {
        Self {
            statuses: Arc::new(RwLock::new(vec![RunStatus::Completed])),
            final_message: Arc::new(RwLock::new(None)),
            next_session_error: Arc::new(RwLock::new(None)),
            next_run_error: Arc::new(RwLock::new(None)),
            sessions: Arc::new(RwLock::new(0)),
            messages: Arc::new(RwLock::new(Vec::new())),
            runs: Arc::new(RwLock::new(0)),
            status_queries: Arc::new(RwLock::new(0)),
        }
    }

    /// Script the status sequence; the last entry repeats indefinitely.
    pub async fn set_statuses(&self, statuses: Vec<RunStatus>) {
        *self.statuses.write().await = statuses;
        *self.status_queries.write().await = 0;
    }

    /// Set the text of the most recent session message.
    pub async fn set_final_message(&self, text: &str) {
        *self.final_message.write().await = Some(text.to_string());
    }

    /// Make the next create_session call fail with the given error.
    pub async fn fail_next_session(&self, error: AssistantError) {
        *self.next_session_error.write().await = Some(error);
    }

    /// Make the next start_run call fail with the given error.
    pub async fn fail_next_run(&self, error: AssistantError) {
        *self.next_run_error.write().await = Some(error);
    }

    /// Number of sessions created so far.
    pub async fn sessions_created(&self) -> u32 {
        *self.sessions.read().await
    }

    /// Messages posted, in order.
    pub async fn posted_messages(&self) -> Vec<String> {
        self.messages.read().await.clone()
    }

    /// Number of runs started so far.
    pub async fn runs_started(&self) -> u32 {
        *self.runs.read().await
    }

    /// Number of status queries issued so far.
    pub async fn status_queries(&self) -> u32 {
        *self.status_queries.read().await
    }
}

#[async_trait]
impl AssistantClient for MockAssistant {
    fn provider(&self) -> &str {
        "mock"
    }

    async fn create_session(&self) -> Result<String, AssistantError> {
        if let Some(error) = self.next_session_error.write().await.take() {
            return Err(error);
        }
        let mut sessions = self.sessions.write().await;
        *sessions += 1;
        Ok(format!("session-{}", *sessions))
    }

    async fn post_message(&self, _session_id: &str, text: &str) -> Result<(), AssistantError> {
        self.messages.write().await.push(text.to_string());
        Ok(())
    }

    async fn start_run(&self, _session_id: &str) -> Result<String, AssistantError> {
        if let Some(error) = self.next_run_error.write().await.take() {
            return Err(error);
        }
        let mut runs = self.runs.write().await;
        *runs += 1;
        Ok(format!("run-{}", *runs))
    }

    async fn run_status(
        &self,
        _session_id: &str,
        _run_id: &str,
    ) -> Result<RunStatus, AssistantError> {
        let mut queries = self.status_queries.write().await;
        let statuses = self.statuses.read().await;
        let index = (*queries as usize).min(statuses.len().saturating_sub(1));
        *queries += 1;
        Ok(statuses
            .get(index)
            .cloned()
            .unwrap_or(RunStatus::Completed))
    }

    async fn latest_message_text(&self, _session_id: &str) -> Result<String, AssistantError> {
        match self.final_message.read().await.clone() {
            Some(text) => Ok(text),
            None => Err(AssistantError::MalformedResponse(
                "Session has no messages".to_string(),
            )),
        }
    }
}
