//! The classification pipeline: fetch, classify, poll, tag.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::{sanitize_tag, AppliedTags, ClassifierConfig, ClassifyError, Verdict};
use crate::assistant::{AssistantClient, RunStatus};
use crate::helpdesk::{HelpdeskClient, TicketContent};
use crate::metrics::{CLASSIFICATIONS_TOTAL, CLASSIFY_DURATION, POLL_CHECKS};

/// Drives one ticket through the full classification flow.
///
/// The flow is strictly linear; the only iteration is the run poll loop.
/// Collaborators sit behind trait objects so tests can inject fakes for
/// the helpdesk and assistant independently.
pub struct TicketClassifier {
    helpdesk: Arc<dyn HelpdeskClient>,
    assistant: Arc<dyn AssistantClient>,
    config: ClassifierConfig,
}

impl TicketClassifier {
    pub fn new(
        helpdesk: Arc<dyn HelpdeskClient>,
        assistant: Arc<dyn AssistantClient>,
        config: ClassifierConfig,
    ) -> Self {
        Self {
            helpdesk,
            assistant,
            config,
        }
    }

    /// Classify a ticket and write the resulting tags back.
    ///
    /// Each invocation creates a fresh session and run; nothing is shared
    /// across requests and nothing is retried besides the poll loop
    /// itself. The second of two invocations for the same ticket simply
    /// overwrites the first's tags (replace semantics).
    pub async fn classify_ticket(&self, ticket_id: &str) -> Result<AppliedTags, ClassifyError> {
        let start = Instant::now();
        let result = self.run_flow(ticket_id).await;

        let label = match &result {
            Ok(_) => "ok",
            Err(e) => e.metric_label(),
        };
        CLASSIFICATIONS_TOTAL.with_label_values(&[label]).inc();
        CLASSIFY_DURATION
            .with_label_values(&[label])
            .observe(start.elapsed().as_secs_f64());

        result
    }

    async fn run_flow(&self, ticket_id: &str) -> Result<AppliedTags, ClassifyError> {
        let ticket_id = ticket_id.trim();
        if ticket_id.is_empty() {
            return Err(ClassifyError::EmptyTicketId);
        }

        let ticket = self.helpdesk.get_ticket(ticket_id).await?;
        info!(
            "Fetched ticket {}: subject={:?}",
            ticket_id, ticket.subject
        );

        let session_id = self.assistant.create_session().await?;
        debug!("Created session {}", session_id);

        self.assistant
            .post_message(&session_id, &format_ticket_message(&ticket))
            .await?;

        let run_id = self.assistant.start_run(&session_id).await?;
        info!("Started run {} on session {}", run_id, session_id);

        self.poll_run(&session_id, &run_id).await?;

        let text = self.assistant.latest_message_text(&session_id).await?;
        let verdict: Verdict = serde_json::from_str(&text)
            .map_err(|e| ClassifyError::MalformedVerdict(format!("{}: {}", e, text)))?;

        let tags = [sanitize_tag(&verdict.primary), sanitize_tag(&verdict.secondary)];
        self.helpdesk.set_tags(ticket_id, &tags).await?;
        info!("Tagged ticket {} with {:?}", ticket_id, tags);

        Ok(AppliedTags {
            ticket_id: ticket_id.to_string(),
            tags,
        })
    }

    /// Poll the run at a fixed interval until it terminates.
    ///
    /// At most `max_checks` status queries are ever issued: the budget is
    /// checked before each query. A failure or cancellation terminates
    /// immediately without waiting out the interval, and any status
    /// outside the known set is an explicit error rather than a silent
    /// exit from the loop.
    async fn poll_run(&self, session_id: &str, run_id: &str) -> Result<(), ClassifyError> {
        let mut checks: u32 = 0;

        loop {
            if checks >= self.config.max_checks {
                warn!(
                    "Run {} still not terminal after {} checks",
                    run_id, checks
                );
                POLL_CHECKS.observe(checks as f64);
                return Err(ClassifyError::PollBudgetExhausted { checks });
            }

            let status = self.assistant.run_status(session_id, run_id).await?;
            checks += 1;

            match status {
                RunStatus::Completed => {
                    debug!("Run {} completed after {} checks", run_id, checks);
                    POLL_CHECKS.observe(checks as f64);
                    return Ok(());
                }
                RunStatus::Failed | RunStatus::Cancelled => {
                    POLL_CHECKS.observe(checks as f64);
                    return Err(ClassifyError::RunFailed { status });
                }
                RunStatus::Queued | RunStatus::InProgress => {
                    tokio::time::sleep(self.config.poll_interval()).await;
                }
                RunStatus::Other(s) => {
                    POLL_CHECKS.observe(checks as f64);
                    return Err(ClassifyError::UnrecognizedStatus(s));
                }
            }
        }
    }
}

/// The message submitted to the assistant for classification.
fn format_ticket_message(ticket: &TicketContent) -> String {
    format!(
        "Ticket Subject: {}\nTicket Description: {}",
        ticket.subject, ticket.description
    )
}
