//! Ticket classification pipeline.
//!
//! Sequences the whole flow for one ticket: fetch content from the
//! helpdesk, run an assistant classification over it, poll the run to
//! completion, parse the verdict and write it back as tags.

mod config;
mod pipeline;
mod types;

pub use config::ClassifierConfig;
pub use pipeline::TicketClassifier;
pub use types::{sanitize_tag, AppliedTags, Verdict};

use thiserror::Error;

use crate::assistant::{AssistantError, RunStatus};
use crate::helpdesk::HelpdeskError;

/// Error type for a classification attempt.
///
/// Every step failure short-circuits the remaining steps; the HTTP layer
/// maps all of these to a single 500 response.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Helpdesk error: {0}")]
    Helpdesk(#[from] HelpdeskError),

    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),

    #[error("Run failed with status: {status}")]
    RunFailed { status: RunStatus },

    #[error("Run did not complete within {checks} status checks")]
    PollBudgetExhausted { checks: u32 },

    #[error("Unrecognized run status: {0}")]
    UnrecognizedStatus(String),

    #[error("Malformed classification verdict: {0}")]
    MalformedVerdict(String),

    #[error("Ticket id must not be empty")]
    EmptyTicketId,
}

impl ClassifyError {
    /// Short label for the outcome metric.
    pub fn metric_label(&self) -> &'static str {
        match self {
            ClassifyError::Helpdesk(_) => "helpdesk_error",
            ClassifyError::Assistant(_) => "assistant_error",
            ClassifyError::RunFailed { .. } => "run_failed",
            ClassifyError::PollBudgetExhausted { .. } => "poll_exhausted",
            ClassifyError::UnrecognizedStatus(_) => "unrecognized_status",
            ClassifyError::MalformedVerdict(_) => "malformed_verdict",
            ClassifyError::EmptyTicketId => "empty_ticket_id",
        }
    }
}
