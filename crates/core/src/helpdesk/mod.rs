//! Helpdesk integration: ticket reads and tag writes.

mod traits;
mod types;
mod zendesk;

pub use traits::HelpdeskClient;
pub use types::TicketContent;
pub use zendesk::ZendeskClient;

use thiserror::Error;

/// Error type for helpdesk operations.
#[derive(Debug, Error)]
pub enum HelpdeskError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Helpdesk API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed helpdesk response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for HelpdeskError {
    fn from(e: reqwest::Error) -> Self {
        HelpdeskError::Http(e.to_string())
    }
}
