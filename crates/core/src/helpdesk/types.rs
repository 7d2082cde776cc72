use serde::{Deserialize, Serialize};

/// The fields of a ticket this service reads.
///
/// The ticket itself lives in the helpdesk system; we only ever look at
/// its subject and description and append tags to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketContent {
    pub subject: String,
    pub description: String,
}

impl TicketContent {
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
        }
    }
}
