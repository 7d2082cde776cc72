use async_trait::async_trait;

use super::{HelpdeskError, TicketContent};

/// Trait for helpdesk backends.
#[async_trait]
pub trait HelpdeskClient: Send + Sync {
    /// Backend name (e.g. "zendesk")
    fn backend(&self) -> &str;

    /// Fetch the subject and description of a ticket.
    async fn get_ticket(&self, ticket_id: &str) -> Result<TicketContent, HelpdeskError>;

    /// Replace the ticket's tags with the given set.
    async fn set_tags(&self, ticket_id: &str, tags: &[String]) -> Result<(), HelpdeskError>;
}
