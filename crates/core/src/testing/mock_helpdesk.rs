//! Mock helpdesk for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::helpdesk::{HelpdeskClient, HelpdeskError, TicketContent};

/// A recorded tag write for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedTagWrite {
    pub ticket_id: String,
    pub tags: Vec<String>,
}

/// Mock implementation of the HelpdeskClient trait.
///
/// Provides controllable behavior for testing:
/// - Serve configured ticket content by id
/// - Track reads and tag writes for assertions
/// - Simulate upstream failures
///
/// A ticket id with no configured content yields a 404-shaped `Api`
/// error, matching what the real backend returns for unknown tickets.
pub struct MockHelpdesk {
    tickets: Arc<RwLock<HashMap<String, TicketContent>>>,
    gets: Arc<RwLock<Vec<String>>>,
    tag_writes: Arc<RwLock<Vec<RecordedTagWrite>>>,
    next_get_error: Arc<RwLock<Option<HelpdeskError>>>,
    next_tags_error: Arc<RwLock<Option<HelpdeskError>>>,
}

impl Default for MockHelpdesk {
    fn default() -> Self {
        Self::new()
    }
}

impl MockHelpdesk {
    pub fn new() -> Self {
        Self {
            tickets: Arc::new(RwLock::new(HashMap::new())),
            gets: Arc::new(RwLock::new(Vec::new())),
            tag_writes: Arc::new(RwLock::new(Vec::new())),
            next_get_error: Arc::new(RwLock::new(None)),
            next_tags_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Configure the content served for a ticket id.
    pub async fn set_ticket(&self, ticket_id: &str, content: TicketContent) {
        self.tickets
            .write()
            .await
            .insert(ticket_id.to_string(), content);
    }

    /// Make the next get_ticket call fail with the given error.
    pub async fn fail_next_get(&self, error: HelpdeskError) {
        *self.next_get_error.write().await = Some(error);
    }

    /// Make the next set_tags call fail with the given error.
    pub async fn fail_next_set_tags(&self, error: HelpdeskError) {
        *self.next_tags_error.write().await = Some(error);
    }

    /// Ticket ids that were fetched, in order.
    pub async fn recorded_gets(&self) -> Vec<String> {
        self.gets.read().await.clone()
    }

    /// Tag writes that were performed, in order.
    pub async fn recorded_tag_writes(&self) -> Vec<RecordedTagWrite> {
        self.tag_writes.read().await.clone()
    }
}

#[async_trait]
impl HelpdeskClient for MockHelpdesk {
    fn backend(&self) -> &str {
        "mock"
    }

    async fn get_ticket(&self, ticket_id: &str) -> Result<TicketContent, HelpdeskError> {
        self.gets.write().await.push(ticket_id.to_string());

        if let Some(error) = self.next_get_error.write().await.take() {
            return Err(error);
        }

        match self.tickets.read().await.get(ticket_id) {
            Some(content) => Ok(content.clone()),
            None => Err(HelpdeskError::Api {
                status: 404,
                message: format!(
                    r#"{{"error":"RecordNotFound","description":"Not found: ticket {}"}}"#,
                    ticket_id
                ),
            }),
        }
    }

    async fn set_tags(&self, ticket_id: &str, tags: &[String]) -> Result<(), HelpdeskError> {
        if let Some(error) = self.next_tags_error.write().await.take() {
            return Err(error);
        }

        self.tag_writes.write().await.push(RecordedTagWrite {
            ticket_id: ticket_id.to_string(),
            tags: tags.to_vec(),
        });
        Ok(())
    }
}
