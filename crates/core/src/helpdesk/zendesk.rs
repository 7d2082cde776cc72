//! Zendesk REST API client.
//!
//! Authenticates with HTTP basic auth using the `{email}/token` username
//! convention and the account API token as password.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{HelpdeskClient, HelpdeskError, TicketContent};
use crate::config::HelpdeskConfig;

/// Zendesk helpdesk client.
pub struct ZendeskClient {
    client: Client,
    base_url: String,
    email: String,
    api_key: String,
}

impl ZendeskClient {
    /// Create a new Zendesk client.
    pub fn new(config: HelpdeskConfig) -> Result<Self, HelpdeskError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| format!("https://{}.zendesk.com", config.domain));

        Ok(Self {
            client,
            base_url,
            email: config.email,
            api_key: config.api_key,
        })
    }

    /// Username for basic auth, per the Zendesk token convention.
    fn auth_user(&self) -> String {
        format!("{}/token", self.email)
    }
}

#[async_trait]
impl HelpdeskClient for ZendeskClient {
    fn backend(&self) -> &str {
        "zendesk"
    }

    async fn get_ticket(&self, ticket_id: &str) -> Result<TicketContent, HelpdeskError> {
        let url = format!("{}/api/v2/tickets/{}", self.base_url, ticket_id);

        debug!("Zendesk get ticket: id={}", ticket_id);

        let response = self
            .client
            .get(&url)
            .basic_auth(self.auth_user(), Some(&self.api_key))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HelpdeskError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: TicketResponse = response.json().await.map_err(|e| {
            HelpdeskError::MalformedResponse(format!("Failed to parse ticket response: {}", e))
        })?;

        Ok(TicketContent {
            subject: body.ticket.subject,
            description: body.ticket.description,
        })
    }

    async fn set_tags(&self, ticket_id: &str, tags: &[String]) -> Result<(), HelpdeskError> {
        let url = format!("{}/api/v2/tickets/{}/tags", self.base_url, ticket_id);

        debug!("Zendesk set tags: id={}, tags={:?}", ticket_id, tags);

        let response = self
            .client
            .put(&url)
            .basic_auth(self.auth_user(), Some(&self.api_key))
            .json(&TagsRequest {
                tags: tags.to_vec(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Surface the upstream error payload verbatim in the detail.
            let body = response.text().await.unwrap_or_default();
            return Err(HelpdeskError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(())
    }
}

// ============================================================================
// Zendesk API wire types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TicketResponse {
    ticket: TicketBody,
}

#[derive(Debug, Deserialize)]
struct TicketBody {
    subject: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct TagsRequest {
    tags: Vec<String>,
}
