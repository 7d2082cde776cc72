//! OpenAI Assistants API client.
//!
//! All endpoints require the `OpenAI-Beta: assistants=v2` protocol version
//! header in addition to bearer auth; a missing or mismatched header is a
//! configuration problem, not something handled at runtime.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AssistantClient, AssistantError, RunStatus};
use crate::config::AssistantConfig;

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const BETA_HEADER: &str = "OpenAI-Beta";
const BETA_VERSION: &str = "assistants=v2";

/// OpenAI Assistants API client.
pub struct OpenAiAssistantClient {
    client: Client,
    api_base: String,
    api_key: String,
    assistant_id: String,
}

impl OpenAiAssistantClient {
    /// Create a new assistant client.
    pub fn new(config: AssistantConfig) -> Result<Self, AssistantError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let api_base = config
            .base_url
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            client,
            api_base,
            api_key: config.api_key,
            assistant_id: config.assistant_id,
        })
    }

    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .bearer_auth(&self.api_key)
            .header(BETA_HEADER, BETA_VERSION)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AssistantError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorResponse>(&error_text)
            .map(|e| e.error.message)
            .unwrap_or(error_text);
        Err(AssistantError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl AssistantClient for OpenAiAssistantClient {
    fn provider(&self) -> &str {
        "openai"
    }

    async fn create_session(&self) -> Result<String, AssistantError> {
        let url = format!("{}/threads", self.api_base);

        debug!("Assistant create session");

        let response = self
            .with_headers(self.client.post(&url))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let thread: IdResponse = response.json().await.map_err(|e| {
            AssistantError::MalformedResponse(format!("Failed to parse thread response: {}", e))
        })?;

        Ok(thread.id)
    }

    async fn post_message(&self, session_id: &str, text: &str) -> Result<(), AssistantError> {
        let url = format!("{}/threads/{}/messages", self.api_base, session_id);

        debug!("Assistant post message: session={}", session_id);

        let response = self
            .with_headers(self.client.post(&url))
            .json(&MessageRequest {
                role: "user",
                content: text,
            })
            .send()
            .await?;
        // The acknowledgement body is unused beyond success/failure.
        Self::check_status(response).await?;

        Ok(())
    }

    async fn start_run(&self, session_id: &str) -> Result<String, AssistantError> {
        let url = format!("{}/threads/{}/runs", self.api_base, session_id);

        debug!(
            "Assistant start run: session={}, assistant={}",
            session_id, self.assistant_id
        );

        let response = self
            .with_headers(self.client.post(&url))
            .json(&RunRequest {
                assistant_id: &self.assistant_id,
            })
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let run: IdResponse = response.json().await.map_err(|e| {
            AssistantError::MalformedResponse(format!("Failed to parse run response: {}", e))
        })?;

        Ok(run.id)
    }

    async fn run_status(
        &self,
        session_id: &str,
        run_id: &str,
    ) -> Result<RunStatus, AssistantError> {
        let url = format!("{}/threads/{}/runs/{}", self.api_base, session_id, run_id);

        let response = self.with_headers(self.client.get(&url)).send().await?;
        let response = Self::check_status(response).await?;

        let run: RunStatusResponse = response.json().await.map_err(|e| {
            AssistantError::MalformedResponse(format!("Failed to parse run status: {}", e))
        })?;

        let status = RunStatus::parse(&run.status);
        debug!("Assistant run status: run={}, status={}", run_id, status);

        Ok(status)
    }

    async fn latest_message_text(&self, session_id: &str) -> Result<String, AssistantError> {
        let url = format!("{}/threads/{}/messages", self.api_base, session_id);

        debug!("Assistant fetch messages: session={}", session_id);

        let response = self.with_headers(self.client.get(&url)).send().await?;
        let response = Self::check_status(response).await?;

        let messages: MessagesResponse = response.json().await.map_err(|e| {
            AssistantError::MalformedResponse(format!("Failed to parse messages: {}", e))
        })?;

        // Messages come back most-recent-first; take the first text block.
        let latest = messages.data.into_iter().next().ok_or_else(|| {
            AssistantError::MalformedResponse("Session has no messages".to_string())
        })?;

        let text = latest
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text.value),
                ContentBlock::Unknown => None,
            })
            .ok_or_else(|| {
                AssistantError::MalformedResponse(
                    "Latest message has no text content block".to_string(),
                )
            })?;

        Ok(text)
    }
}

// ============================================================================
// Assistants API wire types (private)
// ============================================================================

#[derive(Debug, Serialize)]
struct MessageRequest<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct RunRequest<'a> {
    assistant_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct IdResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct RunStatusResponse {
    status: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    data: Vec<MessageBody>,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    Text { text: TextValue },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AssistantConfig {
        AssistantConfig {
            api_key: "sk-test".to_string(),
            assistant_id: "asst_123".to_string(),
            base_url: None,
        }
    }

    #[test]
    fn test_default_api_base() {
        let client = OpenAiAssistantClient::new(test_config()).unwrap();
        assert_eq!(client.api_base, "https://api.openai.com/v1");
        assert_eq!(client.provider(), "openai");
    }

    #[test]
    fn test_api_base_override() {
        let mut config = test_config();
        config.base_url = Some("http://localhost:5000/v1".to_string());
        let client = OpenAiAssistantClient::new(config).unwrap();
        assert_eq!(client.api_base, "http://localhost:5000/v1");
    }

    #[test]
    fn test_message_request_serialization() {
        let request = MessageRequest {
            role: "user",
            content: "Ticket Subject: a\nTicket Description: b",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("Ticket Subject"));
    }

    #[test]
    fn test_messages_response_parsing() {
        let json = r#"{
            "data": [
                {
                    "id": "msg_2",
                    "role": "assistant",
                    "content": [
                        {"type": "text", "text": {"value": "{\"primary\":\"A\",\"secondary\":\"B\"}"}}
                    ]
                },
                {
                    "id": "msg_1",
                    "role": "user",
                    "content": [
                        {"type": "text", "text": {"value": "Ticket Subject: ..."}}
                    ]
                }
            ]
        }"#;

        let messages: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(messages.data.len(), 2);
        match &messages.data[0].content[0] {
            ContentBlock::Text { text } => {
                assert!(text.value.contains("primary"));
            }
            ContentBlock::Unknown => panic!("expected text block"),
        }
    }

    #[test]
    fn test_unknown_content_block_tolerated() {
        let json = r#"{
            "data": [
                {
                    "content": [
                        {"type": "image_file", "image_file": {"file_id": "f1"}},
                        {"type": "text", "text": {"value": "hello"}}
                    ]
                }
            ]
        }"#;

        let messages: MessagesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(messages.data[0].content.len(), 2);
        assert!(matches!(messages.data[0].content[0], ContentBlock::Unknown));
    }

    #[test]
    fn test_api_error_decoding() {
        let json = r#"{"error": {"message": "Invalid assistant id", "type": "invalid_request_error"}}"#;
        let parsed: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "Invalid assistant id");
    }
}
