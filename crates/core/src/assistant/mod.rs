//! Assistant API integration: session, message, run and status calls.

mod openai;
mod traits;
mod types;

pub use openai::OpenAiAssistantClient;
pub use traits::AssistantClient;
pub use types::RunStatus;

use thiserror::Error;

/// Error type for assistant operations.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Assistant API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Malformed assistant response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for AssistantError {
    fn from(e: reqwest::Error) -> Self {
        AssistantError::Http(e.to_string())
    }
}
