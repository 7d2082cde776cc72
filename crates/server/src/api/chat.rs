//! The classification endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Helpdesk ticket to classify and tag.
    pub ticket_id: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// POST /chat
///
/// Fetch the ticket, classify it through the assistant, and write the
/// verdict back as two tags. Any step failure maps to a single 500 with
/// the triggering error's message; there is no partial tagging.
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let ticket_id = body.ticket_id.trim();
    info!("Chat request for ticket {:?}", ticket_id);

    match state.classifier().classify_ticket(ticket_id).await {
        Ok(applied) => {
            info!(
                "Ticket {} tagged with {:?}",
                applied.ticket_id, applied.tags
            );
            Ok(Json(ChatResponse {
                success: true,
                message: "Tags successfully added.".to_string(),
            }))
        }
        Err(e) => {
            error!("Error handling chat request: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: e.to_string(),
                }),
            ))
        }
    }
}
