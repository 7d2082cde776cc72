use std::sync::Arc;
use taggart_core::{Config, SanitizedConfig, TicketClassifier};

/// Shared application state
pub struct AppState {
    config: Config,
    classifier: Arc<TicketClassifier>,
}

impl AppState {
    pub fn new(config: Config, classifier: Arc<TicketClassifier>) -> Self {
        Self { config, classifier }
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn classifier(&self) -> &TicketClassifier {
        self.classifier.as_ref()
    }
}
