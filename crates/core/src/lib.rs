pub mod assistant;
pub mod classifier;
pub mod config;
pub mod helpdesk;
pub mod metrics;
pub mod testing;

pub use assistant::{AssistantClient, AssistantError, OpenAiAssistantClient, RunStatus};
pub use classifier::{
    sanitize_tag, AppliedTags, ClassifierConfig, ClassifyError, TicketClassifier, Verdict,
};
pub use config::{
    load_config, load_config_from_str, validate_config, AssistantConfig, Config, ConfigError,
    HelpdeskConfig, SanitizedConfig, ServerConfig,
};
pub use helpdesk::{HelpdeskClient, HelpdeskError, TicketContent, ZendeskClient};
