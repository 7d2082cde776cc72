use super::{types::Config, ConfigError};

/// Validate configuration
/// All external credentials are required at startup; a missing key is a
/// fatal error here, never a per-request error.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    if config.helpdesk.domain.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "helpdesk.domain must be set".to_string(),
        ));
    }
    if config.helpdesk.email.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "helpdesk.email must be set".to_string(),
        ));
    }
    if config.helpdesk.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "helpdesk.api_key must be set".to_string(),
        ));
    }

    if config.assistant.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "assistant.api_key must be set".to_string(),
        ));
    }
    if config.assistant.assistant_id.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "assistant.assistant_id must be set".to_string(),
        ));
    }

    if config.classifier.max_checks == 0 {
        return Err(ConfigError::ValidationError(
            "classifier.max_checks cannot be 0".to_string(),
        ));
    }

    Ok(())
}
