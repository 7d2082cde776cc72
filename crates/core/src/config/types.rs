use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::classifier::ClassifierConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub helpdesk: HelpdeskConfig,
    pub assistant: AssistantConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().unwrap()
}

fn default_port() -> u16 {
    8080
}

/// Helpdesk (Zendesk) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HelpdeskConfig {
    /// Zendesk subdomain (e.g. "acme" for https://acme.zendesk.com)
    pub domain: String,
    /// Account email used for basic auth ("{email}/token")
    pub email: String,
    /// Zendesk API token
    pub api_key: String,
    /// Base URL override (tests, self-hosted instances)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Assistant API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    /// Bearer token for the assistant API
    pub api_key: String,
    /// Assistant to run against each session
    pub assistant_id: String,
    /// Base URL override (default: https://api.openai.com/v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub helpdesk: SanitizedHelpdeskConfig,
    pub assistant: SanitizedAssistantConfig,
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedHelpdeskConfig {
    pub domain: String,
    pub email: String,
    pub api_key_set: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedAssistantConfig {
    pub assistant_id: String,
    pub api_key_set: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            helpdesk: SanitizedHelpdeskConfig {
                domain: config.helpdesk.domain.clone(),
                email: config.helpdesk.email.clone(),
                api_key_set: !config.helpdesk.api_key.is_empty(),
            },
            assistant: SanitizedAssistantConfig {
                assistant_id: config.assistant.assistant_id.clone(),
                api_key_set: !config.assistant.api_key.is_empty(),
            },
            classifier: config.classifier.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> Config {
        Config {
            server: ServerConfig::default(),
            helpdesk: HelpdeskConfig {
                domain: "acme".to_string(),
                email: "agent@acme.com".to_string(),
                api_key: "zd-secret".to_string(),
                base_url: None,
            },
            assistant: AssistantConfig {
                api_key: "sk-secret".to_string(),
                assistant_id: "asst_123".to_string(),
                base_url: None,
            },
            classifier: ClassifierConfig::default(),
        }
    }

    #[test]
    fn test_sanitized_config_redacts_secrets() {
        let sanitized = SanitizedConfig::from(&full_config());

        let json = serde_json::to_string(&sanitized).unwrap();
        assert!(!json.contains("zd-secret"));
        assert!(!json.contains("sk-secret"));
        assert!(sanitized.helpdesk.api_key_set);
        assert!(sanitized.assistant.api_key_set);
        assert_eq!(sanitized.helpdesk.domain, "acme");
        assert_eq!(sanitized.assistant.assistant_id, "asst_123");
    }

    #[test]
    fn test_server_config_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.port, 8080);
        assert_eq!(server.host.to_string(), "0.0.0.0");
    }
}
