use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
///
/// Env keys nest on a double underscore so snake_case fields stay
/// addressable, e.g. `TAGGART_CLASSIFIER__MAX_CHECKS`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("TAGGART_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL: &str = r#"
[helpdesk]
domain = "acme"
email = "agent@acme.com"
api_key = "zd-token"

[assistant]
api_key = "sk-test"
assistant_id = "asst_123"
"#;

    #[test]
    fn test_load_config_from_str_valid() {
        let config = load_config_from_str(MINIMAL).unwrap();
        assert_eq!(config.helpdesk.domain, "acme");
        assert_eq!(config.assistant.assistant_id, "asst_123");
        // Defaults kick in for omitted sections
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.classifier.max_checks, 30);
        assert_eq!(config.classifier.poll_interval_ms, 1000);
    }

    #[test]
    fn test_load_config_from_str_missing_helpdesk() {
        let toml = r#"
[assistant]
api_key = "sk-test"
assistant_id = "asst_123"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_env_overrides_snake_case_keys() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("config.toml", MINIMAL)?;
            jail.set_env("TAGGART_HELPDESK__DOMAIN", "overridden");
            jail.set_env("TAGGART_HELPDESK__API_KEY", "env-token");

            let config = load_config(Path::new("config.toml")).unwrap();
            assert_eq!(config.helpdesk.domain, "overridden");
            assert_eq!(config.helpdesk.api_key, "env-token");
            // File values without an override are untouched.
            assert_eq!(config.helpdesk.email, "agent@acme.com");
            Ok(())
        });
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"
{MINIMAL}

[server]
host = "127.0.0.1"
port = 3000

[classifier]
poll_interval_ms = 250
max_checks = 5
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host.to_string(), "127.0.0.1");
        assert_eq!(config.classifier.poll_interval_ms, 250);
        assert_eq!(config.classifier.max_checks, 5);
    }
}
