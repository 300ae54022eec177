use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_range, validate_url_template, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_DEADLINE_MS: u64 = 1000;
pub const MAX_DEADLINE_MS: u64 = 60_000;
/// Extra time a provider request may run past the deadline before the HTTP
/// client gives up on it.
pub const REQUEST_TIMEOUT_GRACE: Duration = Duration::from_secs(1);
pub const VIACEP_URL_TEMPLATE: &str = "https://viacep.com.br/ws/{cep}/json/";
pub const BRASILAPI_URL_TEMPLATE: &str = "https://brasilapi.com.br/api/cep/v1/{cep}";

/// Environment variable naming an optional TOML file that overrides defaults.
pub const CONFIG_PATH_ENV: &str = "CEP_RACE_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceConfig {
    pub deadline_ms: u64,
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub viacep: ProviderEndpoint,
    pub brasilapi: ProviderEndpoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEndpoint {
    pub url_template: String,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            deadline_ms: DEFAULT_DEADLINE_MS,
            providers: ProvidersConfig::default(),
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            viacep: ProviderEndpoint {
                url_template: VIACEP_URL_TEMPLATE.to_string(),
            },
            brasilapi: ProviderEndpoint {
                url_template: BRASILAPI_URL_TEMPLATE.to_string(),
            },
        }
    }
}

impl RaceConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Reads the file named by `CEP_RACE_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::debug!("Loading configuration from: {}", path);
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Replaces `${VAR}` with the environment value; unknown names are kept.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LookupError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// Transport-level bound for a single provider request. It outlives the
    /// deadline so a slow provider is reported as a race timeout, not as a
    /// transport failure.
    pub fn request_timeout(&self) -> Duration {
        self.deadline() + REQUEST_TIMEOUT_GRACE
    }
}

impl Validate for RaceConfig {
    fn validate(&self) -> Result<()> {
        validate_range("deadline_ms", self.deadline_ms, 1, MAX_DEADLINE_MS)?;
        validate_url_template(
            "providers.viacep.url_template",
            &self.providers.viacep.url_template,
        )?;
        validate_url_template(
            "providers.brasilapi.url_template",
            &self.providers.brasilapi.url_template,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_public_endpoints() {
        let config = RaceConfig::default();
        assert_eq!(config.deadline(), Duration::from_secs(1));
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
        assert_eq!(config.providers.viacep.url_template, VIACEP_URL_TEMPLATE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RaceConfig::from_toml_str("deadline_ms = 250\n").unwrap();

        assert_eq!(config.deadline_ms, 250);
        assert_eq!(
            config.providers.brasilapi.url_template,
            BRASILAPI_URL_TEMPLATE
        );
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CEP_RACE_TEST_VIACEP_HOST", "http://localhost:9000");

        let toml_content = r#"
[providers.viacep]
url_template = "${CEP_RACE_TEST_VIACEP_HOST}/ws/{cep}/json/"
"#;

        let config = RaceConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.providers.viacep.url_template,
            "http://localhost:9000/ws/{cep}/json/"
        );

        std::env::remove_var("CEP_RACE_TEST_VIACEP_HOST");
    }

    #[test]
    fn test_config_validation() {
        let zero_deadline = RaceConfig::from_toml_str("deadline_ms = 0\n").unwrap();
        assert!(zero_deadline.validate().is_err());

        let missing_placeholder = RaceConfig::from_toml_str(
            r#"
[providers.brasilapi]
url_template = "https://brasilapi.com.br/api/cep/v1/"
"#,
        )
        .unwrap();
        assert!(missing_placeholder.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = RaceConfig::from_toml_str("deadline_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, LookupError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
deadline_ms = 1500

[providers.brasilapi]
url_template = "http://127.0.0.1:8080/cep/{cep}"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = RaceConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.deadline(), Duration::from_millis(1500));
        assert_eq!(
            config.providers.brasilapi.url_template,
            "http://127.0.0.1:8080/cep/{cep}"
        );
        assert!(config.validate().is_ok());
    }
}
