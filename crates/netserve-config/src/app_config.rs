//! Application configuration
//!
//! Configuration loaded from `.netserve.toml`.

use serde::{Deserialize, Serialize};

/// An operator allowed to sign in to the console
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct OperatorAccount {
    pub username: String,
    pub password: String,
    /// Name shown in the header and the welcome notification
    #[serde(default)]
    pub display_name: String,
}

impl OperatorAccount {
    /// Display name, falling back to the username when none is configured
    pub fn shown_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

/// Application configuration loaded from `.netserve.toml`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Company name shown in the header and on the login screen
    #[serde(default = "default_company_name")]
    pub company_name: String,

    /// In-memory operator list the login screen checks against
    #[serde(default = "default_operators")]
    pub operators: Vec<OperatorAccount>,

    /// Simulated authentication round-trip
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,

    /// Simulated report generation time
    #[serde(default = "default_report_delay_ms")]
    pub report_delay_ms: u64,
}

fn default_company_name() -> String {
    "NetServe SA".to_string()
}

fn default_operators() -> Vec<OperatorAccount> {
    vec![OperatorAccount {
        username: "admin".to_string(),
        password: "netserve".to_string(),
        display_name: "NOC Administrator".to_string(),
    }]
}

fn default_login_delay_ms() -> u64 {
    800
}

fn default_report_delay_ms() -> u64 {
    1500
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            company_name: default_company_name(),
            operators: default_operators(),
            login_delay_ms: default_login_delay_ms(),
            report_delay_ms: default_report_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.company_name, "NetServe SA");
        assert_eq!(config.operators.len(), 1);
        assert_eq!(config.operators[0].username, "admin");
        assert_eq!(config.login_delay_ms, 800);
        assert_eq!(config.report_delay_ms, 1500);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            company_name = "NetServe Chile"
            login_delay_ms = 0
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.company_name, "NetServe Chile");
        assert_eq!(config.login_delay_ms, 0);
        // Untouched fields use defaults
        assert_eq!(config.report_delay_ms, 1500);
        assert_eq!(config.operators, default_operators());
    }

    #[test]
    fn test_config_deserialize_operators() {
        let toml = r#"
            [[operators]]
            username = "mlopez"
            password = "s3cret"
            display_name = "María López"

            [[operators]]
            username = "oncall"
            password = "pager"
        "#;
        let config = AppConfig::parse(toml).unwrap();
        assert_eq!(config.operators.len(), 2);
        assert_eq!(config.operators[0].shown_name(), "María López");
        // Missing display name falls back to the username
        assert_eq!(config.operators[1].shown_name(), "oncall");
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        assert!(AppConfig::parse("login_delay_ms = \"soon\"").is_err());
    }
}
