//! Site configuration
//!
//! Native builds read `rejuvana.toml`; every field has a default so a missing
//! file is not an error. Secrets are never stored in the file: `[feed]` and
//! `[lead]` name the environment variables that hold them.
//!
//! ```toml
//! [server]
//! port = 8080
//!
//! [feed]
//! model = "gemini-3-pro-preview"
//! api_key_env = "GEMINI_API_KEY"
//!
//! [lead]
//! token_env = "REACH_API_TOKEN"
//! ```

use crate::feed::FeedAccount;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure loaded from rejuvana.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub lead: LeadConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

// ============= Feed Configuration =============

/// Generative search API used for the directory feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_account_handle")]
    pub account_handle: String,

    #[serde(default = "default_profile_url")]
    pub profile_url: String,

    #[serde(default = "default_post_count")]
    pub post_count: u32,

    #[serde(default = "default_feed_timeout")]
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            account_handle: default_account_handle(),
            profile_url: default_profile_url(),
            post_count: default_post_count(),
            timeout_secs: default_feed_timeout(),
        }
    }
}

impl FeedConfig {
    /// `generateContent` URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    pub fn account(&self) -> FeedAccount {
        FeedAccount {
            handle: self.account_handle.clone(),
            profile_url: self.profile_url.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-3-pro-preview".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_account_handle() -> String {
    FeedAccount::default().handle
}

fn default_profile_url() -> String {
    FeedAccount::default().profile_url
}

fn default_post_count() -> u32 {
    12
}

fn default_feed_timeout() -> u64 {
    30
}

// ============= Lead Configuration =============

/// CRM contacts endpoint used by the contact form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadConfig {
    #[serde(default = "default_lead_endpoint")]
    pub endpoint: String,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Prefix for the contact note, rendered as `[tag]`
    #[serde(default = "default_routing_tag")]
    pub routing_tag: String,

    /// Maximum note length accepted by the CRM
    #[serde(default = "default_note_limit")]
    pub note_limit: usize,

    #[serde(default = "default_lead_timeout")]
    pub timeout_secs: u64,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            endpoint: default_lead_endpoint(),
            token_env: default_token_env(),
            routing_tag: default_routing_tag(),
            note_limit: default_note_limit(),
            timeout_secs: default_lead_timeout(),
        }
    }
}

impl LeadConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_lead_endpoint() -> String {
    "https://developers.hostinger.com/api/reach/v1/contacts".to_string()
}

fn default_token_env() -> String {
    "REACH_API_TOKEN".to_string()
}

fn default_routing_tag() -> String {
    "Website Lead".to_string()
}

fn default_note_limit() -> usize {
    255
}

fn default_lead_timeout() -> u64 {
    15
}

// ============= Errors =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[cfg(feature = "server")]
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl SiteConfig {
    /// Load configuration from a TOML file
    #[cfg(feature = "server")]
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Like [`SiteConfig::load`], but a missing file yields the defaults
    #[cfg(feature = "server")]
    pub fn load_or_default<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path.as_ref()) {
            Err(ConfigError::FileNotFound(path)) => {
                tracing::info!(
                    "No configuration at {}, using defaults",
                    path.display()
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    #[cfg(feature = "server")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges and required values. Secrets are checked separately.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        if !(1..=50).contains(&self.feed.post_count) {
            return Err(ConfigError::ValidationError(format!(
                "feed.post_count must be between 1 and 50, got {}",
                self.feed.post_count
            )));
        }
        if self.feed.timeout_secs == 0 || self.lead.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be at least one second".to_string(),
            ));
        }
        if self.feed.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.model must not be empty".to_string(),
            ));
        }
        for (field, url) in [
            ("feed.api_base", &self.feed.api_base),
            ("feed.profile_url", &self.feed.profile_url),
            ("lead.endpoint", &self.lead.endpoint),
        ] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be an http(s) URL, got '{}'",
                    field, url
                )));
            }
        }
        if self.lead.note_limit == 0 {
            return Err(ConfigError::ValidationError(
                "lead.note_limit must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Check that every referenced secret is present in the environment
    pub fn validate_secrets(&self) -> Result<(), ConfigError> {
        self.feed_api_key()?;
        self.lead_token()?;
        Ok(())
    }

    /// Get a resolved value from an env var reference
    pub fn resolve_env(&self, env_name: &str) -> Option<String> {
        std::env::var(env_name).ok().filter(|v| !v.is_empty())
    }

    /// Get the generative API key from the environment
    pub fn feed_api_key(&self) -> Result<String, ConfigError> {
        self.resolve_env(&self.feed.api_key_env)
            .ok_or_else(|| ConfigError::MissingEnvVar(self.feed.api_key_env.clone()))
    }

    /// Get the CRM bearer token from the environment
    pub fn lead_token(&self) -> Result<String, ConfigError> {
        self.resolve_env(&self.lead.token_env)
            .ok_or_else(|| ConfigError::MissingEnvVar(self.lead.token_env.clone()))
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.feed.post_count, 12);
        assert_eq!(config.feed.timeout(), Duration::from_secs(30));
        assert_eq!(config.lead.note_limit, 255);
        assert_eq!(config.lead.routing_tag, "Website Lead");
    }

    #[test]
    fn test_feed_endpoint() {
        let feed = FeedConfig {
            api_base: "http://localhost:9000/v1beta/".to_string(),
            ..FeedConfig::default()
        };
        assert_eq!(
            feed.endpoint(),
            "http://localhost:9000/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
port = 9090
log_level = "debug"

[feed]
account_handle = "someone"
post_count = 6

[lead]
routing_tag = "Spring Campaign"
"#
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.feed.account().handle, "someone");
        assert_eq!(config.feed.post_count, 6);
        assert_eq!(config.lead.routing_tag, "Spring Campaign");
        assert_eq!(config.lead.timeout_secs, 15);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(matches!(
            SiteConfig::load(&path),
            Err(ConfigError::FileNotFound(_))
        ));
        let config = SiteConfig::load_or_default(&path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(
            SiteConfig::from_toml_str("[feed]\npost_count = 0"),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[lead]\nendpoint = \"ftp://crm\""),
            Err(ConfigError::ValidationError(_))
        ));
        assert!(matches!(
            SiteConfig::from_toml_str("[server\nport = 1"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_secrets_resolve_from_env() {
        let config = SiteConfig::from_toml_str(
            "[feed]\napi_key_env = \"REJUVANA_TEST_FEED_KEY\"\n\n[lead]\ntoken_env = \"REJUVANA_TEST_LEAD_TOKEN\"",
        )
        .unwrap();

        std::env::set_var("REJUVANA_TEST_FEED_KEY", "key-123");
        std::env::remove_var("REJUVANA_TEST_LEAD_TOKEN");

        assert_eq!(config.feed_api_key().unwrap(), "key-123");
        assert!(matches!(
            config.validate_secrets(),
            Err(ConfigError::MissingEnvVar(name)) if name == "REJUVANA_TEST_LEAD_TOKEN"
        ));
    }
}
