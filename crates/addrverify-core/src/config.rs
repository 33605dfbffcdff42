// crates/addrverify-core/src/config.rs
use crate::error::{AddrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://mappify.io/api/rpc/";
pub const DEFAULT_SERVICE_NAME: &str = "Mappify";

/// Settings for an [`AddressVerifier`](crate::AddressVerifier).
///
/// Only the API key is required; everything else has a working default.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifierConfig {
    pub api_key: String,
    /// Base URL; the autocomplete path is appended to it.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Whole-request timeout. `None` keeps the HTTP client's default.
    #[serde(default)]
    pub timeout: Option<Duration>,
    /// Name stamped into the record's attribution fields.
    #[serde(default = "default_service_name")]
    pub service_name: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

impl VerifierConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: default_endpoint(),
            timeout: None,
            service_name: default_service_name(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AddrError::Config("API key must not be empty".into()));
        }
        if !(self.endpoint.starts_with("https://") || self.endpoint.starts_with("http://")) {
            return Err(AddrError::Config(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        if self.service_name.trim().is_empty() {
            return Err(AddrError::Config("service name must not be empty".into()));
        }
        Ok(())
    }

    /// Full URL of the autocomplete call.
    pub fn autocomplete_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{}", crate::api::AUTOCOMPLETE_PATH)
    }
}

impl fmt::Debug for VerifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerifierConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("service_name", &self.service_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_mappify() {
        let config = VerifierConfig::new("key");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.service_name, "Mappify");
        assert_eq!(config.timeout, None);
        assert_eq!(
            config.autocomplete_url(),
            "https://mappify.io/api/rpc/address/autocomplete"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn url_join_tolerates_missing_trailing_slash() {
        let config = VerifierConfig::new("key").with_endpoint("http://127.0.0.1:1234");
        assert_eq!(
            config.autocomplete_url(),
            "http://127.0.0.1:1234/address/autocomplete"
        );
    }

    #[test]
    fn validate_rejects_bad_settings() {
        assert!(matches!(
            VerifierConfig::new("  ").validate(),
            Err(AddrError::Config(_))
        ));
        assert!(VerifierConfig::new("key")
            .with_endpoint("mappify.io/api")
            .validate()
            .is_err());
        assert!(VerifierConfig::new("key")
            .with_service_name("")
            .validate()
            .is_err());
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = VerifierConfig::new("super-secret");
        assert!(!format!("{config:?}").contains("super-secret"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: VerifierConfig = serde_json::from_str(r#"{"apiKey":"abc"}"#).unwrap();
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.service_name, DEFAULT_SERVICE_NAME);
    }
}
