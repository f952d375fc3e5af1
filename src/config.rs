//! Configuration for a probe run
//!
//! Settings can come from a YAML file; command-line flags and `TT_*`
//! environment variables override file values field by field.
//!
//! ```yaml
//! limit: 50
//! result_type: recent
//! credentials:
//!   bearer_token: "AAAA..."
//! api:
//!   base_url: "https://api.twitter.com"
//!   timeout_seconds: 30
//!   max_retries: 3
//!   retry_backoff:
//!     type: exponential
//!     initial_ms: 250
//!     max_ms: 60000
//!   rate_limit:
//!     enabled: true
//! ```

use crate::auth::AuthConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::search::{DEFAULT_BASE_URL, SEARCH_PATH};
use crate::types::{BackoffType, OptionStringExt, ResultType};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Top-Level Probe Config
// ============================================================================

/// Complete probe configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Credentials for the search API
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// Max ids per walk, 0 for no limit
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// `result_type` sent with every search
    #[serde(default)]
    pub result_type: ResultType,

    /// API endpoint and transport settings
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            credentials: CredentialsConfig::default(),
            limit: default_limit(),
            result_type: ResultType::default(),
            api: ApiConfig::default(),
        }
    }
}

fn default_limit() -> usize {
    50
}

impl ProbeConfig {
    /// Load config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse config from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "api.base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.api.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "api.timeout_seconds",
                "must be greater than zero",
            ));
        }

        if !self.api.search_path.starts_with('/') {
            return Err(Error::invalid_value(
                "api.search_path",
                "must start with '/'",
            ));
        }

        Ok(())
    }

    /// HTTP client settings for the given auth scheme.
    ///
    /// Without an explicit quota the rate limiter follows the scheme's
    /// search quota.
    pub fn http_client_config(&self, auth: &AuthConfig) -> HttpClientConfig {
        let api = &self.api;
        let mut builder = HttpClientConfig::builder()
            .base_url(api.base_url.clone())
            .timeout(Duration::from_secs(api.timeout_seconds))
            .max_retries(api.max_retries)
            .backoff(
                api.retry_backoff.backoff_type,
                Duration::from_millis(api.retry_backoff.initial_ms),
                Duration::from_millis(api.retry_backoff.max_ms),
            );

        builder = if api.rate_limit.enabled {
            let preset = match auth {
                AuthConfig::OAuth1(_) => RateLimiterConfig::user_auth(),
                AuthConfig::Bearer { .. } | AuthConfig::None => RateLimiterConfig::app_auth(),
            };
            builder.rate_limit(RateLimiterConfig::new(
                api.rate_limit
                    .requests_per_minute
                    .unwrap_or(preset.requests_per_minute),
                api.rate_limit.burst_size.unwrap_or(preset.burst_size),
            ))
        } else {
            builder.no_rate_limit()
        };

        builder.build()
    }
}

// ============================================================================
// Credentials
// ============================================================================

/// Raw credential values; resolved into an [`AuthConfig`] before use
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// OAuth 2 application bearer token
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// OAuth 1.0a consumer app key
    #[serde(default)]
    pub consumer_key: Option<String>,

    /// OAuth 1.0a consumer app secret
    #[serde(default)]
    pub consumer_secret: Option<String>,

    /// OAuth 1.0a access token
    #[serde(default)]
    pub access_token: Option<String>,

    /// OAuth 1.0a access token secret
    #[serde(default)]
    pub access_token_secret: Option<String>,
}

impl CredentialsConfig {
    /// Overwrite every field that `other` sets
    pub fn merge(&mut self, other: CredentialsConfig) {
        let CredentialsConfig {
            bearer_token,
            consumer_key,
            consumer_secret,
            access_token,
            access_token_secret,
        } = other;

        for (slot, value) in [
            (&mut self.bearer_token, bearer_token),
            (&mut self.consumer_key, consumer_key),
            (&mut self.consumer_secret, consumer_secret),
            (&mut self.access_token, access_token),
            (&mut self.access_token_secret, access_token_secret),
        ] {
            if let Some(value) = value.none_if_empty() {
                *slot = Some(value);
            }
        }
    }

    /// Pick an auth scheme.
    ///
    /// A bearer token wins; otherwise all four OAuth 1.0a values are needed.
    /// Empty strings count as missing.
    pub fn to_auth(&self) -> Result<AuthConfig> {
        if let Some(token) = self.bearer_token.clone().none_if_empty() {
            return Ok(AuthConfig::bearer(token));
        }

        match (
            self.consumer_key.clone().none_if_empty(),
            self.consumer_secret.clone().none_if_empty(),
            self.access_token.clone().none_if_empty(),
            self.access_token_secret.clone().none_if_empty(),
        ) {
            (Some(key), Some(secret), Some(token), Some(token_secret)) => {
                Ok(AuthConfig::oauth1(key, secret, token, token_secret))
            }
            _ => Err(Error::MissingCredentials),
        }
    }
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("bearer_token", &self.bearer_token.is_some())
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &self.consumer_secret.is_some())
            .field("access_token", &self.access_token.is_some())
            .field("access_token_secret", &self.access_token_secret.is_some())
            .finish()
    }
}

// ============================================================================
// API / HTTP Settings
// ============================================================================

/// Endpoint and transport configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Search endpoint path under `base_url`
    #[serde(default = "default_search_path")]
    pub search_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Maximum number of retries per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Client-side rate limiting
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            search_path: default_search_path(),
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_search_path() -> String {
    SEARCH_PATH.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    250
}

fn default_max_ms() -> u64 {
    60000
}

/// Rate limiting configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Whether to throttle requests client-side
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Sustained requests per minute; defaults to the auth scheme's quota
    #[serde(default)]
    pub requests_per_minute: Option<u32>,

    /// Burst size; defaults to the auth scheme's preset
    #[serde(default)]
    pub burst_size: Option<u32>,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            requests_per_minute: None,
            burst_size: None,
        }
    }
}

fn default_true() -> bool {
    true
}
