//! HTTP client with retry and rate limiting
//!
//! Provides the transport under the search client:
//! - Automatic retries with configurable backoff
//! - Rate limiting to stay under the search quota
//! - Request signing through the auth module

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use crate::auth::{AuthConfig, Authenticator};
use crate::error::{Error, Result};
use crate::types::BackoffType;
use chrono::Utc;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Wait used for a 429 without any usable reset hint
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL for relative request paths
    pub base_url: Option<String>,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff, also caps waits after a 429
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Duration::from_secs(30),
            max_retries: 3,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(60),
            backoff_type: BackoffType::Exponential,
            rate_limit: Some(RateLimiterConfig::default()),
            user_agent: format!("search-probe/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// Query parameters for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters, sent in key order
    pub query: BTreeMap<String, String>,
}

impl RequestConfig {
    /// Create an empty request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

/// HTTP client with retry and rate limiting
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
    authenticator: Authenticator,
    rate_limiter: Option<RateLimiter>,
}

impl HttpClient {
    /// Create a client that signs every request with `auth_config`
    pub fn with_auth(config: HttpClientConfig, auth_config: AuthConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            authenticator: Authenticator::new(auth_config),
            rate_limiter,
        })
    }

    /// Make a request, retrying failures that [`Error::is_retryable`] accepts.
    ///
    /// A 429 waits for the server's reset hint, capped at `max_backoff`;
    /// everything else retryable waits for [`Self::calculate_backoff`].
    pub async fn request(
        &self,
        method: Method,
        url: &str,
        config: RequestConfig,
    ) -> Result<Response> {
        let full_url = self.build_url(url);
        let max_retries = self.config.max_retries;

        for attempt in 0..=max_retries {
            if let Some(limiter) = &self.rate_limiter {
                limiter.wait().await;
            }

            let mut req = self.client.request(method.clone(), &full_url);
            if !config.query.is_empty() {
                req = req.query(&config.query);
            }

            // Signing must come last: OAuth 1.0a covers the final URL
            let req = self.authenticator.apply(req)?;

            let error = match req.send().await {
                Ok(response) => {
                    let status = response.status();
                    if !status.is_client_error() && !status.is_server_error() {
                        debug!(%method, url = %full_url, attempt, "Request succeeded");
                        return Ok(response);
                    }

                    if status == StatusCode::TOO_MANY_REQUESTS {
                        Error::RateLimited {
                            retry_after_seconds: extract_retry_after(&response),
                        }
                    } else {
                        let body = response.text().await.unwrap_or_default();
                        Error::http_status(status.as_u16(), body)
                    }
                }
                Err(e) if e.is_timeout() => Error::Timeout {
                    timeout_ms: self.config.timeout.as_millis() as u64,
                },
                Err(e) => Error::Http(e),
            };

            if attempt == max_retries || !error.is_retryable() {
                return Err(error);
            }

            let delay = match &error {
                Error::RateLimited {
                    retry_after_seconds,
                } => Duration::from_secs(*retry_after_seconds),
                _ => self.calculate_backoff(attempt),
            }
            .min(self.config.max_backoff);

            warn!(
                attempt = attempt + 1,
                max_attempts = max_retries + 1,
                ?delay,
                "{error}, retrying"
            );
            tokio::time::sleep(delay).await;
        }

        Err(Error::MaxRetriesExceeded { max_retries })
    }

    /// Make a GET request with config and parse the JSON body
    pub async fn get_json_with_config<T: DeserializeOwned>(
        &self,
        url: &str,
        config: RequestConfig,
    ) -> Result<T> {
        let response = self.request(Method::GET, url, config).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.config.base_url {
            Some(base) => {
                let base = base.trim_end_matches('/');
                let path = path.trim_start_matches('/');
                format!("{base}/{path}")
            }
            None => path.to_string(),
        }
    }

    /// Backoff delay before retry number `attempt + 1`, never above `max_backoff`
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let initial = self.config.initial_backoff;
        let delay = match self.config.backoff_type {
            BackoffType::Constant => Some(initial),
            BackoffType::Linear => initial.checked_mul(attempt.saturating_add(1)),
            BackoffType::Exponential => initial.checked_mul(2u32.saturating_pow(attempt)),
        };

        let max = self.config.max_backoff;
        delay.map_or(max, |delay| delay.min(max))
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("config", &self.config)
            .field("auth", &self.authenticator.kind())
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Seconds to wait after a 429.
///
/// Prefers `retry-after`; falls back to the `x-rate-limit-reset` epoch sent by
/// the search API.
fn extract_retry_after(response: &Response) -> u64 {
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.trim().parse::<i64>().ok())
    };

    if let Some(seconds) = header("retry-after") {
        return seconds.max(0) as u64;
    }

    if let Some(reset) = header("x-rate-limit-reset") {
        return (reset - Utc::now().timestamp()).max(1) as u64;
    }

    DEFAULT_RETRY_AFTER_SECS
}
