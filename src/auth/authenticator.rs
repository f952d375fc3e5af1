//! Authenticator implementation
//!
//! Applies the configured authentication scheme to request builders.

use super::oauth1::{authorization_header, OAuth1Nonce};
use super::types::AuthConfig;
use crate::error::{Error, Result};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::RequestBuilder;

/// Authenticator handles applying authentication to HTTP requests
#[derive(Debug, Clone, Default)]
pub struct Authenticator {
    config: AuthConfig,
}

impl Authenticator {
    /// Create a new authenticator with the given config
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Name of the configured scheme
    pub fn kind(&self) -> &'static str {
        self.config.kind()
    }

    /// Apply authentication to a request builder.
    ///
    /// OAuth 1.0a signs the request as built so far, so query parameters must
    /// already be set.
    pub fn apply(&self, req: RequestBuilder) -> Result<RequestBuilder> {
        match &self.config {
            AuthConfig::None => Ok(req),

            AuthConfig::Bearer { token } => Ok(req.bearer_auth(token)),

            AuthConfig::OAuth1(credentials) => {
                let (client, request) = req.build_split();
                let mut request = request?;

                let header = authorization_header(
                    request.method(),
                    request.url(),
                    credentials,
                    &OAuth1Nonce::generate(),
                )?;
                let value = HeaderValue::from_str(&header)
                    .map_err(|e| Error::auth(format!("Invalid OAuth header: {e}")))?;
                request.headers_mut().insert(AUTHORIZATION, value);

                Ok(RequestBuilder::from_parts(client, request))
            }
        }
    }
}
