//! Auth configuration types

/// OAuth 1.0a consumer and access credentials
#[derive(Clone, PartialEq, Eq)]
pub struct OAuth1Credentials {
    /// Consumer (app) key
    pub consumer_key: String,
    /// Consumer (app) secret
    pub consumer_secret: String,
    /// User access token
    pub access_token: String,
    /// User access token secret
    pub access_token_secret: String,
}

impl std::fmt::Debug for OAuth1Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuth1Credentials")
            .field("consumer_key", &self.consumer_key)
            .finish_non_exhaustive()
    }
}

/// Authentication configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication
    #[default]
    None,

    /// OAuth 2 application-only bearer token
    Bearer {
        /// The bearer token
        token: String,
    },

    /// OAuth 1.0a user-context signing
    OAuth1(OAuth1Credentials),
}

impl AuthConfig {
    /// Bearer token auth
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer {
            token: token.into(),
        }
    }

    /// OAuth 1.0a auth
    pub fn oauth1(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_token_secret: impl Into<String>,
    ) -> Self {
        Self::OAuth1(OAuth1Credentials {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_token_secret: access_token_secret.into(),
        })
    }

    /// Short name of the scheme, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bearer { .. } => "bearer",
            Self::OAuth1(_) => "oauth1",
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bearer { .. } => f.debug_struct("Bearer").finish_non_exhaustive(),
            Self::OAuth1(credentials) => f.debug_tuple("OAuth1").field(credentials).finish(),
        }
    }
}
