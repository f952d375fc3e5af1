//! Authentication module
//!
//! Supports: Bearer (application-only), OAuth 1.0a (user context)
//!
//! The `Authenticator` applies the configured scheme to outgoing requests.
//! OAuth 1.0a requests are signed with HMAC-SHA1 over the final request URL.

mod authenticator;
mod oauth1;
mod types;

pub use authenticator::Authenticator;
pub use oauth1::{authorization_header, signature_base_string, OAuth1Nonce};
pub use types::{AuthConfig, OAuth1Credentials};

#[cfg(test)]
mod tests;
