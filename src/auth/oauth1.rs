//! OAuth 1.0a request signing (HMAC-SHA1, RFC 5849)

use super::types::OAuth1Credentials;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Method;
use sha1::Sha1;
use url::Url;
use uuid::Uuid;

type HmacSha1 = Hmac<Sha1>;

/// Everything except RFC 3986 unreserved characters gets encoded
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Per-request nonce and timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuth1Nonce {
    /// Unique request token
    pub nonce: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl OAuth1Nonce {
    /// Fresh random nonce stamped with the current time
    pub fn generate() -> Self {
        Self {
            nonce: Uuid::new_v4().simple().to_string(),
            timestamp: Utc::now().timestamp(),
        }
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Scheme, host, optional non-default port and path. No query or fragment.
fn base_url(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    match url.port() {
        Some(port) => format!("{}://{host}:{port}{}", url.scheme(), url.path()),
        None => format!("{}://{host}{}", url.scheme(), url.path()),
    }
}

/// Build the signature base string for a request.
///
/// `oauth_params` are the `oauth_*` protocol parameters, excluding the
/// signature itself. Query parameters are taken from `url`.
pub fn signature_base_string(
    method: &Method,
    url: &Url,
    oauth_params: &[(&str, String)],
) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (encode(&k), encode(&v)))
        .chain(oauth_params.iter().map(|(k, v)| (encode(k), encode(v))))
        .collect();
    pairs.sort();

    let parameter_string = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.as_str().to_ascii_uppercase(),
        encode(&base_url(url)),
        encode(&parameter_string)
    )
}

/// Build the `Authorization` header value for a signed request
pub fn authorization_header(
    method: &Method,
    url: &Url,
    credentials: &OAuth1Credentials,
    nonce: &OAuth1Nonce,
) -> Result<String> {
    let mut oauth_params = vec![
        ("oauth_consumer_key", credentials.consumer_key.clone()),
        ("oauth_nonce", nonce.nonce.clone()),
        ("oauth_signature_method", "HMAC-SHA1".to_string()),
        ("oauth_timestamp", nonce.timestamp.to_string()),
        ("oauth_token", credentials.access_token.clone()),
        ("oauth_version", "1.0".to_string()),
    ];

    let base = signature_base_string(method, url, &oauth_params);
    let signing_key = format!(
        "{}&{}",
        encode(&credentials.consumer_secret),
        encode(&credentials.access_token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
        .map_err(|e| Error::auth(format!("Invalid OAuth signing key: {e}")))?;
    mac.update(base.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    oauth_params.push(("oauth_signature", signature));
    oauth_params.sort();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {fields}"))
}
