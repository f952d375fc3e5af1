//! Tests for the auth module

use super::*;
use pretty_assertions::assert_eq;
use reqwest::Method;
use url::Url;

/// Credentials and request from the Twitter "Creating a signature" walkthrough
fn documented_credentials() -> OAuth1Credentials {
    OAuth1Credentials {
        consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
        consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
        access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
        access_token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
    }
}

fn documented_nonce() -> OAuth1Nonce {
    OAuth1Nonce {
        nonce: "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg".to_string(),
        timestamp: 1_318_622_958,
    }
}

fn documented_url() -> Url {
    Url::parse(
        "https://api.twitter.com/1.1/statuses/update.json?include_entities=true\
         &status=Hello%20Ladies%20%2B%20Gentlemen%2C%20a%20signed%20OAuth%20request%21",
    )
    .unwrap()
}

#[test]
fn test_signature_base_string_matches_documented_example() {
    let credentials = documented_credentials();
    let nonce = documented_nonce();
    let oauth_params = vec![
        ("oauth_consumer_key", credentials.consumer_key.clone()),
        ("oauth_nonce", nonce.nonce.clone()),
        ("oauth_signature_method", "HMAC-SHA1".to_string()),
        ("oauth_timestamp", nonce.timestamp.to_string()),
        ("oauth_token", credentials.access_token.clone()),
        ("oauth_version", "1.0".to_string()),
    ];

    let base = signature_base_string(&Method::POST, &documented_url(), &oauth_params);

    assert_eq!(
        base,
        "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&\
         include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26\
         oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26\
         oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26\
         oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26\
         oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen\
         %252C%2520a%2520signed%2520OAuth%2520request%2521"
    );
}

#[test]
fn test_authorization_header_matches_documented_signature() {
    let header = authorization_header(
        &Method::POST,
        &documented_url(),
        &documented_credentials(),
        &documented_nonce(),
    )
    .unwrap();

    let consumer_key = "OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", ";
    let signature = "oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\"";
    assert!(header.starts_with(consumer_key));
    assert!(header.contains(signature));
    assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
    assert!(header.ends_with("oauth_version=\"1.0\""));
}

#[test]
fn test_signature_base_string_keeps_non_default_port() {
    let url = Url::parse("http://LOCALHOST:8080/search?q=a+b").unwrap();

    let base = signature_base_string(&Method::GET, &url, &[]);

    assert_eq!(
        base,
        "GET&http%3A%2F%2Flocalhost%3A8080%2Fsearch&q%3Da%2520b"
    );
}

#[test]
fn test_signature_base_string_sorts_duplicate_keys_by_value() {
    let url = Url::parse("https://example.com/p?b=2&a=z&a=y").unwrap();

    let base = signature_base_string(&Method::GET, &url, &[]);

    assert!(base.ends_with("&a%3Dy%26a%3Dz%26b%3D2"));
}

#[test]
fn test_nonce_generate_is_unique() {
    let first = OAuth1Nonce::generate();
    let second = OAuth1Nonce::generate();
    assert_ne!(first.nonce, second.nonce);
    assert_eq!(first.nonce.len(), 32);
    assert!(first.timestamp > 1_318_622_958);
}

#[test]
fn test_no_auth() {
    let auth = Authenticator::new(AuthConfig::None);
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api")).unwrap();

    let built = req.build().unwrap();
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_bearer_auth() {
    let auth = Authenticator::new(AuthConfig::bearer("my-token"));
    let client = reqwest::Client::new();
    let req = auth.apply(client.get("https://example.com/api")).unwrap();

    let built = req.build().unwrap();
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer my-token"
    );
    assert_eq!(auth.kind(), "bearer");
}

#[test]
fn test_oauth1_auth_signs_final_url() {
    let auth = Authenticator::new(AuthConfig::OAuth1(documented_credentials()));
    let client = reqwest::Client::new();
    let req = client
        .get("https://api.twitter.com/1.1/search/tweets.json")
        .query(&[("q", "rust"), ("count", "100")]);

    let built = auth.apply(req).unwrap().build().unwrap();

    let header = built
        .headers()
        .get("Authorization")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(header.starts_with("OAuth "));
    let token = "oauth_token=\"370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\"";
    assert!(header.contains(token));
    assert_eq!(built.url().query(), Some("q=rust&count=100"));
}
