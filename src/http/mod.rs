//! HTTP client module
//!
//! Transport for the search client, with retry, rate limiting, and backoff.
//!
//! # Features
//!
//! - **Automatic Retries**: 5xx, timeouts and connection errors, with backoff
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **Authentication**: Every request is signed through the auth module

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
