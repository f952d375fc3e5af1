// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # search-probe
//!
//! Probe how a search API's `max_id` / `since_id` pagination parameters
//! behave.
//!
//! The same query is searched three ways: without a cursor, with `max_id` set
//! to the newest id found, and with both `max_id` and `since_id` bracketing
//! the ids found. Each search follows pagination backwards through the
//! results, and the ids returned by each are compared side by side.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use search_probe::http::{HttpClient, HttpClientConfig};
//! use search_probe::auth::AuthConfig;
//! use search_probe::search::{collect_ids, SearchParams, TwitterClient};
//!
//! #[tokio::main]
//! async fn main() -> search_probe::Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .base_url("https://api.twitter.com")
//!         .build();
//!     let http = HttpClient::with_auth(config, AuthConfig::bearer("AAAA..."))?;
//!     let client = TwitterClient::new(http);
//!
//!     let params = SearchParams::new("from:rustlang").with("count", 100);
//!     let ids = collect_ids(&client, 250, params).await?;
//!     println!("{} ids", ids.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  cli: args + TT_* env ─► config ─► Runner                    │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┴───────────────────────────────┐
//! │  probe: initial / max_id / max_id+since_id ─► ProbeReport    │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │  walk_ids (max_id cursor)
//! ┌───────────┬──────────────────┴──────────┬────────────────────┐
//! │  search   │  http                       │  auth              │
//! │  SearchApi│  retry, backoff, rate limit │  Bearer, OAuth 1.0a│
//! └───────────┴─────────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// HTTP client with retry and rate limiting
pub mod http;

/// Search capability and the paginated walker
pub mod search;

/// Three-way pagination probe
pub mod probe;

/// Table and JSON rendering
pub mod output;

/// Probe configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use search::{collect_ids, walk_ids, SearchApi, SearchParams, SearchResponse};
