//! CLI arguments

use crate::config::{CredentialsConfig, ProbeConfig};
use crate::error::Result;
use crate::output::OutputFormat;
use crate::types::ResultType;
use clap::Parser;
use std::path::PathBuf;

/// Run some searches to see how well the since_id and max_id parameters are
/// working.
///
/// Prints a table of every tweet id returned, marking which search returned
/// it. Credentials may be passed as options or read from environment
/// variables prefixed with TT_ (e.g. TT_BEARER_TOKEN).
#[derive(Parser, Debug)]
#[command(name = "search-probe")]
#[command(author, version, about)]
pub struct Cli {
    /// Search query to run
    pub query: String,

    /// Log extra info about searches to stderr
    #[arg(long, env = "TT_DEBUG")]
    pub debug: bool,

    /// OAuth 2 application bearer token
    #[arg(long, env = "TT_BEARER_TOKEN", hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// OAuth 1.0a consumer app key
    #[arg(long, env = "TT_CONSUMER_KEY", hide_env_values = true)]
    pub consumer_key: Option<String>,

    /// OAuth 1.0a consumer app secret
    #[arg(long, env = "TT_CONSUMER_SECRET", hide_env_values = true)]
    pub consumer_secret: Option<String>,

    /// OAuth 1.0a access token
    #[arg(long, env = "TT_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// OAuth 1.0a access token secret
    #[arg(long, env = "TT_ACCESS_TOKEN_SECRET", hide_env_values = true)]
    pub access_token_secret: Option<String>,

    /// Limit the number of search results (default 50). 0 for no limit
    #[arg(long, env = "TT_LIMIT")]
    pub limit: Option<usize>,

    /// Search result type
    #[arg(long, value_enum)]
    pub result_type: Option<ResultType>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// API root, e.g. for a local mock
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Maximum retries per request
    #[arg(long)]
    pub max_retries: Option<u32>,
}

impl Cli {
    /// Credentials given on the command line or through the environment
    pub fn credentials(&self) -> CredentialsConfig {
        CredentialsConfig {
            bearer_token: self.bearer_token.clone(),
            consumer_key: self.consumer_key.clone(),
            consumer_secret: self.consumer_secret.clone(),
            access_token: self.access_token.clone(),
            access_token_secret: self.access_token_secret.clone(),
        }
    }

    /// Load the config file (if any) and apply argument overrides
    pub fn resolve_config(&self) -> Result<ProbeConfig> {
        let mut config = match &self.config {
            Some(path) => ProbeConfig::from_file(path)?,
            None => ProbeConfig::default(),
        };

        config.credentials.merge(self.credentials());

        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(result_type) = self.result_type {
            config.result_type = result_type;
        }
        if let Some(base_url) = &self.base_url {
            config.api.base_url.clone_from(base_url);
        }
        if let Some(timeout) = self.timeout_secs {
            config.api.timeout_seconds = timeout;
        }
        if let Some(retries) = self.max_retries {
            config.api.max_retries = retries;
        }

        config.validate()?;
        Ok(config)
    }
}
