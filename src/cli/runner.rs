//! CLI runner - executes the probe

use crate::cli::commands::Cli;
use crate::config::ProbeConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::output::render;
use crate::probe::{initial_params, Probe, ProbeOutcome};
use crate::search::{SearchApi, TwitterClient};
use tracing::info;

/// Printed when the initial search returns nothing
pub const NO_RESULTS_MESSAGE: &str = "Sorry folks, no results!";

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve config, build the API client, run the probe and print the result
    pub async fn run(&self) -> Result<()> {
        let config = self.cli.resolve_config()?;
        let auth = config.credentials.to_auth()?;

        info!(
            auth = auth.kind(),
            base_url = %config.api.base_url,
            limit = config.limit,
            "Starting probe"
        );

        let http = HttpClient::with_auth(config.http_client_config(&auth), auth)?;
        let client = TwitterClient::new(http)
            .with_search_path(config.api.search_path.clone());

        let output = self.execute(&client, &config).await?;
        println!("{output}");
        Ok(())
    }

    /// Run the probe against `api` and render the outcome
    pub async fn execute<A>(&self, api: &A, config: &ProbeConfig) -> Result<String>
    where
        A: SearchApi + ?Sized,
    {
        let params = initial_params(&self.cli.query, config.result_type, config.limit);

        match Probe::new(api, config.limit).run(params).await? {
            ProbeOutcome::NoResults { .. } => Ok(NO_RESULTS_MESSAGE.to_string()),
            ProbeOutcome::Report(report) => render(&report, self.cli.format),
        }
    }
}
