use std::{
    fs,
    path::PathBuf,
    time::Duration,
};

use config::{Check, Network, Scenario};
use tempfile::TempDir;

use crate::{
    probe::{query_balances, ContractMode},
    provision::generate_accounts,
    render::render_config,
    validate::validate_report,
    HarnessError,
};

/// File names the external processor expects in its working directory.
pub const RENDERED_CONFIG_NAME: &str = "config-payments.toml";
pub const ENV_FILE_NAME: &str = ".env";

/// Drives the render -> provision -> probe -> validate pipeline over
/// every (endpoint, mode) combination of a scenario. Iterations run
/// strictly one after another and each gets its own scoped working
/// directory, removed on every exit path. The first failing iteration
/// aborts the whole suite.
pub struct EndpointSuite {
    processor: PathBuf,
    template: PathBuf,
    account_count: usize,
    probe_timeout: Duration,
    checks: Vec<Check>,
}

impl EndpointSuite {
    pub fn new(scenario: Scenario) -> Result<Self, HarnessError> {
        // the probe runs inside a scoped dir, so relative paths from the
        // scenario file must be resolved before the cwd changes
        let processor =
            fs::canonicalize(&scenario.processor).map_err(|source| HarnessError::Spawn {
                program: scenario.processor.clone(),
                source,
            })?;
        let template =
            fs::canonicalize(&scenario.template).map_err(|source| HarnessError::ConfigWrite {
                path: scenario.template.clone(),
                source,
            })?;

        Ok(Self {
            processor,
            template,
            account_count: scenario.account_count,
            probe_timeout: Duration::from_secs(scenario.probe_timeout_secs),
            checks: scenario.checks,
        })
    }

    pub async fn run(&self) -> Result<(), HarnessError> {
        for check in &self.checks {
            self.run_network(check.network, &check.endpoints).await?;
        }
        Ok(())
    }

    pub async fn run_network(
        &self,
        network: Network,
        endpoints: &[String],
    ) -> Result<(), HarnessError> {
        for endpoint in endpoints {
            for mode in [ContractMode::Wrapper, ContractMode::Direct] {
                self.check_endpoint(network, endpoint, mode).await?;
            }
        }
        Ok(())
    }

    /// One full pipeline round for a single endpoint/mode combination.
    pub async fn check_endpoint(
        &self,
        network: Network,
        endpoint: &str,
        mode: ContractMode,
    ) -> Result<usize, HarnessError> {
        log::info!("checking endpoint {} on {} ({})", endpoint, network, mode.label());

        let workdir = TempDir::new()?;
        render_config(
            &self.template,
            endpoint,
            &workdir.path().join(RENDERED_CONFIG_NAME),
        )?;
        generate_accounts(
            &self.processor,
            self.account_count,
            &workdir.path().join(ENV_FILE_NAME),
            self.probe_timeout,
        )
        .await?;
        let output = query_balances(
            &self.processor,
            network,
            mode,
            workdir.path(),
            self.probe_timeout,
        )
        .await?;

        let passed = validate_report(&output.stdout, &output.stderr, self.account_count)?;
        log::info!("{} - {} accounts at zero balance", endpoint, passed);
        Ok(passed)
    }
}
