use anyhow::Result;
use clap::Args;
use config::{Network, Scenario};
use harness::{ContractMode, EndpointSuite};

/// Runs one render -> provision -> probe -> validate round, useful for
/// narrowing down a failing endpoint without re-running the whole suite.
#[derive(Debug, Args)]
pub struct ProbeEndpoint {
    #[clap(short, long)]
    scenario: String,
    #[clap(short, long)]
    network: Network,
    #[clap(short, long)]
    endpoint: String,
    #[clap(long)]
    no_wrapper_contract: bool,
}

impl ProbeEndpoint {
    pub async fn execute(self) -> Result<()> {
        let scenario = Scenario::load(&self.scenario)?;
        let suite = EndpointSuite::new(scenario)?;

        let mode = if self.no_wrapper_contract {
            ContractMode::Direct
        } else {
            ContractMode::Wrapper
        };
        suite
            .check_endpoint(self.network, &self.endpoint, mode)
            .await?;
        Ok(())
    }
}
