use anyhow::Result;
use clap::Args;
use config::Scenario;
use harness::EndpointSuite;

#[derive(Debug, Args)]
pub struct RunSuite {
    #[clap(short, long)]
    scenario: String,
}

impl RunSuite {
    pub async fn execute(self) -> Result<()> {
        let scenario = Scenario::load(&self.scenario)?;
        let suite = EndpointSuite::new(scenario)?;
        suite.run().await?;
        log::info!("all endpoint checks passed");
        Ok(())
    }
}
