use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{probe_endpoint::ProbeEndpoint, run_suite::RunSuite};

#[derive(Subcommand)]
pub enum Commands {
    /// Run every endpoint check of a scenario
    Run(RunSuite),
    /// Check a single endpoint/mode combination
    Probe(ProbeEndpoint),
}

#[derive(Parser)]
pub struct CommandLine {
    #[command(subcommand)]
    command: Commands,
}

impl CommandLine {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Run(c) => c.execute().await,
            Commands::Probe(c) => c.execute().await,
        }
    }
}
