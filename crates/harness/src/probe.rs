use std::{path::Path, time::Duration};

use config::Network;
use tokio::process::Command;

use crate::{exec::run_captured, HarnessError};

/// Whether the balance query goes through the wrapper-token contract
/// (the processor default) or queries the chain directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContractMode {
    #[default]
    Wrapper,
    Direct,
}

impl ContractMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wrapper => "wrapper-contract",
            Self::Direct => "direct",
        }
    }
}

/// Raw output streams of a single balance query, unmodified.
#[derive(Debug)]
pub struct ProbeOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Runs one balance query against the given network. The processor picks
/// up the rendered config and the env file from `workdir`, so the caller
/// must have provisioned both there first.
pub async fn query_balances(
    processor: &Path,
    network: Network,
    mode: ContractMode,
    workdir: &Path,
    deadline: Duration,
) -> Result<ProbeOutput, HarnessError> {
    let mut command = Command::new(processor);
    command.arg("balance").arg("-c").arg(network.as_str());
    if mode == ContractMode::Direct {
        command.arg("--no-wrapper-contract");
    }
    command.current_dir(workdir);

    log::info!("querying balances on {} ({})", network, mode.label());
    let output = run_captured(command, processor, deadline).await?;

    Ok(ProbeOutput {
        stdout: output.stdout,
        stderr: output.stderr,
    })
}
