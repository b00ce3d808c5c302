use std::{fs, path::Path, time::Duration};

use tokio::process::Command;

use crate::{exec::run_captured, HarnessError};

/// Asks the external processor for `count` fresh accounts and captures
/// the printed credentials into the env file the balance query reads.
/// The file content is opaque to the harness.
pub async fn generate_accounts(
    processor: &Path,
    count: usize,
    env_file: &Path,
    deadline: Duration,
) -> Result<(), HarnessError> {
    let mut command = Command::new(processor);
    command.arg("generate-key").arg("-n").arg(count.to_string());

    log::info!("generating {} fresh accounts", count);
    let output = run_captured(command, processor, deadline).await?;

    if output.stdout.is_empty() {
        return Err(HarnessError::EmptyOutput);
    }

    fs::write(env_file, &output.stdout).map_err(|source| HarnessError::ConfigWrite {
        path: env_file.to_path_buf(),
        source,
    })?;

    log::debug!(
        "wrote {} credential bytes to {}",
        output.stdout.len(),
        env_file.display()
    );
    Ok(())
}
