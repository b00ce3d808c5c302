use std::{
    path::Path,
    process::{Output, Stdio},
    time::Duration,
};

use tokio::{process::Command, time::timeout};

use crate::HarnessError;

/// Runs the command to completion with a hard deadline, capturing both
/// output streams. A non-zero exit status is an error even if the
/// process printed something usable on stdout.
pub(crate) async fn run_captured(
    mut command: Command,
    program: &Path,
    deadline: Duration,
) -> Result<Output, HarnessError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = command.spawn().map_err(|source| HarnessError::Spawn {
        program: program.to_path_buf(),
        source,
    })?;

    let output = timeout(deadline, child.wait_with_output())
        .await
        .map_err(|_| HarnessError::Timeout {
            secs: deadline.as_secs(),
        })?
        .map_err(|source| HarnessError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(HarnessError::ProcessFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output)
}
