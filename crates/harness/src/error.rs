use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

/// Everything here is fatal: the suite is a correctness gate and stops
/// at the first violation instead of masking it.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read or write {path}: {source}")]
    ConfigWrite { path: PathBuf, source: io::Error },

    #[error("failed to create scoped working directory: {0}")]
    Workdir(#[from] io::Error),

    #[error("failed to spawn {program}: {source}")]
    Spawn { program: PathBuf, source: io::Error },

    #[error("external process failed with {status}: {stderr}")]
    ProcessFailed { status: ExitStatus, stderr: String },

    #[error("external process did not finish within {secs}s")]
    Timeout { secs: u64 },

    #[error("key generation produced no output")]
    EmptyOutput,

    #[error("balance output is not a valid report: {source}")]
    MalformedOutput { source: serde_json::Error },

    #[error("gas balance of {account} is {value}, expected 0")]
    NonZeroGasBalance { account: String, value: String },

    #[error("token balance of {account} is {value}, expected 0")]
    NonZeroTokenBalance { account: String, value: String },

    #[error("balance report has {actual} accounts, expected {expected}")]
    AccountCountMismatch { expected: usize, actual: usize },
}
