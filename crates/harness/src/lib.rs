#![deny(warnings)]

mod error;
mod exec;
mod probe;
mod provision;
mod render;
mod suite;
mod validate;

pub use error::HarnessError;
pub use probe::{query_balances, ContractMode, ProbeOutput};
pub use provision::generate_accounts;
pub use render::{render_config, RPC_ENDPOINT_PLACEHOLDER};
pub use suite::{EndpointSuite, ENV_FILE_NAME, RENDERED_CONFIG_NAME};
pub use validate::{validate_report, AccountBalance};
