use std::{fs::File, io::Read, path::PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;

use crate::Network;

fn default_account_count() -> usize {
    7
}

fn default_probe_timeout_secs() -> u64 {
    300
}

/// One network with the endpoints to verify against it.
#[derive(Debug, Deserialize)]
pub struct Check {
    pub network: Network,
    pub endpoints: Vec<String>,
}

/// A full verification run: which processor binary to drive, which
/// config template to render, and which endpoints to check per network.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub processor: PathBuf,
    pub template: PathBuf,
    #[serde(default = "default_account_count")]
    pub account_count: usize,
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
    #[serde(rename = "check", default)]
    pub checks: Vec<Check>,
}

impl Scenario {
    pub fn load(path: &str) -> Result<Self> {
        let mut file = File::open(path)?;

        let mut str = String::new();
        file.read_to_string(&mut str)?;

        Self::parse(&str)
    }

    fn parse(str: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(str)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> Result<()> {
        if self.account_count < 1 {
            return Err(anyhow!("account_count must be at least 1"));
        }
        if self.probe_timeout_secs < 1 {
            return Err(anyhow!("probe_timeout_secs must be at least 1"));
        }
        if self.checks.is_empty() {
            return Err(anyhow!("scenario has no check blocks"));
        }
        for check in &self.checks {
            if check.endpoints.is_empty() {
                return Err(anyhow!("no endpoints listed for network {}", check.network));
            }
            if check.endpoints.iter().any(|e| e.is_empty()) {
                return Err(anyhow!("empty endpoint url for network {}", check.network));
            }
        }
        Ok(())
    }
}
