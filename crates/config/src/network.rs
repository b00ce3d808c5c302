use std::{fmt, str::FromStr};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Chain label passed through unchanged to the external processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Holesky,
    Polygon,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Holesky => "holesky",
            Self::Polygon => "polygon",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holesky" => Ok(Self::Holesky),
            "polygon" => Ok(Self::Polygon),
            _ => Err(anyhow!("Unknown network: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_networks() {
        assert_eq!("holesky".parse::<Network>().unwrap(), Network::Holesky);
        assert_eq!("polygon".parse::<Network>().unwrap(), Network::Polygon);
    }

    #[test]
    fn reject_unknown_network() {
        assert!("mainnet".parse::<Network>().is_err());
        assert!("Holesky".parse::<Network>().is_err());
    }
}
