use std::collections::BTreeMap;

use serde::Deserialize;

use crate::HarnessError;

/// Per-account balances as printed by the processor. Both values are
/// decimal strings; the processor prints extra fields (human-readable
/// amounts) which are ignored here.
#[derive(Debug, Deserialize)]
pub struct AccountBalance {
    pub gas: String,
    pub token: String,
}

/// Parses a balance report and enforces the zero-balance invariants.
/// Balances are compared as strings on purpose: the only passing value
/// is the canonical "0", so "0.0" or "00" fail the check.
///
/// Returns the number of accounts that passed, which must equal
/// `expected` for the report to be accepted.
pub fn validate_report(
    stdout: &[u8],
    stderr: &[u8],
    expected: usize,
) -> Result<usize, HarnessError> {
    let report: BTreeMap<String, AccountBalance> = match serde_json::from_slice(stdout) {
        Ok(report) => report,
        Err(source) => {
            log::error!("failed to parse balance output");
            log::error!("stdout: {}", String::from_utf8_lossy(stdout));
            log::error!("stderr: {}", String::from_utf8_lossy(stderr));
            return Err(HarnessError::MalformedOutput { source });
        }
    };

    let mut success_count = 0;
    for (account, balance) in &report {
        if balance.gas != "0" {
            return Err(HarnessError::NonZeroGasBalance {
                account: account.clone(),
                value: balance.gas.clone(),
            });
        }
        if balance.token != "0" {
            return Err(HarnessError::NonZeroTokenBalance {
                account: account.clone(),
                value: balance.token.clone(),
            });
        }
        success_count += 1;
        log::info!("{} - OK - {} - {}", account, balance.gas, balance.token);
    }

    if success_count != expected {
        return Err(HarnessError::AccountCountMismatch {
            expected,
            actual: success_count,
        });
    }

    Ok(success_count)
}
