use std::{fs, path::Path};

use crate::HarnessError;

pub const RPC_ENDPOINT_PLACEHOLDER: &str = "%%RPC_ENDPOINT%%";

/// Renders the payment config template with every placeholder occurrence
/// replaced by the endpoint url. The output file is fully overwritten.
pub fn render_config(template: &Path, endpoint: &str, out: &Path) -> Result<(), HarnessError> {
    let text = fs::read_to_string(template).map_err(|source| HarnessError::ConfigWrite {
        path: template.to_path_buf(),
        source,
    })?;

    let rendered = text.replace(RPC_ENDPOINT_PLACEHOLDER, endpoint);

    fs::write(out, rendered).map_err(|source| HarnessError::ConfigWrite {
        path: out.to_path_buf(),
        source,
    })
}
