//! List configuration loader — reads the per-list JSON document that
//! supplies the page header and the default composer for links.

use std::path::Path;

use crate::model::ListConfig;

/// Load a list configuration from a JSON file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ListConfig, String> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read configuration '{}': {e}", path.display()))?;
    parse_config(&data)
}

/// Parse a list configuration from JSON text.
pub fn parse_config(data: &str) -> Result<ListConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("Invalid list configuration: {e}"))
}
