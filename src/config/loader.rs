//! Reading run specifications from disk

use super::schema::RunSpec;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a run spec from a YAML file
///
/// Only parses; call [`validate_config`](super::validate_config) after
/// applying any overrides.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<RunSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::Config(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;
    parse_config(&yaml_content)
}

/// Parse a run spec from YAML text
pub fn parse_config(yaml: &str) -> Result<RunSpec> {
    serde_yaml::from_str(yaml).map_err(|e| Error::Config(format!("Failed to parse YAML config: {e}")))
}
