use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::emit::OutputFormat;
use crate::error::ConfigError;

/// Project configuration loaded from `.bru2oas.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Bru2OasConfig {
    /// Root of the Bruno collection.
    pub input: String,
    /// Where the OpenAPI document is written.
    pub output: String,
    /// Output encoding. Inferred from `output` when unset.
    pub format: Option<OutputFormat>,
}

impl Default for Bru2OasConfig {
    fn default() -> Self {
        Self {
            input: ".".to_string(),
            output: "./openapi.yml".to_string(),
            format: None,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".bru2oas.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<Bru2OasConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: PathBuf::from(path),
        source,
    })?;
    let config = serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
        path: PathBuf::from(path),
        source,
    })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# bru2oas configuration
input: .                # root of the Bruno collection
output: ./openapi.yml   # generated OpenAPI 3.0 document
# format: yaml          # yaml | json (inferred from the output extension when unset)
"#
}
