use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default output directory for the generated store.
pub const DEFAULT_OUTPUT: &str = "./src/app/store";

/// Project configuration loaded from `.nog.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NogConfig {
    pub input: Option<String>,
    pub output: String,
    /// Overrides the base URL resolved from `servers` / `host`.
    pub base_url: Option<String>,
    /// Emit `index.ts` barrel files.
    pub index: bool,
}

impl Default for NogConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: DEFAULT_OUTPUT.to_string(),
            base_url: None,
            index: true,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".nog.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<NogConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // An empty file is a valid, all-defaults config.
    if content.trim().is_empty() {
        return Ok(Some(NogConfig::default()));
    }
    let config: NogConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# nog configuration
input: openapi.yaml
output: src/app/store

# base_url: https://api.example.com   # overrides servers / host+basePath
index: true                          # generate index.ts barrel exports
"#
}
