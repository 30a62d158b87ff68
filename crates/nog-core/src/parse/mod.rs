pub mod media_type;
pub mod operation;
pub mod response;
pub mod schema;
pub mod server;
pub mod spec;

use std::fs;
use std::path::Path;

use crate::error::ParseError;
use spec::OpenApiSpec;

/// Parse an OpenAPI or Swagger document from YAML.
pub fn from_yaml(input: &str) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = serde_yaml_ng::from_str(input)?;
    log_version(&spec);
    Ok(spec)
}

/// Parse an OpenAPI or Swagger document from JSON.
pub fn from_json(input: &str) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = serde_json::from_str(input)?;
    log_version(&spec);
    Ok(spec)
}

/// Load a document from disk. Files ending in `.json` are read as JSON,
/// everything else as YAML.
pub fn load_file(path: &Path) -> Result<OpenApiSpec, ParseError> {
    if !path.exists() {
        return Err(ParseError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if is_json(path) {
        from_json(&content)
    } else {
        from_yaml(&content)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

fn log_version(spec: &OpenApiSpec) {
    match (&spec.openapi, &spec.swagger) {
        (Some(v), _) => log::debug!("loaded OpenAPI {v} document"),
        (None, Some(v)) => log::debug!("loaded Swagger {v} document"),
        (None, None) => log::debug!("loaded document without a version field"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_json() {
        assert!(is_json(Path::new("api.json")));
        assert!(is_json(Path::new("API.JSON")));
        assert!(!is_json(Path::new("api.yaml")));
        assert!(!is_json(Path::new("api.yml")));
        assert!(!is_json(Path::new("api")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, ParseError::NotFound(_)));
    }
}
