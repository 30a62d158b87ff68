use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;
use super::schema::Schema;
use super::server::Server;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub version: String,
}

/// Components object holding reusable definitions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, Schema>,
}

/// Top-level document. Covers both OpenAPI 3.x (`openapi`, `servers`,
/// `components`) and Swagger 2.0 (`swagger`, `host`, `basePath`, `schemes`,
/// `definitions`). Every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpenApiSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub swagger: Option<String>,

    #[serde(default)]
    pub info: Info,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schemes: Vec<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub paths: IndexMap<String, PathItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Schema>,
}

impl OpenApiSpec {
    /// Model definitions: `components.schemas`, or Swagger 2 `definitions`
    /// when there are none.
    pub fn schemas(&self) -> &IndexMap<String, Schema> {
        match self.components {
            Some(ref components) if !components.schemas.is_empty() => &components.schemas,
            _ => &self.definitions,
        }
    }
}
