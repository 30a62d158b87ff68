use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The `type` field can be a single type or an array of types (3.1 style).
/// Kinds are kept as plain strings so unknown kinds parse and fall back to
/// an untyped reference later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSet {
    /// The effective kind: the single value, or the first non-`null` entry.
    pub fn primary(&self) -> Option<&str> {
        match self {
            TypeSet::Single(t) => Some(t.as_str()),
            TypeSet::Multiple(types) => types
                .iter()
                .map(String::as_str)
                .find(|t| *t != "null")
                .or_else(|| types.first().map(String::as_str)),
        }
    }
}

/// `required` is a list of property names in JSON Schema, but some
/// documents put a boolean there. The boolean form carries no names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Required {
    Names(Vec<String>),
    Flag(bool),
}

impl Default for Required {
    fn default() -> Self {
        Required::Names(Vec::new())
    }
}

impl Required {
    pub fn contains(&self, name: &str) -> bool {
        match self {
            Required::Names(names) => names.iter().any(|n| n == name),
            Required::Flag(_) => false,
        }
    }
}

/// A schema object or a `$ref` to one. Only the keywords the generator
/// reads are modelled; everything else is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub ref_path: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<TypeSet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,

    #[serde(default)]
    pub required: Required,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// The bare name of the referenced type (last path segment of `$ref`).
    pub fn ref_name(&self) -> Option<&str> {
        self.ref_path
            .as_deref()
            .map(|r| r.rsplit('/').next().unwrap_or(r))
    }

    pub fn kind(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(TypeSet::primary)
    }
}
