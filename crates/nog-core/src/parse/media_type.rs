use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// A media type object. Only the schema is relevant for generation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}
