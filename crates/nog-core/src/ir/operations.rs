use super::schemas::IrType;
use super::types::NormalizedName;

/// HTTP method. Only the methods that produce store artifacts are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Match a path item key, case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Lower-case form, as used by `HttpClient` method names.
    pub fn as_lower(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
        }
    }

    /// Whether the request is sent without a body.
    pub fn is_bodiless(&self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

/// A normalized API operation.
#[derive(Debug, Clone)]
pub struct IrOperation {
    pub name: NormalizedName,
    pub method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    /// Placeholder names from the path template, left to right, duplicates kept.
    pub path_params: Vec<String>,
    pub has_request_body: bool,
    pub return_type: IrType,
    /// Never empty; the first tag is the grouping key.
    pub tags: Vec<String>,
}

impl IrOperation {
    pub fn primary_tag(&self) -> &str {
        self.tags.first().map(String::as_str).unwrap_or("default")
    }
}
