use crate::parse::spec::OpenApiSpec;

/// Fallback when the document declares neither `servers` nor `host`.
pub const DEFAULT_BASE_URL: &str = "/api";

/// Derive the base URL services prefix their requests with.
///
/// Prefers the first `servers` entry (OpenAPI 3), then
/// `{scheme}://{host}{basePath}` (Swagger 2, scheme defaults to `https`),
/// then `/api`.
pub fn resolve_base_url(spec: &OpenApiSpec) -> String {
    if let Some(server) = spec.servers.first() {
        return server.url.clone();
    }

    if let Some(ref host) = spec.host {
        let scheme = spec.schemes.first().map(String::as_str).unwrap_or("https");
        let base_path = spec.base_path.as_deref().unwrap_or("");
        return format!("{scheme}://{host}{base_path}");
    }

    DEFAULT_BASE_URL.to_string()
}
