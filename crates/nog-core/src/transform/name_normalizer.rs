use heck::{ToLowerCamelCase, ToPascalCase};

use crate::ir::NormalizedName;

/// Create a `NormalizedName` from an arbitrary string, computing all casing variants.
pub fn normalize_name(name: &str) -> NormalizedName {
    // Handle names that start with numbers or contain special chars
    let sanitized = sanitize_identifier(name);

    NormalizedName {
        original: name.to_string(),
        pascal_case: no_leading_digit(sanitized.to_pascal_case()),
        camel_case: no_leading_digit(sanitized.to_lower_camel_case()),
    }
}

// Case conversion drops the `_` guard added by `sanitize_identifier`.
fn no_leading_digit(name: String) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    }
}

/// Whether `name` is usable verbatim as a TypeScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Type identifier for a schema name. Names that are already identifiers
/// are kept as written; others (`pet-dto`, `Page«User»`) are Pascal-cased.
pub fn type_name(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        normalize_name(name).pascal_case
    }
}

/// File stem for a tag or schema name: lower-cased, with path separators
/// replaced so the stem stays a single path component.
pub fn file_stem(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect()
}

/// Synthesize an operation identifier for operations without an `operationId`.
///
/// The method is lower-cased, every `/` of the path becomes `_` and braces
/// are dropped:
/// - `GET /pets` → `get__pets`
/// - `DELETE /pets/{petId}` → `delete__pets_petId`
pub fn route_to_name(method: &str, path: &str) -> String {
    let path_part: String = path
        .chars()
        .filter(|c| !matches!(c, '{' | '}'))
        .map(|c| if c == '/' { '_' } else { c })
        .collect();

    format!("{}_{}", method.to_ascii_lowercase(), path_part)
}

/// Sanitize a string to be a valid identifier.
fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_was_separator = false;

    for (i, ch) in name.chars().enumerate() {
        if ch.is_alphanumeric() {
            if i == 0 && ch.is_ascii_digit() {
                result.push('_');
            }
            if prev_was_separator && !result.is_empty() {
                result.push('_');
            }
            result.push(ch);
            prev_was_separator = false;
        } else {
            prev_was_separator = true;
        }
    }

    if result.is_empty() {
        return "unnamed".to_string();
    }

    result
}
