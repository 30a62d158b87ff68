use crate::error::TransformError;
use crate::ir::{HttpMethod, IrOperation};
use crate::parse::operation::Operation;
use crate::parse::spec::OpenApiSpec;

use super::name_normalizer::{normalize_name, route_to_name};
use super::return_type::detect_return_type;

/// Tag used for operations that declare none.
pub const DEFAULT_TAG: &str = "default";

/// Walk every path and method entry in document order and build one
/// `IrOperation` per supported method. Other keys are skipped.
pub fn resolve_operations(spec: &OpenApiSpec) -> Result<Vec<IrOperation>, TransformError> {
    let mut operations = Vec::new();

    for (path, item) in &spec.paths {
        for (key, value) in item.entries() {
            let Some(method) = HttpMethod::from_key(key) else {
                continue;
            };
            let op: Operation = serde_json::from_value(value.clone()).map_err(|source| {
                TransformError::InvalidOperation {
                    method: method.as_str().to_string(),
                    path: path.clone(),
                    source,
                }
            })?;
            let ir_op = build_operation(method, path, &op);
            log::debug!(
                "extracted {} {} as {}",
                method.as_str(),
                path,
                ir_op.name.original
            );
            operations.push(ir_op);
        }
    }

    Ok(operations)
}

fn build_operation(method: HttpMethod, path: &str, op: &Operation) -> IrOperation {
    let raw_name = match op.operation_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => route_to_name(method.as_lower(), path),
    };

    let tags = if op.tags.is_empty() {
        vec![DEFAULT_TAG.to_string()]
    } else {
        op.tags.clone()
    };

    IrOperation {
        name: normalize_name(&raw_name),
        method,
        path: path.to_string(),
        summary: op.summary.clone(),
        path_params: extract_path_params(path),
        has_request_body: op.request_body.is_some(),
        return_type: detect_return_type(&op.responses),
        tags,
    }
}

/// Placeholder names of a path template, left to right, duplicates kept.
///
/// A placeholder is `{` followed by one or more non-`}` characters and `}`.
pub fn extract_path_params(path: &str) -> Vec<String> {
    let mut params = Vec::new();
    let mut rest = path;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(0) => rest = after,
            Some(close) => {
                params.push(after[..close].to_string());
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::IrType;
    use crate::parse;

    #[test]
    fn test_extract_path_params() {
        assert_eq!(
            extract_path_params("/users/{id}/orders/{orderId}"),
            vec!["id", "orderId"]
        );
        assert!(extract_path_params("/users").is_empty());
    }

    #[test]
    fn test_extract_path_params_edge_cases() {
        assert_eq!(extract_path_params("/a/{id}/b/{id}"), vec!["id", "id"]);
        assert!(extract_path_params("/a/{}/b").is_empty());
        assert!(extract_path_params("/a/{unclosed").is_empty());
        assert_eq!(extract_path_params("/files/{name}.{ext}"), vec!["name", "ext"]);
    }

    #[test]
    fn test_methods_are_case_insensitive() {
        let spec = parse::from_yaml(
            r#"
openapi: 3.0.0
paths:
  /pets:
    parameters:
      - name: limit
        in: query
    GET:
      operationId: listPets
    head:
      operationId: headPets
    Post:
      operationId: createPet
      requestBody:
        content:
          application/json: {}
"#,
        )
        .unwrap();
        let ops = resolve_operations(&spec).unwrap();
        let names: Vec<&str> = ops.iter().map(|o| o.name.original.as_str()).collect();
        assert_eq!(names, vec!["listPets", "createPet"]);
        assert_eq!(ops[0].method, HttpMethod::Get);
        assert!(!ops[0].has_request_body);
        assert_eq!(ops[1].method, HttpMethod::Post);
        assert!(ops[1].has_request_body);
    }

    #[test]
    fn test_synthesized_name_and_default_tag() {
        let spec = parse::from_yaml(
            r#"
openapi: 3.0.0
paths:
  /pets/{petId}:
    delete:
      tags: []
      responses:
        "204": { description: deleted }
"#,
        )
        .unwrap();
        let ops = resolve_operations(&spec).unwrap();
        assert_eq!(ops.len(), 1);
        let op = &ops[0];
        assert_eq!(op.name.original, "delete__pets_petId");
        assert_eq!(op.name.camel_case, "deletePetsPetId");
        assert_eq!(op.tags, vec!["default"]);
        assert_eq!(op.path_params, vec!["petId"]);
        assert_eq!(op.return_type, IrType::Any);
    }

    #[test]
    fn test_null_request_body_counts_as_present() {
        let spec = parse::from_yaml(
            r#"
openapi: 3.0.0
paths:
  /pets:
    post:
      operationId: createPet
      requestBody: ~
    put:
      operationId: replacePets
"#,
        )
        .unwrap();
        let ops = resolve_operations(&spec).unwrap();
        assert!(ops[0].has_request_body);
        assert!(!ops[1].has_request_body);
    }

    #[test]
    fn test_invalid_operation_is_reported() {
        let spec = parse::from_yaml(
            r#"
openapi: 3.0.0
paths:
  /pets:
    get: "not an operation"
"#,
        )
        .unwrap();
        let err = resolve_operations(&spec).unwrap_err();
        assert!(err.to_string().contains("GET /pets"));
    }
}
