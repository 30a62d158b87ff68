use indexmap::IndexMap;

use crate::ir::IrType;
use crate::parse::response::Response;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Resolve an operation's return type from its responses.
///
/// Uses the `200` response, else `201`. Only one level is inspected:
/// `$ref` → `Name`, array of `$ref` → `Name[]`, any other array → `any[]`,
/// anything else (or no JSON schema at all) → `any`.
pub fn detect_return_type(responses: &IndexMap<String, Response>) -> IrType {
    let Some(response) = responses.get("200").or_else(|| responses.get("201")) else {
        return IrType::Any;
    };

    let Some(schema) = response
        .content
        .get(JSON_CONTENT_TYPE)
        .and_then(|mt| mt.schema.as_ref())
    else {
        return IrType::Any;
    };

    if let Some(name) = schema.ref_name() {
        return IrType::Ref(name.to_string());
    }

    if schema.kind() == Some("array") {
        let item = schema
            .items
            .as_ref()
            .and_then(|items| items.ref_name())
            .map(|name| IrType::Ref(name.to_string()))
            .unwrap_or(IrType::Any);
        return IrType::Array(Box::new(item));
    }

    IrType::Any
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(yaml: &str) -> IndexMap<String, Response> {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_ref_response() {
        let r = responses(
            r##"
"200":
  description: ok
  content:
    application/json:
      schema: { $ref: "#/components/schemas/User" }
"##,
        );
        assert_eq!(detect_return_type(&r), IrType::Ref("User".to_string()));
    }

    #[test]
    fn test_unquoted_status_key() {
        let r = responses(
            r##"
200:
  description: ok
  content:
    application/json:
      schema: { $ref: "#/components/schemas/User" }
"##,
        );
        assert_eq!(detect_return_type(&r), IrType::Ref("User".to_string()));
    }

    #[test]
    fn test_array_of_ref() {
        let r = responses(
            r##"
"200":
  description: ok
  content:
    application/json:
      schema:
        type: array
        items: { $ref: "#/components/schemas/User" }
"##,
        );
        assert_eq!(
            detect_return_type(&r),
            IrType::Array(Box::new(IrType::Ref("User".to_string())))
        );
    }

    #[test]
    fn test_array_of_primitive() {
        let r = responses(
            r#"
"200":
  content:
    application/json:
      schema:
        type: array
        items: { type: string }
"#,
        );
        assert_eq!(detect_return_type(&r), IrType::Array(Box::new(IrType::Any)));
    }

    #[test]
    fn test_falls_back_to_201() {
        let r = responses(
            r##"
"400":
  description: bad
"201":
  content:
    application/json:
      schema: { $ref: "#/components/schemas/Order" }
"##,
        );
        assert_eq!(detect_return_type(&r), IrType::Ref("Order".to_string()));
    }

    #[test]
    fn test_200_wins_over_201() {
        let r = responses(
            r##"
"201":
  content:
    application/json:
      schema: { $ref: "#/components/schemas/Order" }
"200":
  description: no body
"##,
        );
        assert_eq!(detect_return_type(&r), IrType::Any);
    }

    #[test]
    fn test_untyped() {
        assert_eq!(detect_return_type(&responses("\"204\": { description: gone }")), IrType::Any);
        assert_eq!(
            detect_return_type(&responses(
                r#"
"200":
  content:
    text/plain:
      schema: { type: string }
"#
            )),
            IrType::Any
        );
        assert_eq!(
            detect_return_type(&responses(
                r#"
"200":
  content:
    application/json:
      schema: { type: object }
"#
            )),
            IrType::Any
        );
        assert_eq!(detect_return_type(&IndexMap::new()), IrType::Any);
    }
}
