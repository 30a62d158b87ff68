use nog_core::ir::IrType;
use nog_core::transform::name_normalizer::{is_identifier, type_name};

/// Map an `IrType` to its TypeScript type string representation.
pub fn ir_type_to_ts(ir_type: &IrType) -> String {
    match ir_type {
        IrType::String => "string".to_string(),
        IrType::Number => "number".to_string(),
        IrType::Boolean => "boolean".to_string(),
        IrType::Any => "any".to_string(),
        IrType::Ref(name) => type_name(name),
        IrType::Array(inner) => format!("{}[]", ir_type_to_ts(inner)),
    }
}

/// Whether `name` can be used as a bare TypeScript identifier.
pub fn is_ts_identifier(name: &str) -> bool {
    is_identifier(name)
}

/// A property key usable in an interface: bare when it is an identifier,
/// single-quoted otherwise.
pub fn property_key(name: &str) -> String {
    if is_ts_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
