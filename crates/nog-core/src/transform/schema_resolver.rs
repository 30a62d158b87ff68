use indexmap::IndexMap;

use crate::ir::{IrField, IrModel, IrType};
use crate::parse::schema::Schema;

/// Convert a schema fragment to an `IrType`.
///
/// `$ref` wins over `type`. Unknown or missing kinds, and `object`, map to
/// `Any`. Arrays recurse into `items`.
pub fn schema_to_ir_type(schema: &Schema) -> IrType {
    if let Some(name) = schema.ref_name() {
        return IrType::Ref(name.to_string());
    }

    match schema.kind() {
        Some("string") => IrType::String,
        Some("integer" | "number") => IrType::Number,
        Some("boolean") => IrType::Boolean,
        Some("array") => match &schema.items {
            Some(items) => IrType::Array(Box::new(schema_to_ir_type(items))),
            None => IrType::Array(Box::new(IrType::Any)),
        },
        _ => IrType::Any,
    }
}

/// Convert named schema definitions to models, keeping definition and
/// property order.
pub fn resolve_models(schemas: &IndexMap<String, Schema>) -> Vec<IrModel> {
    schemas
        .iter()
        .map(|(name, schema)| schema_to_model(name, schema))
        .collect()
}

fn schema_to_model(name: &str, schema: &Schema) -> IrModel {
    let fields = schema
        .properties
        .iter()
        .map(|(prop_name, prop)| IrField {
            name: prop_name.clone(),
            field_type: schema_to_ir_type(prop),
            required: schema.required.contains(prop_name),
            description: prop.description.clone(),
        })
        .collect();

    IrModel {
        name: name.to_string(),
        description: schema.description.clone(),
        fields,
    }
}
