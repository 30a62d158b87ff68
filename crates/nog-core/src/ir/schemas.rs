use crate::transform::name_normalizer::{file_stem, type_name};

/// A model (type definition) extracted from the document's schemas.
#[derive(Debug, Clone)]
pub struct IrModel {
    /// Schema key, verbatim. `$ref` targets resolve to the same string.
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<IrField>,
}

impl IrModel {
    /// Identifier of the generated interface.
    pub fn type_name(&self) -> String {
        type_name(&self.name)
    }

    /// File stem of the generated model unit (`pet` for `Pet`).
    pub fn file_stem(&self) -> String {
        file_stem(&self.name)
    }
}

/// A property on a model, in source order.
#[derive(Debug, Clone)]
pub struct IrField {
    pub name: String,
    pub field_type: IrType,
    pub required: bool,
    pub description: Option<String>,
}

/// A resolved type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrType {
    String,
    Number,
    Boolean,
    Array(Box<IrType>),
    Ref(String), // schema name, verbatim; see `IrModel::type_name`
    Any,
}

impl IrType {
    /// Call `f` for every model name this type references.
    pub fn visit_refs<'a>(&'a self, f: &mut impl FnMut(&'a str)) {
        match self {
            IrType::Ref(name) => f(name),
            IrType::Array(inner) => inner.visit_refs(f),
            _ => {}
        }
    }
}
