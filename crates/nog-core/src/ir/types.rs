use std::fmt;

/// A fully resolved, generator-ready intermediate representation of an API document.
#[derive(Debug, Clone)]
pub struct IrSpec {
    pub info: IrInfo,
    pub base_url: String,
    pub models: Vec<IrModel>,
    pub operations: Vec<IrOperation>,
    pub groups: Vec<TagGroup>,
}

impl IrSpec {
    /// Operations belonging to a group, in encounter order.
    pub fn group_operations<'a>(
        &'a self,
        group: &'a TagGroup,
    ) -> impl Iterator<Item = &'a IrOperation> + 'a {
        group.operations.iter().map(|&i| &self.operations[i])
    }

    pub fn find_model(&self, name: &str) -> Option<&IrModel> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// API metadata.
#[derive(Debug, Clone, Default)]
pub struct IrInfo {
    pub title: String,
    pub version: String,
}

/// A name with multiple casing variants pre-computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName {
    pub original: String,
    pub pascal_case: String,
    pub camel_case: String,
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

// Re-export schema, operation and grouping types for convenience
pub use super::grouping::*;
pub use super::operations::*;
pub use super::schemas::*;
