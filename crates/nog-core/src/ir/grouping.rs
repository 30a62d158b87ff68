use super::operations::IrOperation;
use super::types::NormalizedName;
use crate::transform::name_normalizer::{file_stem, normalize_name};
use indexmap::IndexMap;

/// Operations sharing a first tag. Each group becomes one file per artifact kind.
#[derive(Debug, Clone)]
pub struct TagGroup {
    pub name: NormalizedName,
    pub operations: Vec<usize>, // indices into IrSpec.operations
}

impl TagGroup {
    /// File stem shared by every artifact of this group (`pets` for `Pets`).
    pub fn file_stem(&self) -> String {
        file_stem(&self.name.original)
    }
}

/// Group operations by their first tag. Groups appear in first-occurrence
/// order and keep the encounter order of their operations.
pub fn group_by_tag(operations: &[IrOperation]) -> Vec<TagGroup> {
    let mut groups: IndexMap<&str, Vec<usize>> = IndexMap::new();

    for (i, op) in operations.iter().enumerate() {
        groups.entry(op.primary_tag()).or_default().push(i);
    }

    groups
        .into_iter()
        .map(|(tag, indices)| TagGroup {
            name: normalize_name(tag),
            operations: indices,
        })
        .collect()
}
