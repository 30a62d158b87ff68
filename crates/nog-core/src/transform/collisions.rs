use std::fmt;

use indexmap::IndexMap;

use crate::ir::IrSpec;

/// A naming collision that makes one generated artifact overwrite another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// Several operations normalize to the same generated identifier
    /// (`get_user` and `getUser`). Barrels re-export every group, so this
    /// holds across groups too.
    DuplicateOperation { name: String, locations: Vec<String> },
    /// Several tags lower-case to the same file stem.
    DuplicateGroupFile { file_stem: String, tags: Vec<String> },
    /// Several models lower-case to the same file stem.
    DuplicateModelFile { file_stem: String, models: Vec<String> },
    /// Several models share the same interface name (`pet-dto` and `PetDto`).
    DuplicateModelName { type_name: String, models: Vec<String> },
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::DuplicateOperation { name, locations } => write!(
                f,
                "operation `{name}` is generated {} times ({}); the duplicates do not compile",
                locations.len(),
                locations.join(", ")
            ),
            Collision::DuplicateGroupFile { file_stem, tags } => write!(
                f,
                "tags {} all map to `{file_stem}` files; only the last one survives",
                quoted(tags)
            ),
            Collision::DuplicateModelFile { file_stem, models } => write!(
                f,
                "models {} all map to `{file_stem}.model.ts`; only the last one survives",
                quoted(models)
            ),
            Collision::DuplicateModelName { type_name, models } => write!(
                f,
                "models {} all generate `interface {type_name}`",
                quoted(models)
            ),
        }
    }
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("`{n}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Find identifiers and file names that collide in the generated output.
pub fn find_collisions(ir: &IrSpec) -> Vec<Collision> {
    let mut collisions = Vec::new();

    let mut operations: IndexMap<&str, Vec<String>> = IndexMap::new();
    for op in &ir.operations {
        operations
            .entry(op.name.camel_case.as_str())
            .or_default()
            .push(format!(
                "{} {} as `{}`",
                op.method.as_str(),
                op.path,
                op.name.original
            ));
    }
    collisions.extend(
        operations
            .into_iter()
            .filter(|(_, locations)| locations.len() > 1)
            .map(|(name, locations)| Collision::DuplicateOperation {
                name: name.to_string(),
                locations,
            }),
    );

    let mut group_files: IndexMap<String, Vec<String>> = IndexMap::new();
    for group in &ir.groups {
        group_files
            .entry(group.file_stem())
            .or_default()
            .push(group.name.original.clone());
    }
    collisions.extend(
        group_files
            .into_iter()
            .filter(|(_, tags)| tags.len() > 1)
            .map(|(file_stem, tags)| Collision::DuplicateGroupFile { file_stem, tags }),
    );

    let mut model_files: IndexMap<String, Vec<String>> = IndexMap::new();
    for model in &ir.models {
        model_files
            .entry(model.file_stem())
            .or_default()
            .push(model.name.clone());
    }
    collisions.extend(
        model_files
            .into_iter()
            .filter(|(_, models)| models.len() > 1)
            .map(|(file_stem, models)| Collision::DuplicateModelFile { file_stem, models }),
    );

    let mut model_names: IndexMap<String, Vec<String>> = IndexMap::new();
    for model in &ir.models {
        model_names
            .entry(model.type_name())
            .or_default()
            .push(model.name.clone());
    }
    collisions.extend(
        model_names
            .into_iter()
            .filter(|(_, models)| models.len() > 1)
            .map(|(type_name, models)| Collision::DuplicateModelName { type_name, models }),
    );

    collisions
}
