use crate::error::TransformError;
use crate::ir::*;
use crate::parse::spec::OpenApiSpec;

use super::base_url::resolve_base_url;
use super::collisions::find_collisions;
use super::operations::resolve_operations;
use super::schema_resolver::resolve_models;

/// Transform a parsed document into the IR consumed by generators.
///
/// Naming collisions are logged as warnings; they do not fail the transform.
pub fn transform(spec: &OpenApiSpec) -> Result<IrSpec, TransformError> {
    // Phase 1: Models from component schemas (or Swagger 2 definitions)
    let models = resolve_models(spec.schemas());

    // Phase 2: Operations in path/method order
    let operations = resolve_operations(spec)?;

    // Phase 3: Group operations by first tag
    let groups = group_by_tag(&operations);

    let ir = IrSpec {
        info: IrInfo {
            title: spec.info.title.clone(),
            version: spec.info.version.clone(),
        },
        base_url: resolve_base_url(spec),
        models,
        operations,
        groups,
    };

    for collision in find_collisions(&ir) {
        log::warn!("{collision}");
    }

    Ok(ir)
}
