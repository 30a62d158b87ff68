use minijinja::context;
use nog_core::ir::{IrSpec, TagGroup};

use super::{group_model_imports, operation_context, render, tag_context};

/// Emit `actions/{tag}.actions.ts`: start, success and failure actions per operation.
pub fn emit_actions(ir: &IrSpec, group: &TagGroup) -> Result<String, minijinja::Error> {
    let operations: Vec<minijinja::Value> =
        ir.group_operations(group).map(operation_context).collect();

    render(
        "actions.ts.j2",
        context! {
            tag => tag_context(group),
            model_imports => group_model_imports(ir, group),
            operations => operations,
        },
    )
}
