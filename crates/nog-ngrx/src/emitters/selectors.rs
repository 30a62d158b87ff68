use minijinja::context;
use nog_core::ir::{IrSpec, TagGroup};

use super::{operation_context, render, tag_context};

/// Emit `selectors/{tag}.selectors.ts`.
pub fn emit_selectors(ir: &IrSpec, group: &TagGroup) -> Result<String, minijinja::Error> {
    let operations: Vec<minijinja::Value> =
        ir.group_operations(group).map(operation_context).collect();

    render(
        "selectors.ts.j2",
        context! {
            tag => tag_context(group),
            operations => operations,
        },
    )
}
