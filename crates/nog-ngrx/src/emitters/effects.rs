use minijinja::context;
use nog_core::ir::{IrSpec, TagGroup};

use super::{operation_context, render, tag_context};

/// Emit `effects/{tag}.effects.ts`, one effect per operation mapping the
/// start action to a service call and its outcome to success or failure.
pub fn emit_effects(ir: &IrSpec, group: &TagGroup) -> Result<String, minijinja::Error> {
    let operations: Vec<minijinja::Value> =
        ir.group_operations(group).map(operation_context).collect();

    render(
        "effects.ts.j2",
        context! {
            tag => tag_context(group),
            operations => operations,
        },
    )
}
