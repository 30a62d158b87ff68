use minijinja::context;
use nog_core::ir::{IrSpec, TagGroup};

use super::{group_model_imports, operation_context, render, tag_context};

/// Emit `services/{tag}.service.ts`: an injectable `HttpClient` wrapper with
/// one method per operation, rooted at `base_url`.
pub fn emit_service(
    ir: &IrSpec,
    group: &TagGroup,
    base_url: &str,
) -> Result<String, minijinja::Error> {
    let operations: Vec<minijinja::Value> =
        ir.group_operations(group).map(operation_context).collect();

    render(
        "service.ts.j2",
        context! {
            tag => tag_context(group),
            model_imports => group_model_imports(ir, group),
            operations => operations,
            base_url => base_url.replace('\\', "\\\\").replace('\'', "\\'"),
        },
    )
}
