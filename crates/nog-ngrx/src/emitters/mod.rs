pub mod actions;
pub mod effects;
pub mod index;
pub mod models;
pub mod reducers;
pub mod selectors;
pub mod services;

use std::collections::BTreeSet;

use minijinja::{AutoEscape, Environment, context};
use nog_core::ir::{IrModel, IrOperation, IrSpec, IrType, TagGroup};
use nog_core::transform::name_normalizer::normalize_name;

use crate::type_mapper::{ir_type_to_ts, is_ts_identifier};

const TEMPLATES: &[(&str, &str)] = &[
    ("actions.ts.j2", include_str!("../../templates/actions.ts.j2")),
    ("effects.ts.j2", include_str!("../../templates/effects.ts.j2")),
    ("model.ts.j2", include_str!("../../templates/model.ts.j2")),
    ("reducer.ts.j2", include_str!("../../templates/reducer.ts.j2")),
    ("selectors.ts.j2", include_str!("../../templates/selectors.ts.j2")),
    ("service.ts.j2", include_str!("../../templates/service.ts.j2")),
];

/// The kinds of artifact directories in the generated store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Models,
    Actions,
    Effects,
    Reducers,
    Selectors,
    Services,
}

impl ArtifactKind {
    /// Kinds rendered once per tag group, in emission order.
    pub const PER_TAG: [ArtifactKind; 5] = [
        ArtifactKind::Actions,
        ArtifactKind::Effects,
        ArtifactKind::Reducers,
        ArtifactKind::Selectors,
        ArtifactKind::Services,
    ];

    /// Directories re-exported by the root barrel, in order.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::Actions,
        ArtifactKind::Effects,
        ArtifactKind::Reducers,
        ArtifactKind::Selectors,
        ArtifactKind::Services,
        ArtifactKind::Models,
    ];

    pub fn dir(&self) -> &'static str {
        match self {
            ArtifactKind::Models => "models",
            ArtifactKind::Actions => "actions",
            ArtifactKind::Effects => "effects",
            ArtifactKind::Reducers => "reducers",
            ArtifactKind::Selectors => "selectors",
            ArtifactKind::Services => "services",
        }
    }

    /// File name suffix: `pets.actions.ts`, `pets.reducer.ts`, `pet.model.ts`.
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Models => "model",
            ArtifactKind::Actions => "actions",
            ArtifactKind::Effects => "effects",
            ArtifactKind::Reducers => "reducer",
            ArtifactKind::Selectors => "selectors",
            ArtifactKind::Services => "service",
        }
    }

    /// Relative path of the unit for `stem` (`actions/pets.actions.ts`).
    pub fn file_path(&self, stem: &str) -> String {
        format!("{}/{}.{}.ts", self.dir(), stem, self.suffix())
    }
}

/// Escape `*/` sequences that would prematurely close JSDoc comment blocks,
/// and fold line breaks so the comment stays on one line.
fn escape_jsdoc(value: String) -> String {
    value
        .replace("*/", "*\\/")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.add_filter("escape_jsdoc", escape_jsdoc);
    for (name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
}

/// Render one of the embedded templates.
pub(crate) fn render(template: &str, ctx: minijinja::Value) -> Result<String, minijinja::Error> {
    let env = environment()?;
    env.get_template(template)?.render(ctx)
}

/// Identifier used for a path parameter in props, signatures and URLs.
pub(crate) fn param_ident(raw: &str) -> String {
    if is_ts_identifier(raw) {
        return raw.to_string();
    }
    let camel = normalize_name(raw).camel_case;
    if is_ts_identifier(&camel) {
        camel
    } else {
        format!("_{camel}")
    }
}

/// Path parameter identifiers of an operation, first occurrence only.
pub(crate) fn path_param_idents(op: &IrOperation) -> Vec<String> {
    let mut seen = BTreeSet::new();
    op.path_params
        .iter()
        .map(|p| param_ident(p))
        .filter(|p| seen.insert(p.clone()))
        .collect()
}

/// Service URL as a template literal, with `{param}` placeholders interpolated.
pub(crate) fn service_url(op: &IrOperation) -> String {
    let mut path = op.path.replace('`', "\\`");
    for raw in &op.path_params {
        path = path.replace(&format!("{{{raw}}}"), &format!("${{{}}}", param_ident(raw)));
    }
    format!("`${{this.baseUrl}}{path}`")
}

/// Trailing `HttpClient` argument: nothing for GET/DELETE, else the payload
/// or an empty object.
fn body_arg(op: &IrOperation) -> &'static str {
    if op.method.is_bodiless() {
        ""
    } else if op.has_request_body {
        ", payload"
    } else {
        ", {}"
    }
}

/// Template context shared by the per-tag emitters.
pub(crate) fn operation_context(op: &IrOperation) -> minijinja::Value {
    let params = path_param_idents(op);

    let mut typed: Vec<String> = params.iter().map(|p| format!("{p}: string")).collect();
    let mut call_args: Vec<String> = params.iter().map(|p| format!("action.{p}")).collect();
    if op.has_request_body {
        typed.push("payload: any".to_string());
        call_args.push("action.payload".to_string());
    }

    context! {
        name => op.name.camel_case.clone(),
        pascal => op.name.pascal_case.clone(),
        return_type => ir_type_to_ts(&op.return_type),
        start_props => typed.join("; "),
        params_signature => typed.join(", "),
        call_args => call_args.join(", "),
        http_method => op.method.as_lower(),
        url => service_url(op),
        body_arg => body_arg(op),
        summary => op.summary.clone(),
    }
}

/// Template context describing a tag group.
pub(crate) fn tag_context(group: &TagGroup) -> minijinja::Value {
    context! {
        pascal => group.name.pascal_case.clone(),
        camel => group.name.camel_case.clone(),
        file_stem => group.file_stem(),
    }
}

/// Known models referenced by `types`, ordered by interface name.
pub(crate) fn model_imports<'a>(
    ir: &'a IrSpec,
    types: impl Iterator<Item = &'a IrType>,
) -> Vec<&'a IrModel> {
    let mut names = BTreeSet::new();
    for ty in types {
        ty.visit_refs(&mut |name| {
            names.insert(name);
        });
    }
    let mut models: Vec<&IrModel> = names
        .into_iter()
        .filter_map(|n| ir.find_model(n))
        .collect();
    models.sort_by_key(|m| m.type_name());
    models
}

/// Template context for one imported model.
pub(crate) fn import_context(model: &IrModel) -> minijinja::Value {
    context! {
        name => model.type_name(),
        file_stem => model.file_stem(),
    }
}

/// Imports for the models referenced by a group's return types.
pub(crate) fn group_model_imports(ir: &IrSpec, group: &TagGroup) -> Vec<minijinja::Value> {
    model_imports(ir, ir.group_operations(group).map(|op| &op.return_type))
        .into_iter()
        .map(import_context)
        .collect()
}
