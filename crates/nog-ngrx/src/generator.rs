use std::collections::BTreeSet;

use nog_core::ir::IrSpec;
use nog_core::{CodeGenerator, GeneratedFile};

use crate::emitters::{self, ArtifactKind};

/// Errors raised while rendering the store.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("failed to render {file}: {source}")]
    Render {
        file: String,
        #[source]
        source: minijinja::Error,
    },
}

/// Options for [`NgrxGenerator`].
#[derive(Debug, Clone)]
pub struct NgrxConfig {
    /// Replaces the base URL resolved from the document.
    pub base_url: Option<String>,
    /// Emit `index.ts` barrels per directory and at the root.
    pub index: bool,
}

impl Default for NgrxConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            index: true,
        }
    }
}

/// Angular/NgRx store generator.
///
/// Files come out in a fixed order: models, then each per-tag artifact kind
/// across all groups, then barrels.
pub struct NgrxGenerator;

impl CodeGenerator for NgrxGenerator {
    type Config = NgrxConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        ir: &IrSpec,
        config: &NgrxConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let base_url = config.base_url.as_deref().unwrap_or(&ir.base_url);
        let mut files = Vec::new();

        for model in &ir.models {
            let path = ArtifactKind::Models.file_path(&model.file_stem());
            let content = emitters::models::emit_model(ir, model);
            files.push(rendered(path, content)?);
        }

        for kind in ArtifactKind::PER_TAG {
            for group in &ir.groups {
                let content = match kind {
                    ArtifactKind::Actions => emitters::actions::emit_actions(ir, group),
                    ArtifactKind::Effects => emitters::effects::emit_effects(ir, group),
                    ArtifactKind::Reducers => emitters::reducers::emit_reducer(ir, group),
                    ArtifactKind::Selectors => emitters::selectors::emit_selectors(ir, group),
                    ArtifactKind::Services => {
                        emitters::services::emit_service(ir, group, base_url)
                    }
                    ArtifactKind::Models => continue,
                };
                files.push(rendered(kind.file_path(&group.file_stem()), content)?);
            }
        }

        if config.index {
            let barrels: Vec<GeneratedFile> = ArtifactKind::ALL
                .iter()
                .map(|kind| GeneratedFile {
                    path: format!("{}/index.ts", kind.dir()),
                    content: emitters::index::emit_index(&unit_stems(&files, *kind)),
                })
                .collect();
            files.extend(barrels);
            files.push(GeneratedFile {
                path: "index.ts".to_string(),
                content: emitters::index::emit_root_index(),
            });
        }

        log::debug!(
            "rendered {} files for {} groups and {} models",
            files.len(),
            ir.groups.len(),
            ir.models.len()
        );
        Ok(files)
    }
}

fn rendered(
    path: String,
    content: Result<String, minijinja::Error>,
) -> Result<GeneratedFile, GeneratorError> {
    match content {
        Ok(content) => Ok(GeneratedFile { path, content }),
        Err(source) => Err(GeneratorError::Render { file: path, source }),
    }
}

/// Sorted, distinct module names (file names without `.ts`) generated
/// directly under `kind`'s directory.
fn unit_stems(files: &[GeneratedFile], kind: ArtifactKind) -> Vec<String> {
    let prefix = format!("{}/", kind.dir());
    files
        .iter()
        .filter_map(|f| f.path.strip_prefix(&prefix))
        .filter_map(|name| name.strip_suffix(".ts"))
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
