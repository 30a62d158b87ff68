pub mod config;
pub mod error;
pub mod ir;
pub mod output;
pub mod parse;
pub mod transform;

/// A generated file. `path` is relative to the output directory and uses `/`
/// separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Turns the IR into a set of files. Implementations are pure; writing is
/// left to [`output::write_files`].
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        ir: &ir::IrSpec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
