use super::ArtifactKind;

/// Emit a directory barrel re-exporting `stems` (file names without `.ts`).
/// An empty directory still gets a valid module.
pub fn emit_index(stems: &[String]) -> String {
    if stems.is_empty() {
        return "export {};\n".to_string();
    }
    stems
        .iter()
        .map(|stem| format!("export * from './{stem}';\n"))
        .collect()
}

/// Emit the root barrel re-exporting every artifact directory.
pub fn emit_root_index() -> String {
    ArtifactKind::ALL
        .iter()
        .map(|kind| format!("export * from './{}';\n", kind.dir()))
        .collect()
}
