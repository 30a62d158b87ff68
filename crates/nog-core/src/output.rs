use std::fs;
use std::path::Path;

use crate::GeneratedFile;
use crate::error::WriteError;

/// Write generated files under `base`, creating parent directories as
/// needed. Existing files are overwritten. Returns the number of files
/// written.
///
/// Writes are not transactional: on error, files written so far stay on disk.
pub fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<usize, WriteError> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &file.content).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {}", path.display());
    }
    Ok(files.len())
}
