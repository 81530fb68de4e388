//! On-disk layout for exported entity definitions.
//!
//! Exported entities live in a `.jhipster/` subdirectory of the working
//! directory, one JSON file per entity: `.jhipster/<EntityName>.json`.
//! Entity names are unique within a collection, so the name-to-path mapping
//! is injective.

use crate::error::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory that stores exported entity files.
pub const EXPORT_DIR: &str = ".jhipster";

/// Returns the export directory under `base_dir`.
pub fn export_dir(base_dir: &Path) -> PathBuf {
    base_dir.join(EXPORT_DIR)
}

/// Returns the file path for an entity name: `<base_dir>/.jhipster/<name>.json`.
pub fn entity_file_path(base_dir: &Path, entity_name: &str) -> PathBuf {
    export_dir(base_dir).join(format!("{}.json", entity_name))
}

/// Ensures the export directory exists, creating it if absent.
///
/// An existing directory is left untouched. Anything else in the way (a
/// missing path, or a non-directory at the path) goes through creation, and
/// creation failures propagate as [`ExportError::CreateDir`].
pub fn ensure_export_dir(base_dir: &Path) -> Result<PathBuf, ExportError> {
    let dir = export_dir(base_dir);
    if !dir.is_dir() {
        fs::create_dir_all(&dir).map_err(|source| ExportError::CreateDir {
            path: dir.clone(),
            source,
        })?;
    }
    Ok(dir)
}
