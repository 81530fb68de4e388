//! Reads previously exported entity files back from disk.

use crate::entity::Entity;
use crate::error::ExportError;
use std::fs;
use std::path::Path;

/// Checks whether an entity file exists at `path`.
pub fn entity_file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Reads and parses an entity file.
///
/// # Errors
///
/// Returns [`ExportError::Read`] if the file cannot be read and
/// [`ExportError::Parse`] if its content is not valid JSON.
pub fn read_entity_file(path: &Path) -> Result<Entity, ExportError> {
    let content = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
