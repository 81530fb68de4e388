//! Error types for entity export operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for export operations.
///
/// Filesystem and JSON variants keep the offending path and the underlying
/// error so callers see the native failure information.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The required entity collection was not supplied.
    #[error("entities have to be passed to be exported")]
    MissingEntities,

    #[error("failed to create export directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read entity file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("entity file {} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize entity {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write entity file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
