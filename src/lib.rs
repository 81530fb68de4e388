//! Exports entity definitions to per-entity JSON files.
//!
//! One file per entity is written to a `.jhipster/` directory, pretty-printed
//! with 4-space indentation. Re-exports preserve the `changelogDate` a file
//! was first written with, and entities whose content already matches disk
//! are skipped unless explicitly forced.

pub mod comparison;
pub mod deprecation;
pub mod entity;
pub mod error;
pub mod export_paths;
pub mod exporter;
pub mod reader;

pub use entity::{Entity, EntityCollection};
pub use error::ExportError;
pub use exporter::{export_entities, filter_out_unchanged_entities, ExportConfiguration};
