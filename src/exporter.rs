//! Entity export service.
//!
//! Writes entity definitions to `.jhipster/<EntityName>.json`, one file per
//! entity, pretty-printed with 4-space indentation.
//!
//! Two behaviors beyond the plain write:
//!
//! - **Unchanged-entity filtering**: entities whose on-disk file already
//!   matches their definition are skipped and dropped from the returned
//!   collection, unless `force_no_filtering` is set.
//! - **Changelog date preservation**: a `changelogDate` already on disk
//!   always wins over the one supplied by the caller, so the original
//!   creation marker survives re-exports.
//!
//! Exports are synchronous and fail fast: the first filesystem or JSON error
//! aborts the remaining writes, and files written before the failure stay on
//! disk.

use crate::comparison::entities_equal;
use crate::deprecation;
use crate::entity::{Entity, EntityCollection};
use crate::error::ExportError;
use crate::export_paths;
use crate::reader;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Input to [`export_entities`].
///
/// Treated as an immutable value: filtering never mutates the caller's
/// collection, the filtered result is returned instead.
#[derive(Debug, Clone, Default)]
pub struct ExportConfiguration {
    /// The entities to export. Required; `None` fails the export.
    pub entities: Option<EntityCollection>,
    /// Rewrites every entity file even when its content is unchanged.
    pub force_no_filtering: bool,
}

impl ExportConfiguration {
    /// Builds a configuration with filtering enabled.
    pub fn new(entities: EntityCollection) -> Self {
        Self {
            entities: Some(entities),
            force_no_filtering: false,
        }
    }
}

/// Exports the configured entities under the current working directory.
///
/// See [`export_entities_in`] for the full contract.
pub fn export_entities(
    configuration: &ExportConfiguration,
) -> Result<EntityCollection, ExportError> {
    export_entities_in(Path::new("."), configuration)
}

/// Exports the configured entities to `<base_dir>/.jhipster/`.
///
/// Returns the entities that were written, with each `changelogDate`
/// reflecting the on-disk value where a file already existed. Entities
/// dropped by the unchanged filter are absent from the returned collection.
///
/// # Errors
///
/// Fails with [`ExportError::MissingEntities`] before any side effect if
/// `entities` is `None`. Otherwise the first directory, read, parse, or
/// write failure aborts the export; there is no rollback of files already
/// written.
pub fn export_entities_in(
    base_dir: &Path,
    configuration: &ExportConfiguration,
) -> Result<EntityCollection, ExportError> {
    let entities = configuration
        .entities
        .as_ref()
        .ok_or(ExportError::MissingEntities)?;

    export_paths::ensure_export_dir(base_dir)?;

    let total = entities.len();
    let entities = if configuration.force_no_filtering {
        entities.clone()
    } else {
        filter_out_unchanged_entities_in(base_dir, entities)?
    };

    let mut exported = EntityCollection::new();
    for (name, entity) in &entities {
        let file_path = export_paths::entity_file_path(base_dir, name);
        let entity = update_changelog_date(&file_path, entity.clone())?;
        let json = to_pretty_json(name, &entity)?;
        fs::write(&file_path, json).map_err(|source| ExportError::Write {
            path: file_path.clone(),
            source,
        })?;
        tracing::debug!("Wrote entity file {}", file_path.display());
        exported.insert(name.clone(), entity);
    }

    tracing::info!(
        "Exported {} entities, skipped {} unchanged",
        exported.len(),
        total - exported.len()
    );
    Ok(exported)
}

/// Exports the passed entities to JSON.
///
/// Legacy positional-argument form of [`export_entities`]; emits a runtime
/// deprecation notice and delegates.
#[deprecated(note = "use export_entities instead")]
pub fn export_to_json(
    entities: Option<EntityCollection>,
    force_no_filtering: bool,
) -> Result<EntityCollection, ExportError> {
    deprecation::warn_deprecated_method("export_to_json", "export_entities");
    export_entities(&ExportConfiguration {
        entities,
        force_no_filtering,
    })
}

/// Current-working-directory counterpart of
/// [`filter_out_unchanged_entities_in`].
pub fn filter_out_unchanged_entities(
    entities: &EntityCollection,
) -> Result<EntityCollection, ExportError> {
    filter_out_unchanged_entities_in(Path::new("."), entities)
}

/// Drops entities whose on-disk file already matches their definition.
///
/// An entity survives when no file exists under its name or when the on-disk
/// content differs per [`entities_equal`]. Dropped entities signal a no-op:
/// they are neither rewritten nor returned.
pub fn filter_out_unchanged_entities_in(
    base_dir: &Path,
    entities: &EntityCollection,
) -> Result<EntityCollection, ExportError> {
    let mut filtered = EntityCollection::new();
    for (name, entity) in entities {
        let file_path = export_paths::entity_file_path(base_dir, name);
        if reader::entity_file_exists(&file_path) {
            let on_disk = reader::read_entity_file(&file_path)?;
            if entities_equal(&on_disk, entity) {
                tracing::debug!("Skipping unchanged entity {}", name);
                continue;
            }
        }
        filtered.insert(name.clone(), entity.clone());
    }
    Ok(filtered)
}

/// Replaces the entity's changelog date with the one already on disk, if any.
fn update_changelog_date(file_path: &Path, mut entity: Entity) -> Result<Entity, ExportError> {
    if reader::entity_file_exists(file_path) {
        let on_disk = reader::read_entity_file(file_path)?;
        if let Some(date) = on_disk.changelog_date() {
            entity.set_changelog_date(date);
        }
    }
    Ok(entity)
}

/// Serializes an entity as pretty-printed JSON with 4-space indentation.
fn to_pretty_json(name: &str, entity: &Entity) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entity
        .serialize(&mut serializer)
        .map_err(|source| ExportError::Serialize {
            name: name.to_string(),
            source,
        })?;
    Ok(buf)
}

#[cfg(test)]
#[path = "exporter_tests.rs"]
mod tests;
