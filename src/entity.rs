//! Entity data model for export.
//!
//! An entity is a free-form JSON object keyed by field name. The only field
//! this crate interprets is `changelogDate`, an opaque timestamp string set
//! on first export and preserved across later re-exports.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The managed timestamp field preserved across re-exports.
pub const CHANGELOG_DATE_KEY: &str = "changelogDate";

/// A named structured record representing a domain model definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity {
    fields: Map<String, Value>,
}

/// Entity definitions keyed by entity name.
///
/// A `BTreeMap` keeps iteration in key order, so export output is
/// deterministic for a given collection.
pub type EntityCollection = BTreeMap<String, Entity>;

impl Entity {
    /// Builds an entity from raw field/value pairs.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the changelog date, if the entity carries one as a string.
    pub fn changelog_date(&self) -> Option<&str> {
        self.fields.get(CHANGELOG_DATE_KEY).and_then(Value::as_str)
    }

    /// Sets the changelog date, replacing any existing value.
    pub fn set_changelog_date(&mut self, date: &str) {
        self.fields
            .insert(CHANGELOG_DATE_KEY.to_string(), Value::String(date.to_string()));
    }

    /// Stamps a freshly generated changelog date if none is present yet.
    ///
    /// Entities that already carry a date are left untouched.
    pub fn stamp_changelog_date(&mut self) {
        if self.changelog_date().is_none() {
            let date = next_changelog_date();
            self.set_changelog_date(&date);
        }
    }

    /// Returns a field value by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Sets a field value, replacing any existing one.
    pub fn set(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }

    /// Returns the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields)
    }
}

/// Returns a changelog date for entities created now.
///
/// Uses the `YYYYMMDDHHMMSS` format (UTC) that generated changelogs expect.
pub fn next_changelog_date() -> String {
    Utc::now().format("%Y%m%d%H%M%S").to_string()
}
