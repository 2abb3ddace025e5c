//! Field-name translation between the localized domain models and the wire
//! records of each service. One table per entity kind, applied only at the
//! HTTP boundary in [`crate::api`].

use serde_json::{Map, Value};

/// A bidirectional `(domain, wire)` field-name table.
///
/// Keys absent from the table pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldMap {
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.pairs
    }

    pub fn wire_name(&self, domain: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(d, _)| *d == domain)
            .map(|(_, w)| *w)
    }

    pub fn domain_name(&self, wire: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(_, w)| *w == wire)
            .map(|(d, _)| *d)
    }

    /// Renames domain keys to wire keys (request serialization).
    pub fn to_wire(&self, value: Value) -> Value {
        rename_records(value, &|key| self.wire_name(key))
    }

    /// Renames wire keys to domain keys (response deserialization).
    pub fn to_domain(&self, value: Value) -> Value {
        rename_records(value, &|key| self.domain_name(key))
    }
}

/// Renames the top-level keys of a record, or of every record in an array.
fn rename_records(value: Value, lookup: &dyn Fn(&str) -> Option<&'static str>) -> Value {
    match value {
        Value::Object(record) => Value::Object(
            record
                .into_iter()
                .map(|(key, v)| match lookup(&key) {
                    Some(renamed) => (renamed.to_string(), v),
                    None => (key, v),
                })
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(records) => Value::Array(
            records
                .into_iter()
                .map(|record| rename_records(record, lookup))
                .collect(),
        ),
        other => other,
    }
}

pub const DOCUMENT_FIELDS: FieldMap = FieldMap::new(&[
    ("id", "id"),
    ("nombre", "name"),
    ("tipo", "type"),
    ("proyecto", "project"),
    ("version", "version"),
    ("estado", "status"),
    ("creadoPor", "created_by"),
]);

pub const PERSONNEL_FIELDS: FieldMap = FieldMap::new(&[
    ("id", "id"),
    ("nombreCompleto", "nombre_completo"),
    ("rol", "rol"),
    ("especializacion", "especializacion"),
    ("email", "email"),
    ("telefono", "telefono"),
    ("estado", "estado"),
    ("proyectoAsignado", "proyecto_asignado"),
]);

pub const PROJECT_FIELDS: FieldMap = FieldMap::new(&[
    ("id", "id"),
    ("nombre", "name"),
    ("descripcion", "description"),
]);
