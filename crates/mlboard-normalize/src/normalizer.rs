//! Payload normalization
//!
//! Decomposes nested server payloads into flat per-kind tables keyed by
//! unique name. Embedded relation objects are extracted recursively and
//! replaced by the unique name of the referenced entity, so the flat
//! tables form a reference graph with no embedded duplication. No field
//! present in the input is lost: unknown fields land in each record's
//! `extra` map.

use indexmap::IndexMap;
use mlboard_entity::{
    BuildRecord, EntityKind, ExperimentJobRecord, ExperimentRecord, GroupRecord, JobRecord,
    NameError, ProjectRecord, Record, StatusRecord, UniqueName,
};
use serde_json::Value;

use crate::schema::{schema_for, RelationArity};

/// Flat per-kind tables produced by one normalization pass
#[derive(Debug, Default, Clone)]
pub struct NormalizedBatch {
    /// Projects keyed by unique name
    pub projects: IndexMap<UniqueName, ProjectRecord>,
    /// Experiments keyed by unique name
    pub experiments: IndexMap<UniqueName, ExperimentRecord>,
    /// Groups keyed by unique name
    pub groups: IndexMap<UniqueName, GroupRecord>,
    /// Jobs keyed by unique name
    pub jobs: IndexMap<UniqueName, JobRecord>,
    /// Builds keyed by unique name
    pub builds: IndexMap<UniqueName, BuildRecord>,
    /// Experiment jobs keyed by unique name
    pub experiment_jobs: IndexMap<UniqueName, ExperimentJobRecord>,
}

impl NormalizedBatch {
    /// Whether the pass produced no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
            && self.experiments.is_empty()
            && self.groups.is_empty()
            && self.jobs.is_empty()
            && self.builds.is_empty()
            && self.experiment_jobs.is_empty()
    }
}

// Upsert-merge within one pass so duplicate embeddings of the same
// entity collapse into a single record.
fn upsert<R: Record>(table: &mut IndexMap<UniqueName, R>, record: R) {
    match table.get_mut(record.unique_name()) {
        Some(existing) => existing.merge_from(record),
        None => {
            table.insert(record.unique_name().clone(), record);
        }
    }
}

/// Result of normalizing a `{results, count}` list body
#[derive(Debug, Default, Clone)]
pub struct NormalizedList {
    /// All extracted records
    pub batch: NormalizedBatch,
    /// Unique names of the primary entities, in payload order
    pub names: Vec<UniqueName>,
    /// Total count reported by the server (not the page length)
    pub count: u64,
}

/// Normalize one payload of the given kind
///
/// Returns the primary entity's unique name and the flat batch holding it
/// together with every extracted related record.
///
/// # Errors
/// Returns [`NormalizeError`] when the payload is not an object, lacks the
/// identifying field, carries a malformed unique name, or does not decode
/// into the typed record.
pub fn normalize_one(
    kind: EntityKind,
    payload: Value,
) -> Result<(UniqueName, NormalizedBatch), NormalizeError> {
    if kind == EntityKind::Status {
        return Err(NormalizeError::NotNameKeyed(kind));
    }
    let mut batch = NormalizedBatch::default();
    let name = normalize_into(&mut batch, kind, payload)?;
    Ok((name, batch))
}

/// Normalize a list body's items, preserving payload order
///
/// # Errors
/// Fails on the first malformed item, per [`normalize_one`].
pub fn normalize_list(
    kind: EntityKind,
    items: Vec<Value>,
    count: u64,
) -> Result<NormalizedList, NormalizeError> {
    if kind == EntityKind::Status {
        return Err(NormalizeError::NotNameKeyed(kind));
    }
    let mut list = NormalizedList {
        count,
        ..NormalizedList::default()
    };
    for item in items {
        let name = normalize_into(&mut list.batch, kind, item)?;
        if !list.names.contains(&name) {
            list.names.push(name);
        }
    }
    Ok(list)
}

/// Decode a status payload (statuses are flat and id-keyed)
///
/// # Errors
/// Returns [`NormalizeError::Decode`] when the payload does not decode.
pub fn normalize_status(payload: Value) -> Result<StatusRecord, NormalizeError> {
    serde_json::from_value(payload).map_err(|source| NormalizeError::Decode {
        kind: EntityKind::Status,
        source,
    })
}

fn normalize_into(
    batch: &mut NormalizedBatch,
    kind: EntityKind,
    payload: Value,
) -> Result<UniqueName, NormalizeError> {
    let schema = schema_for(kind);
    let Value::Object(mut object) = payload else {
        return Err(NormalizeError::NotAnObject { kind });
    };

    // Decompose relation fields first so the remaining object is flat.
    for relation in schema.relations {
        let Some(value) = object.get_mut(relation.field) else {
            continue;
        };
        match relation.arity {
            RelationArity::One => {
                if value.is_object() {
                    let embedded = value.take();
                    let name = normalize_into(batch, relation.target, embedded)?;
                    *value = Value::String(name.to_string());
                } else if !value.is_string() && !value.is_null() {
                    return Err(NormalizeError::BadRelation {
                        kind,
                        field: relation.field,
                    });
                }
            }
            RelationArity::Many => {
                if value.is_null() {
                    continue;
                }
                let Value::Array(entries) = value else {
                    return Err(NormalizeError::BadRelation {
                        kind,
                        field: relation.field,
                    });
                };
                for entry in entries {
                    if entry.is_object() {
                        let embedded = entry.take();
                        let name = normalize_into(batch, relation.target, embedded)?;
                        *entry = Value::String(name.to_string());
                    } else if !entry.is_string() {
                        return Err(NormalizeError::BadRelation {
                            kind,
                            field: relation.field,
                        });
                    }
                }
            }
        }
    }

    let raw_name = object
        .get(schema.key_field)
        .and_then(Value::as_str)
        .ok_or(NormalizeError::MissingKey {
            kind,
            field: schema.key_field,
        })?;
    let name = UniqueName::parse_for(kind, raw_name)?;

    let flat = Value::Object(object);
    match kind {
        EntityKind::Project => decode_into(&mut batch.projects, kind, flat)?,
        EntityKind::Experiment => decode_into(&mut batch.experiments, kind, flat)?,
        EntityKind::Group => decode_into(&mut batch.groups, kind, flat)?,
        EntityKind::Job => decode_into(&mut batch.jobs, kind, flat)?,
        EntityKind::Build => decode_into(&mut batch.builds, kind, flat)?,
        EntityKind::ExperimentJob => decode_into(&mut batch.experiment_jobs, kind, flat)?,
        EntityKind::Status => return Err(NormalizeError::NotNameKeyed(kind)),
    }
    Ok(name)
}

fn decode_into<R: Record>(
    table: &mut IndexMap<UniqueName, R>,
    kind: EntityKind,
    flat: Value,
) -> Result<(), NormalizeError> {
    let record: R =
        serde_json::from_value(flat).map_err(|source| NormalizeError::Decode { kind, source })?;
    upsert(table, record);
    Ok(())
}

/// Errors produced by normalization
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// Payload is not a JSON object
    #[error("{kind} payload is not an object")]
    NotAnObject {
        /// Kind being normalized
        kind: EntityKind,
    },

    /// Identifying field missing or not a string
    #[error("{kind} payload is missing identifying field '{field}'")]
    MissingKey {
        /// Kind being normalized
        kind: EntityKind,
        /// The expected identifying field
        field: &'static str,
    },

    /// Relation field holds an unexpected shape
    #[error("{kind} relation field '{field}' is neither names nor embedded objects")]
    BadRelation {
        /// Kind being normalized
        kind: EntityKind,
        /// The offending relation field
        field: &'static str,
    },

    /// Kind cannot be normalized through unique names
    #[error("{0} is not keyed by unique name")]
    NotNameKeyed(EntityKind),

    /// Unique name failed validation
    #[error(transparent)]
    BadName(#[from] NameError),

    /// Flat payload did not decode into the typed record
    #[error("{kind} payload did not decode: {source}")]
    Decode {
        /// Kind being normalized
        kind: EntityKind,
        /// Underlying decode error
        source: serde_json::Error,
    },
}
