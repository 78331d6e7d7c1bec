//! Declarative normalization schema
//!
//! Maps each entity kind to its identifying field and the payload fields
//! that embed related entities. The normalizer walks this table; adding a
//! relation is a schema edit, not a code change.

use mlboard_entity::EntityKind;
use once_cell::sync::Lazy;

/// How many referenced entities a relation field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationArity {
    /// Field holds one embedded entity or unique name
    One,
    /// Field holds a list of embedded entities or unique names
    Many,
}

/// A payload field embedding another entity
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    /// Payload field name
    pub field: &'static str,
    /// Kind of the referenced entity
    pub target: EntityKind,
    /// One or many
    pub arity: RelationArity,
}

/// Normalization schema of one entity kind
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// The entity kind
    pub kind: EntityKind,
    /// Identifying payload field (`unique_name`, or `id` for statuses)
    pub key_field: &'static str,
    /// Relation fields to decompose
    pub relations: &'static [Relation],
}

static SCHEMAS: Lazy<Vec<EntitySchema>> = Lazy::new(|| {
    vec![
        EntitySchema {
            kind: EntityKind::Project,
            key_field: "unique_name",
            relations: &[
                Relation {
                    field: "experiments",
                    target: EntityKind::Experiment,
                    arity: RelationArity::Many,
                },
                Relation {
                    field: "groups",
                    target: EntityKind::Group,
                    arity: RelationArity::Many,
                },
                Relation {
                    field: "jobs",
                    target: EntityKind::Job,
                    arity: RelationArity::Many,
                },
                Relation {
                    field: "builds",
                    target: EntityKind::Build,
                    arity: RelationArity::Many,
                },
            ],
        },
        EntitySchema {
            kind: EntityKind::Experiment,
            key_field: "unique_name",
            relations: &[
                Relation {
                    field: "jobs",
                    target: EntityKind::ExperimentJob,
                    arity: RelationArity::Many,
                },
                Relation {
                    field: "experiment_group",
                    target: EntityKind::Group,
                    arity: RelationArity::One,
                },
            ],
        },
        EntitySchema {
            kind: EntityKind::Group,
            key_field: "unique_name",
            relations: &[Relation {
                field: "experiments",
                target: EntityKind::Experiment,
                arity: RelationArity::Many,
            }],
        },
        EntitySchema {
            kind: EntityKind::Job,
            key_field: "unique_name",
            relations: &[],
        },
        EntitySchema {
            kind: EntityKind::Build,
            key_field: "unique_name",
            relations: &[],
        },
        EntitySchema {
            kind: EntityKind::ExperimentJob,
            key_field: "unique_name",
            relations: &[Relation {
                field: "experiment",
                target: EntityKind::Experiment,
                arity: RelationArity::One,
            }],
        },
        EntitySchema {
            kind: EntityKind::Status,
            key_field: "id",
            relations: &[],
        },
    ]
});

// Relation-free fallback; only reachable if a kind is ever missing from
// the table above.
static FALLBACK: EntitySchema = EntitySchema {
    kind: EntityKind::Status,
    key_field: "id",
    relations: &[],
};

/// Look up the schema of an entity kind
#[must_use]
pub fn schema_for(kind: EntityKind) -> &'static EntitySchema {
    SCHEMAS
        .iter()
        .find(|schema| schema.kind == kind)
        .unwrap_or(&FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_schema() {
        for kind in [
            EntityKind::Project,
            EntityKind::Experiment,
            EntityKind::Group,
            EntityKind::Job,
            EntityKind::Build,
            EntityKind::ExperimentJob,
            EntityKind::Status,
        ] {
            assert_eq!(schema_for(kind).kind, kind);
        }
    }

    #[test]
    fn name_keyed_kinds_use_unique_name() {
        assert_eq!(schema_for(EntityKind::Project).key_field, "unique_name");
        assert_eq!(schema_for(EntityKind::Status).key_field, "id");
    }

    #[test]
    fn project_decomposes_all_children() {
        let fields: Vec<_> = schema_for(EntityKind::Project)
            .relations
            .iter()
            .map(|r| r.field)
            .collect();
        assert_eq!(fields, vec!["experiments", "groups", "jobs", "builds"]);
    }
}
