//! Payload ingestion
//!
//! The API boundary: raw server JSON goes through normalization and the
//! resulting typed records are dispatched to their tables. Primary
//! records become a `ReceiveList`/`Receive` on the requested table;
//! related records extracted from embeddings become `Receive` actions on
//! their own tables, dispatched after the primaries so companion
//! reducers see parents first.

use indexmap::IndexMap;
use mlboard_entity::{EntityKind, Record, UniqueName};
use mlboard_normalize::{
    normalize_list, normalize_one, normalize_status, NormalizeError, NormalizedBatch,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::actions::{Action, EntityAction, StatusAction};
use crate::app::AppState;

/// Wire shape of list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ListBody {
    /// One result page
    pub results: Vec<Value>,
    /// Total result count across pages
    pub count: u64,
}

/// Ingest a `{results, count}` list body for one entity kind
///
/// # Errors
/// Returns [`IngestError`] when the body does not decode, when any item
/// fails normalization, or when `kind` is [`EntityKind::Status`] (statuses
/// ingest through [`ingest_status_list`]).
pub fn ingest_list(
    state: AppState,
    kind: EntityKind,
    body: Value,
) -> Result<AppState, IngestError> {
    if kind == EntityKind::Status {
        return Err(IngestError::StatusKind);
    }
    let body: ListBody = serde_json::from_value(body).map_err(IngestError::Body)?;
    let list = normalize_list(kind, body.results, body.count)?;
    debug!(
        kind = %kind,
        primaries = list.names.len(),
        count = list.count,
        "ingest list"
    );

    let mut state = state.dispatch(&primary_list_action(kind, &list.batch, &list.names, list.count));
    for action in secondary_actions(kind, &list.batch, &list.names) {
        state = state.dispatch(&action);
    }
    Ok(state)
}

/// Ingest a single-entity payload
///
/// # Errors
/// Same conditions as [`ingest_list`].
pub fn ingest_one(state: AppState, kind: EntityKind, payload: Value) -> Result<AppState, IngestError> {
    if kind == EntityKind::Status {
        return Err(IngestError::StatusKind);
    }
    let (name, batch) = normalize_one(kind, payload)?;
    debug!(kind = %kind, name = %name, "ingest one");

    let names = vec![name];
    let mut state = state;
    if let Some(action) = primary_one_action(kind, &batch, &names) {
        state = state.dispatch(&action);
    }
    for action in secondary_actions(kind, &batch, &names) {
        state = state.dispatch(&action);
    }
    Ok(state)
}

/// Ingest a status list body
///
/// # Errors
/// Returns [`IngestError`] when the body or an item does not decode.
pub fn ingest_status_list(state: AppState, body: Value) -> Result<AppState, IngestError> {
    let body: ListBody = serde_json::from_value(body).map_err(IngestError::Body)?;
    let count = body.count;
    let items = body
        .results
        .into_iter()
        .map(normalize_status)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(state.dispatch(&Action::Status(StatusAction::ReceiveList { items, count })))
}

/// Ingest a single status payload
///
/// # Errors
/// Returns [`IngestError`] when the payload does not decode.
pub fn ingest_status(state: AppState, payload: Value) -> Result<AppState, IngestError> {
    let status = normalize_status(payload)?;
    Ok(state.dispatch(&Action::Status(StatusAction::Receive(status))))
}

fn collect_ordered<R: Record>(table: &IndexMap<UniqueName, R>, names: &[UniqueName]) -> Vec<R> {
    names.iter().filter_map(|name| table.get(name).cloned()).collect()
}

fn collect_rest<R: Record>(table: &IndexMap<UniqueName, R>, skip: &[UniqueName]) -> Vec<R> {
    table
        .values()
        .filter(|record| !skip.contains(record.unique_name()))
        .cloned()
        .collect()
}

fn primary_list_action(
    kind: EntityKind,
    batch: &NormalizedBatch,
    names: &[UniqueName],
    count: u64,
) -> Action {
    match kind {
        EntityKind::Project => Action::Project(EntityAction::ReceiveList {
            items: collect_ordered(&batch.projects, names),
            count,
        }),
        EntityKind::Experiment => Action::Experiment(EntityAction::ReceiveList {
            items: collect_ordered(&batch.experiments, names),
            count,
        }),
        EntityKind::Group => Action::Group(EntityAction::ReceiveList {
            items: collect_ordered(&batch.groups, names),
            count,
        }),
        EntityKind::Job => Action::Job(EntityAction::ReceiveList {
            items: collect_ordered(&batch.jobs, names),
            count,
        }),
        EntityKind::Build => Action::Build(EntityAction::ReceiveList {
            items: collect_ordered(&batch.builds, names),
            count,
        }),
        // Status is filtered at the entry points.
        EntityKind::ExperimentJob | EntityKind::Status => {
            Action::ExperimentJob(EntityAction::ReceiveList {
                items: collect_ordered(&batch.experiment_jobs, names),
                count,
            })
        }
    }
}

fn primary_one_action(
    kind: EntityKind,
    batch: &NormalizedBatch,
    names: &[UniqueName],
) -> Option<Action> {
    // Exactly one primary name; Status is filtered at the entry points.
    match kind {
        EntityKind::Project => one_receive(&batch.projects, names, Action::Project),
        EntityKind::Experiment => one_receive(&batch.experiments, names, Action::Experiment),
        EntityKind::Group => one_receive(&batch.groups, names, Action::Group),
        EntityKind::Job => one_receive(&batch.jobs, names, Action::Job),
        EntityKind::Build => one_receive(&batch.builds, names, Action::Build),
        EntityKind::ExperimentJob | EntityKind::Status => {
            one_receive(&batch.experiment_jobs, names, Action::ExperimentJob)
        }
    }
}

fn one_receive<R: Record>(
    table: &IndexMap<UniqueName, R>,
    names: &[UniqueName],
    wrap: impl Fn(EntityAction<R>) -> Action,
) -> Option<Action> {
    collect_ordered(table, names)
        .pop()
        .map(|item| wrap(EntityAction::Receive(item)))
}

fn secondary_actions(
    primary: EntityKind,
    batch: &NormalizedBatch,
    primary_names: &[UniqueName],
) -> Vec<Action> {
    let skip = |kind: EntityKind| -> &[UniqueName] {
        if kind == primary {
            primary_names
        } else {
            &[]
        }
    };

    let mut actions = Vec::new();
    for record in collect_rest(&batch.projects, skip(EntityKind::Project)) {
        actions.push(Action::Project(EntityAction::Receive(record)));
    }
    for record in collect_rest(&batch.groups, skip(EntityKind::Group)) {
        actions.push(Action::Group(EntityAction::Receive(record)));
    }
    for record in collect_rest(&batch.experiments, skip(EntityKind::Experiment)) {
        actions.push(Action::Experiment(EntityAction::Receive(record)));
    }
    for record in collect_rest(&batch.jobs, skip(EntityKind::Job)) {
        actions.push(Action::Job(EntityAction::Receive(record)));
    }
    for record in collect_rest(&batch.builds, skip(EntityKind::Build)) {
        actions.push(Action::Build(EntityAction::Receive(record)));
    }
    for record in collect_rest(&batch.experiment_jobs, skip(EntityKind::ExperimentJob)) {
        actions.push(Action::ExperimentJob(EntityAction::Receive(record)));
    }
    actions
}

/// Errors produced by ingestion
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The `{results, count}` body did not decode
    #[error("list body did not decode: {0}")]
    Body(#[source] serde_json::Error),

    /// An item failed normalization
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// Statuses must go through the status ingestion entry points
    #[error("statuses are ingested through their own endpoints")]
    StatusKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name(s: &str) -> UniqueName {
        UniqueName::parse(s).unwrap()
    }

    #[test]
    fn list_body_fills_last_fetched() {
        let state = ingest_list(
            AppState::default(),
            EntityKind::Build,
            json!({
                "results": [
                    {"unique_name": "alice.proj1.builds.1"},
                    {"unique_name": "alice.proj1.builds.2"},
                ],
                "count": 5,
            }),
        )
        .unwrap();

        assert_eq!(state.builds.last_fetched.count, 5);
        assert_eq!(state.builds.last_fetched.names.len(), 2);
        assert_eq!(state.builds.unique_names.len(), 2);
    }

    #[test]
    fn embedded_jobs_reach_their_table_and_parent() {
        let state = ingest_one(
            AppState::default(),
            EntityKind::Experiment,
            json!({
                "unique_name": "alice.proj1.4",
                "jobs": [{"unique_name": "alice.proj1.4.7", "role": "master"}],
            }),
        )
        .unwrap();

        assert_eq!(state.experiment_jobs.len(), 1);
        let experiment = state.experiments.get(&name("alice.proj1.4")).unwrap();
        assert_eq!(experiment.jobs, vec![name("alice.proj1.4.7")]);
    }

    #[test]
    fn malformed_body_is_rejected() {
        let result = ingest_list(
            AppState::default(),
            EntityKind::Job,
            json!({"items": []}),
        );
        assert!(matches!(result, Err(IngestError::Body(_))));
    }

    #[test]
    fn status_kind_is_diverted() {
        let result = ingest_list(
            AppState::default(),
            EntityKind::Status,
            json!({"results": [], "count": 0}),
        );
        assert!(matches!(result, Err(IngestError::StatusKind)));

        let state = ingest_status_list(
            AppState::default(),
            json!({"results": [{"id": 1, "status": "created"}], "count": 1}),
        )
        .unwrap();
        assert_eq!(state.statuses.ids, vec![1]);
    }
}
