//! Companion reducers maintaining parent back-references
//!
//! These react to another table's receive actions to keep a parent
//! record's child-name list current, with the same idempotent-insert
//! rule as the primary reducers. All other actions are no-ops returning
//! the unchanged state.

use mlboard_entity::{ExperimentJobRecord, ExperimentRecord, GroupRecord};
use tracing::warn;

use crate::actions::{EntityAction, ExperimentAction, ExperimentJobAction};
use crate::table::{push_unique, EntityTable};

/// Maintain experiments' `jobs` lists from experiment-job receive actions
#[must_use]
pub fn jobs_into_experiments(
    mut state: EntityTable<ExperimentRecord>,
    action: &ExperimentJobAction,
) -> EntityTable<ExperimentRecord> {
    match action {
        EntityAction::Receive(item) => {
            attach_job(&mut state, item);
            state
        }
        EntityAction::ReceiveList { items, .. } => {
            for item in items {
                attach_job(&mut state, item);
            }
            state
        }
        _ => state,
    }
}

fn attach_job(state: &mut EntityTable<ExperimentRecord>, item: &ExperimentJobRecord) {
    let experiment_name = match item.owning_experiment() {
        Ok(name) => name,
        Err(error) => {
            warn!(job = %item.unique_name, %error, "cannot derive owning experiment");
            return;
        }
    };
    // Back-references only attach to experiments already in the store.
    if !state.unique_names.contains(&experiment_name) {
        return;
    }
    if let Some(experiment) = state.by_unique_name.get_mut(&experiment_name) {
        push_unique(&mut experiment.jobs, &item.unique_name);
    }
}

/// Maintain groups' `experiments` lists from experiment receive actions
#[must_use]
pub fn experiments_into_groups(
    mut state: EntityTable<GroupRecord>,
    action: &ExperimentAction,
) -> EntityTable<GroupRecord> {
    match action {
        EntityAction::Receive(item) => {
            attach_experiment(&mut state, item);
            state
        }
        EntityAction::ReceiveList { items, .. } => {
            for item in items {
                attach_experiment(&mut state, item);
            }
            state
        }
        _ => state,
    }
}

fn attach_experiment(state: &mut EntityTable<GroupRecord>, item: &ExperimentRecord) {
    let Some(group_name) = &item.experiment_group else {
        // Independent experiments belong to no group.
        return;
    };
    if !state.unique_names.contains(group_name) {
        return;
    }
    if let Some(group) = state.by_unique_name.get_mut(group_name) {
        push_unique(&mut group.experiments, &item.unique_name);
    }
}
